//! Configuration immuable d’un calcul.
//!
//! Construite une seule fois par le collaborateur (CLI), validée ici, puis passée
//! par référence au pipeline. Aucun état global.
//!
//! Garde-fous (anti-gel) : les exposants de la série et de l’extraction passent
//! par `BigInt::pow(u32)`, d’où des bornes documentées bien en-deçà de u32.

use super::erreur::{ErreurPi, Resultat};
use super::formule::Formule;
use super::partition::termes_couverts;

pub const BASE_MIN: u32 = 2;
/// Limite de `BigInt::to_str_radix`.
pub const BASE_MAX: u32 = 36;

pub const CHIFFRES_DEFAUT: u32 = 64;
pub const CHIFFRES_MAX: u32 = 1_000_000;

/// Termes réellement sommés (travailleurs × ceil(tours/travailleurs)).
pub const TOURS_MAX: u64 = 1_000_000;

pub const TRAVAILLEURS_MAX: usize = 1024;

/// Tours par défaut : chiffres − 1 (0 si chiffres = 0).
pub fn tours_par_defaut(chiffres: u32) -> u64 {
    u64::from(chiffres.saturating_sub(1))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    chiffres: u32,
    base: u32,
    travailleurs: usize,
    tours: u64,
    formule: Formule,
}

impl Config {
    pub fn nouveau(
        chiffres: u32,
        base: u32,
        travailleurs: usize,
        tours: u64,
        formule: Formule,
    ) -> Resultat<Self> {
        if travailleurs == 0 {
            return Err(ErreurPi::configuration(
                "threads",
                travailleurs,
                "au moins un travailleur est requis",
            ));
        }
        if travailleurs > TRAVAILLEURS_MAX {
            return Err(ErreurPi::configuration(
                "threads",
                travailleurs,
                format!("au plus {TRAVAILLEURS_MAX} travailleurs"),
            ));
        }
        super::extraction::verifier_base(base)?;
        if chiffres > CHIFFRES_MAX {
            return Err(ErreurPi::configuration(
                "digits",
                chiffres,
                format!("au plus {CHIFFRES_MAX} chiffres"),
            ));
        }

        // Algo3 : refusé ici, avant tout lancement de travailleur
        formule.definition()?;

        let couverts = termes_couverts(tours, travailleurs)?;
        if couverts > TOURS_MAX {
            return Err(ErreurPi::configuration(
                "rounds",
                tours,
                format!("{couverts} termes à sommer, au plus {TOURS_MAX}"),
            ));
        }

        Ok(Self {
            chiffres,
            base,
            travailleurs,
            tours,
            formule,
        })
    }

    pub fn chiffres(&self) -> u32 {
        self.chiffres
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn travailleurs(&self) -> usize {
        self.travailleurs
    }

    pub fn tours(&self) -> u64 {
        self.tours
    }

    pub fn formule(&self) -> Formule {
        self.formule
    }
}
