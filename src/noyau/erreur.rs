// src/noyau/erreur.rs
//
// Taxonomie d’erreurs du noyau
// ----------------------------
// - Configuration : détectée avant tout lancement de travailleur
// - Travailleur   : lancement impossible ou travailleur interrompu (panic)
// - Arithmétique  : exposant hors de la plage machine (u32)
//
// Aucune erreur n’est avalée ni réessayée ici : le collaborateur (CLI) décide.

use std::io;

use thiserror::Error;

pub type Resultat<T> = std::result::Result<T, ErreurPi>;

#[derive(Error, Debug)]
pub enum ErreurPi {
    #[error("configuration invalide ({champ} = {valeur}) : {raison}")]
    Configuration {
        champ: &'static str,
        valeur: String,
        raison: String,
    },

    #[error("formule non supportée : {nom}")]
    FormuleNonSupportee { nom: String },

    #[error("impossible de lancer le travailleur {indice} : {source}")]
    LancementTravailleur {
        indice: usize,
        #[source]
        source: io::Error,
    },

    #[error("le travailleur {indice} s’est interrompu avant la fin")]
    TravailleurInterrompu { indice: usize },

    #[error("indice de série trop grand : {indice}")]
    IndiceTropGrand { indice: u64 },

    #[error("exposant trop grand : {base}^{exposant}")]
    ExposantTropGrand { base: u64, exposant: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Categorie {
    Configuration,
    Travailleur,
    Arithmetique,
}

impl ErreurPi {
    /// Raccourci pour les erreurs de configuration (champ + valeur fautive).
    pub fn configuration(
        champ: &'static str,
        valeur: impl ToString,
        raison: impl Into<String>,
    ) -> Self {
        ErreurPi::Configuration {
            champ,
            valeur: valeur.to_string(),
            raison: raison.into(),
        }
    }

    pub fn categorie(&self) -> Categorie {
        match self {
            ErreurPi::Configuration { .. } | ErreurPi::FormuleNonSupportee { .. } => {
                Categorie::Configuration
            }
            ErreurPi::LancementTravailleur { .. } | ErreurPi::TravailleurInterrompu { .. } => {
                Categorie::Travailleur
            }
            ErreurPi::IndiceTropGrand { .. } | ErreurPi::ExposantTropGrand { .. } => {
                Categorie::Arithmetique
            }
        }
    }

    /// Code de sortie du processus (0 réservé au succès).
    /// 2 = configuration (aligné sur les erreurs d’usage de clap).
    pub fn code_sortie(&self) -> i32 {
        match self {
            ErreurPi::Configuration { .. } | ErreurPi::FormuleNonSupportee { .. } => 2,
            ErreurPi::LancementTravailleur { .. } => 3,
            ErreurPi::IndiceTropGrand { .. } | ErreurPi::ExposantTropGrand { .. } => 4,
            ErreurPi::TravailleurInterrompu { .. } => 5,
        }
    }
}
