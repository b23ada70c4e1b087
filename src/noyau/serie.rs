// src/noyau/serie.rs
//
// Sommation d’une plage d’indices [debut, debut+nombre)
// -----------------------------------------------------
// Fonction pure : l’accumulateur naît ici à 0/1, l’appelant ne le fournit jamais.
// Aucun état partagé => exécutable en parallèle avec n’importe quelle autre somme.

use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::{ErreurPi, Resultat};
use super::formule::Formule;
use super::terme::evaluer_terme;

/// Plage d’indices confiée à un travailleur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniteTravail {
    pub debut: u64,
    pub nombre: u64,
    pub formule: Formule,
}

impl UniteTravail {
    /// Borne haute exclue. None si `debut + nombre` déborde.
    pub fn fin(&self) -> Option<u64> {
        self.debut.checked_add(self.nombre)
    }
}

/// Σ term(k) pour k ∈ [debut, debut+nombre). `nombre = 0` => 0/1.
pub fn somme_serie(unite: &UniteTravail) -> Resultat<BigRational> {
    let fin = unite.fin().ok_or(ErreurPi::IndiceTropGrand {
        indice: unite.debut,
    })?;

    // résolue même pour une plage vide : Algo3 ne contribue jamais un zéro silencieux
    let def = unite.formule.definition()?;

    let mut somme = BigRational::zero();
    for k in unite.debut..fin {
        somme += evaluer_terme(&def, k)?;
    }

    Ok(somme)
}
