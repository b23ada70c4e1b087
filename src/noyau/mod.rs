//! Noyau exact π (série BBP, rationnels exacts)
//!
//! Organisation interne :
//! - erreur.rs     : taxonomie d’erreurs + codes de sortie
//! - formule.rs    : BBP16 / Bellard / Algo3 (tables exactes)
//! - terme.rs      : composante, puissance échelonnée, term(k)
//! - serie.rs      : somme pure sur une plage [debut, debut+nombre)
//! - partition.rs  : découpage plafond ceil(tours/travailleurs)
//! - reduction.rs  : fork-join structuré + pliage exact
//! - extraction.rs : floor(r·base^chiffres) + lecture avec point
//! - config.rs     : configuration immuable validée
//! - calcul.rs     : pipeline complet

pub mod calcul;
pub mod config;
pub mod erreur;
pub mod extraction;
pub mod formule;
pub mod partition;
pub mod reduction;
pub mod serie;
pub mod terme;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use calcul::calculer;
pub use config::Config;
pub use erreur::{ErreurPi, Resultat};
pub use formule::Formule;
