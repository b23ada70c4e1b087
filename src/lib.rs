//! pipi — décimales de π par série BBP exacte.
//!
//! - noyau : évaluation exacte des termes, partition, fork-join, extraction
//! - app   : collaborateur CLI (arguments, journal, reprise unique)

pub mod app;
pub mod noyau;

// API publique minimale
pub use noyau::{calculer, Config, ErreurPi, Formule, Resultat};
