//! Noyau — calcul complet (pipeline réel)
//!
//! Config -> partition -> fork-join (somme_serie ×N) -> pliage exact
//!        -> échelle globale (Bellard : 1/64) -> extraction floor(r·base^chiffres)
//!
//! La démarche (unités, termes sommés, durée) est rendue à côté du résultat,
//! pour le journal du collaborateur.

use std::time::{Duration, Instant};

use num_rational::BigRational;

use super::config::Config;
use super::erreur::Resultat;
use super::extraction::{extraire_entier, inserer_point};
use super::partition::{partitionner, termes_couverts};
use super::reduction::reduire_parallele;

#[derive(Default, Clone, Debug)]
pub struct Demarche {
    pub formule: String,
    pub unites: usize,
    pub tours_demandes: u64,
    pub termes_sommes: u64,
    pub duree: Duration,
}

/// Somme exacte de la série, échelle globale comprise.
pub fn somme_pi(config: &Config) -> Resultat<BigRational> {
    let formule = config.formule();
    let unites = partitionner(config.tours(), config.travailleurs(), formule)?;
    tracing::debug!(unites = unites.len(), "partition prête");
    let somme = reduire_parallele(&unites)?;
    Ok(somme * formule.echelle_globale()?)
}

/// API publique : renvoie
/// - les chiffres bruts floor(π·base^chiffres) en base `base` (sans point)
/// - la même valeur avec le point inséré
/// - la démarche
pub fn calculer(config: &Config) -> Resultat<(String, String, Demarche)> {
    let t0 = Instant::now();
    let formule = config.formule();

    // 1) Partition + fork-join + pliage, puis échelle globale
    let somme = somme_pi(config)?;
    let termes_sommes = termes_couverts(config.tours(), config.travailleurs())?;

    // 2) Extraction
    let scaled = extraire_entier(&somme, config.chiffres(), config.base());
    let chiffres = scaled.to_str_radix(config.base());
    let lecture = inserer_point(scaled, config.chiffres(), config.base())?;

    let d = Demarche {
        formule: formule.to_string(),
        unites: config.travailleurs(),
        tours_demandes: config.tours(),
        termes_sommes,
        duree: t0.elapsed(),
    };

    tracing::info!(
        formule = %d.formule,
        travailleurs = d.unites,
        termes = d.termes_sommes,
        duree_ms = d.duree.as_millis() as u64,
        "calcul terminé"
    );

    Ok((chiffres, lecture, d))
}
