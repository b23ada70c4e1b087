// src/noyau/reduction.rs
//
// Fork-join structuré : un thread nommé par unité, barrière, puis pliage exact.
// - lancement impossible  => LancementTravailleur (calcul entier abandonné)
// - erreur d’un travailleur => remontée telle quelle (la première rencontrée)
// - panic d’un travailleur  => TravailleurInterrompu
// Aucune contribution n’est jamais ignorée.

use std::thread;
use std::time::Instant;

use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::{ErreurPi, Resultat};
use super::serie::{somme_serie, UniteTravail};

/// Somme exacte des résultats partiels (l’ordre n’a aucune influence).
pub fn combiner<I>(partielles: I) -> BigRational
where
    I: IntoIterator<Item = BigRational>,
{
    partielles
        .into_iter()
        .fold(BigRational::zero(), |acc, p| acc + p)
}

/// Lance `somme_serie` sur chaque unité, attend tout le monde, renvoie les
/// sommes partielles dans l’ordre des unités.
pub fn sommes_partielles(unites: &[UniteTravail]) -> Resultat<Vec<BigRational>> {
    thread::scope(|s| -> Resultat<Vec<BigRational>> {
        let mut poignees = Vec::with_capacity(unites.len());

        for (indice, unite) in unites.iter().enumerate() {
            let poignee = thread::Builder::new()
                .name(format!("pipi-travailleur-{indice}"))
                .spawn_scoped(s, move || {
                    let t0 = Instant::now();
                    let r = somme_serie(unite);
                    tracing::debug!(
                        travailleur = indice,
                        debut = unite.debut,
                        nombre = unite.nombre,
                        duree_ms = t0.elapsed().as_millis() as u64,
                        ok = r.is_ok(),
                        "plage sommée"
                    );
                    r
                })
                // les travailleurs déjà lancés sont joints par la sortie du scope
                .map_err(|source| ErreurPi::LancementTravailleur { indice, source })?;
            poignees.push((indice, poignee));
        }

        poignees
            .into_iter()
            .map(|(indice, poignee)| match poignee.join() {
                Ok(r) => r,
                Err(_) => Err(ErreurPi::TravailleurInterrompu { indice }),
            })
            .collect()
    })
}

/// Réduction parallèle complète : fork-join puis pliage séquentiel.
pub fn reduire_parallele(unites: &[UniteTravail]) -> Resultat<BigRational> {
    let partielles = sommes_partielles(unites)?;
    tracing::debug!(partielles = partielles.len(), "pliage des sommes partielles");
    Ok(combiner(partielles))
}
