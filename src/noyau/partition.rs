// src/noyau/partition.rs
//
// Découpage des tours en plages contiguës de taille égale
// -------------------------------------------------------
// par_travailleur = ceil(tours / travailleurs)
// travailleur i   = [i·par_travailleur, (i+1)·par_travailleur)
//
// L’union couvre [0, travailleurs·par_travailleur) : un sur-ensemble de [0, tours)
// quand la division n’est pas exacte (quelques termes convergents en plus).

use super::erreur::{ErreurPi, Resultat};
use super::formule::Formule;
use super::serie::UniteTravail;

/// ceil(tours / travailleurs). travailleurs = 0 => erreur de configuration.
pub fn tours_par_travailleur(tours: u64, travailleurs: usize) -> Resultat<u64> {
    if travailleurs == 0 {
        return Err(ErreurPi::configuration(
            "threads",
            travailleurs,
            "au moins un travailleur est requis",
        ));
    }
    let n = u64::try_from(travailleurs)
        .map_err(|_| ErreurPi::configuration("threads", travailleurs, "hors plage"))?;
    Ok(tours.div_ceil(n))
}

/// Nombre total de termes réellement sommés (≥ tours).
pub fn termes_couverts(tours: u64, travailleurs: usize) -> Resultat<u64> {
    let par = tours_par_travailleur(tours, travailleurs)?;
    par.checked_mul(travailleurs as u64)
        .ok_or(ErreurPi::IndiceTropGrand { indice: tours })
}

pub fn partitionner(
    tours: u64,
    travailleurs: usize,
    formule: Formule,
) -> Resultat<Vec<UniteTravail>> {
    let par = tours_par_travailleur(tours, travailleurs)?;
    // vérifie aussi que la dernière borne tient sur u64
    termes_couverts(tours, travailleurs)?;

    let unites = (0..travailleurs as u64)
        .map(|i| UniteTravail {
            debut: i * par,
            nombre: par,
            formule,
        })
        .collect();

    Ok(unites)
}
