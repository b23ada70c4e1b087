//! Tests scientifiques (campagne) : propriétés du calcul de π.
//!
//! But : vérifier les invariants du noyau sans faire chauffer la machine.
//! - tours et chiffres bornés (convergence atteinte, calcul court)
//! - valeurs de référence connues (base 10, 16, 2)
//!
//! Repères de convergence :
//! - BBP16 gagne ≈ 1,2 chiffre décimal par terme (16^-k)
//! - Bellard gagne ≈ 3 chiffres décimaux par terme (1024^-k)

use num_traits::Zero;

use super::calcul::{calculer, somme_pi};
use super::config::Config;
use super::formule::Formule;
use super::partition::partitionner;
use super::reduction::{combiner, sommes_partielles};

/// π tronqué à 50 décimales.
const PI_50: &str = "314159265358979323846264338327950288419716939937510";

fn chiffres(digits: u32, base: u32, threads: usize, rounds: u64, algo: Formule) -> String {
    let c = Config::nouveau(digits, base, threads, rounds, algo)
        .unwrap_or_else(|e| panic!("config invalide: {e}"));
    let (ch, _lecture, _d) = calculer(&c).unwrap_or_else(|e| panic!("calcul: {e}"));
    ch
}

/* ------------------------ Valeurs connues ------------------------ */

#[test]
fn sci_valeur_connue_dix_chiffres() {
    assert_eq!(chiffres(10, 10, 1, 9, Formule::Bbp16), "31415926535");
}

#[test]
fn sci_cinquante_chiffres() {
    assert_eq!(chiffres(50, 10, 4, 50, Formule::Bbp16), PI_50);
    assert_eq!(chiffres(50, 10, 3, 20, Formule::Bellard), PI_50);
}

#[test]
fn sci_autres_bases() {
    // π = 3.243F6A88… en hexadécimal
    assert_eq!(chiffres(8, 16, 2, 12, Formule::Bbp16), "3243f6a88");
    // floor(π·2^10) = 3216
    assert_eq!(chiffres(10, 2, 1, 10, Formule::Bellard), "110010010000");
}

/* ------------------------ Invariance / déterminisme ------------------------ */

#[test]
fn sci_invariance_nombre_de_travailleurs() {
    for (algo, digits, rounds) in [(Formule::Bbp16, 20, 20), (Formule::Bellard, 30, 12)] {
        let reference = chiffres(digits, 10, 1, rounds, algo);
        for threads in [2, 3, 5, 8, 13] {
            assert_eq!(
                chiffres(digits, 10, threads, rounds, algo),
                reference,
                "{algo} threads={threads}"
            );
        }
    }
}

#[test]
fn sci_determinisme() {
    let a = chiffres(30, 10, 4, 30, Formule::Bbp16);
    let b = chiffres(30, 10, 4, 30, Formule::Bbp16);
    assert_eq!(a, b);

    // même somme exacte, pas seulement mêmes chiffres
    let c = Config::nouveau(30, 10, 4, 30, Formule::Bellard).unwrap();
    assert_eq!(somme_pi(&c).unwrap(), somme_pi(&c).unwrap());
}

/* ------------------------ Réduction commutative ------------------------ */

fn permutations(n: usize) -> Vec<Vec<usize>> {
    if n == 0 {
        return vec![Vec::new()];
    }
    let mut out = Vec::new();
    for p in permutations(n - 1) {
        for pos in 0..=p.len() {
            let mut q = p.clone();
            q.insert(pos, n - 1);
            out.push(q);
        }
    }
    out
}

#[test]
fn sci_reduction_commutative() {
    for algo in [Formule::Bbp16, Formule::Bellard] {
        let unites = partitionner(10, 4, algo).unwrap();
        let partielles = sommes_partielles(&unites).unwrap();
        let reference = combiner(partielles.clone());

        let perms = permutations(partielles.len());
        assert_eq!(perms.len(), 24);
        for p in perms {
            let ordre = p.iter().map(|&i| partielles[i].clone());
            assert_eq!(combiner(ordre), reference, "{algo} ordre={p:?}");
        }
    }
}

/* ------------------------ Accord entre formules ------------------------ */

#[test]
fn sci_accord_bbp_bellard() {
    let bbp = chiffres(15, 10, 2, 20, Formule::Bbp16);
    let bellard = chiffres(15, 10, 2, 8, Formule::Bellard);
    assert_eq!(bbp, "3141592653589793");
    assert_eq!(bbp, bellard);
}

/* ------------------------ Convergence monotone ------------------------ */

#[test]
fn sci_convergence_monotone() {
    let converge = chiffres(20, 10, 1, 20, Formule::Bbp16);
    for rounds in [25, 30, 35, 40] {
        assert_eq!(chiffres(20, 10, 1, rounds, Formule::Bbp16), converge);
    }

    // sous le seuil : seuls les chiffres de poids faible diffèrent
    let partiel = chiffres(20, 10, 1, 5, Formule::Bbp16);
    assert_ne!(partiel, converge);
    assert_eq!(partiel.len(), converge.len());
    assert_eq!(&partiel[..7], &converge[..7]);
}

/* ------------------------ Bornes ------------------------ */

#[test]
fn sci_zero_tour_donne_zero() {
    for algo in [Formule::Bbp16, Formule::Bellard] {
        let c = Config::nouveau(10, 10, 3, 0, algo).unwrap();
        assert!(somme_pi(&c).unwrap().is_zero());
        assert_eq!(chiffres(10, 10, 3, 0, algo), "0");
    }
}

#[test]
fn sci_zero_chiffre_donne_trois() {
    assert_eq!(chiffres(0, 10, 1, 10, Formule::Bbp16), "3");
    assert_eq!(chiffres(0, 10, 2, 4, Formule::Bellard), "3");
}

/* ------------------------ Couverture de la partition ------------------------ */

#[test]
fn sci_partition_couvre_sans_trou_ni_chevauchement() {
    for rounds in 0..40u64 {
        for threads in 1..10usize {
            let unites = partitionner(rounds, threads, Formule::Bbp16).unwrap();
            assert_eq!(unites.len(), threads);

            let par = rounds.div_ceil(threads as u64);
            let mut attendu = 0u64;
            for u in &unites {
                assert_eq!(u.debut, attendu, "rounds={rounds} threads={threads}");
                assert_eq!(u.nombre, par);
                attendu += u.nombre;
            }
            assert_eq!(attendu, threads as u64 * par);
            assert!(attendu >= rounds);
        }
    }
}
