// src/noyau/terme.rs
//
// Évaluateur de terme (exact, sans flottants)
// -------------------------------------------
// - composante(k, a, b, c)           = a / (c·k + b)
// - puissance_echelonnee(k, a, b, c) = a^(k·b) / c^k
// - evaluer_terme(def, k)            = (±1)^k · prefacteur · Σ composantes
//
// Les exposants passent par `BigInt::pow(u32)` : tout exposant hors u32 est une
// violation de précondition (erreur explicite, jamais une troncature).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::{ErreurPi, Resultat};
use super::formule::{Definition, Formule, Signe};

/// a / (c·k + b). Pour BBP16, c = 8.
pub fn composante(k: u64, a: u64, b: u64, c: u64) -> Resultat<BigRational> {
    let denom = BigInt::from(c) * BigInt::from(k) + BigInt::from(b);
    if denom.is_zero() {
        return Err(ErreurPi::configuration(
            "composante",
            format!("{a}/({c}·{k}+{b})"),
            "dénominateur nul",
        ));
    }
    Ok(BigRational::new(BigInt::from(a), denom))
}

fn exposant_u32(base: u64, exposant: u64) -> Resultat<u32> {
    u32::try_from(exposant).map_err(|_| ErreurPi::ExposantTropGrand { base, exposant })
}

/// a^(k·b) / c^k
pub fn puissance_echelonnee(k: u64, a: u64, b: u64, c: u64) -> Resultat<BigRational> {
    if c == 0 {
        return Err(ErreurPi::configuration(
            "puissance",
            format!("{a}^({k}·{b})/{c}^{k}"),
            "base du dénominateur nulle",
        ));
    }

    // exposants vérifiés AVANT tout calcul de puissance
    let exp_num = k
        .checked_mul(b)
        .ok_or(ErreurPi::ExposantTropGrand { base: a, exposant: k })
        .and_then(|e| exposant_u32(a, e))?;
    let exp_den = exposant_u32(c, k)?;

    let numer = BigInt::from(a).pow(exp_num);
    let denom = BigInt::from(c).pow(exp_den);
    Ok(BigRational::new(numer, denom))
}

/// Terme k d’une formule déjà résolue (la table est lue une seule fois par série).
pub fn evaluer_terme(def: &Definition, k: u64) -> Resultat<BigRational> {
    let mut crochet = BigRational::zero();
    for c in def.composantes {
        let v = composante(k, c.numerateur, c.decalage, c.coeff)?;
        match c.signe {
            Signe::Plus => crochet += v,
            Signe::Moins => crochet -= v,
        }
    }

    let p = def.prefacteur;
    let mut pref = puissance_echelonnee(k, p.a, p.b, p.c)?;
    if p.alterne && k % 2 == 1 {
        pref = -pref;
    }

    Ok(pref * crochet)
}

/// Term(k) pour une formule. Algo3 => FormuleNonSupportee.
pub fn terme(formule: Formule, k: u64) -> Resultat<BigRational> {
    let def = formule.definition()?;
    evaluer_terme(&def, k)
}
