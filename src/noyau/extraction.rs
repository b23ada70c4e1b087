// src/noyau/extraction.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;

use super::config::{BASE_MAX, BASE_MIN};
use super::erreur::{ErreurPi, Resultat};

/* ------------------------ Bases ------------------------ */

pub fn verifier_base(base: u32) -> Resultat<()> {
    if !(BASE_MIN..=BASE_MAX).contains(&base) {
        return Err(ErreurPi::configuration(
            "base",
            base,
            format!("base attendue entre {BASE_MIN} et {BASE_MAX}"),
        ));
    }
    Ok(())
}

fn puissance_base(base: u32, chiffres: u32) -> BigInt {
    BigInt::from(base).pow(chiffres)
}

/* ------------------------ Extraction ------------------------ */

/// floor(r · base^chiffres)
pub fn extraire_entier(r: &BigRational, chiffres: u32, base: u32) -> BigInt {
    let echelle = BigRational::from_integer(puissance_base(base, chiffres));
    (r * echelle).floor().to_integer()
}

/// floor(r · base^chiffres) écrit en base `base`, sans point (minuscules au-delà de 9).
pub fn extraire_chiffres(r: &BigRational, chiffres: u32, base: u32) -> Resultat<String> {
    verifier_base(base)?;
    Ok(extraire_entier(r, chiffres, base).to_str_radix(base))
}

/* ------------------------ Lecture avec point ------------------------ */

/// Entier “scalé” (×base^chiffres) -> texte avec point, parties complétées de zéros.
pub fn inserer_point(mut scaled: BigInt, chiffres: u32, base: u32) -> Resultat<String> {
    verifier_base(base)?;

    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = puissance_base(base, chiffres);
    let int_part = (&scaled / &scale).to_str_radix(base);
    let frac_part = &scaled % &scale;
    let signe = if neg { "-" } else { "" };

    if chiffres == 0 {
        return Ok(format!("{signe}{int_part}"));
    }

    let mut frac = frac_part.to_str_radix(base);
    let largeur = chiffres as usize;
    if frac.len() < largeur {
        frac.insert_str(0, &"0".repeat(largeur - frac.len()));
    }

    Ok(format!("{signe}{int_part}.{frac}"))
}
