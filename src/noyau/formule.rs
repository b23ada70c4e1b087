// src/noyau/formule.rs
//
// Famille de formules BBP (tables exactes)
// ----------------------------------------
// Un terme s’écrit toujours :
//
//   term(k) = (±1)^k · a^(k·b) / c^k · Σ signe · n / (coeff·k + decalage)
//
// BBP16 et Bellard ne sont que deux lignes de cette table.
// Algo3 est reconnu par la configuration mais n’a PAS de formule.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

use super::erreur::{ErreurPi, Resultat};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Formule {
    Bbp16,
    Bellard,
    Algo3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signe {
    Plus,
    Moins,
}

/// n / (coeff·k + decalage), ajouté ou retranché selon `signe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Composante {
    pub numerateur: u64,
    pub coeff: u64,
    pub decalage: u64,
    pub signe: Signe,
}

/// a^(k·b) / c^k, avec (-1)^k si `alterne`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prefacteur {
    pub a: u64,
    pub b: u64,
    pub c: u64,
    pub alterne: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct Definition {
    pub prefacteur: Prefacteur,
    pub composantes: &'static [Composante],
    /// Échelle appliquée UNE fois à la somme complète (jamais par terme).
    pub echelle: (u64, u64),
}

const fn comp(signe: Signe, numerateur: u64, coeff: u64, decalage: u64) -> Composante {
    Composante {
        numerateur,
        coeff,
        decalage,
        signe,
    }
}

use Signe::{Moins, Plus};

// 4/(8k+1) − 2/(8k+4) − 1/(8k+5) − 1/(8k+6)
const BBP16: [Composante; 4] = [
    comp(Plus, 4, 8, 1),
    comp(Moins, 2, 8, 4),
    comp(Moins, 1, 8, 5),
    comp(Moins, 1, 8, 6),
];

// 256/(10k+1) − 32/(4k+1) − 1/(4k+3) − 64/(10k+3) − 4/(10k+5) − 4/(10k+7) + 1/(10k+9)
const BELLARD: [Composante; 7] = [
    comp(Plus, 256, 10, 1),
    comp(Moins, 32, 4, 1),
    comp(Moins, 1, 4, 3),
    comp(Moins, 64, 10, 3),
    comp(Moins, 4, 10, 5),
    comp(Moins, 4, 10, 7),
    comp(Plus, 1, 10, 9),
];

impl Formule {
    pub const TOUTES: [Formule; 3] = [Formule::Bbp16, Formule::Bellard, Formule::Algo3];

    pub fn nom(self) -> &'static str {
        match self {
            Formule::Bbp16 => "bbp",
            Formule::Bellard => "bellard",
            Formule::Algo3 => "3",
        }
    }

    /// Table de la formule. Algo3 => FormuleNonSupportee (jamais un terme nul silencieux).
    pub fn definition(self) -> Resultat<Definition> {
        match self {
            Formule::Bbp16 => Ok(Definition {
                prefacteur: Prefacteur {
                    a: 1,
                    b: 0,
                    c: 16,
                    alterne: false,
                },
                composantes: &BBP16,
                echelle: (1, 1),
            }),
            // 2^(10k) = 1024^k
            Formule::Bellard => Ok(Definition {
                prefacteur: Prefacteur {
                    a: 1,
                    b: 0,
                    c: 1024,
                    alterne: true,
                },
                composantes: &BELLARD,
                echelle: (1, 64),
            }),
            Formule::Algo3 => Err(ErreurPi::FormuleNonSupportee {
                nom: self.nom().to_string(),
            }),
        }
    }

    /// Échelle globale de la somme (1 pour BBP16, 1/64 pour Bellard).
    pub fn echelle_globale(self) -> Resultat<BigRational> {
        let (n, d) = self.definition()?.echelle;
        if n == d {
            return Ok(BigRational::one());
        }
        Ok(BigRational::new(BigInt::from(n), BigInt::from(d)))
    }
}

impl fmt::Display for Formule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

impl FromStr for Formule {
    type Err = ErreurPi;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bbp" | "bbp16" => Ok(Formule::Bbp16),
            "bellard" => Ok(Formule::Bellard),
            "3" | "algo3" => Ok(Formule::Algo3),
            autre => Err(ErreurPi::configuration(
                "algo",
                autre,
                "attendu: bbp | 3 | bellard",
            )),
        }
    }
}
