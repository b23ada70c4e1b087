//! src/app/arguments.rs
//!
//! Arguments de la ligne de commande (sans calcul).
//!
//! Rôle : lire `pipi [DIGITS] -threads N -algo bbp|3|bellard -base B -rounds R`
//! puis produire la `Config` immuable validée par le noyau.
//!
//! Les options longues à un seul tiret (`-threads 4`) sont réécrites en
//! `--threads 4` avant clap.

use clap::Parser;

use crate::noyau::config::{tours_par_defaut, CHIFFRES_DEFAUT};
use crate::noyau::{Config, Formule, Resultat};

/// Options longues acceptées aussi avec un seul tiret.
const OPTIONS_LONGUES: [&str; 6] = ["threads", "algo", "base", "rounds", "point", "verbose"];

#[derive(Debug, Clone, Parser)]
#[command(name = "pipi")]
#[command(about = "Décimales de π par série BBP exacte (rationnels, calcul parallèle)")]
pub struct Arguments {
    /// Nombre de chiffres après le point
    #[arg(default_value_t = CHIFFRES_DEFAUT)]
    pub digits: u32,

    /// Nombre de travailleurs (threads)
    #[arg(long, default_value_t = 1)]
    pub threads: usize,

    /// Formule : bbp | 3 | bellard
    #[arg(long, default_value_t = Formule::Bbp16)]
    pub algo: Formule,

    /// Base d’affichage (2 à 36)
    #[arg(long, default_value_t = 10)]
    pub base: u32,

    /// Termes à sommer (défaut : digits − 1)
    #[arg(long)]
    pub rounds: Option<u64>,

    /// Insère le point après la partie entière
    #[arg(long)]
    pub point: bool,

    #[arg(short, long, help = "Journal détaillé (stderr)")]
    pub verbose: bool,
}

impl Arguments {
    pub fn tours(&self) -> u64 {
        self.rounds.unwrap_or_else(|| tours_par_defaut(self.digits))
    }

    pub fn en_config(&self) -> Resultat<Config> {
        Config::nouveau(
            self.digits,
            self.base,
            self.threads,
            self.tours(),
            self.algo,
        )
    }
}

/// `-threads` -> `--threads` (et `-base=16` -> `--base=16`). Rien après `--`.
pub fn normaliser<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut apres_separateur = false;

    args.into_iter()
        .enumerate()
        .map(|(i, a)| {
            if i == 0 || apres_separateur {
                return a;
            }
            if a == "--" {
                apres_separateur = true;
                return a;
            }
            let nom = a
                .strip_prefix('-')
                .filter(|reste| !reste.starts_with('-'))
                .map(|reste| reste.split('=').next().unwrap_or(reste));
            match nom {
                Some(n) if OPTIONS_LONGUES.contains(&n) => format!("-{a}"),
                _ => a,
            }
        })
        .collect()
}
