// src/main.rs
//
// pipi — point d’entrée CLI
// -------------------------
// stdout : un entier en base B + fin de ligne, floor(π·B^digits)
// stderr : journal + message d’erreur
// code   : 0 succès ; 2 configuration ; 3 lancement ; 4 arithmétique ; 5 travailleur interrompu

use clap::Parser;

use pipi::app::{self, arguments::normaliser, journal, Arguments};

fn main() {
    let args = Arguments::parse_from(normaliser(std::env::args()));

    journal::init_journal(args.verbose);
    tracing::debug!(?args, "arguments");

    match app::executer(&args) {
        Ok(sortie) => println!("{sortie}"),
        Err(e) => {
            tracing::debug!(categorie = ?e.categorie(), code = e.code_sortie(), "échec");
            eprintln!("pipi: {e}");
            std::process::exit(e.code_sortie());
        }
    }
}
