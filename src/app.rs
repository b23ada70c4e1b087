// src/app.rs
//
// pipi — module App (collaborateur du noyau)
// ------------------------------------------
// Rôle:
// - Déclarer les sous-modules (arguments.rs + journal.rs)
// - Construire la Config puis appeler le noyau
// - Une seule reprise si un travailleur n’a pas pu être lancé (le noyau, lui,
//   ne réessaie jamais)

pub mod arguments;
pub mod journal;

pub use arguments::Arguments;

use crate::noyau::{calculer, ErreurPi, Resultat};

/// Texte à écrire sur stdout : chiffres bruts, ou avec point si `--point`.
pub fn executer(args: &Arguments) -> Resultat<String> {
    let config = args.en_config()?;
    tracing::debug!(?config, "configuration");

    let (chiffres, lecture, demarche) = match calculer(&config) {
        Err(ErreurPi::LancementTravailleur { indice, source }) => {
            tracing::warn!(
                travailleur = indice,
                erreur = %source,
                "lancement impossible, nouvelle tentative"
            );
            calculer(&config)?
        }
        autre => autre?,
    };
    tracing::debug!(?demarche, "démarche");

    Ok(if args.point { lecture } else { chiffres })
}
