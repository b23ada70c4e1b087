// src/app/journal.rs
//
// Journal sur stderr : stdout ne porte que les chiffres.
// RUST_LOG, s’il est défini, l’emporte sur le niveau choisi ici.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn filtre_par_defaut(verbose: bool) -> &'static str {
    if verbose {
        "pipi=debug,warn"
    } else {
        "pipi=warn"
    }
}

pub fn init_journal(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filtre_par_defaut(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_names(verbose)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
