//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `gigbook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use gigbook_core::{BandDraft, EventCatalog, EventDraft};

fn main() {
    println!("gigbook_core version={}", gigbook_core::core_version());

    let mut catalog = match EventCatalog::open_in_memory() {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("failed to open in-memory catalog: {err}");
            std::process::exit(1);
        }
    };

    let mut draft = EventDraft::new("GrasPop Metal Meeting");
    draft.bands = vec![BandDraft::new(
        "Metallica",
        ["Queen Anika Walsh", "Queen Aliyah Jarvis"],
    )];

    if let Err(err) = catalog.create_event(&draft) {
        eprintln!("catalog probe failed: {err}");
        std::process::exit(1);
    }

    match catalog.filtered_events("Wa") {
        Ok(filtered) => {
            for event in filtered {
                println!("filtered event={}", event.title);
            }
        }
        Err(err) => {
            eprintln!("catalog probe failed: {err}");
            std::process::exit(1);
        }
    }
}
