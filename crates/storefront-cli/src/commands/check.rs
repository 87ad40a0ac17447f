//! Check command implementation

use std::path::Path;

use colored::Colorize;
use storefront_settings::SettingsStore;
use storefront_settings::validation::KNOWN_NAMESPACES;

use crate::error::Result;

/// Run the check command
pub fn run_check(path: &Path) -> Result<()> {
    let store = SettingsStore::load(path)?;
    let document = store.document();
    let empty = document.empty_namespaces();

    println!("{} {}", "Settings OK:".green().bold(), path.display());
    println!();

    for namespace in KNOWN_NAMESPACES {
        let keys = document.namespace(namespace).map_or(0, |ns| ns.len());
        if empty.contains(&namespace) {
            println!("  {} {} {}", "-".dimmed(), namespace, "(empty)".dimmed());
        } else {
            println!("  {} {} ({} keys)", "+".green(), namespace.cyan(), keys);
        }
    }

    let extra: Vec<&str> = document
        .namespaces()
        .filter(|name| !KNOWN_NAMESPACES.contains(name))
        .collect();
    if !extra.is_empty() {
        println!();
        println!("{}: {}", "Other namespaces".dimmed(), extra.join(", "));
    }

    Ok(())
}
