//! Bundle command implementation

use storefront_projectors::ModuleName;

use crate::cli::{BuildArgs, SettingsArgs};
use crate::error::{CliError, Result};

use super::{assembler, block_on, report_degradations};

/// Run the bundle command
pub fn run_bundle(
    settings: &SettingsArgs,
    build: &BuildArgs,
    module: Option<&str>,
) -> Result<()> {
    let module = module
        .map(|name| {
            name.parse::<ModuleName>()
                .map_err(|e| CliError::user(e.to_string()))
        })
        .transpose()?;

    let assembler = assembler(settings, build)?;
    let bundle = block_on(assembler.assemble())??;
    report_degradations(bundle.degradations());

    let output = match module {
        Some(module) => match bundle.get(module) {
            Some(config) => serde_json::to_string_pretty(config)?,
            None => return Err(CliError::user(format!("Module not in bundle: {module}"))),
        },
        None => serde_json::to_string_pretty(&bundle)?,
    };
    println!("{output}");
    Ok(())
}
