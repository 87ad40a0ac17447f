//! Resolve command implementation

use crate::cli::{BuildArgs, SettingsArgs};
use crate::error::Result;

use super::{assembler, block_on, report_degradations};

/// Run the resolve command
pub fn run_resolve(settings: &SettingsArgs, build: &BuildArgs) -> Result<()> {
    let assembler = assembler(settings, build)?;
    let (model, degradations) = block_on(assembler.resolve())??;

    report_degradations(&degradations);
    println!("{}", serde_json::to_string_pretty(&model)?);
    Ok(())
}
