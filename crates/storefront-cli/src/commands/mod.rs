//! Command implementations for storefront-cli

pub mod bundle;
pub mod check;
pub mod resolve;

pub use bundle::run_bundle;
pub use check::run_check;
pub use resolve::run_resolve;

use std::future::Future;
use std::time::Duration;

use colored::Colorize;
use storefront_bootstrap::{Assembler, BuildEnv, Degradation, FilePreviewSource};
use storefront_projectors::{BuildProfile, EditorMode};
use storefront_settings::SettingsStore;

use crate::cli::{BuildArgs, SettingsArgs};
use crate::error::Result;

/// Layer command-line flags over the environment. Flags only switch
/// production and editor mode on.
pub fn apply_flags(env: BuildEnv, build: &BuildArgs) -> BuildEnv {
    let mut env = env;
    if build.production {
        env = env.with_profile(BuildProfile::Production);
    }
    if build.editor {
        env = env.with_editor_mode(EditorMode::ENABLED);
    }
    env
}

fn assembler(settings: &SettingsArgs, build: &BuildArgs) -> Result<Assembler> {
    let store = SettingsStore::load(&settings.settings)?;
    let env = apply_flags(BuildEnv::from_env(), build);

    let mut assembler = Assembler::new(store, env)
        .with_timeout(Duration::from_millis(build.preview_timeout_ms));
    if let Some(path) = &build.preview {
        let mut source = FilePreviewSource::new(path);
        if build.require_preview {
            source = source.required();
        }
        assembler = assembler.with_preview_source(source);
    }
    Ok(assembler)
}

/// Drive a bootstrap future on a single-threaded runtime.
fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}

fn report_degradations(degradations: &[Degradation]) {
    for degradation in degradations {
        eprintln!(
            "{}: preview source '{}' skipped: {}",
            "warning".yellow().bold(),
            degradation.source_name,
            degradation.reason
        );
    }
}
