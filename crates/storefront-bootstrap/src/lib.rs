//! Storefront bootstrap
//!
//! Sequences one bootstrap: read the [`BuildEnv`], fetch preview overrides
//! from an optional [`PreviewSource`], resolve everything against the base
//! settings once, then project a [`ConfigBundle`] for the framework.

pub mod assembler;
pub mod bundle;
pub mod env;
pub mod error;
pub mod preview;

pub use assembler::{Assembler, DEFAULT_PREVIEW_TIMEOUT};
pub use bundle::{ConfigBundle, Degradation};
pub use env::BuildEnv;
pub use error::{Error, FetchError, Result};
pub use preview::{FilePreviewSource, PreviewSource};
