//! wikibot: Wikipedia lookups for chat front-ends.
//!
//! The term-resolution pipeline lives in the [`wiki_resolve`] crate. This
//! crate adds the host concerns around it:
//! - **Configuration**: a TOML file holding a [`wiki_resolve::WikiConfig`]
//! - **Logging**: `tracing` subscriber setup shared by the binaries
//! - **Errors**: [`BotError`] wrapping config, I/O and client errors

pub mod config;
pub mod error;
pub mod logging;

pub use config::BotConfig;
pub use error::{BotError, Result};
pub use wiki_resolve;
