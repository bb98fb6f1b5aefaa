//! # Charba Configuration Library
//!
//! Configuration and logging bootstrap for the Charba event core.
//!
//! ## Features
//!
//! - Dispatch tuning (`DispatchConfig`) consumed by the event bus
//! - Logging setup (`LoggingConfig`, [`init_logging`]) built on `tracing-subscriber`
//! - TOML loading with validation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use charba_config::{init_logging, CharbaConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CharbaConfig::load_from_file("charba.toml")?;
//!     init_logging(&config.logging)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod logging;

pub use config::*;
pub use logging::*;
