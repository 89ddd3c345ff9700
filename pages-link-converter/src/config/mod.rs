//! Front end settings loading.
//!
//! Settings live in a small TOML file:
//! ```toml
//! auto-copy = false
//! auto-open = false
//! terminal-fallback = true
//! prompt = "> "
//! ```

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::Settings;
