//! Utility modules for common functionality.
//!
//! - constants: Constants for the application
//! - env: Environment variable access and env-file loading
//! - expansion: `${VAR}` expansion
//! - logging: Logging utilities

pub mod constants;
pub mod env;
pub mod expansion;
pub mod logging;

pub use constants::*;
pub use env::{load_env_file, parse_bool, ProcessEnv, VariableSource};
pub use expansion::{expand, ExpansionError};
