mod types;
mod loader;
mod validation;

pub use types::*;
pub use loader::{config_from_cli, load_config};
pub use validation::validate_config;
