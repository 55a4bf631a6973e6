mod generate;

pub use generate::{generate, handle_generate_command};
