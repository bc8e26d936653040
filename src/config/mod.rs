// Re-export all items from submodules
mod client_config;
mod constants;
mod token;

pub use client_config::*;
pub use constants::*;
pub use token::*;
