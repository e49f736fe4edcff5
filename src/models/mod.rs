pub mod config;
pub mod display_spec;

pub use config::{AppConfig, Overrides, PaletteConfig};
pub use display_spec::DisplaySpec;
