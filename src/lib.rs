pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use config::{toml_config::TomlConfig, CliConfig, Settings};
pub use core::probe::{sniff_dimensions, ImageDimensionProbe, MAX_PROBE_BYTES};
pub use core::unfurl::UnfurlService;
pub use domain::model::Dimensions;
pub use utils::error::{Result, UnfurlError};
