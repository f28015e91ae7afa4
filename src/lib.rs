//! City guide - landmarks and activities for a city, suggested by a language model
//!
//! This library provides the completion adapter, the response parser and the
//! small web front end that ties them together.

pub mod api;
pub mod completion;
pub mod config;
pub mod error;
pub mod guide;
pub mod models;
pub mod parser;
pub mod prompt;
pub mod telemetry;
pub mod web;

// Re-export core types for public API
pub use completion::{CompletionClient, OpenAiClient};
pub use crate::config::CityGuideConfig;
pub use error::CityGuideError;
pub use guide::CityGuide;
pub use models::{CityInfo, CityQuery};
pub use parser::parse_city_info;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, CityGuideError>;
