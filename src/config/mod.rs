//! Configuration module for the exit beacon agent.

mod app_config;
mod helpers;
mod http_base;

pub use app_config::AppConfig;
pub use helpers::{deserialize_duration_from_ms, deserialize_duration_from_seconds};
pub use http_base::BaseHttpClientConfig;
