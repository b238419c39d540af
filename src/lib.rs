// Library root for the user service HTTP API

pub mod api;
pub mod config;
pub mod core;
pub mod i18n;
pub mod utils;
pub mod validation;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
