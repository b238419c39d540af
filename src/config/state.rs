// Application state management with singleton pattern

use std::sync::Arc;
use once_cell::sync::Lazy;
use crate::config::environment::EnvironmentVariables;
use crate::i18n::translator::Translator;

// AppState singleton
#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub translator: Arc<Translator>,
}

impl AppState {
    /// Creates a new AppState instance (private constructor)
    fn new() -> Self {
        let environment: Arc<EnvironmentVariables> =
            Arc::new(EnvironmentVariables::instance().clone());
        let translator: Arc<Translator> =
            Arc::new(Translator::new(environment.messages_dir.as_ref()));

        Self {
            environment,
            translator,
        }
    }

    /// Returns the singleton instance
    pub fn instance() -> &'static Self {
        static INSTANCE: Lazy<AppState> = Lazy::new(AppState::new);
        &INSTANCE
    }
}
