use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    llm::{LlmClient, OpenAiChatClient},
    services::{lesson_service::LessonService, quiz_service::QuizService},
};

#[derive(Clone)]
pub struct AppState {
    pub lesson_service: Arc<LessonService>,
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        config.validate()?;
        let llm_client: Arc<dyn LlmClient> = Arc::new(OpenAiChatClient::new(&config));
        Ok(Self::with_llm_client(config, llm_client))
    }

    /// Build the services around an already constructed client.
    pub fn with_llm_client(config: Config, llm_client: Arc<dyn LlmClient>) -> Self {
        let call_timeout = config.llm_timeout();

        let lesson_service =
            Arc::new(LessonService::new(llm_client.clone()).with_call_timeout(call_timeout));
        let quiz_service = Arc::new(QuizService::new(llm_client).with_call_timeout(call_timeout));

        Self {
            lesson_service,
            quiz_service,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_from_test_config() {
        let state = AppState::new(Config::test_config());

        assert!(state.is_ok());
    }

    #[test]
    fn test_app_state_rejects_invalid_config() {
        let config = Config {
            llm_model: String::new(),
            ..Config::test_config()
        };

        assert!(AppState::new(config).is_err());
    }
}
