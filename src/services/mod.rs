pub mod lesson_service;
pub mod prompt_builder;
pub mod quiz_service;
pub mod quiz_validator;
pub mod response_extractor;
