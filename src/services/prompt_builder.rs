use crate::{
    constants::prompts::{
        LESSON_CONTENT_END, LESSON_CONTENT_START, LESSON_SYSTEM_PROMPT, QUIZ_SYSTEM_PROMPT,
    },
    llm::ChatRequest,
    models::domain::Difficulty,
};

pub fn build_lesson_prompt(topic: &str, context: Option<&str>) -> ChatRequest {
    let mut message = format!("Create a detailed lesson on the topic: {}", topic);

    if let Some(context) = context.filter(|c| !c.trim().is_empty()) {
        message.push_str(
            "\n\nBelow is reference material. Integrate its content into the lesson where relevant:\n\n",
        );
        message.push_str(context);
    }

    ChatRequest::new(message).with_system_prompt(LESSON_SYSTEM_PROMPT)
}

pub fn build_quiz_prompt(
    content: &str,
    num_questions: u32,
    difficulty: Option<Difficulty>,
) -> ChatRequest {
    let difficulty_hint = difficulty
        .map(|level| format!("\nDifficulty level: {} ({}).", level, level.cognitive_level()))
        .unwrap_or_default();

    let message = format!(
        "Based on the lesson content below, create exactly {num_questions} multiple-choice \
         questions. Each question must have 4 choices A, B, C, D and indicate the correct \
         answer.{difficulty_hint}\n\n\
         {LESSON_CONTENT_START}\n\
         {content}\n\
         {LESSON_CONTENT_END}\n\n\
         Respond with a JSON array only (no markdown or explanation)."
    );

    ChatRequest::new(message).with_system_prompt(QUIZ_SYSTEM_PROMPT)
}
