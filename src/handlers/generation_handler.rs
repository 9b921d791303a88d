use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::request::{GenerateLessonRequest, GenerateQuizRequest},
};

#[post("/api/lesson/generate")]
async fn generate_lesson(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<GenerateLessonRequest>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req).unwrap_or_default();
    log::info!("[{}] lesson generation requested", request_id);

    let response = state
        .lesson_service
        .generate_lesson(request.into_inner())
        .await
        .inspect_err(|e| log::warn!("[{}] lesson generation failed: {}", request_id, e))?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/api/quiz/generate")]
async fn generate_quiz(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req).unwrap_or_default();
    log::info!("[{}] quiz generation requested", request_id);

    let response = state
        .quiz_service
        .generate_quiz(request.into_inner())
        .await
        .inspect_err(|e| log::warn!("[{}] quiz generation failed: {}", request_id, e))?;
    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use super::*;
    use crate::{
        config::Config,
        llm::MockLlmClient,
        middleware::RequestIdMiddleware,
        test_utils::{fixtures::valid_quiz_json, test_helpers::assert_error_status},
    };

    fn state_with(mock: MockLlmClient) -> web::Data<AppState> {
        web::Data::new(AppState::with_llm_client(
            Config::test_config(),
            Arc::new(mock),
        ))
    }

    #[actix_web::test]
    async fn test_generate_lesson_returns_topic_and_content() {
        let mut mock = MockLlmClient::new();
        mock.expect_chat()
            .times(1)
            .returning(|_| Ok("<h2>Photosynthesis</h2><p>...</p>".to_string()));
        let app = test::init_service(
            App::new()
                .app_data(state_with(mock))
                .wrap(RequestIdMiddleware)
                .configure(crate::handlers::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/lesson/generate")
            .set_json(json!({ "topic": "Photosynthesis" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().contains_key("x-request-id"));
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["topic"], "Photosynthesis");
        assert_eq!(body["content"], "<h2>Photosynthesis</h2><p>...</p>");
    }

    #[actix_web::test]
    async fn test_generate_quiz_returns_questions_and_count() {
        let mut mock = MockLlmClient::new();
        mock.expect_chat()
            .times(1)
            .returning(|_| Ok(format!("```json\n{}\n```", valid_quiz_json(4))));
        let app = test::init_service(
            App::new()
                .app_data(state_with(mock))
                .configure(crate::handlers::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/quiz/generate")
            .set_json(json!({ "content": "Lesson text", "num_questions": 4, "difficulty": "medium" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["count"], 4);
        assert_eq!(body["questions"].as_array().map(Vec::len), Some(4));
        assert_eq!(body["questions"][0]["options"].as_array().map(Vec::len), Some(4));
    }

    #[actix_web::test]
    async fn test_generate_quiz_rejects_out_of_range_count() {
        let mut mock = MockLlmClient::new();
        mock.expect_chat().times(0);
        let app = test::init_service(
            App::new()
                .app_data(state_with(mock))
                .configure(crate::handlers::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/quiz/generate")
            .set_json(json!({ "content": "Lesson text", "num_questions": 21 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "INPUT_ERROR");
    }

    #[actix_web::test]
    async fn test_malformed_quiz_bodies_are_input_errors() {
        let mut mock = MockLlmClient::new();
        mock.expect_chat().times(0);
        let app = test::init_service(
            App::new()
                .app_data(state_with(mock))
                .configure(crate::handlers::configure),
        )
        .await;

        for body in [
            json!({ "content": "x", "num_questions": -1 }),
            json!({ "content": "x", "num_questions": 99999999999u64 }),
            json!({ "num_questions": 3 }),
            json!({ "content": 42 }),
        ] {
            let req = test::TestRequest::post()
                .uri("/api/quiz/generate")
                .set_json(&body)
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body {}", body);
            let payload: Value = test::read_body_json(resp).await;
            assert_eq!(payload["code"], "INPUT_ERROR", "body {}", body);
        }
    }

    #[actix_web::test]
    async fn test_missing_topic_is_an_input_error() {
        let mut mock = MockLlmClient::new();
        mock.expect_chat().times(0);
        let app = test::init_service(
            App::new()
                .app_data(state_with(mock))
                .configure(crate::handlers::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/lesson/generate")
            .set_json(json!({ "context": "no topic here" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let payload: Value = test::read_body_json(resp).await;
        assert_eq!(payload["code"], "INPUT_ERROR");
    }

    #[actix_web::test]
    async fn test_transport_failure_maps_to_service_unavailable() {
        let mut mock = MockLlmClient::new();
        mock.expect_chat()
            .times(1)
            .returning(|_| Err(AppError::TransportError("401 bad key".to_string())));
        let app = test::init_service(
            App::new()
                .app_data(state_with(mock))
                .configure(crate::handlers::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/lesson/generate")
            .set_json(json!({ "topic": "Tides" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "AI service unavailable");
    }

    #[actix_web::test]
    async fn test_exhausted_quiz_retries_map_to_bad_gateway() {
        let mut mock = MockLlmClient::new();
        mock.expect_chat()
            .times(2)
            .returning(|_| Ok("no quiz here".to_string()));
        let app = test::init_service(
            App::new()
                .app_data(state_with(mock))
                .configure(crate::handlers::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/quiz/generate")
            .set_json(json!({ "content": "Lesson text" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_error_status(resp.status());
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }
}
