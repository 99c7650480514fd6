use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::{
        domain::{ProgrammingLanguage, ResponseField},
        dto::{
            request::{AskRequest, HotspotRequest},
            response::HotspotResponse,
        },
    },
    services::hotspot_service::{hotspot_rng, select_hotspots},
};

#[post("/api/ask")]
pub async fn ask(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<AskRequest>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req).unwrap_or_default();
    log::info!("[{}] ask: language={}", request_id, request.language);

    let response = state.assistant_service.ask(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/languages")]
pub async fn list_languages() -> HttpResponse {
    let languages: Vec<_> = ProgrammingLanguage::MENU
        .into_iter()
        .map(ProgrammingLanguage::option)
        .collect();
    HttpResponse::Ok().json(languages)
}

#[get("/api/fields")]
pub async fn list_fields() -> HttpResponse {
    HttpResponse::Ok().json(ResponseField::ALL)
}

#[post("/api/hotspots")]
pub async fn hotspots(request: web::Json<HotspotRequest>) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let request = request.into_inner();

    let mut rng = hotspot_rng(request.seed);
    let lines = select_hotspots(&request.code, request.count as usize, &mut rng);
    Ok(HttpResponse::Ok().json(HotspotResponse { lines }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    use crate::{
        config::Config,
        services::{model_service::MockCompletionProvider, search_service::MockSearchProvider},
        test_utils::{fixtures, test_helpers::assert_error_status},
    };

    fn state(search: MockSearchProvider, completion: MockCompletionProvider) -> AppState {
        AppState::with_providers(Config::test_config(), Arc::new(search), Arc::new(completion))
    }

    #[actix_web::test]
    async fn test_ask_endpoint_returns_tagged_response() {
        let mut search = MockSearchProvider::new();
        search
            .expect_search()
            .returning(|_, _| Ok(fixtures::reference_links()));
        let mut completion = MockCompletionProvider::new();
        completion
            .expect_complete()
            .returning(|_, _| Ok(fixtures::model_answer()));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(search, completion)))
                .service(ask),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/ask")
            .set_json(json!({
                "question": "Reverse a linked list",
                "language": "Python",
                "fields": ["code", "time_complexity", "flow"]
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["language"], "Python");
        assert_eq!(body["links"].as_array().unwrap().len(), 2);
        assert_eq!(body["response"]["time_complexity"], "O(n)");
        assert_eq!(body["response"]["flow"], "");
        assert!(body["response"].get("explanation").is_none());
    }

    #[actix_web::test]
    async fn test_ask_endpoint_rejects_blank_question() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(
                    MockSearchProvider::new(),
                    MockCompletionProvider::new(),
                )))
                .service(ask),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/ask")
            .set_json(json!({ "question": "   " }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_ask_endpoint_asks_for_missing_key() {
        let mut config = Config::test_config();
        config.model_api_key = None;
        let state = AppState::with_providers(
            config,
            Arc::new(MockSearchProvider::new()),
            Arc::new(MockCompletionProvider::new()),
        );
        let app =
            test::init_service(App::new().app_data(web::Data::new(state)).service(ask)).await;

        let req = test::TestRequest::post()
            .uri("/api/ask")
            .set_json(json!({ "question": "Two sum" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error_status(resp.status());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["kind"], "CONFIGURATION_ERROR");
        assert!(body["error"].as_str().unwrap().contains("model_api_key"));
    }

    #[actix_web::test]
    async fn test_list_languages() {
        let app = test::init_service(App::new().service(list_languages)).await;

        let req = test::TestRequest::get().uri("/api/languages").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let languages = body.as_array().unwrap();
        assert_eq!(languages.len(), 7);
        assert_eq!(languages[3]["name"], "C++");
        assert_eq!(languages[3]["extension"], "cpp");
        assert_eq!(languages[3]["file_name"], "solution.cpp");
    }

    #[actix_web::test]
    async fn test_list_fields() {
        let app = test::init_service(App::new().service(list_fields)).await;

        let req = test::TestRequest::get().uri("/api/fields").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.as_array().unwrap().len(), 11);
        assert_eq!(body[0], "code");
        assert_eq!(body[10], "related");
    }

    #[actix_web::test]
    async fn test_hotspots_with_seed_are_repeatable() {
        let app = test::init_service(App::new().service(hotspots)).await;
        let payload = json!({ "code": "a\nb\n\nc\nd\ne", "count": 2, "seed": 99 });

        let first: serde_json::Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::post()
                .uri("/api/hotspots")
                .set_json(payload.clone())
                .to_request(),
        )
        .await;
        let second: serde_json::Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::post()
                .uri("/api/hotspots")
                .set_json(payload)
                .to_request(),
        )
        .await;

        assert_eq!(first, second);
        assert_eq!(first["lines"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_hotspots_rejects_large_count() {
        let app = test::init_service(App::new().service(hotspots)).await;

        let req = test::TestRequest::post()
            .uri("/api/hotspots")
            .set_json(json!({ "code": "a", "count": 500 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
