use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::health,
        schedule::{get_schedule, method_not_allowed, save_schedule},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route(
            "/schedule",
            get(get_schedule)
                .post(save_schedule)
                .fallback(method_not_allowed),
        )
        .layer(cors);

    let request_timeout = state.request_timeout;

    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::{ADMIN_KEY, USER_KEY};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use shiftsync_core::schedule::{default_schedule, ScheduleList};
    use tower::ServiceExt;

    fn get_request(query: &str) -> Request<Body> {
        Request::builder()
            .uri(format!("/api/schedule?{query}"))
            .body(Body::empty())
            .unwrap()
    }

    fn post_request(query: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(format!("/api/schedule?{query}"))
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_get_without_key_is_unauthorized() {
        let app = create_app(AppState::default());

        let response = app.oneshot(get_request("month=12&year=2025")).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            json_body(response).await,
            json!({"error": "Неверный ключ доступа"})
        );
    }

    #[tokio::test]
    async fn test_get_with_wrong_key_is_unauthorized() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(get_request("key=guess&month=12&year=2025"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_get_unsaved_month_returns_null_schedule() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(get_request(&format!("key={USER_KEY}&month=1&year=2026")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"schedule": null, "role": "user", "month": 1, "year": 2026})
        );
    }

    #[tokio::test]
    async fn test_get_defaults_to_builtin_month() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(get_request(&format!("key={ADMIN_KEY}")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["role"], "admin");
        assert_eq!((body["month"].as_u64(), body["year"].as_i64()), (Some(12), Some(2025)));
    }

    #[tokio::test]
    async fn test_get_rejects_out_of_range_scope() {
        let app = create_app(AppState::default());

        for query in ["month=13&year=2025", "month=0&year=2025", "month=5&year=2019", "month=x"] {
            let response = app
                .clone()
                .oneshot(get_request(&format!("key={ADMIN_KEY}&{query}")))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{query}");
            assert!(json_body(response).await["error"].is_string());
        }
    }

    #[tokio::test]
    async fn test_save_then_fetch() {
        let app = create_app(AppState::default());
        let schedule = serde_json::to_value(default_schedule()).unwrap();

        let response = app
            .clone()
            .oneshot(post_request(
                &format!("key={ADMIN_KEY}&month=12&year=2025"),
                json!({ "schedule": schedule }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({"success": true}));

        let response = app
            .oneshot(get_request(&format!("key={USER_KEY}&month=12&year=2025")))
            .await
            .unwrap();

        let body = json_body(response).await;
        assert_eq!(body["schedule"], schedule);
        let fetched: ScheduleList = serde_json::from_value(body["schedule"].clone()).unwrap();
        assert_eq!(fetched, default_schedule());
    }

    #[tokio::test]
    async fn test_months_are_stored_separately() {
        let app = create_app(AppState::default());

        let response = app
            .clone()
            .oneshot(post_request(
                &format!("key={ADMIN_KEY}&month=1&year=2026"),
                json!({ "schedule": [{"date": "2026-01-05", "status": "off"}] }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(get_request(&format!("key={ADMIN_KEY}&month=12&year=2025")))
            .await
            .unwrap();
        assert_eq!(json_body(response).await["schedule"], Value::Null);

        let response = app
            .oneshot(get_request(&format!("key={ADMIN_KEY}&month=1&year=2026")))
            .await
            .unwrap();
        assert_eq!(
            json_body(response).await["schedule"],
            json!([{"date": "2026-01-05", "status": "off"}])
        );
    }

    #[tokio::test]
    async fn test_user_cannot_save() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(post_request(
                &format!("key={USER_KEY}&month=12&year=2025"),
                json!({ "schedule": [] }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            json_body(response).await,
            json!({"error": "Только админ может сохранять данные"})
        );
    }

    #[tokio::test]
    async fn test_save_rejects_non_array_schedule() {
        let app = create_app(AppState::default());

        for body in [
            json!({ "schedule": {"date": "2025-12-01", "status": "off"} }),
            json!({ "schedule": "nope" }),
            json!({}),
        ] {
            let response = app
                .clone()
                .oneshot(post_request(
                    &format!("key={ADMIN_KEY}&month=12&year=2025"),
                    body,
                ))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                json_body(response).await,
                json!({"error": "Некорректный формат данных"})
            );
        }
    }

    #[tokio::test]
    async fn test_other_methods_are_not_allowed() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/schedule?key={ADMIN_KEY}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
