use crate::fairings::request_span_for;
use crate::types::health::HealthResponse;
use rocket::route::{Handler, Outcome};
use rocket::serde::json::Json;
use rocket::{Data, Request, Route};

/// Liveness probe. Every HTTP method gets the same body.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

#[derive(Clone)]
struct HealthHandler;

#[rocket::async_trait]
impl Handler for HealthHandler {
    async fn handle<'r>(&self, req: &'r Request<'_>, _data: Data<'r>) -> Outcome<'r> {
        request_span_for(req).in_scope(|| tracing::debug!("health check"));
        Outcome::from(req, health())
    }
}

pub fn routes() -> Vec<Route> {
    super::any_method("health", "/health", HealthHandler)
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::client;
    use rocket::http::{ContentType, Status};

    #[rocket::async_test]
    async fn test_health_returns_exact_body() {
        let client = client().await;
        let response = client.get("/health").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.content_type(), Some(ContentType::JSON));
        let body = response.into_string().await.expect("response body");
        assert_eq!(body, r#"{"status":"ok"}"#);
    }

    #[rocket::async_test]
    async fn test_health_ignores_query_string() {
        let client = client().await;
        let response = client.get("/health?verbose=true&x=1").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        let body = response.into_string().await.expect("response body");
        assert_eq!(body, r#"{"status":"ok"}"#);
    }

    #[rocket::async_test]
    async fn test_health_post_matches_get() {
        let client = client().await;
        let get = client.get("/health").dispatch().await;
        let post = client.post("/health").dispatch().await;
        assert_eq!(post.status(), Status::Ok);
        assert_eq!(
            get.into_bytes().await.expect("get body"),
            post.into_bytes().await.expect("post body")
        );
    }
}
