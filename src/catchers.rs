use crate::error::ApiErrorResponse;
use crate::fairings::request_span_for;
use rocket::serde::json::Json;
use rocket::Catcher;
use rocket::Request;

#[catch(404)]
pub fn not_found(req: &Request<'_>) -> Json<ApiErrorResponse> {
    let span = request_span_for(req);
    span.in_scope(|| tracing::warn!("route not found"));

    Json(ApiErrorResponse::new(
        "NOT_FOUND",
        "The requested resource was not found",
    ))
}

#[catch(500)]
pub fn internal_server_error(req: &Request<'_>) -> Json<ApiErrorResponse> {
    let span = request_span_for(req);
    span.in_scope(|| tracing::error!("unhandled internal server error"));

    Json(ApiErrorResponse::new("INTERNAL_ERROR", "Internal server error"))
}

pub fn catchers() -> Vec<Catcher> {
    rocket::catchers![not_found, internal_server_error]
}
