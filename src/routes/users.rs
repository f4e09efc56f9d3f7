use crate::fairings::request_span_for;
use crate::types::users::User;
use rocket::route::{Handler, Outcome};
use rocket::serde::json::Json;
use rocket::{Data, Request, Route};

/// Sample records served by the listing endpoint, Alice first.
pub(crate) fn fixture_users() -> Vec<User> {
    vec![User::new("1", "Alice"), User::new("2", "Bob")]
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "Fixed list of example users", body = [User]),
    )
)]
pub fn list_users() -> Json<Vec<User>> {
    Json(fixture_users())
}

#[derive(Clone)]
struct ListUsersHandler;

#[rocket::async_trait]
impl Handler for ListUsersHandler {
    async fn handle<'r>(&self, req: &'r Request<'_>, _data: Data<'r>) -> Outcome<'r> {
        let users = list_users();
        request_span_for(req).in_scope(|| tracing::info!(count = users.len(), "returning users"));
        Outcome::from(req, users)
    }
}

pub fn routes() -> Vec<Route> {
    super::any_method("list_users", "/", ListUsersHandler)
}
