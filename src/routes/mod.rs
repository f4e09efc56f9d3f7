pub mod health;
pub mod users;

use rocket::http::Method;
use rocket::route::Handler;
use rocket::Route;

/// Methods an endpoint answers when it does not inspect the request method.
pub(crate) const ALL_METHODS: [Method; 9] = [
    Method::Get,
    Method::Head,
    Method::Post,
    Method::Put,
    Method::Delete,
    Method::Patch,
    Method::Options,
    Method::Trace,
    Method::Connect,
];

/// One route per method in [`ALL_METHODS`], all sharing `handler`.
fn any_method<H: Handler + Clone>(name: &'static str, path: &str, handler: H) -> Vec<Route> {
    ALL_METHODS
        .into_iter()
        .map(|method| {
            let mut route = Route::new(method, path, handler.clone());
            route.name = Some(name.into());
            route
        })
        .collect()
}
