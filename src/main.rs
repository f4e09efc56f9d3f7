#[macro_use]
extern crate rocket;

mod catchers;
mod error;
mod fairings;
mod routes;
mod telemetry;
#[cfg(test)]
mod test_helpers;
mod types;

use error::StartupError;
use rocket_cors::{AllowedHeaders, AllowedMethods, AllowedOrigins, CorsOptions};
use std::collections::HashSet;
use std::net::{IpAddr, Ipv4Addr};
use std::process::ExitCode;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

const ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const PORT: u16 = 8080;

#[derive(OpenApi)]
#[openapi(
    paths(routes::health::health, routes::users::list_users),
    components(),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "Example user listing endpoints"),
    ),
    info(
        title = "Example API",
        version = "0.1.0",
        description = "Demonstration API serving a health check and a fixed user list",
    )
)]
struct ApiDoc;

fn configure_cors() -> CorsOptions {
    let allowed_methods: AllowedMethods = routes::ALL_METHODS
        .into_iter()
        .map(From::from)
        .collect();

    CorsOptions {
        allowed_origins: AllowedOrigins::all(),
        allowed_methods,
        allowed_headers: AllowedHeaders::all(),
        allow_credentials: false,
        expose_headers: HashSet::from([fairings::REQUEST_ID_HEADER.to_string()]),
        ..Default::default()
    }
}

/// Built in code so neither `Rocket.toml` nor `ROCKET_*` variables apply.
fn server_config() -> rocket::Config {
    rocket::Config {
        address: ADDRESS,
        port: PORT,
        log_level: rocket::config::LogLevel::Normal,
        ..rocket::Config::default()
    }
}

fn rocket() -> Result<rocket::Rocket<rocket::Build>, StartupError> {
    let cors = configure_cors().to_cors()?;

    Ok(rocket::custom(server_config())
        .mount("/", routes::health::routes())
        .mount("/api/users", routes::users::routes())
        .mount(
            "/",
            SwaggerUi::new("/swagger/<tail..>").url("/api-doc/openapi.json", ApiDoc::openapi()),
        )
        .register("/", catchers::catchers())
        .attach(fairings::RequestLogger)
        .attach(cors))
}

async fn serve() -> Result<(), StartupError> {
    let rocket = rocket()?;
    tracing::info!(address = %ADDRESS, port = PORT, "starting server");
    rocket.launch().await?;
    Ok(())
}

fn exit_code(outcome: Result<(), StartupError>) -> ExitCode {
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "server stopped");
            ExitCode::FAILURE
        }
    }
}

#[rocket::main]
async fn main() -> ExitCode {
    telemetry::init();
    exit_code(serve().await)
}
