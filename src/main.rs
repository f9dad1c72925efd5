#[macro_use]
extern crate rocket;

mod catchers;
mod cli;
mod client;
mod error;
mod fairings;
mod routes;
mod telemetry;
#[cfg(test)]
mod test_helpers;
mod types;

use clap::Parser;
use rocket::figment::Figment;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::hello::get_hello,
        routes::status::get_status,
        routes::status::options_status,
        routes::status::post_status,
        routes::status::put_status,
        routes::status::delete_status,
        routes::status::patch_status,
        routes::status::head_status,
    ),
    components(),
    tags(
        (name = "Greeting", description = "Greeting endpoint used by the client page"),
        (name = "Status", description = "Service status endpoint"),
    ),
    info(
        title = "Greeting API",
        version = "0.1.0",
        description = "Greeting and status endpoints behind a one-button client page",
    )
)]
struct ApiDoc;

fn rocket(figment: Figment) -> rocket::Rocket<rocket::Build> {
    rocket::custom(figment)
        .mount("/", routes::page::routes())
        .mount("/api", routes::hello::routes())
        .mount("/api", routes::status::routes())
        .mount(
            "/",
            SwaggerUi::new("/swagger/<tail..>").url("/api-doc/openapi.json", ApiDoc::openapi()),
        )
        .register("/", catchers::catchers())
        .attach(fairings::RequestLogger)
        .attach(fairings::PermissiveCors::for_path(routes::status::STATUS_PATH))
}

#[rocket::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init();

    match cli::Cli::parse().command {
        Some(cli::Command::Serve(args)) => {
            if let Err(err) = rocket(args.figment()).launch().await {
                tracing::error!(error = %err, "server terminated");
                return Err(err.to_string().into());
            }
        }
        Some(cli::Command::Fetch { base_url }) => cli::run_fetch(&base_url).await?,
        None => cli::print_usage(),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::client;
    use rocket::http::Status;

    #[test]
    fn test_openapi_document_lists_endpoints() {
        let client = client();
        let response = client.get("/api-doc/openapi.json").dispatch();
        assert_eq!(response.status(), Status::Ok);
        let doc: serde_json::Value =
            serde_json::from_str(&response.into_string().unwrap()).unwrap();
        assert!(doc["paths"]["/api/hello"]["get"].is_object());
        assert!(doc["paths"]["/api/status"]["get"].is_object());
        for method in ["post", "put", "delete", "patch", "head"] {
            assert!(
                doc["paths"]["/api/status"][method]["responses"]["405"].is_object(),
                "{method}"
            );
        }
    }
}
