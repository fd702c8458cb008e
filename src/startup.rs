use crate::configuration::Settings;
use crate::connectors::SupabaseClient;
use crate::helpers::JsonResponse;
use crate::middleware;
use crate::routes;
use crate::services::{CredentialVerifier, ProgressRecorder};
use actix_web::{dev::Server, error, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub async fn run(listener: TcpListener, settings: Settings) -> Result<Server, std::io::Error> {
    let verifier = web::Data::new(CredentialVerifier::new(&settings.auth));

    let store = SupabaseClient::new(&settings.store)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    tracing::info!(store = ?store, "Progress store configured");
    let recorder = web::Data::new(ProgressRecorder::new(Arc::new(store)));

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg = match &err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "Invalid request body (line {}, column {}): {}",
                err.line(),
                err.column(),
                err
            ),
            other => format!("Invalid request body: {}", other),
        };
        tracing::debug!("{}", msg);
        JsonResponse::build().bad_request(msg)
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/tracks")
                    .wrap(middleware::authentication::Manager::new())
                    .service(routes::track::add_handler),
            )
            .app_data(json_config.clone())
            .app_data(verifier.clone())
            .app_data(recorder.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
