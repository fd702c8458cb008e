use anyhow::Context;
use std::net::TcpListener;
use tracks::configuration::get_configuration;
use tracks::startup::run;
use tracks::telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("tracks".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    let settings = get_configuration().map_err(|err| {
        tracing::error!("Failed to read configuration: {}", err);
        err
    })?;

    tracing::info!(
        issuer = %settings.auth.issuer,
        timeout_secs = settings.store.timeout_secs,
        store_url = %settings.store.url,
        table = %settings.store.table,
        "Configuration loaded"
    );

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener =
        TcpListener::bind(&address).with_context(|| format!("failed to bind to {}", address))?;

    run(listener, settings).await?.await?;
    Ok(())
}
