use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Result;
use clap::Parser;
use tagfeed_server::config::{build_cors, Cli};
use tagfeed_server::{routes, shared_service};

#[actix_web::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tagfeed=info".parse()?)
                .add_directive("medium_api=info".parse()?)
                .add_directive("actix_web=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    tracing::debug!("Configuration: {:?}", cli);

    let client = cli.proxy_config().build_client()?;
    let service = web::Data::new(shared_service(client));

    let cors_origins = cli.cors_allowed_origins.clone();
    let (host, port) = cli.bind_address();
    tracing::info!("Starting HTTP server on {}:{}", host, port);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&cors_origins))
            .wrap(Logger::default())
            .app_data(service.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?;

    if let Some(workers) = cli.workers {
        server = server.workers(workers);
    }

    server.run().await?;
    Ok(())
}
