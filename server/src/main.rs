use actix_web::{middleware, web, App, HttpServer};
use anyhow::{anyhow, Context};
use clap::Parser;
use racesim::pre::check_service_opts::check_service_opts;
use racesim::pre::service_opts::ServiceOpts;
use racesim::store::JsonFileStore;
use server::{configure, AppState};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // PRE-PROCESSING ------------------------------------------------------------------------------
    // get service options from the command line arguments and the environment
    let service_opts: ServiceOpts = ServiceOpts::parse();

    // initialize logging (request logs of actix-web are forwarded as well)
    let level = if service_opts.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };
    FmtSubscriber::builder()
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow!("Failed to set subscriber: {}", e))?;

    // check service options
    check_service_opts(&service_opts)?;

    // open race store
    let store = JsonFileStore::open(&service_opts.db_path)?;
    info!(
        "Using race store {} (persist mode {:?})",
        store.filepath().display(),
        service_opts.persist_mode
    );

    let app_state = web::Data::new(AppState::new(Box::new(store), service_opts.persist_mode));

    // EXECUTION -----------------------------------------------------------------------------------
    let addr = service_opts.bind_addr();
    info!("Starting race service at http://{}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind(&addr)
    .with_context(|| format!("Failed to bind to {}!", addr))?
    .run()
    .await
    .context("Race service terminated with an error!")?;

    Ok(())
}
