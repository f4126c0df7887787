use paddle::{AppConfig, Cli};
use paddle_axum::{Desk, start_server};
use paddle_core::loader::load_catalog;
use paddle_google::{GoogleForm, GvizSheets};
use tokio::select;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // By convention, we leverage `tracing` to instrument and log various
    // operations throughout this project. Set RUST_LOG to see them.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::import()?;
    let config = AppConfig::load(&cli)?;
    config.ensure_endpoints()?;
    let AppConfig {
        server,
        google,
        rules,
        schedule,
    } = config;

    // One client, shared by the sheet source and the form transport
    let client = google.client()?;
    let sheets = GvizSheets::new(client.clone(), &google);
    let form = GoogleForm::new(client, &google);

    // The desk does not serve until the catalog is loaded
    let catalog = load_catalog(&sheets, &google.layout).await?;
    let desk = Desk::new(catalog, rules, form);

    // We always run the server task.
    let server_task = tokio::spawn(start_server(server, desk.clone()));

    // However, we may or may not also refresh the catalog
    if schedule.interval().is_some() {
        let layout = google.layout;
        let refresh_task =
            tokio::spawn(async move { schedule.run(&sheets, &layout, &desk).await });

        select! {
            r = server_task => r??,
            r = refresh_task => r?,
        }
    } else {
        server_task.await??;
    }

    Ok(())
}
