use anyhow::Context;
use hello_counter::configuration::get_configuration;
use hello_counter::startup::{self, Application};
use hello_counter::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("hello_counter".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let settings = get_configuration().context("Failed to read configuration.")?;

    let db_pool = startup::get_connection_pool(&settings.database);
    startup::migrate(&db_pool)
        .await
        .context("Failed to apply database migrations.")?;

    let address = settings
        .application
        .address()
        .context("Unable to parse socket address.")?;
    let app_state = startup::default_app_state(&settings, Some(db_pool));

    Application::new(address, app_state).serve().await?;
    Ok(())
}
