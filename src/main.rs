use ddhub_api::configuration::get_configuration;
use ddhub_api::startup::Application;
use ddhub_api::telemetry::{get_subscriber, init_subscriber};

#[actix_web::main] // or #[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("ddhub-api".into(), "info".into());
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration");
    let application = Application::build(&configuration).await?;
    application.run_until_stopped().await?;
    Ok(())
}
