use shopify_product_search::{App, AppConfig, GraphqlClient};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env()?;
    let client = GraphqlClient::new(&config)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdout = std::io::stdout();
    App::new(client).run(&args, &mut stdout.lock()).await?;

    Ok(())
}
