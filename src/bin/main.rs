#[derive(clap::Parser)]
#[command(version, about)]
struct Cli {
    /// Read configuration from file
    #[arg(short = 'c', long, value_name = "CONFIG FILE")]
    config_file: Option<std::path::PathBuf>,

    /// Listen address of the webservice; default to 0.0.0.0:8080
    #[arg(short = 'l', long, value_name = "ADDR")]
    listen: Option<String>,
}

#[tokio::main]
async fn main() {
    use clap::Parser;
    use kong_gateway_webservice::*;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config_file {
        Some(config_file) => Config::from_file(config_file).unwrap(),
        None => Config::default(),
    };
    if let Some(listen) = cli.listen {
        config.set_listen(listen);
    }

    serve(&config).await.unwrap();
}
