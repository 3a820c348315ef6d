mod config;
mod hcl;
mod packer;
mod payload;
mod server;

// re-exports
pub use config::Config;
pub use packer::{packer_template, write_packer_config, DEFAULT_OUTPUT_FILE};
pub use payload::DeployPayload;
pub use server::router;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("empty request body")]
    EmptyBody,
    #[error("failed to decode JSON payload: {0}")]
    JsonDecodeError(serde_json::Error),
    #[error("request body contains unexpected extra data after JSON payload")]
    TrailingData,
    #[error("missing or invalid required field: {0} is a required field and cannot be empty")]
    EmptyField(&'static str),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    TomlError(#[from] toml::de::Error),
}

/// Bind the listen address and serve the deploy endpoint until shutdown.
pub async fn serve(config: &Config) -> Result<(), Error> {
    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    let app = server::router(config.out_file().to_path_buf());
    axum::serve(listener, app).await?;

    Ok(())
}
