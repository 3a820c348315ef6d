//! Service configuration in TOML format
//!
use crate::{packer, Error};

/// Where to listen and where to write the generated file.
///
/// The output path is explicit configuration rather than a process-wide
/// literal. Concurrent requests still race on the final write; the service
/// assumes a single writer per output file.
pub struct Config {
    listen: String,
    out_file: std::path::PathBuf,
}

pub const DEFAULT_LISTEN: &str = "0.0.0.0:8080";

#[derive(serde::Deserialize)]
struct ConfigToml {
    listen: Option<String>,
    out_file: Option<std::path::PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN.to_string(),
            out_file: std::path::PathBuf::from(packer::DEFAULT_OUTPUT_FILE),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<std::path::Path>>(config_file: P) -> Result<Self, Error> {
        use std::io::Read;

        // Read kong.toml file
        let mut f = std::fs::File::open(config_file)?;
        let mut toml_str = String::new();
        f.read_to_string(&mut toml_str)?;

        Self::from_str(&toml_str)
    }

    pub fn from_str(cfg_toml_str: &str) -> Result<Self, Error> {
        let ConfigToml { listen, out_file } = toml::from_str::<ConfigToml>(cfg_toml_str)?;

        let mut config = Self::default();
        if let Some(listen) = listen {
            config.listen = listen;
        }
        if let Some(out_file) = out_file {
            config.out_file = out_file;
        }
        Ok(config)
    }

    /// CLI flag override
    pub fn set_listen(&mut self, listen: String) {
        self.listen = listen;
    }

    pub fn listen_addr<'a>(&'a self) -> &'a str {
        self.listen.as_str()
    }

    pub fn out_file<'a>(&'a self) -> &'a std::path::Path {
        self.out_file.as_path()
    }
}
