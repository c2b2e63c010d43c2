use crate::config::toml_config::TomlConfig;
use crate::config::AppConfig;
use crate::utils::error::Result;
use clap::Parser;

/// Command line flags. Anything given here wins over the TOML file, which in
/// turn wins over the built-in defaults.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "yob-verify")]
#[command(about = "Checks (name, year of birth) pairs against a CSV record table")]
pub struct ServeConfig {
    /// Address to listen on [default: 0.0.0.0]
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on [default: 5000]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// CSV file with `Name` and `YOB` columns [default: mock_database.csv]
    #[arg(long)]
    pub data_path: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log output format: compact or json
    #[arg(long)]
    pub log_format: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ServeConfig {
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = AppConfig::default();

        if let Some(path) = &self.config {
            TomlConfig::from_file(path)?.apply_to(&mut config);
        }

        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(data_path) = &self.data_path {
            config.data_path = data_path.clone();
        }
        if let Some(log_format) = &self.log_format {
            config.log_format = log_format.clone();
        }
        config.verbose = self.verbose;

        Ok(config)
    }
}
