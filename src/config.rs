use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Where the dataset lives and how to get it
    #[serde(default)]
    pub dataset: DatasetConfig,
    /// HTTP timeout for the dataset download, in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Fixed seed for random picks; the clock is used when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Dataset location settings
#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    /// Candidate files, tried in order
    #[serde(default = "default_paths")]
    pub paths: Vec<PathBuf>,
    /// Download location of the delimited dataset file
    #[serde(default)]
    pub url: Option<String>,
    /// Where a download is written
    #[serde(default = "default_download_path")]
    pub download_path: PathBuf,
    /// Field delimiter of the dataset file
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            paths: default_paths(),
            url: None,
            download_path: default_download_path(),
            delimiter: default_delimiter(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            timeout: default_timeout(),
            seed: None,
        }
    }
}

impl DatasetConfig {
    /// Candidate paths with the download target appended when it is not
    /// already one of them, so a fresh download is always found.
    pub fn candidate_paths(&self) -> Vec<PathBuf> {
        let mut paths = self.paths.clone();
        if !paths.contains(&self.download_path) {
            paths.push(self.download_path.clone());
        }
        paths
    }
}

// Default value functions
fn default_paths() -> Vec<PathBuf> {
    vec![
        PathBuf::from("recipes.csv"),
        PathBuf::from("data/recipes.csv"),
        PathBuf::from("RAW_recipes.csv"),
        PathBuf::from("data/RAW_recipes.csv"),
    ]
}

fn default_download_path() -> PathBuf {
    PathBuf::from("data/recipes.csv")
}

fn default_delimiter() -> char {
    ','
}

fn default_timeout() -> u64 {
    60
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPEASY__ prefix
    /// 2. recipeasy.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPEASY__DATASET__URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the source priority.
/// `RECIPEASY__DATASET__PATHS` takes a comma-separated list.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipeasy").required(false))
        // Use double underscore for nested: RECIPEASY__DATASET__DOWNLOAD_PATH
        .add_source(
            Environment::with_prefix("RECIPEASY")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("dataset.paths")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
