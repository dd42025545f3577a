use thiserror::Error;

/// Errors that can occur while loading, downloading or browsing a recipe dataset
#[derive(Error, Debug)]
pub enum RecipeasyError {
    /// Failed to reach the dataset URL
    #[error("Failed to fetch dataset: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The server answered the download with a non-success status
    #[error("Download of {url} failed with HTTP status {status}")]
    DownloadStatus { url: String, status: u16 },

    /// A download was requested but no dataset URL is configured
    #[error("No dataset URL configured (set RECIPEASY__DATASET__URL or dataset.url in recipeasy.toml)")]
    MissingUrl,

    /// Reading the dataset or talking to the terminal failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset file could not be turned into recipe records
    #[error("Failed to parse dataset: {0}")]
    ParseError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
