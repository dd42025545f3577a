use log::{debug, error, info, warn};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use super::csv::parse_records;
use crate::config::DatasetConfig;
use crate::console::Console;
use crate::error::RecipeasyError;
use crate::fetchers::DatasetFetcher;
use crate::model::RecipeCollection;

/// What to do when no candidate file holds a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DownloadPolicy {
    /// Ask on the console; only an exact `yes` accepts
    #[default]
    Ask,
    /// Download without asking
    Always,
    /// Never download
    Never,
}

/// Read and parse one dataset file.
pub fn load_from_path(path: &Path, delimiter: char) -> Result<RecipeCollection, RecipeasyError> {
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    parse_records(&text, delimiter)
}

/// Try each candidate in order and return the first one that parses.
///
/// Missing files are skipped quietly; files that exist but cannot be read or
/// parsed are logged and skipped.
pub fn probe_paths(paths: &[PathBuf], delimiter: char) -> Option<(PathBuf, RecipeCollection)> {
    for path in paths {
        if !path.exists() {
            debug!("No dataset at {}", path.display());
            continue;
        }
        match load_from_path(path, delimiter) {
            Ok(recipes) => {
                info!("Loaded {} recipes from {}", recipes.len(), path.display());
                return Some((path.clone(), recipes));
            }
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
    }
    None
}

/// Finds the dataset on disk, offering a download when it is missing.
pub struct DatasetLoader<'a, F> {
    config: &'a DatasetConfig,
    fetcher: F,
    policy: DownloadPolicy,
}

impl<'a, F: DatasetFetcher> DatasetLoader<'a, F> {
    pub fn new(config: &'a DatasetConfig, fetcher: F) -> Self {
        Self {
            config,
            fetcher,
            policy: DownloadPolicy::default(),
        }
    }

    pub fn policy(mut self, policy: DownloadPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Load the dataset, downloading it first if needed and allowed.
    ///
    /// `Ok(None)` means there is no data: nothing on disk and the download was
    /// declined or failed. Only console I/O errors are returned as `Err`.
    pub async fn load<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<Option<RecipeCollection>, RecipeasyError> {
        let candidates = self.config.candidate_paths();

        if let Some((_, recipes)) = probe_paths(&candidates, self.config.delimiter) {
            return Ok(Some(recipes));
        }

        if !self.should_download(console)? {
            info!("Dataset download declined");
            return Ok(None);
        }

        let url = match self.config.url.as_deref() {
            Some(url) => url,
            None => {
                console.println(format!("Download failed: {}", RecipeasyError::MissingUrl))?;
                return Ok(None);
            }
        };

        console.println("Downloading dataset, this may take a while...")?;
        match self.fetcher.download(url, &self.config.download_path).await {
            Ok(bytes) => console.println(format!("Downloaded {bytes} bytes."))?,
            Err(e) => {
                error!("Dataset download failed: {}", e);
                console.println(format!("Download failed: {e}"))?;
                return Ok(None);
            }
        }

        Ok(probe_paths(&candidates, self.config.delimiter).map(|(_, recipes)| recipes))
    }

    fn should_download<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<bool, RecipeasyError> {
        match self.policy {
            DownloadPolicy::Always => Ok(true),
            DownloadPolicy::Never => Ok(false),
            DownloadPolicy::Ask => {
                let answer = console.prompt("Dataset not found. Download it now? (yes/no): ")?;
                Ok(answer.is_some_and(|a| a.trim().to_lowercase() == "yes"))
            }
        }
    }
}
