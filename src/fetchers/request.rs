use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{Client, Response};
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::DatasetFetcher;
use crate::error::RecipeasyError;

pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self, RecipeasyError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(60));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("recipeasy/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl DatasetFetcher for RequestFetcher {
    async fn download(&self, url: &str, dest: &Path) -> Result<u64, RecipeasyError> {
        info!("Downloading dataset from {} to {}", url, dest.display());
        let mut response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecipeasyError::DownloadStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        // `dest` only ever holds a complete download.
        let partial = dest.with_extension("part");
        let written = match stream_to_file(&mut response, &partial, dest).await {
            Ok(written) => written,
            Err(e) => {
                warn!("Download of {} failed: {}", url, e);
                let _ = fs::remove_file(&partial).await;
                return Err(e);
            }
        };
        debug!("Wrote {} bytes to {}", written, dest.display());
        Ok(written)
    }
}

async fn stream_to_file(
    response: &mut Response,
    partial: &Path,
    dest: &Path,
) -> Result<u64, RecipeasyError> {
    let mut file = fs::File::create(partial).await?;
    let mut written: u64 = 0;
    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;
    drop(file);

    fs::rename(partial, dest).await?;
    Ok(written)
}
