mod request;

pub use request::RequestFetcher;

use async_trait::async_trait;
use std::path::Path;

use crate::error::RecipeasyError;

/// Something that can put the dataset file on disk.
#[async_trait]
pub trait DatasetFetcher: Send + Sync {
    /// Download `url` into `dest`, returning the number of bytes written.
    async fn download(&self, url: &str, dest: &Path) -> Result<u64, RecipeasyError>;
}

#[async_trait]
impl<T: DatasetFetcher + ?Sized> DatasetFetcher for &T {
    async fn download(&self, url: &str, dest: &Path) -> Result<u64, RecipeasyError> {
        (**self).download(url, dest).await
    }
}
