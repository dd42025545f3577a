pub mod csv;
mod loader;

pub use loader::{load_from_path, probe_paths, DatasetLoader, DownloadPolicy};
