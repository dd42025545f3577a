//! Browse a tabular recipe dataset from the terminal.
//!
//! The core is pure: [`search_by_name`] and [`search_by_ingredient`] filter a
//! [`RecipeCollection`], and [`format_recipe`] renders a single [`Record`].
//! Around it sit the dataset loader (with an optional download), the
//! configuration, and the interactive [`Session`].

pub mod config;
pub mod console;
pub mod dataset;
pub mod display;
pub mod error;
pub mod fetchers;
pub mod model;
pub mod random;
pub mod search;
pub mod session;

pub use config::{load_config, AppConfig, DatasetConfig};
pub use console::Console;
pub use dataset::{load_from_path, DatasetLoader, DownloadPolicy};
pub use display::{display_recipe, format_recipe};
pub use error::RecipeasyError;
pub use fetchers::{DatasetFetcher, RequestFetcher};
pub use model::{fields, FieldValue, RecipeCollection, Record};
pub use random::{RandomSource, SeededRandom};
pub use search::{search_by_ingredient, search_by_name};
pub use session::{Session, State};
