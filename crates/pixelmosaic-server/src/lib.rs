//! pixelmosaic server - HTTP front end for pixelmosaic-core
//!
//! # Module Structure
//!
//! - `config` - Command line / environment configuration
//! - `error` - Request errors and their status codes
//! - `form` - Multipart parsing and upload validation
//! - `routes` - `GET /` and `POST /process` handlers
//! - `storage` - Per-request output files
//!
//! # Routes
//!
//! - `GET /` returns the upload form
//! - `POST /process` takes `image`, `pixel_size`, `hue` and `saturation`
//!   multipart fields and answers with `image/jpeg`

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

pub mod config;
pub mod error;
pub mod form;
pub mod routes;
pub mod storage;

pub use config::Config;
pub use error::AppError;
pub use storage::OutputStore;

/// Shared, read-only state handed to every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<OutputStore>,
    pub jpeg_quality: u8,
}

impl AppState {
    pub fn new(store: OutputStore, jpeg_quality: u8) -> Self {
        Self {
            store: Arc::new(store),
            jpeg_quality,
        }
    }

    /// Build state from configuration. Does not touch the filesystem.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            OutputStore::new(&config.upload_dir, config.persist()),
            config.jpeg_quality,
        )
    }
}

/// Build the application router.
pub fn app(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/process", post(routes::process))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}
