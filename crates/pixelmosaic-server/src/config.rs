//! Command line and environment configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use pixelmosaic_core::DEFAULT_JPEG_QUALITY;

/// Default cap on the whole multipart request body.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Server configuration. Every flag can also be set through the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "pixelmosaic", version, about = "Pixelate, saturate and hue-shift images")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "PIXELMOSAIC_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Directory processed images are written to, created at startup
    #[arg(long, env = "PIXELMOSAIC_UPLOAD_DIR", default_value = "static/uploads")]
    pub upload_dir: PathBuf,

    /// JPEG quality of the returned image (1-100)
    #[arg(
        long,
        env = "PIXELMOSAIC_JPEG_QUALITY",
        default_value_t = DEFAULT_JPEG_QUALITY,
        value_parser = clap::value_parser!(u8).range(1..=100)
    )]
    pub jpeg_quality: u8,

    /// Largest accepted request body in bytes
    #[arg(long, env = "PIXELMOSAIC_MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,

    /// Stream results without writing them to the upload directory
    #[arg(long, env = "PIXELMOSAIC_NO_PERSIST")]
    pub no_persist: bool,

    /// Default log filter, overridden by RUST_LOG
    #[arg(long, env = "PIXELMOSAIC_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Whether processed images are written to disk.
    pub fn persist(&self) -> bool {
        !self.no_persist
    }
}
