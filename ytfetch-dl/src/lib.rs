//! Type-safe Rust bindings to the [yt-dlp](https://github.com/yt-dlp/yt-dlp) Python library.
//!
//! ## Modules
//!
//! - [`dl`] - Core yt-dlp API wrappers
//! - [`media`] - Video and audio presets
//! - [`error`] - Download error kinds
//!
//! ## Quick Start
//!
//! **Audio preset** (MP3 when ffmpeg is installed):
//! ```no_run
//! use ytfetch_dl::{dl::download, media::MediaPreset};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opts = ytfetch_dl::dl::DownloadOptions::from(MediaPreset::AudioMp3)
//!     .with_home(Path::new("/home/me/Musica"));
//! download("https://youtu.be/example", opts)?;
//! # Ok(())
//! # }
//! ```
//!
//! **Custom configuration**:
//! ```no_run
//! use ytfetch_dl::dl::{download, DownloadOptions, OutputTemplates, PlaylistScope};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opts = DownloadOptions {
//!     format: Some("bestvideo+bestaudio".to_string()),
//!     outtmpl: Some(OutputTemplates::simple("%(uploader)s/%(title)s.%(ext)s".to_string())),
//!     quiet: Some(true),
//!     ..Default::default()
//! }
//! .with_playlist_scope(PlaylistScope::FirstItem);
//!
//! download("https://youtube.com/watch?v=example&list=PL123", opts)?;
//! # Ok(())
//! # }
//! ```

pub mod dl;
pub mod error;
pub mod media;

pub use error::{DownloadErrorKind, Error, RaisedException, Result};
