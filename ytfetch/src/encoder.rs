//! Lookup of the ffmpeg binary that yt-dlp uses for audio conversion.

use std::path::PathBuf;

pub const FFMPEG: &str = "ffmpeg";

/// Locate `ffmpeg` on `PATH`.
pub fn find_ffmpeg() -> Option<PathBuf> {
    match which::which(FFMPEG) {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "found ffmpeg");
            Some(path)
        }
        Err(e) => {
            tracing::debug!(error = %e, "ffmpeg not found on PATH");
            None
        }
    }
}
