//! Output directory selection under the user's home folder.

use eyre::{OptionExt, Result};
use std::path::{Path, PathBuf};

/// Preferred folder for audio downloads.
pub const MUSIC_DIR: &str = "Musica";
/// Preferred folder for video downloads.
pub const VIDEO_DIR: &str = "Video";
/// Fallback when the preferred folder does not exist.
pub const DESKTOP_DIR: &str = "Desktop";

/// Pick the download folder under `home`.
///
/// Nothing is created: a missing preferred folder falls back to the desktop path,
/// whether or not that one exists.
pub fn download_dir(home: &Path, audio_only: bool) -> PathBuf {
    let preferred = home.join(if audio_only { MUSIC_DIR } else { VIDEO_DIR });

    if preferred.exists() {
        preferred
    } else {
        home.join(DESKTOP_DIR)
    }
}

/// [`download_dir`] for the current user's home directory.
pub fn home_download_dir(audio_only: bool) -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_eyre("failed to determine home directory")?;
    let dir = download_dir(&home, audio_only);

    tracing::debug!(audio_only, dir = %dir.display(), "selected output directory");

    Ok(dir)
}
