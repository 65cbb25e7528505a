//! Download options assembled from the user's answers.

use std::path::PathBuf;
use ytfetch_dl::dl::{DownloadOptions, PlaylistScope};
use ytfetch_dl::media::MediaPreset;

/// Everything the options depend on, already resolved.
#[derive(Clone, Debug)]
pub struct Request {
    pub audio_only: bool,
    /// `None` when the URL is not a playlist
    pub playlist: Option<PlaylistScope>,
    pub encoder_available: bool,
    pub output_dir: PathBuf,
}

/// Options ready to hand to yt-dlp.
#[derive(Clone, Debug)]
pub struct Plan {
    pub preset: MediaPreset,
    pub options: DownloadOptions,
    pub output_dir: PathBuf,
}

impl Plan {
    pub fn build(request: Request) -> Self {
        let preset = if request.audio_only {
            MediaPreset::audio(request.encoder_available)
        } else {
            MediaPreset::Video
        };

        let mut options = DownloadOptions::from(preset).with_home(&request.output_dir);

        if let Some(scope) = request.playlist {
            options = options.with_playlist_scope(scope);
        }

        tracing::debug!(?preset, ?options, "built download options");

        Self {
            preset,
            options,
            output_dir: request.output_dir,
        }
    }

    pub fn announcement(&self) -> &'static str {
        self.preset.announcement()
    }
}
