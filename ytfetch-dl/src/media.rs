//! Media presets: best combined video, or best audio with optional MP3 conversion.
//!
//! ```no_run
//! use ytfetch_dl::dl::{DownloadOptions, download};
//! use ytfetch_dl::media::MediaPreset;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opts: DownloadOptions = MediaPreset::audio(true).into();
//! download("https://youtu.be/example", opts)?;
//! # Ok(())
//! # }
//! ```
//!
//! **Output:** `<home>/<title>.<ext>`

use crate::dl::{DownloadOptions, ExtractorArgs, OutputTemplates, PostProcessor};

/// Filename template: media title plus the extension chosen by yt-dlp.
pub const DEFAULT_OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Codec used when converting audio.
pub const AUDIO_CODEC: &str = "mp3";

/// Bitrate in kbps used when converting audio.
pub const AUDIO_QUALITY: &str = "192";

/// What to fetch and whether to transcode it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MediaPreset {
    /// Best single file with both audio and video
    #[default]
    Video,
    /// Best audio stream converted to MP3 by ffmpeg
    AudioMp3,
    /// Best audio stream kept as delivered
    Audio,
}

impl MediaPreset {
    /// Audio preset depending on whether ffmpeg can run the conversion.
    pub fn audio(encoder_available: bool) -> Self {
        if encoder_available {
            Self::AudioMp3
        } else {
            Self::Audio
        }
    }

    /// Status line shown before the download starts.
    pub fn announcement(&self) -> &'static str {
        match self {
            Self::Video => "Downloading video...",
            Self::AudioMp3 => "Downloading and converting to MP3...",
            Self::Audio => "FFmpeg not found. Downloading audio without converting...",
        }
    }

    pub fn is_audio(&self) -> bool {
        !matches!(self, Self::Video)
    }
}

impl From<MediaPreset> for DownloadOptions {
    /// `best` for video, `bestaudio` for audio; the MP3 preset adds `FFmpegExtractAudio`
    /// and plain audio sends an empty post-processor list.
    fn from(preset: MediaPreset) -> Self {
        let (format, postprocessors) = match preset {
            MediaPreset::Video => ("best", None),
            MediaPreset::AudioMp3 => (
                "bestaudio",
                Some(vec![PostProcessor::extract_audio(AUDIO_CODEC, AUDIO_QUALITY)]),
            ),
            MediaPreset::Audio => ("bestaudio", Some(vec![])),
        };

        Self {
            format: Some(format.to_string()),
            outtmpl: Some(OutputTemplates::simple(DEFAULT_OUTPUT_TEMPLATE.to_string())),
            extractor_args: Some(ExtractorArgs::impersonate()),
            postprocessors,
            ..Default::default()
        }
    }
}
