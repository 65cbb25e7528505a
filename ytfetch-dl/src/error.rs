//! Error types for ytfetch-dl.

use pyo3::PyErr;
use std::fmt;
use thiserror::Error;

/// Exception class names that mark a network failure anywhere in the chain.
const NETWORK_ERRORS: &[&str] = &[
    "TransportError",
    "URLError",
    "ConnectionError",
    "TimeoutError",
    "SSLError",
];

/// One exception of a raised chain: its class names in MRO order and its message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RaisedException {
    pub names: Vec<String>,
    pub message: String,
}

impl RaisedException {
    pub fn new(names: &[&str], message: &str) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
            message: message.to_string(),
        }
    }

    fn is(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// yt-dlp reports a missing encoder as `ffmpeg not found` or `ffprobe and ffmpeg not found`.
    fn reports_missing_encoder(&self) -> bool {
        let message = self.message.to_lowercase();
        self.is("PostProcessingError")
            && message.contains("not found")
            && (message.contains("ffmpeg") || message.contains("ffprobe"))
    }
}

/// Broad category of a failed download.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownloadErrorKind {
    /// The host could not be reached or the connection dropped
    NetworkUnreachable,
    /// No extractor accepts the URL
    UnsupportedUrl,
    /// The extractor or downloader failed for any other reason
    ExtractionFailed,
    /// A post-processor needed ffmpeg and could not find it
    EncoderMissing,
}

impl DownloadErrorKind {
    /// Classify a failure from every exception in its chain, outermost first.
    ///
    /// A post-processing failure counts as a missing encoder only when its
    /// message says so; a failed conversion is an extraction failure.
    pub fn classify(chain: &[RaisedException]) -> Self {
        let has = |name: &str| chain.iter().any(|exc| exc.is(name));

        if chain.iter().any(RaisedException::reports_missing_encoder) {
            Self::EncoderMissing
        } else if has("UnsupportedError") {
            Self::UnsupportedUrl
        } else if NETWORK_ERRORS.iter().any(|&name| has(name)) {
            Self::NetworkUnreachable
        } else {
            Self::ExtractionFailed
        }
    }
}

impl fmt::Display for DownloadErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NetworkUnreachable => "network unreachable",
            Self::UnsupportedUrl => "unsupported URL",
            Self::ExtractionFailed => "extraction failed",
            Self::EncoderMissing => "encoder missing",
        };
        f.write_str(s)
    }
}

/// Errors returned by [`crate::dl::download`].
#[derive(Debug, Error)]
pub enum Error {
    /// yt-dlp reported a failure
    #[error("{kind}: {message}")]
    Download {
        kind: DownloadErrorKind,
        message: String,
    },

    /// The `yt_dlp` package could not be imported
    #[error("yt-dlp python package is not available")]
    LibraryUnavailable(#[source] PyErr),

    /// Any other interpreter error (conversion, bridge loading)
    #[error(transparent)]
    Python(#[from] PyErr),
}

impl Error {
    /// Download failure category, if this is a download failure.
    pub fn kind(&self) -> Option<DownloadErrorKind> {
        match self {
            Self::Download { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Result type alias for ytfetch-dl operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(chain: &[RaisedException]) -> DownloadErrorKind {
        DownloadErrorKind::classify(chain)
    }

    #[test]
    fn classifies_unsupported_url() {
        let chain = [
            RaisedException::new(
                &["DownloadError", "YoutubeDLError", "Exception"],
                "ERROR: Unsupported URL: https://example.com",
            ),
            RaisedException::new(
                &["UnsupportedError", "ExtractorError", "YoutubeDLError"],
                "Unsupported URL: https://example.com",
            ),
        ];
        assert_eq!(kind_of(&chain), DownloadErrorKind::UnsupportedUrl);
    }

    #[test]
    fn classifies_transport_cause_as_network() {
        let chain = [
            RaisedException::new(&["DownloadError"], "ERROR: Unable to download webpage"),
            RaisedException::new(&["ExtractorError"], "Unable to download webpage"),
            RaisedException::new(&["TransportError", "RequestError"], "Connection refused"),
        ];
        assert_eq!(kind_of(&chain), DownloadErrorKind::NetworkUnreachable);
    }

    #[test]
    fn classifies_builtin_timeout_as_network() {
        let chain = [RaisedException::new(
            &["TimeoutError", "OSError", "Exception"],
            "timed out",
        )];
        assert_eq!(kind_of(&chain), DownloadErrorKind::NetworkUnreachable);
    }

    #[test]
    fn classifies_missing_ffmpeg() {
        let chain = [
            RaisedException::new(
                &["DownloadError"],
                "ERROR: Postprocessing: ffprobe and ffmpeg not found. Please install or provide the path using --ffmpeg-location",
            ),
            RaisedException::new(
                &["FFmpegPostProcessorError", "PostProcessingError"],
                "ffprobe and ffmpeg not found. Please install or provide the path using --ffmpeg-location",
            ),
        ];
        assert_eq!(kind_of(&chain), DownloadErrorKind::EncoderMissing);
    }

    #[test]
    fn failed_conversion_is_not_missing_encoder() {
        let chain = [
            RaisedException::new(&["DownloadError"], "ERROR: Postprocessing: Conversion failed!"),
            RaisedException::new(&["PostProcessingError"], "Conversion failed!"),
            RaisedException::new(
                &["FFmpegPostProcessorError", "PostProcessingError"],
                "Invalid data found when processing input",
            ),
        ];
        assert_eq!(kind_of(&chain), DownloadErrorKind::ExtractionFailed);
    }

    #[test]
    fn not_found_outside_post_processing_is_not_missing_encoder() {
        let chain = [RaisedException::new(
            &["ExtractorError"],
            "ffmpeg playlist not found on page",
        )];
        assert_eq!(kind_of(&chain), DownloadErrorKind::ExtractionFailed);
    }

    #[test]
    fn falls_back_to_extraction_failed() {
        let chain = [RaisedException::new(
            &["DownloadError", "ExtractorError", "YoutubeDLError"],
            "ERROR: Video unavailable",
        )];
        assert_eq!(kind_of(&chain), DownloadErrorKind::ExtractionFailed);
        assert_eq!(kind_of(&[]), DownloadErrorKind::ExtractionFailed);
    }

    #[test]
    fn download_error_message_includes_kind() {
        let err = Error::Download {
            kind: DownloadErrorKind::UnsupportedUrl,
            message: "Unsupported URL: https://example.com".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "unsupported URL: Unsupported URL: https://example.com"
        );
        assert_eq!(err.kind(), Some(DownloadErrorKind::UnsupportedUrl));
    }
}
