//! yt-dlp Python API wrappers.
//!
//! Type-safe bindings to [yt-dlp](https://github.com/yt-dlp/yt-dlp) `YoutubeDL` parameters.
//!
//! ```no_run
//! use ytfetch_dl::dl::download;
//! use ytfetch_dl::media::MediaPreset;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! download("https://youtu.be/example", MediaPreset::Video.into())?;
//! # Ok(())
//! # }
//! ```

use crate::error::{DownloadErrorKind, Error, RaisedException, Result};
use pyo3::ffi::c_str;
use pyo3::prelude::*;
use std::collections::HashMap;
use std::path::Path;

/// Filename templates using `%(field)s` syntax. Key `default` required.
#[derive(Clone, Debug, Default, PartialEq, Eq, IntoPyObject)]
pub struct OutputTemplates(pub Option<HashMap<String, String>>);

impl OutputTemplates {
    /// Create with a single default template.
    pub fn simple(default: String) -> Self {
        Self(Some(HashMap::from([("default".to_string(), default)])))
    }
}

/// Download directories: `home` plus optional type-specific paths.
#[derive(Clone, Debug, Default, PartialEq, Eq, IntoPyObject)]
pub struct OutputPaths(pub Option<HashMap<String, String>>);

impl OutputPaths {
    pub fn with_home(self, home: &Path) -> Self {
        let mut inner = self.0.unwrap_or_default();
        inner.insert("home".to_string(), home.to_string_lossy().to_string());
        Self(Some(inner))
    }

    /// The `home` entry, if set.
    pub fn home(&self) -> Option<&str> {
        self.0.as_ref()?.get("home").map(String::as_str)
    }
}

/// Per-extractor arguments: `{ie_key: {arg: [values]}}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, IntoPyObject)]
pub struct ExtractorArgs(pub HashMap<String, HashMap<String, Vec<String>>>);

impl ExtractorArgs {
    /// `generic:impersonate`, letting the generic extractor impersonate a browser.
    pub fn impersonate() -> Self {
        Self::default().with_arg("generic", "impersonate", "")
    }

    pub fn with_arg(mut self, extractor: &str, arg: &str, value: &str) -> Self {
        self.0
            .entry(extractor.to_string())
            .or_default()
            .entry(arg.to_string())
            .or_default()
            .push(value.to_string());
        self
    }
}

/// Post-download operation: `key` (e.g., `"FFmpegExtractAudio"`), optional codec and quality.
#[derive(Clone, Debug, Default, PartialEq, Eq, IntoPyObject)]
pub struct PostProcessor {
    pub key: String,
    pub preferredcodec: Option<String>,
    pub preferredquality: Option<String>,
}

impl PostProcessor {
    /// Extract the audio track with ffmpeg and re-encode it.
    pub fn extract_audio(codec: &str, quality: &str) -> Self {
        Self {
            key: "FFmpegExtractAudio".to_string(),
            preferredcodec: Some(codec.to_string()),
            preferredquality: Some(quality.to_string()),
        }
    }
}

/// How much of a playlist URL to fetch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaylistScope {
    /// Every entry of the playlist
    Whole,
    /// Only the first entry, playlist mode disabled
    FirstItem,
}

/// yt-dlp download configuration passed to `YoutubeDL(params)`.
///
/// Fields left as `None` are dropped before the dict reaches yt-dlp, so the
/// library applies its own default.
#[derive(Clone, Debug, Default, PartialEq, Eq, IntoPyObject)]
pub struct DownloadOptions {
    pub format: Option<String>,
    pub paths: Option<OutputPaths>,
    pub outtmpl: Option<OutputTemplates>,
    pub extractor_args: Option<ExtractorArgs>,
    pub noplaylist: Option<bool>,
    pub playlist_items: Option<String>,
    pub postprocessors: Option<Vec<PostProcessor>>,
    pub quiet: Option<bool>,
    pub no_warnings: Option<bool>,
}

impl DownloadOptions {
    /// Write downloads into `home`.
    pub fn with_home(mut self, home: &Path) -> Self {
        self.paths = Some(self.paths.unwrap_or_default().with_home(home));
        self
    }

    /// Apply a playlist choice.
    pub fn with_playlist_scope(mut self, scope: PlaylistScope) -> Self {
        match scope {
            PlaylistScope::Whole => {
                self.noplaylist = Some(false);
            }
            PlaylistScope::FirstItem => {
                self.playlist_items = Some("1".to_string());
                self.noplaylist = Some(true);
            }
        }
        self
    }
}

fn bridge(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    PyModule::from_code(py, c_str!(include_str!("./dl.py")), c"dl.py", c"dl")
}

/// Download a single URL with `YoutubeDL(params).download([url])`.
///
/// A raised exception or a non-zero return code becomes [`Error::Download`]
/// with its [`DownloadErrorKind`].
pub fn download(url: &str, opts: DownloadOptions) -> Result<()> {
    Python::attach(|py| {
        py.import("yt_dlp").map_err(Error::LibraryUnavailable)?;

        let module = bridge(py)?;
        let py_params = opts.into_pyobject(py)?;

        tracing::debug!(url, "calling YoutubeDL.download");

        match module.getattr("download")?.call1((url, py_params)) {
            Ok(code) => match code.extract::<i64>()? {
                0 => Ok(()),
                code => Err(Error::Download {
                    kind: DownloadErrorKind::ExtractionFailed,
                    message: format!("yt-dlp finished with return code {code}"),
                }),
            },
            Err(err) => Err(download_error(py, &module, err)),
        }
    })
}

/// Walk the exception chain with the bridge's `error_chain`.
fn raised_chain(
    py: Python<'_>,
    module: &Bound<'_, PyModule>,
    err: &PyErr,
) -> PyResult<Vec<RaisedException>> {
    let chain = module
        .getattr("error_chain")?
        .call1((err.value(py),))?
        .extract::<Vec<(Vec<String>, String)>>()?;

    Ok(chain
        .into_iter()
        .map(|(names, message)| RaisedException { names, message })
        .collect())
}

/// Turn a raised exception into a classified download error.
///
/// If the chain cannot be read, the exception is kept as an extraction failure.
fn download_error(py: Python<'_>, module: &Bound<'_, PyModule>, err: PyErr) -> Error {
    let kind = match raised_chain(py, module, &err) {
        Ok(chain) => {
            let kind = DownloadErrorKind::classify(&chain);
            tracing::debug!(?kind, ?chain, "download raised");
            kind
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to inspect download error");
            DownloadErrorKind::ExtractionFailed
        }
    };

    Error::Download {
        kind,
        message: err.value(py).to_string(),
    }
}
