//! URL checks: HTTP reachability and playlist detection.

use regex::Regex;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use std::sync::LazyLock;
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const MAX_REDIRECTS: usize = 10;

/// A YouTube domain followed anywhere later by a `list=` parameter.
///
/// Any `list=` counts, even one unrelated to playlists.
static PLAYLIST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(youtube\.com|youtu\.be)/.*(list=)").expect("playlist pattern should compile")
});

/// Whether the URL points into a YouTube playlist.
pub fn is_playlist(url: &str) -> bool {
    PLAYLIST_PATTERN.is_match(url)
}

/// Send a HEAD request, following redirects, and accept only `200 OK`.
///
/// Other statuses and transport failures are reported on stdout and yield `false`.
pub fn is_reachable(url: &str, timeout: Duration) -> bool {
    match head_status(url, timeout) {
        Ok(StatusCode::OK) => true,
        Ok(status) => {
            println!("Error: Received a {} status code.", status.as_u16());
            false
        }
        Err(e) => {
            tracing::debug!(error = ?e, url, "head request failed");
            println!("Error: {e}");
            false
        }
    }
}

fn head_status(url: &str, timeout: Duration) -> reqwest::Result<StatusCode> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .redirect(Policy::limited(MAX_REDIRECTS))
        .build()?;

    let status = client.head(url).send()?.status();
    tracing::debug!(url, %status, "head request");

    Ok(status)
}
