//! Interactive download flow: ask, check, build options, delegate to yt-dlp.

use crate::plan::{Plan, Request};
use crate::prompt::Prompt;
use crate::{encoder, link, paths};
use color_eyre::Section;
use eyre::{Result, bail};
use std::path::PathBuf;
use std::time::Duration;
use ytfetch_dl::dl::{PlaylistScope, download};
use ytfetch_dl::{DownloadErrorKind, Error};

/// Default timeout for the reachability check, in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

const URL_QUESTION: &str = "Enter the URL of the YouTube video:";
const PLAYLIST_QUESTION: &str =
    "This link is part of a playlist. Do I have to download the entire playlist?";
const AUDIO_QUESTION: &str = "Do you want to download only the audio?";

/// CLI arguments. Every answer left out here is asked interactively.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// URL of the YouTube video or playlist
    pub url: Option<String>,

    /// Download only the audio track
    #[arg(short, long, conflicts_with = "video")]
    pub audio: bool,

    /// Download the video
    #[arg(long)]
    pub video: bool,

    /// Download the entire playlist when the URL belongs to one
    #[arg(long, conflicts_with = "no_playlist")]
    pub playlist: bool,

    /// Download only the first playlist entry
    #[arg(long)]
    pub no_playlist: bool,

    /// Output directory (default: ~/Musica or ~/Video, else ~/Desktop)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Timeout in seconds for the URL check
    #[arg(long, default_value_t = DEFAULT_TIMEOUT)]
    pub timeout: u64,

    /// Skip the HTTP check of the URL
    #[arg(long)]
    pub skip_check: bool,
}

/// Resolved configuration for one download.
#[derive(Debug)]
pub struct Config {
    pub url: Option<String>,
    pub audio_only: Option<bool>,
    pub whole_playlist: Option<bool>,
    pub output_dir: Option<PathBuf>,
    pub timeout: Duration,
    pub check_url: bool,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        if args.timeout == 0 {
            bail!("timeout must be at least one second");
        }

        Ok(Self {
            url: args.url,
            audio_only: flag_pair(args.audio, args.video),
            whole_playlist: flag_pair(args.playlist, args.no_playlist),
            output_dir: args.output,
            timeout: Duration::from_secs(args.timeout),
            check_url: !args.skip_check,
        })
    }
}

/// `Some(true)` / `Some(false)` when one of a yes/no flag pair is set.
fn flag_pair(yes: bool, no: bool) -> Option<bool> {
    match (yes, no) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

fn answer(preset: Option<bool>, prompt: &mut impl Prompt, question: &str) -> Result<bool> {
    match preset {
        Some(answer) => Ok(answer),
        None => prompt.confirm(question),
    }
}

/// Answers collected before anything is downloaded.
#[derive(Debug, PartialEq, Eq)]
pub struct Answers {
    pub url: String,
    /// `None` when the URL is not a playlist link
    pub playlist: Option<PlaylistScope>,
    pub audio_only: bool,
}

/// Ask for the URL, check it, then ask the playlist (only for playlist links)
/// and audio questions not already answered by flags.
pub fn ask(config: &Config, prompt: &mut impl Prompt) -> Result<Answers> {
    let url = match &config.url {
        Some(url) => url.clone(),
        None => prompt.text(URL_QUESTION)?,
    };
    let url = url.trim().to_string();

    if config.check_url && !link::is_reachable(&url, config.timeout) {
        bail!("error in the link or in the connection: {url}");
    }

    let playlist = if link::is_playlist(&url) {
        let whole = answer(config.whole_playlist, prompt, PLAYLIST_QUESTION)?;
        Some(if whole {
            PlaylistScope::Whole
        } else {
            PlaylistScope::FirstItem
        })
    } else {
        None
    };

    let audio_only = answer(config.audio_only, prompt, AUDIO_QUESTION)?;

    Ok(Answers {
        url,
        playlist,
        audio_only,
    })
}

pub fn execute(config: Config, prompt: &mut impl Prompt) -> Result<()> {
    let Answers {
        url,
        playlist,
        audio_only,
    } = ask(&config, prompt)?;

    let output_dir = match config.output_dir {
        Some(dir) => dir,
        None => paths::home_download_dir(audio_only)?,
    };

    let encoder_available = audio_only && encoder::find_ffmpeg().is_some();

    let plan = Plan::build(Request {
        audio_only,
        playlist,
        encoder_available,
        output_dir,
    });

    tracing::info!(url, ?playlist, preset = ?plan.preset, "starting download");
    println!("{}", plan.announcement());

    download(&url, plan.options).map_err(with_suggestion)?;

    tracing::info!(dir = %plan.output_dir.display(), "download finished");
    println!(
        "Download completed! File saved to: {}",
        plan.output_dir.display()
    );

    Ok(())
}

/// Hint shown under a failed download.
fn suggestion_for(err: &Error) -> Option<&'static str> {
    match err {
        Error::Download { kind, .. } => match kind {
            DownloadErrorKind::EncoderMissing => {
                Some("install ffmpeg and make sure it is on PATH")
            }
            DownloadErrorKind::UnsupportedUrl => {
                Some("check that the link points to a YouTube video or playlist")
            }
            DownloadErrorKind::NetworkUnreachable => {
                Some("check your internet connection and try again")
            }
            DownloadErrorKind::ExtractionFailed => None,
        },
        Error::LibraryUnavailable(_) => Some("install yt-dlp with `pip install yt-dlp`"),
        Error::Python(_) => None,
    }
}

fn with_suggestion(err: Error) -> eyre::Report {
    let suggestion = suggestion_for(&err);
    let report = eyre::Report::new(err).wrap_err("download failed");

    match suggestion {
        Some(hint) => report.suggestion(hint),
        None => report,
    }
}
