//! CLI argument definitions using clap.

use crate::prompt::Terminal;
use clap::Parser;
use eyre::Result;

#[derive(Debug, Parser)]
#[command(name = "ytfetch")]
#[command(about = "Download YouTube videos or audio into your home folders")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub args: crate::dl::Args,
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    crate::dl::execute(cli.args.try_into()?, &mut Terminal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dl::Args;

    #[test]
    fn parses_no_arguments() {
        let cli = Cli::parse_from(["ytfetch"]);

        assert!(matches!(
            &cli.args,
            Args {
                url: None,
                audio: false,
                video: false,
                playlist: false,
                no_playlist: false,
                output: None,
                timeout: 30,
                skip_check: false,
            }
        ));
    }

    #[test]
    fn parses_url_and_audio() {
        let cli = Cli::parse_from(["ytfetch", "https://youtu.be/abc123", "-a"]);

        assert!(matches!(
            &cli.args,
            Args { url: Some(url), audio: true, .. }
            if url == "https://youtu.be/abc123"
        ));
    }

    #[test]
    fn parses_output_and_playlist() {
        let cli = Cli::parse_from([
            "ytfetch",
            "https://www.youtube.com/watch?v=abc123&list=PL123",
            "--no-playlist",
            "-o",
            "/tmp/output",
            "--timeout",
            "5",
        ]);

        assert!(matches!(
            &cli.args,
            Args {
                no_playlist: true,
                playlist: false,
                output,
                timeout: 5,
                ..
            } if output.as_deref().is_some_and(|p| p == "/tmp/output")
        ));
    }

    #[test]
    fn audio_conflicts_with_video() {
        let result = Cli::try_parse_from(["ytfetch", "--audio", "--video"]);
        assert!(result.is_err());
    }

    #[test]
    fn playlist_conflicts_with_no_playlist() {
        let result = Cli::try_parse_from(["ytfetch", "--playlist", "--no-playlist"]);
        assert!(result.is_err());
    }
}
