//! ytfetch - download YouTube videos or audio with yt-dlp.

pub mod cli;
pub mod dl;
pub mod encoder;
pub mod link;
pub mod paths;
pub mod plan;
pub mod prompt;
