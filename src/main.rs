mod download;
mod error;
mod options;
mod paths;
mod progress;
mod runner;
mod sanitize;
mod urls;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use download::Downloader;
use error::DownloadError;
use options::Options;
use paths::MediaKind;
use runner::SystemRunner;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[clap(subcommand)]
    subcmd: SubCmd,

    #[clap(short, long, default_value = ".")]
    /// set the root directory downloads are organized under
    output: PathBuf,
}

#[derive(Subcommand, Debug)]
enum SubCmd {
    /// Download a full video
    Video {
        #[clap(value_parser = url_parser)]
        url: String,
    },
    /// Download audio only
    Audio {
        #[clap(value_parser = url_parser)]
        url: String,
    },
    /// Download every video in a playlist
    PlaylistVideo {
        #[clap(value_parser = url_parser)]
        url: String,
    },
    /// Download audio for every entry in a playlist
    PlaylistAudio {
        #[clap(value_parser = url_parser)]
        url: String,
    },
    /// Download a video and keep only a time range, without re-encoding
    TrimVideo {
        #[clap(value_parser = url_parser)]
        url: String,

        /// range start, HH:MM:SS or plain seconds
        start: String,

        /// range end, HH:MM:SS or plain seconds
        end: String,
    },
    /// Download audio and keep only a time range
    TrimAudio {
        #[clap(value_parser = url_parser)]
        url: String,

        /// range start, HH:MM:SS or plain seconds
        start: String,

        /// range end, HH:MM:SS or plain seconds
        end: String,
    },
}

fn url_parser(url: &str) -> Result<String, String> {
    if url.starts_with("http") {
        Ok(url.to_string())
    } else {
        Err("URL must start with http or https".to_string())
    }
}

fn is_playlist_url(url: &str) -> bool {
    url.contains("playlist?")
}

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    let options = Options {
        output_root: args.output,
    };
    let downloader = match Downloader::new(options, Arc::new(SystemRunner)) {
        Ok(downloader) => downloader,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    let success = match run(args.subcmd, &downloader).await {
        Ok(success) => success,
        Err(err) => {
            eprintln!("Error: {}", err);
            false
        }
    };

    std::process::exit(if success { 0 } else { 1 });
}

async fn run(cmd: SubCmd, downloader: &Downloader) -> Result<bool, DownloadError> {
    match cmd {
        SubCmd::Video { url } => single_cmd(downloader, &url, MediaKind::Video).await,
        SubCmd::Audio { url } => single_cmd(downloader, &url, MediaKind::Audio).await,
        SubCmd::PlaylistVideo { url } => playlist_cmd(downloader, &url, MediaKind::Video).await,
        SubCmd::PlaylistAudio { url } => playlist_cmd(downloader, &url, MediaKind::Audio).await,
        SubCmd::TrimVideo { url, start, end } => {
            trim_cmd(downloader, &url, &start, &end, MediaKind::Video).await
        }
        SubCmd::TrimAudio { url, start, end } => {
            trim_cmd(downloader, &url, &start, &end, MediaKind::Audio).await
        }
    }
}

async fn single_cmd(
    downloader: &Downloader,
    url: &str,
    kind: MediaKind,
) -> Result<bool, DownloadError> {
    // A playlist link handed to the single commands gets the batch treatment.
    if is_playlist_url(url) {
        println!("URL is a playlist, downloading it as one");
        let outcome = downloader.download_playlist(url, kind).await?;
        return Ok(outcome.is_success());
    }
    downloader.download_single(url, kind).await
}

async fn playlist_cmd(
    downloader: &Downloader,
    url: &str,
    kind: MediaKind,
) -> Result<bool, DownloadError> {
    if !is_playlist_url(url) {
        eprintln!("Error: not a playlist URL");
        return Ok(false);
    }
    let outcome = downloader.download_playlist(url, kind).await?;
    Ok(outcome.is_success())
}

async fn trim_cmd(
    downloader: &Downloader,
    url: &str,
    start: &str,
    end: &str,
    kind: MediaKind,
) -> Result<bool, DownloadError> {
    if is_playlist_url(url) {
        eprintln!("Error: cannot trim a playlist URL");
        return Ok(false);
    }
    downloader.trim(url, start, end, kind).await
}
