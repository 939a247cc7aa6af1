use std::path::{Path, PathBuf};

use crate::error::DownloadError;
use crate::paths::{self, MediaKind, Scope};
use crate::sanitize;
use crate::urls::normalize_url;

use super::{Downloader, FFMPEG};

impl Downloader {
    /// Download one item and keep only the `start..end` range of it.
    /// The full download lands in a scratch directory that is removed no
    /// matter how the trim itself goes. `start` and `end` pass through to
    /// the trimming tool untouched.
    pub async fn trim(
        &self,
        url: &str,
        start: &str,
        end: &str,
        kind: MediaKind,
    ) -> Result<bool, DownloadError> {
        if !self.runner.is_available(FFMPEG) {
            return Err(DownloadError::ToolNotFound(FFMPEG));
        }

        let url = normalize_url(url);
        let title = sanitize::title(&self.video_title(&url).await);

        let dir = paths::category_dir(self.output_root(), kind, Scope::Single);
        paths::ensure_dir(&dir).await?;
        let extension = if kind.is_audio() { "opus" } else { "mp4" };
        let output_path = dir.join(format!("trimmed_{}.{}", title, extension));

        let scratch = tempfile::tempdir_in(self.output_root())?;

        println!("Downloading and trimming {}...", kind.label());
        if !self
            .download_media(&url, &scratch.path().join("source"), kind)
            .await
        {
            return Ok(false);
        }

        let source = match first_file_in(scratch.path())? {
            Some(path) => path,
            None => {
                return Err(DownloadError::DownloadFailed(
                    "extraction tool produced no file to trim".into(),
                ))
            }
        };

        let args = trim_args(&source, &output_path, start, end, kind);
        if !self.runner.run(FFMPEG, &args).await {
            eprintln!("Error trimming {}", kind.label());
            return Ok(false);
        }

        println!("Trimming complete! Saved as: {}", output_path.display());
        Ok(true)
    }
}

/// Video cuts seek on the output side and copy both streams; audio cuts seek
/// on the input side and re-encode to opus.
fn trim_args(
    source: &Path,
    output: &Path,
    start: &str,
    end: &str,
    kind: MediaKind,
) -> Vec<String> {
    let mut args: Vec<String> = vec![
        "-hide_banner".into(),
        "-loglevel".into(),
        "error".into(),
        "-y".into(),
    ];

    if kind.is_audio() {
        args.extend([
            "-ss".into(),
            start.into(),
            "-to".into(),
            end.into(),
            "-i".into(),
            source.display().to_string(),
            "-c:a".into(),
            "libopus".into(),
        ]);
    } else {
        args.extend([
            "-i".into(),
            source.display().to_string(),
            "-ss".into(),
            start.into(),
            "-to".into(),
            end.into(),
            "-c:v".into(),
            "copy".into(),
            "-c:a".into(),
            "copy".into(),
        ]);
    }

    args.push(output.display().to_string());
    args
}

fn first_file_in(dir: &Path) -> std::io::Result<Option<PathBuf>> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            return Ok(Some(entry.path()));
        }
    }
    Ok(None)
}
