pub mod playlist;
pub mod single;
pub mod trim;

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::DownloadError;
use crate::options::Options;
use crate::paths::MediaKind;
use crate::runner::CommandRunner;

pub const YT_DLP: &str = "yt-dlp";
pub const FFMPEG: &str = "ffmpeg";

/// One line of `--flat-playlist --dump-json` output. A line without an id is
/// noise rather than a playlist member.
#[derive(Debug, Deserialize)]
struct FlatEntry {
    id: Option<String>,
}

pub struct Downloader {
    options: Options,
    runner: Arc<dyn CommandRunner>,
}

impl Downloader {
    pub fn new(options: Options, runner: Arc<dyn CommandRunner>) -> Result<Self, DownloadError> {
        if !runner.is_available(YT_DLP) {
            return Err(DownloadError::ToolNotFound(YT_DLP));
        }
        Ok(Self { options, runner })
    }

    pub(crate) fn output_root(&self) -> &Path {
        &self.options.output_root
    }

    fn base_args() -> Vec<String> {
        vec!["--quiet".into(), "--no-warnings".into()]
    }

    /// Title of a single item. Comes back empty when the lookup fails; the
    /// sanitizer turns that into its fallback label, so callers never abort
    /// over a missing title.
    pub(crate) async fn video_title(&self, url: &str) -> String {
        let mut args = Self::base_args();
        args.push("--get-title".into());
        args.push(url.into());

        first_line(&self.runner.run_capturing(YT_DLP, &args).await)
    }

    pub(crate) async fn playlist_title(&self, url: &str) -> String {
        let mut args = Self::base_args();
        args.extend(["--print".into(), "playlist_title".into(), url.into()]);

        first_line(&self.runner.run_capturing(YT_DLP, &args).await)
    }

    /// Count declared by the playlist's flat dump. Lines that fail to parse
    /// contribute nothing; the enumerated URL list is what gets trusted when
    /// the two disagree.
    pub(crate) async fn playlist_entry_count(&self, url: &str) -> usize {
        let mut args = Self::base_args();
        args.extend(["--flat-playlist".into(), "--dump-json".into(), url.into()]);

        self.runner
            .run_capturing(YT_DLP, &args)
            .await
            .lines()
            .filter_map(|line| serde_json::from_str::<FlatEntry>(line.trim()).ok())
            .filter(|entry| entry.id.is_some())
            .count()
    }

    /// Member URLs of a playlist, in playlist order.
    pub(crate) async fn playlist_urls(&self, url: &str) -> Vec<String> {
        let mut args = Self::base_args();
        args.extend(["--flat-playlist".into(), "--get-url".into(), url.into()]);

        self.runner
            .run_capturing(YT_DLP, &args)
            .await
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Fetch one item with the extraction tool. `output_stem` is the
    /// destination path without an extension; the tool fills in whatever
    /// container it produced.
    pub(crate) async fn download_media(
        &self,
        url: &str,
        output_stem: &Path,
        kind: MediaKind,
    ) -> bool {
        let mut args = Self::base_args();
        args.push("-o".into());
        args.push(format!("{}.%(ext)s", output_stem.display()));
        if kind.is_audio() {
            args.extend(["-x".into(), "--audio-format".into(), "opus".into()]);
        }
        args.push("--no-playlist".into());
        args.push(url.into());

        if !self.runner.run(YT_DLP, &args).await {
            eprintln!("Error downloading {}", kind.label());
            return false;
        }
        true
    }
}

fn first_line(output: &str) -> String {
    output.lines().next().unwrap_or("").trim().to_owned()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::options::Options;
    use crate::runner::stub::ScriptedRunner;

    use super::*;

    fn downloader(runner: Arc<ScriptedRunner>) -> Downloader {
        let options = Options {
            output_root: std::env::temp_dir(),
        };
        Downloader::new(options, runner).unwrap()
    }

    #[tokio::test]
    async fn counts_only_parseable_entries() {
        let runner = Arc::new(ScriptedRunner {
            declared_entries: vec![
                ScriptedRunner::flat_entry("a"),
                "not json".into(),
                ScriptedRunner::flat_entry("b"),
                "{\"no_id\": true}".into(),
            ],
            ..ScriptedRunner::default()
        });

        let count = downloader(runner)
            .playlist_entry_count("https://www.youtube.com/playlist?list=x")
            .await;
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn enumerates_urls_in_order_skipping_blanks() {
        let runner = Arc::new(ScriptedRunner {
            entry_urls: vec!["https://a".into(), "".into(), "  https://b  ".into()],
            ..ScriptedRunner::default()
        });

        let urls = downloader(runner)
            .playlist_urls("https://www.youtube.com/playlist?list=x")
            .await;
        assert_eq!(urls, vec!["https://a".to_string(), "https://b".to_string()]);
    }

    #[tokio::test]
    async fn titles_are_trimmed_to_the_first_line() {
        let runner = Arc::new(ScriptedRunner {
            video_title: "A Title".into(),
            ..ScriptedRunner::default()
        });

        let title = downloader(runner).video_title("https://www.youtube.com/watch?v=x").await;
        assert_eq!(title, "A Title");
    }

    #[tokio::test]
    async fn audio_downloads_request_extraction() {
        let runner = Arc::new(ScriptedRunner::default());
        let downloader = downloader(runner.clone());

        let ok = downloader
            .download_media(
                "https://www.youtube.com/watch?v=x",
                Path::new("/tmp/stem"),
                MediaKind::Audio,
            )
            .await;

        assert!(ok);
        let calls = runner.download_calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].iter().any(|a| a == "-x"));
        assert!(calls[0].iter().any(|a| a == "--no-playlist"));
        assert!(calls[0].iter().any(|a| a == "/tmp/stem.%(ext)s"));
    }
}
