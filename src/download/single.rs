use crate::error::DownloadError;
use crate::paths::{self, MediaKind, Scope};
use crate::sanitize;
use crate::urls::normalize_url;

use super::Downloader;

impl Downloader {
    /// Download one video or audio track into the singles category.
    /// The bool is the extraction tool's verdict; environmental problems
    /// come back as errors.
    pub async fn download_single(
        &self,
        url: &str,
        kind: MediaKind,
    ) -> Result<bool, DownloadError> {
        let url = normalize_url(url);
        let title = sanitize::title(&self.video_title(&url).await);

        let dir = paths::category_dir(self.output_root(), kind, Scope::Single);
        paths::ensure_dir(&dir).await?;

        println!("Downloading {}...", kind.label());
        if !self.download_media(&url, &dir.join(&title), kind).await {
            return Ok(false);
        }

        println!("Download complete!");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tempfile::TempDir;

    use crate::options::Options;
    use crate::runner::stub::ScriptedRunner;

    use super::*;

    fn downloader_in(root: &TempDir, runner: Arc<ScriptedRunner>) -> Downloader {
        let options = Options {
            output_root: root.path().to_path_buf(),
        };
        Downloader::new(options, runner).unwrap()
    }

    #[tokio::test]
    async fn downloads_one_video_into_singles() {
        let root = TempDir::new().unwrap();
        let runner = Arc::new(ScriptedRunner {
            video_title: "My Title".into(),
            create_files: true,
            ..ScriptedRunner::default()
        });
        let downloader = downloader_in(&root, runner.clone());

        let ok = downloader
            .download_single("https://youtube.com/watch?v=X", MediaKind::Video)
            .await
            .unwrap();
        assert!(ok);

        let singles = root.path().join("video").join("singles");
        let files: Vec<_> = std::fs::read_dir(&singles)
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(files, vec![std::ffi::OsString::from("My Title.mp4")]);
    }

    #[tokio::test]
    async fn failed_download_reports_failure_not_error() {
        let root = TempDir::new().unwrap();
        let url = "https://youtube.com/watch?v=X";
        let runner = Arc::new(ScriptedRunner {
            failing_urls: vec![url.into()],
            ..ScriptedRunner::default()
        });
        let downloader = downloader_in(&root, runner.clone());

        let ok = downloader.download_single(url, MediaKind::Audio).await.unwrap();
        assert!(!ok);
    }

    #[tokio::test]
    async fn music_urls_are_normalized() {
        let root = TempDir::new().unwrap();
        let runner = Arc::new(ScriptedRunner::default());
        let downloader = downloader_in(&root, runner.clone());

        downloader
            .download_single("https://music.youtube.com/watch?v=X", MediaKind::Audio)
            .await
            .unwrap();

        let calls = runner.download_calls();
        assert_eq!(calls.len(), 1);
        let url = calls[0].last().unwrap();
        assert!(url.contains("www.youtube.com"));
        assert!(!url.contains("music.youtube.com"));
    }
}
