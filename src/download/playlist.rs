use crate::error::DownloadError;
use crate::paths::{self, MediaKind, Scope};
use crate::progress;
use crate::sanitize;
use crate::urls::normalize_url;

use super::Downloader;

/// Tally of one playlist batch. The batch counts as a success as long as
/// anything at all was downloaded; stragglers are reported, not fatal.
#[derive(Debug, Default)]
pub struct DownloadOutcome {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub failures: Vec<String>,
}

impl DownloadOutcome {
    pub fn is_success(&self) -> bool {
        self.succeeded > 0
    }
}

/// Two digits for everyday playlists, widening past position 99.
fn index_prefix(position: usize) -> String {
    format!("{:02}", position)
}

impl Downloader {
    /// Download every entry of a playlist into its own directory under the
    /// playlists category, one at a time, in playlist order.
    pub async fn download_playlist(
        &self,
        url: &str,
        kind: MediaKind,
    ) -> Result<DownloadOutcome, DownloadError> {
        let url = normalize_url(url);

        println!("Analyzing playlist...");
        let playlist_title = sanitize::playlist_title(&self.playlist_title(&url).await);
        println!("Playlist: {}", playlist_title);

        let playlist_dir =
            paths::category_dir(self.output_root(), kind, Scope::Playlist).join(&playlist_title);
        paths::ensure_dir(&playlist_dir).await?;

        let declared = self.playlist_entry_count(&url).await;
        let urls = self.playlist_urls(&url).await;
        if urls.is_empty() {
            eprintln!("Error: could not read the playlist or it is empty");
            return Err(DownloadError::EmptyPlaylist);
        }

        // The enumerated list wins over the declared count.
        let total = if urls.len() != declared {
            println!(
                "Warning: expected {} items but found {} urls",
                declared,
                urls.len()
            );
            urls.len()
        } else {
            declared
        };

        println!("Found {} items in playlist", total);
        println!("Starting download...\n");

        let mut outcome = DownloadOutcome::default();
        for (index, item_url) in urls.iter().enumerate() {
            let position = index + 1;
            let title = sanitize::title(&self.video_title(item_url).await);
            progress::report(position, total, &title);

            let file_stem = format!("{} - {}", index_prefix(position), title);
            outcome.attempted += 1;
            if self
                .download_media(item_url, &playlist_dir.join(&file_stem), kind)
                .await
            {
                outcome.succeeded += 1;
            } else {
                eprintln!("Failed to download {}", file_stem);
                outcome.failed += 1;
                outcome.failures.push(file_stem);
            }
            println!();
        }

        println!(
            "\nPlaylist download complete! Successfully downloaded {}/{} items to {}",
            outcome.succeeded,
            outcome.attempted,
            playlist_dir.display()
        );

        Ok(outcome)
    }
}
