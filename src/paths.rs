use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Audio,
}

impl MediaKind {
    pub fn dir_name(self) -> &'static str {
        match self {
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
        }
    }

    /// Label used in user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
        }
    }

    pub fn is_audio(self) -> bool {
        self == MediaKind::Audio
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Single,
    Playlist,
}

impl Scope {
    pub fn dir_name(self) -> &'static str {
        match self {
            Scope::Single => "singles",
            Scope::Playlist => "playlists",
        }
    }
}

/// Category directory for a media kind and scope, e.g. `root/audio/playlists`.
pub fn category_dir(root: &Path, kind: MediaKind, scope: Scope) -> PathBuf {
    root.join(kind.dir_name()).join(scope.dir_name())
}

/// Create `dir` and any missing ancestors; an existing directory is fine.
pub async fn ensure_dir(dir: &Path) -> io::Result<()> {
    tokio::fs::create_dir_all(dir).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_category_directories() {
        let root = Path::new("out");
        assert_eq!(
            category_dir(root, MediaKind::Video, Scope::Single),
            Path::new("out/video/singles")
        );
        assert_eq!(
            category_dir(root, MediaKind::Audio, Scope::Playlist),
            Path::new("out/audio/playlists")
        );
    }

    #[tokio::test]
    async fn ensure_dir_creates_missing_ancestors() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b").join("c");

        ensure_dir(&nested).await.unwrap();
        assert!(nested.is_dir());
    }

    #[tokio::test]
    async fn ensure_dir_is_idempotent() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("video").join("singles");

        ensure_dir(&dir).await.unwrap();
        ensure_dir(&dir).await.unwrap();
        assert!(dir.is_dir());
    }
}
