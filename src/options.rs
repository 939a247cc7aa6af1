use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Options {
    /// Directory the video/ and audio/ category trees are created under.
    pub output_root: PathBuf,
}
