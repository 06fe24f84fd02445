use std::path::{Path, PathBuf};

pub const DEFAULT_DIRECTORY_NAME: &str = ".soul";
pub const CONFIG_FILE_NAME: &str = "soul.toml";
pub const LOG_FILE_NAME: &str = "soul-gui.log";

/// Root of every file written by the GUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoulDirectory(PathBuf);

impl SoulDirectory {
    pub fn new(p: PathBuf) -> Self {
        SoulDirectory(p)
    }

    /// `~/.soul`, or `None` if the home directory cannot be resolved.
    pub fn new_default() -> Option<Self> {
        dirs::home_dir().map(|home| SoulDirectory(home.join(DEFAULT_DIRECTORY_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    pub fn exists(&self) -> bool {
        self.0.as_path().exists()
    }

    pub fn init(&self) -> Result<(), std::io::Error> {
        std::fs::create_dir_all(&self.0)
    }

    pub fn config_file(&self) -> PathBuf {
        self.0.join(CONFIG_FILE_NAME)
    }

    pub fn log_file(&self) -> PathBuf {
        self.0.join(LOG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_live_under_the_directory() {
        let dir = SoulDirectory::new(PathBuf::from("/tmp/soul-test"));
        assert_eq!(dir.config_file(), PathBuf::from("/tmp/soul-test/soul.toml"));
        assert_eq!(dir.log_file(), PathBuf::from("/tmp/soul-test/soul-gui.log"));
    }
}
