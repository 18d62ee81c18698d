//! Loading and saving settings files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("unable to open settings file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("unable to write settings file {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl SettingsError {
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => {
                source.kind() == io::ErrorKind::NotFound
            }
        }
    }
}

/// A settings model stored as flat text.
pub trait SettingsFile: Default {
    /// File name inside the data directory.
    const FILE_NAME: &'static str;

    /// Fold one `(section, key, value)` entry into the model. Unknown keys
    /// and unparsable values are ignored.
    fn apply(&mut self, section: Option<&str>, key: &str, value: &str);

    /// Whole-file serialization in a fixed key order.
    fn render(&self) -> String;

    fn parse(text: &str) -> Self {
        let mut model = Self::default();
        for (section, key, value) in crate::ini::pairs(text) {
            model.apply(section, key, value);
        }
        model
    }
}

pub fn path_in<T: SettingsFile>(data_dir: &Path) -> PathBuf {
    data_dir.join(T::FILE_NAME)
}

/// Bytes that are not UTF-8 are replaced, so a stray Latin-1 comment only
/// spoils its own line.
pub fn load<T: SettingsFile>(path: &Path) -> Result<T, SettingsError> {
    let bytes = fs::read(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(T::parse(&String::from_utf8_lossy(&bytes)))
}

/// Returns the number of bytes written.
pub fn save<T: SettingsFile>(path: &Path, model: &T) -> Result<usize, SettingsError> {
    let write_err = |source| SettingsError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(write_err)?;
    }
    let text = model.render();
    fs::write(path, &text).map_err(write_err)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "settings written");
    Ok(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default, Debug, PartialEq)]
    struct Probe {
        seen: Vec<String>,
    }

    impl SettingsFile for Probe {
        const FILE_NAME: &'static str = "probe.txt";

        fn apply(&mut self, section: Option<&str>, key: &str, value: &str) {
            self.seen
                .push(format!("{}:{key}={value}", section.unwrap_or("-")));
        }

        fn render(&self) -> String {
            self.seen.join("\n")
        }
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load::<Probe>(&path_in::<Probe>(dir.path())).unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
        assert!(err.is_not_found());
        assert!(err.to_string().contains("probe.txt"));
    }

    #[test]
    fn save_creates_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("probe.txt");
        let model = Probe {
            seen: vec!["a".into(), "b".into()],
        };
        assert_eq!(save(&path, &model).unwrap(), 3);
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb");
    }

    #[test]
    fn invalid_utf8_spoils_only_its_own_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = path_in::<Probe>(dir.path());
        fs::write(&path, b"# r\xE9glages\n[central]\neffect=3\nn\xE9=1\n").unwrap();

        let model = load::<Probe>(&path).unwrap();
        assert_eq!(model.seen, vec!["central:effect=3", "central:n\u{FFFD}=1"]);
    }

    #[test]
    fn parse_feeds_every_pair_in_order() {
        let model = Probe::parse("k=1\n[s]\nnoise\nj=2\n");
        assert_eq!(model.seen, vec!["-:k=1", "s:j=2"]);
    }
}
