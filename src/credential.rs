use std::{fmt, path::Path};

/// Directions API key. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Raw key value, only for building requests.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential([REDACTED])")
    }
}

pub trait ReadApiKey {
    /// Returns `None` when `path` is missing or unreadable.
    fn read_api_key(&self, path: &Path) -> Option<Credential>;
}

/// Reads the key from a plain text file, trimming surrounding whitespace.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileKeyReader;

impl ReadApiKey for FileKeyReader {
    fn read_api_key(&self, path: &Path) -> Option<Credential> {
        if !path.is_file() {
            log::warn!("File '{}' not found.", path.display());
            return None;
        }

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                log::error!("Error reading API key from file: {}", e);
                return None;
            }
        };

        let key = contents.trim();
        log::debug!("Loaded API key ({} chars) from {}", key.len(), path.display());
        Some(Credential::new(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn key_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_key_from_existing_file() {
        let file = key_file("test_api_key");

        let key = FileKeyReader.read_api_key(file.path());

        assert_eq!(key, Some(Credential::new("test_api_key")));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let file = key_file("  \ttest_api_key\r\n\n");

        let key = FileKeyReader.read_api_key(file.path()).unwrap();

        assert_eq!(key.as_str(), "test_api_key");
    }

    #[test]
    fn missing_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("non-existent-file.txt");

        assert_eq!(FileKeyReader.read_api_key(&path), None);
    }

    #[test]
    fn directory_is_absent() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(FileKeyReader.read_api_key(dir.path()), None);
    }

    #[test]
    fn whitespace_only_file_yields_empty_key() {
        let file = key_file("  \n");

        let key = FileKeyReader.read_api_key(file.path()).unwrap();

        assert!(key.is_empty());
        assert_eq!(key, Credential::new(""));
    }

    #[test]
    fn debug_output_hides_the_key() {
        let key = Credential::new("super-secret");

        assert!(!format!("{:?}", key).contains("super-secret"));
    }
}
