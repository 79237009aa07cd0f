use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use md5::{Digest, Md5};

use crate::error::KeywordError;

/// Keyword list shipped with the binary, used when no input file is given
const BUNDLED_KEYWORDS: &str = include_str!("../../assets/keywords.txt");

/// An ordered list of unique, non-empty keywords
///
/// Lines are trimmed, blank lines are dropped and repeated entries are
/// collapsed onto their first occurrence, so the order (and therefore any
/// seeded card built from it) is stable for a given input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordList {
    words: Vec<String>,
    /// Hex MD5 of the raw source bytes, when read from a file or the bundle
    digest: Option<String>,
}

impl KeywordList {
    /// Build a keyword list from raw entries
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut words = Vec::new();

        for entry in entries {
            let word = entry.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            if seen.insert(word.to_string()) {
                words.push(word.to_string());
            }
        }

        Self {
            words,
            digest: None,
        }
    }

    /// Parse keyword file contents, one keyword per line
    pub fn parse(content: &str) -> Self {
        Self::new(content.lines())
    }

    /// Load keywords from a text file
    pub fn from_file(path: &Path) -> Result<Self, KeywordError> {
        let unreadable = |source| KeywordError::InputUnreadable {
            path: path.to_path_buf(),
            source,
        };

        let bytes = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => KeywordError::InputNotFound(path.to_path_buf()),
            _ => unreadable(e),
        })?;
        let digest = md5_hex(&bytes);
        let content = String::from_utf8(bytes)
            .map_err(|e| unreadable(std::io::Error::new(ErrorKind::InvalidData, e)))?;

        let list = Self::parse(&content).with_digest(digest);
        log::info!(
            "Loaded {} unique keywords from {} (md5 {})",
            list.len(),
            path.display(),
            list.digest().unwrap_or_default()
        );
        Ok(list)
    }

    /// The default keyword list embedded in the binary
    pub fn bundled() -> Self {
        Self::parse(BUNDLED_KEYWORDS).with_digest(md5_hex(BUNDLED_KEYWORDS.as_bytes()))
    }

    fn with_digest(mut self, digest: String) -> Self {
        self.digest = Some(digest);
        self
    }

    /// Hex MD5 of the file the list was read from; `None` for lists built
    /// in memory
    pub fn digest(&self) -> Option<&str> {
        self.digest.as_deref()
    }

    /// Number of unique keywords
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

fn md5_hex(bytes: &[u8]) -> String {
    format!("{:x}", Md5::digest(bytes))
}

impl<S: AsRef<str>> FromIterator<S> for KeywordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
