//! Sample store - the phrases new streams are cut from
//!
//! A word list is newline-delimited text. Each line becomes one sample whose
//! trailing whitespace is replaced by exactly one space, so consecutive streams
//! in the same column read as separate words. Lines past [`MAX_SAMPLES`] are
//! ignored and long lines are truncated to [`MAX_WORD_LEN`] glyphs.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use arrayvec::ArrayVec;
use thiserror::Error;
use tracing::{info, warn};

use crate::types::{DEFAULT_SAMPLES, MAX_SAMPLES, MAX_WORD_LEN};

/// Fixed-capacity glyph sequence; copying one never allocates
pub type Glyphs = ArrayVec<char, MAX_WORD_LEN>;

/// Why a word list could not be used
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("cannot read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list {path} has no entries")]
    Empty { path: PathBuf },
}

/// Bytes of one line that can matter: [`MAX_WORD_LEN`] glyphs of up to four
/// UTF-8 bytes each
pub const LINE_BYTE_CAP: u64 = MAX_WORD_LEN as u64 * 4;

/// Consume input up to and including the next newline
fn skip_line<R: BufRead>(reader: &mut R) -> io::Result<()> {
    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            return Ok(());
        }
        match buf.iter().position(|&b| b == b'\n') {
            Some(i) => {
                reader.consume(i + 1);
                return Ok(());
            }
            None => {
                let len = buf.len();
                reader.consume(len);
            }
        }
    }
}

/// Normalize one raw line into a sample.
///
/// Trailing whitespace (including `\r` and `\n`) collapses into one space.
///
/// ```
/// use word_rain_core::samples::normalize_entry;
///
/// let s: String = normalize_entry("cd\n").iter().collect();
/// assert_eq!(s, "cd ");
/// ```
pub fn normalize_entry(line: &str) -> Glyphs {
    let mut glyphs = Glyphs::new();
    glyphs.extend(line.trim_end().chars().take(MAX_WORD_LEN - 1));
    glyphs.push(' ');
    glyphs
}

/// Ordered, immutable collection of samples
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleStore {
    entries: Vec<Glyphs>,
}

impl SampleStore {
    /// The three built-in phrases
    pub fn defaults() -> Self {
        Self {
            entries: DEFAULT_SAMPLES.iter().map(|s| normalize_entry(s)).collect(),
        }
    }

    /// Build a store from in-memory lines. Returns `None` when `lines` is empty.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        let entries: Vec<Glyphs> = lines
            .into_iter()
            .take(MAX_SAMPLES)
            .map(normalize_entry)
            .collect();
        if entries.is_empty() {
            None
        } else {
            Some(Self { entries })
        }
    }

    /// Read newline-delimited entries. Invalid UTF-8 is replaced, not rejected.
    ///
    /// At most [`LINE_BYTE_CAP`] bytes of a line are kept; the rest of an
    /// overlong line is skipped without being buffered.
    pub fn read_entries<R: BufRead>(mut reader: R) -> io::Result<Vec<Glyphs>> {
        let mut entries = Vec::with_capacity(MAX_SAMPLES);
        let mut line = Vec::with_capacity(LINE_BYTE_CAP as usize);
        while entries.len() < MAX_SAMPLES {
            line.clear();
            let n = (&mut reader).take(LINE_BYTE_CAP).read_until(b'\n', &mut line)?;
            if n == 0 {
                break;
            }
            if line.last() != Some(&b'\n') && n as u64 == LINE_BYTE_CAP {
                skip_line(&mut reader)?;
            }
            entries.push(normalize_entry(&String::from_utf8_lossy(&line)));
        }
        Ok(entries)
    }

    /// Load a word list from `path`
    pub fn load(path: &Path) -> Result<Self, SampleError> {
        let io_err = |source| SampleError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let entries = Self::read_entries(BufReader::new(file)).map_err(io_err)?;
        if entries.is_empty() {
            return Err(SampleError::Empty {
                path: path.to_path_buf(),
            });
        }
        Ok(Self { entries })
    }

    /// Load `path` if given, falling back to [`SampleStore::defaults`] on any failure
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            info!("using built-in samples");
            return Self::defaults();
        };

        match Self::load(path) {
            Ok(store) => {
                info!(path = %path.display(), count = store.len(), "loaded word list");
                store
            }
            Err(err) => {
                warn!(error = %err, "falling back to built-in samples");
                Self::defaults()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Glyphs> {
        self.entries.get(index)
    }

    /// Samples rendered back into strings
    pub fn to_strings(&self) -> Vec<String> {
        self.entries.iter().map(|g| g.iter().collect()).collect()
    }
}

impl Default for SampleStore {
    fn default() -> Self {
        Self::defaults()
    }
}
