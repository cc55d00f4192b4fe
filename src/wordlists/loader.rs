//! Word list loading utilities
//!
//! Turns raw dictionary text into entries that satisfy the library's
//! construction rules, from a file or the embedded list.

use super::{WORDS, WordLibrary};
use crate::core::Word;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Where the dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// The list compiled into the binary
    Embedded,
    /// A plain-text file, one entry per line
    File(PathBuf),
}

impl WordSource {
    /// Interpret a CLI argument: `embedded` or a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" | "builtin" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

/// Clean one dictionary line
///
/// Dictionary files may carry tag columns after the word and `#` markers, so
/// everything from the first whitespace on is dropped along with any `#`.
fn normalize_entry(line: &str, word_length: usize) -> Option<String> {
    let head = line.split_whitespace().next()?;
    let word: String = head.chars().filter(|&c| c != '#').collect();
    let word = word.to_lowercase();

    (word.chars().count() == word_length && word.chars().all(char::is_alphabetic)).then_some(word)
}

/// Filter dictionary text down to valid `word_length`-letter entries
///
/// Entries with apostrophes, hyphens or any other non-letter are skipped, not
/// flagged. The result is sorted and de-duplicated.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::parse_dictionary;
///
/// let words = parse_dictionary("crane /n10\nit's\nx-ray\n#slate\nCrane\n", 5);
/// assert_eq!(words, ["crane", "slate"]);
/// ```
#[must_use]
pub fn parse_dictionary(content: &str, word_length: usize) -> Vec<String> {
    let total = content.lines().count();

    let mut words: Vec<String> = content
        .lines()
        .filter_map(|line| normalize_entry(line, word_length))
        .collect();

    words.sort();
    words.dedup();

    let skipped = total - words.len();
    if skipped > 0 {
        log::debug!("Skipped {skipped} dictionary lines (wrong length, non-letters or duplicates)");
    }

    words
}

/// Load dictionary entries from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_dictionary(&content, word_length))
}

/// Filter an embedded string slice to entries of `word_length` letters
#[must_use]
pub fn words_from_slice(slice: &[&str], word_length: usize) -> Vec<String> {
    let mut words: Vec<String> = slice
        .iter()
        .filter_map(|s| normalize_entry(s, word_length))
        .collect();
    words.sort();
    words.dedup();
    words
}

/// Write entries to a file, one per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn save_to_file<P, I, S>(path: P, entries: I) -> io::Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = BufWriter::new(fs::File::create(path)?);
    for entry in entries {
        writeln!(out, "{}", entry.as_ref())?;
    }
    out.flush()
}

fn load_entries(source: &WordSource, word_length: usize) -> Result<Vec<String>> {
    let entries = match source {
        WordSource::Embedded => words_from_slice(WORDS, word_length),
        WordSource::File(path) => load_from_file(path, word_length)
            .with_context(|| format!("Failed to read word list {}", path.display()))?,
    };

    if entries.is_empty() {
        log::warn!("No {word_length}-letter words found in {source:?}");
    }

    Ok(entries)
}

/// Load and build a library from the given source
///
/// # Errors
///
/// Returns an error if the file cannot be read or if no usable entries remain.
pub fn load_library(source: &WordSource, word_length: usize) -> Result<WordLibrary> {
    let entries = load_entries(source, word_length)?;

    WordLibrary::new(word_length, entries)
        .with_context(|| format!("No usable {word_length}-letter words in {source:?}"))
}

/// Load a library through an on-disk cache of the filtered list
///
/// An existing cache with `word_length`-letter entries is used as is and
/// `source` is not read. Otherwise the library is loaded from `source` and
/// its words are written to `cache` for the next run.
///
/// # Errors
///
/// Returns an error if the cache or source cannot be read, if no usable
/// entries remain, or if the cache cannot be written.
pub fn load_library_cached(
    source: &WordSource,
    cache: &Path,
    word_length: usize,
) -> Result<WordLibrary> {
    if cache.exists() {
        let entries = load_from_file(cache, word_length)
            .with_context(|| format!("Failed to read cache {}", cache.display()))?;
        if !entries.is_empty() {
            log::info!("Using cached word list {} ({} words)", cache.display(), entries.len());
            return WordLibrary::new(word_length, entries)
                .with_context(|| format!("Invalid cache {}", cache.display()));
        }
        log::warn!("Cache {} has no {word_length}-letter words, reloading", cache.display());
    }

    let library = load_library(source, word_length)?;
    save_to_file(cache, library.iter().map(Word::text))
        .with_context(|| format!("Failed to write cache {}", cache.display()))?;
    log::info!("Cached {} words to {}", library.len(), cache.display());

    Ok(library)
}
