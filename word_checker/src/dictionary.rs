//! Loading word lists into a set

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::debug;
use sets::Set;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to open dictionary `{}`", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read line {line} of the dictionary")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Adds each line of `reader` to `set` as a word
///
/// Lines are trimmed and converted to upper case. Blank lines are skipped. Returns the number of
/// words that were not already in the set.
///
/// # Examples
///
/// ```
/// use sets::AVLSet;
/// use word_checker::dictionary::load_words;
///
/// let mut set: AVLSet<String> = AVLSet::new();
/// let added = load_words("hello\n\n  There \nHELLO\n".as_bytes(), &mut set).unwrap();
///
/// assert_eq!(added, 2);
/// assert!(set.contains("HELLO"));
/// assert!(set.contains("THERE"));
/// ```
pub fn load_words<R, S>(reader: R, set: &mut S) -> Result<usize, DictionaryError>
    where R: BufRead,
          S: Set<String> + ?Sized,
{
    let before = set.len();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| DictionaryError::Read {line: index + 1, source})?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        set.add(word.to_uppercase());
    }

    let added = set.len() - before;
    debug!("loaded {} new words", added);
    Ok(added)
}

/// Opens the file at `path` and loads its words with [`load_words`]
pub fn load_file<P, S>(path: P, set: &mut S) -> Result<usize, DictionaryError>
    where P: AsRef<Path>,
          S: Set<String> + ?Sized,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DictionaryError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    load_words(BufReader::new(file), set)
}
