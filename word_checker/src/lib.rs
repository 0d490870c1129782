//! A spelling checker that works with any [`Set`] of upper-case words

pub mod dictionary;

use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

use log::trace;
use sets::Set;

/// The letters tried when replacing or inserting a character
pub const ALPHABET: RangeInclusive<char> = 'A'..='Z';

/// Checks words against a set of known words and suggests near misses
///
/// Words are compared exactly, so both the set and the checked words are expected to be upper
/// case (see [`dictionary::load_words`]).
pub struct WordChecker<'a, S: Set<String> + ?Sized> {
    words: &'a S,
}

impl<'a, S: Set<String> + ?Sized> WordChecker<'a, S> {
    pub fn new(words: &'a S) -> Self {
        Self {words}
    }

    /// Returns true if `word` is in the set of known words
    pub fn word_exists(&self, word: &str) -> bool {
        self.words.contains(&word.to_string())
    }

    /// Returns every known word that is a single edit away from `word`
    ///
    /// Candidates are generated in this order, and each suggestion appears once, at the position
    /// it was first found:
    ///
    /// 1. each character deleted
    /// 2. each character replaced by every letter
    /// 3. each adjacent pair of characters swapped
    /// 4. every letter inserted at each position, including after the last character
    /// 5. a space inserted at each interior position, kept as `"LEFT RIGHT"` only if both halves
    ///    are known words
    ///
    /// `word` itself is never suggested.
    ///
    /// # Examples
    ///
    /// ```
    /// use sets::VectorSet;
    /// use word_checker::WordChecker;
    ///
    /// let words: VectorSet<String> = vec!["ABDC".to_string(), "ZZZZZ".to_string()].into_iter().collect();
    /// let checker = WordChecker::new(&words);
    ///
    /// assert_eq!(checker.find_suggestions("ABCD"), &["ABDC"]);
    /// ```
    pub fn find_suggestions(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        let mut suggestions = Suggestions {
            words: self.words,
            word,
            found: Vec::new(),
        };

        for i in 0..chars.len() {
            let mut candidate = chars.clone();
            candidate.remove(i);
            suggestions.offer(candidate.iter().collect());
        }

        for i in 0..chars.len() {
            for letter in ALPHABET {
                let mut candidate = chars.clone();
                candidate[i] = letter;
                suggestions.offer(candidate.iter().collect());
            }
        }

        for i in 1..chars.len() {
            let mut candidate = chars.clone();
            candidate.swap(i - 1, i);
            suggestions.offer(candidate.iter().collect());
        }

        for i in 0..=chars.len() {
            for letter in ALPHABET {
                let mut candidate = chars.clone();
                candidate.insert(i, letter);
                suggestions.offer(candidate.iter().collect());
            }
        }

        for i in 1..chars.len() {
            let left: String = chars[..i].iter().collect();
            let right: String = chars[i..].iter().collect();
            if self.words.contains(&left) && self.words.contains(&right) {
                suggestions.push(format!("{} {}", left, right));
            }
        }

        trace!("{} suggestions for {:?}", suggestions.found.len(), word);
        suggestions.found
    }

    /// Checks `word` and writes a single line with the result to `out`
    ///
    /// The word is upper-cased first. The line is `WORD: ok` for a known word, `WORD: A, B, ...`
    /// listing the suggestions otherwise, or `WORD: no suggestions` if there are none.
    ///
    /// # Examples
    ///
    /// ```
    /// use sets::AVLSet;
    /// use word_checker::WordChecker;
    ///
    /// let words: AVLSet<String> = vec!["CAT".to_string()].into_iter().collect();
    /// let checker = WordChecker::new(&words);
    ///
    /// let mut out = Vec::new();
    /// checker.report(" cat", &mut out).unwrap();
    /// checker.report("cta", &mut out).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "CAT: ok\nCTA: CAT\n");
    /// ```
    pub fn report<W: Write>(&self, word: &str, out: &mut W) -> io::Result<()> {
        let word = word.trim().to_uppercase();
        if self.word_exists(&word) {
            return writeln!(out, "{}: ok", word);
        }

        let suggestions = self.find_suggestions(&word);
        if suggestions.is_empty() {
            writeln!(out, "{}: no suggestions", word)
        } else {
            writeln!(out, "{}: {}", word, suggestions.join(", "))
        }
    }

    /// Reports on every non-blank line of `input`, one word per line
    pub fn report_lines<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                self.report(&line, out)?;
            }
        }

        Ok(())
    }
}

struct Suggestions<'a, 'w, S: ?Sized> {
    words: &'a S,
    word: &'w str,
    found: Vec<String>,
}

impl<'a, 'w, S: Set<String> + ?Sized> Suggestions<'a, 'w, S> {
    /// Keeps the candidate if it is a known word
    fn offer(&mut self, candidate: String) {
        if self.words.contains(&candidate) {
            self.push(candidate);
        }
    }

    fn push(&mut self, suggestion: String) {
        if suggestion != self.word && !self.found.contains(&suggestion) {
            self.found.push(suggestion);
        }
    }
}
