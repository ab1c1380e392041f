//! Editable documents.
//!
//! A [`Doc`] is a sequence of words. Edits splice words in or out and then
//! repair the conjugation of the words on either side of the splice, so
//! deleting ます from 書きました gives 書いた rather than 書きた.

use std::fmt;
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};
use std::sync::Arc;

use crate::cform::CForm;
use crate::conjugation::Conjugation;
use crate::harmonize::{assimilate, required_form, vanishes_before};
use crate::word::{Word, WordRecord};

/// A word index or a range of word indices.
///
/// Indices are clamped into the document, so negative or oversized bounds
/// select the nearest valid words instead of panicking.
pub trait Interval {
    /// The selected words of a document of `len` words.
    fn select(self, len: usize) -> Range<usize>;
}

fn clamp_bounds(start: isize, end: isize, len: usize) -> Range<usize> {
    let len = isize::try_from(len).unwrap_or(isize::MAX);
    let start = start.clamp(0, len);
    let end = end.clamp(start, len);
    // both bounds are within 0..=len
    start as usize..end as usize
}

impl Interval for isize {
    fn select(self, len: usize) -> Range<usize> {
        if len == 0 {
            return 0..0;
        }
        let last = isize::try_from(len - 1).unwrap_or(isize::MAX);
        let i = self.clamp(0, last);
        clamp_bounds(i, i.saturating_add(1), len)
    }
}

impl Interval for Range<isize> {
    fn select(self, len: usize) -> Range<usize> {
        clamp_bounds(self.start, self.end, len)
    }
}

impl Interval for RangeInclusive<isize> {
    fn select(self, len: usize) -> Range<usize> {
        let (start, end) = self.into_inner();
        clamp_bounds(start, end.saturating_add(1), len)
    }
}

impl Interval for RangeFrom<isize> {
    fn select(self, len: usize) -> Range<usize> {
        clamp_bounds(self.start, isize::MAX, len)
    }
}

impl Interval for RangeTo<isize> {
    fn select(self, len: usize) -> Range<usize> {
        clamp_bounds(0, self.end, len)
    }
}

impl Interval for RangeToInclusive<isize> {
    fn select(self, len: usize) -> Range<usize> {
        clamp_bounds(0, self.end.saturating_add(1), len)
    }
}

impl Interval for RangeFull {
    fn select(self, len: usize) -> Range<usize> {
        0..len
    }
}

/// An editable document backed by a conjugation service.
///
/// Cloning a document copies its words; the service is shared.
#[derive(Debug, Clone)]
pub struct Doc {
    words: Vec<Word>,
    conjugation: Arc<Conjugation>,
}

impl Doc {
    pub fn new(text: &str, conjugation: Arc<Conjugation>) -> Self {
        let words = conjugation.tokenize(text);
        Self { words, conjugation }
    }

    pub fn from_words(words: Vec<Word>, conjugation: Arc<Conjugation>) -> Self {
        Self { words, conjugation }
    }

    pub fn conjugation(&self) -> &Arc<Conjugation> {
        &self.conjugation
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Direct access to the words. Edits made here are not harmonized.
    pub fn words_mut(&mut self) -> &mut [Word] {
        &mut self.words
    }

    pub fn word(&self, i: isize) -> Option<&Word> {
        self.words.get(i.select(self.words.len()).start)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The full text.
    pub fn text(&self) -> String {
        self.text_in(..)
    }

    /// Concatenated surfaces of the selected words.
    pub fn text_in(&self, interval: impl Interval) -> String {
        self.words[interval.select(self.words.len())]
            .iter()
            .map(|w| w.surface.as_str())
            .collect()
    }

    /// Rebuilds the words from `text`, or from the current text.
    pub fn retokenize(&mut self, text: Option<&str>) {
        let text = match text {
            Some(text) => text.to_string(),
            None => self.text(),
        };
        self.words = self.conjugation.tokenize(&text);
    }

    /// Inserts `words` before word `i`.
    pub fn insert(&mut self, i: isize, words: impl IntoIterator<Item = Word>) {
        let len = self.words.len();
        let at = usize::try_from(i).map_or(0, |i| i.min(len));
        self.splice(at..at, words);
    }

    pub fn delete(&mut self, interval: impl Interval) {
        let range = interval.select(self.words.len());
        if range.is_empty() {
            return;
        }
        let at = range.start;
        self.words.drain(range);
        self.harmonize(at);
    }

    /// Replaces the selected words with `words`.
    pub fn update(&mut self, interval: impl Interval, words: impl IntoIterator<Item = Word>) {
        let range = interval.select(self.words.len());
        self.splice(range, words);
    }

    /// Replaces the selected words with the tokenization of each surface.
    pub fn update_surfaces<S: AsRef<str>>(&mut self, interval: impl Interval, surfaces: &[S]) {
        let words: Vec<Word> = surfaces
            .iter()
            .flat_map(|s| self.conjugation.tokenize(s.as_ref()))
            .collect();
        self.update(interval, words);
    }

    /// Conjugates word `i` into `form`.
    ///
    /// A form that the next word narrows down (連用形 before た) is
    /// narrowed, and a following た/て is voiced to match. An ある that
    /// would have to become 未然形 before ない is dropped instead.
    pub fn conjugate(&mut self, i: isize, form: CForm) {
        let Some(at) = self.index(i) else {
            return;
        };
        let word = &self.words[at];
        let next = self.words.get(at + 1);
        let form = match next.and_then(|right| required_form(word, right)) {
            Some(required) if form.generalizes(required) => required,
            _ => form,
        };
        let word = match next {
            Some(next) if vanishes_before(word, form, next) => {
                tracing::debug!("Dropping {:?} before {:?}", word.surface, next.surface);
                self.words.remove(at);
                return;
            }
            Some(next) => self.conjugation.conjugate_before(word, form, next),
            None => self.conjugation.conjugate(word, form),
        };
        self.words[at] = word;
        if CForm::Renyo.generalizes(self.words[at].cform().kind) {
            self.assimilate(at + 1);
        }
    }

    pub fn records(&self) -> Vec<WordRecord> {
        self.words.iter().map(Word::record).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.records())
    }

    fn index(&self, i: isize) -> Option<usize> {
        let range = i.select(self.words.len());
        (!range.is_empty()).then_some(range.start)
    }

    fn splice(&mut self, range: Range<usize>, words: impl IntoIterator<Item = Word>) {
        let start = range.start;
        let words: Vec<Word> = words.into_iter().collect();
        let mut end = start + words.len();
        self.words.splice(range, words);

        if self.harmonize(start) {
            end -= 1;
        }
        if end != start {
            self.harmonize(end);
        }
    }

    /// Repairs the word before boundary `b` against the word after it.
    ///
    /// Returns whether that word was removed.
    fn harmonize(&mut self, b: usize) -> bool {
        if b == 0 || b > self.words.len() {
            return false;
        }
        let left = &self.words[b - 1];
        let right = self.words.get(b);
        let cform = left.cform().kind;
        if !left.ctype().kind.is_conjugable() || matches!(cform, CForm::Nothing | CForm::Unknown)
        {
            return false;
        }

        let target = match right.and_then(|r| required_form(left, r)) {
            Some(required) => required,
            // an attributive form before another word stays as it is
            None if right.is_some() && cform == CForm::Rentai => return false,
            None => CForm::Shushi,
        };
        let word = match right {
            Some(right) if vanishes_before(left, target, right) => {
                tracing::debug!("Boundary {}: dropping {:?}", b, left.surface);
                self.words.remove(b - 1);
                return true;
            }
            Some(right) => self.conjugation.conjugate_before(left, target, right),
            None => self.conjugation.conjugate(left, target),
        };
        if word != *left {
            tracing::debug!(
                "Boundary {}: {:?} -> {:?} ({:?})",
                b,
                left.surface,
                word.surface,
                target
            );
            self.words[b - 1] = word;
        }
        if target == CForm::RenyoOnbin {
            self.assimilate(b);
        }
        false
    }

    /// Voices or devoices word `i` after the word before it.
    fn assimilate(&mut self, i: usize) {
        if i == 0 || i >= self.words.len() {
            return;
        }
        if let Some(word) = assimilate(&self.words[i - 1], &self.words[i]) {
            tracing::debug!("Assimilated {:?} -> {:?}", self.words[i].surface, word.surface);
            self.words[i] = word;
        }
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.words
            .iter()
            .try_for_each(|w| f.write_str(&w.surface))
    }
}
