//! The atomic unit of a document: one token as reported by the tokenizer.

use serde::{Deserialize, Serialize};

use crate::cform::{CForm, ConjugationForm};
use crate::ctype::{CType, ConjugationType};
use crate::pos::{PartOfSpeech, Pos};

/// A token with its raw dictionary attributes.
///
/// Normalized attributes ([`pos`](Word::pos), [`ctype`](Word::ctype),
/// [`cform`](Word::cform)) are derived on demand from the raw fields, so a
/// word can be edited field by field without going stale.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Word {
    /// Surface form (表層形)
    pub surface: String,
    /// Part-of-speech path, coarse to fine (品詞, 品詞細分類...)
    pub pos_path: Vec<String>,
    /// Dictionary form (基本形)
    pub base: String,
    /// Conjugation type label (活用型), empty when the word does not conjugate
    pub raw_ctype: String,
    /// Conjugation form label (活用形), empty when the word does not conjugate
    pub raw_cform: String,
}

impl Word {
    /// A non-conjugating word whose base is its surface.
    pub fn new<S: AsRef<str>>(surface: &str, pos_path: &[S]) -> Self {
        Self {
            surface: surface.to_string(),
            pos_path: pos_path.iter().map(|p| p.as_ref().to_string()).collect(),
            base: surface.to_string(),
            raw_ctype: String::new(),
            raw_cform: String::new(),
        }
    }

    pub fn with_base(mut self, base: &str) -> Self {
        self.base = base.to_string();
        self
    }

    pub fn with_conjugation(mut self, raw_ctype: &str, raw_cform: &str) -> Self {
        self.raw_ctype = raw_ctype.to_string();
        self.raw_cform = raw_cform.to_string();
        self
    }

    pub fn pos(&self) -> PartOfSpeech {
        PartOfSpeech::normalize(&self.pos_path)
    }

    pub fn ctype(&self) -> ConjugationType {
        ConjugationType::normalize(&self.pos_path, &self.base, &self.raw_ctype)
    }

    pub fn cform(&self) -> ConjugationForm {
        ConjugationForm::normalize(&self.surface, &self.pos_path, &self.raw_cform)
    }

    pub fn record(&self) -> WordRecord {
        WordRecord {
            surface: self.surface.clone(),
            pos_path: self.pos_path.clone(),
            base: self.base.clone(),
            raw_ctype: self.raw_ctype.clone(),
            raw_cform: self.raw_cform.clone(),
            pos: self.pos().kind,
            ctype: self.ctype().kind,
            cform: self.cform().kind,
        }
    }
}

/// Read-only projection of a [`Word`] with its normalized attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordRecord {
    pub surface: String,
    pub pos_path: Vec<String>,
    pub base: String,
    pub raw_ctype: String,
    pub raw_cform: String,
    pub pos: Pos,
    pub ctype: CType,
    pub cform: CForm,
}
