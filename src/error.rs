//! Error types for the strict (non-Doc) API.
//!
//! Classification never fails. The conjugation engine, ending discovery and
//! the tokenizer contract check report one of the conditions below, which
//! callers can match on.

use std::fmt;

use crate::cform::CForm;
use crate::ctype::CType;

/// Result alias using [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Class of a character that cannot be mapped onto a vowel placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KanaClass {
    /// あ行 (the vowels themselves)
    VowelRow,
    /// ぱ行
    PRow,
    Katakana,
    /// Hiragana outside the usable consonant rows (ん, っ, や行 ...)
    OtherKana,
    NotKana,
    Empty,
}

impl fmt::Display for KanaClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KanaClass::VowelRow => "あ行",
            KanaClass::PRow => "ぱ行",
            KanaClass::Katakana => "カタカナ",
            KanaClass::OtherKana => "hiragana outside the consonant rows",
            KanaClass::NotKana => "non-kana",
            KanaClass::Empty => "empty text",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unsupported kana ({class}) at the head of {text:?}")]
    UnsupportedKana { text: String, class: KanaClass },

    #[error("words of conjugation type {ctype:?} cannot be conjugated")]
    CannotConjugate { ctype: CType },

    #[error("{base:?} does not end with the {ctype:?} stem {stem:?}")]
    StemMismatch {
        ctype: CType,
        base: String,
        stem: &'static str,
    },

    #[error("no {form:?} ending observed for {ctype:?} (paradigm {paradigm:?})")]
    EndingNotFound {
        ctype: CType,
        form: CForm,
        paradigm: &'static str,
    },

    #[error("tokenizer does not satisfy the contract: {0}")]
    InvalidTokenizer(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_condition() {
        let err = Error::UnsupportedKana {
            text: "ぱ行".to_string(),
            class: KanaClass::PRow,
        };
        assert!(err.to_string().contains("ぱ行"));

        let err = Error::EndingNotFound {
            ctype: CType::Kahen,
            form: CForm::Shushi,
            paradigm: "くる",
        };
        assert!(err.to_string().contains("Shushi"));
        assert!(err.to_string().contains("Kahen"));
    }
}
