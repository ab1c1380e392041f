//! The tokenizer capability the rest of the crate is built on.

use crate::cform::CForm;
use crate::ctype::CType;
use crate::error::{Error, Result};
use crate::pos::Pos;
use crate::word::Word;

/// Splits text into words.
///
/// Implementations must be total: every input yields words whose surfaces
/// concatenate back to the input, using unknown or symbol words rather than
/// failing.
pub trait Tokenize: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Word>;
}

impl<F> Tokenize for F
where
    F: Fn(&str) -> Vec<Word> + Send + Sync,
{
    fn tokenize(&self, text: &str) -> Vec<Word> {
        self(text)
    }
}

/// Sentence used to check a tokenizer against the expectations below.
pub const CONTRACT_SENTENCE: &str = "楽しい本をよく読みます";

struct Expectation {
    surface: &'static str,
    pos: Pos,
    ctype: Option<CType>,
    cform: Option<CForm>,
}

const EXPECTATIONS: [Expectation; 6] = [
    Expectation {
        surface: "楽しい",
        pos: Pos::Adjective,
        ctype: Some(CType::Adjective),
        cform: None,
    },
    Expectation {
        surface: "本",
        pos: Pos::Noun,
        ctype: Some(CType::Nothing),
        cform: Some(CForm::Nothing),
    },
    Expectation {
        surface: "を",
        pos: Pos::Particle,
        ctype: Some(CType::Nothing),
        cform: Some(CForm::Nothing),
    },
    Expectation {
        surface: "よく",
        pos: Pos::Adverb,
        ctype: Some(CType::Nothing),
        cform: Some(CForm::Nothing),
    },
    Expectation {
        surface: "読み",
        pos: Pos::Verb,
        ctype: Some(CType::GodanN),
        cform: Some(CForm::Renyo),
    },
    Expectation {
        surface: "ます",
        pos: Pos::Auxiliary,
        ctype: None,
        cform: None,
    },
];

/// Checks that a tokenizer produces the shape of output the conjugation
/// machinery depends on.
pub fn check_tokenizer(tokenizer: &dyn Tokenize) -> Result<()> {
    let words = tokenizer.tokenize(CONTRACT_SENTENCE);
    if words.len() != EXPECTATIONS.len() {
        return Err(Error::InvalidTokenizer(format!(
            "expected {} words for {CONTRACT_SENTENCE:?}, got {}",
            EXPECTATIONS.len(),
            words.len()
        )));
    }

    for (word, expect) in words.iter().zip(EXPECTATIONS.iter()) {
        if word.surface != expect.surface {
            return Err(Error::InvalidTokenizer(format!(
                "expected surface {:?}, got {:?}",
                expect.surface, word.surface
            )));
        }
        let pos = word.pos().kind;
        if pos != expect.pos {
            return Err(Error::InvalidTokenizer(format!(
                "{:?} classified as {pos:?}, expected {:?}",
                word.surface, expect.pos
            )));
        }
        if let Some(ctype) = expect.ctype {
            let actual = word.ctype().kind;
            if actual != ctype {
                return Err(Error::InvalidTokenizer(format!(
                    "{:?} has conjugation type {actual:?}, expected {ctype:?}",
                    word.surface
                )));
            }
        }
        if let Some(cform) = expect.cform {
            let actual = word.cform().kind;
            if actual != cform {
                return Err(Error::InvalidTokenizer(format!(
                    "{:?} has conjugation form {actual:?}, expected {cform:?}",
                    word.surface
                )));
            }
        }
    }

    tracing::debug!("tokenizer satisfies the contract");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_words() -> Vec<Word> {
        vec![
            Word::new("楽しい", &["形容詞", "一般"]).with_conjugation("形容詞", "連体形-一般"),
            Word::new("本", &["名詞", "普通名詞", "一般"]),
            Word::new("を", &["助詞", "格助詞"]),
            Word::new("よく", &["副詞"]).with_base("良く"),
            Word::new("読み", &["動詞", "一般"])
                .with_base("読む")
                .with_conjugation("五段-マ行", "連用形-一般"),
            Word::new("ます", &["助動詞"]).with_conjugation("助動詞-マス", "終止形-一般"),
        ]
    }

    #[test]
    fn test_valid_tokenizer() {
        let tokenize = |_: &str| valid_words();
        assert_eq!(check_tokenizer(&tokenize), Ok(()));
    }

    #[test]
    fn test_invalid_length() {
        let tokenize = |_: &str| Vec::new();
        assert!(matches!(
            check_tokenizer(&tokenize),
            Err(Error::InvalidTokenizer(_))
        ));
    }

    #[test]
    fn test_invalid_surface() {
        let tokenize = |_: &str| {
            let mut words = valid_words();
            words[3].surface = "良く".to_string();
            words
        };
        assert!(matches!(
            check_tokenizer(&tokenize),
            Err(Error::InvalidTokenizer(_))
        ));
    }

    #[test]
    fn test_invalid_pos() {
        let tokenize = |_: &str| {
            let mut words = valid_words();
            words[1] = Word::new("本", &["foo"]);
            words
        };
        assert!(matches!(
            check_tokenizer(&tokenize),
            Err(Error::InvalidTokenizer(_))
        ));
    }

    #[test]
    fn test_invalid_conjugation() {
        let tokenize = |_: &str| {
            let mut words = valid_words();
            words[2].raw_ctype = "五段活用".to_string();
            words
        };
        assert!(matches!(
            check_tokenizer(&tokenize),
            Err(Error::InvalidTokenizer(_))
        ));
    }
}
