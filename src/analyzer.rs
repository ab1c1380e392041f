use anyhow::Result;
use lindera::dictionary::{load_dictionary, load_user_dictionary};
use lindera::mode::Mode;
use lindera::segmenter::Segmenter;
use lindera::tokenizer::Tokenizer;

use crate::config::Config;
use crate::tokenize::Tokenize;
use crate::word::Word;

/// Dictionary used when none is configured.
pub const DEFAULT_DICTIONARY: &str = "embedded://ipadic";

/// POS path given to words the dictionary does not know.
const UNKNOWN_POS: [&str; 1] = ["名詞"];

/// IPADIC feature columns up to and including the base form.
const MIN_DETAILS: usize = 7;

/// Morphological analyzer using Lindera
pub struct Analyzer {
    tokenizer: Tokenizer,
}

impl Analyzer {
    pub fn new() -> Result<Self> {
        Self::with_dictionary(DEFAULT_DICTIONARY, None)
    }

    /// Loads any dictionary lindera understands (`embedded://ipadic`,
    /// `embedded://unidic`, or a path to a compiled dictionary), optionally
    /// extended with a user dictionary.
    pub fn with_dictionary(uri: &str, user_uri: Option<&str>) -> Result<Self> {
        let dictionary = load_dictionary(uri)?;
        let user_dictionary = match user_uri {
            Some(user_uri) => Some(load_user_dictionary(user_uri, &dictionary.metadata)?),
            None => None,
        };
        let segmenter = Segmenter::new(Mode::Normal, dictionary, user_dictionary);
        let tokenizer = Tokenizer::new(segmenter);
        Ok(Self { tokenizer })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_dictionary(
            &config.dictionary_uri(),
            config.tokenizer.user_dictionary.as_deref(),
        )
    }
}

fn feature(details: &[&str], index: usize) -> String {
    match details.get(index) {
        Some(&"*") | None => String::new(),
        Some(value) => value.to_string(),
    }
}

impl Tokenize for Analyzer {
    fn tokenize(&self, text: &str) -> Vec<Word> {
        let mut tokens = match self.tokenizer.tokenize(text) {
            Ok(t) => t,
            Err(e) => {
                tracing::warn!("Failed to tokenize {:?}: {}", text, e);
                if text.is_empty() {
                    return Vec::new();
                }
                return vec![Word::new(text, &UNKNOWN_POS)];
            }
        };

        let mut words = Vec::with_capacity(tokens.len());
        for token in tokens.iter_mut() {
            let surface = token.surface.as_ref().to_string();

            // Parse token details (IPADIC format)
            let details = token.details();
            if details.len() < MIN_DETAILS {
                words.push(Word::new(&surface, &UNKNOWN_POS));
                continue;
            }

            let pos_path: Vec<String> = details[..4]
                .iter()
                .filter(|p| **p != "*")
                .map(|p| p.to_string())
                .collect();
            let base = match details[6] {
                "*" => surface.clone(),
                base => base.to_string(),
            };

            words.push(Word {
                surface,
                pos_path,
                base,
                raw_ctype: feature(&details, 4),
                raw_cform: feature(&details, 5),
            });
        }

        words
    }
}
