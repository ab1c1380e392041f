//! jadoc - editable Japanese documents
//!
//! Text is tokenized into words carrying their part of speech and
//! conjugation. Inserting, deleting or replacing words reconjugates the
//! neighbours of the edit so the document stays grammatical:
//! deleting まし from 本を書きました。 gives 本を書いた。.

pub mod analyzer;
pub mod cform;
pub mod config;
pub mod conjugation;
pub mod ctype;
pub mod doc;
pub mod ending;
pub mod error;
pub mod harmonize;
pub mod kana;
pub mod pos;
pub mod tokenize;
pub mod word;

pub use analyzer::Analyzer;
pub use cform::{CForm, ConjugationForm};
pub use config::Config;
pub use conjugation::Conjugation;
pub use ctype::{CType, ConjugationType};
pub use doc::{Doc, Interval};
pub use ending::{generate_ending_table, EndingTable};
pub use error::{Error, KanaClass, Result};
pub use pos::{PartOfSpeech, Pos};
pub use tokenize::{check_tokenizer, Tokenize};
pub use word::{Word, WordRecord};
