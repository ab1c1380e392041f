use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::analyzer::Analyzer;
use crate::cform::CForm;
use crate::config::Config;
use crate::ctype::{CType, ALL_CTYPES};
use crate::ending::{generate_ending_table, EndingTable};
use crate::error::Result;
use crate::harmonize::label_hint;
use crate::tokenize::{check_tokenizer, Tokenize};
use crate::word::Word;

/// Conjugation service: a tokenizer plus the ending tables observed from it.
///
/// Share one service between documents with `Arc<Conjugation>`; the table
/// cache is filled on demand and only ever grows.
pub struct Conjugation {
    tokenizer: Arc<dyn Tokenize>,
    tables: RwLock<HashMap<CType, Arc<EndingTable>>>,
}

impl fmt::Debug for Conjugation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("Conjugation")
            .field("tables", &tables.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl Conjugation {
    /// Checks the tokenizer and builds every ending table up front.
    pub fn new(tokenizer: impl Tokenize + 'static) -> Result<Self> {
        check_tokenizer(&tokenizer)?;
        let conjugation = Self::lazy(tokenizer);
        conjugation.warm_up()?;
        Ok(conjugation)
    }

    /// A service that trusts the tokenizer and builds tables on first use.
    pub fn lazy(tokenizer: impl Tokenize + 'static) -> Self {
        Self {
            tokenizer: Arc::new(tokenizer),
            tables: RwLock::new(HashMap::new()),
        }
    }

    /// Builds the analyzer described by `config` and a service on top of it.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let analyzer = Analyzer::from_config(config)?;
        if config.tokenizer.validate {
            check_tokenizer(&analyzer)?;
        }
        let conjugation = Self::lazy(analyzer);
        if config.conjugation.warm_up {
            conjugation.warm_up()?;
        }
        Ok(conjugation)
    }

    pub fn tokenize(&self, text: &str) -> Vec<Word> {
        self.tokenizer.tokenize(text)
    }

    pub fn ending_table(&self, ctype: CType) -> Result<Arc<EndingTable>> {
        {
            let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(table) = tables.get(&ctype) {
                return Ok(Arc::clone(table));
            }
        }

        // Built outside the lock; a concurrent builder produces the same table.
        let table = Arc::new(generate_ending_table(ctype, self.tokenizer.as_ref())?);
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(tables.entry(ctype).or_insert(table)))
    }

    /// Builds the tables of every conjugable type.
    pub fn warm_up(&self) -> Result<()> {
        for ctype in ALL_CTYPES.into_iter().filter(|c| c.is_conjugable()) {
            self.ending_table(ctype)?;
        }
        Ok(())
    }

    /// `word` in `form`, or `word` unchanged when it cannot be conjugated.
    ///
    /// Never fails: non-conjugating words, forms the dictionary never showed
    /// and engine errors all leave the word as it was.
    pub fn conjugate(&self, word: &Word, form: CForm) -> Word {
        self.conjugate_labelled(word, form, None)
    }

    /// Like [`conjugate`](Conjugation::conjugate), choosing the variant of
    /// `form` that `next` attaches to (さ before れる, せ before ぬ).
    pub fn conjugate_before(&self, word: &Word, form: CForm, next: &Word) -> Word {
        self.conjugate_labelled(word, form, label_hint(next))
    }

    fn conjugate_labelled(&self, word: &Word, form: CForm, hint: Option<&str>) -> Word {
        let cform = word.cform();
        if cform.kind == form && hint.map_or(true, |h| cform.value.contains(h)) {
            return word.clone();
        }
        let ctype = word.ctype().kind;
        if !ctype.is_conjugable() {
            tracing::debug!("{:?} does not conjugate ({:?})", word.surface, ctype);
            return word.clone();
        }

        let table = match self.ending_table(ctype) {
            Ok(table) => table,
            Err(e) => {
                tracing::debug!("Leaving {:?} unchanged: {}", word.surface, e);
                return word.clone();
            }
        };
        let Some(ending) = table.select(form, hint) else {
            tracing::debug!("No {:?} ending for {:?}", form, ctype);
            return word.clone();
        };
        match ctype.conjugate(&word.base, &ending.template) {
            Ok(surface) => Word {
                surface,
                raw_cform: ending.form.value.clone(),
                ..word.clone()
            },
            Err(e) => {
                tracing::debug!("Leaving {:?} unchanged: {}", word.surface, e);
                word.clone()
            }
        }
    }
}
