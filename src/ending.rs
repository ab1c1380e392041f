//! Ending discovery.
//!
//! Instead of hard-coding how each dictionary labels and splits conjugated
//! words, the ending of every form is observed by tokenizing sentences that
//! contain a reference word of each conjugation type.

use std::collections::HashMap;

use crate::cform::{CForm, ConjugationForm};
use crate::ctype::CType;
use crate::error::{Error, Result};
use crate::tokenize::Tokenize;
use crate::word::Word;

/// Forms probed for every conjugation type.
pub const TARGET_FORMS: [CForm; 10] = [
    CForm::Mizen,
    CForm::IshiSuiryo,
    CForm::Renyo,
    CForm::RenyoOnbin,
    CForm::RenyoNi,
    CForm::Shushi,
    CForm::Rentai,
    CForm::Katei,
    CForm::Meirei,
    CForm::Gokan,
];

const VERB_FORMS: &[CForm] = &[CForm::Mizen, CForm::Renyo, CForm::Shushi];

/// A reference word of a conjugation type and sentences using it.
struct Paradigm {
    base: &'static str,
    sentences: &'static [&'static str],
    required: &'static [CForm],
}

fn paradigm(ctype: CType) -> Option<Paradigm> {
    let paradigm = match ctype {
        CType::Godan => Paradigm {
            base: "話す",
            sentences: &["話さない", "話そう", "話します", "話した", "話す", "話せば", "早く話せ"],
            required: VERB_FORMS,
        },
        CType::GodanI => Paradigm {
            base: "書く",
            sentences: &["書かない", "書こう", "書きます", "書いた", "書く", "書けば", "早く書け"],
            required: VERB_FORMS,
        },
        CType::GodanZ => Paradigm {
            base: "待つ",
            sentences: &["待たない", "待とう", "待ちます", "待った", "待つ", "待てば", "早く待て"],
            required: VERB_FORMS,
        },
        CType::GodanN => Paradigm {
            base: "読む",
            sentences: &["読まない", "読もう", "読みます", "読んだ", "読む", "読めば", "早く読め"],
            required: VERB_FORMS,
        },
        CType::GodanU => Paradigm {
            base: "問う",
            sentences: &["問わない", "問おう", "問います", "問うた", "問う", "問えば", "罪を問え"],
            required: VERB_FORMS,
        },
        CType::Ichidan => Paradigm {
            base: "食べる",
            sentences: &[
                "食べない",
                "食べよう",
                "食べます",
                "食べた",
                "食べる",
                "食べれば",
                "早く食べろ",
            ],
            required: VERB_FORMS,
        },
        CType::Kahen => Paradigm {
            base: "くる",
            sentences: &[
                "誰もこない",
                "人がきます",
                "人がきた",
                "人がくる",
                "人がくれば",
                "早くこい",
            ],
            required: &[CForm::Shushi],
        },
        CType::Sahen => Paradigm {
            base: "する",
            sentences: &[
                "勉強しない",
                "勉強される",
                "勉強せぬ",
                "勉強しよう",
                "勉強します",
                "勉強した",
                "勉強する",
                "勉強すれば",
                "勉強しろ",
            ],
            required: &[CForm::Renyo, CForm::Shushi],
        },
        CType::Adjective => Paradigm {
            base: "楽しい",
            sentences: &[
                "楽しかろう",
                "楽しくない",
                "楽しかった",
                "楽しい",
                "楽しければ",
                "楽しそう",
            ],
            required: &[CForm::Renyo, CForm::Shushi],
        },
        CType::AuxiliaryNai => Paradigm {
            base: "ない",
            sentences: &[
                "書かなかろう",
                "書かなくなる",
                "書かなかった",
                "書かない",
                "書かなければ",
            ],
            required: &[CForm::Shushi],
        },
        CType::AuxiliaryDa => Paradigm {
            base: "だ",
            sentences: &["本だろう", "本だった", "本である", "本だ", "本なら", "静かな本"],
            required: &[CForm::Shushi],
        },
        CType::Nothing | CType::Unknown => return None,
    };
    Some(paradigm)
}

/// The ending template of one form, with the raw label the dictionary uses
/// for that form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ending {
    pub form: ConjugationForm,
    pub template: String,
}

/// Ending templates of one conjugation type, as observed from a tokenizer.
///
/// A form can have several variants told apart by their raw label, such as
/// the 未然形 し, さ and せ of する. The first one observed is the default.
#[derive(Debug, Clone)]
pub struct EndingTable {
    ctype: CType,
    endings: HashMap<CForm, Vec<Ending>>,
}

impl EndingTable {
    pub fn ctype(&self) -> CType {
        self.ctype
    }

    pub fn get(&self, form: CForm) -> Option<&Ending> {
        self.variants(form).first()
    }

    /// Every observed variant of `form`, default first.
    pub fn variants(&self, form: CForm) -> &[Ending] {
        self.endings.get(&form).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ending for `form`, falling back to the form it specializes when the
    /// dictionary does not distinguish it.
    pub fn lookup(&self, form: CForm) -> Option<&Ending> {
        self.select(form, None)
    }

    /// Like [`lookup`](EndingTable::lookup), preferring the variant whose
    /// raw label contains `hint`.
    pub fn select(&self, form: CForm, hint: Option<&str>) -> Option<&Ending> {
        let mut variants = self.variants(form);
        if variants.is_empty() {
            variants = self.variants(form.generalization());
        }
        hint.and_then(|h| variants.iter().find(|e| e.form.value.contains(h)))
            .or_else(|| variants.first())
    }

    pub fn forms(&self) -> impl Iterator<Item = CForm> + '_ {
        self.endings.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.endings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endings.is_empty()
    }
}

fn is_paradigm_word(word: &Word, ctype: CType, base: &str) -> bool {
    let same_base = match ctype {
        // compounds such as やってくる share the kana stem
        CType::Kahen => word.base.ends_with(base),
        _ => word.base == base,
    };
    same_base && word.ctype().kind == ctype
}

/// Builds the ending table of `ctype` by tokenizing its reference sentences.
///
/// Fails with [`Error::EndingNotFound`] when a form the type cannot do
/// without is never observed, which means the dictionary is incompatible.
pub fn generate_ending_table(ctype: CType, tokenizer: &dyn Tokenize) -> Result<EndingTable> {
    let paradigm = paradigm(ctype).ok_or(Error::CannotConjugate { ctype })?;
    let words: Vec<Word> = paradigm
        .sentences
        .iter()
        .flat_map(|sentence| tokenizer.tokenize(sentence))
        .filter(|word| is_paradigm_word(word, ctype, paradigm.base))
        .collect();

    let mut endings: HashMap<CForm, Vec<Ending>> = HashMap::new();
    for form in TARGET_FORMS {
        let mut variants: Vec<Ending> = Vec::new();
        for word in words.iter().filter(|w| w.cform().kind == form) {
            if variants.iter().any(|e| e.form.value == word.raw_cform) {
                continue;
            }
            if let Some(template) = ctype.ending_of(&word.base, &word.surface) {
                variants.push(Ending {
                    form: word.cform(),
                    template,
                });
            }
        }
        if !variants.is_empty() {
            endings.insert(form, variants);
        }
    }

    if let Some(&form) = paradigm.required.iter().find(|f| !endings.contains_key(f)) {
        return Err(Error::EndingNotFound {
            ctype,
            form,
            paradigm: paradigm.base,
        });
    }

    tracing::info!(
        "Built ending table for {:?} ({} forms)",
        ctype,
        endings.len()
    );
    Ok(EndingTable { ctype, endings })
}
