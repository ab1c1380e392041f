//! Conjugation types (活用型) and the conjugation engine.
//!
//! Each [`CType`] knows how to recognize its raw dictionary label and how to
//! turn a dictionary-form base plus an ending template into a surface string.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::kana::{self, VOWELS};
use crate::pos::Pos;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CType {
    /// 五段 without a sound change in the continuative (す-ending verbs)
    Godan,
    /// 五段 with イ音便: 書く → 書いた
    GodanI,
    /// 五段 with 促音便: 立つ → 立った
    GodanZ,
    /// 五段 with 撥音便: 読む → 読んだ
    GodanN,
    /// 五段 with ウ音便: 問う → 問うた
    GodanU,
    Ichidan,
    /// カ行変格 (来る)
    Kahen,
    /// サ行変格 (する, ずる)
    Sahen,
    Adjective,
    /// 助動詞「だ」
    AuxiliaryDa,
    /// 助動詞「ない」
    AuxiliaryNai,
    Nothing,
    Unknown,
}

/// Order in which variants are tried during normalization.
pub const ALL_CTYPES: [CType; 12] = [
    CType::Nothing,
    CType::AuxiliaryDa,
    CType::AuxiliaryNai,
    CType::GodanI,
    CType::GodanZ,
    CType::GodanN,
    CType::GodanU,
    CType::Godan,
    CType::Ichidan,
    CType::Kahen,
    CType::Sahen,
    CType::Adjective,
];

const KAHEN_KANJI: &str = "来る";
const KAHEN_KANA: &str = "くる";
const SAHEN: &str = "する";
const SAHEN_VOICED: &str = "ずる";

/// Godan subtype from the label's onbin marker, or else from the base.
fn godan_subtype(base: &str, label: &str) -> CType {
    const MARKERS: [(&str, CType); 4] = [
        ("イ音便", CType::GodanI),
        ("促音便", CType::GodanZ),
        ("撥音便", CType::GodanN),
        ("ウ音便", CType::GodanU),
    ];
    if let Some((_, ctype)) = MARKERS.iter().find(|(m, _)| label.contains(m)) {
        return *ctype;
    }

    // Lexicalized exceptions to the final-kana rule.
    const IRREGULAR: [(&str, CType); 10] = [
        ("行く", CType::GodanZ),
        ("いく", CType::GodanZ),
        ("逝く", CType::GodanZ),
        ("ゆく", CType::GodanZ),
        ("問う", CType::GodanU),
        ("請う", CType::GodanU),
        ("乞う", CType::GodanU),
        ("恋う", CType::GodanU),
        ("宣う", CType::GodanU),
        ("ござる", CType::GodanI),
    ];
    if let Some((_, ctype)) = IRREGULAR.iter().find(|(b, _)| base.ends_with(b)) {
        return *ctype;
    }

    match base.chars().last() {
        Some('く' | 'ぐ') => CType::GodanI,
        Some('つ' | 'る' | 'う') => CType::GodanZ,
        Some('ぬ' | 'ぶ' | 'む') => CType::GodanN,
        _ => CType::Godan,
    }
}

/// `base` without its final character.
fn drop_last(base: &str) -> &str {
    let mut chars = base.chars();
    chars.next_back();
    chars.as_str()
}

impl CType {
    pub fn name(self) -> &'static str {
        match self {
            CType::Godan => "五段",
            CType::GodanI => "五段・イ音便",
            CType::GodanZ => "五段・促音便",
            CType::GodanN => "五段・撥音便",
            CType::GodanU => "五段・ウ音便",
            CType::Ichidan => "一段",
            CType::Kahen => "カ変",
            CType::Sahen => "サ変",
            CType::Adjective => "形容詞",
            CType::AuxiliaryDa => "助動詞・ダ",
            CType::AuxiliaryNai => "助動詞・ナイ",
            CType::Nothing => "",
            CType::Unknown => "*",
        }
    }

    /// Whether a word with the given POS path, base form and raw label
    /// belongs to this type.
    ///
    /// `Godan` also accepts words of its four subtypes.
    pub fn conforms_to<S: AsRef<str>>(self, pos_path: &[S], base: &str, label: &str) -> bool {
        let auxiliary = Pos::Auxiliary.conforms_to(pos_path);
        match self {
            CType::Nothing => label.is_empty(),
            CType::AuxiliaryDa => {
                // the past-tense auxiliary also has the base だ after 撥音便
                !label.is_empty() && auxiliary && base == "だ" && !label.contains('タ')
            }
            CType::AuxiliaryNai => !label.is_empty() && auxiliary && base == "ない",
            CType::Godan => label.contains("五段"),
            CType::GodanI | CType::GodanZ | CType::GodanN | CType::GodanU => {
                label.contains("五段") && godan_subtype(base, label) == self
            }
            CType::Ichidan => label.contains("一段"),
            CType::Kahen => label.contains('カ') && label.contains('変'),
            CType::Sahen => label.contains('サ') && label.contains('変'),
            CType::Adjective => {
                !label.is_empty()
                    && (Pos::Adjective.conforms_to(pos_path) || label.contains("形容詞"))
            }
            CType::Unknown => {
                !label.is_empty()
                    && ALL_CTYPES
                        .iter()
                        .all(|c| !c.conforms_to(pos_path, base, label))
            }
        }
    }

    /// Whether `self` is `other` or a generalization of it.
    pub fn generalizes(self, other: CType) -> bool {
        self == other
            || (self == CType::Godan
                && matches!(
                    other,
                    CType::GodanI | CType::GodanZ | CType::GodanN | CType::GodanU
                ))
    }

    pub fn is_godan(self) -> bool {
        CType::Godan.generalizes(self)
    }

    pub fn is_conjugable(self) -> bool {
        !matches!(self, CType::Nothing | CType::Unknown)
    }

    pub fn normalize<S: AsRef<str>>(pos_path: &[S], base: &str, label: &str) -> CType {
        if label.is_empty() {
            return CType::Nothing;
        }
        if Pos::Auxiliary.conforms_to(pos_path) {
            for aux in [CType::AuxiliaryDa, CType::AuxiliaryNai] {
                if aux.conforms_to(pos_path, base, label) {
                    return aux;
                }
            }
        }
        if label.contains("五段") {
            return godan_subtype(base, label);
        }
        ALL_CTYPES
            .into_iter()
            .find(|c| c.conforms_to(pos_path, base, label))
            .unwrap_or(CType::Unknown)
    }

    /// Builds the surface of `base` for an ending template.
    ///
    /// Godan templates start with a vowel placeholder (`"a"`, `"oう"`) that
    /// is resolved in the base's consonant row, or are literal onbin forms.
    pub fn conjugate(self, base: &str, ending: &str) -> Result<String> {
        match self {
            CType::Godan | CType::GodanI | CType::GodanZ | CType::GodanN | CType::GodanU => {
                let stem = drop_last(base);
                let mut chars = ending.chars();
                match chars.next() {
                    Some(vowel) if VOWELS.contains(&vowel) => {
                        let last = base.chars().last().ok_or_else(|| Error::StemMismatch {
                            ctype: self,
                            base: base.to_string(),
                            stem: "",
                        })?;
                        let kana = kana::row_kana(last, vowel)?;
                        Ok(format!("{stem}{kana}{}", chars.as_str()))
                    }
                    _ => Ok(format!("{stem}{ending}")),
                }
            }
            CType::Ichidan => {
                let stem = base.strip_suffix('る').unwrap_or(base);
                Ok(format!("{stem}{ending}"))
            }
            CType::Kahen => {
                if let Some(prefix) = base.strip_suffix(KAHEN_KANJI) {
                    // the kanji replaces the first kana of the reading
                    let mut okurigana = ending.chars();
                    okurigana.next();
                    Ok(format!("{prefix}来{}", okurigana.as_str()))
                } else if let Some(prefix) = base.strip_suffix(KAHEN_KANA) {
                    Ok(format!("{prefix}{ending}"))
                } else {
                    Err(Error::StemMismatch {
                        ctype: self,
                        base: base.to_string(),
                        stem: KAHEN_KANA,
                    })
                }
            }
            CType::Sahen => {
                if let Some(prefix) = base.strip_suffix(SAHEN) {
                    Ok(format!("{prefix}{ending}"))
                } else if let Some(prefix) = base.strip_suffix(SAHEN_VOICED) {
                    Ok(format!("{prefix}{}", kana::map_head(ending, voice_s_row)))
                } else {
                    Err(Error::StemMismatch {
                        ctype: self,
                        base: base.to_string(),
                        stem: SAHEN,
                    })
                }
            }
            CType::Adjective | CType::AuxiliaryNai => {
                let stem = base.strip_suffix('い').unwrap_or(base);
                Ok(format!("{stem}{ending}"))
            }
            CType::AuxiliaryDa => Ok(ending.to_string()),
            CType::Nothing | CType::Unknown => Err(Error::CannotConjugate { ctype: self }),
        }
    }

    /// Ending template observed in `surface`, the inverse of [`conjugate`].
    ///
    /// Returns `None` when `surface` does not start with the invariant stem
    /// of `base`.
    ///
    /// [`conjugate`]: CType::conjugate
    pub fn ending_of(self, base: &str, surface: &str) -> Option<String> {
        match self {
            CType::Godan | CType::GodanI | CType::GodanZ | CType::GodanN | CType::GodanU => {
                let rest = surface.strip_prefix(drop_last(base))?;
                if rest.is_empty() {
                    return None;
                }
                Some(kana::replace_with_vowel(rest).unwrap_or_else(|_| rest.to_string()))
            }
            CType::Ichidan => {
                let stem = base.strip_suffix('る')?;
                surface.strip_prefix(stem).map(str::to_string)
            }
            CType::Kahen => {
                let prefix = base.strip_suffix(KAHEN_KANA)?;
                surface.strip_prefix(prefix).map(str::to_string)
            }
            CType::Sahen => {
                let prefix = base.strip_suffix(SAHEN)?;
                surface.strip_prefix(prefix).map(str::to_string)
            }
            CType::Adjective | CType::AuxiliaryNai => {
                let stem = base.strip_suffix('い')?;
                surface.strip_prefix(stem).map(str::to_string)
            }
            CType::AuxiliaryDa => Some(surface.to_string()),
            CType::Nothing | CType::Unknown => None,
        }
    }
}

fn voice_s_row(c: char) -> Option<char> {
    matches!(c, 'さ' | 'し' | 'す' | 'せ' | 'そ')
        .then(|| kana::voiced(c))
        .flatten()
}

/// A normalized conjugation type together with the raw label it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConjugationType {
    pub kind: CType,
    pub value: String,
}

impl ConjugationType {
    pub fn normalize<S: AsRef<str>>(pos_path: &[S], base: &str, label: &str) -> Self {
        Self {
            kind: CType::normalize(pos_path, base, label),
            value: label.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KanaClass;
    use pretty_assertions::assert_eq;

    struct Example {
        pos: &'static [&'static str],
        base: &'static str,
        label: &'static str,
    }

    const fn ex(pos: &'static [&'static str], base: &'static str, label: &'static str) -> Example {
        Example { pos, base, label }
    }

    fn examples() -> Vec<(CType, Vec<Example>)> {
        vec![
            (CType::Godan, vec![ex(&["x"], "x", "x五段x")]),
            (
                CType::GodanI,
                vec![
                    ex(&["x"], "書く", "x五段x"),
                    ex(&["x"], "泳ぐ", "x五段x"),
                    ex(&["x"], "ござる", "x五段x"),
                ],
            ),
            (
                CType::GodanZ,
                vec![
                    ex(&["x"], "立つ", "x五段x"),
                    ex(&["x"], "売る", "x五段x"),
                    ex(&["x"], "歌う", "x五段x"),
                    ex(&["x"], "行く", "x五段x"),
                ],
            ),
            (
                CType::GodanN,
                vec![
                    ex(&["x"], "死ぬ", "x五段x"),
                    ex(&["x"], "遊ぶ", "x五段x"),
                    ex(&["x"], "読む", "x五段x"),
                ],
            ),
            (
                CType::GodanU,
                vec![ex(&["x"], "問う", "x五段x"), ex(&["x"], "請う", "x五段x")],
            ),
            (CType::Ichidan, vec![ex(&["x"], "x", "x一段x")]),
            (CType::Kahen, vec![ex(&["x"], "x", "xカx変x")]),
            (CType::Sahen, vec![ex(&["x"], "x", "xサx変x")]),
            (CType::Adjective, vec![ex(&["形容詞"], "x", "x")]),
            (CType::AuxiliaryDa, vec![ex(&["助動詞"], "だ", "x")]),
            (CType::AuxiliaryNai, vec![ex(&["助動詞"], "ない", "x")]),
            (CType::Nothing, vec![ex(&["x"], "x", "")]),
            (CType::Unknown, vec![ex(&["x"], "x", "x")]),
        ]
    }

    #[test]
    fn test_conforms_to() {
        let all = ALL_CTYPES.iter().copied().chain([CType::Unknown]);
        for ctype in all {
            for (owner, list) in examples() {
                let expected = ctype.generalizes(owner);
                for e in &list {
                    assert_eq!(
                        ctype.conforms_to(e.pos, e.base, e.label),
                        expected,
                        "{ctype:?} vs {owner:?} on {} / {}",
                        e.base,
                        e.label
                    );
                }
            }
        }
    }

    #[test]
    fn test_normalize() {
        for (owner, list) in examples() {
            for e in list {
                let ctype = ConjugationType::normalize(e.pos, e.base, e.label);
                assert_eq!(ctype.kind, owner, "{} / {}", e.base, e.label);
                assert_eq!(ctype.value, e.label);
            }
        }
    }

    #[test]
    fn test_normalize_dictionary_labels() {
        assert_eq!(CType::normalize(&["動詞", "自立"], "書く", "五段・カ行イ音便"), CType::GodanI);
        assert_eq!(CType::normalize(&["動詞", "自立"], "行く", "五段・カ行促音便"), CType::GodanZ);
        assert_eq!(CType::normalize(&["動詞", "自立"], "問う", "五段・ワ行ウ音便"), CType::GodanU);
        assert_eq!(CType::normalize(&["動詞", "一般"], "読む", "五段-マ行"), CType::GodanN);
        assert_eq!(CType::normalize(&["動詞", "自立"], "来る", "カ変・来ル"), CType::Kahen);
        assert_eq!(CType::normalize(&["動詞", "非自立可能"], "為る", "サ行変格"), CType::Sahen);
        assert_eq!(CType::normalize(&["形容詞", "自立"], "楽しい", "形容詞・イ段"), CType::Adjective);
        assert_eq!(CType::normalize(&["助動詞"], "だ", "特殊・ダ"), CType::AuxiliaryDa);
        assert_eq!(CType::normalize(&["助動詞"], "だ", "特殊・タ"), CType::Unknown);
        assert_eq!(CType::normalize(&["助動詞"], "ます", "特殊・マス"), CType::Unknown);
    }

    #[test]
    fn test_conjugate() {
        let cases = [
            (CType::Godan, "晒す", "a", "晒さ"),
            (CType::Godan, "書く", "い", "書い"),
            (CType::GodanI, "書く", "oう", "書こう"),
            (CType::GodanZ, "立つ", "i", "立ち"),
            (CType::GodanZ, "歌う", "a", "歌わ"),
            (CType::GodanN, "読む", "u", "読む"),
            (CType::GodanU, "問う", "e", "問え"),
            (CType::Ichidan, "食べる", "よう", "食べよう"),
            (CType::Kahen, "くる", "こ", "こ"),
            (CType::Kahen, "やってくる", "き", "やってき"),
            (CType::Kahen, "来る", "こ", "来"),
            (CType::Kahen, "来る", "くる", "来る"),
            (CType::Kahen, "やって来る", "こ", "やって来"),
            (CType::Sahen, "する", "しよう", "しよう"),
            (CType::Sahen, "読書する", "しよう", "読書しよう"),
            (CType::Sahen, "論ずる", "すれ", "論ずれ"),
            (CType::Sahen, "論ずる", "し", "論じ"),
            (CType::Adjective, "楽しい", "かろう", "楽しかろう"),
            (CType::AuxiliaryDa, "だ", "だっ", "だっ"),
            (CType::AuxiliaryNai, "ない", "かっ", "なかっ"),
        ];
        for (ctype, base, ending, expected) in cases {
            assert_eq!(ctype.conjugate(base, ending).unwrap(), expected, "{ctype:?} {base} {ending}");
        }
    }

    #[test]
    fn test_conjugate_invalid_ctype() {
        for ctype in [CType::Nothing, CType::Unknown] {
            assert_eq!(
                ctype.conjugate("x", "x"),
                Err(Error::CannotConjugate { ctype })
            );
        }
    }

    #[test]
    fn test_godan_placeholder_outside_consonant_rows() {
        match CType::Godan.conjugate("ぱぷ", "a") {
            Err(Error::UnsupportedKana { class, .. }) => assert_eq!(class, KanaClass::PRow),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_irregular_stem_mismatch() {
        assert!(matches!(
            CType::Kahen.conjugate("食べる", "こ"),
            Err(Error::StemMismatch { ctype: CType::Kahen, .. })
        ));
        assert!(matches!(
            CType::Sahen.conjugate("食べる", "し"),
            Err(Error::StemMismatch { ctype: CType::Sahen, .. })
        ));
    }

    #[test]
    fn test_ending_of_inverts_conjugate() {
        let cases = [
            (CType::GodanI, "書く", "書か", "a"),
            (CType::GodanI, "書く", "書い", "い"),
            (CType::GodanN, "読む", "読ん", "ん"),
            (CType::GodanZ, "待つ", "待っ", "っ"),
            (CType::GodanU, "問う", "問う", "う"),
            (CType::GodanU, "問う", "問わ", "a"),
            (CType::Ichidan, "食べる", "食べ", ""),
            (CType::Kahen, "くる", "こ", "こ"),
            (CType::Sahen, "する", "すれ", "すれ"),
            (CType::Adjective, "楽しい", "楽しかっ", "かっ"),
            (CType::AuxiliaryNai, "ない", "なけれ", "けれ"),
            (CType::AuxiliaryDa, "だ", "だろ", "だろ"),
        ];
        for (ctype, base, surface, template) in cases {
            let ending = ctype.ending_of(base, surface).unwrap();
            assert_eq!(ending, template, "{ctype:?} {surface}");
            assert_eq!(ctype.conjugate(base, &ending).unwrap(), surface);
        }
        assert_eq!(CType::GodanI.ending_of("書く", "読ま"), None);
        assert_eq!(CType::Nothing.ending_of("x", "x"), None);
    }
}
