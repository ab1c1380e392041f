//! Part-of-speech taxonomy (品詞).

use serde::{Deserialize, Serialize};

/// Closed set of part-of-speech categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pos {
    Noun,
    Verb,
    Adjective,
    AdjectivalNoun,
    Adverb,
    Adnominal,
    Conjunction,
    Particle,
    Auxiliary,
    Interjection,
    Prefix,
    Suffix,
    Symbol,
    Other,
    Unknown,
}

/// Order in which variants are tried during normalization.
pub const ALL_POS: [Pos; 14] = [
    Pos::Adnominal,
    Pos::Noun,
    Pos::Verb,
    Pos::Adjective,
    Pos::AdjectivalNoun,
    Pos::Adverb,
    Pos::Conjunction,
    Pos::Particle,
    Pos::Auxiliary,
    Pos::Interjection,
    Pos::Prefix,
    Pos::Suffix,
    Pos::Symbol,
    Pos::Other,
];

fn head<S: AsRef<str>>(pos_path: &[S]) -> &str {
    pos_path.first().map_or("", |p| p.as_ref())
}

impl Pos {
    /// Canonical label, normalizing back to the same variant.
    pub fn name(self) -> &'static str {
        match self {
            Pos::Noun => "名詞",
            Pos::Verb => "動詞",
            Pos::Adjective => "形容詞",
            Pos::AdjectivalNoun => "形状詞",
            Pos::Adverb => "副詞",
            Pos::Adnominal => "連体詞",
            Pos::Conjunction => "接続詞",
            Pos::Particle => "助詞",
            Pos::Auxiliary => "助動詞",
            Pos::Interjection => "感動詞",
            Pos::Prefix => "接頭辞",
            Pos::Suffix => "接尾辞",
            Pos::Symbol => "記号",
            Pos::Other => "その他",
            Pos::Unknown => "",
        }
    }

    /// Whether a POS path reported by the tokenizer belongs to this variant.
    pub fn conforms_to<S: AsRef<str>>(self, pos_path: &[S]) -> bool {
        let head = head(pos_path);
        match self {
            Pos::Noun => head.contains("名詞"),
            Pos::Verb => head == "動詞",
            Pos::Adjective => head == "形容詞",
            Pos::AdjectivalNoun => head == "形状詞",
            Pos::Adverb => head == "副詞",
            Pos::Adnominal => pos_path.iter().any(|p| p.as_ref() == "連体詞"),
            Pos::Conjunction => head == "接続詞",
            Pos::Particle => head == "助詞",
            Pos::Auxiliary => matches!(head, "助動詞" | "判定詞"),
            Pos::Interjection => matches!(head, "感動詞" | "フィラー"),
            Pos::Prefix => head.starts_with("接頭"),
            Pos::Suffix => head == "接尾辞",
            Pos::Symbol => matches!(head, "記号" | "補助記号" | "空白" | "特殊"),
            Pos::Other => matches!(head, "その他" | "未定義語" | "未知語"),
            Pos::Unknown => ALL_POS.iter().all(|p| !p.conforms_to(pos_path)),
        }
    }

    /// First matching variant, `Unknown` when nothing matches.
    pub fn normalize<S: AsRef<str>>(pos_path: &[S]) -> Pos {
        ALL_POS
            .into_iter()
            .find(|p| p.conforms_to(pos_path))
            .unwrap_or(Pos::Unknown)
    }
}

/// A normalized part of speech together with the raw path it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartOfSpeech {
    pub kind: Pos,
    pub value: Vec<String>,
}

impl PartOfSpeech {
    pub fn normalize<S: AsRef<str>>(pos_path: &[S]) -> Self {
        Self {
            kind: Pos::normalize(pos_path),
            value: pos_path.iter().map(|p| p.as_ref().to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn examples() -> Vec<(Pos, Vec<Vec<&'static str>>)> {
        vec![
            (Pos::Adjective, vec![vec!["形容詞", "x"]]),
            (Pos::Adnominal, vec![vec!["連体詞", "x"], vec!["x", "連体詞"]]),
            (Pos::Adverb, vec![vec!["副詞", "x"]]),
            (Pos::AdjectivalNoun, vec![vec!["形状詞", "x"]]),
            (Pos::Auxiliary, vec![vec!["助動詞", "x"], vec!["判定詞", "x"]]),
            (Pos::Conjunction, vec![vec!["接続詞", "x"]]),
            (Pos::Interjection, vec![vec!["感動詞", "x"], vec!["フィラー", "x"]]),
            (Pos::Noun, vec![vec!["x名詞", "x"]]),
            (Pos::Particle, vec![vec!["助詞", "x"]]),
            (Pos::Prefix, vec![vec!["接頭x", "x"]]),
            (Pos::Suffix, vec![vec!["接尾辞", "x"]]),
            (
                Pos::Symbol,
                vec![
                    vec!["記号", "x"],
                    vec!["補助記号", "x"],
                    vec!["空白", "x"],
                    vec!["特殊", "x"],
                ],
            ),
            (Pos::Verb, vec![vec!["動詞", "x"]]),
            (
                Pos::Other,
                vec![vec!["その他", "x"], vec!["未定義語", "x"], vec!["未知語", "x"]],
            ),
            (Pos::Unknown, vec![vec!["x"]]),
        ]
    }

    #[test]
    fn test_conforms_to_only_its_own_examples() {
        let all = ALL_POS.iter().copied().chain([Pos::Unknown]);
        for pos in all {
            for (owner, paths) in examples() {
                for path in &paths {
                    assert_eq!(
                        pos.conforms_to(path),
                        pos == owner,
                        "{pos:?} vs {owner:?} on {path:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_normalize_keeps_raw_value() {
        for (owner, paths) in examples() {
            for path in paths {
                let pos = PartOfSpeech::normalize(&path);
                assert_eq!(pos.kind, owner);
                assert_eq!(pos.value, path);
            }
        }
    }

    #[test]
    fn test_name_is_self_consistent() {
        for pos in ALL_POS {
            assert!(!pos.name().is_empty());
            assert_eq!(Pos::normalize(&[pos.name()]), pos);
        }
    }

    #[test]
    fn test_auxiliary_is_not_a_verb() {
        assert_eq!(Pos::normalize(&["助動詞"]), Pos::Auxiliary);
        assert_eq!(Pos::normalize(&["名詞", "接尾", "助数詞"]), Pos::Noun);
        let empty: [&str; 0] = [];
        assert_eq!(Pos::normalize(&empty), Pos::Unknown);
    }
}
