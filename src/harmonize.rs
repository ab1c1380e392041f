//! Attachment rules between adjacent words.
//!
//! Some words fix the form of the word before them (ます wants 連用形,
//! ない wants 未然形). After an edit, [`Doc`](crate::doc::Doc) looks up the
//! requirement of the right-hand word and reconjugates the left-hand one.

use crate::cform::CForm;
use crate::ctype::CType;
use crate::kana;
use crate::pos::Pos;
use crate::word::Word;

/// Bases of the past/te family whose first kana follows the verb's onbin.
const TA_TE_FAMILY: [&str; 6] = ["た", "だ", "て", "で", "たり", "だり"];

/// Godan endings whose onbin voices a following た/て.
const VOICING_ENDINGS: [char; 4] = ['ぐ', 'ぬ', 'ぶ', 'む'];

fn is_adjectival(word: &Word) -> bool {
    matches!(word.ctype().kind, CType::Adjective | CType::AuxiliaryNai)
}

/// Auxiliaries, plus the verb suffixes IPADIC files れる/せる under (動詞,接尾).
fn is_auxiliary(word: &Word) -> bool {
    match word.pos().kind {
        Pos::Auxiliary => true,
        Pos::Verb => word.pos_path.get(1).is_some_and(|p| p == "接尾"),
        _ => false,
    }
}

/// Past-tense だ, as in 読んだ, as opposed to the copula.
///
/// A bare だ straight after a verb is read as past tense even when the
/// dictionary tags it as the copula (書くだ).
fn is_past_da(left: &Word, word: &Word) -> bool {
    word.base == "だ"
        && (word.ctype().kind != CType::AuxiliaryDa
            || (word.surface == "だ" && left.pos().kind == Pos::Verb))
}

/// Form `right` requires of the word before it, if any.
pub fn required_form(left: &Word, right: &Word) -> Option<CForm> {
    if is_auxiliary(right) {
        return match right.base.as_str() {
            "ます" | "たい" => Some(CForm::Renyo),
            "た" => Some(CForm::RenyoOnbin),
            "だ" if is_past_da(left, right) => Some(CForm::RenyoOnbin),
            "ない" | "ぬ" | "ん" | "れる" | "られる" | "せる" | "させる" => {
                Some(CForm::Mizen)
            }
            "う" => Some(CForm::IshiSuiryo),
            _ => None,
        };
    }
    match right.pos().kind {
        Pos::Particle => match right.base.as_str() {
            "て" if is_adjectival(left) => Some(CForm::Renyo),
            "で" if is_adjectival(left) => None,
            "て" | "で" | "たり" | "だり" => Some(CForm::RenyoOnbin),
            "ば" => Some(CForm::Katei),
            "ながら" => Some(CForm::Renyo),
            _ => None,
        },
        _ => None,
    }
}

/// Raw-label marker of the variant `right` selects among the forms of the
/// word before it: される and せぬ, not しれる and しぬ.
pub fn label_hint(right: &Word) -> Option<&'static str> {
    if !is_auxiliary(right) {
        return None;
    }
    match right.base.as_str() {
        "れる" | "られる" | "せる" | "させる" => Some("レル接続"),
        "ぬ" | "ん" | "ず" => Some("ヌ接続"),
        _ => None,
    }
}

/// Whether `left` disappears instead of taking `form` before `right`.
///
/// ある has no 未然形 before ない: そうでありない becomes そうでない.
pub fn vanishes_before(left: &Word, form: CForm, right: &Word) -> bool {
    form == CForm::Mizen
        && left.base == "ある"
        && left.ctype().kind.is_godan()
        && right.base == "ない"
}

/// Whether `word` after `left` takes part in the た/て voicing rule.
pub fn is_ta_te(left: &Word, word: &Word) -> bool {
    let family = TA_TE_FAMILY.contains(&word.base.as_str());
    match word.pos().kind {
        Pos::Auxiliary => family && (word.base != "だ" || is_past_da(left, word)),
        Pos::Particle => family,
        _ => false,
    }
}

/// Whether a た/て word after `left` starts voiced (読んだ, 泳いで).
pub fn voices_ta_te(left: &Word) -> bool {
    left.ctype().kind.is_godan()
        && left
            .base
            .chars()
            .last()
            .is_some_and(|c| VOICING_ENDINGS.contains(&c))
}

/// `right` with its leading consonant voiced or devoiced to agree with
/// `left`, or `None` when nothing changes.
pub fn assimilate(left: &Word, right: &Word) -> Option<Word> {
    if !is_ta_te(left, right) {
        return None;
    }
    let shift = if voices_ta_te(left) {
        kana::voiced
    } else {
        kana::unvoiced
    };
    let surface = kana::map_head(&right.surface, shift);
    if surface == right.surface {
        return None;
    }
    let base = kana::map_head(&right.base, shift);
    Some(Word {
        surface,
        base,
        ..right.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn verb(surface: &str, base: &str, ctype: &str, cform: &str) -> Word {
        Word::new(surface, &["動詞", "自立"])
            .with_base(base)
            .with_conjugation(ctype, cform)
    }

    fn aux(surface: &str, base: &str, ctype: &str) -> Word {
        Word::new(surface, &["助動詞"])
            .with_base(base)
            .with_conjugation(ctype, "基本形")
    }

    fn particle(surface: &str) -> Word {
        Word::new(surface, &["助詞", "接続助詞"])
    }

    #[test]
    fn test_auxiliary_requirements() {
        let left = verb("書く", "書く", "五段・カ行イ音便", "基本形");
        let cases = [
            (aux("ます", "ます", "特殊・マス"), Some(CForm::Renyo)),
            (aux("た", "た", "特殊・タ"), Some(CForm::RenyoOnbin)),
            (aux("だ", "だ", "特殊・タ"), Some(CForm::RenyoOnbin)),
            (aux("だ", "だ", "特殊・ダ"), Some(CForm::RenyoOnbin)),
            (aux("ない", "ない", "特殊・ナイ"), Some(CForm::Mizen)),
            (aux("ん", "ぬ", "特殊・ヌ"), Some(CForm::Mizen)),
            (aux("う", "う", "不変化型"), Some(CForm::IshiSuiryo)),
            (aux("らしい", "らしい", "形容詞・イ段"), None),
        ];
        for (right, expected) in cases {
            assert_eq!(required_form(&left, &right), expected, "{}", right.surface);
        }

        let noun = Word::new("本", &["名詞", "一般"]);
        assert_eq!(required_form(&noun, &aux("だ", "だ", "特殊・ダ")), None);
    }

    #[test]
    fn test_particle_requirements() {
        let verb = verb("書く", "書く", "五段・カ行イ音便", "基本形");
        let adjective = Word::new("楽しい", &["形容詞", "自立"])
            .with_conjugation("形容詞・イ段", "基本形");

        assert_eq!(required_form(&verb, &particle("て")), Some(CForm::RenyoOnbin));
        assert_eq!(required_form(&verb, &particle("だり")), Some(CForm::RenyoOnbin));
        assert_eq!(required_form(&verb, &particle("ば")), Some(CForm::Katei));
        assert_eq!(required_form(&verb, &particle("ながら")), Some(CForm::Renyo));
        assert_eq!(required_form(&adjective, &particle("て")), Some(CForm::Renyo));
        assert_eq!(required_form(&adjective, &particle("で")), None);
        assert_eq!(required_form(&verb, &particle("が")), None);
        assert_eq!(required_form(&verb, &Word::new("。", &["記号", "句点"])), None);
    }

    #[test]
    fn test_ta_te_family() {
        let noun = Word::new("本", &["名詞", "一般"]);
        assert!(is_ta_te(&noun, &aux("た", "た", "特殊・タ")));
        assert!(is_ta_te(&noun, &aux("だ", "だ", "特殊・タ")));
        assert!(!is_ta_te(&noun, &aux("だ", "だ", "特殊・ダ")));
        assert!(is_ta_te(&noun, &particle("たり")));
        assert!(!is_ta_te(&noun, &particle("が")));
        assert!(!is_ta_te(&noun, &Word::new("た", &["名詞"])));
    }

    #[test]
    fn test_bare_da_after_a_verb_is_past_tense() {
        let kaku = verb("書く", "書く", "五段・カ行イ音便", "基本形");
        let da = aux("だ", "だ", "特殊・ダ");
        let daro = Word::new("だろ", &["助動詞"])
            .with_base("だ")
            .with_conjugation("特殊・ダ", "未然形");

        assert_eq!(required_form(&kaku, &da), Some(CForm::RenyoOnbin));
        assert!(is_ta_te(&kaku, &da));
        assert_eq!(required_form(&kaku, &daro), None);
        assert!(!is_ta_te(&kaku, &daro));

        let kai = verb("書い", "書く", "五段・カ行イ音便", "連用タ接続");
        assert_eq!(assimilate(&kai, &da).unwrap().surface, "た");
    }

    #[test]
    fn test_label_hint() {
        assert_eq!(label_hint(&aux("れる", "れる", "一段")), Some("レル接続"));
        assert_eq!(label_hint(&aux("させる", "させる", "一段")), Some("レル接続"));
        assert_eq!(label_hint(&aux("ぬ", "ぬ", "特殊・ヌ")), Some("ヌ接続"));
        assert_eq!(label_hint(&aux("ない", "ない", "特殊・ナイ")), None);
        assert_eq!(label_hint(&particle("て")), None);

        let suffix = Word::new("れる", &["動詞", "接尾"]).with_conjugation("一段", "基本形");
        assert_eq!(label_hint(&suffix), Some("レル接続"));
        let kaku = verb("書く", "書く", "五段・カ行イ音便", "基本形");
        assert_eq!(required_form(&kaku, &suffix), Some(CForm::Mizen));
        let independent = verb("くれる", "くれる", "一段", "基本形");
        assert_eq!(required_form(&kaku, &independent), None);
    }

    #[test]
    fn test_aru_vanishes_before_nai() {
        let ari = verb("あり", "ある", "五段・ラ行アル", "連用形");
        let nai = aux("ない", "ない", "特殊・ナイ");

        assert!(vanishes_before(&ari, CForm::Mizen, &nai));
        assert!(!vanishes_before(&ari, CForm::Renyo, &nai));
        assert!(!vanishes_before(&ari, CForm::Mizen, &aux("ぬ", "ぬ", "特殊・ヌ")));
        let kaku = verb("書く", "書く", "五段・カ行イ音便", "基本形");
        assert!(!vanishes_before(&kaku, CForm::Mizen, &nai));
    }

    #[test]
    fn test_assimilate_voices_after_nasal_onbin() {
        let yon = verb("読ん", "読む", "五段・マ行", "連用タ接続");
        let ta = aux("た", "た", "特殊・タ");

        let da = assimilate(&yon, &ta).unwrap();
        assert_eq!(da.surface, "だ");
        assert_eq!(da.base, "だ");
        assert_eq!(da.raw_ctype, "特殊・タ");
    }

    #[test]
    fn test_assimilate_devoices_elsewhere() {
        let arui = verb("歩い", "歩く", "五段・カ行イ音便", "連用タ接続");

        assert_eq!(assimilate(&arui, &particle("だり")).unwrap().surface, "たり");
        assert_eq!(assimilate(&arui, &particle("たり")), None);
        assert_eq!(assimilate(&arui, &particle("が")), None);
    }

    #[test]
    fn test_voicing_needs_a_godan_verb() {
        let oyogu = verb("泳い", "泳ぐ", "五段・ガ行", "連用タ接続");
        let sumu = verb("住ん", "住む", "五段・マ行", "連用タ接続");
        let miru = verb("見", "見る", "一段", "連用形");

        assert!(voices_ta_te(&oyogu));
        assert!(voices_ta_te(&sumu));
        assert!(!voices_ta_te(&miru));
    }
}
