//! Conjugation forms (活用形).

use serde::{Deserialize, Serialize};

use crate::pos::Pos;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CForm {
    /// 未然形
    Mizen,
    /// 意志推量形, the volitional use of 未然形
    IshiSuiryo,
    /// 連用形
    Renyo,
    /// 連用形 with a sound change (書い, 読ん, 立っ)
    RenyoOnbin,
    /// 連用形 before に (だ → に)
    RenyoNi,
    /// 終止形
    Shushi,
    /// 連体形
    Rentai,
    /// 仮定形
    Katei,
    /// 命令形
    Meirei,
    /// 語幹 of an adjective
    Gokan,
    Nothing,
    Unknown,
}

/// Order in which variants are tried during normalization: specific forms
/// come before the forms they specialize.
pub const ALL_CFORMS: [CForm; 11] = [
    CForm::Nothing,
    CForm::Gokan,
    CForm::IshiSuiryo,
    CForm::RenyoOnbin,
    CForm::RenyoNi,
    CForm::Mizen,
    CForm::Renyo,
    CForm::Shushi,
    CForm::Rentai,
    CForm::Katei,
    CForm::Meirei,
];

/// Lexicalized volitional surfaces reported with a plain 未然形 label.
const VOLITIONAL_SURFACES: [&str; 2] = ["だろ", "でしょ"];

impl CForm {
    pub fn name(self) -> &'static str {
        match self {
            CForm::Mizen => "未然形",
            CForm::IshiSuiryo => "意志推量形",
            CForm::Renyo => "連用形",
            CForm::RenyoOnbin => "連用形-音便",
            CForm::RenyoNi => "連用ニ接続",
            CForm::Shushi => "終止形",
            CForm::Rentai => "連体形",
            CForm::Katei => "仮定形",
            CForm::Meirei => "命令形",
            CForm::Gokan => "語幹",
            CForm::Nothing => "",
            CForm::Unknown => "*",
        }
    }

    /// Whether a word with the given surface, POS path and raw label is in
    /// this form.
    ///
    /// `Renyo` also accepts `RenyoOnbin` and `RenyoNi` words.
    pub fn conforms_to<S: AsRef<str>>(self, surface: &str, pos_path: &[S], label: &str) -> bool {
        match self {
            CForm::Nothing => label.is_empty(),
            CForm::Gokan => {
                Pos::Adjective.conforms_to(pos_path)
                    && (label.contains("語幹") || label.contains("ガル接続"))
            }
            CForm::IshiSuiryo => {
                label.contains("意志推量")
                    || label.contains("未然ウ接続")
                    || (VOLITIONAL_SURFACES.contains(&surface) && label.contains("未然"))
            }
            CForm::RenyoOnbin => {
                label.contains("連用")
                    && ["音便", "タ接続", "ゴザイ接続"]
                        .iter()
                        .any(|m| label.contains(m))
            }
            CForm::RenyoNi => label.contains("連用") && label.contains('ニ'),
            CForm::Mizen => {
                label.contains("未然") && !CForm::IshiSuiryo.conforms_to(surface, pos_path, label)
            }
            CForm::Renyo => label.contains("連用"),
            CForm::Shushi => label.contains("終止") || label.contains("基本"),
            CForm::Rentai => label.contains("連体") || label.contains("体言接続"),
            CForm::Katei => label.contains("仮定"),
            CForm::Meirei => label.contains("命令"),
            CForm::Unknown => ALL_CFORMS
                .iter()
                .all(|f| !f.conforms_to(surface, pos_path, label)),
        }
    }

    /// Whether `self` is `other` or a generalization of it.
    pub fn generalizes(self, other: CForm) -> bool {
        self == other
            || (self == CForm::Renyo && matches!(other, CForm::RenyoOnbin | CForm::RenyoNi))
    }

    /// The form this one specializes, used when a dictionary has no
    /// distinct entry for it.
    pub fn generalization(self) -> CForm {
        match self {
            CForm::RenyoOnbin | CForm::RenyoNi => CForm::Renyo,
            CForm::IshiSuiryo => CForm::Mizen,
            other => other,
        }
    }

    pub fn normalize<S: AsRef<str>>(surface: &str, pos_path: &[S], label: &str) -> CForm {
        ALL_CFORMS
            .into_iter()
            .find(|f| f.conforms_to(surface, pos_path, label))
            .unwrap_or(CForm::Unknown)
    }
}

/// A normalized conjugation form together with the raw label it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConjugationForm {
    pub kind: CForm,
    pub value: String,
}

impl ConjugationForm {
    pub fn normalize<S: AsRef<str>>(surface: &str, pos_path: &[S], label: &str) -> Self {
        Self {
            kind: CForm::normalize(surface, pos_path, label),
            value: label.to_string(),
        }
    }
}
