//! Hiragana tables (五十音) used by the conjugation engine.

use crate::error::{Error, KanaClass, Result};

/// Placeholder letters standing for the vowel of a consonant-row kana.
pub const VOWELS: [char; 5] = ['a', 'i', 'u', 'e', 'o'];

/// Consonant rows a Godan stem can end in, ordered a/i/u/e/o.
const ROWS: [[char; 5]; 11] = [
    ['か', 'き', 'く', 'け', 'こ'],
    ['が', 'ぎ', 'ぐ', 'げ', 'ご'],
    ['さ', 'し', 'す', 'せ', 'そ'],
    ['ざ', 'じ', 'ず', 'ぜ', 'ぞ'],
    ['た', 'ち', 'つ', 'て', 'と'],
    ['だ', 'ぢ', 'づ', 'で', 'ど'],
    ['な', 'に', 'ぬ', 'ね', 'の'],
    ['は', 'ひ', 'ふ', 'へ', 'ほ'],
    ['ば', 'び', 'ぶ', 'べ', 'ぼ'],
    ['ま', 'み', 'む', 'め', 'も'],
    ['ら', 'り', 'る', 'れ', 'ろ'],
];

/// Row used by verbs ending in う: 歌わない, 問わない.
const W_ROW: [char; 5] = ['わ', 'い', 'う', 'え', 'お'];

const A_ROW: [char; 10] = ['あ', 'い', 'う', 'え', 'お', 'ぁ', 'ぃ', 'ぅ', 'ぇ', 'ぉ'];
const P_ROW: [char; 5] = ['ぱ', 'ぴ', 'ぷ', 'ぺ', 'ぽ'];

/// Unvoiced/voiced pairs for the rows that take dakuten.
const VOICING: [(char, char); 20] = [
    ('か', 'が'),
    ('き', 'ぎ'),
    ('く', 'ぐ'),
    ('け', 'げ'),
    ('こ', 'ご'),
    ('さ', 'ざ'),
    ('し', 'じ'),
    ('す', 'ず'),
    ('せ', 'ぜ'),
    ('そ', 'ぞ'),
    ('た', 'だ'),
    ('ち', 'ぢ'),
    ('つ', 'づ'),
    ('て', 'で'),
    ('と', 'ど'),
    ('は', 'ば'),
    ('ひ', 'び'),
    ('ふ', 'ぶ'),
    ('へ', 'べ'),
    ('ほ', 'ぼ'),
];

fn classify(c: char) -> KanaClass {
    if A_ROW.contains(&c) {
        KanaClass::VowelRow
    } else if P_ROW.contains(&c) {
        KanaClass::PRow
    } else if ('\u{30A0}'..='\u{30FF}').contains(&c) {
        KanaClass::Katakana
    } else if ('\u{3040}'..='\u{309F}').contains(&c) {
        KanaClass::OtherKana
    } else {
        KanaClass::NotKana
    }
}

/// Maps the first character of `text` to its vowel placeholder letter.
///
/// `"かみなり"` gives `'a'`, `"ぼうけん"` gives `'o'`. あ行, ぱ行, katakana
/// and non-kana input are rejected with [`Error::UnsupportedKana`].
pub fn vowel_row_letter(text: &str) -> Result<char> {
    let unsupported = |class| Error::UnsupportedKana {
        text: text.to_string(),
        class,
    };
    let Some(kana) = text.chars().next() else {
        return Err(unsupported(KanaClass::Empty));
    };
    match kana {
        'わ' => return Ok('a'),
        'を' => return Ok('o'),
        _ => {}
    }
    ROWS.iter()
        .find_map(|row| row.iter().position(|&k| k == kana))
        .map(|i| VOWELS[i])
        .ok_or_else(|| unsupported(classify(kana)))
}

/// Replaces the head of `text` with its vowel placeholder.
///
/// `"かみなり"` becomes `"aみなり"`.
pub fn replace_with_vowel(text: &str) -> Result<String> {
    let vowel = vowel_row_letter(text)?;
    let mut chars = text.chars();
    chars.next();
    Ok(format!("{vowel}{}", chars.as_str()))
}

/// Kana in the row of `last` at the position of `vowel`.
///
/// `row_kana('す', 'a')` is `'さ'`; a stem ending in う uses the w-row.
pub fn row_kana(last: char, vowel: char) -> Result<char> {
    let unsupported = |class| Error::UnsupportedKana {
        text: last.to_string(),
        class,
    };
    let index = VOWELS
        .iter()
        .position(|&v| v == vowel)
        .ok_or_else(|| unsupported(classify(vowel)))?;
    if last == 'う' {
        return Ok(W_ROW[index]);
    }
    ROWS.iter()
        .find(|row| row.contains(&last))
        .map(|row| row[index])
        .ok_or_else(|| unsupported(classify(last)))
}

pub fn voiced(c: char) -> Option<char> {
    VOICING.iter().find(|(u, _)| *u == c).map(|(_, v)| *v)
}

pub fn unvoiced(c: char) -> Option<char> {
    VOICING.iter().find(|(_, v)| *v == c).map(|(u, _)| *u)
}

/// Rewrites the head of `text` with `f`, leaving it untouched when `f` has
/// no mapping for it.
pub fn map_head(text: &str, f: impl Fn(char) -> Option<char>) -> String {
    let mut chars = text.chars();
    match chars.next().and_then(&f) {
        Some(head) => format!("{head}{}", chars.as_str()),
        None => text.to_string(),
    }
}
