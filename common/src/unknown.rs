//! 未登録語の検出
//!
//! 翻訳前のテキストから、ひらがな・カタカナ・漢字の連続を抜き出し、
//! 辞書にない語を未登録語として返す。自動で翻訳はしない。

use crate::dictionary::TermDictionary;
use regex::Regex;
use std::collections::BTreeSet;

/// テキスト中の未登録語を抽出
///
/// 1文字の語、辞書の原語と完全一致する語、数字・単位のみの語は除外する。
pub fn extract_unknown_terms(text: &str, dictionary: &TermDictionary) -> BTreeSet<String> {
    lazy_static::lazy_static! {
        // ひらがな・カタカナ・CJK統合漢字
        static ref JAPANESE_RE: Regex =
            Regex::new(r"[\x{3040}-\x{309F}\x{30A0}-\x{30FF}\x{4E00}-\x{9FAF}]+").unwrap();
        static ref MEASUREMENT_RE: Regex = Regex::new(r"^[0-9.,：:cm]+$").unwrap();
    }

    JAPANESE_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|term| term.chars().count() > 1)
        .filter(|term| !dictionary.contains(term))
        .filter(|term| !MEASUREMENT_RE.is_match(term))
        .map(|term| term.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_terms_are_skipped() {
        let d = TermDictionary::base().unwrap();
        assert!(extract_unknown_terms("総丈78cm 股下70cm", &d).is_empty());
    }

    #[test]
    fn test_unknown_runs_are_reported() {
        let d = TermDictionary::base().unwrap();
        let unknown = extract_unknown_terms("ベロア100%\n裏地:キュプラ", &d);
        let expected: BTreeSet<String> = ["ベロア", "裏地", "キュプラ"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(unknown, expected);
    }

    #[test]
    fn test_single_characters_are_ignored() {
        let d = TermDictionary::empty().unwrap();
        assert!(extract_unknown_terms("丈78 幅30", &d).is_empty());
    }

    #[test]
    fn test_compound_run_is_not_split() {
        // 辞書に「総丈」があっても「総丈約」は別の語として扱う
        let d = TermDictionary::base().unwrap();
        let unknown = extract_unknown_terms("総丈約78cm", &d);
        assert!(unknown.contains("総丈約"));
    }

    #[test]
    fn test_marker_and_ascii_are_not_terms() {
        let d = TermDictionary::empty().unwrap();
        assert!(extract_unknown_terms("※ (S) 100% cm", &d).is_empty());
    }
}
