//! 用語辞書モジュール
//!
//! 寸法・素材の日本語表記を英語に置換する。
//! 組み込みの基本辞書に学習済み辞書（オーバーレイ）を重ね、
//! 最長一致で一度だけ走査して置換する。
//!
//! 辞書はスナップショットとして扱い、用語の追加は新しい
//! スナップショットを返す（既存の辞書は変更しない）。

use crate::error::{Error, Result};
use crate::types::DictionaryEntry;
use aho_corasick::{AhoCorasick, MatchKind};
use std::collections::HashMap;

/// 基本辞書（寸法・素材）
const BASE_TERMS: &[(&str, &str)] = &[
    // 寸法
    ("総丈", "Total Length"),
    ("股下", "Inseam"),
    ("身幅", "Body Width"),
    ("裄丈", "Sleeve Length"),
    ("フード丈", "Hood Length"),
    ("フード幅", "Hood Width"),
    ("肩幅", "Shoulder Width"),
    ("胸囲", "Chest"),
    ("ウエスト", "Waist"),
    ("ヒップ", "Hip"),
    ("袖丈", "Sleeve Length"),
    ("袖口", "Cuff"),
    ("裾幅", "Hem Width"),
    ("股上", "Rise"),
    ("太もも", "Thigh"),
    ("膝下", "Knee"),
    ("足首", "Ankle"),
    ("丈", "Length"),
    ("幅", "Width"),
    // 単位はそのまま
    ("cm", "cm"),
    ("mm", "mm"),
    ("m", "m"),
    // 素材
    ("コットン", "Cotton"),
    ("綿", "Cotton"),
    ("ポリエステル", "Polyester"),
    ("ナイロン", "Nylon"),
    ("ウール", "Wool"),
    ("シルク", "Silk"),
    ("レーヨン", "Rayon"),
    ("アクリル", "Acrylic"),
    ("スパンデックス", "Spandex"),
    ("エラスタン", "Elastane"),
    ("リネン", "Linen"),
    ("カシミア", "Cashmere"),
    ("モヘア", "Mohair"),
    ("アルパカ", "Alpaca"),
    ("混紡", "Blend"),
    ("100%", "100%"),
    ("表生地", "Main Fabric"),
    ("裏生地", "Lining Fabric"),
    ("刺繍糸", "Embroidery Thread"),
    ("再生繊維", "Regenerated Fiber"),
    ("セルロース", "Cellulose"),
    ("ポリウレタン", "Polyurethane"),
];

/// 用語辞書のスナップショット
#[derive(Debug, Clone)]
pub struct TermDictionary {
    entries: HashMap<String, String>,
    /// 照合順（原語の文字数の降順）に並べた訳語
    replacements: Vec<String>,
    matcher: AhoCorasick,
}

impl TermDictionary {
    /// 任意のエントリから辞書を構築
    ///
    /// 空文字列の原語は照合できないため除外する。
    pub fn new(entries: HashMap<String, String>) -> Result<Self> {
        let mut entries = entries;
        if entries.remove("").is_some() {
            log::warn!("空の原語を持つエントリを無視しました");
        }

        let ordered = sort_by_match_order(entries.iter());
        let patterns: Vec<&str> = ordered.iter().map(|e| e.source_term.as_str()).collect();
        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)
            .map_err(|e| Error::Dictionary(format!("照合器の構築に失敗: {}", e)))?;
        let replacements = ordered.into_iter().map(|e| e.target_term).collect();

        Ok(Self {
            entries,
            replacements,
            matcher,
        })
    }

    /// 空の辞書
    pub fn empty() -> Result<Self> {
        Self::new(HashMap::new())
    }

    /// 組み込みの基本辞書
    pub fn base() -> Result<Self> {
        Self::new(base_entries())
    }

    /// 基本辞書に学習済み辞書を重ねる（学習済みが優先）
    pub fn with_overlay(overlay: &HashMap<String, String>) -> Result<Self> {
        Self::base()?.merged(overlay)
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: HashMap<String, String> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// 別のエントリを重ねた新しいスナップショットを返す（後から追加した方が優先）
    pub fn merged(&self, overlay: &HashMap<String, String>) -> Result<Self> {
        let mut entries = self.entries.clone();
        entries.extend(overlay.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self::new(entries)
    }

    /// 1件追加した新しいスナップショットを返す
    pub fn with_entry(&self, term: &str, translation: &str) -> Result<Self> {
        if term.is_empty() {
            return Err(Error::Dictionary("空の用語は登録できません".into()));
        }
        let mut entries = self.entries.clone();
        entries.insert(term.to_string(), translation.to_string());
        Self::new(entries)
    }

    /// テキスト中の用語を置換
    ///
    /// 各位置で最も左から始まる最長の用語を採用し、左から右へ一度だけ走査する。
    /// 置換後の文字列が再度照合されることはない。
    pub fn translate(&self, text: &str) -> String {
        if text.is_empty() || self.entries.is_empty() {
            return text.to_string();
        }
        self.matcher.replace_all(text, &self.replacements)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains_key(term)
    }

    pub fn get(&self, term: &str) -> Option<&str> {
        self.entries.get(term).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &HashMap<String, String> {
        &self.entries
    }

    /// 原語の辞書順に並べたエントリ（一覧表示用）
    pub fn sorted_entries(&self) -> Vec<DictionaryEntry> {
        let mut list: Vec<DictionaryEntry> = self
            .entries
            .iter()
            .map(|(k, v)| DictionaryEntry::new(k.as_str(), v.as_str()))
            .collect();
        list.sort_by(|a, b| a.source_term.cmp(&b.source_term));
        list
    }
}

/// 基本辞書のエントリ
pub fn base_entries() -> HashMap<String, String> {
    BASE_TERMS
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// 照合順に並べる
///
/// 原語の文字数の降順、同じ長さなら原語の辞書順。
pub fn sort_by_match_order<'a, I>(entries: I) -> Vec<DictionaryEntry>
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    let mut list: Vec<DictionaryEntry> = entries
        .into_iter()
        .map(|(k, v)| DictionaryEntry::new(k.as_str(), v.as_str()))
        .collect();
    list.sort_by(|a, b| {
        b.source_term
            .chars()
            .count()
            .cmp(&a.source_term.chars().count())
            .then_with(|| a.source_term.cmp(&b.source_term))
    });
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(pairs: &[(&str, &str)]) -> TermDictionary {
        let entries = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TermDictionary::new(entries).unwrap()
    }

    #[test]
    fn test_longest_match_wins() {
        let d = dict(&[("丈", "Length"), ("総丈", "Total Length")]);
        assert_eq!(d.translate("総丈78cm"), "Total Length78cm");
        assert_eq!(d.translate("丈78cm"), "Length78cm");
    }

    #[test]
    fn test_base_dictionary() {
        let d = TermDictionary::base().unwrap();
        assert_eq!(d.translate("股下78cm"), "Inseam78cm");
        assert_eq!(d.translate("フード丈30cm"), "Hood Length30cm");
        assert_eq!(d.translate("コットン100%"), "Cotton100%");
        assert!(d.contains("総丈"));
    }

    #[test]
    fn test_replacement_is_not_rescanned() {
        // 訳語に別の原語が含まれても再置換しない
        let d = dict(&[("ベルト", "Belt m"), ("m", "meter")]);
        assert_eq!(d.translate("ベルト"), "Belt m");
    }

    #[test]
    fn test_overlay_takes_precedence() {
        let mut overlay = HashMap::new();
        overlay.insert("綿".to_string(), "Cotton Fiber".to_string());
        let d = TermDictionary::with_overlay(&overlay).unwrap();
        assert_eq!(d.get("綿"), Some("Cotton Fiber"));
        assert_eq!(d.translate("綿"), "Cotton Fiber");
    }

    #[test]
    fn test_with_entry_returns_new_snapshot() {
        let d = TermDictionary::base().unwrap();
        let learned = d.with_entry("ベロア", "Velour").unwrap();
        assert!(!d.contains("ベロア"));
        assert!(learned.contains("ベロア"));
        assert_eq!(learned.len(), d.len() + 1);
        assert_eq!(learned.translate("ベロア素材"), "Velour素材");
    }

    #[test]
    fn test_with_entry_rejects_empty_term() {
        let d = TermDictionary::empty().unwrap();
        assert!(matches!(d.with_entry("", "x"), Err(Error::Dictionary(_))));
    }

    #[test]
    fn test_from_json() {
        let d = TermDictionary::from_json(r#"{"手洗い": "Hand wash"}"#).unwrap();
        assert_eq!(d.len(), 1);
        assert_eq!(d.translate("※手洗い"), "※Hand wash");
    }

    #[test]
    fn test_empty_text() {
        let d = TermDictionary::base().unwrap();
        assert_eq!(d.translate(""), "");
    }

    #[test]
    fn test_sort_by_match_order() {
        let mut entries = HashMap::new();
        entries.insert("丈".to_string(), "Length".to_string());
        entries.insert("フード丈".to_string(), "Hood Length".to_string());
        entries.insert("総丈".to_string(), "Total Length".to_string());
        entries.insert("幅".to_string(), "Width".to_string());

        let ordered = sort_by_match_order(entries.iter());
        let keys: Vec<&str> = ordered.iter().map(|e| e.source_term.as_str()).collect();
        assert_eq!(keys, vec!["フード丈", "総丈", "丈", "幅"]);
    }
}
