//! 行単位の変換パイプライン
//!
//! ## 処理フロー
//! 1. A列（寸法）: 用語辞書 → 文字正規化
//! 2. 素材列がある場合:
//!    - セルを素材・洗濯表示・原産国に分割
//!    - 素材: 用語辞書 → 文字正規化
//!    - 洗濯表示: 洗濯表示辞書のみ（正規化なし）
//!    - 原産国: そのまま
//! 3. 7列（素材列あり）または2列（素材列なし）の出力レコードを組み立てる
//!
//! 未登録語は翻訳前の寸法・素材テキストから収集し、呼び出し側に返す。

use crate::care_label::CareLabelDictionary;
use crate::dictionary::TermDictionary;
use crate::normalizer::CharacterNormalizer;
use crate::segmenter::ContentSegmenter;
use crate::types::OutputRecord;
use crate::unknown::extract_unknown_terms;
use std::collections::BTreeSet;

/// 素材列の既定位置（0始まり、B列）
pub const DEFAULT_MATERIALS_COLUMN: usize = 1;

/// 1行の変換結果
#[derive(Debug, Clone)]
pub struct RowTranslation {
    pub record: OutputRecord,
    pub unknown_terms: BTreeSet<String>,
}

/// 全行の変換結果
#[derive(Debug, Clone, Default)]
pub struct PassResult {
    pub records: Vec<OutputRecord>,
    pub unknown_terms: BTreeSet<String>,
}

/// セル変換パイプライン
#[derive(Debug, Clone)]
pub struct CellTranslationPipeline {
    dictionary: TermDictionary,
    care_labels: CareLabelDictionary,
    normalizer: CharacterNormalizer,
    segmenter: ContentSegmenter,
    materials_column: usize,
}

impl CellTranslationPipeline {
    /// # Arguments
    /// * `dictionary` - 寸法・素材の辞書スナップショット
    /// * `care_labels` - 洗濯表示辞書
    /// * `materials_column` - 素材列（0始まり）
    pub fn new(
        dictionary: TermDictionary,
        care_labels: CareLabelDictionary,
        materials_column: usize,
    ) -> Self {
        Self {
            dictionary,
            care_labels,
            normalizer: CharacterNormalizer::new(),
            segmenter: ContentSegmenter::new(),
            materials_column,
        }
    }

    pub fn dictionary(&self) -> &TermDictionary {
        &self.dictionary
    }

    pub fn care_labels(&self) -> &CareLabelDictionary {
        &self.care_labels
    }

    pub fn materials_column(&self) -> usize {
        self.materials_column
    }

    /// 辞書を差し替えた新しいパイプラインを返す
    pub fn with_dictionary(&self, dictionary: TermDictionary) -> Self {
        Self {
            dictionary,
            ..self.clone()
        }
    }

    /// 寸法・素材テキストを翻訳（辞書置換 → 文字正規化）
    pub fn translate_text(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let replaced = self.dictionary.translate(text);
        self.normalizer.normalize(&replaced)
    }

    /// 1行を変換
    pub fn translate_row(&self, row: &[String]) -> RowTranslation {
        let dimensions = row.first().cloned().unwrap_or_default();
        let dimensions_en = self.translate_text(&dimensions);
        let mut unknown_terms = extract_unknown_terms(&dimensions, &self.dictionary);

        let record = match row.get(self.materials_column) {
            Some(cell) => {
                let segmented = self.segmenter.segment(cell);
                unknown_terms.extend(extract_unknown_terms(&segmented.materials, &self.dictionary));

                OutputRecord::Full {
                    materials_en: self.translate_text(&segmented.materials),
                    care_instructions_en: self.care_labels.translate(&segmented.care_instructions),
                    dimensions,
                    dimensions_en,
                    materials: segmented.materials,
                    care_instructions: segmented.care_instructions,
                    country: segmented.country,
                }
            }
            None => OutputRecord::DimensionsOnly {
                dimensions,
                dimensions_en,
            },
        };

        RowTranslation {
            record,
            unknown_terms,
        }
    }

    /// 全行を変換
    pub fn translate_rows(&self, rows: &[Vec<String>]) -> PassResult {
        let mut result = PassResult::default();
        for row in rows {
            let translated = self.translate_row(row);
            result.unknown_terms.extend(translated.unknown_terms);
            result.records.push(translated.record);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    fn pipeline() -> CellTranslationPipeline {
        let care = CareLabelDictionary::from_json(r#"{"ドライクリーニング": "Dry clean"}"#).unwrap();
        CellTranslationPipeline::new(TermDictionary::base().unwrap(), care, DEFAULT_MATERIALS_COLUMN)
    }

    #[test]
    fn test_full_row() {
        let p = pipeline();
        let t = p.translate_row(&row(&[
            "総丈78cm",
            "コットン100%\n※ドライクリーニング\n日本製",
        ]));

        assert_eq!(
            t.record,
            OutputRecord::Full {
                dimensions: "総丈78cm".into(),
                dimensions_en: "Total Length 78cm".into(),
                materials: "コットン100%".into(),
                materials_en: "Cotton 100%".into(),
                care_instructions: "※ドライクリーニング".into(),
                care_instructions_en: "※Dry clean".into(),
                country: "日本製".into(),
            }
        );
        assert!(t.unknown_terms.is_empty());
    }

    #[test]
    fn test_dimensions_only_row() {
        let p = pipeline();
        let t = p.translate_row(&row(&["股下78cm"]));
        assert_eq!(t.record.width(), 2);
        assert_eq!(t.record.fields(), vec!["股下78cm", "Inseam 78cm"]);
    }

    #[test]
    fn test_empty_row_is_two_fields() {
        let p = pipeline();
        let t = p.translate_row(&[]);
        assert_eq!(t.record.fields(), vec!["", ""]);
    }

    #[test]
    fn test_configurable_materials_column() {
        let care = CareLabelDictionary::empty().unwrap();
        let p = CellTranslationPipeline::new(TermDictionary::base().unwrap(), care, 2);

        let short = p.translate_row(&row(&["身幅50cm", "メモ"]));
        assert_eq!(short.record.width(), 2);

        let full = p.translate_row(&row(&["身幅50cm", "メモ", "ウール80%"]));
        assert_eq!(full.record.width(), 7);
        assert_eq!(full.record.fields()[3], "Wool 80%");
    }

    #[test]
    fn test_fullwidth_material() {
        let p = pipeline();
        let t = p.translate_row(&row(&["", "１００％コットン（Ｓ）"]));
        assert_eq!(t.record.fields()[3], "100%Cotton(S)");
    }

    #[test]
    fn test_care_text_is_not_normalized() {
        let care = CareLabelDictionary::from_json(r#"{"手洗い": "Hand wash"}"#).unwrap();
        let p = CellTranslationPipeline::new(TermDictionary::base().unwrap(), care, 1);
        let t = p.translate_row(&row(&["", "綿100%\n※手洗い（３０℃）\n日本製"]));
        assert_eq!(t.record.fields()[5], "※Hand wash（３０℃）");
        assert_eq!(t.record.fields()[6], "日本製");
    }

    #[test]
    fn test_unknown_terms_from_dimensions_and_materials() {
        let p = pipeline();
        let t = p.translate_row(&row(&["着丈70cm", "キュプラ100%\n※手洗い\n中国製"]));
        assert!(t.unknown_terms.contains("着丈"));
        assert!(t.unknown_terms.contains("キュプラ"));
        // 洗濯表示・原産国は対象外
        assert!(!t.unknown_terms.contains("手洗い"));
        assert!(!t.unknown_terms.contains("中国製"));
    }

    #[test]
    fn test_unknown_terms_are_left_untranslated() {
        let p = pipeline();
        let t = p.translate_row(&row(&["着丈70cm"]));
        assert_eq!(t.record.dimensions_en(), "着Length 70cm");
    }

    #[test]
    fn test_translate_rows_is_deterministic() {
        let p = pipeline();
        let rows = vec![
            row(&["総丈78cm", "綿100%"]),
            row(&["ヒップ90cm"]),
            row(&["袖丈60cm", "ベロア50%,ポリエステル50%\n※ドライクリーニング\n日本製"]),
        ];
        let first = p.translate_rows(&rows);
        let second = p.translate_rows(&rows);
        assert_eq!(first.records, second.records);
        assert_eq!(first.unknown_terms, second.unknown_terms);
        assert_eq!(first.records[1].width(), 2);
        assert!(first.unknown_terms.contains("ベロア"));
    }

    #[test]
    fn test_with_dictionary_uses_new_snapshot() {
        let p = pipeline();
        let learned = p.dictionary().with_entry("ベロア", "Velour").unwrap();
        let p2 = p.with_dictionary(learned);
        let t = p2.translate_row(&row(&["", "ベロア100%"]));
        assert_eq!(t.record.fields()[3], "Velour 100%");
        assert!(t.unknown_terms.is_empty());
    }
}
