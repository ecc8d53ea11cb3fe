//! 変換処理の型定義
//!
//! - DictionaryEntry: 用語辞書の1エントリ
//! - SegmentedContent: 素材セルの分割結果（素材・洗濯表示・原産国）
//! - OutputRecord: 1行分の出力（7列 or 2列）

use serde::{Deserialize, Serialize};

/// 用語辞書の1エントリ（原語 → 訳語）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub source_term: String,
    pub target_term: String,
}

impl DictionaryEntry {
    pub fn new(source_term: impl Into<String>, target_term: impl Into<String>) -> Self {
        Self {
            source_term: source_term.into(),
            target_term: target_term.into(),
        }
    }
}

/// 素材セルの分割結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentedContent {
    /// 最初の※行より前の行（素材）
    pub materials: String,
    /// ※行と、原産国に採用されなかった行
    pub care_instructions: String,
    /// 原産国（未翻訳）
    pub country: String,
}

/// 1行分の出力レコード
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputRecord {
    /// 素材列なし: A=寸法(原文), B=寸法(英訳)
    DimensionsOnly {
        dimensions: String,
        dimensions_en: String,
    },
    /// 素材列あり: A〜G の7列
    Full {
        dimensions: String,
        dimensions_en: String,
        materials: String,
        materials_en: String,
        care_instructions: String,
        care_instructions_en: String,
        country: String,
    },
}

impl OutputRecord {
    /// 列数（2 or 7）
    pub fn width(&self) -> usize {
        match self {
            OutputRecord::DimensionsOnly { .. } => 2,
            OutputRecord::Full { .. } => 7,
        }
    }

    /// 列順のフィールド
    pub fn fields(&self) -> Vec<&str> {
        match self {
            OutputRecord::DimensionsOnly { dimensions, dimensions_en } => {
                vec![dimensions.as_str(), dimensions_en.as_str()]
            }
            OutputRecord::Full {
                dimensions,
                dimensions_en,
                materials,
                materials_en,
                care_instructions,
                care_instructions_en,
                country,
            } => vec![
                dimensions.as_str(),
                dimensions_en.as_str(),
                materials.as_str(),
                materials_en.as_str(),
                care_instructions.as_str(),
                care_instructions_en.as_str(),
                country.as_str(),
            ],
        }
    }

    /// 英訳後の寸法（プレビュー表示用）
    pub fn dimensions_en(&self) -> &str {
        match self {
            OutputRecord::DimensionsOnly { dimensions_en, .. }
            | OutputRecord::Full { dimensions_en, .. } => dimensions_en,
        }
    }
}
