//! 洗濯表示辞書
//!
//! 洗濯表示（※行）専用の語彙。寸法・素材の辞書とは別に管理し、
//! 洗濯表示の部分にのみ適用する。置換後に文字正規化は行わない。

use crate::dictionary::TermDictionary;
use crate::error::Result;
use std::collections::HashMap;

/// 洗濯表示辞書（組み込みの語彙は持たない）
#[derive(Debug, Clone)]
pub struct CareLabelDictionary {
    terms: TermDictionary,
}

impl CareLabelDictionary {
    pub fn new(entries: HashMap<String, String>) -> Result<Self> {
        Ok(Self {
            terms: TermDictionary::new(entries)?,
        })
    }

    pub fn empty() -> Result<Self> {
        Self::new(HashMap::new())
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self {
            terms: TermDictionary::from_json(json)?,
        })
    }

    /// 洗濯表示を翻訳（最長一致の置換のみ）
    pub fn translate(&self, care_instructions: &str) -> String {
        self.terms.translate(care_instructions)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &TermDictionary {
        &self.terms
    }
}
