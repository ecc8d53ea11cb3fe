use crate::error::{Result, TranslatorError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 学習済み辞書（基本辞書に重ねる）
    pub learned_translations_path: PathBuf,
    /// 洗濯表示辞書
    pub care_labels_path: PathBuf,
    /// 素材列（1始まり、2 = B列）
    pub materials_column: usize,
    /// 変換内容を表示する先頭行数
    pub preview_rows: usize,
    /// 未登録語を対話的に学習する
    pub learn: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            learned_translations_path: PathBuf::from("learned_translations.json"),
            care_labels_path: PathBuf::from("care_labels.json"),
            materials_column: 2,
            preview_rows: 5,
            learn: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self::load_from(&Self::config_path()?))
    }

    /// 設定ファイルを読み込み（存在しない・壊れている場合は既定値）
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let parsed = std::fs::read_to_string(path)
            .map_err(TranslatorError::from)
            .and_then(|content| serde_json::from_str::<Config>(&content).map_err(TranslatorError::from));

        match parsed {
            Ok(config) => config,
            Err(e) => {
                log::warn!("設定ファイルを読み込めません（既定値を使用します）: {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| TranslatorError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("dim-translator").join("config.json"))
    }

    /// 素材列を0始まりに変換
    pub fn materials_index(&self) -> Result<usize> {
        to_column_index(self.materials_column)
    }

    pub fn set_materials_column(&mut self, column: usize) -> Result<()> {
        to_column_index(column)?;
        self.materials_column = column;
        self.save()
    }
}

/// 1始まりの列番号を0始まりに変換
pub fn to_column_index(column: usize) -> Result<usize> {
    column
        .checked_sub(1)
        .ok_or_else(|| TranslatorError::InvalidColumn(column.to_string()))
}

/// 列番号を列名に変換（1 → A, 2 → B, 27 → AA）
pub fn column_letter(column: usize) -> String {
    let mut n = column;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}
