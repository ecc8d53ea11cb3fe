//! 辞書ファイル（JSON）の読み書き
//!
//! `{ "原語": "訳語", ... }` 形式。保存時は原語の長い順に並べて書き出す。
//! 読み込めないファイルは警告を出して空として扱う。

use crate::error::Result;
use dim_translator_common::{sort_by_match_order, DictionaryEntry, LearnedTermSink};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// JSON辞書ファイル
#[derive(Debug, Clone)]
pub struct JsonTermStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl JsonTermStore {
    /// 辞書ファイルを読み込み（存在しない・壊れている場合は空）
    pub fn load(path: &Path) -> Self {
        let entries = if path.exists() {
            match read_entries(path) {
                Ok(entries) => {
                    log::info!("{}件の用語を読み込みました: {}", entries.len(), path.display());
                    entries
                }
                Err(e) => {
                    log::warn!("辞書ファイルを読み込めません（空として扱います）: {}: {}", path.display(), e);
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    /// 辞書ファイルを保存（原語の長い順）
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &OrderedEntries(self.ordered_entries()))?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    /// 1件追加して即保存
    pub fn insert(&mut self, term: &str, translation: &str) -> Result<()> {
        self.entries.insert(term.to_string(), translation.to_string());
        self.save()?;
        log::info!("辞書を保存しました: {}", self.path.display());
        Ok(())
    }

    pub fn entries(&self) -> &HashMap<String, String> {
        &self.entries
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn ordered_entries(&self) -> Vec<DictionaryEntry> {
        sort_by_match_order(self.entries.iter())
    }
}

impl LearnedTermSink for JsonTermStore {
    fn append(&mut self, term: &str, translation: &str) -> dim_translator_common::Result<()> {
        self.insert(term, translation)
            .map_err(|e| dim_translator_common::Error::Learning(e.to_string()))
    }
}

fn read_entries(path: &Path) -> Result<HashMap<String, String>> {
    let reader = BufReader::new(File::open(path)?);
    let entries: HashMap<String, String> = serde_json::from_reader(reader)?;
    Ok(entries)
}

/// 並び順を保ったままJSONオブジェクトとして書き出す
struct OrderedEntries(Vec<DictionaryEntry>);

impl Serialize for OrderedEntries {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.source_term, &entry.target_term)?;
        }
        map.end()
    }
}
