//! 表データの入出力
//!
//! 入力: CSV（既定）、Excel/ODS（先頭シート）
//! 出力: CSV（全フィールドをクォート）、xlsx

pub mod reader;
pub mod writer;

pub use reader::{detect_delimiter, read_csv_str, read_table};
pub use writer::{default_output_path, write_csv, write_records};

use std::path::Path;

/// 入力ファイルの形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Spreadsheet,
}

impl InputFormat {
    /// 拡張子から判定（不明な拡張子はCSV扱い）
    pub fn from_path(path: &Path) -> Self {
        match extension_of(path).as_deref() {
            Some("xlsx") | Some("xlsm") | Some("xls") | Some("ods") => InputFormat::Spreadsheet,
            _ => InputFormat::Csv,
        }
    }
}

/// 出力ファイルの形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Xlsx,
}

impl OutputFormat {
    /// 拡張子から判定（書き出せないスプレッドシート形式は None）
    pub fn from_path(path: &Path) -> Option<Self> {
        match extension_of(path).as_deref() {
            Some("xlsx") => Some(OutputFormat::Xlsx),
            Some("xlsm") | Some("xls") | Some("ods") => None,
            _ => Some(OutputFormat::Csv),
        }
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
}
