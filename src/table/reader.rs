//! 表データの読み込み

use super::InputFormat;
use crate::error::{Result, TranslatorError};
use calamine::{open_workbook_auto, Reader};
use std::path::Path;

/// 区切り文字の判定に使う先頭文字数
const SNIFF_SAMPLE_CHARS: usize = 1024;

/// 区切り文字の候補（優先順）
const DELIMITER_CANDIDATES: &[char] = &[',', '\t', ';', '|'];

/// 入力ファイルを行のリストとして読み込む
pub fn read_table(path: &Path) -> Result<Vec<Vec<String>>> {
    if !path.exists() {
        return Err(TranslatorError::FileNotFound(path.display().to_string()));
    }

    match InputFormat::from_path(path) {
        InputFormat::Csv => {
            let content = std::fs::read_to_string(path)?;
            read_csv_str(&content)
        }
        InputFormat::Spreadsheet => read_spreadsheet(path),
    }
}

/// CSV文字列をパース（クォート内の改行に対応、行ごとに列数が異なってもよい）
///
/// 空行は空のレコードとして残す。
pub fn read_csv_str(content: &str) -> Result<Vec<Vec<String>>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let delimiter = resolve_delimiter(detect_delimiter(content));

    let mut rows = Vec::new();
    for line in split_records(content, delimiter as char) {
        if line.is_empty() {
            rows.push(Vec::new());
            continue;
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(line.as_bytes());

        let mut record = csv::StringRecord::new();
        if reader.read_record(&mut record)? {
            rows.push(record.iter().map(|field| field.to_string()).collect());
        } else {
            rows.push(Vec::new());
        }
    }
    Ok(rows)
}

/// クォート外の改行でレコード単位に分割（行末の `\r` は除く）
///
/// 末尾の改行の後ろは空レコードとして数えない。
fn split_records(content: &str, delimiter: char) -> Vec<&str> {
    let mut records = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut field_start = true;
    let mut chars = content.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if in_quotes {
            if c == '"' {
                if matches!(chars.peek(), Some((_, '"'))) {
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            continue;
        }

        match c {
            '"' if field_start => {
                in_quotes = true;
                field_start = false;
            }
            '\n' => {
                records.push(content[start..idx].trim_end_matches('\r'));
                start = idx + 1;
                field_start = true;
            }
            _ => field_start = c == delimiter,
        }
    }

    if start < content.len() {
        records.push(content[start..].trim_end_matches('\r'));
    }
    records
}

/// 先頭部分から区切り文字を推定
///
/// 各行に同じ数だけ現れる候補を採用する。判定できなければ None。
pub fn detect_delimiter(content: &str) -> Option<char> {
    let sample: String = content.chars().take(SNIFF_SAMPLE_CHARS).collect();
    let mut lines: Vec<&str> = sample.lines().filter(|l| !l.trim().is_empty()).collect();

    // 途中で切れた最終行は判定に使わない
    if content.chars().count() > SNIFF_SAMPLE_CHARS && lines.len() > 1 {
        lines.pop();
    }
    if lines.is_empty() {
        return None;
    }

    DELIMITER_CANDIDATES.iter().copied().find(|&candidate| {
        let first = lines[0].matches(candidate).count();
        first > 0 && lines.iter().all(|line| line.matches(candidate).count() == first)
    })
}

/// 推定結果に関わらずカンマを使う
fn resolve_delimiter(detected: Option<char>) -> u8 {
    match detected {
        Some(',') => {}
        Some(other) => log::debug!("区切り文字 {:?} を検出しましたがカンマを使用します", other),
        None => log::debug!("区切り文字を判定できません、カンマを使用します"),
    }
    b','
}

/// スプレッドシートの先頭シートを読み込む（セルはすべて文字列化）
///
/// 使用範囲内の空セルも列として残す。CSVに書き出した場合と同じ列数になる。
fn read_spreadsheet(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| TranslatorError::SpreadsheetRead(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| TranslatorError::SpreadsheetRead("シートがありません".into()))?
        .map_err(|e| TranslatorError::SpreadsheetRead(e.to_string()))?;

    let rows = range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();
    Ok(rows)
}
