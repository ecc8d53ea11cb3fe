//! 変換結果の書き出し

use super::OutputFormat;
use crate::error::{Result, TranslatorError};
use dim_translator_common::OutputRecord;
use rust_xlsxwriter::Workbook;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// 既定の出力先（入力ファイル名_translated.csv）
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{}_translated.csv", stem))
}

/// 出力ファイルを丸ごと書き出す
pub fn write_records(path: &Path, records: &[OutputRecord]) -> Result<()> {
    match OutputFormat::from_path(path) {
        Some(OutputFormat::Csv) => {
            let file = File::create(path)?;
            write_csv(BufWriter::new(file), records)
        }
        Some(OutputFormat::Xlsx) => write_xlsx(path, records),
        None => Err(TranslatorError::UnsupportedFormat(path.display().to_string())),
    }
}

/// CSVとして書き出す（全フィールドをクォート、改行は LF）
pub fn write_csv<W: Write>(writer: W, records: &[OutputRecord]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(writer);

    for record in records {
        writer.write_record(record.fields())?;
    }
    writer.flush()?;
    Ok(())
}

/// xlsxとして書き出す（全セル文字列）
fn write_xlsx(path: &Path, records: &[OutputRecord]) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (row, record) in records.iter().enumerate() {
        for (col, field) in record.fields().into_iter().enumerate() {
            worksheet
                .write_string(row as u32, col as u16, field)
                .map_err(|e| TranslatorError::SpreadsheetWrite(format!("セル書き込みエラー: {}", e)))?;
        }
    }

    workbook
        .save(path)
        .map_err(|e| TranslatorError::SpreadsheetWrite(format!("保存エラー: {}", e)))
}
