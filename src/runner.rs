//! 変換処理の実行
//!
//! ## 処理フロー
//! 1. 入力ファイルと辞書ファイルを読み込む
//! 2. 全行を変換して出力（1回目）
//! 3. 未登録語があれば訳語を問い合わせて学習
//! 4. 1件以上学習した場合、新しい辞書で入力全体を最初から再変換して出力を上書き（2回目）

use crate::error::Result;
use crate::prompt::print_unknown_terms;
use crate::store::JsonTermStore;
use crate::table::{default_output_path, read_table, write_records};
use dim_translator_common::{
    learn_terms, CareLabelDictionary, CellTranslationPipeline, OutputRecord, PassResult,
    TermDictionary, TermResolver,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// 変換オプション
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub learn: bool,
    /// 素材列（0始まり）
    pub materials_column: usize,
    pub dictionary_path: PathBuf,
    pub care_labels_path: PathBuf,
    pub preview_rows: usize,
}

impl TranslateOptions {
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }
}

/// 実行結果
#[derive(Debug, Clone)]
pub struct TranslationSummary {
    pub rows: usize,
    pub output_path: PathBuf,
    pub unknown_terms: BTreeSet<String>,
    pub learned: Vec<(String, String)>,
    pub reprocessed: bool,
}

/// 辞書ファイルからパイプラインを構築
pub fn build_pipeline(options: &TranslateOptions) -> Result<(CellTranslationPipeline, JsonTermStore)> {
    let learned_store = JsonTermStore::load(&options.dictionary_path);
    let care_store = JsonTermStore::load(&options.care_labels_path);

    let dictionary = TermDictionary::with_overlay(learned_store.entries())?;
    let care_labels = CareLabelDictionary::new(care_store.entries().clone())?;

    let pipeline = CellTranslationPipeline::new(dictionary, care_labels, options.materials_column);
    Ok((pipeline, learned_store))
}

/// 変換を実行
///
/// # Arguments
/// * `options` - 変換オプション
/// * `resolver` - 未登録語の訳語の問い合わせ先（学習が有効な場合のみ使用）
pub fn run_translation<R>(options: &TranslateOptions, resolver: &mut R) -> Result<TranslationSummary>
where
    R: TermResolver + ?Sized,
{
    let rows = read_table(&options.input)?;
    let output_path = options.output_path();
    let (pipeline, mut learned_store) = build_pipeline(options)?;

    log::debug!(
        "辞書: {}件, 洗濯表示: {}件, 素材列: {}",
        pipeline.dictionary().len(),
        pipeline.care_labels().len(),
        options.materials_column + 1
    );

    // 1回目
    let first = pipeline.translate_rows(&rows);
    print_preview(&rows, &first, options.preview_rows);
    write_records(&output_path, &first.records)?;

    let mut summary = TranslationSummary {
        rows: rows.len(),
        output_path: output_path.clone(),
        unknown_terms: first.unknown_terms.clone(),
        learned: Vec::new(),
        reprocessed: false,
    };

    if first.unknown_terms.is_empty() {
        return Ok(summary);
    }

    if !options.learn {
        log::info!("未登録の用語が{}件あります（学習は無効）", first.unknown_terms.len());
        return Ok(summary);
    }

    print_unknown_terms(&first.unknown_terms);
    let outcome = learn_terms(
        pipeline.dictionary(),
        &first.unknown_terms,
        resolver,
        &mut learned_store,
    )?;
    summary.learned = outcome.learned.clone();

    if !outcome.has_learned() {
        return Ok(summary);
    }

    // 2回目: 新しい辞書で最初から再変換
    println!("\n🔄 学習した用語で再変換中...");
    let pipeline = pipeline.with_dictionary(outcome.dictionary);
    let records = translate_with_progress(&pipeline, &rows);
    write_records(&output_path, &records)?;
    summary.reprocessed = true;

    Ok(summary)
}

fn translate_with_progress(pipeline: &CellTranslationPipeline, rows: &[Vec<String>]) -> Vec<OutputRecord> {
    let pb = ProgressBar::new(rows.len() as u64);
    if let Ok(style) = ProgressStyle::with_template("  [{bar:40}] {pos}/{len}行") {
        pb.set_style(style.progress_chars("=> "));
    }

    let records = rows
        .iter()
        .map(|row| {
            let translated = pipeline.translate_row(row);
            pb.inc(1);
            translated.record
        })
        .collect();

    pb.finish_and_clear();
    records
}

/// 先頭の数行の変換内容を表示
fn print_preview(rows: &[Vec<String>], result: &PassResult, limit: usize) {
    for (idx, record) in result.records.iter().take(limit).enumerate() {
        println!("行 {}:", idx + 1);
        match record {
            OutputRecord::DimensionsOnly { dimensions, dimensions_en } => {
                println!("  寸法(原文): {}", dimensions);
                println!("  寸法(英訳): {}", dimensions_en);
            }
            OutputRecord::Full {
                dimensions,
                dimensions_en,
                materials,
                materials_en,
                care_instructions,
                care_instructions_en,
                country,
            } => {
                println!("  寸法(原文): {}", dimensions);
                println!("  寸法(英訳): {}", dimensions_en);
                println!("  素材(原文): {}", materials);
                println!("  素材(英訳): {}", materials_en);
                if !care_instructions.is_empty() {
                    println!("  洗濯表示(原文): {}...", truncate_chars(care_instructions, 50));
                    println!("  洗濯表示(英訳): {}...", truncate_chars(care_instructions_en, 50));
                }
                if !country.is_empty() {
                    println!("  原産国: {}", country);
                }
            }
        }
        println!();
    }
    log::debug!("{}行を変換しました", rows.len());
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
