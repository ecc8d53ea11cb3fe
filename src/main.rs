use anyhow::Context;
use clap::Parser;
use dim_translator::{cli, config, prompt, runner, store};
use dim_translator_common::TermDictionary;
use cli::{Cli, Commands};
use config::{column_letter, Config};
use runner::TranslateOptions;
use store::JsonTermStore;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let config = Config::load().context("設定ファイルの読み込みに失敗しました")?;

    match cli.command {
        Commands::Translate { input, output, no_learn, materials_col, dictionary, care_labels } => {
            println!("📐 dim-translate - 寸法・素材の英訳\n");

            let mut config = config;
            if let Some(column) = materials_col {
                config.materials_column = column;
            }
            let materials_column = config.materials_column;
            let options = TranslateOptions {
                input: input.clone(),
                output,
                learn: config.learn && !no_learn,
                materials_column: config.materials_index()?,
                dictionary_path: dictionary.unwrap_or_else(|| config.learned_translations_path.clone()),
                care_labels_path: care_labels.unwrap_or_else(|| config.care_labels_path.clone()),
                preview_rows: config.preview_rows,
            };

            println!("入力ファイル: {}", input.display());
            println!(
                "学習モード: {}",
                if options.learn { "有効（未登録語を対話的に登録）" } else { "無効（既存の辞書のみ使用）" }
            );
            println!("素材列: {} ({}列)\n", materials_column, column_letter(materials_column));

            let mut resolver = prompt::TerminalResolver::new();
            let summary = runner::run_translation(&options, &mut resolver)
                .with_context(|| format!("変換に失敗しました: {}", input.display()))?;

            println!("✔ {}行を変換", summary.rows);
            if !summary.unknown_terms.is_empty() {
                println!("  未登録語: {}件", summary.unknown_terms.len());
            }
            if !summary.learned.is_empty() {
                println!("  学習した用語: {}件", summary.learned.len());
            }
            if summary.reprocessed {
                println!("  学習後に再変換しました");
            }
            println!("\n✅ 変換完了: {}", summary.output_path.display());
        }

        Commands::List { care, dictionary } => {
            if care {
                let store = JsonTermStore::load(&config.care_labels_path);
                let care_labels = dim_translator_common::CareLabelDictionary::new(store.entries().clone())?;
                println!("洗濯表示辞書 ({}件):", care_labels.len());
                for entry in care_labels.terms().sorted_entries() {
                    println!("  {} -> {}", entry.source_term, entry.target_term);
                }
            } else {
                let path = dictionary.unwrap_or_else(|| config.learned_translations_path.clone());
                let store = JsonTermStore::load(&path);
                let dictionary = TermDictionary::with_overlay(store.entries())?;
                println!("辞書 ({}件、うち学習済み{}件):", dictionary.len(), store.len());
                for entry in dictionary.sorted_entries() {
                    println!("  {} -> {}", entry.source_term, entry.target_term);
                }
            }
        }

        Commands::Add { term, translation, dictionary } => {
            let term = term.trim().to_string();
            let translation = translation.trim().to_string();
            if term.is_empty() {
                anyhow::bail!("空の用語は登録できません");
            }

            let path = dictionary.unwrap_or_else(|| config.learned_translations_path.clone());
            let mut store = JsonTermStore::load(&path);
            store.insert(&term, &translation)?;
            println!("✔ 登録しました: '{}' -> '{}' ({})", term, translation, path.display());
        }

        Commands::Config { set_materials_col, show } => {
            let mut config = config;

            if let Some(column) = set_materials_col {
                config.set_materials_column(column)?;
                println!("✔ 素材列を{} ({}列)に設定しました", column, column_letter(column));
            }

            if show || set_materials_col.is_none() {
                println!("設定:");
                println!("  学習済み辞書: {}", config.learned_translations_path.display());
                println!("  洗濯表示辞書: {}", config.care_labels_path.display());
                println!("  素材列: {} ({}列)", config.materials_column, column_letter(config.materials_column));
                println!("  プレビュー行数: {}", config.preview_rows);
                println!("  学習モード: {}", if config.learn { "有効" } else { "無効" });
                if let Ok(path) = Config::config_path() {
                    println!("  設定ファイル: {}", path.display());
                }
            }
        }
    }

    Ok(())
}
