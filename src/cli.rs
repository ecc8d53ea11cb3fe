use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dim-translate")]
#[command(about = "商品寸法・素材表記の和英変換ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// CSV/Excelの寸法・素材を英訳
    Translate {
        /// 入力ファイル（.csv / .xlsx）
        #[arg(required = true)]
        input: PathBuf,

        /// 出力ファイル（デフォルト: 入力ファイル名_translated.csv）
        output: Option<PathBuf>,

        /// 未登録語の学習を行わない
        #[arg(long)]
        no_learn: bool,

        /// 素材列（1始まり、デフォルト: 2 = B列）
        #[arg(long = "materials-col")]
        materials_col: Option<usize>,

        /// 学習済み辞書ファイル（JSON）
        #[arg(long)]
        dictionary: Option<PathBuf>,

        /// 洗濯表示辞書ファイル（JSON）
        #[arg(long)]
        care_labels: Option<PathBuf>,
    },

    /// 辞書の内容を表示
    List {
        /// 洗濯表示辞書を表示
        #[arg(long)]
        care: bool,

        /// 学習済み辞書ファイル（JSON）
        #[arg(long)]
        dictionary: Option<PathBuf>,
    },

    /// 学習済み辞書に用語を追加
    Add {
        /// 日本語の用語
        #[arg(required = true)]
        term: String,

        /// 英訳
        #[arg(required = true)]
        translation: String,

        /// 学習済み辞書ファイル（JSON）
        #[arg(long)]
        dictionary: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 素材列の既定値を設定（1始まり）
        #[arg(long)]
        set_materials_col: Option<usize>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
