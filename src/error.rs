use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslatorError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("列番号が不正です: {0}（1以上を指定してください）")]
    InvalidColumn(String),

    #[error("未対応のファイル形式: {0}")]
    UnsupportedFormat(String),

    #[error("CSV読み書きエラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("スプレッドシート読み込みエラー: {0}")]
    SpreadsheetRead(String),

    #[error("Excel生成エラー: {0}")]
    SpreadsheetWrite(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] dim_translator_common::Error),
}

pub type Result<T> = std::result::Result<T, TranslatorError>;
