//! 文字正規化モジュール
//!
//! 辞書置換後のテキストを英語表記に整える。
//!
//! ## 処理フロー
//! 1. 全角→半角変換（`～` は範囲表記 ` to ` に展開）
//! 2. `)` `,` `:` の直後に空白を挿入
//! 3. 英字と数字の間に空白を挿入（`Cotton100%` → `Cotton 100%`）
//!
//! 数字列そのものは変更しない。正規化済みのテキストに再適用しても変化しない。

use regex::Regex;

/// 全角→半角の変換表
const FULLWIDTH_TABLE: &[(char, &str)] = &[
    // 括弧
    ('（', "("),
    ('）', ")"),
    ('［', "["),
    ('］', "]"),
    ('｛', "{"),
    ('｝', "}"),
    // 記号
    ('：', ":"),
    ('；', ";"),
    ('，', ","),
    ('、', ","),
    ('．', "."),
    ('！', "!"),
    ('？', "?"),
    ('～', " to "),
    ('－', "-"),
    ('＿', "_"),
    ('＝', "="),
    ('＋', "+"),
    ('＊', "*"),
    ('／', "/"),
    ('＼', "\\"),
    ('｜', "|"),
    ('＠', "@"),
    ('＃', "#"),
    ('＄', "$"),
    ('％', "%"),
    ('＾', "^"),
    ('＆', "&"),
];

/// 全角英数字と半角英数字のコードポイント差
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// 直後に空白を入れる記号
const SPACED_PUNCTUATION: &[char] = &[')', ',', ':'];

/// 文字正規化
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterNormalizer;

impl CharacterNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// 3段階の正規化をまとめて適用
    pub fn normalize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let converted = convert_fullwidth(text);
        let spaced = add_spacing_after_punctuation(&converted);
        add_unit_spacing(&spaced)
    }
}

/// 全角文字1文字を半角表記に変換（対象外なら None）
fn halfwidth_of(c: char) -> Option<&'static str> {
    FULLWIDTH_TABLE
        .iter()
        .find(|(fw, _)| *fw == c)
        .map(|(_, hw)| *hw)
}

/// 全角→半角変換
///
/// 全角数字・英字は一定のオフセット（U+FEE0）で変換し、記号は変換表を使う。
pub fn convert_fullwidth(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '０'..='９' | 'Ａ'..='Ｚ' | 'ａ'..='ｚ' => {
                result.push(char::from_u32(c as u32 - FULLWIDTH_OFFSET).unwrap_or(c));
            }
            _ => match halfwidth_of(c) {
                Some(hw) => result.push_str(hw),
                None => result.push(c),
            },
        }
    }
    result
}

/// `)` `,` `:` の直後に空白を1つ挿入
///
/// 既に空白が続く場合と行末では挿入しない。記号ごとに独立して左から右へ一度だけ処理する。
pub fn add_spacing_after_punctuation(text: &str) -> String {
    let mut result = text.to_string();
    for &mark in SPACED_PUNCTUATION {
        result = space_after(&result, mark);
    }
    result
}

fn space_after(text: &str, mark: char) -> String {
    let mut result = String::with_capacity(text.len() + 8);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        result.push(c);
        if c == mark {
            if let Some(next) = chars.peek() {
                if !next.is_whitespace() {
                    result.push(' ');
                }
            }
        }
    }
    result
}

/// 英字と数字の間に空白を挿入
///
/// `数字%` を先に処理し、続いて数字のみのケースを処理する。
pub fn add_unit_spacing(text: &str) -> String {
    lazy_static::lazy_static! {
        static ref PERCENT_RE: Regex = Regex::new(r"([A-Za-z]+)(\d+%)").unwrap();
        static ref NUMBER_RE: Regex = Regex::new(r"([A-Za-z]+)(\d+)").unwrap();
    }

    let result = PERCENT_RE.replace_all(text, "$1 $2");
    NUMBER_RE.replace_all(&result, "$1 $2").to_string()
}
