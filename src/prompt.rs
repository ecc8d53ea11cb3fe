//! 対話式の訳語入力
//!
//! 未登録語を1件ずつ表示し、端末から訳語を受け取る。

use dim_translator_common::{Resolution, TermResolver};
use dialoguer::Input;
use std::collections::BTreeSet;

/// 端末から訳語を入力する
#[derive(Debug, Default)]
pub struct TerminalResolver;

impl TerminalResolver {
    pub fn new() -> Self {
        Self
    }
}

impl TermResolver for TerminalResolver {
    fn resolve(&mut self, term: &str) -> dim_translator_common::Result<Resolution> {
        let input: String = Input::new()
            .with_prompt(format!("'{}' →", term))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| dim_translator_common::Error::Learning(e.to_string()))?;

        let resolution = parse_answer(&input);
        match &resolution {
            Resolution::Translate(translation) => println!("  ✓ {} → {}", term, translation),
            Resolution::Skip => println!("  → スキップ: {}", term),
            Resolution::Stop => println!("  → 残りの入力を終了します"),
        }
        Ok(resolution)
    }
}

/// 入力文字列を解釈
///
/// 空 / `s` / `skip` はスキップ、`q` は終了、それ以外は訳語。
pub fn parse_answer(input: &str) -> Resolution {
    let trimmed = input.trim();
    match trimmed {
        "" | "s" | "S" => Resolution::Skip,
        _ if trimmed.eq_ignore_ascii_case("skip") => Resolution::Skip,
        "q" | "Q" => Resolution::Stop,
        _ => Resolution::Translate(trimmed.to_string()),
    }
}

/// 未登録語の一覧を表示
pub fn print_unknown_terms(terms: &BTreeSet<String>) {
    println!("\n🔍 未登録の用語が{}件見つかりました:", terms.len());
    for term in terms {
        println!("  - {}", term);
    }
    println!("\n📚 訳語を入力してください（Enter/s:スキップ q:終了）");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer(""), Resolution::Skip);
        assert_eq!(parse_answer("  s "), Resolution::Skip);
        assert_eq!(parse_answer("SKIP"), Resolution::Skip);
        assert_eq!(parse_answer("q"), Resolution::Stop);
        assert_eq!(
            parse_answer(" Velour "),
            Resolution::Translate("Velour".to_string())
        );
    }
}
