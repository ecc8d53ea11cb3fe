//! 未登録語の学習
//!
//! 未登録語の訳語を外部（対話入力など）から受け取り、辞書の新しい
//! スナップショットを作る。訳語の取得と保存はトレイト越しに行い、
//! このモジュール自体は入出力を持たない。

use crate::dictionary::TermDictionary;
use crate::error::Result;
use std::collections::BTreeSet;

/// 訳語の問い合わせ結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// この訳語で登録
    Translate(String),
    /// この語はスキップ
    Skip,
    /// 残りの問い合わせを打ち切る
    Stop,
}

/// 未登録語の訳語を提供する
pub trait TermResolver {
    fn resolve(&mut self, term: &str) -> Result<Resolution>;
}

/// 学習した訳語の保存先
pub trait LearnedTermSink {
    fn append(&mut self, term: &str, translation: &str) -> Result<()>;
}

/// 学習結果
#[derive(Debug, Clone)]
pub struct LearningOutcome {
    /// 学習後の辞書
    pub dictionary: TermDictionary,
    /// 登録した (原語, 訳語)
    pub learned: Vec<(String, String)>,
    /// スキップした語
    pub skipped: Vec<String>,
}

impl LearningOutcome {
    pub fn has_learned(&self) -> bool {
        !self.learned.is_empty()
    }
}

/// 未登録語を1件ずつ問い合わせて学習する
///
/// 語は辞書順に問い合わせる。登録された訳語はその都度保存先に追記する。
/// 追記に失敗した場合は警告のみで、学習後の辞書には含める。
pub fn learn_terms<R, S>(
    dictionary: &TermDictionary,
    unknown_terms: &BTreeSet<String>,
    resolver: &mut R,
    sink: &mut S,
) -> Result<LearningOutcome>
where
    R: TermResolver + ?Sized,
    S: LearnedTermSink + ?Sized,
{
    let mut current = dictionary.clone();
    let mut learned = Vec::new();
    let mut skipped = Vec::new();

    for (idx, term) in unknown_terms.iter().enumerate() {
        match resolver.resolve(term)? {
            Resolution::Translate(translation) => {
                let translation = translation.trim().to_string();
                if translation.is_empty() {
                    skipped.push(term.clone());
                    continue;
                }
                current = current.with_entry(term, &translation)?;
                // 保存に失敗しても今回の実行では学習結果を使う
                if let Err(e) = sink.append(term, &translation) {
                    log::warn!("学習結果を保存できません: '{}': {}", term, e);
                }
                log::info!("学習: '{}' -> '{}'", term, translation);
                learned.push((term.clone(), translation));
            }
            Resolution::Skip => skipped.push(term.clone()),
            Resolution::Stop => {
                skipped.extend(unknown_terms.iter().skip(idx).cloned());
                break;
            }
        }
    }

    Ok(LearningOutcome {
        dictionary: current,
        learned,
        skipped,
    })
}
