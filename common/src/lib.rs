//! Dimension Translator Common Library
//!
//! 商品寸法・素材表記の和英変換コア。CLIから利用され、ファイルや端末の入出力は持たない。

pub mod types;
pub mod error;
pub mod dictionary;
pub mod normalizer;
pub mod segmenter;
pub mod care_label;
pub mod unknown;
pub mod learning;
pub mod pipeline;

pub use types::{DictionaryEntry, OutputRecord, SegmentedContent};
pub use error::{Error, Result};
pub use dictionary::{base_entries, sort_by_match_order, TermDictionary};
pub use normalizer::CharacterNormalizer;
pub use segmenter::{ContentSegmenter, CARE_MARKER};
pub use care_label::CareLabelDictionary;
pub use unknown::extract_unknown_terms;
pub use learning::{learn_terms, LearnedTermSink, LearningOutcome, Resolution, TermResolver};
pub use pipeline::{CellTranslationPipeline, PassResult, RowTranslation, DEFAULT_MATERIALS_COLUMN};
