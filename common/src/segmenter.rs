//! 素材セルの分割
//!
//! 1つのセルに改行区切りで並んだ「素材」「洗濯表示（※行）」「原産国」を分ける。
//!
//! - 最初の※を含む行より前 → 素材
//! - ※を含む行以降で、※で始まらない空でない行 → 原産国（最後の1行を採用）
//! - それ以外（※行・空行・採用されなかった原産国候補） → 洗濯表示

use crate::types::SegmentedContent;

/// 洗濯表示の行頭記号
pub const CARE_MARKER: char = '※';

/// 素材セルの分割器
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentSegmenter;

impl ContentSegmenter {
    pub fn new() -> Self {
        Self
    }

    /// セルを素材・洗濯表示・原産国に分割
    pub fn segment(&self, cell: &str) -> SegmentedContent {
        let content = cell.trim();
        if content.is_empty() {
            return SegmentedContent::default();
        }

        let lines: Vec<&str> = content.lines().collect();

        let first_marker = match lines.iter().position(|line| line.contains(CARE_MARKER)) {
            Some(idx) => idx,
            None => {
                return SegmentedContent {
                    materials: content.to_string(),
                    ..Default::default()
                }
            }
        };

        let materials = lines[..first_marker].join("\n").trim().to_string();
        let tail = &lines[first_marker..];

        // 最後の非※行が原産国、それより前の非※行は洗濯表示に残る
        let country_idx = tail.iter().rposition(|line| is_country_line(line));
        let country = country_idx
            .map(|idx| tail[idx].trim().to_string())
            .unwrap_or_default();

        let care_lines: Vec<&str> = tail
            .iter()
            .enumerate()
            .filter(|(idx, _)| Some(*idx) != country_idx)
            .map(|(_, line)| *line)
            .collect();
        let care_instructions = care_lines.join("\n").trim().to_string();

        SegmentedContent {
            materials,
            care_instructions,
            country,
        }
    }
}

/// 原産国の候補行（空でなく、※で始まらない）
fn is_country_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.starts_with(CARE_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(cell: &str) -> SegmentedContent {
        ContentSegmenter::new().segment(cell)
    }

    #[test]
    fn test_basic_split() {
        let s = segment("コットン100%\n※ドライクリーニング\n日本製");
        assert_eq!(s.materials, "コットン100%");
        assert_eq!(s.care_instructions, "※ドライクリーニング");
        assert_eq!(s.country, "日本製");
    }

    #[test]
    fn test_no_marker() {
        let s = segment("コットン100%");
        assert_eq!(s.materials, "コットン100%");
        assert_eq!(s.care_instructions, "");
        assert_eq!(s.country, "");
    }

    #[test]
    fn test_no_marker_multiline_is_trimmed() {
        let s = segment("\n表生地：綿100%\n裏生地：ポリエステル100%\n");
        assert_eq!(s.materials, "表生地：綿100%\n裏生地：ポリエステル100%");
        assert!(s.care_instructions.is_empty());
    }

    #[test]
    fn test_empty_cell() {
        assert_eq!(segment(""), SegmentedContent::default());
        assert_eq!(segment("  \n "), SegmentedContent::default());
    }

    #[test]
    fn test_last_country_line_wins() {
        let s = segment("綿100%\n※手洗い\n中国製\n※陰干し\n日本製");
        assert_eq!(s.materials, "綿100%");
        assert_eq!(s.country, "日本製");
        assert_eq!(s.care_instructions, "※手洗い\n中国製\n※陰干し");
    }

    #[test]
    fn test_marker_on_first_line() {
        let s = segment("※手洗い\n※漂白不可\nベトナム製");
        assert_eq!(s.materials, "");
        assert_eq!(s.care_instructions, "※手洗い\n※漂白不可");
        assert_eq!(s.country, "ベトナム製");
    }

    #[test]
    fn test_marker_without_country() {
        let s = segment("綿100%\n※手洗い");
        assert_eq!(s.care_instructions, "※手洗い");
        assert_eq!(s.country, "");
    }

    #[test]
    fn test_marker_in_middle_of_line() {
        // 行頭でなくても※を含めば洗濯表示の開始行になる
        let s = segment("綿100%\n洗濯※ネット使用\n日本製");
        assert_eq!(s.materials, "綿100%");
        assert_eq!(s.country, "日本製");
        assert_eq!(s.care_instructions, "洗濯※ネット使用");
    }

    #[test]
    fn test_blank_lines_stay_in_care() {
        let s = segment("綿100%\n※手洗い\n\n※陰干し\n日本製");
        assert_eq!(s.care_instructions, "※手洗い\n\n※陰干し");
        assert_eq!(s.country, "日本製");
    }

    #[test]
    fn test_crlf_lines() {
        let s = segment("綿100%\r\n※手洗い\r\n日本製");
        assert_eq!(s.materials, "綿100%");
        assert_eq!(s.care_instructions, "※手洗い");
        assert_eq!(s.country, "日本製");
    }
}
