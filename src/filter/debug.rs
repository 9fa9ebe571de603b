//! 진단용 국소 정렬 필터
//!
//! 마스킹 결과에 더해, 사전 단어마다 "얼마나 가까웠는지"를 돌려줍니다.
//! 임계값을 넘는 단어가 하나도 없을 때 가장 아까운 후보를 순위로 보여주는
//! 임계값 튜닝 용도입니다. 보고서는 호출마다 새 값으로 만들어지므로
//! 누적 상태가 없고, 동시 호출에도 안전합니다.

use super::local::normalized_words;
use super::{Filter, FilterResult, MASK_CHAR};
use crate::align;
use crate::dict::Dictionary;
use crate::normalize;
use crate::score::ConfusableTable;
use std::cmp::Ordering;

/// 단어 하나의 근접도: 마지막 행 최고 점수 / 만점
#[derive(Debug, Clone, PartialEq)]
pub struct WordSimilarity {
    pub word: String,
    pub similarity: f32,
}

/// 보고서를 함께 내는 국소 정렬 전략
pub struct LocalAlignmentDebug {
    words: Vec<(Vec<char>, f32)>,
    table: ConfusableTable,
    mask: char,
}

impl LocalAlignmentDebug {
    pub fn new(dict: &Dictionary, table: ConfusableTable) -> Self {
        Self {
            words: normalized_words(dict),
            table,
            mask: MASK_CHAR,
        }
    }

    /// 마스킹 결과와 단어별 근접도 보고서 (유사도 내림차순)
    pub fn redact_with_report(&self, sentence: &str) -> (FilterResult, Vec<WordSimilarity>) {
        let origin = normalize::decompose(sentence);
        let mut out = origin.clone();
        let mut changed = false;
        let mut report = Vec::with_capacity(self.words.len());

        for (word, threshold) in &self.words {
            let outcome = align::scan(&self.table, &origin, word, *threshold);
            for span in &outcome.spans {
                changed = true;
                for c in &mut out[span.start..=span.end] {
                    *c = self.mask;
                }
            }
            let summary = outcome.summary;
            let similarity = if summary.complete_score > 0 {
                summary.max_row_score as f32 / summary.complete_score as f32
            } else {
                0.0
            };
            report.push(WordSimilarity {
                word: summary.word,
                similarity,
            });
        }

        report.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
        });

        (
            FilterResult {
                masked: normalize::recompose(&out),
                changed,
            },
            report,
        )
    }
}

impl Filter for LocalAlignmentDebug {
    fn redact(&self, sentence: &str) -> FilterResult {
        self.redact_with_report(sentence).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::DictionaryEntry;

    fn dict(rows: &[(&str, u8)]) -> Dictionary {
        Dictionary::new(
            rows.iter()
                .map(|(w, t)| DictionaryEntry {
                    word: w.to_string(),
                    lang: "all".to_string(),
                    country: "all".to_string(),
                    usage: "all".to_string(),
                    threshold: *t,
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_report_one_entry_per_word() {
        let filter = LocalAlignmentDebug::new(&dict(&[("bad", 80), ("zzz", 80)]), ConfusableTable::new());
        let (_, report) = filter.redact_with_report("this is bad");
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn test_report_sorted_descending() {
        let filter = LocalAlignmentDebug::new(&dict(&[("zzz", 80), ("bad", 80)]), ConfusableTable::new());
        let (result, report) = filter.redact_with_report("this is bad");

        assert!(result.changed);
        // 가장 가까운 단어가 맨 앞
        assert_eq!(report[0].word, "bad");
        assert!((report[0].similarity - 1.0).abs() < f32::EPSILON);
        assert!(report[0].similarity >= report[1].similarity);
    }

    #[test]
    fn test_near_miss_still_reported() {
        // 임계값을 못 넘어도 보고서에는 근접도가 남는다
        let filter = LocalAlignmentDebug::new(&dict(&[("cat", 90)]), ConfusableTable::new());
        let (result, report) = filter.redact_with_report("cot");

        assert!(!result.changed);
        assert_eq!(result.masked, "cot");
        assert!((report[0].similarity - 8.0 / 15.0).abs() < 1e-6);
    }

    #[test]
    fn test_trait_redact_matches_report_result() {
        let filter = LocalAlignmentDebug::new(&dict(&[("bad", 80)]), ConfusableTable::new());
        let via_trait = filter.redact("this is bad");
        let (via_report, _) = filter.redact_with_report("this is bad");
        assert_eq!(via_trait, via_report);
    }
}
