//! 국소 정렬 필터 전략

use super::{Filter, FilterResult, MASK_CHAR};
use crate::align;
use crate::dict::Dictionary;
use crate::normalize;
use crate::score::ConfusableTable;

/// 정규화된 단어와 임계값 비율 목록을 준비 (정렬 계열 전략 공용)
pub(crate) fn normalized_words(dict: &Dictionary) -> Vec<(Vec<char>, f32)> {
    dict.entries()
        .iter()
        .map(|e| {
            (
                normalize::decompose(&e.word),
                f32::from(e.threshold) / 100.0,
            )
        })
        .collect()
}

/// 단어 길이에 따라 임계값을 낮추는 운영 보정 곡선
///
/// 긴 단어일수록 치환 하나당 유사도 하락 폭이 작으므로 임계값도 함께
/// 내려갑니다. 극단적으로 긴 단어에서 0 이하로 떨어지지 않게 하한을 둡니다.
pub(crate) fn adaptive_threshold(word_len: usize) -> f32 {
    (-0.005 * word_len as f32 + 0.95).clamp(0.05, 1.0)
}

/// 사전의 단어마다 국소 정렬을 돌려 임계값을 넘는 구간을 전부 마스킹하는 전략
///
/// 비교 한 번의 비용이 `O(단어 길이 x 문장 길이)`이므로 사전이 크면
/// 배치 코디네이터로 문장 단위 병렬화를 거는 것을 전제로 합니다.
pub struct LocalAlignment {
    words: Vec<(Vec<char>, f32)>,
    table: ConfusableTable,
    mask: char,
}

impl LocalAlignment {
    /// 사전 항목별 설정 임계값을 그대로 사용
    pub fn new(dict: &Dictionary, table: ConfusableTable) -> Self {
        let words = normalized_words(dict);
        log::debug!("정렬 필터 구성: 단어 {}개", words.len());
        Self {
            words,
            table,
            mask: MASK_CHAR,
        }
    }

    /// 항목 임계값 대신 단어 길이 보정 곡선을 사용
    pub fn with_adaptive_threshold(dict: &Dictionary, table: ConfusableTable) -> Self {
        let mut strategy = Self::new(dict, table);
        for (word, threshold) in &mut strategy.words {
            *threshold = adaptive_threshold(word.len());
        }
        strategy
    }

    /// 마스크 문자 교체
    pub fn with_mask_char(mut self, mask: char) -> Self {
        self.mask = mask;
        self
    }
}

impl Filter for LocalAlignment {
    fn redact(&self, sentence: &str) -> FilterResult {
        let origin = normalize::decompose(sentence);
        let mut out = origin.clone();
        let mut changed = false;

        for (word, threshold) in &self.words {
            let outcome = align::scan(&self.table, &origin, word, *threshold);
            for span in &outcome.spans {
                changed = true;
                for c in &mut out[span.start..=span.end] {
                    *c = self.mask;
                }
            }
        }

        FilterResult {
            masked: normalize::recompose(&out),
            changed,
        }
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
    fn test_masks_exact_word() {
        let filter = LocalAlignment::new(&dict(&[("bad", 80)]), ConfusableTable::new());
        let result = filter.redact("this is bad");
        assert_eq!(result.masked, "this is ***");
        assert!(result.changed);
    }

    #[test]
    fn test_clean_sentence_unchanged() {
        let filter = LocalAlignment::new(&dict(&[("bad", 80)]), ConfusableTable::new());
        let result = filter.redact("this is fine");
        assert_eq!(result.masked, "this is fine");
        assert!(!result.changed);
    }

    #[test]
    fn test_space_injected_word_is_masked() {
        let filter = LocalAlignment::new(&dict(&[("bad", 90)]), ConfusableTable::new());
        let result = filter.redact("so b a d here");
        assert!(result.changed);
        assert!(!result.masked.contains("b a d"));
    }

    #[test]
    fn test_hangul_word_with_confusable_jamo() {
        // 사전 단어 "가방", 문장은 초성을 ᄏ으로 치환한 "카방"
        // 자모 5개 만점 25, 유사 치환 하나로 24 -> 임계값 90%(22.5점) 초과
        let filter =
            LocalAlignment::new(&dict(&[("가방", 90)]), ConfusableTable::korean_defaults());
        let result = filter.redact("내 카방 어디");
        assert!(result.changed);
        assert!(!result.masked.contains("카방"));
    }

    #[test]
    fn test_masking_is_idempotent() {
        let filter = LocalAlignment::new(&dict(&[("bad", 80)]), ConfusableTable::new());
        let once = filter.redact("this is bad");
        let twice = filter.redact(&once.masked);
        assert_eq!(once.masked, twice.masked);
    }

    #[test]
    fn test_multiple_words_union() {
        // 단어 바로 뒤의 공백은 비용이 없어 구간에 흡수된다
        let filter =
            LocalAlignment::new(&dict(&[("bad", 90), ("ugly", 90)]), ConfusableTable::new());
        let result = filter.redact("bad and ugly");
        assert_eq!(result.masked, "****and ****");
        assert!(result.changed);
    }

    #[test]
    fn test_empty_sentence() {
        let filter = LocalAlignment::new(&dict(&[("bad", 80)]), ConfusableTable::new());
        let result = filter.redact("");
        assert_eq!(result.masked, "");
        assert!(!result.changed);
    }

    #[test]
    fn test_adaptive_threshold_curve() {
        // 운영 곡선: 길이 2 -> 0.94, 길이 10 -> 0.90
        assert!((adaptive_threshold(2) - 0.94).abs() < 1e-6);
        assert!((adaptive_threshold(10) - 0.90).abs() < 1e-6);
        // 하한
        assert!(adaptive_threshold(1000) >= 0.05);
    }

    #[test]
    fn test_adaptive_constructor_masks_exact_match() {
        let filter =
            LocalAlignment::with_adaptive_threshold(&dict(&[("나쁜말", 90)]), ConfusableTable::korean_defaults());
        let result = filter.redact("정말 나쁜말 이다");
        assert!(result.changed);
        assert!(!result.masked.contains("나쁜말"));
    }
}
