//! 완전 일치 필터 전략
//!
//! 사전의 전역("all/all/all") 항목만 사용해 리터럴 부분 문자열을
//! 고정 토큰으로 치환합니다. 점수도 임계값도 없는 가장 보수적인 모드입니다.

use super::{Filter, FilterResult, MASK_TOKEN};
use crate::dict::Dictionary;

pub struct PerfectMatch {
    words: Vec<String>,
    token: String,
}

impl PerfectMatch {
    pub fn new(dict: &Dictionary) -> Self {
        let words: Vec<String> = dict.universal().map(|e| e.word.clone()).collect();
        log::debug!(
            "완전 일치 필터 구성: 전역 항목 {}개 / 전체 {}개",
            words.len(),
            dict.len()
        );
        Self {
            words,
            token: MASK_TOKEN.to_string(),
        }
    }

    /// 마스크 토큰 교체
    pub fn with_mask_token(mut self, token: &str) -> Self {
        self.token = token.to_string();
        self
    }
}

impl Filter for PerfectMatch {
    fn redact(&self, sentence: &str) -> FilterResult {
        let mut masked = sentence.to_string();
        let mut changed = false;
        for word in &self.words {
            if masked.contains(word.as_str()) {
                masked = masked.replace(word.as_str(), &self.token);
                changed = true;
            }
        }
        FilterResult { masked, changed }
    }
}
