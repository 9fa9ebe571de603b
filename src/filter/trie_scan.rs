//! 트라이 기반 잡음 허용 필터 전략
//!
//! 사전 전체를 트라이 한 개에 넣고 문장을 단일 패스로 스캔합니다.
//! 점수/임계값 없는 이진 판정이지만, 내용 문자 사이에 끼어든 구두점과
//! 공백은 건너뛰며 매치합니다. 트라이는 구축 후 읽기 전용이라 동시
//! 스캔 간 공유에 잠금이 필요 없습니다.

use super::{Filter, FilterResult, MASK_CHAR};
use crate::dict::Dictionary;
use crate::normalize;
use crate::trie::Trie;

pub struct LocalAlignmentTrie {
    trie: Trie,
    mask: char,
}

/// 인덱스를 보존하는 1:1 소문자 변환 (다중 코드포인트 소문자는 첫 문자만)
fn lower_one_to_one(chars: &[char]) -> Vec<char> {
    chars
        .iter()
        .map(|&c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

impl LocalAlignmentTrie {
    pub fn new(dict: &Dictionary) -> Self {
        let mut trie = Trie::new();
        for entry in dict.entries() {
            let word = lower_one_to_one(&normalize::decompose(&entry.word));
            trie.insert(&word);
        }
        log::debug!(
            "트라이 필터 구성: 단어 {}개, 노드 {}개",
            dict.len(),
            trie.node_count()
        );
        Self {
            trie,
            mask: MASK_CHAR,
        }
    }

    /// 마스크 문자 교체
    pub fn with_mask_char(mut self, mask: char) -> Self {
        self.mask = mask;
        self
    }
}

impl Filter for LocalAlignmentTrie {
    fn redact(&self, sentence: &str) -> FilterResult {
        let origin = normalize::decompose(sentence);
        let lowered = lower_one_to_one(&origin);

        let spans = self.trie.scan(&lowered);
        let mut out = origin;
        for &(start, end) in &spans {
            for c in &mut out[start..end] {
                *c = self.mask;
            }
        }

        FilterResult {
            masked: normalize::recompose(&out),
            changed: !spans.is_empty(),
        }
    }
}
