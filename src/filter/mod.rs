//! 필터 전략
//!
//! 전략 하나가 "문장 하나를 받아 마스킹된 문장을 돌려주는" 역할을 맡습니다.
//! 모든 전략은 구성 이후 불변이므로 `Sync`이며, 배치 코디네이터가
//! 스레드 간에 안전하게 공유합니다.
//!
//! - [`PerfectMatch`]: 전역 항목의 리터럴 부분 문자열 치환
//! - [`LocalAlignment`]: 단어별 임계값으로 국소 정렬 매칭
//! - [`LocalAlignmentTrie`]: 트라이 기반 잡음 허용 정확 매칭
//! - [`LocalAlignmentDebug`]: 정렬 매칭 + 단어별 유사도 보고

mod batch;
mod debug;
mod local;
mod perfect;
mod trie_scan;

pub use batch::{redact_batch, BatchError, DEFAULT_MAX_IN_FLIGHT};
pub use debug::{LocalAlignmentDebug, WordSimilarity};
pub use local::LocalAlignment;
pub use perfect::PerfectMatch;
pub use trie_scan::LocalAlignmentTrie;

/// 정렬/트라이 전략의 기본 마스크 문자
pub const MASK_CHAR: char = '*';
/// 완전 일치 전략의 고정 마스크 토큰
pub const MASK_TOKEN: &str = "***";

/// 문장 하나를 처리한 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult {
    /// 마스킹된 문장 (마스킹 구간 밖은 원문 표시 형태 유지)
    pub masked: String,
    /// 하나라도 마스킹되었는지 여부
    pub changed: bool,
}

/// 문장 단위 마스킹 전략
pub trait Filter {
    fn redact(&self, sentence: &str) -> FilterResult;
}
