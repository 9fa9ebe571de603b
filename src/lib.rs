//! 퍼지 NG 워드 탐지/마스킹 엔진
//!
//! 공백 끼워넣기, 구두점 삽입, 유사 자모 치환으로 변형된 금칙어를
//! 찾아 마스킹합니다. 비교는 전부 NFKD로 분해된 코드포인트 열 위에서
//! 이루어지고, 결과는 NFC로 재조합해 돌려줍니다.
//!
//! # 구성
//!
//! 1. **사전**: 검증된 [`dict::Dictionary`] (단어, 분류, 단어별 임계값)
//! 2. **전략**: [`filter::Filter`] 구현 네 가지
//!    - 완전 일치 / 국소 정렬 / 트라이 / 진단
//! 3. **배치**: [`filter::redact_batch`]로 문장 목록을 제한 동시성으로 처리
//!
//! # 사용 예시
//!
//! ```
//! use ngfilter::dict::{Dictionary, DictionaryEntry};
//! use ngfilter::filter::{Filter, LocalAlignment};
//! use ngfilter::score::ConfusableTable;
//!
//! let dict = Dictionary::new(vec![DictionaryEntry {
//!     word: "bad".to_string(),
//!     lang: "all".to_string(),
//!     country: "all".to_string(),
//!     usage: "all".to_string(),
//!     threshold: 80,
//! }])
//! .unwrap();
//!
//! let filter = LocalAlignment::new(&dict, ConfusableTable::korean_defaults());
//! let result = filter.redact("this is bad");
//! assert_eq!(result.masked, "this is ***");
//! assert!(result.changed);
//! ```

pub mod align;
pub mod config;
pub mod dict;
pub mod filter;
pub mod normalize;
pub mod score;
pub mod trie;

pub use config::{load_config, NgFilterConfig};
pub use dict::{DictError, Dictionary, DictionaryEntry};
pub use filter::{
    redact_batch, BatchError, Filter, FilterResult, LocalAlignment, LocalAlignmentDebug,
    LocalAlignmentTrie, PerfectMatch,
};
pub use score::ConfusableTable;
