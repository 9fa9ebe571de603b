//! 국소 정렬 엔진
//!
//! 문장과 사전 단어 하나를 Smith-Waterman 변형으로 정렬해,
//! 임계값을 넘는 구간을 전부 찾아냅니다. 공백 삽입·유사 자모 치환으로
//! 변형된 단어도 부분 점수로 잡아냅니다.
//!
//! # 사용 예시
//!
//! ```
//! use ngfilter::align::scan;
//! use ngfilter::score::ConfusableTable;
//!
//! let table = ConfusableTable::korean_defaults();
//! let text: Vec<char> = "this is bad".chars().collect();
//! let word: Vec<char> = "bad".chars().collect();
//!
//! let outcome = scan(&table, &text, &word, 0.8);
//! assert_eq!(outcome.spans.len(), 1);
//! assert_eq!((outcome.spans[0].start, outcome.spans[0].end), (8, 10));
//! ```

mod engine;
mod matrix;

pub use engine::{scan, AlignmentOutcome, MatchSpan, ScanSummary};
pub use matrix::{Cell, ScoreMatrix, Step};
