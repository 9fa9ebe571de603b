//! 배치 코디네이터
//!
//! 문장 목록을 제한된 개수의 워커 스레드로 나눠 처리합니다. 동시에 떠 있는
//! 문장 수가 상한을 넘지 않아, 문장마다 할당되는 `O(m x n)` 정렬 행렬의
//! 최대 메모리가 제한됩니다. 호출은 동기식입니다: 모든 문장이 끝날 때까지
//! 막혔다가, 완료 순서와 무관하게 입력 순서대로 결과를 돌려줍니다.
//!
//! 워커가 공유하는 것은 읽기 전용 필터 전략뿐이므로 잠금이 없습니다.
//! 타임아웃/재시도/취소는 없습니다. 스레드를 만들지 못하면 문장을
//! 조용히 버리는 대신 배치 전체가 실패합니다.

use super::{Filter, FilterResult};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;

/// 기본 동시 문장 상한
pub const DEFAULT_MAX_IN_FLIGHT: usize = 8;

/// 배치 실행 에러
#[derive(Debug)]
pub enum BatchError {
    /// 워커 스레드 생성 실패
    Spawn(std::io::Error),
    /// 일부 문장의 결과가 돌아오지 않음
    Incomplete,
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::Spawn(e) => write!(f, "워커 스레드 생성 실패: {}", e),
            BatchError::Incomplete => write!(f, "일부 문장이 처리되지 않음"),
        }
    }
}

impl std::error::Error for BatchError {}

impl From<std::io::Error> for BatchError {
    fn from(e: std::io::Error) -> Self {
        BatchError::Spawn(e)
    }
}

/// 문장 목록을 병렬로 마스킹합니다.
///
/// `max_in_flight`개의 워커가 원자 카운터에서 다음 문장 인덱스를 뽑아
/// 처리하고, `(인덱스, 결과)`를 채널로 돌려보냅니다. 반환 벡터의
/// `i`번째 원소는 항상 `sentences[i]`의 결과입니다.
pub fn redact_batch<F>(
    filter: &F,
    sentences: &[String],
    max_in_flight: usize,
) -> Result<Vec<FilterResult>, BatchError>
where
    F: Filter + Sync + ?Sized,
{
    if sentences.is_empty() {
        return Ok(Vec::new());
    }

    let workers = max_in_flight.max(1).min(sentences.len());
    log::debug!("배치 시작: 문장 {}개, 워커 {}개", sentences.len(), workers);

    let next = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<(usize, FilterResult)>();

    thread::scope(|scope| {
        for _ in 0..workers {
            let tx = tx.clone();
            let next = &next;
            thread::Builder::new()
                .name("ngfilter-worker".to_string())
                .spawn_scoped(scope, move || loop {
                    let idx = next.fetch_add(1, Ordering::Relaxed);
                    if idx >= sentences.len() {
                        break;
                    }
                    let result = filter.redact(&sentences[idx]);
                    if tx.send((idx, result)).is_err() {
                        break;
                    }
                })?;
        }
        // 수집 측이 채널 종료를 감지할 수 있도록 원본 송신단을 닫는다
        drop(tx);

        let mut slots: Vec<Option<FilterResult>> = vec![None; sentences.len()];
        for (idx, result) in rx {
            slots[idx] = Some(result);
        }

        slots
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or(BatchError::Incomplete)
    })
}
