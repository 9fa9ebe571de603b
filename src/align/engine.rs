//! 국소 정렬 스캔
//!
//! 단어 전체를 소비한 마지막 행을 오른쪽부터 훑어 임계값을 넘는 열마다
//! 역추적으로 시작 위치를 찾고, 겹치지 않는 매치 구간을 만들어냅니다.
//! 결과는 즉시 계산된 값으로 반환합니다. 배경 작업이나 채널이 없으므로
//! 소비자가 끝까지 읽지 않아도 새는 자원이 없습니다.

use super::matrix::{Cell, ScoreMatrix, Step};
use crate::score::{ConfusableTable, SCORE_MATCH};

/// 임계값을 넘은 매치 구간 (정규화된 문장 기준, 양 끝 포함 인덱스)
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSpan {
    /// 시작 코드포인트 인덱스 (포함)
    pub start: usize,
    /// 끝 코드포인트 인덱스 (포함)
    pub end: usize,
    /// 매치된 사전 단어 (정규화된 형태)
    pub word: String,
    /// 만점 (단어 길이 x SCORE_MATCH)
    pub complete_score: i32,
    /// 실제 획득 점수
    pub applied_score: i32,
    /// 획득 점수 / 만점
    pub similarity: f32,
}

/// 비교 한 번당 정확히 하나 만들어지는 요약
///
/// 임계값을 넘는 구간이 없어도 마지막 행의 최고 점수를 남겨,
/// 아깝게 걸리지 않은 후보를 순위로 살펴볼 수 있게 합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSummary {
    pub word: String,
    /// 마지막 행에서 관측된 최고 점수
    pub max_row_score: i32,
    pub complete_score: i32,
    pub threshold_score: f32,
}

/// `scan` 한 번의 전체 결과: 겹치지 않는 구간들 + 요약 하나
#[derive(Debug, Clone)]
pub struct AlignmentOutcome {
    /// 위치 오름차순으로 정렬된 매치 구간
    pub spans: Vec<MatchSpan>,
    pub summary: ScanSummary,
}

/// 정규화된 문장과 단어를 정렬해 임계값(`0.0 < threshold <= 1.0`)을 넘는
/// 구간을 모두 찾습니다. 빈 문장/빈 단어는 매치 없음으로 끝납니다.
///
/// 비용은 시간/공간 모두 `O(단어 길이 x 문장 길이)`입니다.
pub fn scan(
    table: &ConfusableTable,
    text: &[char],
    word: &[char],
    threshold: f32,
) -> AlignmentOutcome {
    let n = text.len();
    let m = word.len();

    let mut matrix = ScoreMatrix::new(m, n);
    for t in 1..=m {
        for s in 1..=n {
            let diag = matrix.get(t - 1, s - 1).score + table.score(Some(text[s - 1]), Some(word[t - 1]));
            let up = matrix.get(t - 1, s).score + table.score(None, Some(word[t - 1]));
            let left = matrix.get(t, s - 1).score + table.score(Some(text[s - 1]), None);

            // 동점은 대각 > 위 > 왼쪽 순으로 선택.
            // 음수 셀을 0으로 되돌리지 않는다: 사전의 단어별 임계값이
            // 패턴 전체 기준 정렬 점수에 맞춰 보정되어 있다.
            let cell = if diag >= up && diag >= left {
                Cell {
                    score: diag,
                    step: Step::Diag,
                }
            } else if up >= left {
                Cell {
                    score: up,
                    step: Step::Up,
                }
            } else {
                Cell {
                    score: left,
                    step: Step::Left,
                }
            };
            matrix.set(t, s, cell);
        }
    }

    let complete_score = m as i32 * SCORE_MATCH;
    let threshold_score = complete_score as f32 * threshold;

    let mut max_row_score = 0;
    for s in 0..=n {
        max_row_score = max_row_score.max(matrix.get(m, s).score);
    }

    // 오른쪽부터 훑으면서 구간을 떼어내고, 구간 시작 지점에서 이어서 훑는다.
    // 한 비교에서 나온 구간들이 절대 겹치지 않는 이유가 이 재개 규칙이다.
    let mut spans = Vec::new();
    let word_str: String = word.iter().collect();
    let mut s = n;
    while s > 0 {
        let cell = matrix.get(m, s);
        if (cell.score as f32) > threshold_score {
            let start = traceback(&matrix, m, s);
            spans.push(MatchSpan {
                start,
                end: s - 1,
                word: word_str.clone(),
                complete_score,
                applied_score: cell.score,
                similarity: cell.score as f32 / complete_score as f32,
            });
            if start == 0 {
                break;
            }
            s = start;
        }
        s -= 1;
    }
    spans.reverse();

    AlignmentOutcome {
        spans,
        summary: ScanSummary {
            word: word_str,
            max_row_score,
            complete_score,
            threshold_score,
        },
    }
}

/// `(t, s)`에서 `Step::End` 셀까지 역추적해 구간 시작 열을 반환
fn traceback(matrix: &ScoreMatrix, mut t: usize, mut s: usize) -> usize {
    loop {
        match matrix.get(t, s).step {
            Step::End => return s,
            Step::Diag => {
                t -= 1;
                s -= 1;
            }
            Step::Up => t -= 1,
            Step::Left => s -= 1,
        }
    }
}
