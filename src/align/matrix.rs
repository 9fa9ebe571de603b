//! 정렬 점수 행렬
//!
//! `(단어 길이 + 1) x (문장 길이 + 1)` 크기의 셀 격자를 평탄한 벡터 하나로
//! 보관합니다. 행렬은 비교 한 번마다 새로 만들고 비교가 끝나면 버립니다.
//! 비교 간에 공유하지 않습니다.

/// 셀이 기록하는 직전 이동 방향 (역추적용)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    /// 시작 셀 (0행/0열) — 역추적 종료 지점
    #[default]
    End,
    /// 대각 이동: 문장 문자와 단어 문자를 함께 소비
    Diag,
    /// 위 이동: 단어 문자를 갭에 대응 (문장 쪽 누락)
    Up,
    /// 왼쪽 이동: 문장 문자를 갭에 대응 (잡음 삽입)
    Left,
}

/// 행렬 셀: 누적 점수와 직전 이동
#[derive(Debug, Clone, Copy, Default)]
pub struct Cell {
    pub score: i32,
    pub step: Step,
}

/// 국소 정렬 점수 행렬
///
/// 행 `t`는 단어 접두사 길이, 열 `s`는 문장 접두사 길이에 대응합니다.
/// 0행과 0열은 점수 0, `Step::End`로 초기화된 채 유지됩니다.
#[derive(Debug)]
pub struct ScoreMatrix {
    cols: usize,
    cells: Vec<Cell>,
}

impl ScoreMatrix {
    /// `(rows + 1) x (cols + 1)` 행렬 생성 (rows = 단어 길이, cols = 문장 길이)
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols: cols + 1,
            cells: vec![Cell::default(); (rows + 1) * (cols + 1)],
        }
    }

    pub fn get(&self, t: usize, s: usize) -> Cell {
        self.cells[t * self.cols + s]
    }

    pub fn set(&mut self, t: usize, s: usize, cell: Cell) {
        self.cells[t * self.cols + s] = cell;
    }

    /// 마지막 행(전체 단어를 소비한 행)의 열 개수
    pub fn cols(&self) -> usize {
        self.cols
    }
}
