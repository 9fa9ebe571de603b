//! 유사 문자 테이블과 쌍별 점수 함수
//!
//! 시각적/음성적으로 혼동되는 자모를 같은 그룹으로 묶어 두고,
//! 정렬 엔진이 문자 쌍을 비교할 때 그룹 일치 여부로 점수를 매깁니다.
//! 테이블은 엔진 생성 시 명시적으로 주입하며, 배포 환경에서 JSON으로
//! 확장할 수 있습니다.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 완전 일치 점수
pub const SCORE_MATCH: i32 = 5;
/// 유사 문자 (같은 혼동 그룹) 점수
pub const SCORE_SIMILAR: i32 = 4;
/// 공백 관련 점수 — 삽입/삭제된 공백은 비용이 없어 공백 끼워넣기 우회를 무력화
pub const SCORE_SPACE: i32 = 0;
/// 불일치 점수 (갭 포함)
pub const SCORE_MISMATCH: i32 = -2;

/// 혼동 문자 테이블: 코드포인트 -> 그룹 id
///
/// 테이블에 없는 코드포인트는 어떤 그룹에도 속하지 않습니다.
/// 생성 이후 변경하지 않는 것을 전제로 여러 스레드가 공유합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfusableTable {
    groups: HashMap<char, u32>,
}

impl ConfusableTable {
    /// 빈 테이블 생성 (그룹 없음 -> 완전 일치와 공백 규칙만 동작)
    pub fn new() -> Self {
        Self {
            groups: HashMap::new(),
        }
    }

    /// 운영 환경에서 쓰이는 한글 자모 기본 테이블
    ///
    /// 분해된 첫가끝 자모 기준입니다. 그룹 번호는 운영 테이블 그대로입니다.
    pub fn korean_defaults() -> Self {
        let mut table = Self::new();
        // ㄱ 계열 초성
        table.add_group(1, &['\u{1100}', '\u{1101}', '\u{110F}']); // ᄀ ᄁ ᄏ
        // ㅅ 계열 초성
        table.add_group(4, &['\u{1109}', '\u{110A}']); // ᄉ ᄊ
        // ㅂ 계열 초성
        table.add_group(5, &['\u{1107}', '\u{1111}']); // ᄇ ᄑ
        // 종성 ㄵ / ㄷ
        table.add_group(6, &['\u{11AC}', '\u{11AE}']);
        table
    }

    /// 그룹 목록에서 테이블 구성 (그룹 id는 순번)
    pub fn from_groups(groups: &[&[char]]) -> Self {
        let mut table = Self::new();
        for (id, members) in groups.iter().enumerate() {
            table.add_group(id as u32 + 1, members);
        }
        table
    }

    /// 그룹 추가 (이미 등록된 코드포인트는 새 그룹으로 덮어씀)
    pub fn add_group(&mut self, id: u32, members: &[char]) {
        for &c in members {
            self.groups.insert(c, id);
        }
    }

    /// 코드포인트가 속한 그룹 id
    pub fn group_of(&self, c: char) -> Option<u32> {
        self.groups.get(&c).copied()
    }

    /// 문자 쌍 점수. `None`은 갭 자리 표시자입니다.
    ///
    /// - 동일 문자: `SCORE_MATCH`
    /// - 어느 한쪽이 공백 문자: `SCORE_SPACE`
    /// - 같은 혼동 그룹: `SCORE_SIMILAR`
    /// - 그 외 (갭 포함): `SCORE_MISMATCH`
    pub fn score(&self, a: Option<char>, b: Option<char>) -> i32 {
        if let (Some(x), Some(y)) = (a, b) {
            if x == y {
                return SCORE_MATCH;
            }
        }
        if a == Some(' ') || b == Some(' ') {
            return SCORE_SPACE;
        }
        if let (Some(x), Some(y)) = (a, b) {
            if let (Some(g1), Some(g2)) = (self.group_of(x), self.group_of(y)) {
                if g1 == g2 {
                    return SCORE_SIMILAR;
                }
            }
        }
        SCORE_MISMATCH
    }
}
