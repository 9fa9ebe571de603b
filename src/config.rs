//! 실행 설정 로드 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// ngfilter 실행 설정
///
/// 설정이라 부를 만한 것은 마스킹 표기와 동시성 상한뿐입니다.
/// 사전 내용은 설정이 아니라 입력입니다.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NgFilterConfig {
    /// 정렬/트라이 전략이 코드포인트마다 덮어쓰는 마스크 문자
    #[serde(default = "default_mask_char")]
    pub mask_char: char,
    /// 완전 일치 전략의 고정 마스크 토큰
    #[serde(default = "default_mask_token")]
    pub mask_token: String,
    /// 배치 처리 시 동시에 떠 있는 문장 수 상한
    #[serde(default = "default_max_in_flight")]
    pub max_in_flight: usize,
}

fn default_mask_char() -> char {
    '*'
}

fn default_mask_token() -> String {
    "***".to_string()
}

fn default_max_in_flight() -> usize {
    crate::filter::DEFAULT_MAX_IN_FLIGHT
}

impl Default for NgFilterConfig {
    fn default() -> Self {
        Self {
            mask_char: default_mask_char(),
            mask_token: default_mask_token(),
            max_in_flight: default_max_in_flight(),
        }
    }
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config<P: AsRef<Path>>(path: P) -> NgFilterConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파싱 실패, 기본값 사용: {}", e);
            NgFilterConfig::default()
        }),
        Err(_) => NgFilterConfig::default(),
    }
}
