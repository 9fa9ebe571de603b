//! NG 워드 사전 모델
//!
//! 행 하나가 단어 하나입니다. 필드는 로드 시점에 한 번 검증하고,
//! 이후에는 불변으로 취급합니다. 파일 포맷 파싱은 외부 협력자의 몫이며
//! 여기서는 JSON 배열 로더만 제공합니다.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// 기본 임계값 (%)
fn default_threshold() -> u8 {
    90
}

/// 사전 행 하나
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// 단어 원문 (정규화는 필터 구성 시점에 수행)
    pub word: String,
    pub lang: String,
    pub country: String,
    /// 용도 분류 태그
    pub usage: String,
    /// 매치 임계값 (0~100 퍼센트, 기본 90)
    #[serde(default = "default_threshold")]
    pub threshold: u8,
}

impl DictionaryEntry {
    /// lang/country/usage가 모두 "all"인 전역 항목 여부
    /// (완전 일치 모드는 전역 항목만 사용)
    pub fn is_universal(&self) -> bool {
        self.lang == "all" && self.country == "all" && self.usage == "all"
    }
}

/// 사전 로드/검증 에러
#[derive(Debug)]
pub enum DictError {
    /// 빈 단어 (행 번호)
    EmptyWord(usize),
    /// 임계값 범위 초과 (행 번호, 값)
    InvalidThreshold(usize, u8),
    /// 파일 읽기 실패
    Io(std::io::Error),
    /// JSON 파싱 실패
    Parse(serde_json::Error),
}

impl fmt::Display for DictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictError::EmptyWord(row) => write!(f, "{}번째 행: 빈 단어", row),
            DictError::InvalidThreshold(row, v) => {
                write!(f, "{}번째 행: 임계값 {}은 0~100 범위를 벗어남", row, v)
            }
            DictError::Io(e) => write!(f, "사전 읽기 오류: {}", e),
            DictError::Parse(e) => write!(f, "사전 파싱 오류: {}", e),
        }
    }
}

impl std::error::Error for DictError {}

impl From<std::io::Error> for DictError {
    fn from(e: std::io::Error) -> Self {
        DictError::Io(e)
    }
}

impl From<serde_json::Error> for DictError {
    fn from(e: serde_json::Error) -> Self {
        DictError::Parse(e)
    }
}

/// 검증을 통과한 사전. 구축 후 불변이며 잠금 없이 공유합니다.
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
}

impl Dictionary {
    /// 행 목록을 검증해 사전을 만듭니다. 하나라도 잘못된 행이 있으면
    /// 전체가 실패합니다 (부분 사전으로 동작하지 않음).
    pub fn new(entries: Vec<DictionaryEntry>) -> Result<Self, DictError> {
        for (row, entry) in entries.iter().enumerate() {
            if entry.word.trim().is_empty() {
                return Err(DictError::EmptyWord(row));
            }
            if entry.threshold > 100 {
                return Err(DictError::InvalidThreshold(row, entry.threshold));
            }
        }
        log::debug!("사전 로드 완료: {}개 항목", entries.len());
        Ok(Self { entries })
    }

    /// JSON 배열 파일에서 로드
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self, DictError> {
        let file = File::open(path)?;
        let entries: Vec<DictionaryEntry> = serde_json::from_reader(BufReader::new(file))?;
        Self::new(entries)
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    /// 전역("all/all/all") 항목만 순회
    pub fn universal(&self) -> impl Iterator<Item = &DictionaryEntry> {
        self.entries.iter().filter(|e| e.is_universal())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, threshold: u8) -> DictionaryEntry {
        DictionaryEntry {
            word: word.to_string(),
            lang: "ko".to_string(),
            country: "kr".to_string(),
            usage: "chat".to_string(),
            threshold,
        }
    }

    #[test]
    fn test_valid_dictionary() {
        let dict = Dictionary::new(vec![entry("나쁜말", 90), entry("bad", 80)]).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.entries()[1].threshold, 80);
    }

    #[test]
    fn test_empty_word_rejected() {
        let err = Dictionary::new(vec![entry("ok", 90), entry("  ", 90)]).unwrap_err();
        assert!(matches!(err, DictError::EmptyWord(1)));
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let err = Dictionary::new(vec![entry("ok", 101)]).unwrap_err();
        assert!(matches!(err, DictError::InvalidThreshold(0, 101)));
    }

    #[test]
    fn test_empty_dictionary_is_allowed() {
        let dict = Dictionary::new(Vec::new()).unwrap();
        assert!(dict.is_empty());
    }

    #[test]
    fn test_universal_filter() {
        let mut all = entry("욕설", 90);
        all.lang = "all".to_string();
        all.country = "all".to_string();
        all.usage = "all".to_string();
        let dict = Dictionary::new(vec![all, entry("지역어", 90)]).unwrap();

        let universal: Vec<_> = dict.universal().collect();
        assert_eq!(universal.len(), 1);
        assert_eq!(universal[0].word, "욕설");
    }

    #[test]
    fn test_deserialize_with_default_threshold() {
        // threshold가 없는 행은 기본값 90
        let json = r#"[{"word": "bad", "lang": "en", "country": "us", "usage": "chat"}]"#;
        let entries: Vec<DictionaryEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].threshold, 90);
    }

    #[test]
    fn test_missing_required_field_fails() {
        // word가 없으면 파싱 단계에서 실패 (느슨한 레코드 접근 없음)
        let json = r#"[{"lang": "en", "country": "us", "usage": "chat"}]"#;
        let parsed: Result<Vec<DictionaryEntry>, _> = serde_json::from_str(json);
        assert!(parsed.is_err());
    }
}
