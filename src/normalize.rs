//! 유니코드 정규화 규율 (NFKD 분해 / NFC 재조합)
//!
//! 모든 비교는 분해된 코드포인트 열 위에서 이루어집니다. 완성형 한글 음절을
//! 자모 단위로 분해해야 글자 일부만 바꾼 우회(예: 받침 치환)를 부분 점수로
//! 잡아낼 수 있습니다. 호출자에게 돌려주는 문자열은 다시 NFC로 재조합해
//! 마스킹되지 않은 구간의 표시 형태를 보존합니다.
//!
//! 분해는 멱등적이며, 검사 대상 문장과 사전 단어 양쪽에 동일하게 적용해야
//! 합니다 (트라이 삽입 전 포함).

use unicode_normalization::UnicodeNormalization;

/// NFKD 분해 후 코드포인트 열로 반환
pub fn decompose(text: &str) -> Vec<char> {
    text.nfkd().collect()
}

/// NFKD 분해 결과를 문자열로 반환 (사전 단어 전처리용)
pub fn decompose_str(text: &str) -> String {
    text.nfkd().collect()
}

/// 코드포인트 열을 NFC로 재조합해 표시용 문자열로 반환
pub fn recompose(chars: &[char]) -> String {
    chars.iter().copied().nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_hangul_syllable() {
        // 한 = ᄒ + ᅡ + ᆫ (첫가끝 자모)
        let jamo = decompose("한");
        assert_eq!(jamo, vec!['\u{1112}', '\u{1161}', '\u{11AB}']);
    }

    #[test]
    fn test_decompose_is_idempotent() {
        let once = decompose_str("안녕하세요");
        let twice = decompose_str(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_recompose_round_trip() {
        let original = "한글 필터 test 123";
        let chars = decompose(original);
        assert_eq!(recompose(&chars), original);
    }

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(decompose_str("hello"), "hello");
        assert_eq!(recompose(&decompose("hello")), "hello");
    }

    #[test]
    fn test_empty_string() {
        assert!(decompose("").is_empty());
        assert_eq!(recompose(&[]), "");
    }
}
