//! 잡음 허용 다중 패턴 트라이
//!
//! 사전 전체를 한 번에 스캔하는 접두사 트리입니다. 노드는 아레나 벡터에
//! 담고 자식은 정수 인덱스로 가리켜, 스캔 경로에서 노드별 할당이 일어나지
//! 않습니다. 구축 이후에는 읽기 전용이며 스레드 간 자유롭게 공유합니다.
//!
//! 스캔 중 구두점/공백 같은 비내용 문자는 대응 간선이 없으면 트라이
//! 커서를 움직이지 않고 건너뜁니다. `"a.b"`에서 `"ab"`를 찾는 식으로
//! 잡음 삽입 우회를 무력화합니다.

use std::collections::HashMap;

/// 트라이 노드. 간선 코드포인트는 부모의 자식 매핑 키가 담당합니다.
#[derive(Debug)]
struct TrieNode {
    children: HashMap<char, usize>,
    /// 삽입된 단어의 끝 노드 여부
    terminal: bool,
    /// 루트로부터의 깊이 (루트 0)
    depth: u32,
}

impl TrieNode {
    fn new(depth: u32) -> Self {
        Self {
            children: HashMap::new(),
            terminal: false,
            depth,
        }
    }
}

/// 사전 단어 전체를 담는 접두사 트리
#[derive(Debug)]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

const ROOT: usize = 0;

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new(0)],
        }
    }

    /// 단어 개수가 아닌 노드 개수 (루트 포함)
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// 정규화된 단어 한 개 삽입. 빈 입력은 무시합니다.
    pub fn insert(&mut self, word: &[char]) {
        if word.is_empty() {
            return;
        }
        let mut node = ROOT;
        for &c in word {
            node = match self.nodes[node].children.get(&c).copied() {
                Some(next) => next,
                None => {
                    let depth = self.nodes[node].depth + 1;
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::new(depth));
                    self.nodes[node].children.insert(c, next);
                    next
                }
            };
        }
        self.nodes[node].terminal = true;
    }

    /// 단일 패스 스캔. 반환 구간은 반열린 `[start, end)` 인덱스입니다.
    ///
    /// 시작 위치마다 루트에서 간선을 따라가며:
    /// - 비내용 문자는 간선이 없으면 커서를 두고 건너뜀
    /// - 내용 문자에 간선이 없으면 그 시작 위치는 포기 (역추적 없음)
    /// - 말단 노드에 닿을 때마다 끝 위치를 갱신 (최장 일치)
    ///
    /// 다음 시작 위치는 성패와 무관하게 `i + 1`이므로 겹치거나 중첩된
    /// 매치도 모두 드러납니다.
    pub fn scan(&self, text: &[char]) -> Vec<(usize, usize)> {
        let mut spans = Vec::new();
        for i in 0..text.len() {
            let mut node = match self.nodes[ROOT].children.get(&text[i]) {
                Some(&next) => next,
                None => continue,
            };
            let mut last_end = if self.nodes[node].terminal {
                Some(i + 1)
            } else {
                None
            };
            let mut j = i + 1;
            while j < text.len() {
                let c = text[j];
                match self.nodes[node].children.get(&c) {
                    Some(&next) => {
                        node = next;
                        j += 1;
                        if self.nodes[node].terminal {
                            last_end = Some(j);
                        }
                    }
                    None if is_noise(c) => {
                        j += 1;
                    }
                    None => break,
                }
            }
            if let Some(end) = last_end {
                spans.push((i, end));
            }
        }
        spans
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

/// 비내용 문자 판정: 구두점/공백/기호는 트라이 간선 없이 건너뛸 수 있음
fn is_noise(c: char) -> bool {
    !c.is_alphanumeric()
}
