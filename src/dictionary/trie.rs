//! 문자 단위 접두사 트라이
//!
//! 위치마다 사전 단어를 찾을 때, 입력과 갈라지는 순간 탐색을 멈춥니다.
//! 긴 단어가 하나 있어도 무관한 입력의 조회 비용은 늘지 않습니다.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
struct Node {
    children: HashMap<char, usize>,
    terminal: bool,
}

/// 표면형 접두사 트라이
#[derive(Debug, Clone)]
pub(super) struct PrefixTrie {
    nodes: Vec<Node>,
}

impl Default for PrefixTrie {
    fn default() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }
}

impl PrefixTrie {
    pub(super) fn insert(&mut self, word: &str) {
        let mut at = 0;
        for c in word.chars() {
            at = match self.nodes[at].children.get(&c) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[at].children.insert(c, next);
                    next
                }
            };
        }
        self.nodes[at].terminal = true;
    }

    /// `chars`의 앞부분과 일치하는 단어 길이들 (짧은 것부터)
    pub(super) fn prefix_lengths(&self, chars: &[char]) -> Vec<usize> {
        let mut found = Vec::new();
        let mut at = 0;
        for (i, c) in chars.iter().enumerate() {
            match self.nodes[at].children.get(c) {
                Some(&next) => at = next,
                None => break,
            }
            if self.nodes[at].terminal {
                found.push(i + 1);
            }
        }
        found
    }
}
