use std::collections::HashMap;

#[derive(Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    word: Option<String>,
}

pub fn find_words(board: &[Vec<char>], words: &[String]) -> Vec<String> {
    let mut root = TrieNode::default();
    for word in words {
        let mut node = &mut root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        node.word = Some(word.clone());
    }
    let mut seen: Vec<Vec<bool>> = board.iter().map(|row| vec![false; row.len()]).collect();
    let mut found = Vec::new();
    for r in 0..board.len() {
        for c in 0..board[r].len() {
            dfs(board, &mut seen, r, c, &mut root, &mut found);
        }
    }
    found
}

fn dfs(board: &[Vec<char>], seen: &mut [Vec<bool>], r: usize, c: usize, node: &mut TrieNode, found: &mut Vec<String>) {
    if seen[r][c] { return; }
    let Some(next) = node.children.get_mut(&board[r][c]) else {
        return;
    };
    if let Some(word) = next.word.take() {
        found.push(word);
    }
    seen[r][c] = true;
    let (rows, cols) = (board.len(), board[r].len());
    if r > 0 {
        dfs(board, seen, r - 1, c, next, found);
    }
    if r + 1 < rows {
        dfs(board, seen, r + 1, c, next, found);
    }
    if c > 0 {
        dfs(board, seen, r, c - 1, next, found);
    }
    if c + 1 < cols {
        dfs(board, seen, r, c + 1, next, found);
    }
    seen[r][c] = false;
}
