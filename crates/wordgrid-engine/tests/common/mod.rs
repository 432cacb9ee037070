// Shared test support: pack a word list into the binary dictionary form.

use std::collections::BTreeMap;

use wordgrid_dawg::Dawg;

#[derive(Default)]
struct TrieNode {
    children: BTreeMap<u8, TrieNode>,
    terminal: bool,
}

/// Encode `words` as a packed word graph. A plain trie is a valid graph;
/// suffix sharing is an encoder concern, not a format requirement.
pub fn build_dawg(words: &[&str]) -> Dawg {
    let mut root = TrieNode::default();
    for w in words {
        let mut node = &mut root;
        for &b in w.as_bytes() {
            node = node.children.entry(b).or_default();
        }
        node.terminal = true;
    }
    let mut nodes = vec![0u32];
    if !root.children.is_empty() {
        emit(&root.children, &mut nodes);
    }
    let mut data = (nodes.len() as u32).to_le_bytes().to_vec();
    for n in nodes {
        data.extend_from_slice(&n.to_le_bytes());
    }
    Dawg::from_bytes(&data).expect("generated blob is structurally valid")
}

/// Reserve one contiguous block for a sibling chain, then fill it while
/// emitting each child's own chain after the block.
fn emit(children: &BTreeMap<u8, TrieNode>, nodes: &mut Vec<u32>) -> u32 {
    let base = nodes.len();
    nodes.resize(base + children.len(), 0);
    for (k, (&letter, child)) in children.iter().enumerate() {
        let child_base = if child.children.is_empty() {
            0
        } else {
            emit(&child.children, nodes)
        };
        let mut word = u32::from(letter) | (child_base << 10);
        if child.terminal {
            word |= 0x200; // end of word
        }
        if k + 1 == children.len() {
            word |= 0x100; // end of sibling chain
        }
        nodes[base + k] = word;
    }
    base as u32
}
