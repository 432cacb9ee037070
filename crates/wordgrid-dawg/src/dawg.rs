// Dictionary loading, validation, and index-based traversal.

use std::path::Path;

use crate::node::DawgNode;
use crate::DawgError;

/// Size of the element-count header in bytes.
const HEADER_SIZE: usize = 4;

/// A loaded word graph.
///
/// The backing array is immutable after load. Index 0 is the reserved
/// "no node" sentinel; the root sibling chain (the first letters of all
/// words) begins at index 1. All accessors are total on indices in
/// `1..len()`; the sentinel is never dereferenced by contract, and the
/// load-time validation guarantees every child pointer and sibling step
/// stays in bounds.
pub struct Dawg {
    nodes: Vec<DawgNode>,
}

impl std::fmt::Debug for Dawg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dawg")
            .field("node_count", &self.nodes.len())
            .finish()
    }
}

impl Dawg {
    /// Load a dictionary from its raw binary form.
    ///
    /// The blob starts with a little-endian `u32` element count `N`,
    /// followed by `N` packed 32-bit node words. Trailing bytes beyond the
    /// declared size are ignored. Byte-swap detection is skipped;
    /// dictionaries are stored little-endian.
    pub fn from_bytes(data: &[u8]) -> Result<Self, DawgError> {
        if data.len() < HEADER_SIZE {
            return Err(DawgError::TooShort {
                expected: HEADER_SIZE,
                actual: data.len(),
            });
        }
        let declared = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as usize;
        let need = HEADER_SIZE + declared * 4;
        if data.len() < need {
            return Err(DawgError::TooShort {
                expected: need,
                actual: data.len(),
            });
        }

        // Copy into an aligned Vec<DawgNode>; the source slice may not be
        // 4-byte aligned.
        let mut nodes = vec![DawgNode(0); declared];
        let dst = bytemuck::cast_slice_mut::<DawgNode, u8>(&mut nodes);
        dst.copy_from_slice(&data[HEADER_SIZE..need]);

        let dawg = Self { nodes };
        dawg.validate()?;
        Ok(dawg)
    }

    /// Read a dictionary file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DawgError> {
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Structural checks over every non-sentinel node: the letter byte must
    /// be `'A'..='Z'` or `'_'`, the child index must stay inside the array,
    /// and the final node must close its sibling chain (otherwise a sibling
    /// step could walk off the end).
    fn validate(&self) -> Result<(), DawgError> {
        let len = self.nodes.len() as u32;
        for i in 1..len {
            let node = self.nodes[i as usize];
            let letter = node.letter();
            if !(letter.is_ascii_uppercase() || letter == b'_') {
                return Err(DawgError::InvalidNode {
                    index: i,
                    reason: format!("letter byte 0x{letter:02X} outside 'A'..='Z' / '_'"),
                });
            }
            if node.child_index() >= len {
                return Err(DawgError::InvalidNode {
                    index: i,
                    reason: format!(
                        "child index {} out of bounds (node count {})",
                        node.child_index(),
                        len
                    ),
                });
            }
            if i == len - 1 && !node.is_end_of_list() {
                return Err(DawgError::InvalidNode {
                    index: i,
                    reason: "final node does not close its sibling chain".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Number of node words, including the sentinel.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the dictionary holds no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Index of the first root alternative, or 0 for a dictionary with no
    /// words (sentinel-only or empty blob).
    #[inline]
    pub fn root(&self) -> u32 {
        if self.nodes.len() > 1 { 1 } else { 0 }
    }

    /// Letter of node `i` (`i` must be non-zero and in bounds).
    #[inline]
    pub fn letter(&self, i: u32) -> u8 {
        self.nodes[i as usize].letter()
    }

    /// Whether the root-to-`i` path spells a word.
    #[inline]
    pub fn is_end_of_word(&self, i: u32) -> bool {
        self.nodes[i as usize].is_end_of_word()
    }

    /// Next sibling of node `i`: `i + 1`, or 0 at the end of the chain.
    /// Siblings are adjacent in storage, so a linear sibling scan walks
    /// consecutive memory.
    #[inline]
    pub fn sibling(&self, i: u32) -> u32 {
        if self.nodes[i as usize].is_end_of_list() {
            0
        } else {
            i + 1
        }
    }

    /// First child of node `i`, or 0 when it has none.
    #[inline]
    pub fn child(&self, i: u32) -> u32 {
        self.nodes[i as usize].child_index()
    }

    /// Exact-membership walk. Not on the search hot path; used by tools
    /// and tests.
    pub fn contains(&self, word: &[u8]) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut i = self.root();
        let mut node = 0u32;
        for &c in word {
            if i == 0 {
                return false;
            }
            while i != 0 && self.letter(i) != c {
                i = self.sibling(i);
            }
            if i == 0 {
                return false;
            }
            node = i;
            i = self.child(i);
        }
        self.is_end_of_word(node)
    }
}
