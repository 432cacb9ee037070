// Packed DAWG node word.

use bytemuck::{Pod, Zeroable};

/// Letter byte, bits 0-7.
pub const LETTER_MASK: u32 = 0x0000_00FF;
/// End-of-sibling-list flag, bit 8. When set, the node at index+1 does not
/// belong to the same sibling chain.
pub const END_OF_LIST_MASK: u32 = 0x0000_0100;
/// End-of-word flag, bit 9. The root-to-node path spells a dictionary word.
pub const END_OF_WORD_MASK: u32 = 0x0000_0200;
/// First-child index occupies bits 10-31; 0 means "no children".
pub const CHILD_SHIFT: u32 = 10;

/// One packed DAWG node (32 bits, little-endian on disk).
///
/// - bits 0-7: letter (`'A'..='Z'` or `'_'`)
/// - bit 8: end-of-sibling-list
/// - bit 9: end-of-word
/// - bits 10-31: first-child node index (0 = no children)
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct DawgNode(pub u32);

impl DawgNode {
    /// Letter spelled by this node.
    #[inline]
    pub fn letter(self) -> u8 {
        (self.0 & LETTER_MASK) as u8
    }

    /// Whether the path from the root through this node spells a word.
    #[inline]
    pub fn is_end_of_word(self) -> bool {
        self.0 & END_OF_WORD_MASK != 0
    }

    /// Whether this node closes its sibling chain.
    #[inline]
    pub fn is_end_of_list(self) -> bool {
        self.0 & END_OF_LIST_MASK != 0
    }

    /// Index of the first child node, or 0 when the node has no children.
    #[inline]
    pub fn child_index(self) -> u32 {
        self.0 >> CHILD_SHIFT
    }
}

const _: () = assert!(std::mem::size_of::<DawgNode>() == 4);
