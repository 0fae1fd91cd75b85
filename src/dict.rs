// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// A doubly-linked list (dictionary) holding the half-edges that currently
// cross the sweep line.
//
// Keys are half-edge indices kept in activation order; no geometric order is
// maintained, so lookups by position scan every key. Each half-edge remembers
// its node, which makes removal constant time. INVALID marks the head
// sentinel.

use crate::mesh::{EdgeIdx, INVALID};

/// Index into Dict::nodes
pub type NodeIdx = u32;

#[derive(Clone, Debug)]
pub struct DictNode {
    pub key: EdgeIdx,
    pub next: NodeIdx,
    pub prev: NodeIdx,
}

impl Default for DictNode {
    fn default() -> Self {
        DictNode {
            key: INVALID,
            next: INVALID,
            prev: INVALID,
        }
    }
}

/// The head sentinel is always at index 0 and closes the circular list.
#[derive(Clone, Debug)]
pub struct Dict {
    pub nodes: Vec<DictNode>,
    len: usize,
}

/// Index of the head sentinel node.
pub const DICT_HEAD: NodeIdx = 0;

impl Dict {
    pub fn new() -> Self {
        let head = DictNode {
            key: INVALID,
            next: DICT_HEAD,
            prev: DICT_HEAD,
        };
        Dict {
            nodes: vec![head],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append `key` at the tail and return its node.
    pub fn insert(&mut self, key: EdgeIdx) -> NodeIdx {
        let node = self.nodes[DICT_HEAD as usize].prev;
        let new_idx = self.nodes.len() as NodeIdx;
        let next = self.nodes[node as usize].next;
        self.nodes.push(DictNode {
            key,
            next,
            prev: node,
        });
        self.nodes[node as usize].next = new_idx;
        self.nodes[next as usize].prev = new_idx;
        self.len += 1;
        new_idx
    }

    /// Unlink a node. Deleting the head or an already deleted node is a no-op.
    pub fn delete(&mut self, node: NodeIdx) {
        match self.nodes.get(node as usize) {
            Some(n) if node != DICT_HEAD && n.key != INVALID => {}
            _ => return,
        }
        let next = self.nodes[node as usize].next;
        let prev = self.nodes[node as usize].prev;
        self.nodes[next as usize].prev = prev;
        self.nodes[prev as usize].next = next;
        self.nodes[node as usize] = DictNode::default();
        self.len -= 1;
    }

    #[inline]
    pub fn key(&self, node: NodeIdx) -> EdgeIdx {
        self.nodes[node as usize].key
    }

    /// Keys in activation order.
    pub fn keys(&self) -> impl Iterator<Item = EdgeIdx> + '_ {
        let mut node = self.nodes[DICT_HEAD as usize].next;
        std::iter::from_fn(move || {
            if node == DICT_HEAD {
                return None;
            }
            let key = self.nodes[node as usize].key;
            node = self.nodes[node as usize].next;
            Some(key)
        })
    }
}

impl Default for Dict {
    fn default() -> Self {
        Self::new()
    }
}
