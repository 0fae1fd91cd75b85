// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// The sweep's event queue.
//
// All events are known before the sweep starts, so the queue is a key array
// sorted once, lowest priority first. Extraction pops from the end, which
// yields the highest vertex first: stack discipline over a sorted array.

use crate::geom::{higher, Point};
use crate::mesh::VertIdx;

pub struct PriorityQ {
    /// Sorted so that the last key is the highest vertex.
    keys: Vec<VertIdx>,
}

impl PriorityQ {
    /// Queue every key, ordered by the `higher` relation of its point.
    ///
    /// `pos` maps a key to its position. Keys whose points compare equal keep
    /// their relative input order.
    pub fn new<F>(keys: impl IntoIterator<Item = VertIdx>, pos: F) -> Self
    where
        F: Fn(VertIdx) -> Point,
    {
        let mut keys: Vec<VertIdx> = keys.into_iter().collect();
        keys.sort_by(|&a, &b| {
            let (pa, pb) = (pos(a), pos(b));
            if higher(pa, pb) {
                std::cmp::Ordering::Greater
            } else if higher(pb, pa) {
                std::cmp::Ordering::Less
            } else {
                std::cmp::Ordering::Equal
            }
        });
        PriorityQ { keys }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// The highest remaining key without removing it.
    #[inline]
    pub fn maximum(&self) -> Option<VertIdx> {
        self.keys.last().copied()
    }

    /// Remove and return the highest remaining key.
    #[inline]
    pub fn extract_max(&mut self) -> Option<VertIdx> {
        self.keys.pop()
    }

    /// Drain the queue, highest first.
    pub fn into_descending(mut self) -> Vec<VertIdx> {
        self.keys.reverse();
        self.keys
    }
}
