// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// Greedy face coloring over the dual graph returned by Mesh::extract_faces.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use log::debug;

use super::FaceIdx;

/// Smallest palette the colorer will use.
pub const MIN_PALETTE: usize = 4;

/// Color every face so that no two neighbours share a color.
///
/// Faces are visited breadth first, starting from the lowest face id of each
/// connected component. The k-th face visited takes entry `k % free.len()`
/// of the palette colors its colored neighbours leave free, which spreads the
/// palette over the mesh instead of piling onto the first colors. Only when
/// the whole palette is taken does a face get the lowest unused color beyond
/// it; the caller decides how to render those.
pub fn color_faces(
    adjacency: &BTreeMap<FaceIdx, BTreeSet<FaceIdx>>,
    palette_size: usize,
) -> BTreeMap<FaceIdx, usize> {
    let palette_size = palette_size.max(MIN_PALETTE);
    let mut colors: BTreeMap<FaceIdx, usize> = BTreeMap::new();
    let mut queue = VecDeque::new();
    let mut visited = 0usize;

    for &root in adjacency.keys() {
        if colors.contains_key(&root) {
            continue;
        }
        queue.push_back(root);
        while let Some(face) = queue.pop_front() {
            if colors.contains_key(&face) {
                continue;
            }
            let neighbours = adjacency.get(&face);
            let used: BTreeSet<usize> = neighbours
                .into_iter()
                .flatten()
                .filter_map(|n| colors.get(n).copied())
                .collect();
            let free: Vec<usize> = (0..palette_size).filter(|c| !used.contains(c)).collect();
            let color = if free.is_empty() {
                let c = (palette_size..).find(|c| !used.contains(c)).unwrap_or(palette_size);
                debug!(
                    "face {} needs color {} beyond the palette of {}",
                    face, c, palette_size
                );
                c
            } else {
                free[visited % free.len()]
            };
            visited += 1;
            colors.insert(face, color);
            for &n in neighbours.into_iter().flatten() {
                if !colors.contains_key(&n) {
                    queue.push_back(n);
                }
            }
        }
    }

    debug!(
        "colored {} faces with {} colors",
        colors.len(),
        colors.values().collect::<BTreeSet<_>>().len()
    );
    colors
}
