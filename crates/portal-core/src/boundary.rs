//! Boundary contours of an open triangle mesh (face silhouette, eyes, mouth).

use crate::constants::MIN_CHAIN_LEN;
use fnv::{FnvHashMap, FnvHashSet};
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

/// Ordered vertex indices; consecutive entries share a boundary edge.
pub type BoundaryChain = Vec<u32>;

type Neighbors = SmallVec<[u32; 4]>;

#[derive(Clone, Copy, Debug)]
pub struct MeshBoundaryExtractor {
    /// Shorter chains are treated as slivers and dropped.
    pub min_chain_len: usize,
}

impl Default for MeshBoundaryExtractor {
    fn default() -> Self {
        Self {
            min_chain_len: MIN_CHAIN_LEN,
        }
    }
}

impl MeshBoundaryExtractor {
    /// Boundary polylines in mesh space with depth dropped, longest first.
    ///
    /// Empty or malformed buffers yield an empty list.
    pub fn extract<I>(&self, vertices: &[Vec3], triangle_indices: &[I]) -> Vec<Vec<Vec2>>
    where
        I: Copy + TryInto<u32>,
    {
        self.chains(vertices.len(), triangle_indices)
            .into_iter()
            .map(|chain| {
                chain
                    .into_iter()
                    .map(|i| vertices[i as usize].truncate())
                    .collect()
            })
            .collect()
    }

    /// Boundary chains as vertex indices, longest first.
    ///
    /// Edges used by exactly one triangle are linked into an adjacency graph.
    /// Every boundary vertex not yet covered by an earlier walk starts a new
    /// greedy walk, in ascending index order.
    pub fn chains<I>(&self, vertex_count: usize, triangle_indices: &[I]) -> Vec<BoundaryChain>
    where
        I: Copy + TryInto<u32>,
    {
        if vertex_count == 0 || triangle_indices.len() < 3 {
            return Vec::new();
        }
        let adjacency = boundary_adjacency(vertex_count, triangle_indices);
        if adjacency.is_empty() {
            return Vec::new();
        }

        let mut starts: Vec<u32> = adjacency.keys().copied().collect();
        starts.sort_unstable();

        let mut covered = vec![false; vertex_count];
        let mut chains: Vec<BoundaryChain> = Vec::new();
        for start in starts {
            if covered[start as usize] {
                continue;
            }
            let chain = walk_chain(start, &adjacency);
            for &v in &chain {
                covered[v as usize] = true;
            }
            if chain.len() >= self.min_chain_len {
                chains.push(chain);
            }
        }

        // stable: equal lengths keep lowest-start-first order
        chains.sort_by(|a, b| b.len().cmp(&a.len()));
        log::trace!("[boundary] {} chains kept", chains.len());
        chains
    }
}

/// Follows the first neighbor not yet on this chain until none remains.
///
/// Only the current walk's own vertices block it, so a walk may run through
/// vertices an earlier chain already used. Where rim loops touch at a single
/// vertex, a later start can still cross over into the other loop.
fn walk_chain(start: u32, adjacency: &FnvHashMap<u32, Neighbors>) -> BoundaryChain {
    let mut chain = vec![start];
    let mut on_chain: FnvHashSet<u32> = FnvHashSet::default();
    on_chain.insert(start);
    let mut current = start;
    while let Some(neighbors) = adjacency.get(&current) {
        let Some(&next) = neighbors.iter().find(|&&n| !on_chain.contains(&n)) else {
            break;
        };
        on_chain.insert(next);
        chain.push(next);
        current = next;
    }
    chain
}

/// `None` for indices that are negative or past `vertex_count`.
#[inline]
fn vertex_index<I: Copy + TryInto<u32>>(index: I, vertex_count: usize) -> Option<u32> {
    index
        .try_into()
        .ok()
        .filter(|&i| (i as usize) < vertex_count)
}

/// Counts undirected edge uses over all complete triangles.
///
/// Triangles with an index that is negative or past `vertex_count` are
/// skipped, as are degenerate self-edges. A trailing partial triangle is
/// ignored.
pub fn edge_use_counts<I>(vertex_count: usize, triangle_indices: &[I]) -> FnvHashMap<(u32, u32), u32>
where
    I: Copy + TryInto<u32>,
{
    let mut counts: FnvHashMap<(u32, u32), u32> = FnvHashMap::default();
    counts.reserve(triangle_indices.len());
    for tri in triangle_indices.chunks_exact(3) {
        let (Some(a), Some(b), Some(c)) = (
            vertex_index(tri[0], vertex_count),
            vertex_index(tri[1], vertex_count),
            vertex_index(tri[2], vertex_count),
        ) else {
            continue;
        };
        for (u, v) in [(a, b), (b, c), (c, a)] {
            if u == v {
                continue;
            }
            *counts.entry((u.min(v), u.max(v))).or_insert(0) += 1;
        }
    }
    counts
}

fn boundary_adjacency<I>(vertex_count: usize, triangle_indices: &[I]) -> FnvHashMap<u32, Neighbors>
where
    I: Copy + TryInto<u32>,
{
    let mut adjacency: FnvHashMap<u32, Neighbors> = FnvHashMap::default();
    for ((a, b), count) in edge_use_counts(vertex_count, triangle_indices) {
        if count == 1 {
            adjacency.entry(a).or_default().push(b);
            adjacency.entry(b).or_default().push(a);
        }
    }
    // hash order is arbitrary; sort so walks are reproducible
    for neighbors in adjacency.values_mut() {
        neighbors.sort_unstable();
    }
    adjacency
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_edge_counted_twice() {
        let counts = edge_use_counts(4, &[0u32, 1, 2, 2, 1, 3]);
        assert_eq!(counts[&(1, 2)], 2);
        assert_eq!(counts[&(0, 1)], 1);
        assert_eq!(counts.len(), 5);
    }

    #[test]
    fn out_of_range_triangle_is_skipped() {
        let counts = edge_use_counts(3, &[0u16, 1, 2, 0, 1, 9]);
        assert_eq!(counts.len(), 3);
        assert!(counts.values().all(|&c| c == 1));
    }

    #[test]
    fn negative_index_is_out_of_range() {
        let counts = edge_use_counts(3, &[0i16, 1, 2, 0, -1, 2]);
        assert_eq!(counts.len(), 3);
        assert_eq!(vertex_index(-1i16, 3), None);
        assert_eq!(vertex_index(2i16, 3), Some(2));
    }
}
