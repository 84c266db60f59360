//! Directed multigraph stored as adjacency lists.
//!
//! Each vertex keeps its destinations in insertion order internally; every
//! public view walks them backwards, so the most recently added edge of a
//! vertex is always seen first.

use std::collections::VecDeque;
use std::iter::{Copied, Rev};
use std::slice;

use tracing::{debug, instrument};

use crate::domain::{DomainError, DomainResult};

/// Destinations of one vertex, most recently added first.
pub type Neighbors<'a> = Copied<Rev<slice::Iter<'a, i32>>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<i32>>,
    edge_count: usize,
}

impl Graph {
    /// Graph with `num_vertices` vertices and no edges.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); num_vertices],
            edge_count: 0,
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of stored edges, parallel edges and self-loops included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Add the directed edge `src -> dest`.
    ///
    /// Both ends are validated before anything is stored; on error the graph
    /// is untouched.
    #[instrument(level = "trace", skip(self))]
    pub fn add_edge(&mut self, src: i32, dest: i32) -> DomainResult<()> {
        let src_idx = self.vertex_index(src)?;
        self.vertex_index(dest)?;
        self.adjacency[src_idx].push(dest);
        self.edge_count += 1;
        Ok(())
    }

    pub fn neighbors(&self, vertex: i32) -> DomainResult<Neighbors<'_>> {
        let idx = self.vertex_index(vertex)?;
        Ok(Self::view(&self.adjacency[idx]))
    }

    /// Every vertex in ascending order with its destinations.
    pub fn traverse(&self) -> impl Iterator<Item = (usize, Neighbors<'_>)> {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(vertex, list)| (vertex, Self::view(list)))
    }

    /// Breadth-first visit order from `start`, each reachable vertex once.
    #[instrument(level = "debug", skip(self))]
    pub fn bfs(&self, start: i32) -> DomainResult<Vec<i32>> {
        let start_idx = self.vertex_index(start)?;
        let mut visited = vec![false; self.num_vertices()];
        let mut order = Vec::new();
        let mut queue = VecDeque::new();

        visited[start_idx] = true;
        queue.push_back(start);

        while let Some(vertex) = queue.pop_front() {
            order.push(vertex);
            for next in Self::view(&self.adjacency[vertex as usize]) {
                if !visited[next as usize] {
                    visited[next as usize] = true;
                    queue.push_back(next);
                }
            }
        }

        debug!("bfs from {}: {:?}", start, order);
        Ok(order)
    }

    /// Depth-first preorder from `start` using an explicit stack.
    #[instrument(level = "debug", skip(self))]
    pub fn dfs(&self, start: i32) -> DomainResult<Vec<i32>> {
        self.vertex_index(start)?;
        let mut visited = vec![false; self.num_vertices()];
        let mut order = Vec::new();
        let mut stack = vec![start];

        while let Some(vertex) = stack.pop() {
            if visited[vertex as usize] {
                continue;
            }
            visited[vertex as usize] = true;
            order.push(vertex);
            // Push in reverse so the first listed neighbor is popped first
            let pending: Vec<i32> = Self::view(&self.adjacency[vertex as usize])
                .filter(|&next| !visited[next as usize])
                .collect();
            stack.extend(pending.into_iter().rev());
        }

        debug!("dfs from {}: {:?}", start, order);
        Ok(order)
    }

    fn view(list: &[i32]) -> Neighbors<'_> {
        list.iter().rev().copied()
    }

    fn vertex_index(&self, vertex: i32) -> DomainResult<usize> {
        usize::try_from(vertex)
            .ok()
            .filter(|&idx| idx < self.num_vertices())
            .ok_or(DomainError::VertexOutOfRange {
                vertex,
                num_vertices: self.num_vertices(),
            })
    }
}
