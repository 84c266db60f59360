//! Demonstration service
//!
//! Builds each structure from settings (or caller-supplied data) and renders
//! it as a titled section.

use tracing::{debug, instrument};

use crate::application::render::{self, Section};
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::{Bst, FixedArray, Graph, LinkedList, Queue, Stack};

/// Graph to build and the optional traversals to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphRequest {
    pub vertices: usize,
    pub edges: Vec<(i32, i32)>,
    pub bfs_from: Option<i32>,
    pub dfs_from: Option<i32>,
}

impl GraphRequest {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            vertices: settings.graph.vertices,
            edges: settings
                .graph
                .edges
                .iter()
                .map(|&[src, dest]| (src, dest))
                .collect(),
            bfs_from: None,
            dfs_from: None,
        }
    }
}

/// Service for building and rendering the sample structures.
pub struct DemoService {
    settings: Settings,
}

impl DemoService {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Every structure in the classic order, built from the configured data.
    #[instrument(level = "debug", skip(self))]
    pub fn run_all(&self) -> ApplicationResult<Vec<Section>> {
        let linear = &self.settings.linear.values;
        let sections = vec![
            self.array(linear)?,
            self.linked_list(linear),
            self.stack(linear, 1)?,
            self.queue(linear, 1)?,
            self.bst(&self.settings.bst.values, false),
            self.graph(&GraphRequest::from_settings(&self.settings))?,
        ];
        debug!("run_all: rendered {} sections", sections.len());
        Ok(sections)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn array(&self, values: &[i32]) -> ApplicationResult<Section> {
        let mut array = FixedArray::with_capacity(self.settings.capacity)?;
        for &value in values {
            array.push(value)?;
        }
        Ok(Section::new("ARRAY").line(render::array_line(&array)))
    }

    #[instrument(level = "debug", skip(self))]
    pub fn linked_list(&self, values: &[i32]) -> Section {
        let list: LinkedList = values.iter().copied().collect();
        Section::new("LINKED LIST").line(render::linked_list_line(&list))
    }

    /// Push all values, show the stack, then pop `pops` times.
    #[instrument(level = "debug", skip(self))]
    pub fn stack(&self, values: &[i32], pops: usize) -> ApplicationResult<Section> {
        let mut stack = Stack::with_capacity(self.settings.capacity)?;
        for &value in values {
            stack.push(value)?;
        }
        let mut section = Section::new("STACK (LIFO)").line(render::stack_line(&stack));
        for _ in 0..pops {
            section = section.line(match stack.pop() {
                Some(value) => format!("Popped: {value}"),
                None => "Popped: nothing, stack is empty".to_string(),
            });
        }
        Ok(section)
    }

    /// Enqueue all values, show the queue, then dequeue `dequeues` times.
    #[instrument(level = "debug", skip(self))]
    pub fn queue(&self, values: &[i32], dequeues: usize) -> ApplicationResult<Section> {
        let mut queue = Queue::with_capacity(self.settings.capacity)?;
        for &value in values {
            queue.enqueue(value)?;
        }
        let mut section = Section::new("QUEUE (FIFO)").line(render::queue_line(&queue));
        for _ in 0..dequeues {
            section = section.line(match queue.dequeue() {
                Some(value) => format!("Dequeued: {value}"),
                None => "Dequeued: nothing, queue is empty".to_string(),
            });
        }
        Ok(section)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn bst(&self, values: &[i32], show_tree: bool) -> Section {
        let bst: Bst = values.iter().copied().collect();
        let section = Section::new("BINARY SEARCH TREE").line(render::bst_line(&bst));
        if show_tree {
            section.extend_lines(bst.to_tree().to_string().lines().map(str::to_string))
        } else {
            section
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn graph(&self, request: &GraphRequest) -> ApplicationResult<Section> {
        let mut graph = Graph::new(request.vertices);
        for &(src, dest) in &request.edges {
            graph.add_edge(src, dest)?;
        }
        debug!(
            "graph: {} vertices, {} edges",
            graph.num_vertices(),
            graph.edge_count()
        );

        let mut section =
            Section::new("GRAPH (Adjacency List)").extend_lines(render::graph_lines(&graph));
        if let Some(start) = request.bfs_from {
            section = section.line(render::order_line("BFS", start, &graph.bfs(start)?));
        }
        if let Some(start) = request.dfs_from {
            section = section.line(render::order_line("DFS", start, &graph.dfs(start)?));
        }
        Ok(section)
    }
}
