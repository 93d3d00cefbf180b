//! The graph container.
//!
//! Owns the ordered node collection for one panel. Insertion order is the
//! draw order and also the identity order: a node's host-dispatch window id
//! is `unique_id_base + index`, so removing a node shifts every subsequent
//! identity. Collaborators must treat cached ids as invalidated after any
//! removal.

use crate::geometry::Point;
use crate::layout::LayoutVariant;
use crate::node::Node;
use std::rc::Rc;

/// Ordered collection of nodes with index-derived identity.
pub struct Graph {
    nodes: Vec<Node>,
    /// Caller-supplied offset that keeps window ids distinct across multiple
    /// concurrent panels sharing one input-dispatch namespace.
    unique_id_base: i32,
}

impl Graph {
    pub fn new(unique_id_base: i32) -> Self {
        Self {
            nodes: Vec::new(),
            unique_id_base,
        }
    }

    pub fn unique_id_base(&self) -> i32 {
        self.unique_id_base
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a node at `start_position` with the variant's default size.
    /// Returns the new node's index.
    pub fn add_node(
        &mut self,
        title: impl Into<String>,
        start_position: Point,
        variant: Rc<dyn LayoutVariant>,
    ) -> usize {
        let node = Node::new(title, start_position, variant);
        self.nodes.push(node);
        let index = self.nodes.len() - 1;
        log::debug!("added node {} (window id {})", index, self.window_id(index));
        index
    }

    /// Remove the node at `index`. Out-of-range indices are a no-op returning
    /// `None`. All subsequent window ids shift down by one.
    pub fn remove_node(&mut self, index: usize) -> Option<Node> {
        if index >= self.nodes.len() {
            return None;
        }
        log::debug!("removing node {}, subsequent window ids shift", index);
        Some(self.nodes.remove(index))
    }

    pub fn get_node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn get_node_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.nodes.get_mut(index)
    }

    pub fn get_last_node(&self) -> Option<&Node> {
        self.nodes.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.iter_mut()
    }

    /// Translate every node rect by `delta` (the per-tick scroll delta).
    pub fn translate_all(&mut self, delta: Point) {
        if delta == Point::ZERO {
            return;
        }
        for node in &mut self.nodes {
            node.translate(delta);
        }
    }

    /// Boundary-inclusive hit test for one node; `false` for out-of-range
    /// indices.
    pub fn node_contains(&self, index: usize, point: Point) -> bool {
        self.nodes
            .get(index)
            .map(|n| n.contains(point))
            .unwrap_or(false)
    }

    /// First node (in insertion order) containing `point`, if any.
    pub fn any_node_contains(&self, point: Point) -> Option<usize> {
        self.nodes.iter().position(|n| n.contains(point))
    }

    /// Host-dispatch identity of the node at `index`.
    pub fn window_id(&self, index: usize) -> i32 {
        self.unique_id_base + index as i32
    }

    /// Inverse of [`window_id`]: `None` for ids outside this graph's range.
    ///
    /// [`window_id`]: Self::window_id
    pub fn index_for_window_id(&self, id: i32) -> Option<usize> {
        let offset = id - self.unique_id_base;
        if offset >= 0 && (offset as usize) < self.nodes.len() {
            Some(offset as usize)
        } else {
            None
        }
    }
}
