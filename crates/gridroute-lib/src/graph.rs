//! Adjacency graph over numeric vertex identifiers.
//!
//! Edges are stored once, as the ordered pair given at insertion, whatever
//! the graph's [`Orientation`]. Undirected semantics are applied when the
//! graph is queried. Vertex labels and edge values are optional capabilities
//! selected through the [`LabelPolicy`] and [`ValuePolicy`] type parameters,
//! so a graph either carries a label or value store completely or not at all.

use serde::Serialize;
use tracing::trace;

use crate::collections::{ByteKey, Dictionary, PositionalList};
use crate::error::{Error, Result};

/// Identifier of a graph vertex.
pub type VertexId = u32;

/// Whether edges are one-way or symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Directed,
    Undirected,
}

/// Ordered pair of vertex identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub src: VertexId,
    pub dest: VertexId,
}

impl Edge {
    pub const fn new(src: VertexId, dest: VertexId) -> Self {
        Self { src, dest }
    }

    pub const fn reversed(self) -> Self {
        Self::new(self.dest, self.src)
    }

    pub fn touches(&self, id: VertexId) -> bool {
        self.src == id || self.dest == id
    }

    fn joins(&self, src: VertexId, dest: VertexId, orientation: Orientation) -> bool {
        (self.src == src && self.dest == dest)
            || (orientation == Orientation::Undirected && self.src == dest && self.dest == src)
    }
}

impl ByteKey for Edge {
    type Bytes = [u8; 8];

    fn key_bytes(&self) -> Self::Bytes {
        let mut bytes = [0u8; 8];
        bytes[..4].copy_from_slice(&self.src.to_le_bytes());
        bytes[4..].copy_from_slice(&self.dest.to_le_bytes());
        bytes
    }
}

/// Storage strategy for vertex labels.
pub trait LabelPolicy: Default {
    type Label: Clone;

    /// `Ok` when the graph carries labels, [`Error::NotLabeled`] otherwise.
    fn supported() -> Result<()>;
    fn get(&self, id: VertexId) -> Option<Self::Label>;
    fn put(&mut self, id: VertexId, label: Self::Label);
    fn forget(&mut self, id: VertexId);
    fn clear(&mut self);
}

/// Storage strategy for edge values.
pub trait ValuePolicy: Default {
    type Value: Clone;

    /// `Ok` when the graph carries edge values, [`Error::NotValued`] otherwise.
    fn supported() -> Result<()>;
    fn get(&self, edge: Edge) -> Option<Self::Value>;
    fn put(&mut self, edge: Edge, value: Self::Value);
    fn forget(&mut self, edge: Edge);
    fn clear(&mut self);
}

/// Graph without vertex labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unlabeled;

impl LabelPolicy for Unlabeled {
    type Label = ();

    fn supported() -> Result<()> {
        Err(Error::NotLabeled)
    }

    fn get(&self, _id: VertexId) -> Option<()> {
        None
    }

    fn put(&mut self, _id: VertexId, _label: ()) {}

    fn forget(&mut self, _id: VertexId) {}

    fn clear(&mut self) {}
}

/// Graph whose vertices may carry a label of type `L`.
#[derive(Debug, Clone)]
pub struct Labeled<L> {
    labels: Dictionary<VertexId, L>,
}

impl<L> Default for Labeled<L> {
    fn default() -> Self {
        Self {
            labels: Dictionary::new(),
        }
    }
}

impl<L: Clone> LabelPolicy for Labeled<L> {
    type Label = L;

    fn supported() -> Result<()> {
        Ok(())
    }

    fn get(&self, id: VertexId) -> Option<L> {
        self.labels.get(&id).ok()
    }

    fn put(&mut self, id: VertexId, label: L) {
        self.labels.insert(id, label);
    }

    fn forget(&mut self, id: VertexId) {
        // Vertices added without a label have nothing to drop.
        let _ = self.labels.remove(&id);
    }

    fn clear(&mut self) {
        self.labels.clear();
    }
}

/// Graph without edge values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unvalued;

impl ValuePolicy for Unvalued {
    type Value = ();

    fn supported() -> Result<()> {
        Err(Error::NotValued)
    }

    fn get(&self, _edge: Edge) -> Option<()> {
        None
    }

    fn put(&mut self, _edge: Edge, _value: ()) {}

    fn forget(&mut self, _edge: Edge) {}

    fn clear(&mut self) {}
}

/// Graph whose edges may carry a value of type `V`.
#[derive(Debug, Clone)]
pub struct Valued<V> {
    values: Dictionary<Edge, V>,
}

impl<V> Default for Valued<V> {
    fn default() -> Self {
        Self {
            values: Dictionary::new(),
        }
    }
}

impl<V: Clone> ValuePolicy for Valued<V> {
    type Value = V;

    fn supported() -> Result<()> {
        Ok(())
    }

    fn get(&self, edge: Edge) -> Option<V> {
        self.values.get(&edge).ok()
    }

    fn put(&mut self, edge: Edge, value: V) {
        self.values.insert(edge, value);
    }

    fn forget(&mut self, edge: Edge) {
        let _ = self.values.remove(&edge);
    }

    fn clear(&mut self) {
        self.values.clear();
    }
}

/// Graph structure used by the terrain and the path planner.
#[derive(Debug, Clone)]
pub struct Graph<L = Unlabeled, V = Unvalued> {
    orientation: Orientation,
    vertices: PositionalList<VertexId>,
    edges: PositionalList<Edge>,
    labels: L,
    values: V,
}

impl Graph {
    /// Empty graph without labels or edge values.
    pub fn new(orientation: Orientation) -> Self {
        Self::with_capabilities(orientation)
    }
}

impl<L: LabelPolicy, V: ValuePolicy> Graph<L, V> {
    /// Empty graph whose label and value capabilities follow `L` and `V`.
    pub fn with_capabilities(orientation: Orientation) -> Self {
        Self {
            orientation,
            vertices: PositionalList::new(),
            edges: PositionalList::new(),
            labels: L::default(),
            values: V::default(),
        }
    }

    /// Graph over the given vertex ids with no edges. Ids must be distinct;
    /// they are stored without the duplicate scan `add_vertex` performs.
    pub(crate) fn with_vertices(
        orientation: Orientation,
        ids: impl IntoIterator<Item = VertexId>,
    ) -> Self {
        Self {
            vertices: ids.into_iter().collect(),
            ..Self::with_capabilities(orientation)
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn add_vertex(&mut self, id: VertexId) -> Result<()> {
        if self.vertex_present(id) {
            return Err(Error::VertexPresent { id });
        }
        self.vertices.push_back(id);
        Ok(())
    }

    pub fn add_vertex_with_label(&mut self, id: VertexId, label: L::Label) -> Result<()> {
        L::supported()?;
        self.add_vertex(id)?;
        self.labels.put(id, label);
        Ok(())
    }

    /// Add the edge `src -> dest`. An edge already present (in either
    /// direction for undirected graphs) is not stored twice.
    pub fn add_edge(&mut self, src: VertexId, dest: VertexId) -> Result<()> {
        self.require_vertex(src)?;
        self.require_vertex(dest)?;
        if !self.arc_present(src, dest) {
            trace!(src, dest, "adding edge");
            self.edges.push_back(Edge::new(src, dest));
        }
        Ok(())
    }

    /// Add the edge `src -> dest` and attach `value` to it, overwriting any
    /// value stored for an existing edge.
    pub fn add_edge_with_value(
        &mut self,
        src: VertexId,
        dest: VertexId,
        value: V::Value,
    ) -> Result<()> {
        V::supported()?;
        self.add_edge(src, dest)?;
        let edge = self.stored_edge(src, dest).ok_or(Error::ArcAbsent { src, dest })?;
        self.values.put(edge, value);
        Ok(())
    }

    pub fn vertex_present(&self, id: VertexId) -> bool {
        self.vertices.contains(&id)
    }

    /// Whether `src -> dest` is stored; undirected graphs also accept the
    /// reverse pair.
    pub fn arc_present(&self, src: VertexId, dest: VertexId) -> bool {
        self.stored_edge(src, dest).is_some()
    }

    /// Remove a vertex together with its label, incident edges, and their
    /// values.
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<()> {
        self.require_vertex(id)?;
        let incident: Vec<Edge> = self
            .edges
            .iter()
            .filter(|edge| edge.touches(id))
            .copied()
            .collect();
        self.edges.retain(|edge| !edge.touches(id));
        for edge in incident {
            self.values.forget(edge);
        }
        self.vertices.retain(|vertex| *vertex != id);
        self.labels.forget(id);
        trace!(id, "removed vertex");
        Ok(())
    }

    pub fn remove_edge(&mut self, src: VertexId, dest: VertexId) -> Result<()> {
        let orientation = self.orientation;
        let removed = self.edges.retain(|edge| !edge.joins(src, dest, orientation));
        if removed == 0 {
            return Err(Error::ArcAbsent { src, dest });
        }
        let edge = Edge::new(src, dest);
        self.values.forget(edge);
        if orientation == Orientation::Undirected {
            self.values.forget(edge.reversed());
        }
        Ok(())
    }

    /// Vertex identifiers in insertion order.
    pub fn vertices(&self) -> PositionalList<VertexId> {
        self.vertices.clone()
    }

    /// Stored edges in insertion order.
    pub fn edges(&self) -> PositionalList<Edge> {
        self.edges.clone()
    }

    /// Vertices one hop away from `id`, in edge insertion order.
    ///
    /// Directed graphs only follow edges leaving `id`.
    pub fn adjacent(&self, id: VertexId) -> Result<PositionalList<VertexId>> {
        self.require_vertex(id)?;
        let undirected = self.orientation == Orientation::Undirected;
        Ok(self
            .edges
            .iter()
            .filter_map(|edge| {
                if edge.src == id {
                    Some(edge.dest)
                } else if undirected && edge.dest == id {
                    Some(edge.src)
                } else {
                    None
                }
            })
            .collect())
    }

    /// Label attached to `id`; [`Error::MissingKey`] if it was added bare.
    pub fn label(&self, id: VertexId) -> Result<L::Label> {
        L::supported()?;
        self.require_vertex(id)?;
        self.labels.get(id).ok_or(Error::MissingKey)
    }

    pub fn set_label(&mut self, id: VertexId, label: L::Label) -> Result<()> {
        L::supported()?;
        self.require_vertex(id)?;
        self.labels.put(id, label);
        Ok(())
    }

    /// Value attached to the edge between `src` and `dest`.
    pub fn value(&self, src: VertexId, dest: VertexId) -> Result<V::Value> {
        V::supported()?;
        let edge = self.stored_edge(src, dest).ok_or(Error::ArcAbsent { src, dest })?;
        self.values.get(edge).ok_or(Error::MissingKey)
    }

    pub fn set_value(&mut self, src: VertexId, dest: VertexId, value: V::Value) -> Result<()> {
        V::supported()?;
        let edge = self.stored_edge(src, dest).ok_or(Error::ArcAbsent { src, dest })?;
        self.values.put(edge, value);
        Ok(())
    }

    /// Drop every vertex, edge, label, and value.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.labels.clear();
        self.values.clear();
    }

    fn require_vertex(&self, id: VertexId) -> Result<()> {
        if self.vertex_present(id) {
            Ok(())
        } else {
            Err(Error::VertexAbsent { id })
        }
    }

    fn stored_edge(&self, src: VertexId, dest: VertexId) -> Option<Edge> {
        self.edges
            .iter()
            .find(|edge| edge.joins(src, dest, self.orientation))
            .copied()
    }
}
