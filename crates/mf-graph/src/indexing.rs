//! Name lookup for graph nodes.
//!
//! Callers speak in node names ("A", "T"); the engine works on dense
//! `NodeId`s. `NameIndex` is the bridge between the two.

use std::collections::HashMap;

use mf_core::NodeId;

/// Bidirectional mapping between node names and node IDs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIndex {
    /// Reverse lookup: name -> NodeId.
    by_name: HashMap<String, NodeId>,

    /// Forward lookup: NodeId index -> name.
    names: Vec<String>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the ID for `name`, registering it under the next free index if unseen.
    pub fn intern(&mut self, name: &str) -> (NodeId, bool) {
        if let Some(&id) = self.by_name.get(name) {
            return (id, false);
        }
        let id = NodeId::from_index(self.names.len() as u32);
        self.by_name.insert(name.to_string(), id);
        self.names.push(name.to_string());
        (id, true)
    }

    /// ID registered for `name`.
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Name registered for `id`.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.names.get(id.as_usize()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
