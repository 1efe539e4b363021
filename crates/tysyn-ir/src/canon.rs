//! Canonical node per resolved type.
//!
//! The first node bound to a type becomes that type's canonical node and
//! stays so for the table's lifetime. Later conversions of the type back
//! to a node return that exact node.

use indexmap::IndexMap;

use crate::node::NodeId;
use crate::types::TypeId;

/// Side table mapping each resolved type to its remembered node.
///
/// Owned by the resolution context rather than by the types themselves,
/// so each compilation (and each test) starts from an empty table.
#[derive(Debug, Clone, Default)]
pub struct TypeNodes {
    nodes: IndexMap<TypeId, NodeId>,
}

impl TypeNodes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remembered node for `ty`, if any.
    pub fn get(&self, ty: TypeId) -> Option<NodeId> {
        self.nodes.get(&ty).copied()
    }

    /// Remember `node` for `ty` unless a node is already remembered.
    ///
    /// Returns whether `node` became the canonical node.
    pub fn set_if_absent(&mut self, ty: TypeId, node: NodeId) -> bool {
        match self.nodes.entry(ty) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(node);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Registrations in the order they happened.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, NodeId)> + '_ {
        self.nodes.iter().map(|(&ty, &node)| (ty, node))
    }
}

#[cfg(test)]
mod tests {
    use tysyn_core::Interner;

    use super::*;
    use crate::types::TypeTable;

    #[test]
    fn first_writer_wins() {
        let mut interner = Interner::new();
        let mut types = TypeTable::new();
        let s = types.named(interner.intern("S"), "S");
        let first = NodeId::from_raw(3);
        let second = NodeId::from_raw(7);

        assert!(TypeNodes::new().get(s).is_none());

        let mut canon = TypeNodes::new();
        assert!(canon.set_if_absent(s, first));
        assert!(!canon.set_if_absent(s, second));
        assert_eq!(canon.get(s), Some(first));
        assert_eq!(canon.len(), 1);
    }

    #[test]
    fn iteration_follows_registration_order() {
        let mut types = TypeTable::new();
        let b = types.literal("b");
        let a = types.literal("a");

        let mut canon = TypeNodes::new();
        canon.set_if_absent(a, NodeId::from_raw(0));
        canon.set_if_absent(b, NodeId::from_raw(1));

        let order: Vec<_> = canon.iter().collect();
        assert_eq!(
            order,
            vec![(a, NodeId::from_raw(0)), (b, NodeId::from_raw(1))]
        );
    }
}
