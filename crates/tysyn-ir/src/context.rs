//! IrContext: the state threaded through type resolution.
//!
//! Owns the nodes, the resolved types, the names, and the canonical node
//! of each resolved type. Two contexts share nothing, so resolution order
//! in one never affects another.

use tysyn_core::{Interner, Pos, Symbol};

use crate::arena::NodeArena;
use crate::canon::TypeNodes;
use crate::invariants::{ensure_type_agrees, fatal};
use crate::node::{Node, NodeId, NodeKind};
use crate::types::{TypeId, TypeTable};

#[derive(Debug, Clone, Default)]
pub struct IrContext {
    interner: Interner,
    types: TypeTable,
    nodes: NodeArena,
    canon: TypeNodes,
}

impl IrContext {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Names and types ==========

    #[inline]
    pub fn intern(&mut self, name: &str) -> Symbol {
        self.interner.intern(name)
    }

    #[inline]
    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    /// Intern a defined type declared under `name`.
    pub fn named_type(&mut self, name: &str) -> TypeId {
        let sym = self.interner.intern(name);
        self.types.named(sym, name)
    }

    /// Intern an unnamed type by its rendered form.
    pub fn literal_type(&mut self, repr: &str) -> TypeId {
        self.types.literal(repr)
    }

    #[inline]
    pub fn types(&self) -> &TypeTable {
        &self.types
    }

    // ========== Nodes ==========

    #[inline]
    pub fn nodes(&self) -> &NodeArena {
        &self.nodes
    }

    #[inline]
    pub fn nodes_mut(&mut self) -> &mut NodeArena {
        &mut self.nodes
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        self.nodes.get(id)
    }

    /// Symbol a formatter should print for `id`.
    ///
    /// Shells report their type's declaring symbol; type syntax has none.
    pub fn sym(&self, id: NodeId) -> Option<Symbol> {
        let node = self.nodes.get(id);
        match node.kind() {
            NodeKind::TypeShell(ty) => self.types.sym(*ty),
            _ => node.name_sym(),
        }
    }

    // ========== Canonical nodes ==========

    #[inline]
    pub fn canon(&self) -> &TypeNodes {
        &self.canon
    }

    #[inline]
    pub fn canon_mut(&mut self) -> &mut TypeNodes {
        &mut self.canon
    }

    /// Canonical node of `ty`, if one was registered.
    pub fn canonical(&self, ty: TypeId) -> Option<NodeId> {
        self.canon.get(ty)
    }

    /// Bind the type syntax `id` to its resolved type `ty`.
    ///
    /// The node drops its shape payload and reports no children from now
    /// on. If `ty` has no canonical node yet, `id` becomes it.
    ///
    /// # Panics
    /// Binding a node twice, or binding a node that is not type syntax,
    /// is an internal compiler error.
    pub fn bind(&mut self, id: NodeId, ty: TypeId) {
        if let Err(violation) = self.nodes.bind(id, ty) {
            fatal(violation);
        }
        let canonical = self.canon.set_if_absent(ty, id);
        tracing::debug!(node = %id, ty = %ty, canonical, "bound type syntax");
    }

    /// Node standing for the resolved type `ty`.
    ///
    /// Returns the canonical node when there is one. Otherwise builds a
    /// fresh shell at the unknown position. The fresh shell is not
    /// registered: a later `bind` of some other node to `ty` registers that
    /// node instead, and both stay live.
    ///
    /// # Panics
    /// A canonical node bound to a different type is an internal compiler error.
    pub fn type_node(&mut self, ty: TypeId) -> NodeId {
        if let Some(node) = self.canon.get(ty) {
            ensure_type_agrees(&self.nodes, node, ty);
            tracing::trace!(node = %node, ty = %ty, "reusing canonical node");
            return node;
        }

        let shell = self.nodes.new_type_shell(Pos::UNKNOWN, ty);
        tracing::debug!(node = %shell, ty = %ty, "no canonical node; built unregistered shell");
        shell
    }
}
