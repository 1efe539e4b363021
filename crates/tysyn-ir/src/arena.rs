//! Node storage and the operations every node supports.
//!
//! Nodes are never freed. A copy is a new node with a new id; binding
//! replaces a node's kind in place, so every holder of its id observes
//! the bound node.

use tysyn_core::{Pos, Symbol};

use crate::InvariantViolation;
use crate::field::{Field, deep_copy_fields};
use crate::invariants::{ensure_field_kinds, fatal};
use crate::node::{Children, Ident, Literal, Name, Node, NodeId, NodeKind};
use crate::shape::{
    ArrayType, ChanDir, ChanType, FuncType, InterfaceType, MapType, Shape, SliceType, StructType,
    TypeSyntax,
};
use crate::types::TypeId;

#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn alloc(&mut self, pos: Pos, kind: NodeKind) -> NodeId {
        self.push(Node::new(pos, kind))
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId::from_raw(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    pub fn get(&self, id: NodeId) -> &Node {
        self.nodes
            .get(id.index())
            .unwrap_or_else(|| fatal(InvariantViolation::UnknownNode(id)))
    }

    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes
            .get_mut(id.index())
            .unwrap_or_else(|| fatal(InvariantViolation::UnknownNode(id)))
    }

    pub fn set_pos(&mut self, id: NodeId, pos: Pos) {
        self.get_mut(id).set_pos(pos);
    }

    // ========== Leaf nodes ==========

    pub fn new_name(&mut self, pos: Pos, sym: Symbol) -> NodeId {
        self.alloc(pos, NodeKind::Name(Name { sym }))
    }

    pub fn new_ident(&mut self, pos: Pos, sym: Symbol) -> NodeId {
        self.alloc(pos, NodeKind::Ident(Ident { sym }))
    }

    pub fn new_literal(&mut self, pos: Pos, text: impl Into<String>) -> NodeId {
        self.alloc(pos, NodeKind::Literal(Literal { text: text.into() }))
    }

    /// Childless node for an already resolved type.
    pub fn new_type_shell(&mut self, pos: Pos, ty: TypeId) -> NodeId {
        self.alloc(pos, NodeKind::TypeShell(ty))
    }

    // ========== Type syntax ==========

    fn new_shape(&mut self, pos: Pos, shape: Shape) -> NodeId {
        self.alloc(pos, NodeKind::Type(TypeSyntax::Unresolved(shape)))
    }

    pub fn new_chan_type(&mut self, pos: Pos, elem: NodeId, dir: ChanDir) -> NodeId {
        self.new_shape(pos, Shape::Chan(ChanType { elem, dir }))
    }

    pub fn new_map_type(&mut self, pos: Pos, key: NodeId, elem: NodeId) -> NodeId {
        self.new_shape(pos, Shape::Map(MapType { key, elem }))
    }

    pub fn new_struct_type(&mut self, pos: Pos, fields: Vec<Field>) -> NodeId {
        self.new_shape(pos, Shape::Struct(StructType { fields }))
    }

    pub fn new_interface_type(&mut self, pos: Pos, methods: Vec<Field>) -> NodeId {
        self.new_shape(pos, Shape::Interface(InterfaceType { methods }))
    }

    pub fn new_func_type(
        &mut self,
        pos: Pos,
        recv: Option<Field>,
        params: Vec<Field>,
        results: Vec<Field>,
    ) -> NodeId {
        self.new_shape(
            pos,
            Shape::Func(FuncType {
                recv,
                params,
                results,
            }),
        )
    }

    pub fn new_slice_type(&mut self, pos: Pos, elem: NodeId) -> NodeId {
        self.new_shape(pos, Shape::Slice(SliceType { elem, ddd: false }))
    }

    /// `[len]elem`, or `[...]elem` when `len` is absent.
    pub fn new_array_type(&mut self, pos: Pos, len: Option<NodeId>, elem: NodeId) -> NodeId {
        self.new_shape(pos, Shape::Array(ArrayType { len, elem }))
    }

    // ========== Resolution ==========

    /// Replace unresolved syntax by its resolved type.
    ///
    /// Registration of a canonical node is the caller's business; see
    /// [`IrContext::bind`](crate::IrContext::bind).
    pub(crate) fn bind(&mut self, id: NodeId, ty: TypeId) -> Result<(), InvariantViolation> {
        let node = self.get_mut(id);
        let op = node.op();
        let NodeKind::Type(syntax) = node.kind_mut() else {
            return Err(InvariantViolation::NotTypeSyntax { node: id, op });
        };

        let current = std::mem::replace(syntax, TypeSyntax::Resolved(ty));
        match current.bind(ty) {
            Ok(bound) => {
                *syntax = bound;
                Ok(())
            }
            Err(existing) => {
                *syntax = TypeSyntax::Resolved(existing);
                Err(InvariantViolation::DoubleBind { node: id, existing })
            }
        }
    }

    // ========== Traversal ==========

    /// Visit the children of `id` in order, stopping at the first error.
    pub fn do_children<E>(
        &self,
        id: NodeId,
        mut visit: impl FnMut(NodeId) -> Result<(), E>,
    ) -> Result<(), E> {
        self.get(id).kind().do_children(&mut visit)
    }

    /// Replace each child of `id` with `edit`'s result.
    ///
    /// `edit` may allocate. Field declarations must stay Names and field
    /// types must stay type syntax.
    pub fn edit_children(
        &mut self,
        id: NodeId,
        mut edit: impl FnMut(&mut NodeArena, NodeId) -> NodeId,
    ) {
        let mut kind = self.get(id).kind().clone();
        kind.edit_children(&mut |child| edit(&mut *self, child));
        if let NodeKind::Type(TypeSyntax::Unresolved(shape)) = &kind {
            for field in shape.fields() {
                ensure_field_kinds(self, field);
            }
        }
        *self.get_mut(id).kind_mut() = kind;
    }

    // ========== Copying ==========

    /// Shallow copy: a new node with the same record.
    ///
    /// Children are shared with the original; field lists are not.
    pub fn copy(&mut self, id: NodeId) -> NodeId {
        let node = self.get(id).clone();
        self.push(node)
    }

    /// Deep copy of the subtree rooted at `id`.
    ///
    /// Resolved nodes and declarations are returned as is. Everything else
    /// is duplicated; a known `pos` becomes the position of every copy,
    /// an unknown one keeps each piece's own position.
    pub fn deep_copy(&mut self, pos: Pos, id: NodeId) -> NodeId {
        let node = self.get(id);
        let at = pos.or(node.pos());
        match node.kind() {
            NodeKind::Name(_) | NodeKind::TypeShell(_) | NodeKind::Type(TypeSyntax::Resolved(_)) => {
                id
            }
            NodeKind::Ident(_) | NodeKind::Literal(_) => {
                let kind = node.kind().clone();
                self.alloc(at, kind)
            }
            NodeKind::Type(TypeSyntax::Unresolved(shape)) => {
                let shape = shape.clone();
                self.deep_copy_shape(pos, at, shape)
            }
        }
    }

    fn deep_copy_shape(&mut self, pos: Pos, at: Pos, shape: Shape) -> NodeId {
        match shape {
            Shape::Chan(ChanType { elem, dir }) => {
                let elem = self.deep_copy(pos, elem);
                self.new_chan_type(at, elem, dir)
            }
            Shape::Map(MapType { key, elem }) => {
                let key = self.deep_copy(pos, key);
                let elem = self.deep_copy(pos, elem);
                self.new_map_type(at, key, elem)
            }
            Shape::Struct(StructType { fields }) => {
                let fields = deep_copy_fields(self, pos, &fields);
                self.new_struct_type(at, fields)
            }
            Shape::Interface(InterfaceType { methods }) => {
                let methods = deep_copy_fields(self, pos, &methods);
                self.new_interface_type(at, methods)
            }
            Shape::Func(FuncType {
                recv,
                params,
                results,
            }) => {
                let recv = recv.map(|recv| recv.deep_copy(self, pos));
                let params = deep_copy_fields(self, pos, &params);
                let results = deep_copy_fields(self, pos, &results);
                self.new_func_type(at, recv, params, results)
            }
            Shape::Slice(SliceType { elem, ddd }) => {
                let elem = self.deep_copy(pos, elem);
                self.new_shape(at, Shape::Slice(SliceType { elem, ddd }))
            }
            Shape::Array(ArrayType { len, elem }) => {
                let len = len.map(|len| self.deep_copy(pos, len));
                let elem = self.deep_copy(pos, elem);
                self.new_array_type(at, len, elem)
            }
        }
    }
}
