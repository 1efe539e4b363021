//! Node identity, kinds, and the child traversal protocol.

use std::fmt;

use tysyn_core::{Pos, Symbol};

use crate::shape::{Shape, TypeSyntax};
use crate::types::TypeId;

/// Handle to a node in a [`NodeArena`](crate::NodeArena).
///
/// Node identity is handle identity: two handles denote the same node
/// exactly when they are equal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub(crate) fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Operation tag of a node.
///
/// A bound shape and a canonical shell both report `Type`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Op {
    Name,
    Ident,
    Literal,
    ChanType,
    MapType,
    StructType,
    InterfaceType,
    FuncType,
    SliceType,
    ArrayType,
    Type,
}

impl Op {
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Name => "Name",
            Op::Ident => "Ident",
            Op::Literal => "Literal",
            Op::ChanType => "ChanType",
            Op::MapType => "MapType",
            Op::StructType => "StructType",
            Op::InterfaceType => "InterfaceType",
            Op::FuncType => "FuncType",
            Op::SliceType => "SliceType",
            Op::ArrayType => "ArrayType",
            Op::Type => "Type",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declared name, referenced by the field that introduces it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Name {
    pub sym: Symbol,
}

/// An identifier not yet resolved to a declaration, e.g. `int`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Ident {
    pub sym: Symbol,
}

/// A constant as written, e.g. an array length.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Literal {
    pub text: String,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum NodeKind {
    Name(Name),
    Ident(Ident),
    Literal(Literal),
    /// Type syntax as written, or bound to its resolved type.
    Type(TypeSyntax),
    /// Childless stand-in for a resolved type with no syntax of its own.
    TypeShell(TypeId),
}

impl NodeKind {
    pub fn op(&self) -> Op {
        match self {
            NodeKind::Name(_) => Op::Name,
            NodeKind::Ident(_) => Op::Ident,
            NodeKind::Literal(_) => Op::Literal,
            NodeKind::Type(syntax) => syntax.op(),
            NodeKind::TypeShell(_) => Op::Type,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Node {
    pos: Pos,
    kind: NodeKind,
}

impl Node {
    pub(crate) fn new(pos: Pos, kind: NodeKind) -> Self {
        Self { pos, kind }
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn set_pos(&mut self, pos: Pos) {
        self.pos = pos;
    }

    #[inline]
    pub fn op(&self) -> Op {
        self.kind.op()
    }

    #[inline]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub(crate) fn kind_mut(&mut self) -> &mut NodeKind {
        &mut self.kind
    }

    /// Resolved type, if this node has one.
    pub fn ty(&self) -> Option<TypeId> {
        match &self.kind {
            NodeKind::Type(syntax) => syntax.ty(),
            NodeKind::TypeShell(ty) => Some(*ty),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.ty().is_some()
    }

    /// Shape payload of unresolved type syntax.
    pub fn shape(&self) -> Option<&Shape> {
        match &self.kind {
            NodeKind::Type(TypeSyntax::Unresolved(shape)) => Some(shape),
            _ => None,
        }
    }

    /// Mutable shape payload. Bound nodes have none left to mutate.
    pub fn shape_mut(&mut self) -> Option<&mut Shape> {
        match &mut self.kind {
            NodeKind::Type(TypeSyntax::Unresolved(shape)) => Some(shape),
            _ => None,
        }
    }

    /// Own symbol of a Name or Ident. Type syntax has none.
    pub fn name_sym(&self) -> Option<Symbol> {
        match &self.kind {
            NodeKind::Name(name) => Some(name.sym),
            NodeKind::Ident(ident) => Some(ident.sym),
            _ => None,
        }
    }

    /// Type syntax is never implicit.
    pub fn is_implicit(&self) -> bool {
        false
    }

    /// Whether the node may stand where a type is expected.
    ///
    /// Names and identifiers may turn out to be types; literals never do.
    pub fn can_be_ntype(&self) -> bool {
        !matches!(self.kind, NodeKind::Literal(_))
    }
}

/// Uniform child traversal shared by every node kind.
///
/// Both operations see the same children in the same order. Absent
/// children are skipped.
pub trait Children {
    /// Visit each child in order, stopping at the first error.
    fn do_children<E>(&self, visit: &mut dyn FnMut(NodeId) -> Result<(), E>) -> Result<(), E>;

    /// Replace each child with `edit`'s result, in the same order.
    fn edit_children(&mut self, edit: &mut dyn FnMut(NodeId) -> NodeId);
}

impl Children for NodeKind {
    fn do_children<E>(&self, visit: &mut dyn FnMut(NodeId) -> Result<(), E>) -> Result<(), E> {
        match self {
            NodeKind::Type(syntax) => syntax.do_children(visit),
            NodeKind::Name(_)
            | NodeKind::Ident(_)
            | NodeKind::Literal(_)
            | NodeKind::TypeShell(_) => Ok(()),
        }
    }

    fn edit_children(&mut self, edit: &mut dyn FnMut(NodeId) -> NodeId) {
        if let NodeKind::Type(syntax) = self {
            syntax.edit_children(edit);
        }
    }
}

pub(crate) fn maybe_do<E>(
    child: Option<NodeId>,
    visit: &mut dyn FnMut(NodeId) -> Result<(), E>,
) -> Result<(), E> {
    match child {
        Some(id) => visit(id),
        None => Ok(()),
    }
}

pub(crate) fn maybe_edit(child: &mut Option<NodeId>, edit: &mut dyn FnMut(NodeId) -> NodeId) {
    if let Some(id) = child {
        *id = edit(*id);
    }
}
