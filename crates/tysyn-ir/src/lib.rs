//! Type-syntax nodes of the compiler IR.
//!
//! Nodes that record how a type was written (`chan E`, `map[K]V`,
//! `struct { ... }`, ...) before type checking. Once the checker resolves
//! one, the node is bound to its `TypeId`, drops its shape payload, and
//! from then on serves only as a shell around the type.
//!
//! - `node` / `shape` - node kinds, the two-state `TypeSyntax`, the `Children` protocol
//! - `field` - struct fields, interface methods, func params/results
//! - `arena` - node storage, construction, shallow and deep copy
//! - `context` - resolution: `bind` and the type-to-node conversion
//! - `canon` - side table of canonical nodes per resolved type
//! - `walk` - pre-order helpers over `do_children`
//! - `printer` - one-line rendering and tree dumps

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod arena;
pub mod canon;
pub mod context;
pub mod field;
pub mod invariants;
pub mod node;
pub mod printer;
pub mod shape;
pub mod types;
pub mod walk;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod context_tests;

pub use arena::NodeArena;
pub use canon::TypeNodes;
pub use context::IrContext;
pub use field::Field;
pub use node::{Children, Ident, Literal, Name, Node, NodeId, NodeKind, Op};
pub use printer::NodePrinter;
pub use shape::{
    ArrayType, ChanDir, ChanType, FuncType, InterfaceType, MapType, Shape, SliceType, StructType,
    TypeSyntax,
};
pub use types::{ResolvedType, TypeId, TypeTable};

pub use tysyn_core::{Interner, Pos, SourceId, Symbol};

/// Internal compiler errors raised by this crate.
///
/// Every variant means an upstream pass misused the IR; none is caused by
/// user input. They are reported through [`invariants::fatal`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    /// A node that already holds a resolved type was bound again.
    #[error("{node} SetType: type already set to {existing}")]
    DoubleBind { node: NodeId, existing: TypeId },

    /// A type's canonical node does not resolve back to that type.
    #[error("type skew: {node} has type {}, but expected {expected}", display_type(.found))]
    TypeSkew {
        node: NodeId,
        found: Option<TypeId>,
        expected: TypeId,
    },

    /// Only unresolved type syntax can be bound.
    #[error("{node} ({op}) cannot be bound to a type")]
    NotTypeSyntax { node: NodeId, op: Op },

    /// A field's declaration was rewritten into something other than a Name.
    #[error("field declaration rewritten to {op}, expected Name")]
    DeclNotName { op: Op },

    /// A field's type syntax was rewritten into a node that cannot denote a type.
    #[error("field type rewritten to {op}, which is not type syntax")]
    NotNtype { op: Op },

    #[error("{0} does not belong to this arena")]
    UnknownNode(NodeId),
}

fn display_type(ty: &Option<TypeId>) -> String {
    match ty {
        Some(ty) => ty.to_string(),
        None => "<nil>".to_owned(),
    }
}
