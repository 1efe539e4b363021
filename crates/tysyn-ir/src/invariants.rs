//! Invariant checks excluded from coverage reports.
//!
//! A violation means an upstream pass misused the IR. Compilation cannot
//! continue, so every check ends in [`fatal`].

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::InvariantViolation;
use crate::arena::NodeArena;
use crate::field::Field;
use crate::node::{NodeId, NodeKind};
use crate::types::TypeId;

/// Abort compilation with an internal compiler error.
#[cold]
#[track_caller]
pub fn fatal(violation: InvariantViolation) -> ! {
    tracing::error!(%violation, "internal compiler error");
    panic!("{violation}")
}

/// A rewritten field must still declare a Name and still be typed by type syntax.
pub(crate) fn ensure_field_kinds(nodes: &NodeArena, field: &Field) {
    if let Some(decl) = field.decl {
        let decl = nodes.get(decl);
        if !matches!(decl.kind(), NodeKind::Name(_)) {
            fatal(InvariantViolation::DeclNotName { op: decl.op() });
        }
    }
    if let Some(ntype) = field.ntype {
        let ntype = nodes.get(ntype);
        if !ntype.can_be_ntype() {
            fatal(InvariantViolation::NotNtype { op: ntype.op() });
        }
    }
}

/// A canonical node must resolve back to the type it is canonical for.
pub(crate) fn ensure_type_agrees(nodes: &NodeArena, node: NodeId, expected: TypeId) {
    let found = nodes.get(node).ty();
    if found != Some(expected) {
        fatal(InvariantViolation::TypeSkew {
            node,
            found,
            expected,
        });
    }
}
