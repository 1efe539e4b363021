//! Fields: declared struct fields, interface methods, and func params/results.
//!
//! A Field is not a node. Its owner reaches the Field's subtrees only
//! through the list helpers here, which visit a field's declaration
//! before its type syntax.

use tysyn_core::{Pos, Symbol};

use crate::arena::NodeArena;
use crate::node::NodeId;
use crate::types::TypeId;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Field {
    pub pos: Pos,
    pub sym: Option<Symbol>,
    /// Type as written.
    pub ntype: Option<NodeId>,
    /// Type once known.
    pub ty: Option<TypeId>,
    pub embedded: bool,
    /// Variadic (`...T`) parameter.
    pub is_ddd: bool,
    /// Struct tag.
    pub note: String,
    /// Name node this field declares. Referenced, not owned.
    pub decl: Option<NodeId>,
}

impl Field {
    pub fn new(pos: Pos, sym: Option<Symbol>, ntype: Option<NodeId>, ty: Option<TypeId>) -> Self {
        Self {
            pos,
            sym,
            ntype,
            ty,
            embedded: false,
            is_ddd: false,
            note: String::new(),
            decl: None,
        }
    }

    /// Copy the field and its type syntax.
    ///
    /// A known `pos` overrides the position of every copied piece.
    pub fn deep_copy(&self, nodes: &mut NodeArena, pos: Pos) -> Field {
        // No `..` here: a new attribute must be handled explicitly.
        let Field {
            pos: own_pos,
            sym,
            ntype,
            ty,
            embedded,
            is_ddd,
            note,
            decl,
        } = self;

        Field {
            pos: pos.or(*own_pos),
            sym: *sym,
            ntype: ntype.map(|ntype| nodes.deep_copy(pos, ntype)),
            ty: *ty,
            embedded: *embedded,
            is_ddd: *is_ddd,
            note: note.clone(),
            decl: decl.map(|decl| nodes.deep_copy(pos, decl)),
        }
    }
}

pub fn do_field<E>(
    field: Option<&Field>,
    visit: &mut dyn FnMut(NodeId) -> Result<(), E>,
) -> Result<(), E> {
    let Some(field) = field else {
        return Ok(());
    };
    if let Some(decl) = field.decl {
        visit(decl)?;
    }
    if let Some(ntype) = field.ntype {
        visit(ntype)?;
    }
    Ok(())
}

pub fn do_fields<E>(
    list: &[Field],
    visit: &mut dyn FnMut(NodeId) -> Result<(), E>,
) -> Result<(), E> {
    list.iter().try_for_each(|field| do_field(Some(field), visit))
}

pub fn edit_field(field: Option<&mut Field>, edit: &mut dyn FnMut(NodeId) -> NodeId) {
    let Some(field) = field else {
        return;
    };
    if let Some(decl) = &mut field.decl {
        *decl = edit(*decl);
    }
    if let Some(ntype) = &mut field.ntype {
        *ntype = edit(*ntype);
    }
}

pub fn edit_fields(list: &mut [Field], edit: &mut dyn FnMut(NodeId) -> NodeId) {
    for field in list {
        edit_field(Some(field), edit);
    }
}

pub fn deep_copy_fields(nodes: &mut NodeArena, pos: Pos, list: &[Field]) -> Vec<Field> {
    list.iter().map(|field| field.deep_copy(nodes, pos)).collect()
}
