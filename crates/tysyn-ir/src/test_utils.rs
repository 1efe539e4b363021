//! Test fixture: a context with a source and helpers for building syntax.

use tysyn_core::{Pos, SourceId};

use crate::context::IrContext;
use crate::field::Field;
use crate::node::NodeId;
use crate::types::TypeId;

pub struct Fixture {
    pub ctx: IrContext,
    src: SourceId,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            ctx: IrContext::new(),
            src: SourceId::from_raw(0),
        }
    }

    /// Byte range in the fixture's only source.
    pub fn pos(&self, start: u32, end: u32) -> Pos {
        Pos::at(self.src, start, end)
    }

    /// Identifier at an unknown position.
    pub fn ident(&mut self, name: &str) -> NodeId {
        let sym = self.ctx.intern(name);
        self.ctx.nodes_mut().new_ident(Pos::UNKNOWN, sym)
    }

    pub fn ident_at(&mut self, name: &str, pos: Pos) -> NodeId {
        let sym = self.ctx.intern(name);
        self.ctx.nodes_mut().new_ident(pos, sym)
    }

    /// `name T` where `T` is written as the identifier `ty`.
    pub fn field(&mut self, name: &str, ty: &str) -> Field {
        let sym = self.ctx.intern(name);
        let ntype = self.ident(ty);
        Field::new(Pos::UNKNOWN, Some(sym), Some(ntype), None)
    }

    /// Unnamed field written as the identifier `ty`.
    pub fn anon_field(&mut self, ty: &str) -> Field {
        let ntype = self.ident(ty);
        Field::new(Pos::UNKNOWN, None, Some(ntype), None)
    }

    /// Like [`Fixture::field`], also declaring a Name node for the field.
    pub fn declared_field(&mut self, name: &str, ty: &str) -> Field {
        let mut field = self.field(name, ty);
        let sym = self.ctx.intern(name);
        field.decl = Some(self.ctx.nodes_mut().new_name(Pos::UNKNOWN, sym));
        field
    }

    pub fn named_type(&mut self, name: &str) -> TypeId {
        self.ctx.named_type(name)
    }

    /// Children of `id` in `do_children` order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.ctx
            .nodes()
            .do_children(id, |child| {
                out.push(child);
                Ok::<(), ()>(())
            })
            .expect("collecting children never fails");
        out
    }

    pub fn dump(&self, id: NodeId) -> String {
        self.ctx.printer().dump(id)
    }
}
