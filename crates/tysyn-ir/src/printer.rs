//! Rendering of type-syntax nodes and fields.
//!
//! `node_string` renders a node the way it would be written; `NodePrinter`
//! dumps a subtree, one node per line.

use std::fmt::{self, Write};

use crate::context::IrContext;
use crate::field::Field;
use crate::node::{NodeId, NodeKind};
use crate::shape::{ArrayType, ChanDir, ChanType, MapType, Shape, SliceType, TypeSyntax};

impl IrContext {
    /// One-line rendering; a bound node renders as its type's name.
    pub fn node_string(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(&mut out, id)
            .expect("String write never fails");
        out
    }

    /// `name type`, or just `type` for unnamed fields.
    ///
    /// The resolved type wins over the syntax it was written as.
    pub fn field_string(&self, field: &Field) -> String {
        let typ = match (field.ty, field.ntype) {
            (Some(ty), _) => self.types().name(ty).to_owned(),
            (None, Some(ntype)) => self.node_string(ntype),
            (None, None) => "<nil>".to_owned(),
        };
        match field.sym {
            Some(sym) => format!("{} {}", self.interner().resolve(sym), typ),
            None => typ,
        }
    }

    pub fn printer(&self) -> NodePrinter<'_> {
        NodePrinter::new(self)
    }

    fn write_node(&self, w: &mut impl Write, id: NodeId) -> fmt::Result {
        match self.node(id).kind() {
            NodeKind::Name(name) => w.write_str(self.interner().resolve(name.sym)),
            NodeKind::Ident(ident) => w.write_str(self.interner().resolve(ident.sym)),
            NodeKind::Literal(lit) => w.write_str(&lit.text),
            NodeKind::TypeShell(ty) | NodeKind::Type(TypeSyntax::Resolved(ty)) => {
                w.write_str(self.types().name(*ty))
            }
            NodeKind::Type(TypeSyntax::Unresolved(shape)) => self.write_shape(w, shape),
        }
    }

    fn write_shape(&self, w: &mut impl Write, shape: &Shape) -> fmt::Result {
        match shape {
            Shape::Chan(ChanType { elem, dir }) => match dir {
                ChanDir::Recv => {
                    w.write_str("<-chan ")?;
                    self.write_node(w, *elem)
                }
                ChanDir::Send => {
                    w.write_str("chan<- ")?;
                    self.write_node(w, *elem)
                }
                // `chan <-chan T` would parse as `chan<- chan T`
                ChanDir::Both if self.is_recv_chan(*elem) => {
                    w.write_str("chan (")?;
                    self.write_node(w, *elem)?;
                    w.write_char(')')
                }
                ChanDir::Both => {
                    w.write_str("chan ")?;
                    self.write_node(w, *elem)
                }
            },
            Shape::Map(MapType { key, elem }) => {
                w.write_str("map[")?;
                self.write_node(w, *key)?;
                w.write_char(']')?;
                self.write_node(w, *elem)
            }
            Shape::Struct(_) => w.write_str("<struct>"),
            Shape::Interface(_) => w.write_str("<inter>"),
            Shape::Func(_) => w.write_str("<func>"),
            Shape::Slice(SliceType { elem, ddd }) => {
                w.write_str(if *ddd { "..." } else { "[]" })?;
                self.write_node(w, *elem)
            }
            Shape::Array(ArrayType { len, elem }) => {
                w.write_char('[')?;
                match len {
                    Some(len) => self.write_node(w, *len)?,
                    None => w.write_str("...")?,
                }
                w.write_char(']')?;
                self.write_node(w, *elem)
            }
        }
    }

    fn is_recv_chan(&self, id: NodeId) -> bool {
        matches!(
            self.node(id).shape(),
            Some(Shape::Chan(ChanType {
                dir: ChanDir::Recv,
                ..
            }))
        )
    }
}

/// Tree dump of a node and its children.
pub struct NodePrinter<'a> {
    ctx: &'a IrContext,
    positions: bool,
    fields: bool,
}

impl<'a> NodePrinter<'a> {
    pub fn new(ctx: &'a IrContext) -> Self {
        Self {
            ctx,
            positions: false,
            fields: true,
        }
    }

    /// Print each node's position after its op.
    pub fn with_positions(mut self, value: bool) -> Self {
        self.positions = value;
        self
    }

    /// Group struct, interface, and func children under their fields.
    /// When off, children are listed flat as `do_children` reports them.
    pub fn with_fields(mut self, value: bool) -> Self {
        self.fields = value;
        self
    }

    pub fn dump(&self, root: NodeId) -> String {
        let mut out = String::new();
        self.format(root, &mut out)
            .expect("String write never fails");
        out
    }

    pub fn format(&self, root: NodeId, w: &mut impl Write) -> fmt::Result {
        self.format_node(root, 0, w)
    }

    fn format_node(&self, id: NodeId, indent: usize, w: &mut impl Write) -> fmt::Result {
        let node = self.ctx.node(id);
        write!(w, "{}{}", "  ".repeat(indent), node.op())?;
        if self.positions {
            write!(w, " [{}]", node.pos())?;
        }

        match node.kind() {
            NodeKind::Name(_) | NodeKind::Ident(_) | NodeKind::Literal(_) => {
                write!(w, " {}", self.ctx.node_string(id))?
            }
            NodeKind::TypeShell(ty) | NodeKind::Type(TypeSyntax::Resolved(ty)) => {
                write!(w, " {}", self.ctx.types().name(*ty))?
            }
            NodeKind::Type(TypeSyntax::Unresolved(shape)) => match shape {
                Shape::Chan(chan) => w.write_str(match chan.dir {
                    ChanDir::Recv => " <-chan",
                    ChanDir::Send => " chan<-",
                    ChanDir::Both => " chan",
                })?,
                Shape::Slice(SliceType { ddd: true, .. }) => w.write_str(" ...")?,
                _ => {}
            },
        }
        writeln!(w)?;

        if self.fields {
            if let Some(shape) = node.shape() {
                match shape {
                    Shape::Struct(s) => {
                        return self.format_fields("Field", &s.fields, indent + 1, w);
                    }
                    Shape::Interface(i) => {
                        return self.format_fields("Method", &i.methods, indent + 1, w);
                    }
                    Shape::Func(f) => {
                        if let Some(recv) = &f.recv {
                            self.format_field("Recv", recv, indent + 1, w)?;
                        }
                        self.format_fields("Param", &f.params, indent + 1, w)?;
                        return self.format_fields("Result", &f.results, indent + 1, w);
                    }
                    _ => {}
                }
            }
        }

        self.ctx
            .nodes()
            .do_children(id, |child| self.format_node(child, indent + 1, w))
    }

    fn format_fields(
        &self,
        label: &str,
        fields: &[Field],
        indent: usize,
        w: &mut impl Write,
    ) -> fmt::Result {
        for field in fields {
            self.format_field(label, field, indent, w)?;
        }
        Ok(())
    }

    fn format_field(
        &self,
        label: &str,
        field: &Field,
        indent: usize,
        w: &mut impl Write,
    ) -> fmt::Result {
        write!(w, "{}{}", "  ".repeat(indent), label)?;
        if self.positions {
            write!(w, " [{}]", field.pos)?;
        }
        if let Some(sym) = field.sym {
            write!(w, " {}", self.ctx.interner().resolve(sym))?;
        }
        if field.embedded {
            w.write_str(" embedded")?;
        }
        if field.is_ddd {
            w.write_str(" ...")?;
        }
        if !field.note.is_empty() {
            write!(w, " {:?}", field.note)?;
        }
        if let Some(ty) = field.ty {
            write!(w, " : {}", self.ctx.types().name(ty))?;
        }
        writeln!(w)?;

        if let Some(decl) = field.decl {
            self.format_node(decl, indent + 1, w)?;
        }
        if let Some(ntype) = field.ntype {
            self.format_node(ntype, indent + 1, w)?;
        }
        Ok(())
    }
}
