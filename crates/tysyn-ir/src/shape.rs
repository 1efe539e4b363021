//! Type syntax shapes and their two-state lifecycle.
//!
//! A shape node is created unresolved by the parser. Binding consumes the
//! shape payload and leaves only the resolved type; there is no way back.

use crate::field::{Field, do_field, do_fields, edit_field, edit_fields};
use crate::node::{Children, NodeId, Op, maybe_do, maybe_edit};
use crate::types::TypeId;

/// Channel direction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ChanDir {
    /// `<-chan T`
    Recv,
    /// `chan<- T`
    Send,
    /// `chan T`
    Both,
}

/// `chan Elem`, with direction.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ChanType {
    pub elem: NodeId,
    pub dir: ChanDir,
}

/// `map[Key]Elem`
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MapType {
    pub key: NodeId,
    pub elem: NodeId,
}

/// `struct { ... }`
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StructType {
    pub fields: Vec<Field>,
}

/// `interface { ... }`
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct InterfaceType {
    pub methods: Vec<Field>,
}

/// `func(Params) Results`, with an optional method receiver.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FuncType {
    pub recv: Option<Field>,
    pub params: Vec<Field>,
    pub results: Vec<Field>,
}

/// `[]Elem`. With `ddd` set it is the `...Elem` ending a parameter list.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SliceType {
    pub elem: NodeId,
    pub ddd: bool,
}

/// `[Len]Elem`. Without `len` it is the `[...]Elem` of an array literal.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ArrayType {
    pub len: Option<NodeId>,
    pub elem: NodeId,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Shape {
    Chan(ChanType),
    Map(MapType),
    Struct(StructType),
    Interface(InterfaceType),
    Func(FuncType),
    Slice(SliceType),
    Array(ArrayType),
}

impl Shape {
    pub fn op(&self) -> Op {
        match self {
            Shape::Chan(_) => Op::ChanType,
            Shape::Map(_) => Op::MapType,
            Shape::Struct(_) => Op::StructType,
            Shape::Interface(_) => Op::InterfaceType,
            Shape::Func(_) => Op::FuncType,
            Shape::Slice(_) => Op::SliceType,
            Shape::Array(_) => Op::ArrayType,
        }
    }

    /// All fields of the shape in traversal order (receiver first for funcs).
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        let (recv, first, second) = match self {
            Shape::Struct(s) => (None, s.fields.as_slice(), &[][..]),
            Shape::Interface(i) => (None, i.methods.as_slice(), &[][..]),
            Shape::Func(f) => (f.recv.as_ref(), f.params.as_slice(), f.results.as_slice()),
            Shape::Chan(_) | Shape::Map(_) | Shape::Slice(_) | Shape::Array(_) => {
                (None, &[][..], &[][..])
            }
        };
        recv.into_iter().chain(first).chain(second)
    }
}

/// Type syntax in one of its two states.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TypeSyntax {
    /// As written by the parser.
    Unresolved(Shape),
    /// Bound by the checker. No children remain.
    Resolved(TypeId),
}

impl TypeSyntax {
    pub fn op(&self) -> Op {
        match self {
            TypeSyntax::Unresolved(shape) => shape.op(),
            TypeSyntax::Resolved(_) => Op::Type,
        }
    }

    pub fn ty(&self) -> Option<TypeId> {
        match self {
            TypeSyntax::Unresolved(_) => None,
            TypeSyntax::Resolved(ty) => Some(*ty),
        }
    }

    /// Bind to `ty`, dropping the shape payload.
    ///
    /// Fails with the already bound type if `self` is resolved.
    pub fn bind(self, ty: TypeId) -> Result<TypeSyntax, TypeId> {
        match self {
            TypeSyntax::Unresolved(_) => Ok(TypeSyntax::Resolved(ty)),
            TypeSyntax::Resolved(existing) => Err(existing),
        }
    }
}

impl Children for ChanType {
    fn do_children<E>(&self, visit: &mut dyn FnMut(NodeId) -> Result<(), E>) -> Result<(), E> {
        visit(self.elem)
    }

    fn edit_children(&mut self, edit: &mut dyn FnMut(NodeId) -> NodeId) {
        self.elem = edit(self.elem);
    }
}

impl Children for MapType {
    fn do_children<E>(&self, visit: &mut dyn FnMut(NodeId) -> Result<(), E>) -> Result<(), E> {
        visit(self.key)?;
        visit(self.elem)
    }

    fn edit_children(&mut self, edit: &mut dyn FnMut(NodeId) -> NodeId) {
        self.key = edit(self.key);
        self.elem = edit(self.elem);
    }
}

impl Children for StructType {
    fn do_children<E>(&self, visit: &mut dyn FnMut(NodeId) -> Result<(), E>) -> Result<(), E> {
        do_fields(&self.fields, visit)
    }

    fn edit_children(&mut self, edit: &mut dyn FnMut(NodeId) -> NodeId) {
        edit_fields(&mut self.fields, edit);
    }
}

impl Children for InterfaceType {
    fn do_children<E>(&self, visit: &mut dyn FnMut(NodeId) -> Result<(), E>) -> Result<(), E> {
        do_fields(&self.methods, visit)
    }

    fn edit_children(&mut self, edit: &mut dyn FnMut(NodeId) -> NodeId) {
        edit_fields(&mut self.methods, edit);
    }
}

impl Children for FuncType {
    fn do_children<E>(&self, visit: &mut dyn FnMut(NodeId) -> Result<(), E>) -> Result<(), E> {
        do_field(self.recv.as_ref(), visit)?;
        do_fields(&self.params, visit)?;
        do_fields(&self.results, visit)
    }

    fn edit_children(&mut self, edit: &mut dyn FnMut(NodeId) -> NodeId) {
        edit_field(self.recv.as_mut(), edit);
        edit_fields(&mut self.params, edit);
        edit_fields(&mut self.results, edit);
    }
}

impl Children for SliceType {
    fn do_children<E>(&self, visit: &mut dyn FnMut(NodeId) -> Result<(), E>) -> Result<(), E> {
        visit(self.elem)
    }

    fn edit_children(&mut self, edit: &mut dyn FnMut(NodeId) -> NodeId) {
        self.elem = edit(self.elem);
    }
}

impl Children for ArrayType {
    fn do_children<E>(&self, visit: &mut dyn FnMut(NodeId) -> Result<(), E>) -> Result<(), E> {
        maybe_do(self.len, visit)?;
        visit(self.elem)
    }

    fn edit_children(&mut self, edit: &mut dyn FnMut(NodeId) -> NodeId) {
        maybe_edit(&mut self.len, edit);
        self.elem = edit(self.elem);
    }
}

impl Children for Shape {
    fn do_children<E>(&self, visit: &mut dyn FnMut(NodeId) -> Result<(), E>) -> Result<(), E> {
        match self {
            Shape::Chan(n) => n.do_children(visit),
            Shape::Map(n) => n.do_children(visit),
            Shape::Struct(n) => n.do_children(visit),
            Shape::Interface(n) => n.do_children(visit),
            Shape::Func(n) => n.do_children(visit),
            Shape::Slice(n) => n.do_children(visit),
            Shape::Array(n) => n.do_children(visit),
        }
    }

    fn edit_children(&mut self, edit: &mut dyn FnMut(NodeId) -> NodeId) {
        match self {
            Shape::Chan(n) => n.edit_children(edit),
            Shape::Map(n) => n.edit_children(edit),
            Shape::Struct(n) => n.edit_children(edit),
            Shape::Interface(n) => n.edit_children(edit),
            Shape::Func(n) => n.edit_children(edit),
            Shape::Slice(n) => n.edit_children(edit),
            Shape::Array(n) => n.edit_children(edit),
        }
    }
}

impl Children for TypeSyntax {
    fn do_children<E>(&self, visit: &mut dyn FnMut(NodeId) -> Result<(), E>) -> Result<(), E> {
        match self {
            TypeSyntax::Unresolved(shape) => shape.do_children(visit),
            TypeSyntax::Resolved(_) => Ok(()),
        }
    }

    fn edit_children(&mut self, edit: &mut dyn FnMut(NodeId) -> NodeId) {
        if let TypeSyntax::Unresolved(shape) = self {
            shape.edit_children(edit);
        }
    }
}
