use tysyn_core::Pos;

use crate::node::{NodeKind, Op};
use crate::shape::ChanDir;
use crate::test_utils::Fixture;

#[test]
fn bind_sets_type_and_drops_children() {
    let mut fx = Fixture::new();
    let key = fx.ident("string");
    let elem = fx.ident("int");
    let map = fx.ctx.nodes_mut().new_map_type(Pos::UNKNOWN, key, elem);
    let ty = fx.ctx.literal_type("map[string]int");

    fx.ctx.bind(map, ty);

    let node = fx.ctx.node(map);
    assert_eq!(node.ty(), Some(ty));
    assert_eq!(node.op(), Op::Type);
    assert!(node.is_resolved());
    assert!(node.shape().is_none());
    assert!(fx.children(map).is_empty());
}

#[test]
fn bound_struct_renders_as_type_name() {
    let mut fx = Fixture::new();
    let x = fx.field("X", "int");
    let st = fx.ctx.nodes_mut().new_struct_type(Pos::UNKNOWN, vec![x]);
    let s = fx.named_type("S");

    fx.ctx.bind(st, s);

    assert_eq!(fx.ctx.node_string(st), "S");
    assert!(fx.ctx.nodes_mut().get_mut(st).shape_mut().is_none());
    assert!(fx.children(st).is_empty());
}

#[test]
#[should_panic(expected = "SetType: type already set to t0")]
fn second_bind_is_fatal() {
    let mut fx = Fixture::new();
    let elem = fx.ident("int");
    let slice = fx.ctx.nodes_mut().new_slice_type(Pos::UNKNOWN, elem);
    let first = fx.ctx.literal_type("[]int");
    let second = fx.ctx.literal_type("[]uint");

    fx.ctx.bind(slice, first);
    fx.ctx.bind(slice, second);
}

#[test]
fn failed_bind_keeps_first_type() {
    let mut fx = Fixture::new();
    let elem = fx.ident("int");
    let slice = fx.ctx.nodes_mut().new_slice_type(Pos::UNKNOWN, elem);
    let first = fx.ctx.literal_type("[]int");
    let second = fx.ctx.literal_type("[]uint");
    fx.ctx.bind(slice, first);

    let err = fx.ctx.nodes_mut().bind(slice, second).unwrap_err();

    assert_eq!(err.to_string(), "n1 SetType: type already set to t0");
    assert_eq!(fx.ctx.node(slice).ty(), Some(first));
}

#[test]
#[should_panic(expected = "(Ident) cannot be bound to a type")]
fn binding_ident_is_fatal() {
    let mut fx = Fixture::new();
    let id = fx.ident("int");
    let ty = fx.named_type("int");

    fx.ctx.bind(id, ty);
}

#[test]
#[should_panic(expected = "(Type) cannot be bound to a type")]
fn binding_shell_is_fatal() {
    let mut fx = Fixture::new();
    let ty = fx.named_type("T");
    let shell = fx.ctx.type_node(ty);

    fx.ctx.bind(shell, ty);
}

#[test]
fn first_bound_node_becomes_canonical() {
    let mut fx = Fixture::new();
    let a_elem = fx.ident("int");
    let b_elem = fx.ident("int");
    let a = fx.ctx.nodes_mut().new_slice_type(Pos::UNKNOWN, a_elem);
    let b = fx.ctx.nodes_mut().new_slice_type(Pos::UNKNOWN, b_elem);
    let ty = fx.ctx.literal_type("[]int");

    fx.ctx.bind(a, ty);
    fx.ctx.bind(b, ty);

    assert_eq!(fx.ctx.canonical(ty), Some(a));
    assert_eq!(fx.ctx.canon().len(), 1);
    assert_eq!(fx.ctx.node(b).ty(), Some(ty));
}

#[test]
fn type_node_returns_canonical_node() {
    let mut fx = Fixture::new();
    let elem = fx.ident("int");
    let chan = fx
        .ctx
        .nodes_mut()
        .new_chan_type(Pos::UNKNOWN, elem, ChanDir::Both);
    let ty = fx.ctx.literal_type("chan int");
    fx.ctx.bind(chan, ty);
    let before = fx.ctx.nodes().len();

    assert_eq!(fx.ctx.type_node(ty), chan);
    assert_eq!(fx.ctx.type_node(ty), chan);
    assert_eq!(fx.ctx.nodes().len(), before);
}

#[test]
fn type_node_without_canonical_builds_unregistered_shell() {
    let mut fx = Fixture::new();
    let ty = fx.named_type("T");

    let first = fx.ctx.type_node(ty);
    let second = fx.ctx.type_node(ty);

    assert_ne!(first, second);
    assert_eq!(fx.ctx.canonical(ty), None);
    let shell = fx.ctx.node(first);
    assert_eq!(shell.kind(), &NodeKind::TypeShell(ty));
    assert_eq!(shell.pos(), Pos::UNKNOWN);
    assert_eq!(shell.op(), Op::Type);
    assert!(fx.children(first).is_empty());
}

#[test]
fn later_bind_takes_over_from_unregistered_shell() {
    let mut fx = Fixture::new();
    let ty = fx.named_type("T");
    let shell = fx.ctx.type_node(ty);
    let elem = fx.ident("int");
    let slice = fx.ctx.nodes_mut().new_slice_type(Pos::UNKNOWN, elem);

    fx.ctx.bind(slice, ty);

    assert_eq!(fx.ctx.type_node(ty), slice);
    assert_eq!(fx.ctx.node(shell).ty(), Some(ty));
}

#[test]
fn registered_shell_is_reused() {
    let mut fx = Fixture::new();
    let ty = fx.named_type("T");
    let shell = fx.ctx.type_node(ty);

    assert!(fx.ctx.canon_mut().set_if_absent(ty, shell));

    assert_eq!(fx.ctx.type_node(ty), shell);
}

#[test]
#[should_panic(expected = "type skew: n1 has type t1, but expected t0")]
fn canonical_bound_to_other_type_is_fatal() {
    let mut fx = Fixture::new();
    let expected = fx.named_type("A");
    let other = fx.named_type("B");
    let elem = fx.ident("int");
    let slice = fx.ctx.nodes_mut().new_slice_type(Pos::UNKNOWN, elem);
    fx.ctx.bind(slice, other);
    fx.ctx.canon_mut().set_if_absent(expected, slice);

    fx.ctx.type_node(expected);
}

#[test]
#[should_panic(expected = "type skew: n0 has type <nil>, but expected t0")]
fn unresolved_canonical_is_fatal() {
    let mut fx = Fixture::new();
    let ty = fx.named_type("A");
    let id = fx.ident("A");
    fx.ctx.canon_mut().set_if_absent(ty, id);

    fx.ctx.type_node(ty);
}

#[test]
fn sym_of_shell_is_its_types_symbol() {
    let mut fx = Fixture::new();
    let named = fx.named_type("Reader");
    let unnamed = fx.ctx.literal_type("[]byte");

    let shell = fx.ctx.type_node(named);
    let anon = fx.ctx.type_node(unnamed);

    assert_eq!(fx.ctx.sym(shell), fx.ctx.interner().lookup("Reader"));
    assert_eq!(fx.ctx.sym(anon), None);
}

#[test]
fn sym_of_leaves_and_shapes() {
    let mut fx = Fixture::new();
    let sym = fx.ctx.intern("x");
    let name = fx.ctx.nodes_mut().new_name(Pos::UNKNOWN, sym);
    let ident = fx.ident("int");
    let slice = fx.ctx.nodes_mut().new_slice_type(Pos::UNKNOWN, ident);

    assert_eq!(fx.ctx.sym(name), Some(sym));
    assert_eq!(fx.ctx.sym(ident), fx.ctx.interner().lookup("int"));
    assert_eq!(fx.ctx.sym(slice), None);
}

#[test]
fn type_syntax_is_never_implicit() {
    let mut fx = Fixture::new();
    let elem = fx.ident("int");
    let slice = fx.ctx.nodes_mut().new_slice_type(Pos::UNKNOWN, elem);
    let lit = fx.ctx.nodes_mut().new_literal(Pos::UNKNOWN, "3");

    assert!(!fx.ctx.node(slice).is_implicit());
    assert!(fx.ctx.node(slice).can_be_ntype());
    assert!(fx.ctx.node(elem).can_be_ntype());
    assert!(!fx.ctx.node(lit).can_be_ntype());
}

#[test]
fn contexts_are_independent() {
    let mut one = Fixture::new();
    let mut two = Fixture::new();
    let ty_one = one.named_type("T");
    let ty_two = two.named_type("T");
    let elem = one.ident("int");
    let slice = one.ctx.nodes_mut().new_slice_type(Pos::UNKNOWN, elem);

    one.ctx.bind(slice, ty_one);

    assert_eq!(one.ctx.canonical(ty_one), Some(slice));
    assert_eq!(two.ctx.canonical(ty_two), None);
}
