use crate::Interner;

#[test]
fn intern_deduplicates() {
    let mut interner = Interner::new();

    let a = interner.intern("Elem");
    let b = interner.intern("Elem");
    let c = interner.intern("Key");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.len(), 2);
}

#[test]
fn resolve_returns_original_text() {
    let mut interner = Interner::new();

    let sym = interner.intern("X");
    assert_eq!(interner.resolve(sym), "X");
}

#[test]
fn lookup_does_not_insert() {
    let mut interner = Interner::new();
    let x = interner.intern("x");

    assert_eq!(interner.lookup("x"), Some(x));
    assert_eq!(interner.lookup("y"), None);
    assert_eq!(interner.len(), 1);
}

#[test]
fn symbol_ordering_is_insertion_order() {
    let mut interner = Interner::new();

    let z = interner.intern("z");
    let a = interner.intern("a");

    assert!(z < a);
    assert_eq!(z.as_u32(), 0);
    assert_eq!(a.as_u32(), 1);
}

#[test]
fn empty_interner() {
    let interner = Interner::default();
    assert!(interner.is_empty());
}

#[test]
#[should_panic(expected = "out of range")]
fn resolve_foreign_symbol_panics() {
    let mut other = Interner::new();
    other.intern("a");
    let foreign = other.intern("b");

    let mut interner = Interner::new();
    interner.intern("only");
    interner.resolve(foreign);
}
