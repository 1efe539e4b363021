//! Resolved types, as far as type-syntax nodes need to know about them.
//!
//! The checker owns the real type representation. Nodes only refer to a
//! type by `TypeId`, render it by name, and ask for its declaring symbol.

use std::collections::HashMap;
use std::fmt;

use tysyn_core::Symbol;

/// Interned type identifier.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TypeId(u32);

impl TypeId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ResolvedType {
    /// Rendered form, e.g. `S` or `map[string]int`.
    pub name: String,
    /// Declaring symbol of a defined type; `None` for type literals.
    pub sym: Option<Symbol>,
}

/// Registry of resolved types, deduplicated by rendered name.
#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    types: Vec<ResolvedType>,
    by_name: HashMap<String, TypeId>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a defined type declared as `sym`.
    pub fn named(&mut self, sym: Symbol, name: &str) -> TypeId {
        self.intern(ResolvedType {
            name: name.to_owned(),
            sym: Some(sym),
        })
    }

    /// Intern an unnamed type by its rendered form.
    pub fn literal(&mut self, repr: &str) -> TypeId {
        self.intern(ResolvedType {
            name: repr.to_owned(),
            sym: None,
        })
    }

    fn intern(&mut self, ty: ResolvedType) -> TypeId {
        if let Some(&id) = self.by_name.get(&ty.name) {
            return id;
        }

        let id = TypeId(self.types.len() as u32);
        self.by_name.insert(ty.name.clone(), id);
        self.types.push(ty);
        id
    }

    pub fn get(&self, id: TypeId) -> Option<&ResolvedType> {
        self.types.get(id.index())
    }

    /// Rendered name of a type; `<invalid>` for ids from another table.
    pub fn name(&self, id: TypeId) -> &str {
        self.get(id).map_or("<invalid>", |ty| ty.name.as_str())
    }

    pub fn sym(&self, id: TypeId) -> Option<Symbol> {
        self.get(id).and_then(|ty| ty.sym)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
