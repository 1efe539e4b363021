#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Collaborator value types shared by the tysyn crates.
//!
//! - **Positions** (`Pos`): where a node was written, or the unknown sentinel
//! - **Symbols** (`Symbol`, `Interner`): declared names as cheap handles

mod interner;
mod pos;

#[cfg(test)]
mod interner_tests;

pub use interner::{Interner, Symbol};
pub use pos::{Pos, SourceId};

pub use rowan::{TextRange, TextSize};
