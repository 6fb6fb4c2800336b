//! Source rewriting rules.

pub mod kotlin;

pub use kotlin::{Declaration, PackageRules, fix_file};
