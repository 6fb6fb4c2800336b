//! File system access for a fix run.
//!
//! Discovery is the only directory-level operation; per-file reads and
//! writes live next to the code that needs them.

pub mod walk;

pub use walk::discover_files;
