mod verify;

pub use verify::{contains_marker, find_stragglers};
