//! Small shared helpers.

pub mod countdown;

pub use countdown::format_mmss;
