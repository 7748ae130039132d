//! Report renderers for an annotation run.
//!
//! - [`terminal`]: colored summary box on stderr; stdout carries only the annotated stream.

pub mod terminal;
