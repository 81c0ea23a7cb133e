//! CLI command implementations

pub mod annotate;

pub use annotate::AnnotateArgs;
