pub mod common;
pub mod idom;
pub mod stats;
pub mod tree;
