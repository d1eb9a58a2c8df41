//! The syntax tree the transform passes operate on.
//!
//! The tree is lossless with respect to layout: newlines and comments are
//! ordinary nodes, so rearranging children rearranges the printed output.
//! Atoms carry their lexical text verbatim; no literal is parsed or
//! normalized at this layer.

mod node;

pub use node::Node;

use serde::{Deserialize, Serialize};

/// A parsed source file: the sequence of its top-level forms, layout nodes
/// included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    pub roots: Vec<Node>,
}

impl Tree {
    pub fn new(roots: Vec<Node>) -> Tree {
        Tree { roots }
    }
}
