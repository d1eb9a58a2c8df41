//! Construction helpers for tests.
//!
//! Building trees out of enum literals is noisy; these factories keep test
//! fixtures close to the shape of the Clojure source they model. Public so
//! integration tests and downstream crates can use them too.

mod factories;

pub use factories::{
    comment, fn_literal, kw, list, map_node, nl, num, set_node, string_lit, sym, tree, vector,
};
