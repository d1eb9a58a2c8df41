use crate::clj::ast::{Node, Tree};

pub fn list(children: Vec<Node>) -> Node {
    Node::List(children)
}

pub fn vector(children: Vec<Node>) -> Node {
    Node::Vector(children)
}

pub fn map_node(children: Vec<Node>) -> Node {
    Node::Map(children)
}

pub fn set_node(children: Vec<Node>) -> Node {
    Node::Set(children)
}

pub fn fn_literal(children: Vec<Node>) -> Node {
    Node::FnLiteral(children)
}

pub fn sym(text: &str) -> Node {
    Node::Symbol(text.to_string())
}

/// Keyword node; pass the text with its leading colon, e.g. `kw(":require")`.
pub fn kw(text: &str) -> Node {
    Node::Keyword(text.to_string())
}

pub fn string_lit(text: &str) -> Node {
    Node::StringLit(text.to_string())
}

pub fn num(text: &str) -> Node {
    Node::Number(text.to_string())
}

pub fn comment(text: &str) -> Node {
    Node::Comment(text.to_string())
}

pub fn nl() -> Node {
    Node::Newline
}

pub fn tree(roots: Vec<Node>) -> Tree {
    Tree::new(roots)
}
