use serde::{Deserialize, Serialize};

/// One node of the syntax tree.
///
/// Collection variants own their children in source order; atom variants own
/// the lexical text of the literal (delimiters included where the source had
/// them, e.g. `:kw`, `\newline`, `"s"` content handling aside). `Newline` and
/// `Comment` are layout nodes and participate in the tree like any other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Node {
    List(Vec<Node>),
    Vector(Vec<Node>),
    Map(Vec<Node>),
    Set(Vec<Node>),
    FnLiteral(Vec<Node>),
    Symbol(String),
    Keyword(String),
    StringLit(String),
    Number(String),
    CharLiteral(String),
    LambdaArg(String),
    Comment(String),
    Newline,
}

impl Node {
    /// The node's children, or `None` for atoms.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::List(c) | Node::Vector(c) | Node::Map(c) | Node::Set(c) | Node::FnLiteral(c) => {
                Some(c)
            }
            _ => None,
        }
    }

    /// Mutable access to the node's children, or `None` for atoms.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::List(c) | Node::Vector(c) | Node::Map(c) | Node::Set(c) | Node::FnLiteral(c) => {
                Some(c)
            }
            _ => None,
        }
    }

    /// Replace the node's children wholesale. Calling this on an atom is a
    /// programming-contract violation and panics.
    pub fn set_children(&mut self, children: Vec<Node>) {
        match self.children_mut() {
            Some(c) => *c = children,
            None => panic!("set_children on an atom node"),
        }
    }

    pub fn is_newline(&self) -> bool {
        matches!(self, Node::Newline)
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, Node::Comment(_))
    }

    pub fn is_vector(&self) -> bool {
        matches!(self, Node::Vector(_))
    }

    pub fn is_keyword(&self) -> bool {
        matches!(self, Node::Keyword(_))
    }

    pub fn is_list_or_vector(&self) -> bool {
        matches!(self, Node::List(_) | Node::Vector(_))
    }

    /// Whether the node contributes meaning rather than layout. Newlines and
    /// comments are layout; everything else is semantic.
    pub fn is_semantic(&self) -> bool {
        !self.is_newline() && !self.is_comment()
    }

    /// The symbol text if this is a symbol node.
    pub fn symbol_text(&self) -> Option<&str> {
        match self {
            Node::Symbol(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Whether this is a list whose first child is the given symbol,
    /// e.g. a `(defn ...)` form.
    pub fn is_fn_form_symbol(&self, name: &str) -> bool {
        matches!(self, Node::List(c) if c.first().and_then(Node::symbol_text) == Some(name))
    }

    /// Whether this is a list whose first child is one of the given keywords,
    /// e.g. a `(:require ...)` clause inside `ns`.
    pub fn is_fn_form_keyword(&self, names: &[&str]) -> bool {
        match self {
            Node::List(c) => match c.first() {
                Some(Node::Keyword(kw)) => names.contains(&kw.as_str()),
                _ => false,
            },
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clj::testing::{kw, list, nl, sym, vector};

    #[test]
    fn test_children_on_collections_and_atoms() {
        let coll = list(vec![sym("a"), nl()]);
        assert_eq!(coll.children().unwrap().len(), 2);
        assert!(sym("a").children().is_none());
        assert!(Node::Newline.children().is_none());
    }

    #[test]
    fn test_set_children_replaces() {
        let mut coll = vector(vec![sym("a")]);
        coll.set_children(vec![sym("b"), sym("c")]);
        assert_eq!(coll, vector(vec![sym("b"), sym("c")]));
    }

    #[test]
    #[should_panic(expected = "set_children on an atom node")]
    fn test_set_children_on_atom_panics() {
        sym("a").set_children(vec![]);
    }

    #[test]
    fn test_discrimination_helpers() {
        assert!(vector(vec![]).is_vector());
        assert!(!list(vec![]).is_vector());
        assert!(kw(":a").is_keyword());
        assert!(!sym("a").is_keyword());
        assert!(list(vec![]).is_list_or_vector());
        assert!(vector(vec![]).is_list_or_vector());
        assert!(!Node::Map(vec![]).is_list_or_vector());
    }

    #[test]
    fn test_is_semantic() {
        assert!(sym("a").is_semantic());
        assert!(list(vec![]).is_semantic());
        assert!(!Node::Newline.is_semantic());
        assert!(!Node::Comment("; x".to_string()).is_semantic());
    }

    #[test]
    fn test_fn_form_symbol() {
        let defn = list(vec![sym("defn"), sym("f")]);
        assert!(defn.is_fn_form_symbol("defn"));
        assert!(!defn.is_fn_form_symbol("def"));
        assert!(!vector(vec![sym("defn")]).is_fn_form_symbol("defn"));
        assert!(!list(vec![]).is_fn_form_symbol("defn"));
    }

    #[test]
    fn test_fn_form_keyword() {
        let require = list(vec![kw(":require"), sym("a.b")]);
        assert!(require.is_fn_form_keyword(&[":require", ":use"]));
        assert!(!require.is_fn_form_keyword(&[":import"]));
        assert!(!list(vec![sym(":require")]).is_fn_form_keyword(&[":require"]));
    }
}
