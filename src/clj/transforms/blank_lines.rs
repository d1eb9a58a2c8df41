//! Vertical-whitespace passes: trailing-newline trimming and blank-line
//! collapsing.

use crate::clj::ast::Node;

/// Trim newlines sitting directly before a closing delimiter, recursively.
/// A comment in the second-to-last slot stops the trim so the comment keeps
/// the newline that puts the delimiter on its own line.
pub(super) fn remove_trailing_newlines(node: &mut Node) {
    if let Some(children) = node.children_mut() {
        while let Some(last) = children.last() {
            if !last.is_newline() {
                break;
            }
            if children.len() >= 2 && children[children.len() - 2].is_comment() {
                break;
            }
            children.pop();
        }
        for child in children.iter_mut() {
            remove_trailing_newlines(child);
        }
    }
}

/// Collapse runs of three or more newlines down to two, recursively.
pub(super) fn remove_extra_blank_lines_recursive(node: &mut Node) {
    if let Some(children) = node.children_mut() {
        if children.len() > 2 {
            let trimmed = remove_extra_blank_lines(std::mem::take(children));
            *children = trimmed;
        }
        for child in children.iter_mut() {
            remove_extra_blank_lines_recursive(child);
        }
    }
}

/// One non-recursive collapse over a sibling sequence. Also used for the
/// top-level form sequence, which is not itself a node.
pub(super) fn remove_extra_blank_lines(nodes: Vec<Node>) -> Vec<Node> {
    let mut kept = Vec::with_capacity(nodes.len());
    let mut newlines = 0;
    for node in nodes {
        if node.is_newline() {
            newlines += 1;
        } else {
            newlines = 0;
        }
        if newlines <= 2 {
            kept.push(node);
        }
    }
    kept
}
