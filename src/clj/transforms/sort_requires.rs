//! Sorting of `:require` and `:import` clauses inside `ns` forms.

use std::cmp::Ordering;

use crate::clj::ast::Node;

const SORTABLE_CLAUSES: &[&str] = &[":require", ":import"];

/// Sort every sortable clause of a top-level `ns` form. Any other form is
/// left untouched.
pub(super) fn sort_ns(root: &mut Node) {
    if !root.is_fn_form_symbol("ns") {
        return;
    }
    let Some(children) = root.children_mut() else {
        return;
    };
    for child in children.iter_mut() {
        if child.is_fn_form_keyword(SORTABLE_CLAUSES) {
            sort_import_require(child);
        }
    }
}

/// One sortable unit: the entry node plus the comments riding with it.
/// Comment lines directly above an entry move with it, as does a comment on
/// the entry's own line.
struct Entry {
    comments_above: Vec<Node>,
    comment_beside: Option<Node>,
    node: Node,
}

/// Sort the entries of one clause list (the keyword stays first) and rebuild
/// its layout: each entry on its own line, leading comments above it, a
/// trailing comment beside it. Comments with no following entry end up at
/// the bottom.
fn sort_import_require(clause: &mut Node) {
    let Some(children) = clause.children_mut() else {
        return;
    };
    let mut rest = children.split_off(1);

    let mut entries: Vec<Entry> = Vec::with_capacity(rest.len() / 2);
    let mut comments_above = Vec::new();
    let mut after_entry = false;
    for node in rest.drain(..) {
        if node.is_comment() {
            if after_entry {
                // A comment on the entry's own line annotates that entry.
                if let Some(last) = entries.last_mut() {
                    last.comment_beside = Some(node);
                }
            } else {
                comments_above.push(node);
            }
        } else if node.is_newline() {
            after_entry = false;
        } else {
            entries.push(Entry {
                comments_above: std::mem::take(&mut comments_above),
                comment_beside: None,
                node,
            });
            after_entry = true;
        }
    }

    // Vec::sort_by is stable, so incomparable entries keep source order.
    entries.sort_by(|a, b| compare_entries(&a.node, &b.node));

    for entry in entries {
        for comment in entry.comments_above {
            children.push(comment);
            children.push(Node::Newline);
        }
        children.push(entry.node);
        if let Some(comment) = entry.comment_beside {
            children.push(comment);
        }
        children.push(Node::Newline);
    }
    for comment in comments_above {
        children.push(comment);
        children.push(Node::Newline);
    }
    // Drop the final newline so the entry hugs the closing delimiter, unless
    // a trailing comment needs the newline to stay on its own line.
    if children.len() >= 2
        && children[children.len() - 1].is_newline()
        && !children[children.len() - 2].is_comment()
    {
        children.pop();
    }
}

/// Total order over entries: a bare symbol before any collection, symbols by
/// text, collections (vector or list) by their leading symbol with empty
/// collections first and symbol-headed ones before the rest. Anything else
/// compares equal and keeps its position.
fn compare_entries(a: &Node, b: &Node) -> Ordering {
    match (rank(a), rank(b)) {
        (ra, rb) if ra != rb => ra.cmp(&rb),
        (0, 0) => a.symbol_text().cmp(&b.symbol_text()),
        (1, 1) => compare_collections(a, b),
        _ => Ordering::Equal,
    }
}

fn rank(node: &Node) -> u8 {
    if node.symbol_text().is_some() {
        0
    } else if node.is_list_or_vector() {
        1
    } else {
        2
    }
}

fn compare_collections(a: &Node, b: &Node) -> Ordering {
    let ca = a.children().unwrap_or_default();
    let cb = b.children().unwrap_or_default();
    match (ca.first(), cb.first()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(ha), Some(hb)) => match (ha.symbol_text(), hb.symbol_text()) {
            (Some(sa), Some(sb)) => sa.cmp(sb),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}
