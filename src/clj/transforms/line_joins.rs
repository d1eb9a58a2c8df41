//! Header-line joins for `defn` and `defmethod` forms.
//!
//! Both passes are positional swaps over exact shapes; anything that does
//! not match is left alone. The caller has already checked the leading
//! symbol, so only the newline placement is inspected here.

use crate::clj::ast::Node;

/// Rewrite `(defn name <newline> [params] body...)` so the parameter vector
/// sits on the header line and the newline moves after it. Skipped when the
/// vector already has its own newline after it, and for any other shape.
pub(super) fn fix_defn_arglist(root: &mut Node) {
    let Some(children) = root.children_mut() else {
        return;
    };
    if children.len() < 5 {
        return;
    }
    if !children[2].is_newline() || !children[3].is_vector() || children[4].is_newline() {
        return;
    }
    children.swap(2, 3);
}

/// Rewrite `(defmethod name <newline> :dispatch-val ...)` so the dispatch
/// value sits on the header line. When a newline already follows the
/// dispatch value the leading one is dropped; otherwise the two slots swap,
/// which puts a newline after the value.
pub(super) fn fix_defmethod_dispatch_val(root: &mut Node) {
    let Some(children) = root.children_mut() else {
        return;
    };
    if children.len() < 5 {
        return;
    }
    if !children[2].is_newline() || !children[3].is_keyword() {
        return;
    }
    if children[4].is_newline() {
        children.remove(2);
    } else {
        children.swap(2, 3);
    }
}
