//! Tree-rewrite passes.
//!
//! Each pass is idempotent and semantics-preserving: it moves, inserts, or
//! drops layout nodes (newlines and comments) and, for the require sort,
//! reorders one explicitly reorderable group. Semantic nodes are never
//! deleted, duplicated, or reordered relative to each other outside that
//! group.
//!
//! Pass order matters. The line-join passes can leave two newlines adjacent
//! where the source had a populated line, so the blank-line collapse runs
//! after them, and a final collapse runs once across the top-level forms.

mod blank_lines;
mod line_joins;
mod sort_requires;

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clj::ast::Tree;

/// One rewrite pass, individually switchable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transform {
    /// Sort the entries of `:require` and `:import` clauses inside an `ns`
    /// form, keeping each entry's comments attached.
    SortImportRequire,
    /// Trim newlines sitting directly before a closing delimiter.
    RemoveTrailingNewlines,
    /// Join `(defn name <newline> [params] ...)` onto one header line.
    FixDefnArglistNewline,
    /// Join `(defmethod name <newline> :val ...)` onto one header line.
    FixDefmethodDispatchValNewline,
    /// Collapse runs of three or more newlines down to two.
    RemoveExtraBlankLines,
}

impl Transform {
    /// Every pass, in declaration order.
    pub const ALL: [Transform; 5] = [
        Transform::SortImportRequire,
        Transform::RemoveTrailingNewlines,
        Transform::FixDefnArglistNewline,
        Transform::FixDefmethodDispatchValNewline,
        Transform::RemoveExtraBlankLines,
    ];
}

/// The set of enabled passes. A pass absent from the set is disabled;
/// the default set is empty. Use [`DEFAULT_TRANSFORMS`] for the everything-on
/// configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransformSet(BTreeSet<Transform>);

impl TransformSet {
    /// The empty set; nothing runs.
    pub fn none() -> TransformSet {
        TransformSet(BTreeSet::new())
    }

    /// Every pass enabled.
    pub fn all() -> TransformSet {
        TransformSet(Transform::ALL.into_iter().collect())
    }

    /// A single-pass set, useful for testing passes in isolation.
    pub fn only(transform: Transform) -> TransformSet {
        TransformSet::none().with(transform)
    }

    pub fn with(mut self, transform: Transform) -> TransformSet {
        self.0.insert(transform);
        self
    }

    pub fn without(mut self, transform: Transform) -> TransformSet {
        self.0.remove(&transform);
        self
    }

    pub fn is_enabled(&self, transform: Transform) -> bool {
        self.0.contains(&transform)
    }
}

/// The default configuration: every pass enabled.
pub static DEFAULT_TRANSFORMS: Lazy<TransformSet> = Lazy::new(TransformSet::all);

/// Apply the enabled passes to the tree in place.
///
/// Per-form passes run over each top-level form in a fixed order, then the
/// blank-line collapse runs once more across the top-level sequence itself.
/// Passes skip forms that do not match their shape; there is no failure mode.
pub fn apply(tree: &mut Tree, transforms: &TransformSet) {
    debug!(forms = tree.roots.len(), "applying transforms");
    for root in &mut tree.roots {
        if transforms.is_enabled(Transform::SortImportRequire) {
            sort_requires::sort_ns(root);
        }
        if transforms.is_enabled(Transform::RemoveTrailingNewlines) {
            blank_lines::remove_trailing_newlines(root);
        }
        if transforms.is_enabled(Transform::FixDefnArglistNewline)
            && root.is_fn_form_symbol("defn")
        {
            line_joins::fix_defn_arglist(root);
        }
        if transforms.is_enabled(Transform::FixDefmethodDispatchValNewline)
            && root.is_fn_form_symbol("defmethod")
        {
            line_joins::fix_defmethod_dispatch_val(root);
        }
        if transforms.is_enabled(Transform::RemoveExtraBlankLines) {
            blank_lines::remove_extra_blank_lines_recursive(root);
        }
    }
    if transforms.is_enabled(Transform::RemoveExtraBlankLines) {
        let roots = std::mem::take(&mut tree.roots);
        tree.roots = blank_lines::remove_extra_blank_lines(roots);
    }
}
