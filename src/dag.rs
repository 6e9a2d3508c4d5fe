//! Cycle detection for transitive `TARGET_PROPERTY` descent (spec §5, §9).
//!
//! Frames form a stack-local linked list via parent references — no
//! persistent graph is built. Each push compares the candidate
//! `(target, property)` pair against the ancestor chain (self-reference and
//! cycle detection) and, separately, against a per-evaluation "already
//! visited" set threaded through [`crate::context::EvalContext`] (diamond
//! detection across non-overlapping branches of the tree).

use std::collections::HashSet;

/// Role bits describing what kind of evaluation a frame represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleFlags {
    pub evaluating_link_libraries: bool,
    pub evaluating_sources: bool,
    pub transitive_properties_only: bool,
    pub top_target: bool,
}

/// One frame of transitive-property descent.
#[derive(Debug)]
pub struct DagFrame<'p> {
    pub parent: Option<&'p DagFrame<'p>>,
    pub target: String,
    pub property: String,
    pub roles: RoleFlags,
    /// The identifier of the `$<IDENT:...>` node that pushed this frame, for
    /// backtrace rendering (SPEC_FULL §9A). Empty on the root frame, which
    /// represents the enclosing target context rather than a node
    /// evaluation in progress.
    pub identifier: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DagCheck {
    Ok,
    AlreadySeen,
    Cyclic,
    SelfReference,
}

impl<'p> DagFrame<'p> {
    /// Construct the root frame for a top-level `evaluate` call.
    pub fn root(target: impl Into<String>, roles: RoleFlags) -> Self {
        DagFrame {
            parent: None,
            target: target.into(),
            property: String::new(),
            roles,
            identifier: "",
        }
    }

    /// Push a child frame descending into `(target, property)` via the node
    /// named by `identifier` (currently always `"TARGET_PROPERTY"`, the only
    /// node that recurses through the DAG).
    pub fn child(
        parent: Option<&'p DagFrame<'p>>,
        target: String,
        property: String,
        roles: RoleFlags,
        identifier: &'static str,
    ) -> DagFrame<'p> {
        DagFrame {
            parent,
            target,
            property,
            roles,
            identifier,
        }
    }

    /// Check whether descending from `self` into `(target, property)` is
    /// safe. `visited` is the caller's whole-evaluation "already expanded"
    /// set, consulted only once the stack chain clears the candidate.
    pub fn check(
        &self,
        visited: &HashSet<(String, String)>,
        target: &str,
        property: &str,
    ) -> DagCheck {
        if self.target == target && self.property == property {
            return DagCheck::SelfReference;
        }
        let mut cur = self.parent;
        while let Some(frame) = cur {
            if frame.target == target && frame.property == property {
                return DagCheck::Cyclic;
            }
            cur = frame.parent;
        }
        if visited.contains(&(target.to_string(), property.to_string())) {
            return DagCheck::AlreadySeen;
        }
        DagCheck::Ok
    }
}
