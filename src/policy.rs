//! Policy settings consulted by `$<TARGET_POLICY:...>` (spec §4.9) and by
//! the case-insensitive compiler-id/version comparison fallback (spec §4.4).
//!
//! `host::BuildContext::policy_status` is the authoritative source the
//! operators consult; `PolicyTable` exists so a host can build that answer
//! from a small TOML fragment instead of hand-constructing a map, and it is
//! what the crate's own tests use as a default.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PolicyStatus {
    Old,
    New,
    Warn,
}

/// Gates whether `COMPILE_DEFINITIONS_<CONFIG>` still falls back to
/// `INTERFACE_COMPILE_DEFINITIONS` for transitive propagation (spec §4.6
/// step 7 sub-case).
pub const LEGACY_COMPILE_DEFINITIONS_PROPAGATION: &str = "LEGACY_COMPILE_DEFINITIONS_PROPAGATION";

/// Gates whether `C_COMPILER_ID`/`CXX_COMPILER_ID`/`PLATFORM_ID` accept a
/// case-insensitive match against the current value (spec §4.4).
pub const CASE_INSENSITIVE_COMPILER_ID_MATCH: &str = "CASE_INSENSITIVE_COMPILER_ID_MATCH";

/// The whitelist of policy identifiers `$<TARGET_POLICY:...>` accepts.
pub const TARGET_POLICIES: &[&str] = &[
    "AUTOMOC_MACRO_NAMES_CASE_SENSITIVE",
    "TARGET_LINK_LIBRARIES_WHITELIST",
    "SHARED_LIBRARY_SONAME_REQUIRED",
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PolicyTable {
    #[serde(flatten, default)]
    statuses: HashMap<String, PolicyStatus>,
}

impl PolicyTable {
    pub fn status(&self, policy: &str) -> PolicyStatus {
        self.statuses.get(policy).copied().unwrap_or(PolicyStatus::Warn)
    }

    pub fn with_status(mut self, policy: impl Into<String>, status: PolicyStatus) -> Self {
        self.statuses.insert(policy.into(), status);
        self
    }
}

/// Parse a policy table from a TOML fragment. Unknown keys are kept (a host
/// may define policies beyond [`TARGET_POLICIES`]); missing keys default to
/// `Warn` via [`PolicyTable::status`], matching the teacher's per-field
/// defaulting rather than whole-file rejection.
pub fn parse_and_validate_policy_table(contents: &str) -> Result<PolicyTable, String> {
    toml::from_str::<PolicyTable>(contents).map_err(|e| format!("failed to parse policy table: {e}"))
}
