//! The diagnostic sink a host supplies to receive fatal-error and
//! policy-warning reports (spec §4.11).

pub trait DiagnosticSink: Send + Sync {
    /// A fatal evaluation error. `backtrace` is the innermost-first chain of
    /// enclosing `TARGET_PROPERTY` frames (SPEC_FULL §9A).
    fn report_error(&self, message: &str, backtrace: &[String]);
    /// A non-fatal, policy-gated warning (e.g. a WARN-status compiler-id
    /// case-insensitive match, or an unset `$<TARGET_POLICY:...>`).
    fn report_policy_warning(&self, policy: &str, message: &str);
}

/// Routes diagnostics through `tracing`, matching SPEC_FULL §4.12.
#[derive(Debug, Default)]
pub struct TracingDiagnosticSink;

impl DiagnosticSink for TracingDiagnosticSink {
    fn report_error(&self, message: &str, backtrace: &[String]) {
        tracing::error!(backtrace = ?backtrace, "{message}");
    }

    fn report_policy_warning(&self, policy: &str, message: &str) {
        tracing::warn!(policy, "{message}");
    }
}

/// Discards every diagnostic. Useful for tests that only care about
/// `had_error`, and as the default when a host has no reporting surface.
#[derive(Debug, Default)]
pub struct NullDiagnosticSink;

impl DiagnosticSink for NullDiagnosticSink {
    fn report_error(&self, _message: &str, _backtrace: &[String]) {}
    fn report_policy_warning(&self, _policy: &str, _message: &str) {}
}
