//! The evaluation context threaded through one top-level `evaluate` call
//! (spec §3).

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::diagnostics::DiagnosticSink;
use crate::host::{BuildContext, ExpressionParser, SourceFileStore, TargetHandle};

pub struct EvalContext {
    pub config: String,
    pub head_target: Option<Arc<dyn TargetHandle>>,
    pub current_target: Option<Arc<dyn TargetHandle>>,
    pub quiet: bool,
    pub evaluate_for_buildsystem: bool,
    pub had_error: bool,
    pub had_context_sensitive_condition: bool,
    pub all_targets: HashSet<String>,
    pub depend_targets: HashSet<String>,
    /// Property names read on the head target, for link-interface
    /// consistency diagnostics (spec §3). Not consulted by cycle detection.
    pub seen_target_properties: HashSet<String>,
    pub max_language_standard: HashMap<(String, String), String>,
    /// `(target, property)` pairs already expanded by `TARGET_PROPERTY`
    /// anywhere in this evaluation, independent of the DAG frame stack.
    /// Drives the `AlreadySeen` outcome for diamond-shaped link graphs.
    pub(crate) visited_properties: HashSet<(String, String)>,
    /// Whether the current evaluation is assembling an exported (installed)
    /// usage requirement rather than a build-tree one; gates
    /// `BUILD_INTERFACE`/`INSTALL_INTERFACE`/`INSTALL_PREFIX` (spec §4.10).
    pub exporting: bool,
    pub build: Arc<dyn BuildContext>,
    pub diagnostics: Arc<dyn DiagnosticSink>,
    pub expr_parser: Option<Arc<dyn ExpressionParser>>,
    pub source_store: Option<Arc<dyn SourceFileStore>>,
}

impl EvalContext {
    pub fn new(build: Arc<dyn BuildContext>, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        EvalContext {
            config: String::new(),
            head_target: None,
            current_target: None,
            quiet: false,
            evaluate_for_buildsystem: false,
            had_error: false,
            had_context_sensitive_condition: false,
            all_targets: HashSet::new(),
            depend_targets: HashSet::new(),
            seen_target_properties: HashSet::new(),
            max_language_standard: HashMap::new(),
            visited_properties: HashSet::new(),
            exporting: false,
            build,
            diagnostics,
            expr_parser: None,
            source_store: None,
        }
    }

    pub fn for_target(mut self, target: Arc<dyn TargetHandle>) -> Self {
        self.current_target = Some(target.clone());
        self.head_target = Some(target);
        self
    }

    pub fn with_config(mut self, config: impl Into<String>) -> Self {
        self.config = config.into();
        self
    }

    pub fn with_parser(mut self, parser: Arc<dyn ExpressionParser>) -> Self {
        self.expr_parser = Some(parser);
        self
    }

    pub fn exporting(mut self, exporting: bool) -> Self {
        self.exporting = exporting;
        self
    }
}
