//! External interfaces (spec §6): the surfaces a host buildsystem implements
//! so the evaluator can query targets, the active build, and (for the
//! `GENEX_EVAL` family) re-parse a generator-expression string. The crate
//! never implements these itself.

use crate::ast::Evaluator;
use crate::error::EvalError;
use crate::policy::PolicyStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetType {
    Executable,
    StaticLibrary,
    SharedLibrary,
    ModuleLibrary,
    ObjectLibrary,
    InterfaceLibrary,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Main,
    Linker,
    Soname,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualifier {
    Full,
    Name,
    Dir,
}

/// The value of a link-interface-dependent property (spec §4.6 step 8) as
/// reported by the host for an imported target with no recorded own value.
#[derive(Debug, Clone)]
pub enum LinkInterfaceDependentValue {
    Bool(bool),
    Str(String),
    NumberMin(i64),
    NumberMax(i64),
}

/// A compile feature known to the build, used by `$<COMPILE_FEATURES:...>`.
#[derive(Debug, Clone)]
pub struct FeatureInfo {
    pub language: String,
    /// The language standard level this feature requires (e.g. `17` for
    /// `cxx_std_17`), used to track the *highest* standard a target needs
    /// across every feature consulted (spec §3's `max-language-standard`).
    pub standard: u32,
}

/// A handle to one target in the host's build model.
pub trait TargetHandle: Send + Sync {
    fn name(&self) -> &str;
    fn target_type(&self) -> TargetType;
    fn is_imported(&self) -> bool;
    fn is_dll_platform(&self) -> bool;
    fn is_linkable(&self) -> bool;
    fn is_object_library(&self) -> bool;
    fn linker_language(&self, config: &str) -> Option<String>;
    /// Full path to the requested artifact kind; qualifiers other than
    /// `Full` are derived by the caller from this value.
    fn artifact_path(&self, config: &str, artifact: Artifact, qualifier: Qualifier) -> Option<String>;
    fn soname(&self, config: &str) -> Option<String>;
    fn output_directory(&self, config: &str) -> Option<String>;
    /// The raw, unresolved value of a property directly set on this target.
    fn property(&self, name: &str) -> Option<String>;
    /// Configuration names this imported target maps the active config to,
    /// via `MAP_IMPORTED_CONFIG_<ACTIVE_CONFIG>` (spec §4.5).
    fn mapped_configs(&self, active_config: &str) -> Vec<String>;
    /// Names of targets reachable one hop via this target's transitive
    /// property graph for `config` (spec §4.6 step 7, first branch).
    fn transitive_property_targets(&self, config: &str) -> Vec<String>;
    /// Names of targets in this target's link implementation for `config`
    /// (spec §4.6 step 7, second branch).
    fn link_implementation_libraries(&self, config: &str) -> Vec<String>;
    fn link_interface_dependent_value(
        &self,
        property: &str,
        config: &str,
    ) -> Option<LinkInterfaceDependentValue>;
    fn alias_of(&self) -> Option<String>;
}

/// The active build: global definitions, target lookup, policy status, and
/// compile-feature knowledge.
pub trait BuildContext: Send + Sync {
    fn get_safe_definition(&self, key: &str) -> Option<String>;
    fn find_target(&self, name: &str) -> Option<std::sync::Arc<dyn TargetHandle>>;
    fn is_alias(&self, name: &str) -> bool;
    fn generator_target(&self, name: &str) -> Option<std::sync::Arc<dyn GeneratorTarget>>;
    fn policy_status(&self, policy: &str) -> Option<PolicyStatus>;
    fn known_compile_feature(&self, feature: &str) -> Option<FeatureInfo>;
    fn feature_available(&self, target: &str, feature: &str, config: &str) -> bool;
}

/// Object-library source enumeration, used by `$<TARGET_OBJECTS:...>`.
pub trait GeneratorTarget: Send + Sync {
    fn object_sources(&self, config: &str) -> Vec<String>;
    fn object_directory(&self) -> String;
    fn compute_object_file_name(&self, source: &str) -> String;
}

/// Registers computed object files as sources, mirroring what a real
/// buildsystem's source-file store does when `TARGET_OBJECTS` is expanded.
pub trait SourceFileStore: Send + Sync {
    fn get_or_create_source(&self, path: &str, generated: bool);
    fn mark_external_object(&self, path: &str, owning_object_library: &str);
}

/// Parses a generator-expression string into an [`Evaluator`] tree. Needed
/// only by the `GENEX_EVAL`/`TARGET_GENEX_EVAL` supplemental operators
/// (SPEC_FULL §9A); everything else builds its sub-expressions directly as
/// AST nodes rather than round-tripping through text.
pub trait ExpressionParser: Send + Sync {
    fn parse(&self, text: &str) -> Result<Evaluator, EvalError>;
}
