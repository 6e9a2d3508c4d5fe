//! An in-memory stand-in for a host buildsystem, implementing every trait
//! in `genexpr_core::host` against plain `HashMap`s. Not a fixture of any
//! real generator; just enough state to drive the scenarios in spec §8.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use genexpr_core::ast::Evaluator;
use genexpr_core::error::EvalError;
use genexpr_core::host::{
    Artifact, BuildContext, ExpressionParser, FeatureInfo, GeneratorTarget,
    LinkInterfaceDependentValue, Qualifier, SourceFileStore, TargetHandle, TargetType,
};
use genexpr_core::policy::PolicyStatus;

#[derive(Debug, Clone)]
pub struct FakeTarget {
    pub name: String,
    pub target_type: TargetType,
    pub is_imported: bool,
    pub is_dll_platform: bool,
    pub properties: HashMap<String, String>,
    pub link_implementation: Vec<String>,
    pub transitive_property_targets: Vec<String>,
    pub mapped_configs: Vec<String>,
    pub dependent_value: Option<LinkInterfaceDependentValue>,
    pub alias_of: Option<String>,
    pub artifact_path: Option<String>,
    pub soname: Option<String>,
    pub output_directory: Option<String>,
    pub linker_language: Option<String>,
}

impl FakeTarget {
    pub fn new(name: impl Into<String>, target_type: TargetType) -> Self {
        FakeTarget {
            name: name.into(),
            target_type,
            is_imported: false,
            is_dll_platform: false,
            properties: HashMap::new(),
            link_implementation: Vec::new(),
            transitive_property_targets: Vec::new(),
            mapped_configs: Vec::new(),
            dependent_value: None,
            alias_of: None,
            artifact_path: None,
            soname: None,
            output_directory: None,
            linker_language: None,
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn with_link_implementation(mut self, targets: &[&str]) -> Self {
        self.link_implementation = targets.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_transitive_property_targets(mut self, targets: &[&str]) -> Self {
        self.transitive_property_targets = targets.iter().map(|s| s.to_string()).collect();
        self
    }
}

impl TargetHandle for FakeTarget {
    fn name(&self) -> &str {
        &self.name
    }
    fn target_type(&self) -> TargetType {
        self.target_type
    }
    fn is_imported(&self) -> bool {
        self.is_imported
    }
    fn is_dll_platform(&self) -> bool {
        self.is_dll_platform
    }
    fn is_linkable(&self) -> bool {
        matches!(
            self.target_type,
            TargetType::Executable
                | TargetType::StaticLibrary
                | TargetType::SharedLibrary
                | TargetType::ModuleLibrary
        )
    }
    fn is_object_library(&self) -> bool {
        self.target_type == TargetType::ObjectLibrary
    }
    fn linker_language(&self, _config: &str) -> Option<String> {
        self.linker_language.clone()
    }
    fn artifact_path(&self, _config: &str, _artifact: Artifact, _qualifier: Qualifier) -> Option<String> {
        self.artifact_path.clone()
    }
    fn soname(&self, _config: &str) -> Option<String> {
        self.soname.clone()
    }
    fn output_directory(&self, _config: &str) -> Option<String> {
        self.output_directory.clone()
    }
    fn property(&self, name: &str) -> Option<String> {
        self.properties.get(name).cloned()
    }
    fn mapped_configs(&self, _active_config: &str) -> Vec<String> {
        self.mapped_configs.clone()
    }
    fn transitive_property_targets(&self, _config: &str) -> Vec<String> {
        self.transitive_property_targets.clone()
    }
    fn link_implementation_libraries(&self, _config: &str) -> Vec<String> {
        self.link_implementation.clone()
    }
    fn link_interface_dependent_value(
        &self,
        _property: &str,
        _config: &str,
    ) -> Option<LinkInterfaceDependentValue> {
        self.dependent_value.clone()
    }
    fn alias_of(&self) -> Option<String> {
        self.alias_of.clone()
    }
}

#[derive(Default)]
pub struct FakeBuild {
    pub targets: HashMap<String, Arc<FakeTarget>>,
    pub aliases: HashMap<String, String>,
    pub definitions: HashMap<String, String>,
    pub policies: HashMap<String, PolicyStatus>,
    pub features: HashMap<String, FeatureInfo>,
    pub feature_available: HashMap<(String, String), bool>,
    pub source_store: Arc<FakeSourceStore>,
}

impl FakeBuild {
    pub fn new() -> Self {
        FakeBuild::default()
    }

    pub fn add_target(&mut self, target: FakeTarget) {
        self.targets.insert(target.name.clone(), Arc::new(target));
    }
}

impl BuildContext for FakeBuild {
    fn get_safe_definition(&self, key: &str) -> Option<String> {
        self.definitions.get(key).cloned()
    }
    fn find_target(&self, name: &str) -> Option<Arc<dyn TargetHandle>> {
        self.targets.get(name).cloned().map(|t| t as Arc<dyn TargetHandle>)
    }
    fn is_alias(&self, name: &str) -> bool {
        self.aliases.contains_key(name)
    }
    fn generator_target(&self, _name: &str) -> Option<Arc<dyn GeneratorTarget>> {
        None
    }
    fn policy_status(&self, policy: &str) -> Option<PolicyStatus> {
        self.policies.get(policy).copied()
    }
    fn known_compile_feature(&self, feature: &str) -> Option<FeatureInfo> {
        self.features.get(feature).cloned()
    }
    fn feature_available(&self, target: &str, feature: &str, _config: &str) -> bool {
        self.feature_available
            .get(&(target.to_string(), feature.to_string()))
            .copied()
            .unwrap_or(true)
    }
}

#[derive(Default)]
pub struct FakeSourceStore {
    pub created: Mutex<Vec<(String, bool)>>,
    pub marked_external: Mutex<Vec<(String, String)>>,
}

impl SourceFileStore for FakeSourceStore {
    fn get_or_create_source(&self, path: &str, generated: bool) {
        self.created.lock().unwrap().push((path.to_string(), generated));
    }
    fn mark_external_object(&self, path: &str, owning_object_library: &str) {
        self.marked_external
            .lock()
            .unwrap()
            .push((path.to_string(), owning_object_library.to_string()));
    }
}

/// Parses only the flat `$<IDENT:a,b,c>` shape needed by the `GENEX_EVAL`
/// tests — not a general recursive-descent parser.
pub struct FlatExpressionParser;

impl ExpressionParser for FlatExpressionParser {
    fn parse(&self, text: &str) -> Result<Evaluator, EvalError> {
        let Some(inner) = text.strip_prefix("$<").and_then(|s| s.strip_suffix('>')) else {
            return Ok(Evaluator::text(text));
        };
        let Some((ident, rest)) = inner.split_once(':') else {
            return Ok(Evaluator::content(vec![Evaluator::text(inner)], vec![]));
        };
        let params = rest
            .split(',')
            .map(|p| vec![Evaluator::text(p)])
            .collect();
        Ok(Evaluator::content(vec![Evaluator::text(ident)], params))
    }
}
