//! Integration tests against the concrete scenarios enumerated in spec §8,
//! driven through the public `evaluate` entry point with the in-memory
//! fake host in `support`.

mod support;

use std::sync::Arc;

use genexpr_core::ast::Evaluator;
use genexpr_core::context::EvalContext;
use genexpr_core::dag::{DagFrame, RoleFlags};
use genexpr_core::diagnostics::NullDiagnosticSink;
use genexpr_core::host::{BuildContext, TargetType};
use genexpr_core::policy::PolicyStatus;
use genexpr_core::evaluate;

use support::{FakeBuild, FakeTarget, FlatExpressionParser};

fn content(ident: &str, params: Vec<Vec<Evaluator>>) -> Evaluator {
    Evaluator::content(vec![Evaluator::text(ident)], params)
}

fn text_params(values: &[&str]) -> Vec<Vec<Evaluator>> {
    values.iter().map(|v| vec![Evaluator::text(*v)]).collect()
}

fn ctx_for(build: FakeBuild, head: Option<&str>) -> EvalContext {
    let build = Arc::new(build);
    let mut ctx = EvalContext::new(build.clone(), Arc::new(NullDiagnosticSink)).with_config("Debug");
    if let Some(name) = head {
        let target = build.find_target(name).expect("head target registered");
        ctx = ctx.for_target(target);
    }
    ctx
}

/// Scenario 1: `$<$<CONFIG:Debug>:DEBUG_MODE>` is `"DEBUG_MODE"` under
/// Debug and `""` under Release.
#[test]
fn scenario_1_config_gated_literal() {
    let mut build = FakeBuild::new();
    build.add_target(FakeTarget::new("app", TargetType::Executable));

    let expr = content(
        "IF",
        vec![
            vec![content("CONFIG", text_params(&["Debug"]))],
            vec![Evaluator::text("DEBUG_MODE")],
            vec![Evaluator::text("")],
        ],
    );

    let mut ctx = ctx_for(build, Some("app"));
    assert_eq!(evaluate(&expr, &mut ctx, None), "DEBUG_MODE");

    let mut build = FakeBuild::new();
    build.add_target(FakeTarget::new("app", TargetType::Executable));
    let mut ctx = ctx_for(build, Some("app"));
    ctx.config = "Release".to_string();
    assert_eq!(evaluate(&expr, &mut ctx, None), "");
    assert!(ctx.had_context_sensitive_condition);
}

/// Scenario 2: nested AND/OR/NOT, plus the fatal non-bit-operand case.
#[test]
fn scenario_2_logical_composition_and_fatal_operand() {
    let mut build = FakeBuild::new();
    build.add_target(FakeTarget::new("app", TargetType::Executable));
    let mut ctx = ctx_for(build, Some("app"));

    let expr = content(
        "AND",
        vec![
            vec![Evaluator::text("1")],
            vec![content("OR", text_params(&["0", "1"]))],
            vec![content("NOT", text_params(&["0"]))],
        ],
    );
    assert_eq!(evaluate(&expr, &mut ctx, None), "1");

    let mut build = FakeBuild::new();
    build.add_target(FakeTarget::new("app", TargetType::Executable));
    let mut ctx = ctx_for(build, Some("app"));
    let bad = content("AND", text_params(&["1", "maybe"]));
    assert_eq!(evaluate(&bad, &mut ctx, None), "");
    assert!(ctx.had_error);
}

/// Scenario 3: `EQUAL` across radixes, and the fatal malformed-integer case.
#[test]
fn scenario_3_equal_across_radixes() {
    let mut build = FakeBuild::new();
    build.add_target(FakeTarget::new("app", TargetType::Executable));
    let mut ctx = ctx_for(build, Some("app"));

    assert_eq!(
        evaluate(&content("EQUAL", text_params(&["0x10", "16"])), &mut ctx, None),
        "1"
    );
    assert_eq!(
        evaluate(&content("EQUAL", text_params(&["-0b11", "-3"])), &mut ctx, None),
        "1"
    );

    let mut build = FakeBuild::new();
    build.add_target(FakeTarget::new("app", TargetType::Executable));
    let mut ctx = ctx_for(build, Some("app"));
    assert_eq!(evaluate(&content("EQUAL", text_params(&["abc", "1"])), &mut ctx, None), "");
    assert!(ctx.had_error);
}

/// Scenario 4: `JOIN` preserves interior structure, `MAKE_C_IDENTIFIER`
/// sanitizes a leading digit and punctuation.
#[test]
fn scenario_4_join_and_make_c_identifier() {
    let mut build = FakeBuild::new();
    build.add_target(FakeTarget::new("app", TargetType::Executable));
    let mut ctx = ctx_for(build, Some("app"));

    assert_eq!(
        evaluate(&content("JOIN", text_params(&["a;b;c", " -I"])), &mut ctx, None),
        "a -Ib -Ic"
    );
    assert_eq!(
        evaluate(&content("MAKE_C_IDENTIFIER", text_params(&["9lives/cat"])), &mut ctx, None),
        "_9lives_cat"
    );
}

/// Scenario 5: own value joins with one hop of link-interface propagation.
#[test]
fn scenario_5_transitive_property_one_hop() {
    let mut build = FakeBuild::new();
    build.add_target(
        FakeTarget::new("libdep", TargetType::SharedLibrary)
            .with_property("INTERFACE_COMPILE_DEFINITIONS", "BAR"),
    );
    build.add_target(
        FakeTarget::new("lib", TargetType::SharedLibrary)
            .with_property("INTERFACE_COMPILE_DEFINITIONS", "FOO")
            .with_link_implementation(&["libdep"])
            .with_transitive_property_targets(&["libdep"]),
    );
    let mut ctx = ctx_for(build, Some("lib"));

    let expr = content("TARGET_PROPERTY", text_params(&["lib", "INTERFACE_COMPILE_DEFINITIONS"]));
    assert_eq!(evaluate(&expr, &mut ctx, None), "FOO;BAR");
}

/// Scenario 6: a diamond-shaped link interface (`a` lists `b`, `b` lists
/// `a`) terminates and produces both own directories exactly once.
#[test]
fn scenario_6_diamond_link_interface_terminates() {
    let mut build = FakeBuild::new();
    build.add_target(
        FakeTarget::new("a", TargetType::SharedLibrary)
            .with_property("INTERFACE_INCLUDE_DIRECTORIES", "/A")
            .with_link_implementation(&["b"])
            .with_transitive_property_targets(&["b"]),
    );
    build.add_target(
        FakeTarget::new("b", TargetType::SharedLibrary)
            .with_property("INTERFACE_INCLUDE_DIRECTORIES", "/B")
            .with_link_implementation(&["a"])
            .with_transitive_property_targets(&["a"]),
    );
    let mut ctx = ctx_for(build, Some("a"));

    let expr = content("TARGET_PROPERTY", text_params(&["a", "INTERFACE_INCLUDE_DIRECTORIES"]));
    let root = DagFrame::root("a", RoleFlags::default());
    assert_eq!(evaluate(&expr, &mut ctx, Some(&root)), "/A;/B");
    assert!(!ctx.had_error);
}

/// Scenario 7: `TARGET_OBJECTS` outside buildsystem evaluation is fatal.
#[test]
fn scenario_7_target_objects_requires_buildsystem_evaluation() {
    let mut build = FakeBuild::new();
    build.add_target(FakeTarget::new("olib", TargetType::ObjectLibrary));
    let mut ctx = ctx_for(build, None);
    ctx.evaluate_for_buildsystem = false;

    let expr = content("TARGET_OBJECTS", text_params(&["olib"]));
    assert_eq!(evaluate(&expr, &mut ctx, None), "");
    assert!(ctx.had_error);
}

/// Scenario 8: `LINK_ONLY` passes content through unless the enclosing
/// frame is restricted to transitive-properties-only.
#[test]
fn scenario_8_link_only_gated_by_role_flag() {
    let mut build = FakeBuild::new();
    build.add_target(FakeTarget::new("app", TargetType::Executable));
    let mut ctx = ctx_for(build, Some("app"));

    let expr = content("LINK_ONLY", text_params(&["pthread"]));
    assert_eq!(evaluate(&expr, &mut ctx, None), "pthread");

    let mut restricted_roles = RoleFlags::default();
    restricted_roles.transitive_properties_only = true;
    let frame = DagFrame::root("app", restricted_roles);
    assert_eq!(evaluate(&expr, &mut ctx, Some(&frame)), "");
}

/// Idempotence property from §8: `$<1:$<1:x>>` equals `$<1:x>`.
#[test]
fn idempotence_of_nested_one() {
    let mut build = FakeBuild::new();
    build.add_target(FakeTarget::new("app", TargetType::Executable));
    let mut ctx = ctx_for(build, Some("app"));

    let once = content("1", vec![vec![Evaluator::text("x")]]);
    let twice = content("1", vec![vec![content("1", vec![vec![Evaluator::text("x")]])]]);
    assert_eq!(evaluate(&once, &mut ctx, None), evaluate(&twice, &mut ctx, None));
}

/// `GENEX_EVAL` (SPEC_FULL §9A) re-parses and evaluates a text value.
#[test]
fn genex_eval_reparses_text() {
    let mut build = FakeBuild::new();
    build.add_target(FakeTarget::new("app", TargetType::Executable));
    let mut ctx = ctx_for(build, Some("app")).with_parser(Arc::new(FlatExpressionParser));

    let expr = content("GENEX_EVAL", text_params(&["$<AND:1,1>"]));
    assert_eq!(evaluate(&expr, &mut ctx, None), "1");
}

/// `GENEX_EVAL` without a host-supplied parser is a fatal error, not a panic.
#[test]
fn genex_eval_without_parser_is_fatal() {
    let mut build = FakeBuild::new();
    build.add_target(FakeTarget::new("app", TargetType::Executable));
    let mut ctx = ctx_for(build, Some("app"));

    let expr = content("GENEX_EVAL", text_params(&["$<AND:1,1>"]));
    assert_eq!(evaluate(&expr, &mut ctx, None), "");
    assert!(ctx.had_error);
}

/// Compiler-id comparison falls back to a policy-gated case-insensitive
/// match (the resolved Open Question: WARN groups with OLD).
#[test]
fn compiler_id_case_insensitive_match_warns_under_warn_policy() {
    let mut build = FakeBuild::new();
    build.add_target(FakeTarget::new("app", TargetType::Executable));
    build.definitions.insert("CMAKE_C_COMPILER_ID".to_string(), "GNU".to_string());
    let mut ctx = ctx_for(build, Some("app"));

    let expr = content("C_COMPILER_ID", text_params(&["gnu"]));
    assert_eq!(evaluate(&expr, &mut ctx, None), "1");
    assert!(ctx.had_context_sensitive_condition == false);
}

/// Under the NEW policy status, a case-insensitive-only match is a mismatch.
#[test]
fn compiler_id_case_insensitive_match_fails_under_new_policy() {
    let mut build = FakeBuild::new();
    build.add_target(FakeTarget::new("app", TargetType::Executable));
    build.definitions.insert("CMAKE_C_COMPILER_ID".to_string(), "GNU".to_string());
    build
        .policies
        .insert("CASE_INSENSITIVE_COMPILER_ID_MATCH".to_string(), PolicyStatus::New);
    let mut ctx = ctx_for(build, Some("app"));

    let expr = content("C_COMPILER_ID", text_params(&["gnu"]));
    assert_eq!(evaluate(&expr, &mut ctx, None), "0");
}

/// Unknown target names are a semantic error (spec §7), not a panic.
#[test]
fn target_property_on_unknown_target_is_fatal() {
    let mut build = FakeBuild::new();
    build.add_target(FakeTarget::new("app", TargetType::Executable));
    let mut ctx = ctx_for(build, Some("app"));

    let expr = content("TARGET_PROPERTY", text_params(&["nope", "SOMEPROP"]));
    assert_eq!(evaluate(&expr, &mut ctx, None), "");
    assert!(ctx.had_error);
}

/// While evaluating link libraries, an unavailable `COMPILE_FEATURES`
/// request records the *highest* required standard for its language, not
/// just the first one encountered.
#[test]
fn compile_features_records_highest_required_standard() {
    use genexpr_core::host::FeatureInfo;

    let mut build = FakeBuild::new();
    build.add_target(FakeTarget::new("app", TargetType::Executable));
    build.features.insert(
        "cxx_std_11".to_string(),
        FeatureInfo {
            language: "CXX".to_string(),
            standard: 11,
        },
    );
    build.features.insert(
        "cxx_std_17".to_string(),
        FeatureInfo {
            language: "CXX".to_string(),
            standard: 17,
        },
    );
    build
        .feature_available
        .insert(("app".to_string(), "cxx_std_11".to_string()), false);
    build
        .feature_available
        .insert(("app".to_string(), "cxx_std_17".to_string()), false);
    let mut ctx = ctx_for(build, Some("app"));

    let mut roles = RoleFlags::default();
    roles.evaluating_link_libraries = true;
    let frame = DagFrame::root("app", roles);

    let expr = content("COMPILE_FEATURES", text_params(&["cxx_std_11", "cxx_std_17"]));
    assert_eq!(evaluate(&expr, &mut ctx, Some(&frame)), "0");
    assert_eq!(
        ctx.max_language_standard.get(&("app".to_string(), "CXX".to_string())),
        Some(&"cxx_std_17".to_string())
    );

    // Evaluating in the opposite order still keeps the higher standard.
    let mut build = FakeBuild::new();
    build.add_target(FakeTarget::new("app", TargetType::Executable));
    build.features.insert(
        "cxx_std_11".to_string(),
        FeatureInfo {
            language: "CXX".to_string(),
            standard: 11,
        },
    );
    build.features.insert(
        "cxx_std_17".to_string(),
        FeatureInfo {
            language: "CXX".to_string(),
            standard: 17,
        },
    );
    build
        .feature_available
        .insert(("app".to_string(), "cxx_std_11".to_string()), false);
    build
        .feature_available
        .insert(("app".to_string(), "cxx_std_17".to_string()), false);
    let mut ctx = ctx_for(build, Some("app"));
    let expr = content("COMPILE_FEATURES", text_params(&["cxx_std_17", "cxx_std_11"]));
    assert_eq!(evaluate(&expr, &mut ctx, Some(&frame)), "0");
    assert_eq!(
        ctx.max_language_standard.get(&("app".to_string(), "CXX".to_string())),
        Some(&"cxx_std_17".to_string())
    );
}

/// `STREQUAL`/`IN_LIST` plain string comparisons (spec §4.3).
#[test]
fn strequal_and_in_list() {
    let mut build = FakeBuild::new();
    build.add_target(FakeTarget::new("app", TargetType::Executable));
    let mut ctx = ctx_for(build, Some("app"));

    assert_eq!(
        evaluate(&content("STREQUAL", text_params(&["abc", "abc"])), &mut ctx, None),
        "1"
    );
    assert_eq!(
        evaluate(&content("IN_LIST", text_params(&["b", "a;b;c"])), &mut ctx, None),
        "1"
    );
}
