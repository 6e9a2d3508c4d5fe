//! `TARGET_PROPERTY` (spec §4.6): the hardest operator. Reads a property of
//! a target, either directly (when the property is set) or by assembling
//! the transitive content from the target's link interface/implementation,
//! guarded throughout by the DAG frame chain in [`crate::dag`].

use std::sync::Arc;

use tracing::debug_span;

use crate::ast::Evaluator;
use crate::context::EvalContext;
use crate::dag::{DagCheck, DagFrame};
use crate::error::EvalError;
use crate::host::{LinkInterfaceDependentValue, TargetHandle, TargetType};
use crate::policy::{PolicyStatus, LEGACY_COMPILE_DEFINITIONS_PROPAGATION};

/// Properties whose transitive form is propagated across the link
/// interface/implementation graph.
pub const TRANSITIVE_WHITELIST: &[&str] = &[
    "COMPILE_DEFINITIONS",
    "COMPILE_OPTIONS",
    "COMPILE_FEATURES",
    "INCLUDE_DIRECTORIES",
    "SYSTEM_INCLUDE_DIRECTORIES",
    "SOURCES",
    "POSITION_INDEPENDENT_CODE",
    "COMPILE_LANGUAGE",
    "AUTOUIC_OPTIONS",
    "AUTOGEN_TARGET_DEPENDS",
];

fn is_valid_property_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_valid_target_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(char::is_whitespace)
}

fn bare_property(prop: &str) -> &str {
    prop.strip_prefix("INTERFACE_").unwrap_or(prop)
}

fn interface_form(prop: &str) -> String {
    if prop.starts_with("INTERFACE_") {
        prop.to_string()
    } else {
        format!("INTERFACE_{prop}")
    }
}

fn is_whitelisted(prop: &str) -> bool {
    TRANSITIVE_WHITELIST.contains(&bare_property(prop))
}

pub fn eval_target_property(
    ctx: &mut EvalContext,
    dag: Option<&DagFrame>,
    params: &[String],
) -> Result<String, EvalError> {
    let (target_name, prop) = match params {
        [prop] => {
            let head = ctx
                .head_target
                .clone()
                .ok_or_else(|| EvalError::RequiresBinaryTarget("TARGET_PROPERTY".to_string()))?;
            (head.name().to_string(), prop.clone())
        }
        [tgt, prop] => (tgt.clone(), prop.clone()),
        _ => {
            return Err(EvalError::ArityMismatch {
                identifier: "TARGET_PROPERTY".to_string(),
                expected: "1 or 2".to_string(),
                found: params.len(),
            })
        }
    };

    let _span = debug_span!("target_property", target = %target_name, property = %prop).entered();

    if !is_valid_target_name(&target_name) {
        return Err(EvalError::UnknownTarget(target_name));
    }
    if !is_valid_property_name(&prop) {
        return Err(EvalError::InvalidPropertyName(prop));
    }

    let resolved_name = if ctx.build.is_alias(&target_name) {
        ctx.build
            .find_target(&target_name)
            .map(|t| t.name().to_string())
            .unwrap_or_else(|| target_name.clone())
    } else {
        target_name.clone()
    };

    let target = ctx
        .build
        .find_target(&resolved_name)
        .ok_or_else(|| EvalError::UnknownTarget(target_name.clone()))?;

    if ctx.head_target.as_ref().map(|t| t.name()) == Some(resolved_name.as_str()) {
        ctx.seen_target_properties.insert(prop.clone());
    }

    if prop == "ALIASED_TARGET" {
        return Ok(target.alias_of().unwrap_or_default());
    }

    if prop == "LINKER_LANGUAGE" {
        let is_static = target.target_type() == TargetType::StaticLibrary;
        let blocked = is_static
            && dag
                .map(|f| {
                    f.target == resolved_name
                        && (f.roles.evaluating_link_libraries || f.roles.evaluating_sources)
                })
                .unwrap_or(false);
        if blocked {
            return Err(EvalError::LinkerLanguageUnavailable);
        }
        return Ok(target.linker_language(&ctx.config).unwrap_or_default());
    }

    let child_roles = dag.map(|f| f.roles).unwrap_or_default();

    let check = match dag {
        Some(parent) => parent.check(&ctx.visited_properties, &resolved_name, &prop),
        None => DagCheck::Ok,
    };
    match check {
        DagCheck::SelfReference => {
            return Err(EvalError::SelfReference {
                target: resolved_name,
                property: prop,
            })
        }
        DagCheck::Cyclic => return Ok(String::new()),
        DagCheck::AlreadySeen if is_whitelisted(&prop) || is_whitelisted(&interface_form(&prop)) => {
            return Ok(String::new())
        }
        DagCheck::AlreadySeen | DagCheck::Ok => {}
    }

    let raw = target.property(&prop);

    if let Some(parent) = dag {
        if parent.roles.evaluating_link_libraries
            && (is_whitelisted(&prop) || is_whitelisted(&interface_form(&prop)))
        {
            if raw.is_some() {
                return Err(EvalError::RecursionOverLinkLibraries { property: prop });
            }
            return Ok(String::new());
        }
    }

    ctx.visited_properties.insert((resolved_name.clone(), prop.clone()));
    let frame = DagFrame::child(dag, resolved_name.clone(), prop.clone(), child_roles, "TARGET_PROPERTY");

    let interface_property_name = if is_whitelisted(&prop) || prop.starts_with("INTERFACE_") {
        Some(interface_form(&prop))
    } else if prop.starts_with("COMPILE_DEFINITIONS_")
        && ctx.build.policy_status(LEGACY_COMPILE_DEFINITIONS_PROPAGATION) != Some(PolicyStatus::New)
    {
        Some("INTERFACE_COMPILE_DEFINITIONS".to_string())
    } else {
        None
    };

    let transitive = collect_transitive(ctx, &frame, &target, &prop, interface_property_name.as_deref())?;
    if ctx.had_error {
        return Ok(String::new());
    }

    match raw {
        None => {
            if target.is_imported() || target.target_type() == TargetType::InterfaceLibrary {
                Ok(transitive)
            } else if let Some(value) = target.link_interface_dependent_value(&prop, &ctx.config) {
                ctx.had_context_sensitive_condition = true;
                Ok(render_dependent_value(value))
            } else {
                Ok(transitive)
            }
        }
        Some(value) => {
            if is_whitelisted(&prop) {
                let own = reevaluate_own_value(ctx, &frame, &resolved_name, &value)?;
                Ok(join_nonempty(&own, &transitive))
            } else {
                Ok(value)
            }
        }
    }
}

fn render_dependent_value(value: LinkInterfaceDependentValue) -> String {
    match value {
        LinkInterfaceDependentValue::Bool(b) => if b { "1" } else { "0" }.to_string(),
        LinkInterfaceDependentValue::Str(s) => s,
        LinkInterfaceDependentValue::NumberMin(n) | LinkInterfaceDependentValue::NumberMax(n) => n.to_string(),
    }
}

fn join_nonempty(a: &str, b: &str) -> String {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => String::new(),
        (true, false) => b.to_string(),
        (false, true) => a.to_string(),
        (false, false) => format!("{a};{b}"),
    }
}

/// Step 7: for each target one hop away in the relevant graph, synthesize
/// `$<TARGET_PROPERTY:dep,interface-property-name>` directly as an AST node
/// (no text round-trip needed — every component is already a known atom)
/// and evaluate it recursively under `frame`.
fn collect_transitive(
    ctx: &mut EvalContext,
    frame: &DagFrame,
    target: &Arc<dyn TargetHandle>,
    prop: &str,
    interface_property_name: Option<&str>,
) -> Result<String, EvalError> {
    let Some(iface_prop) = interface_property_name else {
        return Ok(String::new());
    };

    let targets: Vec<String> = if is_whitelisted(prop) {
        target.transitive_property_targets(&ctx.config)
    } else if is_whitelisted(iface_prop) {
        target.link_implementation_libraries(&ctx.config)
    } else {
        return Ok(String::new());
    };

    let mut pieces = Vec::new();
    for dep in targets {
        if dep == target.name() {
            continue;
        }
        let _span = debug_span!("transitive_descent", from = %target.name(), to = %dep, property = %iface_prop).entered();
        let node = Evaluator::content(
            vec![Evaluator::text("TARGET_PROPERTY")],
            vec![vec![Evaluator::text(dep)], vec![Evaluator::text(iface_prop.to_string())]],
        );
        let value = crate::driver::evaluate(&node, ctx, Some(frame));
        if ctx.had_error {
            return Ok(String::new());
        }
        if !value.is_empty() {
            pieces.push(value);
        }
    }
    Ok(pieces.join(";"))
}

/// Step 9: the target's own raw value may itself contain generator-
/// expression syntax (e.g. `$<CONFIG:Debug>`), which genuinely needs a real
/// parse — this is arbitrary caller-supplied text, not a synthesized atom.
fn reevaluate_own_value(
    ctx: &mut EvalContext,
    frame: &DagFrame,
    current_target_name: &str,
    raw_value: &str,
) -> Result<String, EvalError> {
    let Some(parser) = ctx.expr_parser.clone() else {
        return Ok(raw_value.to_string());
    };
    let parsed = parser.parse(raw_value)?;
    let current = ctx
        .build
        .find_target(current_target_name)
        .ok_or_else(|| EvalError::UnknownTarget(current_target_name.to_string()))?;
    let previous_current = ctx.current_target.replace(current);
    let result = crate::driver::evaluate(&parsed, ctx, Some(frame));
    ctx.current_target = previous_current;
    Ok(result)
}
