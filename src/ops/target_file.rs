//! The `TARGET_FILE`/`TARGET_LINKER_FILE`/`TARGET_SONAME_FILE` family and
//! their `_NAME`/`_DIR` qualifiers (spec §4.5), parameterized over
//! [`Artifact`] and [`Qualifier`] as suggested by the design notes (§9)
//! rather than nine near-identical functions.

use crate::context::EvalContext;
use crate::dag::DagFrame;
use crate::error::EvalError;
use crate::host::{Artifact, Qualifier, TargetType};

pub fn eval_target_file(
    ctx: &mut EvalContext,
    dag: Option<&DagFrame>,
    identifier: &str,
    target_name: &str,
    artifact: Artifact,
    qualifier: Qualifier,
) -> Result<String, EvalError> {
    let target = ctx
        .build
        .find_target(target_name)
        .ok_or_else(|| EvalError::UnknownTarget(target_name.to_string()))?;

    match target.target_type() {
        TargetType::Executable
        | TargetType::StaticLibrary
        | TargetType::SharedLibrary
        | TargetType::ModuleLibrary
        | TargetType::ObjectLibrary => {}
        _ => return Err(EvalError::NotLinkable(target_name.to_string())),
    }

    if let Some(frame) = dag {
        if frame.target == target_name
            && (frame.roles.evaluating_link_libraries || frame.roles.evaluating_sources)
        {
            return Err(EvalError::RecursionOverLinkLibraries {
                property: identifier.to_string(),
            });
        }
    }

    match artifact {
        Artifact::Linker if !target.is_linkable() => {
            return Err(EvalError::NotLinkable(target_name.to_string()))
        }
        Artifact::Soname
            if target.target_type() != TargetType::SharedLibrary || target.is_dll_platform() =>
        {
            return Err(EvalError::NotSonameEligible(target_name.to_string()))
        }
        _ => {}
    }

    ctx.all_targets.insert(target_name.to_string());
    ctx.depend_targets.insert(target_name.to_string());

    if artifact == Artifact::Soname {
        let dir = target.output_directory(&ctx.config).unwrap_or_default();
        let name = target.soname(&ctx.config).unwrap_or_default();
        return Ok(match qualifier {
            Qualifier::Dir => dir,
            Qualifier::Name => name,
            Qualifier::Full => format!("{dir}/{name}"),
        });
    }

    let full = target
        .artifact_path(&ctx.config, artifact, Qualifier::Full)
        .ok_or_else(|| EvalError::UnknownTarget(target_name.to_string()))?;

    Ok(match qualifier {
        Qualifier::Full => full,
        Qualifier::Name => full.rsplit('/').next().unwrap_or(&full).to_string(),
        Qualifier::Dir => {
            let mut parts: Vec<&str> = full.split('/').collect();
            parts.pop();
            parts.join("/")
        }
    })
}
