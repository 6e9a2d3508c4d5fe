//! `TARGET_OBJECTS` (spec §4.7): only valid during buildsystem generation,
//! against an object library; each computed object path is also registered
//! with the host's source-file store.

use crate::context::EvalContext;
use crate::error::EvalError;

pub fn eval_target_objects(ctx: &mut EvalContext, target_name: &str) -> Result<String, EvalError> {
    if !ctx.evaluate_for_buildsystem {
        return Err(EvalError::BuildsystemOnly("TARGET_OBJECTS".to_string()));
    }
    let target = ctx
        .build
        .find_target(target_name)
        .ok_or_else(|| EvalError::UnknownTarget(target_name.to_string()))?;
    if !target.is_object_library() {
        return Err(EvalError::NotLinkable(target_name.to_string()));
    }
    let generator_target = ctx
        .build
        .generator_target(target_name)
        .ok_or_else(|| EvalError::UnknownTarget(target_name.to_string()))?;

    let sources = generator_target.object_sources(&ctx.config);
    let mut objects = Vec::with_capacity(sources.len());
    for source in &sources {
        let object = generator_target.compute_object_file_name(source);
        if let Some(store) = &ctx.source_store {
            store.get_or_create_source(&object, true);
            store.mark_external_object(&object, target_name);
        }
        objects.push(object);
    }

    ctx.all_targets.insert(target_name.to_string());
    ctx.depend_targets.insert(target_name.to_string());
    Ok(objects.join(";"))
}
