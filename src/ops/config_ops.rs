//! `CONFIG` (spec §4.5): reads or compares the active build configuration,
//! honoring imported-target configuration mapping.

use crate::context::EvalContext;

pub fn eval_config(ctx: &mut EvalContext, param: Option<&str>) -> String {
    ctx.had_context_sensitive_condition = true;

    let Some(p) = param else {
        return ctx.config.clone();
    };
    if p.eq_ignore_ascii_case(&ctx.config) {
        return "1".to_string();
    }
    if let Some(current) = ctx.current_target.clone() {
        if current.is_imported() {
            for alt in current.mapped_configs(&ctx.config) {
                if alt.eq_ignore_ascii_case(p) {
                    return "1".to_string();
                }
            }
        }
    }
    "0".to_string()
}
