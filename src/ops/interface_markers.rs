//! `BUILD_INTERFACE`, `INSTALL_INTERFACE`, `LINK_ONLY` (spec §4.10).
//! `INSTALL_PREFIX` is handled directly in [`crate::ops::dispatch`] since it
//! takes no parameter.

use crate::context::EvalContext;
use crate::dag::DagFrame;

pub fn build_interface(ctx: &mut EvalContext, content: &str) -> String {
    if ctx.exporting {
        String::new()
    } else {
        content.to_string()
    }
}

pub fn install_interface(ctx: &mut EvalContext, content: &str) -> String {
    if ctx.exporting {
        content.to_string()
    } else {
        String::new()
    }
}

pub fn link_only(dag: Option<&DagFrame>, content: &str) -> String {
    if dag.map(|f| f.roles.transitive_properties_only).unwrap_or(false) {
        String::new()
    } else {
        content.to_string()
    }
}
