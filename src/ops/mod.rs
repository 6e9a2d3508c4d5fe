//! The ~50 built-in operators and the static table mapping each identifier
//! to its [`NodeDescriptor`]. Dispatch is a single `match` over [`Op`]
//! rather than a function-pointer table, per the sum-type alternative the
//! design notes (spec §9) call out — this sidesteps threading `&mut
//! EvalContext` through higher-ranked fn-pointer types for no benefit.

pub mod compile_features;
pub mod compiler;
pub mod config_ops;
pub mod genex_eval;
pub mod interface_markers;
pub mod literal;
pub mod logical;
pub mod string_ops;
pub mod target_file;
pub mod target_objects;
pub mod target_policy;
pub mod target_property;
pub mod version_ops;

use crate::context::EvalContext;
use crate::dag::DagFrame;
use crate::driver::fatal;
use crate::host::{Artifact, Qualifier};
use crate::node::{Arity, NodeDescriptor, Op};
use crate::policy::CASE_INSENSITIVE_COMPILER_ID_MATCH;

pub const NODES: &[NodeDescriptor] = &[
    NodeDescriptor::new("0", Op::Zero, Arity::Exact(1)).arbitrary().discards_content(),
    NodeDescriptor::new("1", Op::One, Arity::Exact(1)).arbitrary(),
    NodeDescriptor::new("AND", Op::And, Arity::OneOrMore),
    NodeDescriptor::new("OR", Op::Or, Arity::OneOrMore),
    NodeDescriptor::new("NOT", Op::Not, Arity::Exact(1)),
    NodeDescriptor::new("BOOL", Op::Bool, Arity::Exact(1)),
    NodeDescriptor::new("IF", Op::If, Arity::Exact(3)),
    NodeDescriptor::new("STREQUAL", Op::StrEqual, Arity::Exact(2)),
    NodeDescriptor::new("EQUAL", Op::Equal, Arity::Exact(2)),
    NodeDescriptor::new("IN_LIST", Op::InList, Arity::Exact(2)),
    NodeDescriptor::new("VERSION_LESS", Op::VersionLess, Arity::Exact(2)).literal_only(),
    NodeDescriptor::new("VERSION_GREATER", Op::VersionGreater, Arity::Exact(2)).literal_only(),
    NodeDescriptor::new("VERSION_EQUAL", Op::VersionEqual, Arity::Exact(2)).literal_only(),
    NodeDescriptor::new("VERSION_LESS_EQUAL", Op::VersionLessEqual, Arity::Exact(2)).literal_only(),
    NodeDescriptor::new("VERSION_GREATER_EQUAL", Op::VersionGreaterEqual, Arity::Exact(2)).literal_only(),
    NodeDescriptor::new("ANGLE-R", Op::AngleR, Arity::Exact(0)),
    NodeDescriptor::new("COMMA", Op::Comma, Arity::Exact(0)),
    NodeDescriptor::new("SEMICOLON", Op::Semicolon, Arity::Exact(0)),
    NodeDescriptor::new("LOWER_CASE", Op::LowerCase, Arity::Exact(1)),
    NodeDescriptor::new("UPPER_CASE", Op::UpperCase, Arity::Exact(1)),
    NodeDescriptor::new("MAKE_C_IDENTIFIER", Op::MakeCIdentifier, Arity::Exact(1)),
    NodeDescriptor::new("JOIN", Op::Join, Arity::Exact(2)),
    NodeDescriptor::new("C_COMPILER_ID", Op::CCompilerId, Arity::OneOrZero).literal_only(),
    NodeDescriptor::new("CXX_COMPILER_ID", Op::CxxCompilerId, Arity::OneOrZero).literal_only(),
    NodeDescriptor::new("PLATFORM_ID", Op::PlatformId, Arity::OneOrZero).literal_only(),
    NodeDescriptor::new("C_COMPILER_VERSION", Op::CCompilerVersion, Arity::OneOrZero).literal_only(),
    NodeDescriptor::new("CXX_COMPILER_VERSION", Op::CxxCompilerVersion, Arity::OneOrZero).literal_only(),
    NodeDescriptor::new("CONFIG", Op::Config, Arity::OneOrZero).literal_only(),
    NodeDescriptor::new("TARGET_FILE", Op::TargetFile, Arity::Exact(1)),
    NodeDescriptor::new("TARGET_LINKER_FILE", Op::TargetLinkerFile, Arity::Exact(1)),
    NodeDescriptor::new("TARGET_SONAME_FILE", Op::TargetSonameFile, Arity::Exact(1)),
    NodeDescriptor::new("TARGET_FILE_NAME", Op::TargetFileName, Arity::Exact(1)),
    NodeDescriptor::new("TARGET_LINKER_FILE_NAME", Op::TargetLinkerFileName, Arity::Exact(1)),
    NodeDescriptor::new("TARGET_SONAME_FILE_NAME", Op::TargetSonameFileName, Arity::Exact(1)),
    NodeDescriptor::new("TARGET_FILE_DIR", Op::TargetFileDir, Arity::Exact(1)),
    NodeDescriptor::new("TARGET_LINKER_FILE_DIR", Op::TargetLinkerFileDir, Arity::Exact(1)),
    NodeDescriptor::new("TARGET_SONAME_FILE_DIR", Op::TargetSonameFileDir, Arity::Exact(1)),
    NodeDescriptor::new("TARGET_PROPERTY", Op::TargetProperty, Arity::Dynamic),
    NodeDescriptor::new("TARGET_OBJECTS", Op::TargetObjects, Arity::Exact(1)),
    NodeDescriptor::new("COMPILE_FEATURES", Op::CompileFeatures, Arity::OneOrMore),
    NodeDescriptor::new("TARGET_POLICY", Op::TargetPolicy, Arity::Exact(1)).literal_only(),
    NodeDescriptor::new("BUILD_INTERFACE", Op::BuildInterface, Arity::Exact(1)).arbitrary(),
    NodeDescriptor::new("INSTALL_INTERFACE", Op::InstallInterface, Arity::Exact(1)).arbitrary(),
    NodeDescriptor::new("INSTALL_PREFIX", Op::InstallPrefix, Arity::Exact(0)),
    NodeDescriptor::new("LINK_ONLY", Op::LinkOnly, Arity::Exact(1)).arbitrary(),
    NodeDescriptor::new("GENEX_EVAL", Op::GenexEval, Arity::Exact(1)),
    NodeDescriptor::new("TARGET_GENEX_EVAL", Op::TargetGenexEval, Arity::Dynamic),
];

pub fn dispatch(op: Op, identifier: &str, params: &[String], ctx: &mut EvalContext, dag: Option<&DagFrame>) -> String {
    use Op::*;

    let result: Result<String, crate::error::EvalError> = match op {
        Zero => Ok(String::new()),
        One => Ok(params[0].clone()),
        And => logical::eval_and(identifier, params),
        Or => logical::eval_or(identifier, params),
        Not => logical::eval_not(params),
        Bool => Ok(logical::eval_bool(params)),
        If => logical::eval_if(params),
        StrEqual => Ok(logical::eval_strequal(params)),
        Equal => crate::numeric::eval_equal(params),
        InList => Ok(logical::eval_in_list(params)),
        VersionLess => version_ops::version_less(&params[0], &params[1]),
        VersionGreater => version_ops::version_greater(&params[0], &params[1]),
        VersionEqual => version_ops::version_equal(&params[0], &params[1]),
        VersionLessEqual => version_ops::version_less_equal(&params[0], &params[1]),
        VersionGreaterEqual => version_ops::version_greater_equal(&params[0], &params[1]),
        AngleR => Ok(literal::angle_r()),
        Comma => Ok(literal::comma()),
        Semicolon => Ok(literal::semicolon()),
        LowerCase => Ok(string_ops::lower_case(&params[0])),
        UpperCase => Ok(string_ops::upper_case(&params[0])),
        MakeCIdentifier => Ok(string_ops::make_c_identifier(&params[0])),
        Join => Ok(string_ops::join(&params[0], &params[1])),
        CCompilerId => compiler::compiler_or_platform_query(
            ctx,
            "CMAKE_C_COMPILER_ID",
            "C_COMPILER_ID",
            params.first().map(String::as_str),
            CASE_INSENSITIVE_COMPILER_ID_MATCH,
        ),
        CxxCompilerId => compiler::compiler_or_platform_query(
            ctx,
            "CMAKE_CXX_COMPILER_ID",
            "CXX_COMPILER_ID",
            params.first().map(String::as_str),
            CASE_INSENSITIVE_COMPILER_ID_MATCH,
        ),
        PlatformId => compiler::compiler_or_platform_query(
            ctx,
            "CMAKE_SYSTEM_NAME",
            "PLATFORM_ID",
            params.first().map(String::as_str),
            CASE_INSENSITIVE_COMPILER_ID_MATCH,
        ),
        CCompilerVersion => compiler::compiler_version_query(
            ctx,
            "CMAKE_C_COMPILER_VERSION",
            "C_COMPILER_VERSION",
            params.first().map(String::as_str),
        ),
        CxxCompilerVersion => compiler::compiler_version_query(
            ctx,
            "CMAKE_CXX_COMPILER_VERSION",
            "CXX_COMPILER_VERSION",
            params.first().map(String::as_str),
        ),
        Config => Ok(config_ops::eval_config(ctx, params.first().map(String::as_str))),
        TargetFile => target_file::eval_target_file(ctx, dag, identifier, &params[0], Artifact::Main, Qualifier::Full),
        TargetLinkerFile => {
            target_file::eval_target_file(ctx, dag, identifier, &params[0], Artifact::Linker, Qualifier::Full)
        }
        TargetSonameFile => {
            target_file::eval_target_file(ctx, dag, identifier, &params[0], Artifact::Soname, Qualifier::Full)
        }
        TargetFileName => target_file::eval_target_file(ctx, dag, identifier, &params[0], Artifact::Main, Qualifier::Name),
        TargetLinkerFileName => {
            target_file::eval_target_file(ctx, dag, identifier, &params[0], Artifact::Linker, Qualifier::Name)
        }
        TargetSonameFileName => {
            target_file::eval_target_file(ctx, dag, identifier, &params[0], Artifact::Soname, Qualifier::Name)
        }
        TargetFileDir => target_file::eval_target_file(ctx, dag, identifier, &params[0], Artifact::Main, Qualifier::Dir),
        TargetLinkerFileDir => {
            target_file::eval_target_file(ctx, dag, identifier, &params[0], Artifact::Linker, Qualifier::Dir)
        }
        TargetSonameFileDir => {
            target_file::eval_target_file(ctx, dag, identifier, &params[0], Artifact::Soname, Qualifier::Dir)
        }
        TargetProperty => target_property::eval_target_property(ctx, dag, params),
        TargetObjects => target_objects::eval_target_objects(ctx, &params[0]),
        CompileFeatures => compile_features::eval_compile_features(ctx, dag, params),
        TargetPolicy => target_policy::eval_target_policy(ctx, &params[0]),
        BuildInterface => Ok(interface_markers::build_interface(ctx, &params[0])),
        InstallInterface => Ok(interface_markers::install_interface(ctx, &params[0])),
        InstallPrefix => {
            if ctx.exporting {
                Ok(String::new())
            } else {
                Err(crate::error::EvalError::InstallPrefixOutsideExport)
            }
        }
        LinkOnly => Ok(interface_markers::link_only(dag, &params[0])),
        GenexEval => genex_eval::eval_genex_eval(ctx, dag, &params[0]),
        TargetGenexEval => genex_eval::eval_target_genex_eval(ctx, dag, params),
    };

    match result {
        Ok(value) => value,
        Err(err) => fatal(ctx, dag, &err.to_string()),
    }
}
