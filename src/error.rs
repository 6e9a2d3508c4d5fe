//! The typed error taxonomy consulted internally via `?`/`From` conversions.
//!
//! `EvalError` is never the return type of the public `evaluate` entry point
//! (per spec §3/§7 the contract is "set `had_error`, return empty string"),
//! but every fallible helper (integer/version parsing, name validation,
//! host lookups) returns `Result<T, EvalError>` so the driver can convert the
//! first failure into the sticky flag plus a dispatched diagnostic.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("unknown generator expression identifier \"{0}\"")]
    UnknownIdentifier(String),

    #[error("$<{0}:...> expects at least one parameter")]
    MissingParameter(String),

    #[error("$<{identifier}> expects {expected} parameter(s), got {found}")]
    ArityMismatch {
        identifier: String,
        expected: String,
        found: usize,
    },

    #[error("$<{0}:...> requires literal (non-generator-expression) parameters")]
    NonLiteralParameter(String),

    #[error("$<{0}> may only be used while evaluating a binary target")]
    RequiresBinaryTarget(String),

    #[error("\"{0}\" is not a valid integer")]
    MalformedInteger(String),

    #[error("\"{0}\" is not a valid version string")]
    MalformedVersion(String),

    #[error("$<{0}> is only valid during buildsystem generation")]
    BuildsystemOnly(String),

    #[error("target \"{0}\" is not linkable")]
    NotLinkable(String),

    #[error("target \"{0}\" does not produce a soname file on this platform")]
    NotSonameEligible(String),

    #[error("no target named \"{0}\"")]
    UnknownTarget(String),

    #[error("\"{0}\" is not a valid property name")]
    InvalidPropertyName(String),

    #[error("self-referential read of property \"{property}\" on target \"{target}\"")]
    SelfReference { target: String, property: String },

    #[error("recursive evaluation of transitive property \"{property}\" while evaluating link libraries")]
    RecursionOverLinkLibraries { property: String },

    #[error(
        "LINKER_LANGUAGE is unavailable while evaluating the link libraries or sources of a \
         static library that propagates its linker language"
    )]
    LinkerLanguageUnavailable,

    #[error("\"{policy}\" is not a recognized target policy; accepted policies are: {accepted}")]
    UnknownPolicy { policy: String, accepted: String },

    #[error("invalid value \"{value}\" for $<{identifier}>")]
    InvalidOperand { identifier: String, value: String },

    #[error("$<INSTALL_PREFIX> is only valid during export-file generation")]
    InstallPrefixOutsideExport,

    #[error("no generator-expression parser is available to the evaluator")]
    ParserUnavailable,
}
