//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};
use dtsgen_lib::Indent;

/// Widest accepted `--indent` width.
const MAX_INDENT: u8 = 16;

#[derive(Debug, thiserror::Error)]
pub enum IndentError {
    #[error("expected `tab` or a width between 1 and 16, got `{0}`")]
    Invalid(String),
}

/// `tab`, or a number of spaces.
pub fn parse_indent(s: &str) -> Result<Indent, IndentError> {
    if s.eq_ignore_ascii_case("tab") {
        return Ok(Indent::Tab);
    }
    match s.parse::<u8>() {
        Ok(n) if (1..=MAX_INDENT).contains(&n) => Ok(Indent::Spaces(n)),
        _ => Err(IndentError::Invalid(s.to_string())),
    }
}

/// Metadata manifest (positional).
pub fn metadata_path_arg() -> Arg {
    Arg::new("metadata_path")
        .value_name("METADATA")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Metadata manifest (JSON)")
}

/// Seed assembly (-a/--assembly), repeatable.
pub fn assembly_arg() -> Arg {
    Arg::new("assembly")
        .short('a')
        .long("assembly")
        .value_name("NAME")
        .action(ArgAction::Append)
        .help("Seed with every public type of an assembly [default: all assemblies]")
}

/// Seed type (-t/--type), repeatable.
pub fn type_arg() -> Arg {
    Arg::new("type")
        .short('t')
        .long("type")
        .value_name("FULLNAME")
        .action(ArgAction::Append)
        .help("Seed with a single type by full name")
}

/// Output file (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write declarations to a file instead of stdout")
}

/// Root namespace name (--root).
pub fn root_arg() -> Arg {
    Arg::new("root")
        .long("root")
        .value_name("NAME")
        .help("Top-level namespace [default: dotnet]")
}

/// Indentation (--indent).
pub fn indent_arg() -> Arg {
    Arg::new("indent")
        .long("indent")
        .value_name("N|tab")
        .value_parser(parse_indent)
        .help("Indent with N spaces or a tab [default: 4]")
}

/// Omit the banner comment (--no-header).
pub fn no_header_arg() -> Arg {
    Arg::new("no_header")
        .long("no-header")
        .action(ArgAction::SetTrue)
        .help("Omit the auto-generated banner")
}

/// Mark getter-only properties readonly (--readonly).
pub fn readonly_arg() -> Arg {
    Arg::new("readonly")
        .long("readonly")
        .action(ArgAction::SetTrue)
        .help("Mark getter-only properties `readonly`")
}

/// Render static fields and properties (--static-members).
pub fn static_members_arg() -> Arg {
    Arg::new("static_members")
        .long("static-members")
        .action(ArgAction::SetTrue)
        .help("Also render public static fields and properties")
}
