//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use dtsgen_lib::Indent;

use super::*;
use crate::cli::args::parse_indent;
use crate::cli::commands::{generate_command, graph_command};
use crate::commands::generate::GenerateArgs;
use crate::commands::graph::GraphArgs;

#[test]
fn generate_defaults() {
    let m = generate_command()
        .try_get_matches_from(["generate", "metadata.json"])
        .unwrap();
    let params = GenerateParams::from_matches(&m);

    assert_eq!(params.metadata_path, PathBuf::from("metadata.json"));
    assert!(params.assemblies.is_empty());
    assert!(params.types.is_empty());
    assert_eq!(params.output, None);
    assert_eq!(params.root, None);
    assert_eq!(params.indent, None);
    assert!(!params.no_header);

    let args: GenerateArgs = params.into();
    assert!(args.header);
    assert!(!args.readonly);
    assert!(!args.static_members);
}

#[test]
fn generate_collects_repeated_seeds() {
    let m = generate_command()
        .try_get_matches_from([
            "generate",
            "metadata.json",
            "-a",
            "Acme.Core",
            "--assembly",
            "Acme.Extra",
            "-t",
            "Acme.Widget",
            "-o",
            "acme.d.ts",
        ])
        .unwrap();
    let args: GenerateArgs = GenerateParams::from_matches(&m).into();

    assert_eq!(args.seeds.assemblies, ["Acme.Core", "Acme.Extra"]);
    assert_eq!(args.seeds.types, ["Acme.Widget"]);
    assert_eq!(args.output, Some(PathBuf::from("acme.d.ts")));
}

#[test]
fn generate_config_flags() {
    let m = generate_command()
        .try_get_matches_from([
            "generate",
            "metadata.json",
            "--root",
            "host",
            "--indent",
            "tab",
            "--no-header",
            "--readonly",
            "--static-members",
        ])
        .unwrap();
    let args: GenerateArgs = GenerateParams::from_matches(&m).into();

    assert_eq!(args.root.as_deref(), Some("host"));
    assert_eq!(args.indent, Some(Indent::Tab));
    assert!(!args.header);
    assert!(args.readonly);
    assert!(args.static_members);
}

#[test]
fn generate_requires_metadata() {
    let result = generate_command().try_get_matches_from(["generate"]);
    assert!(result.is_err());
}

#[test]
fn generate_rejects_bad_indent() {
    let result =
        generate_command().try_get_matches_from(["generate", "m.json", "--indent", "wide"]);
    assert!(result.is_err());
}

#[test]
fn indent_values() {
    assert_eq!(parse_indent("2").unwrap(), Indent::Spaces(2));
    assert_eq!(parse_indent("TAB").unwrap(), Indent::Tab);
    assert!(parse_indent("0").is_err());
    assert!(parse_indent("17").is_err());
    assert_eq!(
        parse_indent("-1").unwrap_err().to_string(),
        "expected `tab` or a width between 1 and 16, got `-1`"
    );
}

#[test]
fn graph_ignores_emit_flags() {
    let result = graph_command().try_get_matches_from(["graph", "m.json", "--readonly"]);
    assert!(result.is_err());

    let m = graph_command()
        .try_get_matches_from(["graph", "m.json", "-t", "Acme.Widget"])
        .unwrap();
    let args: GraphArgs = GraphParams::from_matches(&m).into();
    assert_eq!(args.metadata_path, PathBuf::from("m.json"));
    assert!(args.seeds.assemblies.is_empty());
    assert_eq!(args.seeds.types, ["Acme.Widget"]);
}

#[test]
fn subcommand_is_required() {
    let result = build_cli().try_get_matches_from(["dtsgen"]);
    assert!(result.is_err());

    let m = build_cli()
        .try_get_matches_from(["dtsgen", "graph", "m.json"])
        .unwrap();
    assert_eq!(m.subcommand_name(), Some("graph"));
}
