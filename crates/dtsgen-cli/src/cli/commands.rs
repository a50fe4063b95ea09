//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("dtsgen")
        .about("TypeScript declarations from .NET-style type metadata")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(graph_command())
}

/// Add the seed selection args shared by every command.
fn with_seed_args(cmd: Command) -> Command {
    cmd.arg(metadata_path_arg())
        .arg(assembly_arg())
        .arg(type_arg())
}

/// Emit a declaration file.
pub fn generate_command() -> Command {
    let cmd = Command::new("generate")
        .about("Emit a TypeScript declaration file")
        .override_usage(
            "\
  dtsgen generate <METADATA> [-a <NAME>]... [-t <FULLNAME>]... [-o <FILE>]",
        )
        .after_help(
            r#"EXAMPLES:
  dtsgen generate metadata.json                       # every assembly, to stdout
  dtsgen generate metadata.json -a Acme.Core -o acme.d.ts
  dtsgen generate metadata.json -t Acme.Widget        # one type and its closure
  dtsgen generate metadata.json --root host --indent tab"#,
        );

    with_seed_args(cmd)
        .arg(output_arg())
        .arg(root_arg())
        .arg(indent_arg())
        .arg(no_header_arg())
        .arg(readonly_arg())
        .arg(static_members_arg())
}

/// List the closed type graph.
pub fn graph_command() -> Command {
    let cmd = Command::new("graph")
        .about("List the types a generate run would declare")
        .after_help(
            r#"EXAMPLES:
  dtsgen graph metadata.json
  dtsgen graph metadata.json -t Acme.Widget"#,
        );

    with_seed_args(cmd)
}
