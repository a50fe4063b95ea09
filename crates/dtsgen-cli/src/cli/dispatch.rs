//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use dtsgen_lib::Indent;

use crate::commands::Seeds;
use crate::commands::generate::GenerateArgs;
use crate::commands::graph::GraphArgs;

pub struct GenerateParams {
    pub metadata_path: PathBuf,
    pub assemblies: Vec<String>,
    pub types: Vec<String>,
    pub output: Option<PathBuf>,
    pub root: Option<String>,
    pub indent: Option<Indent>,
    pub no_header: bool,
    pub readonly: bool,
    pub static_members: bool,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            metadata_path: metadata_path(m),
            assemblies: strings(m, "assembly"),
            types: strings(m, "type"),
            output: m.get_one::<PathBuf>("output").cloned(),
            root: m.get_one::<String>("root").cloned(),
            indent: m.get_one::<Indent>("indent").copied(),
            no_header: m.get_flag("no_header"),
            readonly: m.get_flag("readonly"),
            static_members: m.get_flag("static_members"),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            metadata_path: p.metadata_path,
            seeds: Seeds {
                assemblies: p.assemblies,
                types: p.types,
            },
            output: p.output,
            root: p.root,
            indent: p.indent,
            header: !p.no_header,
            readonly: p.readonly,
            static_members: p.static_members,
        }
    }
}

pub struct GraphParams {
    pub metadata_path: PathBuf,
    pub assemblies: Vec<String>,
    pub types: Vec<String>,
}

impl GraphParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            metadata_path: metadata_path(m),
            assemblies: strings(m, "assembly"),
            types: strings(m, "type"),
        }
    }
}

impl From<GraphParams> for GraphArgs {
    fn from(p: GraphParams) -> Self {
        Self {
            metadata_path: p.metadata_path,
            seeds: Seeds {
                assemblies: p.assemblies,
                types: p.types,
            },
        }
    }
}

fn metadata_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("metadata_path")
        .cloned()
        .unwrap_or_default()
}

fn strings(m: &ArgMatches, id: &str) -> Vec<String> {
    m.get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}
