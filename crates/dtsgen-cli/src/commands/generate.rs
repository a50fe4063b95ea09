use std::io::{self, Write};
use std::path::PathBuf;

use dtsgen_lib::{Generator, Indent, TsEmitConfig};

use super::{Seeds, load_metadata, seed_or_exit};

pub struct GenerateArgs {
    pub metadata_path: PathBuf,
    pub seeds: Seeds,
    pub output: Option<PathBuf>,
    pub root: Option<String>,
    pub indent: Option<Indent>,
    pub header: bool,
    pub readonly: bool,
    pub static_members: bool,
}

impl GenerateArgs {
    pub fn config(&self) -> TsEmitConfig {
        let mut config = TsEmitConfig::new()
            .header(self.header)
            .readonly_properties(self.readonly)
            .static_members(self.static_members);
        if let Some(root) = &self.root {
            config = config.root_namespace(root.as_str());
        }
        if let Some(indent) = self.indent {
            config = config.indent(indent);
        }
        config
    }
}

pub fn run(args: GenerateArgs) {
    let set = load_metadata(&args.metadata_path);
    let mut generator = Generator::with_config(&set, args.config());
    seed_or_exit(&args.seeds, &set, &mut generator);
    tracing::debug!(types = generator.graph().len(), "closed type graph");

    if let Some(ref path) = args.output {
        generator.write(path).unwrap_or_else(|e| {
            eprintln!("error: {e}");
            std::process::exit(1);
        });
        return;
    }

    let output = generator.emit();
    if let Err(e) = io::stdout().write_all(output.as_bytes()) {
        eprintln!("error: failed to write to stdout: {e}");
        std::process::exit(1);
    }
}
