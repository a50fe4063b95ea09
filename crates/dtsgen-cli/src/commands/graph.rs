use std::io::{self, Write};
use std::path::PathBuf;

use dtsgen_lib::typegen::typescript::{SkipReason, skip_reason};
use dtsgen_lib::{Generator, TypeGraph};

use super::{Seeds, load_metadata, seed_or_exit};

pub struct GraphArgs {
    pub metadata_path: PathBuf,
    pub seeds: Seeds,
}

pub fn run(args: GraphArgs) {
    let set = load_metadata(&args.metadata_path);
    let mut generator = Generator::new(&set);
    seed_or_exit(&args.seeds, &set, &mut generator);

    let listing = render(generator.graph());
    if let Err(e) = io::stdout().write_all(listing.as_bytes()) {
        eprintln!("error: failed to write to stdout: {e}");
        std::process::exit(1);
    }
}

/// One `<kind> <full name>` line per admitted top-level type, in emission
/// order. Types the emitter would drop carry a `(skipped: ...)` suffix.
pub fn render(graph: &TypeGraph<'_>) -> String {
    let mut out = String::new();
    for ids in graph.by_namespace().into_values() {
        for id in ids {
            let Some(desc) = graph.get(id) else {
                continue;
            };
            out.push_str(desc.kind.keyword());
            out.push(' ');
            out.push_str(&desc.full_name);
            if let Some(reason) = skip_reason(desc) {
                out.push_str(" (skipped: ");
                out.push_str(describe(reason));
                out.push(')');
            }
            out.push('\n');
        }
    }
    out
}

pub fn describe(reason: SkipReason) -> &'static str {
    match reason {
        SkipReason::Nested => "nested type",
        SkipReason::ClosedGenericArgument => "closed generic argument",
    }
}
