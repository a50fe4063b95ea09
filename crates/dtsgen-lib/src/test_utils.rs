//! Test utilities: fixture loading and one-call emission.

use dtsgen_core::MetadataSet;

use crate::graph::{GraphBuilder, TypeGraph};
use crate::typegen::typescript::{self, Config};

/// Parse a fixture manifest. Fixtures are written inline with `indoc!`.
pub fn metadata(json: &str) -> MetadataSet {
    MetadataSet::from_json(json).expect("fixture manifest must parse")
}

/// Close the graph over every assembly in the manifest.
pub fn build_all(set: &MetadataSet) -> TypeGraph<'_> {
    let mut builder = GraphBuilder::new(set);
    for assembly in set.assemblies() {
        builder
            .add_assembly(&assembly.name)
            .expect("fixture assembly must exist");
    }
    builder.into_graph()
}

/// Full names in admission order.
pub fn admitted(graph: &TypeGraph<'_>) -> Vec<String> {
    graph.iter().map(|(_, d)| d.full_name.clone()).collect()
}

/// Emit a fixture without the banner.
pub fn emit_fixture(json: &str) -> String {
    emit_fixture_with(json, Config::new())
}

/// Emit a fixture with custom config; the banner is always off.
pub fn emit_fixture_with(json: &str, config: Config) -> String {
    let set = metadata(json);
    let graph = build_all(&set);
    typescript::emit_with_config(&graph, config.header(false))
}
