mod cli;
mod commands;
mod tracing_config;

use cli::{GenerateParams, GraphParams, build_cli};

fn main() {
    tracing_config::init_tracing();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("graph", m)) => {
            let params = GraphParams::from_matches(m);
            commands::graph::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
