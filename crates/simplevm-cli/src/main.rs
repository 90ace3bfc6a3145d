#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod cli;
mod commands;

use cli::{CatalogParams, DumpParams, FoldParams, PackParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("pack", m)) => {
            let params = PackParams::from_matches(m);
            commands::pack::run(params.into());
        }
        Some(("fold", m)) => {
            let params = FoldParams::from_matches(m);
            commands::fold::run(params.into());
        }
        Some(("catalog", m)) => {
            let params = CatalogParams::from_matches(m);
            commands::catalog::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
