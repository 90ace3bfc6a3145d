//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` mirror the command `*Args` but hold raw CLI choices (color mode,
//! `-v` count); the `From` impls resolve them.

use std::path::PathBuf;

use clap::ArgMatches;
use simplevm_compiler::{FoldPolicy, Verbosity};

use super::ColorChoice;
use crate::commands::catalog::CatalogArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::fold::FoldArgs;
use crate::commands::pack::{ChunkSpec, PackArgs};

pub struct DumpParams {
    pub module_path: PathBuf,
    pub skip_unknown: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            module_path: m.get_one::<PathBuf>("module_path").cloned().unwrap(),
            skip_unknown: m.get_flag("skip_unknown"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            module_path: p.module_path,
            skip_unknown: p.skip_unknown,
            color: p.color.should_colorize(),
        }
    }
}

pub struct PackParams {
    pub output: PathBuf,
    pub chunks: Vec<ChunkSpec>,
    pub no_header: bool,
}

impl PackParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            output: m.get_one::<PathBuf>("output").cloned().unwrap(),
            chunks: m
                .get_many::<ChunkSpec>("chunk")
                .map(|specs| specs.cloned().collect())
                .unwrap_or_default(),
            no_header: m.get_flag("no_header"),
        }
    }
}

impl From<PackParams> for PackArgs {
    fn from(p: PackParams) -> Self {
        Self {
            output: p.output,
            chunks: p.chunks,
            header: !p.no_header,
        }
    }
}

pub struct FoldParams {
    pub expr_path: PathBuf,
    pub strict: bool,
    pub verbose: u8,
    pub output: Option<PathBuf>,
    pub color: ColorChoice,
}

impl FoldParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            expr_path: m.get_one::<PathBuf>("expr_path").cloned().unwrap(),
            strict: m.get_flag("strict"),
            verbose: m.get_count("verbose"),
            output: m.get_one::<PathBuf>("output").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<FoldParams> for FoldArgs {
    fn from(p: FoldParams) -> Self {
        let trace = match p.verbose {
            0 => None,
            1 => Some(Verbosity::Default),
            _ => Some(Verbosity::Verbose),
        };
        let policy = if p.strict {
            FoldPolicy::Strict
        } else {
            FoldPolicy::Lenient
        };

        Self {
            expr_path: p.expr_path,
            policy,
            trace,
            output: p.output,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CatalogParams {
    pub json: bool,
}

impl CatalogParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            json: m.get_flag("json"),
        }
    }
}

impl From<CatalogParams> for CatalogArgs {
    fn from(p: CatalogParams) -> Self {
        Self { json: p.json }
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
