//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};
use simplevm_bytecode::ChunkKind;

use crate::commands::pack::ChunkSpec;

/// Module file to read (positional).
pub fn module_path_arg() -> Arg {
    Arg::new("module_path")
        .value_name("MODULE")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Module file")
}

/// Expression file to fold (positional).
pub fn expr_path_arg() -> Arg {
    Arg::new("expr_path")
        .value_name("EXPR")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Expression tree as JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Skip chunks of unknown kinds (--skip-unknown).
pub fn skip_unknown_arg() -> Arg {
    Arg::new("skip_unknown")
        .long("skip-unknown")
        .action(ArgAction::SetTrue)
        .help("Skip chunks of unknown kinds instead of failing")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write a module to file")
}

/// Build a module without FILE_HEADER (--no-header).
pub fn no_header_arg() -> Arg {
    Arg::new("no_header")
        .long("no-header")
        .action(ArgAction::SetTrue)
        .help("Don't emit a FILE_HEADER chunk")
}

/// Chunk payload file (--chunk KIND=PATH), repeatable.
pub fn chunk_arg() -> Arg {
    Arg::new("chunk")
        .long("chunk")
        .value_name("KIND=PATH")
        .action(ArgAction::Append)
        .value_parser(parse_chunk_spec)
        .help("Add a chunk whose payload is the contents of PATH")
}

/// Gate folding on the operator type rules (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Reject operands the type rules don't accept")
}

/// Trace verbosity (-v).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Trace evaluation (-v for applications, -vv for every node)")
}

/// Output JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output JSON")
}

pub(crate) fn parse_chunk_spec(text: &str) -> Result<ChunkSpec, String> {
    let Some((kind, path)) = text.split_once('=') else {
        return Err(format!("expected KIND=PATH, got '{text}'"));
    };
    let kind = ChunkKind::from_name(kind).ok_or_else(|| {
        let names: Vec<_> = ChunkKind::ALL.iter().map(|k| k.name()).collect();
        format!("unknown chunk kind '{kind}' (expected one of {})", names.join(", "))
    })?;
    if path.is_empty() {
        return Err(format!("missing payload path for {kind}"));
    }
    Ok(ChunkSpec {
        kind,
        path: PathBuf::from(path),
    })
}
