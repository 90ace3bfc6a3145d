//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("simplevm")
        .about("Inspect, assemble and fold SimpleVM modules")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(dump_command())
        .subcommand(pack_command())
        .subcommand(fold_command())
        .subcommand(catalog_command())
}

/// Decode a module and show its chunks.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the chunks of a module file")
        .after_help(
            r#"EXAMPLES:
  simplevm dump app.svm                 # header, chunks, constants
  simplevm dump app.svm --skip-unknown  # tolerate newer chunk kinds"#,
        )
        .arg(module_path_arg())
        .arg(skip_unknown_arg())
        .arg(color_arg())
}

/// Assemble a module from raw payload files.
pub fn pack_command() -> Command {
    Command::new("pack")
        .about("Assemble a module from payload files")
        .after_help(
            r#"EXAMPLES:
  simplevm pack -o app.svm --chunk instructions=code.bin
  simplevm pack -o app.svm --chunk CONSTANT_POOL=pool.bin --chunk jump-table=jt.bin"#,
        )
        .arg(output_file_arg().required(true))
        .arg(chunk_arg())
        .arg(no_header_arg())
}

/// Constant-fold an expression tree.
pub fn fold_command() -> Command {
    Command::new("fold")
        .about("Constant-fold an expression tree")
        .after_help(
            r#"EXAMPLES:
  simplevm fold expr.json               # folded tree and root value
  simplevm fold expr.json -vv           # trace every node on stderr
  simplevm fold expr.json -o out.svm    # also emit the constant pool"#,
        )
        .arg(expr_path_arg())
        .arg(strict_arg())
        .arg(verbose_arg())
        .arg(output_file_arg())
        .arg(color_arg())
}

/// List types and operators.
pub fn catalog_command() -> Command {
    Command::new("catalog")
        .about("List primitive types and operators")
        .arg(json_arg())
}
