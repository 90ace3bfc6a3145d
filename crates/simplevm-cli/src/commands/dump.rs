//! Decode a module file and print its chunks.

use std::fmt::Write as _;
use std::path::PathBuf;

use simplevm_bytecode::{Colors, DecodeConfig, Module, dump};
use simplevm_compiler::ConstantPool;

use super::{CommandError, fail, read_file};

pub struct DumpArgs {
    pub module_path: PathBuf,
    pub skip_unknown: bool,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    match render(&args) {
        Ok(out) => print!("{}", out),
        Err(e) => fail(e),
    }
}

pub(crate) fn render(args: &DumpArgs) -> Result<String, CommandError> {
    let bytes = read_file(&args.module_path)?;
    let config = DecodeConfig::new().skip_unknown(args.skip_unknown);
    let module =
        Module::from_bytes_with(&bytes, &config).map_err(|source| CommandError::Module {
            path: args.module_path.clone(),
            source,
        })?;

    let colors = Colors::new(args.color);
    let mut out = dump(&module, colors);
    let pool = ConstantPool::from_module(&module)?;
    if !pool.is_empty() {
        dump_constants(&mut out, &pool, colors);
    }
    Ok(out)
}

fn dump_constants(out: &mut String, pool: &ConstantPool, c: Colors) {
    let w = pool.len().to_string().len() + 1;

    writeln!(out, "\n{}[constants]{}", c.kind(), c.reset()).unwrap();
    for (id, constant) in pool.iter() {
        let id = id.to_string();
        writeln!(out, "{id:<w$} {}{constant}{}", c.value(), c.reset()).unwrap();
    }
}
