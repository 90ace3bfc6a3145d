//! Assemble a module from raw payload files.

use std::path::PathBuf;

use simplevm_bytecode::{ChunkKind, ModuleBuilder};

use super::{CommandError, fail, read_file, write_file};

/// One `--chunk KIND=PATH` argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkSpec {
    pub kind: ChunkKind,
    pub path: PathBuf,
}

pub struct PackArgs {
    pub output: PathBuf,
    pub chunks: Vec<ChunkSpec>,
    pub header: bool,
}

pub fn run(args: PackArgs) {
    match pack(&args) {
        Ok(size) => eprintln!("wrote {} ({} bytes)", args.output.display(), size),
        Err(e) => fail(e),
    }
}

/// Build and write the module; returns the encoded size.
pub(crate) fn pack(args: &PackArgs) -> Result<usize, CommandError> {
    let mut builder = if args.header {
        ModuleBuilder::new()
    } else {
        ModuleBuilder::headerless()
    };

    for spec in &args.chunks {
        let payload = read_file(&spec.path)?;
        builder
            .push(spec.kind, payload)
            .map_err(|source| CommandError::Module {
                path: spec.path.clone(),
                source,
            })?;
    }

    let bytes = builder.finish().to_bytes();
    write_file(&args.output, &bytes)?;
    Ok(bytes.len())
}
