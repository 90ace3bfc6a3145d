pub mod catalog;
pub mod dump;
pub mod fold;
pub mod pack;

#[cfg(test)]
mod fold_tests;
#[cfg(test)]
mod pack_tests;

use std::io;
use std::path::{Path, PathBuf};

use simplevm_bytecode::ModuleError;
use simplevm_compiler::{EmitError, FoldError};

/// Failure of a command, printed as `error: ...` before exiting.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("{path}: {source}")]
    Module { path: PathBuf, source: ModuleError },
    #[error("{path}: invalid expression: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Fold(#[from] FoldError),
    #[error(transparent)]
    Emit(#[from] EmitError),
}

pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>, CommandError> {
    std::fs::read(path).map_err(|source| CommandError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> Result<(), CommandError> {
    std::fs::write(path, bytes).map_err(|source| CommandError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Print the error and exit with status 1.
pub(crate) fn fail(err: CommandError) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}
