use std::fs;

use simplevm_bytecode::{ChunkKind, FileHeader, Module, ModuleError};

use super::CommandError;
use super::pack::{ChunkSpec, PackArgs, pack};

fn spec(kind: ChunkKind, path: &std::path::Path) -> ChunkSpec {
    ChunkSpec {
        kind,
        path: path.to_path_buf(),
    }
}

#[test]
fn packs_payload_files_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let code = dir.path().join("code.bin");
    let jumps = dir.path().join("jumps.bin");
    fs::write(&code, [1, 2, 3]).unwrap();
    fs::write(&jumps, []).unwrap();
    let output = dir.path().join("out.svm");

    let size = pack(&PackArgs {
        output: output.clone(),
        chunks: vec![
            spec(ChunkKind::Instructions, &code),
            spec(ChunkKind::JumpTable, &jumps),
        ],
        header: true,
    })
    .unwrap();

    let module = Module::from_path(&output).unwrap();
    assert_eq!(size, fs::metadata(&output).unwrap().len() as usize);
    assert_eq!(module.file_header().unwrap(), Some(FileHeader::default()));
    let kinds: Vec<_> = module.chunks().iter().map(|c| c.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ChunkKind::FileHeader,
            ChunkKind::Instructions,
            ChunkKind::JumpTable
        ]
    );
    assert_eq!(
        module.chunk(ChunkKind::Instructions).unwrap().payload(),
        &[1, 2, 3]
    );
}

#[test]
fn headerless_pack() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.svm");

    let size = pack(&PackArgs {
        output: output.clone(),
        chunks: Vec::new(),
        header: false,
    })
    .unwrap();

    assert_eq!(size, 0);
    assert!(Module::from_path(&output).unwrap().is_empty());
}

#[test]
fn duplicate_kind_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.bin");
    fs::write(&a, [0]).unwrap();

    let err = pack(&PackArgs {
        output: dir.path().join("out.svm"),
        chunks: vec![
            spec(ChunkKind::StackFrames, &a),
            spec(ChunkKind::StackFrames, &a),
        ],
        header: true,
    })
    .unwrap_err();

    assert!(matches!(
        err,
        CommandError::Module {
            source: ModuleError::DuplicateChunk(ChunkKind::StackFrames),
            ..
        }
    ));
    assert!(err.to_string().ends_with("a.bin: duplicate STACK_FRAMES chunk"));
    assert!(!dir.path().join("out.svm").exists());
}

#[test]
fn missing_payload_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = pack(&PackArgs {
        output: dir.path().join("out.svm"),
        chunks: vec![spec(ChunkKind::Instructions, &dir.path().join("nope.bin"))],
        header: true,
    })
    .unwrap_err();

    assert!(matches!(err, CommandError::Io { .. }));
}
