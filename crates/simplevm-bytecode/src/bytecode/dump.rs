//! Human-readable module dump for debugging.
//!
//! ```text
//! [header]
//! magic   = "SVMB"
//! version = 1
//!
//! [chunks]
//! 0 FILE_HEADER              8  53 56 4d 42 00 00 00 01
//! 1 CONSTANT_POOL            3  01 02 03
//! ```

use std::fmt::Write as _;

use crate::colors::Colors;

use super::chunk::Chunk;
use super::module::Module;

/// Payload bytes shown per chunk before eliding.
const PREVIEW_BYTES: usize = 16;

/// Width of the kind name column (longest kind name).
const NAME_WIDTH: usize = 20;

/// Generate a human-readable dump of a module.
pub fn dump(module: &Module, colors: Colors) -> String {
    let mut out = String::new();
    dump_header(&mut out, module, colors);
    dump_chunks(&mut out, module, colors);
    out
}

fn dump_header(out: &mut String, module: &Module, c: Colors) {
    let header = match module.file_header() {
        Ok(Some(header)) => header,
        Ok(None) => return,
        Err(err) => {
            writeln!(out, "{}[header]{}", c.kind(), c.reset()).unwrap();
            writeln!(out, "{}unreadable: {err}{}", c.muted(), c.reset()).unwrap();
            out.push('\n');
            return;
        }
    };

    let magic = String::from_utf8_lossy(&header.magic);
    writeln!(out, "{}[header]{}", c.kind(), c.reset()).unwrap();
    writeln!(out, "magic   = {}{magic:?}{}", c.value(), c.reset()).unwrap();
    writeln!(out, "version = {}{}{}", c.value(), header.version, c.reset()).unwrap();
    out.push('\n');
}

fn dump_chunks(out: &mut String, module: &Module, c: Colors) {
    let w = width_for_count(module.len());

    writeln!(out, "{}[chunks]{}", c.kind(), c.reset()).unwrap();
    for (i, chunk) in module.chunks().iter().enumerate() {
        write!(
            out,
            "{i:0w$} {}{:<NAME_WIDTH$}{} {:>5}",
            c.kind(),
            chunk.kind().name(),
            c.reset(),
            chunk.len()
        )
        .unwrap();
        if !chunk.is_empty() {
            write!(out, "  {}{}{}", c.muted(), preview(chunk), c.reset()).unwrap();
        }
        out.push('\n');
    }
}

fn preview(chunk: &Chunk) -> String {
    let payload = chunk.payload();
    let shown = &payload[..payload.len().min(PREVIEW_BYTES)];
    let mut text = shown
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ");
    if payload.len() > PREVIEW_BYTES {
        text.push_str(" ...");
    }
    text
}

/// Digits needed to print indices `0..count`.
fn width_for_count(count: usize) -> usize {
    if count <= 1 {
        1
    } else {
        ((count - 1) as f64).log10().floor() as usize + 1
    }
}
