//! List the type registry and operator catalog.

use std::fmt::Write as _;

use serde::Serialize;
use simplevm_compiler::{OperatorKind, TypeCategory, TypeName};

pub struct CatalogArgs {
    pub json: bool,
}

#[derive(Serialize)]
struct Catalog {
    types: Vec<TypeEntry>,
    operators: Vec<OperatorEntry>,
}

#[derive(Serialize)]
struct TypeEntry {
    name: TypeName,
    category: TypeCategory,
}

#[derive(Serialize)]
struct OperatorEntry {
    kind: OperatorKind,
    symbol: &'static str,
    matched_by_lexer: bool,
    infix: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    arity: Option<usize>,
    has_rules: bool,
}

fn catalog() -> Catalog {
    Catalog {
        types: TypeName::ALL
            .iter()
            .map(|&name| TypeEntry {
                name,
                category: name.category(),
            })
            .collect(),
        operators: OperatorKind::ALL
            .iter()
            .map(|&kind| OperatorEntry {
                kind,
                symbol: kind.symbol(),
                matched_by_lexer: kind.matched_by_lexer(),
                infix: kind.is_infix(),
                arity: kind.arity(),
                has_rules: kind.has_rules(),
            })
            .collect(),
    }
}

pub fn run(args: CatalogArgs) {
    print!("{}", render(&args));
}

pub(crate) fn render(args: &CatalogArgs) -> String {
    let catalog = catalog();
    if args.json {
        // Plain data with string keys; serialization cannot fail.
        let mut json = serde_json::to_string_pretty(&catalog).unwrap();
        json.push('\n');
        return json;
    }

    let mut out = String::new();
    writeln!(out, "types:").unwrap();
    for t in &catalog.types {
        writeln!(out, "  {:<8} {}", t.name.symbol(), t.category.name()).unwrap();
    }
    writeln!(out, "\noperators:").unwrap();
    for op in &catalog.operators {
        let symbol = if op.symbol.is_empty() { "\"\"" } else { op.symbol };
        let arity = op.arity.map_or("n".to_string(), |n| n.to_string());
        let lexer = if op.matched_by_lexer { "lexer" } else { "parser" };
        let rules = if op.has_rules { "folds" } else { "no rules" };
        writeln!(
            out,
            "  {:<13} {:<2}  arity {}  {:<6} {}",
            op.kind.name(),
            symbol,
            arity,
            lexer,
            rules
        )
        .unwrap();
    }
    out
}
