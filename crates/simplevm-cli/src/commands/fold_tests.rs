use std::fs;
use std::path::{Path, PathBuf};

use indoc::indoc;
use simplevm_bytecode::{Colors, Module};
use simplevm_compiler::{
    Constant, ConstantPool, FoldPolicy, NoopTracer, PrintTracer, Verbosity,
};

use super::CommandError;
use super::fold::{FoldArgs, fold_with, load_expr};

const SAMPLE: &str = indoc! {r#"
    {"apply": {"op": "MINUS", "operands": [
        {"apply": {"op": "PLUS", "operands": [{"literal": 1}, {"literal": 2}]}},
        {"apply": {"op": "PLUS", "operands": [{"variable": {"name": "x"}}, {"literal": 3}]}}
    ]}}
"#};

fn write_expr(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("expr.json");
    fs::write(&path, json).unwrap();
    path
}

fn args(expr_path: PathBuf) -> FoldArgs {
    FoldArgs {
        expr_path,
        policy: FoldPolicy::Lenient,
        trace: None,
        output: None,
        color: false,
    }
}

#[test]
fn prints_folded_tree_and_value() {
    let dir = tempfile::tempdir().unwrap();
    let args = args(write_expr(dir.path(), SAMPLE));
    let expr = load_expr(&args.expr_path).unwrap();

    let (_, result) = fold_with(&args, &expr, NoopTracer);
    let report = result.unwrap();

    insta::assert_snapshot!(report.text, @r"
    (- 3 (+ x 3))
    ?: integral
    ");
    assert_eq!(report.written, None);
}

#[test]
fn trace_is_collected() {
    let dir = tempfile::tempdir().unwrap();
    let args = args(write_expr(dir.path(), SAMPLE));
    let expr = load_expr(&args.expr_path).unwrap();

    let tracer = PrintTracer::new(Verbosity::Default, Colors::OFF);
    let (tracer, result) = fold_with(&args, &expr, tracer);

    assert!(result.is_ok());
    assert_eq!(
        tracer.into_output(),
        indoc! {"
            PLUS (1: integral, 2: integral) -> 3: integral
              PLUS (?: unknown, 3: integral) -> ?: integral (type rule: unknown)
            MINUS (3: integral, ?: integral) -> ?: integral
        "}
    );
}

#[test]
fn writes_constant_pool() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.svm");
    let mut args = args(write_expr(dir.path(), SAMPLE));
    args.output = Some(out.clone());
    let expr = load_expr(&args.expr_path).unwrap();

    let (_, result) = fold_with(&args, &expr, NoopTracer);
    assert_eq!(result.unwrap().written, Some(1));

    let module = Module::from_path(&out).unwrap();
    let pool = ConstantPool::from_module(&module).unwrap();
    let constants: Vec<_> = pool.iter().map(|(_, c)| c.clone()).collect();
    assert_eq!(constants, vec![Constant::Int(3)]);
}

#[test]
fn strict_policy_rejects_mixed_constants() {
    let json = r#"{"apply": {"op": "PLUS", "operands": [{"literal": 1}, {"literal": "a"}]}}"#;
    let dir = tempfile::tempdir().unwrap();
    let mut args = args(write_expr(dir.path(), json));
    let expr = load_expr(&args.expr_path).unwrap();

    let (_, lenient) = fold_with(&args, &expr, NoopTracer);
    assert!(matches!(lenient, Err(e) if e.to_string().contains("non-numeric")));

    args.policy = FoldPolicy::Strict;
    let (_, strict) = fold_with(&args, &expr, NoopTracer);
    let err = strict.err().unwrap();
    assert_eq!(
        err.to_string(),
        "type mismatch: PLUS is not defined over (integral, string-like)"
    );
}

#[test]
fn calls_stay_as_residual_code() {
    let json = r#"{"apply": {"op": "PLUS", "operands": [
        {"apply": {"op": "PLUS", "operands": [{"literal": 1}, {"literal": 2}]}},
        {"call": {"callee": {"variable": {"name": "f"}}, "args": [
            {"apply": {"op": "MINUS", "operands": [{"literal": 5}, {"literal": 1}]}}
        ]}}
    ]}}"#;
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.svm");
    let mut args = args(write_expr(dir.path(), json));
    args.output = Some(out.clone());
    let expr = load_expr(&args.expr_path).unwrap();

    let tracer = PrintTracer::new(Verbosity::Default, Colors::OFF);
    let (tracer, result) = fold_with(&args, &expr, tracer);
    let report = result.unwrap();

    assert_eq!(report.text, "(+ 3 (call f 4))\n");
    assert_eq!(report.written, Some(2));
    insta::assert_snapshot!(tracer.into_output(), @r"
    PLUS (1: integral, 2: integral) -> 3: integral
    MINUS (5: integral, 1: integral) -> 4: integral
    ");
}

#[test]
fn lambda_bodies_are_left_alone() {
    let json = r#"{"lambda": {"params": ["a"], "body":
        {"apply": {"op": "PLUS", "operands": [{"literal": 1}, {"literal": 2}]}}
    }}"#;
    let dir = tempfile::tempdir().unwrap();
    let args = args(write_expr(dir.path(), json));
    let expr = load_expr(&args.expr_path).unwrap();

    let (_, result) = fold_with(&args, &expr, NoopTracer);
    assert_eq!(result.unwrap().text, "(=> (a) (+ 1 2))\n");
}

#[test]
fn failure_keeps_trace() {
    let json = r#"{"apply": {"op": "PLUS", "operands": [
        {"apply": {"op": "PLUS", "operands": [{"literal": 1}, {"literal": 2}]}},
        {"apply": {"op": "MINUS", "operands": [{"literal": 1}, {"literal": "a"}]}}
    ]}}"#;
    let dir = tempfile::tempdir().unwrap();
    let args = args(write_expr(dir.path(), json));
    let expr = load_expr(&args.expr_path).unwrap();

    let tracer = PrintTracer::new(Verbosity::Verbose, Colors::OFF);
    let (tracer, result) = fold_with(&args, &expr, tracer);

    assert!(matches!(result, Err(CommandError::Fold(_))));
    insta::assert_snapshot!(tracer.into_output(), @r#"
    PLUS ...
      1: integral
      2: integral
    PLUS (1: integral, 2: integral) -> 3: integral
    MINUS ...
      1: integral
      "a": string-like
    MINUS failed: MINUS cannot fold non-numeric operand "a"
    "#);
}

#[test]
fn invalid_json_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_expr(dir.path(), r#"{"apply": 1}"#);

    let err = load_expr(&path).unwrap_err();
    assert!(matches!(err, CommandError::Json { .. }));
    assert!(err.to_string().contains("expr.json: invalid expression"));
}
