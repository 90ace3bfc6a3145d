//! Constant-fold an expression tree read from JSON.

use std::path::{Path, PathBuf};

use simplevm_bytecode::{Colors, ModuleBuilder};
use simplevm_compiler::{
    ConstantPoolBuilder, Evaluator, Expr, FoldConfig, FoldPolicy, NoopTracer, PrintTracer, Tracer,
    Verbosity, fold_constants,
};

use super::{CommandError, fail, read_file, write_file};

pub struct FoldArgs {
    pub expr_path: PathBuf,
    pub policy: FoldPolicy,
    /// Trace evaluation on stderr.
    pub trace: Option<Verbosity>,
    /// Write a module holding the constant pool.
    pub output: Option<PathBuf>,
    pub color: bool,
}

/// What a fold run produced.
pub(crate) struct Report {
    pub text: String,
    /// Constants written to the output module, if one was requested.
    pub written: Option<usize>,
}

pub fn run(args: FoldArgs) {
    let expr = match load_expr(&args.expr_path) {
        Ok(expr) => expr,
        Err(e) => fail(e),
    };

    let result = match args.trace {
        Some(verbosity) => {
            let tracer = PrintTracer::new(verbosity, Colors::new(args.color));
            let (tracer, result) = fold_with(&args, &expr, tracer);
            tracer.print();
            result
        }
        None => fold_with(&args, &expr, NoopTracer).1,
    };

    match result {
        Ok(report) => {
            print!("{}", report.text);
            if let (Some(path), Some(count)) = (&args.output, report.written) {
                eprintln!("wrote {} ({} constants)", path.display(), count);
            }
        }
        Err(e) => fail(e),
    }
}

pub(crate) fn load_expr(path: &Path) -> Result<Expr, CommandError> {
    let bytes = read_file(path)?;
    serde_json::from_slice(&bytes).map_err(|source| CommandError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Fold with `tracer`, then evaluate what is left and optionally emit. The
/// tracer comes back even when folding fails, so its lines can still be
/// shown.
pub(crate) fn fold_with<T: Tracer>(
    args: &FoldArgs,
    expr: &Expr,
    tracer: T,
) -> (T, Result<Report, CommandError>) {
    let config = FoldConfig::new().policy(args.policy);
    let mut evaluator = Evaluator::with_tracer(config, tracer);
    let result = fold_report(&mut evaluator, args, expr);
    (evaluator.into_tracer(), result)
}

fn fold_report<T: Tracer>(
    evaluator: &mut Evaluator<T>,
    args: &FoldArgs,
    expr: &Expr,
) -> Result<Report, CommandError> {
    let folded = fold_constants(evaluator, expr)?;

    // Calls and lambdas stay as residual code, so their tree has no value.
    let mut text = format!("{folded}\n");
    if is_evaluable(&folded) {
        let value = evaluator.evaluate(&folded)?;
        text.push_str(&format!("{value}\n"));
    }

    let written = match &args.output {
        Some(path) => Some(emit_pool(&folded, path)?),
        None => None,
    };
    Ok(Report { text, written })
}

fn is_evaluable(expr: &Expr) -> bool {
    match expr {
        Expr::Literal(_) | Expr::Variable(_) => true,
        Expr::Apply { op, operands } => op.has_rules() && operands.iter().all(is_evaluable),
        Expr::Call { .. } | Expr::Lambda { .. } => false,
    }
}

fn emit_pool(folded: &Expr, path: &Path) -> Result<usize, CommandError> {
    let mut pool = ConstantPoolBuilder::new();
    intern_literals(folded, &mut pool);

    let mut builder = ModuleBuilder::new();
    pool.write_into(&mut builder)?;
    write_file(path, &builder.finish().to_bytes())?;
    Ok(pool.len())
}

/// Every literal the folded tree still loads at runtime, in tree order.
fn intern_literals(expr: &Expr, pool: &mut ConstantPoolBuilder) {
    match expr {
        Expr::Literal(constant) => {
            pool.intern(constant);
        }
        Expr::Variable(_) => {}
        Expr::Apply { operands, .. } => {
            for operand in operands {
                intern_literals(operand, pool);
            }
        }
        Expr::Call { callee, args } => {
            intern_literals(callee, pool);
            for arg in args {
                intern_literals(arg, pool);
            }
        }
        Expr::Lambda { body, .. } => intern_literals(body, pool),
    }
}
