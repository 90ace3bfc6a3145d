//! Constant-folding rewrite over [`Expr`].

use super::error::FoldError;
use super::evaluator::Evaluator;
use super::expr::Expr;
use super::trace::Tracer;

/// Rewrite `expr`, replacing every arithmetic subtree with a known value by a
/// literal.
///
/// `Lambda` nodes are opaque and returned as is. `Call` nodes are never
/// evaluated, only their callee and arguments are folded. ASSIGNMENT keeps
/// its shape so the target survives; its value operand is still folded.
pub fn fold_constants<T: Tracer>(
    evaluator: &mut Evaluator<T>,
    expr: &Expr,
) -> Result<Expr, FoldError> {
    match expr {
        Expr::Literal(_) | Expr::Variable(_) | Expr::Lambda { .. } => Ok(expr.clone()),
        Expr::Call { callee, args } => Ok(Expr::Call {
            callee: Box::new(fold_constants(evaluator, callee)?),
            args: fold_all(evaluator, args)?,
        }),
        Expr::Apply { op, operands } => {
            if !op.has_rules() {
                return Ok(expr.clone());
            }
            let operands = fold_all(evaluator, operands)?;
            let folded = Expr::Apply { op: *op, operands };
            if !op.is_arithmetic() || !all_literals(&folded) {
                return Ok(folded);
            }

            match evaluator.evaluate(&folded)?.into_constant() {
                Some(constant) => Ok(Expr::Literal(constant)),
                None => Ok(folded),
            }
        }
    }
}

fn fold_all<T: Tracer>(
    evaluator: &mut Evaluator<T>,
    exprs: &[Expr],
) -> Result<Vec<Expr>, FoldError> {
    exprs.iter().map(|e| fold_constants(evaluator, e)).collect()
}

/// A folded child that is not a literal can never be known, and may hide a
/// call or lambda that must not be evaluated.
fn all_literals(expr: &Expr) -> bool {
    match expr {
        Expr::Apply { operands, .. } => operands.iter().all(|e| matches!(e, Expr::Literal(_))),
        _ => false,
    }
}
