use super::*;
use crate::fold::{Constant, FoldError, TypedValue};
use crate::type_system::TypeCategory;

fn int(v: i64) -> TypedValue {
    TypedValue::known(Constant::Int(v))
}

fn text(s: &str) -> TypedValue {
    TypedValue::known(Constant::Str(s.to_string()))
}

fn unknown(category: TypeCategory) -> TypedValue {
    TypedValue::unknown(category)
}

#[test]
fn plus_folds_known_operands() {
    let pairs = [(1, 2), (-5, 3), (0, 0), (i64::MAX - 1, 1), (-100, -100)];
    for (a, b) in pairs {
        let result = OperatorKind::Plus.fold(&[int(a), int(b)]).unwrap();
        assert_eq!(result, int(a + b));
        assert_eq!(result.category(), TypeCategory::Integral);
    }
}

#[test]
fn minus_folds_known_operands() {
    let pairs = [(3, 2), (2, 3), (0, -7), (i64::MIN + 1, 1)];
    for (a, b) in pairs {
        let result = OperatorKind::Minus.fold(&[int(a), int(b)]).unwrap();
        assert_eq!(result, int(a - b));
    }
}

#[test]
fn arithmetic_wraps_like_a_long() {
    let result = OperatorKind::Plus.fold(&[int(i64::MAX), int(1)]).unwrap();
    assert_eq!(result, int(i64::MIN));

    let result = OperatorKind::Minus.fold(&[int(i64::MIN), int(1)]).unwrap();
    assert_eq!(result, int(i64::MAX));
}

#[test]
fn unknown_operand_folds_to_unknown_integral() {
    let cases = [
        [unknown(TypeCategory::Integral), int(2)],
        [int(2), unknown(TypeCategory::Unknown)],
        [unknown(TypeCategory::StringLike), unknown(TypeCategory::Unknown)],
    ];
    for operands in cases {
        for kind in [OperatorKind::Plus, OperatorKind::Minus] {
            let result = kind.fold(&operands).unwrap();
            assert!(!result.is_known());
            assert_eq!(result.category(), TypeCategory::Integral);
        }
    }
}

#[test]
fn type_rule_requires_both_integral() {
    assert_eq!(
        OperatorKind::Plus.infer_type(&[int(1), int(2)]),
        Ok(TypeCategory::Integral)
    );
    assert_eq!(
        OperatorKind::Minus.infer_type(&[unknown(TypeCategory::Integral), int(2)]),
        Ok(TypeCategory::Integral)
    );
    assert_eq!(
        OperatorKind::Plus.infer_type(&[int(1), text("a")]),
        Ok(TypeCategory::Unknown)
    );
    assert_eq!(
        OperatorKind::Minus.infer_type(&[unknown(TypeCategory::Unknown), int(2)]),
        Ok(TypeCategory::Unknown)
    );
}

#[test]
fn type_rule_and_fold_rule_disagree() {
    // The fold rule tags INTEGRAL even where the type rule says UNKNOWN.
    let operands = [unknown(TypeCategory::StringLike), int(2)];

    let verdict = OperatorKind::Plus.infer_type(&operands).unwrap();
    let folded = OperatorKind::Plus.fold(&operands).unwrap();

    assert_eq!(verdict, TypeCategory::Unknown);
    assert_eq!(folded.category(), TypeCategory::Integral);
}

#[test]
fn fold_rejects_non_numeric_constant() {
    let err = OperatorKind::Plus.fold(&[int(1), text("a")]).unwrap_err();
    assert_eq!(
        err,
        FoldError::NotNumeric {
            kind: OperatorKind::Plus,
            value: Constant::Str("a".to_string()),
        }
    );
}

#[test]
fn assignment_passes_value_through() {
    let target = unknown(TypeCategory::Unknown);

    let result = OperatorKind::Assignment
        .fold(&[text("hi"), target.clone()])
        .unwrap();
    assert_eq!(result, text("hi"));

    let category = OperatorKind::Assignment
        .infer_type(&[int(4), target.clone()])
        .unwrap();
    assert_eq!(category, TypeCategory::Integral);

    let result = OperatorKind::Assignment
        .fold(&[unknown(TypeCategory::StringLike), int(1)])
        .unwrap();
    assert_eq!(result, unknown(TypeCategory::StringLike));
}

#[test]
fn arrow_and_call_have_no_rules() {
    for kind in [OperatorKind::Arrow, OperatorKind::FunctionCall] {
        assert_eq!(
            kind.infer_type(&[int(1), int(2)]),
            Err(FoldError::NotImplemented {
                kind,
                rule: RuleKind::Type
            })
        );
        assert_eq!(
            kind.fold(&[]),
            Err(FoldError::NotImplemented {
                kind,
                rule: RuleKind::Fold
            })
        );
    }
}

#[test]
fn not_implemented_message() {
    let err = OperatorKind::Arrow.fold(&[]).unwrap_err();
    assert_eq!(err.to_string(), "fold rule not implemented for ARROW");
}

#[test]
fn arity_is_checked() {
    let err = OperatorKind::Plus.fold(&[int(1)]).unwrap_err();
    assert_eq!(
        err,
        FoldError::Arity {
            kind: OperatorKind::Plus,
            expected: 2,
            actual: 1
        }
    );

    let err = OperatorKind::Assignment
        .infer_type(&[int(1), int(2), int(3)])
        .unwrap_err();
    assert!(matches!(err, FoldError::Arity { actual: 3, .. }));
}
