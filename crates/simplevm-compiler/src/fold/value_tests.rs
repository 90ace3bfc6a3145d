use super::*;
use crate::type_system::TypeCategory;

#[test]
fn constant_categories() {
    assert_eq!(Constant::Int(7).category(), TypeCategory::Integral);
    assert_eq!(Constant::from("x").category(), TypeCategory::StringLike);
}

#[test]
fn constant_accessors() {
    let n = Constant::from(42);
    assert_eq!(n.as_int(), Some(42));
    assert_eq!(n.as_str(), None);

    let s = Constant::from(String::from("hi"));
    assert_eq!(s.as_int(), None);
    assert_eq!(s.as_str(), Some("hi"));
}

#[test]
fn known_takes_constant_category() {
    let v = TypedValue::known(Constant::from("abc"));
    assert!(v.is_known());
    assert_eq!(v.category(), TypeCategory::StringLike);
    assert_eq!(v.constant(), Some(&Constant::from("abc")));
}

#[test]
fn unknown_keeps_category() {
    let v = TypedValue::unknown(TypeCategory::Integral);
    assert!(!v.is_known());
    assert_eq!(v.value(), &Folded::Unknown);
    assert_eq!(v.category(), TypeCategory::Integral);
    assert_eq!(v.into_constant(), None);
}

#[test]
fn explicit_category_overrides() {
    let v = TypedValue::new_known(Constant::Int(1), TypeCategory::Unknown);
    assert_eq!(v.category(), TypeCategory::Unknown);
    assert_eq!(v.into_constant(), Some(Constant::Int(1)));
}

#[test]
fn display() {
    insta::assert_snapshot!(TypedValue::known(Constant::Int(-3)), @"-3: integral");
    insta::assert_snapshot!(TypedValue::known(Constant::from("a\"b")), @r#""a\"b": string-like"#);
    insta::assert_snapshot!(TypedValue::unknown(TypeCategory::Unknown), @"?: unknown");
}
