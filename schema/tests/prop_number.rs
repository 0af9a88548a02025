use proptest::prelude::*;
use schema::{format_number, parse_number, Value, ValueKind};

proptest! {
    #[test]
    fn prop_number_text_roundtrip(x in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
        prop_assert_eq!(parse_number(&format_number(x)), x);
    }

    #[test]
    fn prop_number_text_is_canonical(x in prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL) {
        let text = format_number(x);
        prop_assert_eq!(format_number(parse_number(&text)), text);
    }

    #[test]
    fn prop_value_text_coerces_back(x in prop::num::f64::NORMAL, b in any::<bool>(), s in ".*") {
        for value in [Value::Number(x), Value::Bool(b), Value::String(s.clone())] {
            let kind = value.kind();
            prop_assert_eq!(kind.coerce(&value.to_string()), value);
        }
    }
}

#[test]
fn non_finite_numbers_render_as_words() {
    assert!(parse_number(&format_number(f64::NAN)).is_nan());
    assert_eq!(parse_number(&format_number(f64::INFINITY)), f64::INFINITY);
    assert_eq!(parse_number(&format_number(f64::NEG_INFINITY)), f64::NEG_INFINITY);
    assert_eq!(ValueKind::Number.coerce("Infinity"), Value::Number(f64::INFINITY));
}
