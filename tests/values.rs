use booru_query::{parse_value, Capability, QueryError, RangeValue, Value};

const SINGLE_ONLY: Capability = Capability {
    composite: false,
    range: false,
};
const COMPOSITE: Capability = Capability {
    composite: true,
    range: false,
};
const RANGED: Capability = Capability {
    composite: false,
    range: true,
};
const FULL: Capability = Capability {
    composite: true,
    range: true,
};

fn single(text: &str) -> Value {
    Value::Single(text.to_string())
}

fn range(start: Option<&str>, end: Option<&str>) -> Value {
    Value::Range(RangeValue {
        start: start.map(str::to_string),
        end: end.map(str::to_string),
    })
}

#[test]
fn plain_value_stays_single() {
    assert_eq!(parse_value("a", SINGLE_ONLY).unwrap(), single("a"));
}

#[test]
fn comma_list_preserves_order() {
    assert_eq!(
        parse_value("a,b,c", COMPOSITE).unwrap(),
        Value::Composite(vec![single("a"), single("b"), single("c")])
    );
}

#[test]
fn composite_pieces_are_trimmed() {
    assert_eq!(
        parse_value(" a , b ", COMPOSITE).unwrap(),
        Value::Composite(vec![single("a"), single("b")])
    );
}

#[test]
fn bounded_and_open_ranges() {
    assert_eq!(
        parse_value("a..b", RANGED).unwrap(),
        range(Some("a"), Some("b"))
    );
    assert_eq!(parse_value("a..", RANGED).unwrap(), range(Some("a"), None));
    assert_eq!(parse_value("..b", RANGED).unwrap(), range(None, Some("b")));
}

#[test]
fn lone_range_is_not_wrapped_in_composite() {
    assert!(matches!(parse_value("1..9", FULL).unwrap(), Value::Range(_)));
}

#[test]
fn composite_mixes_singles_and_ranges() {
    assert_eq!(
        parse_value("1,3..5", FULL).unwrap(),
        Value::Composite(vec![single("1"), range(Some("3"), Some("5"))])
    );
}

#[test]
fn range_without_capability_is_rejected() {
    let err = parse_value("a..b", SINGLE_ONLY).unwrap_err();
    assert!(matches!(err, QueryError::InvalidValue(_)));

    let err = parse_value("a..b", COMPOSITE).unwrap_err();
    assert!(matches!(err, QueryError::InvalidValue(_)));
}

#[test]
fn comma_without_capability_is_rejected() {
    let err = parse_value("a,b", SINGLE_ONLY).unwrap_err();
    assert!(matches!(err, QueryError::InvalidValue(_)));

    let err = parse_value("a,b", RANGED).unwrap_err();
    assert!(matches!(err, QueryError::InvalidValue(_)));
}

#[test]
fn empty_alternatives_are_rejected() {
    for raw in ["a,,b", "a,", ",a", ","] {
        let err = parse_value(raw, FULL).unwrap_err();
        assert!(
            matches!(err, QueryError::InvalidValue(_)),
            "{raw:?} should be rejected"
        );
    }
}

#[test]
fn rejection_message_names_the_value() {
    let err = parse_value("a..b", SINGLE_ONLY).unwrap_err();
    assert!(err.to_string().contains("a..b"));
}
