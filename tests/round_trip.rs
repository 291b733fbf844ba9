use pretty_assertions::assert_eq;

mod cases;

#[test]
fn test_all_cases() {
    for case in cases::TEST_CASES.iter() {
        let value = cases::run(case.expr).unwrap();
        assert_eq!(
            lispy::render(&value),
            case.rendered,
            "Test case '{}' failed",
            case.name
        );
    }
}

#[test]
fn test_rendering_is_repeatable() {
    for case in cases::TEST_CASES.iter() {
        let value = cases::run(case.expr).unwrap();
        let snapshot = value.clone();
        let first = lispy::render(&value);
        let second = lispy::render(&value);
        assert_eq!(first, second, "Test case '{}' failed", case.name);
        assert_eq!(value, snapshot, "Test case '{}' failed", case.name);
    }
}
