use super::*;

#[test]
fn codes_are_unique_and_parse_back() {
    for code in ErrorCode::ALL {
        assert_eq!(ErrorCode::parse(code.as_str()), Some(code));
    }
    let mut strs: Vec<_> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
    strs.dedup();
    assert_eq!(strs.len(), ErrorCode::ALL.len());
}

#[test]
fn unknown_code_does_not_parse() {
    assert_eq!(ErrorCode::parse("E9999"), None);
    assert_eq!(ErrorCode::parse("e0001"), None);
}

#[test]
fn every_code_is_a_scanner_code() {
    for code in ErrorCode::ALL {
        assert_eq!(code.category(), Category::Scanner);
        assert!(!code.description().is_empty());
    }
}
