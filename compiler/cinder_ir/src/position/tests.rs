use super::*;

#[test]
fn starts_at_one_one() {
    assert_eq!(Position::default(), Position::new(1, 1));
    assert_eq!(Position::START.to_string(), "1:1");
}

#[test]
fn bump_line_resets_column() {
    let mut pos = Position::new(3, 17);
    pos.bump_line();
    assert_eq!(pos, Position::new(4, 1));
    pos.bump_column();
    assert_eq!(pos, Position::new(4, 2));
}

#[test]
fn ordering_is_line_then_column() {
    assert!(Position::new(1, 80) < Position::new(2, 1));
    assert!(Position::new(2, 3) < Position::new(2, 4));
    assert_eq!(
        Position::new(5, 5).cmp(&Position::new(5, 5)),
        std::cmp::Ordering::Equal
    );
}
