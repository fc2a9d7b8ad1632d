use super::*;

#[test]
fn test_merge_covers_both() {
    let keyword = Span::new(10, 13);
    let semicolon = Span::new(24, 25);
    assert_eq!(keyword.merge(semicolon), Span::new(10, 25));
    assert_eq!(semicolon.merge(keyword), Span::new(10, 25));
}

#[test]
fn test_try_from_range_rejects_huge_offsets() {
    assert_eq!(Span::try_from_range(3..7), Ok(Span::new(3, 7)));
    let too_big = u32::MAX as usize + 1;
    assert_eq!(
        Span::try_from_range(0..too_big),
        Err(SpanError { offset: too_big })
    );
}

#[test]
fn test_point_is_empty() {
    assert!(Span::point(4).is_empty());
    assert!(!Span::new(2, 5).is_empty());
    assert_eq!(Span::new(2, 5).to_range(), 2..5);
    assert_eq!(Span::default(), Span::DUMMY);
}

#[test]
fn test_fits_source_length() {
    assert!(Span::new(0, 5).fits(5));
    assert!(Span::point(5).fits(5));
    assert!(!Span::new(3, 6).fits(5));
}

#[test]
fn test_display_is_a_range() {
    assert_eq!(Span::new(8, 9).to_string(), "8..9");
    assert_eq!(format!("{:?}", Span::new(8, 9)), "8..9");
}
