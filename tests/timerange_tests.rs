use invigil::core::timerange::{TimeRange, conflicts};

#[test]
fn parses_plain_range_into_minute_offsets() {
    let r = TimeRange::parse("09:00 - 12:00").unwrap();
    assert_eq!(r.start, 540);
    assert_eq!(r.end, 720);
}

#[test]
fn accepts_single_digit_hours_and_sloppy_spacing() {
    let r = TimeRange::parse("9:05-13:30").unwrap();
    assert_eq!(r.start, 545);
    assert_eq!(r.end, 810);

    let r = TimeRange::parse("  9:05  -  13:30  ").unwrap();
    assert_eq!(r.start, 545);
    assert_eq!(r.end, 810);
}

#[test]
fn missing_end_defaults_to_start() {
    let r = TimeRange::parse("14:00").unwrap();
    assert_eq!(r.start, r.end);
    assert_eq!(r.start, 840);

    // Trailing dash with nothing after it behaves the same.
    let r = TimeRange::parse("14:00 - ").unwrap();
    assert_eq!(r.start, r.end);
}

#[test]
fn malformed_segments_are_errors_not_garbage() {
    assert!(TimeRange::parse("").is_err());
    assert!(TimeRange::parse("   ").is_err());
    assert!(TimeRange::parse("banana").is_err());
    assert!(TimeRange::parse("09:00 - lunch").is_err());
    assert!(TimeRange::parse("25:00 - 26:00").is_err());
    assert!(TimeRange::parse("09:61 - 10:00").is_err());
}

#[test]
fn overlap_is_symmetric() {
    let a = TimeRange::parse("09:00 - 12:00").unwrap();
    let b = TimeRange::parse("11:00 - 13:00").unwrap();
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));

    let c = TimeRange::parse("13:00 - 14:00").unwrap();
    assert!(!a.overlaps(&c));
    assert!(!c.overlaps(&a));
}

#[test]
fn back_to_back_ranges_do_not_overlap() {
    let morning = TimeRange::parse("09:00 - 12:00").unwrap();
    let afternoon = TimeRange::parse("12:00 - 14:00").unwrap();
    assert!(!morning.overlaps(&afternoon));
    assert!(!afternoon.overlaps(&morning));
}

#[test]
fn contained_range_overlaps() {
    let outer = TimeRange::parse("08:00 - 18:00").unwrap();
    let inner = TimeRange::parse("10:00 - 11:00").unwrap();
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

#[test]
fn different_dates_never_conflict() {
    let a = TimeRange::parse("09:00 - 12:00").unwrap();
    let b = TimeRange::parse("09:00 - 12:00").unwrap();
    assert!(!conflicts("2024-01-20", &a, "2024-01-21", &b));
    assert!(conflicts("2024-01-20", &a, "2024-01-20", &b));
}
