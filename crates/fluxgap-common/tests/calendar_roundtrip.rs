//! Property tests for the row ↔ timestamp calendar.

use fluxgap_common::{SlotEdge, TimeRes, Timestamp, is_leap_year};
use proptest::prelude::*;

fn timeres() -> impl Strategy<Value = TimeRes> {
    prop_oneof![
        Just(TimeRes::QuarterHourly),
        Just(TimeRes::HalfHourly),
        Just(TimeRes::Hourly),
    ]
}

fn any_row() -> impl Strategy<Value = (TimeRes, i32, usize)> {
    (timeres(), 1981i32..2040).prop_flat_map(|(res, year)| {
        (Just(res), Just(year), 0..res.rows_in_year(year))
    })
}

proptest! {
    /// Every row's end timestamp maps back to the row that produced it,
    /// including the year's final row, whose end is January 1 00:00 of the
    /// next year.
    #[test]
    fn end_edge_round_trips((res, year, row) in any_row()) {
        let ts = Timestamp::from_row(row, year, res, SlotEdge::End);
        prop_assert!(ts.is_valid());
        prop_assert_eq!(ts.row(res), Some(row));
    }

    /// A slot's start boundary is the previous slot's end boundary.
    #[test]
    fn start_edge_is_previous_end((res, year, row) in any_row()) {
        prop_assume!(row > 0);
        let start = Timestamp::from_row(row, year, res, SlotEdge::Start);
        let end_of_previous = Timestamp::from_row(row - 1, year, res, SlotEdge::End);
        prop_assert_eq!(start, end_of_previous);
    }

    /// Adjacent slot boundaries are exactly one slot apart in seconds.
    #[test]
    fn slot_width_is_constant((res, year, row) in any_row()) {
        let start = Timestamp::from_row(row, year, res, SlotEdge::Start);
        let end = Timestamp::from_row(row, year, res, SlotEdge::End);
        let width = 3_600 / res.rows_per_hour() as i64;
        prop_assert_eq!(end.seconds_since(&start), Some(width));
    }

    #[test]
    fn year_rows_follow_leap_rule(res in timeres(), year in 1901i32..2399) {
        let expected = if is_leap_year(year) { 17_568 } else { 17_520 };
        let scaled = match res {
            TimeRes::QuarterHourly => expected * 2,
            TimeRes::HalfHourly => expected,
            TimeRes::Hourly => expected / 2,
        };
        prop_assert_eq!(res.rows_in_year(year), scaled);
    }
}
