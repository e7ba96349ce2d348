use chrono::{Datelike, NaiveDate};
use jalaali_calendar::{GregorianDate, d2g, g2d};

/// chrono counts 0001-01-01 as day 1; the JDN of that day is 1721426.
const CE_TO_JDN: i64 = 1721425;

#[test]
fn agrees_with_chrono_day_numbers() {
    let mut date = NaiveDate::from_ymd_opt(1500, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2600, 1, 1).unwrap();
    while date < end {
        let jdn = g2d(date.year(), date.month() as i32, date.day() as i32);
        assert_eq!(
            jdn,
            i64::from(date.num_days_from_ce()) + CE_TO_JDN,
            "g2d mismatch for {date}"
        );
        assert_eq!(d2g(jdn), GregorianDate::from(date), "d2g mismatch for {date}");
        date = date.succ_opt().unwrap();
    }
}

#[test]
fn bijection_far_from_epoch() {
    for (y, m, d) in [(-4713, 11, 24), (-1, 12, 31), (0, 2, 29), (1, 1, 1), (3799, 3, 19)] {
        let jdn = g2d(y, m, d);
        assert_eq!(d2g(jdn).ymd(), (y, m as u8, d as u8), "({y}, {m}, {d})");
    }
}

#[test]
fn proleptic_epoch_is_jdn_zero() {
    assert_eq!(g2d(-4713, 11, 24), 0);
}

#[test]
fn strictly_increasing_in_calendar_order() {
    const LEAP_YEAR_MONTHS: [i32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    let mut prev = g2d(1999, 12, 31);
    for (m, len) in (1..=12).zip(LEAP_YEAR_MONTHS) {
        for d in 1..=len {
            let jdn = g2d(2000, m, d);
            assert_eq!(jdn, prev + 1, "2000-{m}-{d}");
            prev = jdn;
        }
    }
    assert_eq!(g2d(2001, 1, 1), prev + 1);
}
