use chrono::{NaiveDate, NaiveTime, Timelike};
use jalaali_calendar::CalendarError;
use jalaali_datetime::{DateFields, DateTimeError, JalaaliDateTime};

#[test]
fn jalaali_and_gregorian_are_exclusive() {
    let mut date = JalaaliDateTime::from_jalaali(1402, 8, 5).unwrap();
    let fields = DateFields::new().with_jalaali_year(1400).with_day(3);
    assert_eq!(date.set(fields), Err(DateTimeError::AmbiguousCalendar));
    assert_eq!(date.jalaali().ymd(), (1402, 8, 5));
}

#[test]
fn time_combines_with_jalaali() {
    let mut date = JalaaliDateTime::from_jalaali(1402, 8, 5).unwrap();
    date.set(
        DateFields::new()
            .with_jalaali_month(1)
            .with_jalaali_day(1)
            .with_hour(12)
            .with_minute(0),
    )
    .unwrap();
    assert!(date.is_cached());
    assert_eq!(date.jalaali().ymd(), (1402, 1, 1));
    assert_eq!(date.gregorian().ymd(), (2023, 3, 21));
    assert_eq!(date.hour(), 12);
}

#[test]
fn time_combines_with_gregorian() {
    let mut date = JalaaliDateTime::from_jalaali(1402, 8, 5).unwrap();
    date.set(
        DateFields::new()
            .with_year(2021)
            .with_month(3)
            .with_day(21)
            .with_second(30),
    )
    .unwrap();
    assert!(!date.is_cached());
    assert_eq!(date.jalaali().ymd(), (1400, 1, 1));
    assert_eq!(date.second(), 30);
}

#[test]
fn explicit_zero_time_is_applied() {
    let mut date = JalaaliDateTime::from_jalaali_hms(1402, 8, 5, 9, 0, 0, 0).unwrap();
    date.set(DateFields::new().with_hour(0)).unwrap();
    assert_eq!(date.hour(), 0);
}

#[test]
fn carried_day_is_clamped() {
    let mut date = JalaaliDateTime::from_jalaali(1402, 6, 31).unwrap();
    date.set_month(12).unwrap();
    assert_eq!(date.jalaali().ymd(), (1402, 12, 29));

    let mut leap = JalaaliDateTime::from_jalaali(1403, 12, 30).unwrap();
    leap.set_year(1404).unwrap();
    assert_eq!(leap.jalaali().ymd(), (1404, 12, 29));
    assert_eq!(leap.gregorian().ymd(), (2026, 3, 20));
}

#[test]
fn explicit_day_is_validated() {
    let mut date = JalaaliDateTime::from_jalaali(1402, 7, 1).unwrap();
    assert_eq!(
        date.set_day(31),
        Err(DateTimeError::Calendar(CalendarError::InvalidDay {
            day: 31,
            month: 7,
            max_day: 30,
        }))
    );
}

#[test]
fn invalid_month_and_year() {
    let mut date = JalaaliDateTime::from_jalaali(1402, 7, 1).unwrap();
    assert_eq!(
        date.set_month(13),
        Err(DateTimeError::Calendar(CalendarError::InvalidMonth { month: 13 }))
    );
    assert_eq!(
        date.set_year(3178),
        Err(DateTimeError::Calendar(CalendarError::InvalidYear { year: 3178 }))
    );
}

#[test]
fn gregorian_day_rolls_over() {
    let mut date = JalaaliDateTime::from_gregorian_ymd(2023, 1, 31).unwrap();
    assert_eq!(date.jalaali().ymd(), (1401, 11, 11));
    date.set_gregorian_month(2).unwrap();
    assert_eq!(date.gregorian().ymd(), (2023, 3, 3));
    assert_eq!(date.jalaali().ymd(), (1401, 12, 12));
}

#[test]
fn last_supported_day() {
    assert!(JalaaliDateTime::from_jalaali(3177, 10, 11).is_ok());
    assert!(matches!(
        JalaaliDateTime::from_jalaali(3177, 10, 12),
        Err(DateTimeError::OutOfRange { .. })
    ));
    assert!(matches!(
        JalaaliDateTime::from_gregorian_ymd(3799, 1, 1),
        Err(DateTimeError::OutOfRange { .. })
    ));
}

#[test]
fn setters_keep_sub_millisecond_time() {
    let time = NaiveTime::from_hms_nano_opt(8, 0, 0, 123_456_789).unwrap();
    let timestamp = NaiveDate::from_ymd_opt(2023, 10, 27).unwrap().and_time(time);
    let mut date = JalaaliDateTime::from_gregorian(timestamp).unwrap();

    date.set_hour(9).unwrap();
    assert_eq!(date.timestamp().nanosecond(), 123_456_789);
    date.set_day(1).unwrap();
    date.set_gregorian_month(1).unwrap();
    assert_eq!(
        date.timestamp().time(),
        NaiveTime::from_hms_nano_opt(9, 0, 0, 123_456_789).unwrap()
    );

    date.set_millisecond(7).unwrap();
    assert_eq!(date.timestamp().nanosecond(), 7_000_000);
}

#[test]
fn setters_keep_leap_second() {
    let time = NaiveTime::from_hms_milli_opt(23, 59, 59, 1500).unwrap();
    let timestamp = NaiveDate::from_ymd_opt(2016, 12, 31).unwrap().and_time(time);
    let mut date = JalaaliDateTime::from_gregorian(timestamp).unwrap();

    date.set_day(1).unwrap();
    date.set_gregorian_year(2015).unwrap();
    assert_eq!(date.timestamp().time(), time);
    assert_eq!(date.millisecond(), 1500);
}
