use chrono::{Duration, NaiveDate};
use loadmonitor_core::timeline::densify;
use loadmonitor_core::EngineError;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_dense_length_and_order() {
    // usortert, med hull og duplikat, over et månedsskifte og skuddår
    let input = vec![
        (d(2024, 3, 2), 10.0),
        (d(2024, 2, 20), 30.0),
        (d(2024, 2, 28), 0.0),
        (d(2024, 3, 2), 5.0),
        (d(2024, 2, 29), 20.0),
    ];
    let out = densify(&input).unwrap();

    let expected_len = (d(2024, 3, 2) - d(2024, 2, 20)).num_days() as usize + 1;
    assert_eq!(out.len(), expected_len);
    assert_eq!(out.first().unwrap().date, d(2024, 2, 20));
    assert_eq!(out.last().unwrap().date, d(2024, 3, 2));

    for w in out.windows(2) {
        assert_eq!(w[1].date - w[0].date, Duration::days(1), "ingen hull, ingen duplikater");
    }
}

#[test]
fn test_every_input_date_is_present() {
    let input = vec![(d(2023, 12, 30), 10.0), (d(2024, 1, 2), 20.0), (d(2024, 1, 9), 30.0)];
    let out = densify(&input).unwrap();
    for (date, _) in &input {
        assert_eq!(out.iter().filter(|p| p.date == *date).count(), 1);
    }
}

#[test]
fn test_same_day_loads_are_summed_and_nan_counts_as_zero() {
    let input = vec![(d(2024, 1, 1), 40.0), (d(2024, 1, 1), 60.0), (d(2024, 1, 2), f64::NAN)];
    let out = densify(&input).unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].load_proxy, 100.0);
    assert_eq!(out[1].load_proxy, 0.0);
}

#[test]
fn test_single_session_gives_single_day() {
    let out = densify(&[(d(2024, 6, 1), 50.0)]).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].load_proxy, 50.0);
}

#[test]
fn test_empty_input_fails() {
    assert!(matches!(densify(&[]), Err(EngineError::EmptyInput)));
}
