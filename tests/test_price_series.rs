use chrono::NaiveDate;

use stock_forecast::market::{DailyClose, PriceSeries};

fn close(y: i32, m: u32, d: u32, price: f64) -> DailyClose {
    DailyClose {
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        close: price,
    }
}

#[test]
fn daily_closes_resample_to_month_end_means() {
    let closes = vec![
        close(2024, 1, 2, 10.0),
        close(2024, 1, 15, 20.0),
        close(2024, 2, 5, 30.0),
        // 3月无数据
        close(2024, 4, 10, 40.0),
        close(2024, 4, 11, 44.0),
    ];
    let series = PriceSeries::from_daily_closes(&closes);
    assert_eq!(series.len(), 3);

    let points = series.points();
    assert_eq!(points[0], (NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(), 15.0));
    assert_eq!(points[1], (NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(), 30.0));
    // 缺数据的月份直接缺位，不做填充
    assert_eq!(points[2], (NaiveDate::from_ymd_opt(2024, 4, 30).unwrap(), 42.0));
}

#[test]
fn resampled_dates_are_strictly_increasing() {
    let closes: Vec<DailyClose> = (1..=12)
        .map(|m| close(2023, m, 10, m as f64 * 1.5))
        .collect();
    let series = PriceSeries::from_daily_closes(&closes);
    assert_eq!(series.len(), 12);
    for pair in series.points().windows(2) {
        assert!(pair[0].0 < pair[1].0);
    }
}

#[test]
fn empty_input_produces_empty_series() {
    let series = PriceSeries::from_daily_closes(&[]);
    assert!(series.is_empty());
    assert_eq!(series.last_date(), None);
}
