use anyhow::Result;
use chrono::NaiveDate;

use stock_forecast::error::AppError;
use stock_forecast::forecast::Forecaster;
use stock_forecast::market::PriceSeries;
use stock_forecast::time_util::month_end_after;

/// 构造 n 个月的月度序列：趋势 + 12个月季节项
fn monthly_series(n: usize) -> PriceSeries {
    let season = [
        6.0, 3.0, -1.0, -4.0, -8.0, -2.0, 0.0, 5.0, 9.0, 1.0, -5.0, -4.0,
    ];
    let start = NaiveDate::from_ymd_opt(2020, 1, 31).unwrap();
    let points = (0..n)
        .map(|i| {
            let date = if i == 0 {
                start
            } else {
                month_end_after(start, i as u32)
            };
            (date, 120.0 + 1.5 * i as f64 + season[i % 12])
        })
        .collect();
    PriceSeries::from_points(points)
}

#[test]
fn forecast_has_exactly_12_monthly_points_after_history() -> Result<()> {
    let series = monthly_series(36);
    let last = series.last_date().unwrap();

    let forecast = Forecaster::new().forecast(&series)?;
    assert_eq!(forecast.len(), 12);

    // 日期紧跟历史末月，逐月递增且都是月末
    let mut prev = last;
    for (i, (date, value)) in forecast.points().iter().enumerate() {
        assert!(*date > prev, "第{}个预测日期未递增", i);
        assert_eq!(*date, month_end_after(last, i as u32 + 1));
        assert!(value.is_finite());
        prev = *date;
    }
    Ok(())
}

#[test]
fn forecast_requires_two_full_seasons() {
    let series = monthly_series(23);
    let err = Forecaster::new().forecast(&series).unwrap_err();
    match err {
        AppError::InsufficientHistory { got, need } => {
            assert_eq!(got, 23);
            assert_eq!(need, 24);
        }
        other => panic!("期望 InsufficientHistory, 实际 {:?}", other),
    }
}

#[test]
fn forecast_minimum_history_is_accepted() -> Result<()> {
    let series = monthly_series(24);
    let forecast = Forecaster::new().forecast(&series)?;
    assert_eq!(forecast.len(), 12);
    Ok(())
}
