use chrono::NaiveDate;

use stock_forecast::forecast::adjuster::{adjust_forecast, DEFAULT_ADJUSTMENT_FACTOR};
use stock_forecast::forecast::Forecast;
use stock_forecast::time_util::month_end_after;

fn sample_forecast() -> Forecast {
    let start = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
    let points = (0..12)
        .map(|i| {
            let date = if i == 0 {
                start
            } else {
                month_end_after(start, i)
            };
            (date, 100.0 + i as f64 * 3.0)
        })
        .collect();
    Forecast::from_points(points)
}

#[test]
fn adjustment_preserves_length_and_dates() {
    let raw = sample_forecast();
    let adjusted = adjust_forecast(&raw, 0.6, DEFAULT_ADJUSTMENT_FACTOR);
    assert_eq!(adjusted.len(), raw.len());
    for ((d1, _), (d2, _)) in raw.points().iter().zip(adjusted.points()) {
        assert_eq!(d1, d2);
    }
}

#[test]
fn adjustment_is_bounded_by_factor() {
    let raw = sample_forecast();
    for sentiment in [-1.0, -0.5, 0.0, 0.3, 1.0] {
        let adjusted = adjust_forecast(&raw, sentiment, DEFAULT_ADJUSTMENT_FACTOR);
        for ((_, r), (_, a)) in raw.points().iter().zip(adjusted.points()) {
            let ratio = (a / r - 1.0).abs();
            assert!(
                ratio <= DEFAULT_ADJUSTMENT_FACTOR + 1e-12,
                "sentiment={} 时调整幅度 {} 超出上限",
                sentiment,
                ratio
            );
        }
    }
}

#[test]
fn neutral_sentiment_leaves_forecast_unchanged() {
    let raw = sample_forecast();
    let adjusted = adjust_forecast(&raw, 0.0, DEFAULT_ADJUSTMENT_FACTOR);
    assert_eq!(adjusted, raw);
}

#[test]
fn positive_sentiment_scales_up_negative_scales_down() {
    let raw = sample_forecast();
    let up = adjust_forecast(&raw, 1.0, 0.05);
    let down = adjust_forecast(&raw, -1.0, 0.05);
    for (((_, r), (_, u)), (_, d)) in raw.points().iter().zip(up.points()).zip(down.points()) {
        assert!(u > r);
        assert!(d < r);
    }
}
