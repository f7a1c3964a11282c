use crate::forecast::Forecast;

/// 情绪调整系数默认值：极端情绪(±1)下最多调整 ±5%
pub const DEFAULT_ADJUSTMENT_FACTOR: f64 = 0.05;

/// 按聚合情绪分缩放预测值：adjusted = raw * (1 + sentiment * factor)。
/// 日期与长度保持不变。
pub fn adjust_forecast(forecast: &Forecast, sentiment: f64, factor: f64) -> Forecast {
    let scale = 1.0 + sentiment * factor;
    let points = forecast
        .points()
        .iter()
        .map(|(date, value)| (*date, value * scale))
        .collect();
    Forecast::from_points(points)
}
