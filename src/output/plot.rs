use std::path::Path;

use plotters::prelude::*;

use crate::error::AppError;
use crate::forecast::Forecast;
use crate::market::PriceSeries;

fn plot_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Plot(e.to_string())
}

/// 渲染单只股票的三条曲线：历史、原始预测、情绪调整后预测
pub fn render_forecast_plot(
    path: &Path,
    ticker: &str,
    historical: &PriceSeries,
    forecast: &Forecast,
    adjusted: &Forecast,
) -> Result<(), AppError> {
    let x_min = historical
        .points()
        .first()
        .map(|(d, _)| *d)
        .ok_or_else(|| AppError::Plot("历史序列为空".to_string()))?;
    let x_max = adjusted
        .last_date()
        .or_else(|| forecast.last_date())
        .unwrap_or(x_min);

    let all_values = historical
        .points()
        .iter()
        .chain(forecast.points())
        .chain(adjusted.points())
        .map(|(_, v)| *v);
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for v in all_values {
        y_min = y_min.min(v);
        y_max = y_max.max(v);
    }
    let pad = ((y_max - y_min) * 0.05).max(1.0);

    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{}: Historical & 12-Month Forecast with Sentiment", ticker),
            ("sans-serif", 22),
        )
        .margin(12)
        .x_label_area_size(42)
        .y_label_area_size(64)
        .build_cartesian_2d(x_min..x_max, (y_min - pad)..(y_max + pad))
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_labels(8)
        .x_desc("Date")
        .y_desc("Price")
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(
            historical.points().iter().copied(),
            &BLUE,
        ))
        .map_err(plot_err)?
        .label("Historical")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], BLUE));

    chart
        .draw_series(LineSeries::new(forecast.points().iter().copied(), &GREEN))
        .map_err(plot_err)?
        .label("Forecast")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], GREEN));

    chart
        .draw_series(LineSeries::new(adjusted.points().iter().copied(), &RED))
        .map_err(plot_err)?
        .label("Sentiment-Adjusted")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    Ok(())
}
