use chrono::NaiveDate;
use tracing::info;

use crate::error::AppError;
use crate::market::PriceSeries;
use crate::time_util::month_end_after;

pub mod adjuster;
pub mod holt_winters;

use holt_winters::HoltWinters;

/// 预测的季节周期与步长：12 个月
pub const SEASON_LENGTH: usize = 12;
pub const FORECAST_HORIZON: usize = 12;

/// 12 步月度预测：(月末日期, 预测价)，紧跟历史序列最后一个月
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    points: Vec<(NaiveDate, f64)>,
}

impl Forecast {
    pub fn from_points(points: Vec<(NaiveDate, f64)>) -> Self {
        Forecast { points }
    }

    pub fn points(&self) -> &[(NaiveDate, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|(d, _)| *d)
    }
}

/// 对月度序列拟合 Holt-Winters 并向前预测 12 个月
pub struct Forecaster {
    model: HoltWinters,
}

impl Forecaster {
    pub fn new() -> Self {
        Forecaster {
            model: HoltWinters::new(SEASON_LENGTH),
        }
    }

    pub fn forecast(&self, series: &PriceSeries) -> Result<Forecast, AppError> {
        let need = self.model.min_observations();
        if series.len() < need {
            return Err(AppError::InsufficientHistory {
                got: series.len(),
                need,
            });
        }
        let values = series.values();
        let fit = self.model.fit(&values);
        info!(
            "Holt-Winters 拟合完成: alpha={} beta={} gamma={} sse={:.4}",
            fit.alpha, fit.beta, fit.gamma, fit.sse
        );

        let last_date = series.last_date().expect("非空序列必有末日期");
        let points = fit
            .forecast(FORECAST_HORIZON)
            .into_iter()
            .enumerate()
            .map(|(i, v)| (month_end_after(last_date, i as u32 + 1), v))
            .collect();
        Ok(Forecast::from_points(points))
    }
}

impl Default for Forecaster {
    fn default() -> Self {
        Self::new()
    }
}
