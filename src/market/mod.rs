use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::AppError;

pub mod price_series;
pub mod yahoo_client;

pub use price_series::PriceSeries;
pub use yahoo_client::YahooClient;

/// 单日收盘价
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyClose {
    pub date: NaiveDate,
    pub close: f64,
}

/// 行情数据源，按日期区间返回日线收盘价
#[async_trait]
pub trait PriceProvider: Send + Sync {
    async fn daily_closes(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyClose>, AppError>;
}

/// 行情请求的重试策略：最大尝试次数 + 指数退避
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 3,
            base_delay_ms: 1000,
        }
    }
}

impl RetryPolicy {
    /// 第 attempt 次失败后的等待时长（attempt 从 0 开始计）
    pub fn delay_after(&self, attempt: u32) -> std::time::Duration {
        std::time::Duration::from_millis(self.base_delay_ms * (1u64 << attempt))
    }
}
