use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::market::{DailyClose, PriceProvider, RetryPolicy};

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
// 雅虎行情接口对无 UA 的请求限流
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) stock_forecast/0.1";

#[derive(Deserialize, Debug)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Deserialize, Debug)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Deserialize, Debug)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Deserialize, Debug)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Deserialize, Debug)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Deserialize, Debug)]
struct Quote {
    close: Option<Vec<Option<f64>>>,
}

/// 雅虎行情客户端（chart v8 接口）
pub struct YahooClient {
    client: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl YahooClient {
    pub fn new(retry: RetryPolicy) -> Self {
        YahooClient {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            retry,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn send_request(&self, url: &str) -> Result<ChartResponse, AppError> {
        let mut last_err: Option<AppError> = None;
        for attempt in 0..self.retry.max_attempts {
            if attempt > 0 {
                let delay = self.retry.delay_after(attempt - 1);
                warn!("行情请求第{}次失败, {}ms 后重试", attempt, delay.as_millis());
                tokio::time::sleep(delay).await;
            }
            let resp = match self
                .client
                .get(url)
                .header("User-Agent", USER_AGENT)
                .send()
                .await
            {
                Ok(resp) => resp,
                Err(e) => {
                    // 传输层错误按瞬时错误处理
                    last_err = Some(AppError::Http(e));
                    continue;
                }
            };
            let status = resp.status();
            // 读响应体途中断连同样算一次瞬时失败
            let body = match resp.text().await {
                Ok(body) => body,
                Err(e) => {
                    last_err = Some(AppError::Http(e));
                    continue;
                }
            };
            debug!("yahoo_response status={} len={}", status, body.len());
            if status.is_server_error() {
                last_err = Some(AppError::Parse(format!("服务端错误: {}", status)));
                continue;
            }
            // 4xx 的错误详情在响应体的 chart.error 中
            let parsed: ChartResponse = serde_json::from_str(&body)?;
            return Ok(parsed);
        }
        Err(last_err.unwrap_or_else(|| AppError::Parse("重试次数耗尽".to_string())))
    }
}

#[async_trait]
impl PriceProvider for YahooClient {
    async fn daily_closes(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyClose>, AppError> {
        let period1 = start.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp();
        let period2 = end.and_hms_opt(23, 59, 59).unwrap().and_utc().timestamp();
        let url = format!(
            "{}/v8/finance/chart/{}?period1={}&period2={}&interval=1d&events=history",
            self.base_url, ticker, period1, period2
        );

        let resp = self.send_request(&url).await?;
        if let Some(err) = resp.chart.error {
            return Err(AppError::NoData(format!(
                "{}: {} ({})",
                ticker, err.description, err.code
            )));
        }
        let result = resp
            .chart
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .ok_or_else(|| AppError::NoData(ticker.to_string()))?;

        let timestamps = result.timestamp.unwrap_or_default();
        let closes = result
            .indicators
            .quote
            .into_iter()
            .next()
            .and_then(|q| q.close)
            .unwrap_or_default();

        let mut out = Vec::with_capacity(timestamps.len());
        for (ts, close) in timestamps.iter().zip(closes.iter()) {
            // 停牌日 close 为 null，直接丢弃
            if let Some(c) = close {
                if let Some(dt) = chrono::DateTime::from_timestamp(*ts, 0) {
                    out.push(DailyClose {
                        date: dt.date_naive(),
                        close: *c,
                    });
                }
            }
        }
        if out.is_empty() {
            return Err(AppError::NoData(ticker.to_string()));
        }
        Ok(out)
    }
}
