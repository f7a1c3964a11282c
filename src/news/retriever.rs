use chrono::Duration;
use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::error::AppError;
use crate::news::{company_name, NewsFetchError, NewsProvider, NewsWindow, RawArticle};

/// 新闻抓取的重试与降级配置
#[derive(Debug, Clone, Copy)]
pub struct RetrieverConfig {
    /// 瞬时错误的最大尝试次数
    pub max_attempts: u32,
    /// 窗口被拒后收窄到最近 N 天（免费套餐上限约 30 天）
    pub fallback_horizon_days: i64,
    /// 指数退避基数（秒），第 n 次重试前等待 base * 2^(n-1)
    pub base_backoff_secs: u64,
}

impl Default for RetrieverConfig {
    fn default() -> Self {
        RetrieverConfig {
            max_attempts: 3,
            fallback_horizon_days: 29,
            base_backoff_secs: 2,
        }
    }
}

/// 包装任意新闻源，负责窗口降级与退避重试。
/// 任何失败最终都降级为空列表，不让单只股票的新闻拖垮整个流程。
pub struct NewsRetriever<P: NewsProvider> {
    provider: P,
    config: RetrieverConfig,
}

impl<P: NewsProvider> NewsRetriever<P> {
    pub fn new(provider: P, config: RetrieverConfig) -> Self {
        NewsRetriever { provider, config }
    }

    /// 抓取 ticker 相关头条。空列表是正常结果而非错误；
    /// 任何 NewsProvider 错误在这里降级为空列表。
    pub async fn fetch(
        &self,
        ticker: &str,
        window: NewsWindow,
        page_size: u32,
    ) -> Vec<RawArticle> {
        match self.try_fetch(ticker, window, page_size).await {
            Ok(articles) => articles,
            Err(e) => {
                error!("{} 新闻抓取失败, 降级为空列表: {}", ticker, e);
                Vec::new()
            }
        }
    }

    /// 抓取头条，重试/降级耗尽时报 NewsProvider 错误。
    /// 降不降级由 fetch 决定，这里只负责把失败说清楚。
    pub async fn try_fetch(
        &self,
        ticker: &str,
        window: NewsWindow,
        page_size: u32,
    ) -> Result<Vec<RawArticle>, AppError> {
        let query = company_name::query_term(ticker);
        let mut window = window;
        let mut narrowed = false;
        let mut attempt = 0u32;
        let mut last_transient = String::new();

        while attempt < self.config.max_attempts {
            if attempt > 0 {
                let secs = self.config.base_backoff_secs * (1u64 << (attempt - 1));
                warn!("{} 新闻第{}次重试, 先等待 {}s", ticker, attempt, secs);
                sleep(std::time::Duration::from_secs(secs)).await;
            }
            match self.provider.headlines(&query, &window, page_size).await {
                Ok(articles) => {
                    info!("{} 抓取到 {} 条新闻 (查询词: {})", ticker, articles.len(), query);
                    return Ok(articles);
                }
                Err(NewsFetchError::WindowTooLarge(msg)) => {
                    if narrowed {
                        // 只收窄一次，再被拒就放弃
                        return Err(AppError::NewsProvider(format!(
                            "收窄后窗口仍被拒绝: {}",
                            msg
                        )));
                    }
                    let clamped_from = window.to - Duration::days(self.config.fallback_horizon_days);
                    warn!(
                        "{} 日期窗口超出套餐限制, from 收窄到 {}: {}",
                        ticker, clamped_from, msg
                    );
                    window.from = window.from.max(clamped_from);
                    narrowed = true;
                    // 窗口收窄不计入瞬时重试次数
                }
                Err(NewsFetchError::Transient(msg)) => {
                    warn!("{} 新闻抓取瞬时失败: {}", ticker, msg);
                    last_transient = msg;
                    attempt += 1;
                }
                Err(NewsFetchError::Fatal(msg)) => {
                    return Err(AppError::NewsProvider(msg));
                }
            }
        }
        Err(AppError::NewsProvider(format!(
            "重试{}次后放弃: {}",
            self.config.max_attempts, last_transient
        )))
    }
}
