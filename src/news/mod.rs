use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod company_name;
pub mod news_api_client;
pub mod retriever;
pub mod sentiment;

pub use news_api_client::NewsApiClient;
pub use retriever::{NewsRetriever, RetrieverConfig};
pub use sentiment::SentimentScorer;

/// 新闻源返回的原始文章
#[derive(Debug, Clone, Deserialize)]
pub struct RawArticle {
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
}

/// 打分后的新闻条目，生成后不再修改，仅写入 JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub description: String,
    pub url: Option<String>,
    pub sentiment: f64,
}

/// 新闻查询的日期窗口
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewsWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// 新闻源错误分类，决定重试/降级路径
#[derive(Error, Debug)]
pub enum NewsFetchError {
    /// 免费套餐不允许查询这么早的日期，可收窄窗口后重试一次
    #[error("日期窗口超出套餐限制: {0}")]
    WindowTooLarge(String),

    /// 超时、5xx 等瞬时错误，可退避重试
    #[error("瞬时错误: {0}")]
    Transient(String),

    /// 鉴权失败等不可恢复错误，不重试
    #[error("不可恢复错误: {0}")]
    Fatal(String),
}

/// 新闻数据源
#[async_trait]
pub trait NewsProvider: Send + Sync {
    async fn headlines(
        &self,
        query: &str,
        window: &NewsWindow,
        page_size: u32,
    ) -> Result<Vec<RawArticle>, NewsFetchError>;
}
