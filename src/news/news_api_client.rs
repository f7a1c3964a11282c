use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::news::{NewsFetchError, NewsProvider, NewsWindow, RawArticle};

const DEFAULT_BASE_URL: &str = "https://newsapi.org";

#[derive(Deserialize, Debug)]
struct NewsApiResponse {
    status: String,
    code: Option<String>,
    message: Option<String>,
    #[serde(default)]
    articles: Vec<ApiArticle>,
}

#[derive(Deserialize, Debug)]
struct ApiArticle {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
}

/// NewsAPI.org 客户端（everything 接口，X-Api-Key 鉴权）
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsApiClient {
    pub fn new(api_key: String) -> Self {
        NewsApiClient {
            client: Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// 免费套餐拒绝过早的 from 日期时返回 parameterInvalid + "too far in the past"
fn classify_api_error(status: StatusCode, code: Option<&str>, message: &str) -> NewsFetchError {
    if code == Some("parameterInvalid") && message.contains("too far in the past") {
        return NewsFetchError::WindowTooLarge(message.to_string());
    }
    if status == StatusCode::TOO_MANY_REQUESTS || code == Some("rateLimited") {
        return NewsFetchError::Transient(message.to_string());
    }
    NewsFetchError::Fatal(format!("{}: {}", status, message))
}

#[async_trait]
impl NewsProvider for NewsApiClient {
    async fn headlines(
        &self,
        query: &str,
        window: &NewsWindow,
        page_size: u32,
    ) -> Result<Vec<RawArticle>, NewsFetchError> {
        let url = format!("{}/v2/everything", self.base_url);
        let from = window.from.format("%Y-%m-%d").to_string();
        let to = window.to.format("%Y-%m-%d").to_string();
        let page = page_size.to_string();
        let resp = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .query(&[
                ("q", query),
                ("from", from.as_str()),
                ("to", to.as_str()),
                ("pageSize", page.as_str()),
                ("sortBy", "publishedAt"),
                ("language", "en"),
            ])
            .send()
            .await
            .map_err(|e| NewsFetchError::Transient(e.to_string()))?;

        let status = resp.status();
        if status.is_server_error() {
            return Err(NewsFetchError::Transient(format!("服务端错误: {}", status)));
        }
        let body = resp
            .text()
            .await
            .map_err(|e| NewsFetchError::Transient(e.to_string()))?;
        debug!("newsapi_response status={} len={}", status, body.len());

        let parsed: NewsApiResponse = serde_json::from_str(&body)
            .map_err(|e| NewsFetchError::Fatal(format!("响应解析失败: {}", e)))?;
        if parsed.status != "ok" {
            let message = parsed.message.unwrap_or_default();
            return Err(classify_api_error(status, parsed.code.as_deref(), &message));
        }

        // 保持新闻源自身的排序，不重排
        let articles = parsed
            .articles
            .into_iter()
            .map(|a| RawArticle {
                title: a.title.unwrap_or_default(),
                description: a.description,
                url: a.url,
            })
            .collect();
        Ok(articles)
    }
}
