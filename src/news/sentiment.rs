use vader_sentiment::SentimentIntensityAnalyzer;

use crate::news::{NewsItem, RawArticle};

/// VADER 词典情绪打分器。纯函数式，无副作用，结果确定。
pub struct SentimentScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl SentimentScorer {
    pub fn new() -> Self {
        SentimentScorer {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    /// 复合情绪分，范围 [-1, 1]
    pub fn compound(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }
        let scores = self.analyzer.polarity_scores(text);
        scores["compound"].clamp(-1.0, 1.0)
    }

    /// 逐条打分（标题 + 摘要拼接），并返回均值。
    /// 空列表的聚合情绪定义为 0.0（中性）。
    pub fn score_articles(&self, articles: &[RawArticle]) -> (Vec<NewsItem>, f64) {
        let mut items = Vec::with_capacity(articles.len());
        let mut total = 0.0;
        for art in articles {
            let description = art.description.clone().unwrap_or_default();
            let combined = format!("{}. {}", art.title, description);
            let sentiment = self.compound(&combined);
            total += sentiment;
            items.push(NewsItem {
                title: art.title.clone(),
                description,
                url: art.url.clone(),
                sentiment,
            });
        }
        let avg = if items.is_empty() {
            0.0
        } else {
            total / items.len() as f64
        };
        (items, avg)
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}
