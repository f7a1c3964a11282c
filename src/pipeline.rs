use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use tokio::time::sleep;
use tracing::{error, info};

use crate::forecast::{adjuster, Forecast, Forecaster};
use crate::market::{PriceProvider, PriceSeries};
use crate::news::{NewsProvider, NewsRetriever, NewsWindow, SentimentScorer};
use crate::output::{plot, writer};

/// 单次运行的配置，所有股票共用
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub page_size: u32,
    pub adjustment_factor: f64,
}

/// 单只股票的输出文件，流程结束时生成，之后不再读写
#[derive(Debug)]
pub struct RunOutput {
    pub plot_path: PathBuf,
    pub news_path: PathBuf,
}

/// 整次运行的成败统计
#[derive(Debug, Default, PartialEq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// 相邻两只股票之间的间隔，避免触发外部接口限流
const INTER_TICKER_DELAY_SECS: u64 = 1;

/// 线性流水线：行情 → 预测 → 新闻 → 情绪 → 调整 → 落盘。
/// 依赖在 main 中构造后注入，便于测试替换。
pub struct Pipeline<M, N>
where
    M: PriceProvider,
    N: NewsProvider,
{
    market: M,
    retriever: NewsRetriever<N>,
    scorer: SentimentScorer,
    forecaster: Forecaster,
    config: PipelineConfig,
}

impl<M, N> Pipeline<M, N>
where
    M: PriceProvider,
    N: NewsProvider,
{
    pub fn new(
        market: M,
        retriever: NewsRetriever<N>,
        scorer: SentimentScorer,
        config: PipelineConfig,
    ) -> Self {
        Pipeline {
            market,
            retriever,
            scorer,
            forecaster: Forecaster::new(),
            config,
        }
    }

    /// 逐只顺序处理全部股票。单只失败仅记日志并继续，
    /// 这是整个工具的"部分成功"模型：只要启动检查通过，运行总会走完。
    pub async fn run_all(&self, tickers: &[String], out_base: &Path) -> RunSummary {
        let mut summary = RunSummary::default();
        for (i, ticker) in tickers.iter().enumerate() {
            if i > 0 {
                sleep(Duration::from_secs(INTER_TICKER_DELAY_SECS)).await;
            }
            match self.run_ticker(ticker, out_base).await {
                Ok(output) => {
                    info!(
                        "{} 处理完成: {} / {}",
                        ticker,
                        output.plot_path.display(),
                        output.news_path.display()
                    );
                    summary.succeeded += 1;
                }
                Err(e) => {
                    error!("{} 处理失败: {}", ticker, e);
                    summary.failed += 1;
                }
            }
        }
        summary
    }

    /// 处理一只股票。失败只影响本只，调用方决定是否继续。
    pub async fn run_ticker(&self, ticker: &str, out_base: &Path) -> Result<RunOutput> {
        info!(
            "开始处理 {} ({} ~ {})",
            ticker, self.config.start, self.config.end
        );
        let closes = self
            .market
            .daily_closes(ticker, self.config.start, self.config.end)
            .await?;
        let monthly = PriceSeries::from_daily_closes(&closes);
        info!("{} 月度序列共 {} 个点", ticker, monthly.len());

        let forecast = self.forecaster.forecast(&monthly)?;

        let window = NewsWindow {
            from: self.config.start,
            to: self.config.end,
        };
        let articles = self
            .retriever
            .fetch(ticker, window, self.config.page_size)
            .await;
        let (items, avg_sentiment) = self.scorer.score_articles(&articles);
        info!(
            "{} 聚合情绪分: {:.3} ({} 条新闻)",
            ticker,
            avg_sentiment,
            items.len()
        );

        let adjusted: Forecast =
            adjuster::adjust_forecast(&forecast, avg_sentiment, self.config.adjustment_factor);

        // 输出目录失败只算本只股票失败
        let out_dir = writer::create_run_dir(out_base)?;
        let news_path = writer::write_news_json(&out_dir, ticker, &items)?;
        let plot_path = writer::plot_path(&out_dir, ticker);
        plot::render_forecast_plot(&plot_path, ticker, &monthly, &forecast, &adjusted)?;
        info!("图表已保存: {}", plot_path.display());

        Ok(RunOutput {
            plot_path,
            news_path,
        })
    }
}
