use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, bail};
use chrono::NaiveDate;
use clap::Parser;
use dotenv::dotenv;
use tracing::info;

use stock_forecast::app_config::env::env_parse_or;
use stock_forecast::app_config::log::setup_logging;
use stock_forecast::forecast::adjuster::DEFAULT_ADJUSTMENT_FACTOR;
use stock_forecast::market::{RetryPolicy, YahooClient};
use stock_forecast::news::{NewsApiClient, NewsRetriever, RetrieverConfig, SentimentScorer};
use stock_forecast::pipeline::{Pipeline, PipelineConfig};

/// 拉取历史行情, 做12个月 Holt-Winters 预测, 按新闻情绪微调后输出图表与JSON
#[derive(Parser, Debug)]
#[command(name = "stock_forecast")]
struct Args {
    /// 逗号分隔的股票代码, 如 GME,AAPL,MSFT
    #[arg(short, long)]
    tickers: String,

    /// 开始日期 YYYY-MM-DD
    #[arg(short, long)]
    start: NaiveDate,

    /// 结束日期 YYYY-MM-DD
    #[arg(short, long)]
    end: NaiveDate,

    /// 图表与新闻JSON的输出根目录
    #[arg(short, long, default_value = "stock_plots")]
    outdir: PathBuf,

    /// 每只股票抓取的新闻条数
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=100))]
    pagesize: u32,

    /// 情绪调整系数, 极端情绪下的最大调整幅度
    #[arg(long, default_value_t = DEFAULT_ADJUSTMENT_FACTOR)]
    adjustment_factor: f64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    setup_logging()?;

    let args = Args::parse();
    if args.start >= args.end {
        bail!("开始日期必须早于结束日期: {} >= {}", args.start, args.end);
    }
    let tickers: Vec<String> = args
        .tickers
        .split(',')
        .map(|t| t.trim().to_ascii_uppercase())
        .filter(|t| !t.is_empty())
        .collect();
    if tickers.is_empty() {
        bail!("未提供有效的股票代码");
    }

    // 唯一的整体性致命错误：缺少 NEWSAPI_KEY，在任何网络请求之前检查
    let api_key =
        env::var("NEWSAPI_KEY").map_err(|_| anyhow!("请设置 NEWSAPI_KEY 环境变量"))?;

    let mut market = YahooClient::new(RetryPolicy {
        max_attempts: env_parse_or("MARKET_MAX_ATTEMPTS", 3),
        base_delay_ms: env_parse_or("MARKET_BASE_DELAY_MS", 1000),
    });
    if let Ok(base_url) = env::var("MARKET_BASE_URL") {
        market = market.with_base_url(base_url);
    }
    let retriever = NewsRetriever::new(
        NewsApiClient::new(api_key),
        RetrieverConfig {
            max_attempts: env_parse_or("NEWS_MAX_ATTEMPTS", 3),
            fallback_horizon_days: env_parse_or("NEWS_FALLBACK_DAYS", 29),
            base_backoff_secs: env_parse_or("NEWS_BACKOFF_SECS", 2),
        },
    );
    let pipeline = Pipeline::new(
        market,
        retriever,
        SentimentScorer::new(),
        PipelineConfig {
            start: args.start,
            end: args.end,
            page_size: args.pagesize,
            adjustment_factor: args.adjustment_factor,
        },
    );

    // 逐只顺序处理，单只失败不影响其它，整体退出码保持 0
    let summary = pipeline.run_all(&tickers, &args.outdir).await;
    info!("运行结束: {} 成功, {} 失败", summary.succeeded, summary.failed);

    Ok(())
}
