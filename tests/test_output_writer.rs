use std::fs;

use anyhow::Result;

use stock_forecast::news::NewsItem;
use stock_forecast::output::writer;
use stock_forecast::time_util::run_date_str;

fn temp_base(tag: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("stock_forecast_test_{}_{}", tag, std::process::id()))
}

#[test]
fn run_dir_is_dated_subdirectory() -> Result<()> {
    let base = temp_base("rundir");
    let dir = writer::create_run_dir(&base)?;
    assert!(dir.is_dir());
    assert_eq!(dir, base.join(run_date_str()));
    // 幂等：重复创建不报错
    let again = writer::create_run_dir(&base)?;
    assert_eq!(again, dir);

    fs::remove_dir_all(&base)?;
    Ok(())
}

#[test]
fn news_json_round_trips() -> Result<()> {
    let base = temp_base("news");
    let dir = writer::create_run_dir(&base)?;

    let items = vec![
        NewsItem {
            title: "Apple beats expectations".to_string(),
            description: "Strong quarter".to_string(),
            url: Some("https://example.com/apple".to_string()),
            sentiment: 0.42,
        },
        NewsItem {
            title: "Markets mixed".to_string(),
            description: String::new(),
            url: None,
            sentiment: -0.1,
        },
    ];
    let path = writer::write_news_json(&dir, "AAPL", &items)?;
    assert_eq!(path.file_name().unwrap(), "AAPL_news.json");

    let body = fs::read_to_string(&path)?;
    let parsed: Vec<NewsItem> = serde_json::from_str(&body)?;
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].title, items[0].title);
    assert_eq!(parsed[0].url, items[0].url);
    assert_eq!(parsed[0].sentiment, items[0].sentiment);
    assert_eq!(parsed[1].url, None);
    assert!(parsed.iter().all(|i| (-1.0..=1.0).contains(&i.sentiment)));

    fs::remove_dir_all(&base)?;
    Ok(())
}

#[test]
fn large_news_payload_is_fully_on_disk_after_write() -> Result<()> {
    let base = temp_base("flush");
    let dir = writer::create_run_dir(&base)?;

    // 远超缓冲区大小的负载, 写完立刻读必须完整可解析
    let items: Vec<NewsItem> = (0..200)
        .map(|i| NewsItem {
            title: format!("Headline number {} {}", i, "x".repeat(120)),
            description: "y".repeat(160),
            url: Some(format!("https://example.com/article/{}", i)),
            sentiment: 0.0,
        })
        .collect();
    let path = writer::write_news_json(&dir, "MSFT", &items)?;

    let body = fs::read_to_string(&path)?;
    let parsed: Vec<NewsItem> = serde_json::from_str(&body)?;
    assert_eq!(parsed.len(), 200);
    assert_eq!(parsed[199].title, items[199].title);

    fs::remove_dir_all(&base)?;
    Ok(())
}

#[test]
fn plot_path_uses_ticker_prefix() -> Result<()> {
    let base = temp_base("plot");
    let dir = writer::create_run_dir(&base)?;
    let path = writer::plot_path(&dir, "GME");
    assert_eq!(path.file_name().unwrap(), "GME_forecasts.png");

    fs::remove_dir_all(&base)?;
    Ok(())
}
