use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::AppError;
use crate::news::NewsItem;
use crate::time_util::run_date_str;

/// 在输出根目录下创建本次运行的日期子目录
pub fn create_run_dir(base: &Path) -> Result<PathBuf, AppError> {
    let dir = base.join(run_date_str());
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// 本只股票的图片输出路径
pub fn plot_path(dir: &Path, ticker: &str) -> PathBuf {
    dir.join(format!("{}_forecasts.png", ticker))
}

/// 写出新闻 JSON（UTF-8, 缩进格式）
pub fn write_news_json(dir: &Path, ticker: &str, items: &[NewsItem]) -> Result<PathBuf, AppError> {
    let path = dir.join(format!("{}_news.json", ticker));
    let mut writer = BufWriter::new(File::create(&path)?);
    serde_json::to_writer_pretty(&mut writer, items)?;
    // 显式冲刷，落盘失败要报给调用方而不是在 drop 里被吞掉
    writer.flush()?;
    info!("新闻已保存: {}", path.display());
    Ok(path)
}
