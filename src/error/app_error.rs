use thiserror::Error;

/// 应用错误
#[derive(Error, Debug)]
pub enum AppError {
    /// 行情数据为空（无效代码、已退市、区间内无交易日）
    #[error("行情数据为空: {0}")]
    NoData(String),

    /// 历史月份数不足以拟合季节性模型
    #[error("历史数据不足: 需要至少{need}个月, 实际{got}个月")]
    InsufficientHistory { got: usize, need: usize },

    /// 新闻接口错误
    #[error("新闻接口错误: {0}")]
    NewsProvider(String),

    /// 绘图失败
    #[error("绘图失败: {0}")]
    Plot(String),

    /// IO错误
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP请求失败
    #[error("请求失败: {0}")]
    Http(#[from] reqwest::Error),

    /// 响应解析失败
    #[error("响应解析失败: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}
