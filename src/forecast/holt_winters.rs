/// 加法趋势 + 加法季节的 Holt-Winters 三次指数平滑。
///
/// 平滑参数 (alpha, beta, gamma) 通过网格搜索样本内一步预测的
/// 残差平方和来选取，对同一输入序列结果是确定的。
pub struct HoltWinters {
    season_length: usize,
}

/// 拟合后的模型状态
pub struct HoltWintersFit {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub sse: f64,
    level: f64,
    trend: f64,
    seasonals: Vec<f64>,
    n: usize,
    season_length: usize,
}

const PARAM_GRID: &[f64] = &[
    0.01, 0.05, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 0.95,
];

impl HoltWinters {
    pub fn new(season_length: usize) -> Self {
        HoltWinters { season_length }
    }

    /// 最少需要两个完整季节周期
    pub fn min_observations(&self) -> usize {
        self.season_length * 2
    }

    /// 网格搜索最优平滑参数后拟合。
    /// 调用方必须保证 values.len() >= min_observations()。
    pub fn fit(&self, values: &[f64]) -> HoltWintersFit {
        let mut best: Option<HoltWintersFit> = None;
        for &alpha in PARAM_GRID {
            for &beta in PARAM_GRID {
                for &gamma in PARAM_GRID {
                    let fit = self.fit_with(values, alpha, beta, gamma);
                    match &best {
                        Some(b) if b.sse <= fit.sse => {}
                        _ => best = Some(fit),
                    }
                }
            }
        }
        best.unwrap()
    }

    /// 固定参数拟合一次，返回末状态与样本内 SSE
    pub fn fit_with(&self, values: &[f64], alpha: f64, beta: f64, gamma: f64) -> HoltWintersFit {
        let m = self.season_length;
        let n = values.len();
        debug_assert!(n >= 2 * m);

        // 初始化：水平、趋势取前两个周期均值之差，季节项去趋势后取首周期偏差。
        // 初始状态对齐到 t = -1，使首个观测的一步预测无系统偏差。
        let first_mean: f64 = values[..m].iter().sum::<f64>() / m as f64;
        let second_mean: f64 = values[m..2 * m].iter().sum::<f64>() / m as f64;
        let trend0 = (second_mean - first_mean) / m as f64;
        let level0 = first_mean - trend0 * (m as f64 + 1.0) / 2.0;
        let mut seasonals: Vec<f64> = (0..m)
            .map(|i| values[i] - (level0 + (i as f64 + 1.0) * trend0))
            .collect();

        let mut level = level0;
        let mut trend = trend0;
        let mut sse = 0.0;
        for (t, &x) in values.iter().enumerate() {
            let idx = t % m;
            let predicted = level + trend + seasonals[idx];
            let err = x - predicted;
            sse += err * err;

            let prev_level = level;
            level = alpha * (x - seasonals[idx]) + (1.0 - alpha) * (level + trend);
            trend = beta * (level - prev_level) + (1.0 - beta) * trend;
            seasonals[idx] = gamma * (x - level) + (1.0 - gamma) * seasonals[idx];
        }

        HoltWintersFit {
            alpha,
            beta,
            gamma,
            sse,
            level,
            trend,
            seasonals,
            n,
            season_length: m,
        }
    }
}

impl HoltWintersFit {
    /// 向前预测 horizon 步
    pub fn forecast(&self, horizon: usize) -> Vec<f64> {
        (1..=horizon)
            .map(|h| {
                let idx = (self.n - 1 + h) % self.season_length;
                self.level + h as f64 * self.trend + self.seasonals[idx]
            })
            .collect()
    }
}
