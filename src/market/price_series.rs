use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::market::DailyClose;
use crate::time_util::month_end;

/// 月度收盘价序列：(月末日期, 当月收盘均价)，按日期严格递增
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    points: Vec<(NaiveDate, f64)>,
}

impl PriceSeries {
    /// 由日线收盘价重采样为月度均价。
    /// 无数据的月份直接缺位，不做填充。
    pub fn from_daily_closes(closes: &[DailyClose]) -> Self {
        let mut buckets: BTreeMap<(i32, u32), (f64, u32)> = BTreeMap::new();
        for c in closes {
            let key = (c.date.year(), c.date.month());
            let entry = buckets.entry(key).or_insert((0.0, 0));
            entry.0 += c.close;
            entry.1 += 1;
        }
        let points = buckets
            .into_iter()
            .map(|((year, month), (sum, count))| (month_end(year, month), sum / count as f64))
            .collect();
        PriceSeries { points }
    }

    pub fn from_points(points: Vec<(NaiveDate, f64)>) -> Self {
        PriceSeries { points }
    }

    pub fn points(&self) -> &[(NaiveDate, f64)] {
        &self.points
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|(_, v)| *v).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|(d, _)| *d)
    }
}
