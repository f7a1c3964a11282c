use chrono::{Datelike, Local, NaiveDate};

/// 某年某月的天数
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    // 下月1号减去本月1号
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap();
    (next_first - first).num_days() as u32
}

/// 某年某月的月末日期
pub fn month_end(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, days_in_month(year, month)).unwrap()
}

/// 给定日期之后第 n 个月的月末（n >= 1）
pub fn month_end_after(date: NaiveDate, n: u32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month();
    for _ in 0..n {
        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
    }
    month_end(year, month)
}

/// 本次运行的日期目录名，如 2025-08-28
pub fn run_date_str() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
