/// 股票代码到公司名的映射，用公司名检索新闻命中率更高
const TICKER_NAMES: &[(&str, &str)] = &[
    ("AAPL", "Apple"),
    ("MSFT", "Microsoft"),
    ("GOOGL", "Google"),
    ("GOOG", "Google"),
    ("AMZN", "Amazon"),
    ("TSLA", "Tesla"),
    ("META", "Meta"),
    ("NVDA", "NVIDIA"),
    ("NFLX", "Netflix"),
    ("BA", "Boeing"),
    ("JPM", "JPMorgan"),
    ("JNJ", "Johnson & Johnson"),
    ("V", "Visa"),
    ("PG", "Procter & Gamble"),
    ("UNH", "UnitedHealth"),
    ("HD", "Home Depot"),
    ("MA", "Mastercard"),
    ("PFE", "Pfizer"),
    ("DIS", "Disney"),
    ("VZ", "Verizon"),
    ("ADBE", "Adobe"),
    ("KO", "Coca-Cola"),
    ("PEP", "PepsiCo"),
    ("T", "AT&T"),
    ("CVX", "Chevron"),
    ("WMT", "Walmart"),
    ("XOM", "ExxonMobil"),
    ("INTC", "Intel"),
    ("IBM", "IBM"),
    ("ORCL", "Oracle"),
    ("CSCO", "Cisco"),
    ("CRM", "Salesforce"),
    ("AVGO", "Broadcom"),
    ("GME", "GameStop"),
    ("AMC", "AMC Entertainment"),
    ("BB", "BlackBerry"),
    ("NOK", "Nokia"),
    ("PLTR", "Palantir"),
    ("RBLX", "Roblox"),
];

/// 无映射时直接用代码本身做查询词
pub fn query_term(ticker: &str) -> String {
    let upper = ticker.to_ascii_uppercase();
    TICKER_NAMES
        .iter()
        .find(|(t, _)| *t == upper)
        .map(|(_, name)| name.to_string())
        .unwrap_or(upper)
}
