//! Event records: dividends, stock splits and news.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::dates::{optional_date, vendor_datetime};
use super::{require_text, RequiredFields};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dividend {
    pub symbol: String,
    /// Ex-dividend date
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "optional_date")]
    pub record_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "optional_date")]
    pub payment_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "optional_date")]
    pub declaration_date: Option<NaiveDate>,
    #[serde(default)]
    pub adj_dividend: Option<f64>,
    #[serde(default)]
    pub dividend: Option<f64>,
    #[serde(default, rename = "yield")]
    pub dividend_yield: Option<f64>,
    #[serde(default)]
    pub frequency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSplit {
    pub symbol: String,
    pub date: NaiveDate,
    pub numerator: f64,
    pub denominator: f64,
}

impl StockSplit {
    /// Shares held after the split per share held before.
    pub fn ratio(&self) -> f64 {
        self.numerator / self.denominator
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub symbol: String,
    #[serde(alias = "publishedDate", deserialize_with = "vendor_datetime")]
    pub published_at: NaiveDateTime,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl RequiredFields for Dividend {
    fn check_required(&self) -> Result<(), String> {
        require_text("symbol", &self.symbol)
    }
}

impl RequiredFields for StockSplit {
    fn check_required(&self) -> Result<(), String> {
        require_text("symbol", &self.symbol)?;
        if self.numerator > 0.0 && self.denominator > 0.0 {
            Ok(())
        } else {
            Err(format!(
                "split ratio {}:{} must be positive",
                self.numerator, self.denominator
            ))
        }
    }
}

impl RequiredFields for NewsArticle {
    fn check_required(&self) -> Result<(), String> {
        require_text("symbol", &self.symbol)?;
        require_text("title", &self.title)?;
        require_text("url", &self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dividend_blank_dates_and_yield() {
        let dividend: Dividend = serde_json::from_value(json!({
            "symbol": "AAPL",
            "date": "2025-02-10",
            "recordDate": "",
            "paymentDate": "2025-02-13",
            "adjDividend": 0.25,
            "dividend": 0.25,
            "yield": 0.41,
            "frequency": "Quarterly"
        }))
        .unwrap();

        assert_eq!(dividend.record_date, None);
        assert_eq!(dividend.payment_date, NaiveDate::from_ymd_opt(2025, 2, 13));
        assert_eq!(dividend.dividend_yield, Some(0.41));
    }

    #[test]
    fn test_news_vendor_timestamp() {
        let article: NewsArticle = serde_json::from_value(json!({
            "symbol": "AAPL",
            "publishedDate": "2025-02-03 21:05:14",
            "publisher": "Zacks",
            "title": "Apple beats",
            "url": "https://example.com/a",
            "site": "zacks.com"
        }))
        .unwrap();

        assert_eq!(article.published_at.to_string(), "2025-02-03 21:05:14");
        assert!(article.check_required().is_ok());
    }

    #[test]
    fn test_news_requires_url() {
        let article = NewsArticle {
            symbol: "AAPL".into(),
            published_at: NaiveDate::from_ymd_opt(2025, 2, 3)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            title: "Headline".into(),
            url: " ".into(),
            publisher: None,
            site: None,
            image: None,
            text: None,
        };
        assert!(article.check_required().is_err());
    }

    #[test]
    fn test_split_ratio() {
        let split = StockSplit {
            symbol: "AAPL".into(),
            date: NaiveDate::from_ymd_opt(2020, 8, 31).unwrap(),
            numerator: 4.0,
            denominator: 1.0,
        };
        assert_eq!(split.ratio(), 4.0);

        let broken = StockSplit {
            denominator: 0.0,
            ..split
        };
        assert!(broken.check_required().is_err());
    }
}
