use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates::optional_date;
use super::{require_text, RequiredFields};

/// Company profile as published by the vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub symbol: String,
    pub company_name: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub exchange: Option<String>,
    #[serde(default)]
    pub exchange_full_name: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ceo: Option<String>,
    /// Logo URL
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "optional_date")]
    pub ipo_date: Option<NaiveDate>,
}

impl CompanyProfile {
    /// Profile carrying nothing but the symbol.
    ///
    /// Child records need a company row to hang off; a later profile
    /// sync fills in the rest.
    pub fn placeholder(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            company_name: symbol.to_string(),
            price: None,
            market_cap: None,
            currency: None,
            exchange: None,
            exchange_full_name: None,
            industry: None,
            sector: None,
            country: None,
            website: None,
            description: None,
            ceo: None,
            image: None,
            ipo_date: None,
        }
    }
}

impl RequiredFields for CompanyProfile {
    fn check_required(&self) -> Result<(), String> {
        require_text("symbol", &self.symbol)?;
        require_text("companyName", &self.company_name)
    }
}
