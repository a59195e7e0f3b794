//! Analyst opinions: grade changes and price target consensus.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{require_text, RequiredFields};

/// One grade change published by a research firm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grading {
    pub symbol: String,
    pub date: NaiveDate,
    pub grading_company: String,
    #[serde(default)]
    pub previous_grade: Option<String>,
    #[serde(default)]
    pub new_grade: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
}

impl RequiredFields for Grading {
    fn check_required(&self) -> Result<(), String> {
        require_text("symbol", &self.symbol)?;
        require_text("gradingCompany", &self.grading_company)
    }
}

/// Consensus price target as of the day it was fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTarget {
    pub symbol: String,
    pub date: NaiveDate,
    pub target_high: Option<f64>,
    pub target_low: Option<f64>,
    pub target_consensus: Option<f64>,
    pub target_median: Option<f64>,
}

impl RequiredFields for PriceTarget {
    fn check_required(&self) -> Result<(), String> {
        require_text("symbol", &self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_grading_from_vendor_row() {
        let grading: Grading = serde_json::from_value(json!({
            "symbol": "AAPL",
            "date": "2025-01-31",
            "gradingCompany": "Morgan Stanley",
            "previousGrade": "Overweight",
            "newGrade": "Overweight",
            "action": "maintain"
        }))
        .unwrap();

        assert_eq!(grading.grading_company, "Morgan Stanley");
        assert_eq!(grading.action.as_deref(), Some("maintain"));
        assert!(grading.check_required().is_ok());
    }

    #[test]
    fn test_grading_requires_firm() {
        let grading: Grading = serde_json::from_value(json!({
            "symbol": "AAPL",
            "date": "2025-01-31",
            "gradingCompany": " "
        }))
        .unwrap();
        assert!(grading.check_required().is_err());

        let missing = serde_json::from_value::<Grading>(json!({
            "symbol": "AAPL",
            "date": "2025-01-31"
        }));
        assert!(missing.is_err());
    }
}
