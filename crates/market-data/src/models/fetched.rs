use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::RequiredFields;

/// A vendor element that was dropped because it did not decode
/// or violated its record's required fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    /// Position of the element in the vendor response
    pub index: usize,
    pub reason: String,
}

/// Result of one vendor call: the typed records plus anything rejected on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub records: Vec<T>,
    pub rejected: Vec<Rejected>,
}

impl<T> Default for Fetched<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

impl<T> Fetched<T> {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<T>) -> Self {
        Self {
            records,
            rejected: Vec::new(),
        }
    }

    /// True when the vendor had nothing at all for the request.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.rejected.is_empty()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Fetched<U> {
        Fetched {
            records: self.records.into_iter().map(f).collect(),
            rejected: self.rejected,
        }
    }

    /// Keeps at most `n` records; used for single-record endpoints.
    pub fn truncate(mut self, n: usize) -> Self {
        self.records.truncate(n);
        self
    }
}

impl<T> Fetched<T>
where
    T: DeserializeOwned + RequiredFields,
{
    /// Decodes each element on its own so one bad element does not sink the rest.
    pub fn decode(endpoint: &str, items: Vec<Value>) -> Self {
        let mut fetched = Fetched::empty();
        for (index, item) in items.into_iter().enumerate() {
            let outcome = serde_json::from_value::<T>(item)
                .map_err(|e| e.to_string())
                .and_then(|record| record.check_required().map(|_| record));
            match outcome {
                Ok(record) => fetched.records.push(record),
                Err(reason) => {
                    warn!("Dropping element {} from {}: {}", index, endpoint, reason);
                    fetched.rejected.push(Rejected { index, reason });
                }
            }
        }
        fetched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StockSplit;
    use serde_json::json;

    #[test]
    fn test_decode_keeps_valid_and_reports_rejected() {
        let items = vec![
            json!({"symbol": "AAPL", "date": "2020-08-31", "numerator": 4, "denominator": 1}),
            json!({"symbol": "AAPL", "date": "not-a-date", "numerator": 7, "denominator": 1}),
            json!({"symbol": "", "date": "2014-06-09", "numerator": 7, "denominator": 1}),
        ];

        let fetched: Fetched<StockSplit> = Fetched::decode("splits", items);

        assert_eq!(fetched.records.len(), 1);
        assert_eq!(fetched.records[0].numerator, 4.0);
        assert_eq!(
            fetched.rejected.iter().map(|r| r.index).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn test_empty_input_is_empty() {
        let fetched: Fetched<StockSplit> = Fetched::decode("splits", Vec::new());
        assert!(fetched.is_empty());
    }
}
