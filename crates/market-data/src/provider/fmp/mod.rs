//! Financial Modeling Prep provider.
//!
//! One endpoint per data kind under the `stable` API:
//! - `profile`, `ratings-snapshot`, `financial-scores`
//! - `income-statement`, `balance-sheet-statement`, `cash-flow-statement`
//! - `key-metrics`, `ratios`
//! - `price-target-consensus`, `grades`
//! - `dividends`, `splits`, `news/stock`
//!
//! The API key travels as the `apikey` query parameter and is stripped from
//! every error message.
//! API documentation: https://site.financialmodelingprep.com/developer/docs

mod models;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::{
    normalize_symbol, BalanceSheet, CashFlowStatement, CompanyProfile, DataKind, Dividend,
    FetchParams, Fetched, FinancialRatios, FinancialScores, Grading, IncomeStatement, KeyMetrics,
    NewsArticle, PriceTarget, Rating, RequiredFields, StockSplit, VendorData,
};
use crate::provider::{FinancialDataProvider, ProviderConfig};

use models::{PriceTargetConsensus, RatingSnapshot, ScoresSnapshot};

const PROVIDER_ID: &str = "FMP";
const ERROR_MESSAGE_KEY: &str = "Error Message";
const MAX_ERROR_BODY: usize = 200;

/// Financial Modeling Prep client.
pub struct FmpProvider {
    client: Client,
    config: ProviderConfig,
}

impl FmpProvider {
    /// Create a provider from an explicit configuration.
    pub fn new(config: ProviderConfig) -> Result<Self, MarketDataError> {
        if config.api_key.trim().is_empty() {
            return Err(MarketDataError::Configuration(
                "FMP API key is empty".to_string(),
            ));
        }
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MarketDataError::Configuration(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Vendor path for a data kind.
    pub fn endpoint(kind: DataKind) -> &'static str {
        match kind {
            DataKind::Profile => "profile",
            DataKind::IncomeStatement => "income-statement",
            DataKind::BalanceSheet => "balance-sheet-statement",
            DataKind::CashFlow => "cash-flow-statement",
            DataKind::KeyMetrics => "key-metrics",
            DataKind::FinancialRatios => "ratios",
            DataKind::FinancialScores => "financial-scores",
            DataKind::Rating => "ratings-snapshot",
            DataKind::PriceTarget => "price-target-consensus",
            DataKind::Gradings => "grades",
            DataKind::Dividends => "dividends",
            DataKind::Splits => "splits",
            DataKind::News => "news/stock",
        }
    }

    fn symbol_param(kind: DataKind) -> &'static str {
        match kind {
            DataKind::News => "symbols",
            _ => "symbol",
        }
    }

    pub async fn company_profile(
        &self,
        symbol: &str,
    ) -> Result<Fetched<CompanyProfile>, MarketDataError> {
        self.profile(symbol, &FetchParams::default()).await
    }

    async fn profile(
        &self,
        symbol: &str,
        params: &FetchParams,
    ) -> Result<Fetched<CompanyProfile>, MarketDataError> {
        let fetched = self
            .fetch_records(DataKind::Profile, symbol, params)
            .await?;
        Ok(fetched.truncate(1))
    }

    pub async fn income_statements(
        &self,
        symbol: &str,
        params: &FetchParams,
    ) -> Result<Fetched<IncomeStatement>, MarketDataError> {
        self.fetch_records(DataKind::IncomeStatement, symbol, params)
            .await
    }

    pub async fn balance_sheets(
        &self,
        symbol: &str,
        params: &FetchParams,
    ) -> Result<Fetched<BalanceSheet>, MarketDataError> {
        self.fetch_records(DataKind::BalanceSheet, symbol, params)
            .await
    }

    pub async fn cash_flow_statements(
        &self,
        symbol: &str,
        params: &FetchParams,
    ) -> Result<Fetched<CashFlowStatement>, MarketDataError> {
        self.fetch_records(DataKind::CashFlow, symbol, params).await
    }

    pub async fn key_metrics(
        &self,
        symbol: &str,
        params: &FetchParams,
    ) -> Result<Fetched<KeyMetrics>, MarketDataError> {
        self.fetch_records(DataKind::KeyMetrics, symbol, params)
            .await
    }

    pub async fn financial_ratios(
        &self,
        symbol: &str,
        params: &FetchParams,
    ) -> Result<Fetched<FinancialRatios>, MarketDataError> {
        self.fetch_records(DataKind::FinancialRatios, symbol, params)
            .await
    }

    /// Current Altman Z / Piotroski scores, stamped with today's date.
    pub async fn financial_scores(
        &self,
        symbol: &str,
    ) -> Result<Fetched<FinancialScores>, MarketDataError> {
        self.fetch_snapshot(
            DataKind::FinancialScores,
            symbol,
            &FetchParams::default(),
            ScoresSnapshot::into_scores,
        )
        .await
    }

    /// Current rating snapshot, stamped with today's date.
    pub async fn rating(&self, symbol: &str) -> Result<Fetched<Rating>, MarketDataError> {
        self.fetch_snapshot(
            DataKind::Rating,
            symbol,
            &FetchParams::default(),
            RatingSnapshot::into_rating,
        )
        .await
    }

    /// Analyst price-target consensus, stamped with today's date.
    pub async fn price_target(
        &self,
        symbol: &str,
    ) -> Result<Fetched<PriceTarget>, MarketDataError> {
        self.fetch_snapshot(
            DataKind::PriceTarget,
            symbol,
            &FetchParams::default(),
            PriceTargetConsensus::into_price_target,
        )
        .await
    }

    pub async fn gradings(&self, symbol: &str) -> Result<Fetched<Grading>, MarketDataError> {
        self.fetch_records(DataKind::Gradings, symbol, &FetchParams::default())
            .await
    }

    pub async fn dividends(
        &self,
        symbol: &str,
        params: &FetchParams,
    ) -> Result<Fetched<Dividend>, MarketDataError> {
        self.fetch_records(DataKind::Dividends, symbol, params)
            .await
    }

    pub async fn splits(&self, symbol: &str) -> Result<Fetched<StockSplit>, MarketDataError> {
        self.fetch_records(DataKind::Splits, symbol, &FetchParams::default())
            .await
    }

    pub async fn news(
        &self,
        symbol: &str,
        params: &FetchParams,
    ) -> Result<Fetched<NewsArticle>, MarketDataError> {
        self.fetch_records(DataKind::News, symbol, params).await
    }

    /// Keep the first element of an undated payload and stamp it with today's date.
    async fn fetch_snapshot<S, T, F>(
        &self,
        kind: DataKind,
        symbol: &str,
        params: &FetchParams,
        stamp: F,
    ) -> Result<Fetched<T>, MarketDataError>
    where
        S: DeserializeOwned + RequiredFields,
        F: Fn(S, NaiveDate) -> T,
    {
        let snapshots: Fetched<S> = self.fetch_records(kind, symbol, params).await?;
        let as_of = Utc::now().date_naive();
        Ok(snapshots
            .truncate(1)
            .map(|snapshot| stamp(snapshot, as_of)))
    }

    /// Validate, issue one request and decode the elements.
    async fn fetch_records<T>(
        &self,
        kind: DataKind,
        symbol: &str,
        params: &FetchParams,
    ) -> Result<Fetched<T>, MarketDataError>
    where
        T: DeserializeOwned + RequiredFields,
    {
        let symbol = normalize_symbol(symbol)?;
        params.validate_for(kind)?;

        let endpoint = Self::endpoint(kind);
        let mut query = vec![(Self::symbol_param(kind), symbol)];
        query.extend(params.query_pairs(kind));

        let items = self.get(endpoint, &query).await?;
        let fetched = Fetched::decode(endpoint, items);
        debug!(
            "FMP {} returned {} records ({} rejected)",
            endpoint,
            fetched.records.len(),
            fetched.rejected.len()
        );
        Ok(fetched)
    }

    /// Make a GET request and return the response elements.
    async fn get(
        &self,
        endpoint: &str,
        query: &[(&'static str, String)],
    ) -> Result<Vec<Value>, MarketDataError> {
        let url = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint
        );

        debug!("FMP request: {} with {} params", endpoint, query.len());

        let response = self
            .client
            .get(&url)
            .query(query)
            .query(&[("apikey", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| request_error(endpoint, None, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| request_error(endpoint, Some(status.as_u16()), e))?;

        if !status.is_success() {
            let message = vendor_error_message(&body)
                .unwrap_or_else(|| format!("HTTP {}: {}", status, snippet(&body)));
            warn!("FMP {} failed with {}: {}", endpoint, status, message);
            return Err(MarketDataError::transport(
                endpoint,
                Some(status.as_u16()),
                message,
            ));
        }

        parse_body(endpoint, status.as_u16(), &body)
    }
}

#[async_trait]
impl FinancialDataProvider for FmpProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    /// Every arm goes through `fetch_records`, which validates the request.
    async fn fetch(
        &self,
        kind: DataKind,
        symbol: &str,
        params: &FetchParams,
    ) -> Result<VendorData, MarketDataError> {
        let data = match kind {
            DataKind::Profile => VendorData::Profile(self.profile(symbol, params).await?),
            DataKind::IncomeStatement => {
                VendorData::IncomeStatements(self.fetch_records(kind, symbol, params).await?)
            }
            DataKind::BalanceSheet => {
                VendorData::BalanceSheets(self.fetch_records(kind, symbol, params).await?)
            }
            DataKind::CashFlow => {
                VendorData::CashFlows(self.fetch_records(kind, symbol, params).await?)
            }
            DataKind::KeyMetrics => {
                VendorData::KeyMetrics(self.fetch_records(kind, symbol, params).await?)
            }
            DataKind::FinancialRatios => {
                VendorData::FinancialRatios(self.fetch_records(kind, symbol, params).await?)
            }
            DataKind::FinancialScores => VendorData::FinancialScores(
                self.fetch_snapshot(kind, symbol, params, ScoresSnapshot::into_scores)
                    .await?,
            ),
            DataKind::Rating => VendorData::Ratings(
                self.fetch_snapshot(kind, symbol, params, RatingSnapshot::into_rating)
                    .await?,
            ),
            DataKind::PriceTarget => VendorData::PriceTargets(
                self.fetch_snapshot(
                    kind,
                    symbol,
                    params,
                    PriceTargetConsensus::into_price_target,
                )
                .await?,
            ),
            DataKind::Gradings => {
                VendorData::Gradings(self.fetch_records(kind, symbol, params).await?)
            }
            DataKind::Dividends => {
                VendorData::Dividends(self.fetch_records(kind, symbol, params).await?)
            }
            DataKind::Splits => VendorData::Splits(self.fetch_records(kind, symbol, params).await?),
            DataKind::News => VendorData::News(self.fetch_records(kind, symbol, params).await?),
        };
        Ok(data)
    }
}

fn request_error(endpoint: &str, status: Option<u16>, error: reqwest::Error) -> MarketDataError {
    if error.is_timeout() {
        MarketDataError::Timeout {
            endpoint: endpoint.to_string(),
        }
    } else {
        // The URL carries the API key.
        let error = error.without_url();
        MarketDataError::transport(endpoint, status, format!("Request failed: {}", error))
    }
}

/// Split a successful body into elements. Empty bodies mean "no data".
fn parse_body(endpoint: &str, status: u16, body: &str) -> Result<Vec<Value>, MarketDataError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(trimmed).map_err(|e| {
        MarketDataError::transport(
            endpoint,
            Some(status),
            format!("Failed to parse response: {}", e),
        )
    })?;

    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => Ok(items),
        Value::Object(map) if map.is_empty() => Ok(Vec::new()),
        Value::Object(map) => {
            if let Some(message) = map.get(ERROR_MESSAGE_KEY) {
                let message = message
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| message.to_string());
                warn!("FMP {} returned an error payload: {}", endpoint, message);
                return Err(MarketDataError::transport(endpoint, Some(status), message));
            }
            Ok(vec![Value::Object(map)])
        }
        _ => Err(MarketDataError::transport(
            endpoint,
            Some(status),
            format!("Unexpected response: {}", snippet(trimmed)),
        )),
    }
}

fn vendor_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get(ERROR_MESSAGE_KEY)
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn snippet(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY).collect()
}
