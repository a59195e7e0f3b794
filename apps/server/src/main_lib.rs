use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use stockmate_core::{
    analyst::{AnalystService, AnalystServiceTrait},
    companies::{CompanyService, CompanyServiceTrait},
    corporate_events::{CorporateEventsService, CorporateEventsServiceTrait},
    financials::{FinancialsService, FinancialsServiceTrait},
    sync::{SyncService, SyncServiceTrait},
};
use stockmate_market_data::FmpProvider;
use stockmate_storage_sqlite::{db, Repositories};

pub struct AppState {
    pub company_service: Arc<dyn CompanyServiceTrait>,
    pub financials_service: Arc<dyn FinancialsServiceTrait>,
    pub corporate_events_service: Arc<dyn CorporateEventsServiceTrait>,
    pub analyst_service: Arc<dyn AnalystServiceTrait>,
    pub sync_service: Arc<dyn SyncServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("SM_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    let registry = tracing_subscriber::registry().with(filter);

    // try_init: tests may build several apps in one process.
    let _ = if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .try_init()
    };
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer(&pool)?;
    let repos = Repositories::new(pool, writer);

    let provider = Arc::new(FmpProvider::new(config.provider_config())?);
    tracing::info!("Vendor base URL: {}", config.fmp_base_url);

    let company_service = Arc::new(CompanyService::new(repos.companies.clone()));
    let financials_service = Arc::new(FinancialsService::new(
        repos.companies.clone(),
        repos.records.clone(),
    ));
    let corporate_events_service = Arc::new(CorporateEventsService::new(
        repos.companies.clone(),
        repos.records.clone(),
    ));
    let analyst_service = Arc::new(AnalystService::new(
        repos.companies.clone(),
        repos.records.clone(),
    ));
    let sync_service = Arc::new(SyncService::new(
        provider,
        repos.companies.clone(),
        repos.records,
    ));

    Ok(Arc::new(AppState {
        company_service,
        financials_service,
        corporate_events_service,
        analyst_service,
        sync_service,
    }))
}
