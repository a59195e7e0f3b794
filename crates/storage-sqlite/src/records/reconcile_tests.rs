use chrono::Utc;
use diesel::sqlite::SqliteConnection;
use stockmate_core::companies::CompanyRepositoryTrait;
use stockmate_core::records::{ListFilter, RecordStore, UpsertOutcome};
use stockmate_market_data::Period;

use super::{apply, try_insert, Attempt};
use crate::financials::IncomeStatementDB;
use crate::testing::{income_statement, test_db};

#[tokio::test]
async fn test_identical_candidate_is_unchanged() {
    let db = test_db();
    db.repos.companies.ensure_exists("AAPL").await.unwrap();
    let store = &db.repos.records.income_statements;
    let candidate = income_statement("2024-09-28", Period::Fy, 391.0e9);

    let first = store.reconcile(candidate.clone()).await.unwrap();
    let second = store.reconcile(candidate).await.unwrap();

    assert_eq!(first.outcome, UpsertOutcome::Inserted);
    assert_eq!(second.outcome, UpsertOutcome::Unchanged);
    assert_eq!(first.entity, second.entity);
    assert_eq!(
        store.list_by_symbol("AAPL", &ListFilter::default()).unwrap().len(),
        1
    );
}

#[tokio::test]
async fn test_changed_candidate_overwrites_every_field() {
    let db = test_db();
    db.repos.companies.ensure_exists("AAPL").await.unwrap();
    let store = &db.repos.records.income_statements;

    let original = store
        .reconcile(income_statement("2024-09-28", Period::Fy, 391.0e9))
        .await
        .unwrap();

    let mut restated = income_statement("2024-09-28", Period::Fy, 391.5e9);
    restated.net_income = None;
    let updated = store.reconcile(restated).await.unwrap();

    assert_eq!(updated.outcome, UpsertOutcome::Updated);
    assert_eq!(updated.entity.id, original.entity.id);
    assert_eq!(updated.entity.created_at, original.entity.created_at);
    assert!(updated.entity.updated_at >= original.entity.updated_at);

    let rows = store.list_by_symbol("AAPL", &ListFilter::default()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].record.revenue, Some(391.5e9));
    assert_eq!(rows[0].record.net_income, None);
}

#[tokio::test]
async fn test_insert_conflict_becomes_update() {
    let db = test_db();
    db.repos.companies.ensure_exists("AAPL").await.unwrap();
    let store = db.repos.records.income_statements.clone();
    store
        .reconcile(income_statement("2024-09-28", Period::Fy, 391.0e9))
        .await
        .unwrap();

    // A writer whose lookup missed the row that is now there.
    let stale = income_statement("2024-09-28", Period::Fy, 392.0e9);
    let (conflicted, reconciled) = db
        .writer
        .exec(move |conn: &mut SqliteConnection| {
            let now = Utc::now().naive_utc();
            let attempt = try_insert::<IncomeStatementDB>(conn, &stale, now)?;
            let conflicted = matches!(attempt, Attempt::Conflict);
            Ok((conflicted, apply::<IncomeStatementDB>(conn, attempt, stale, now)?))
        })
        .await
        .unwrap();

    assert!(conflicted);
    assert_eq!(reconciled.outcome, UpsertOutcome::Updated);
    let rows = store.list_by_symbol("AAPL", &ListFilter::default()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].record.revenue, Some(392.0e9));
}

#[tokio::test]
async fn test_concurrent_reconciles_leave_one_row() {
    let db = test_db();
    db.repos.companies.ensure_exists("AAPL").await.unwrap();
    let store = db.repos.records.income_statements.clone();
    let candidate = income_statement("2024-09-28", Period::Fy, 391.0e9);

    let (a, b) = tokio::join!(
        store.reconcile(candidate.clone()),
        store.reconcile(candidate.clone())
    );

    let mut outcomes = vec![a.unwrap().outcome, b.unwrap().outcome];
    outcomes.sort_by_key(|o| format!("{:?}", o));
    assert_eq!(outcomes, vec![UpsertOutcome::Inserted, UpsertOutcome::Unchanged]);
    assert_eq!(
        store.list_by_symbol("AAPL", &ListFilter::default()).unwrap().len(),
        1
    );
}

#[tokio::test]
async fn test_child_row_requires_company() {
    let db = test_db();

    let err = db
        .repos
        .records
        .income_statements
        .reconcile(income_statement("2024-09-28", Period::Fy, 391.0e9))
        .await
        .unwrap_err();

    assert!(err.to_string().to_lowercase().contains("foreign key"));
}

#[tokio::test]
async fn test_list_orders_newest_first_and_filters_period() {
    let db = test_db();
    db.repos.companies.ensure_exists("AAPL").await.unwrap();
    let store = &db.repos.records.income_statements;
    for candidate in [
        income_statement("2023-09-30", Period::Fy, 383.3e9),
        income_statement("2024-12-28", Period::Q1, 124.3e9),
        income_statement("2024-09-28", Period::Fy, 391.0e9),
    ] {
        store.reconcile(candidate).await.unwrap();
    }

    let all = store.list_by_symbol("AAPL", &ListFilter::default()).unwrap();
    let dates: Vec<String> = all.iter().map(|r| r.record.date.to_string()).collect();
    assert_eq!(dates, vec!["2024-12-28", "2024-09-28", "2023-09-30"]);

    let annual = store
        .list_by_symbol("AAPL", &ListFilter::period(Some(Period::Annual)))
        .unwrap();
    assert_eq!(annual.len(), 2);
    assert!(annual.iter().all(|r| r.record.period == Period::Fy));

    let quarterly = store
        .list_by_symbol("AAPL", &ListFilter::period(Some(Period::Quarter)))
        .unwrap();
    assert_eq!(quarterly.len(), 1);

    assert!(store
        .list_by_symbol("MSFT", &ListFilter::default())
        .unwrap()
        .is_empty());
}
