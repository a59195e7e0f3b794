//! Database model for the company master table.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use stockmate_core::Result;
use stockmate_market_data::CompanyProfile;

use crate::records::RowMeta;

#[derive(Queryable, Selectable, Identifiable, Insertable, AsChangeset, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::companies)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct CompanyDB {
    pub id: String,
    pub symbol: String,
    pub company_name: String,
    pub price: Option<f64>,
    pub market_cap: Option<f64>,
    pub currency: Option<String>,
    pub exchange: Option<String>,
    pub exchange_full_name: Option<String>,
    pub industry: Option<String>,
    pub sector: Option<String>,
    pub country: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub ceo: Option<String>,
    pub image: Option<String>,
    pub ipo_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl CompanyDB {
    pub fn new(profile: &CompanyProfile, meta: RowMeta) -> Self {
        Self {
            id: meta.id,
            symbol: profile.symbol.clone(),
            company_name: profile.company_name.clone(),
            price: profile.price,
            market_cap: profile.market_cap,
            currency: profile.currency.clone(),
            exchange: profile.exchange.clone(),
            exchange_full_name: profile.exchange_full_name.clone(),
            industry: profile.industry.clone(),
            sector: profile.sector.clone(),
            country: profile.country.clone(),
            website: profile.website.clone(),
            description: profile.description.clone(),
            ceo: profile.ceo.clone(),
            image: profile.image.clone(),
            ipo_date: profile.ipo_date,
            created_at: meta.created_at,
            updated_at: meta.updated_at,
        }
    }

    pub fn record(&self) -> Result<CompanyProfile> {
        Ok(CompanyProfile {
            symbol: self.symbol.clone(),
            company_name: self.company_name.clone(),
            price: self.price,
            market_cap: self.market_cap,
            currency: self.currency.clone(),
            exchange: self.exchange.clone(),
            exchange_full_name: self.exchange_full_name.clone(),
            industry: self.industry.clone(),
            sector: self.sector.clone(),
            country: self.country.clone(),
            website: self.website.clone(),
            description: self.description.clone(),
            ceo: self.ceo.clone(),
            image: self.image.clone(),
            ipo_date: self.ipo_date,
        })
    }
}
