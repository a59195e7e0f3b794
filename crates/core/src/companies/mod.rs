//! Companies module - the master record, its repository seam and read service.

mod companies_model;
mod companies_service;
mod companies_traits;

pub use companies_model::Company;
pub use companies_service::CompanyService;
pub use companies_traits::{CompanyRepositoryTrait, CompanyServiceTrait};

pub(crate) use companies_service::require_company;
