mod model;
mod repository;

pub use model::CompanyDB;
pub use repository::CompanyRepository;
