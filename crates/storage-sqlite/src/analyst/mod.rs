mod model;
mod repository;

pub use model::{GradingDB, PriceTargetDB};
pub use repository::{GradingRepository, PriceTargetRepository};
