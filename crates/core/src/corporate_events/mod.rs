//! Corporate events module - dividends, stock splits and news.

mod corporate_events_service;
mod corporate_events_traits;

pub use corporate_events_service::CorporateEventsService;
pub use corporate_events_traits::CorporateEventsServiceTrait;
