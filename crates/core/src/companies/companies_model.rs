use stockmate_market_data::CompanyProfile;

use crate::records::Stored;

/// The symbol-keyed master record.
pub type Company = Stored<CompanyProfile>;
