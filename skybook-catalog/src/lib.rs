pub mod filter;
pub mod search;
pub mod pricing;
pub mod featured;
pub mod deals;
pub mod support;

pub use filter::{any_of, FilterChain};
pub use search::{build_filters, search, sort_flights};
pub use pricing::{FareBreakdown, FareCalculator, FareLine, PricingConfig};
pub use featured::{cheapest_per_route, featured_flights, CatalogStats, QuickFilter};
pub use deals::{deal_counts, filter_deals, Deal, DealError, DealType, DealTypeCount};
pub use support::{search_faqs, ContactChannel, FaqCategory, FaqEntry};
