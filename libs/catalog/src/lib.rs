//! Static marketplace taxonomy: categories, status enums with localized
//! labels, and deep-link helpers. Pure data, no I/O.

pub mod categories;
pub mod links;
pub mod status;

pub use categories::{SortOption, PRODUCT_CATEGORIES, RATING_OPTIONS, STORE_CATEGORIES};
pub use links::{build_deep_link, APP_DEEP_LINK_PREFIX, APP_INSTALL_URL};
pub use status::{CashTransactionType, ReservationStatus, StoreApprovalStatus};
