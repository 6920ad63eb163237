//! Store and product category constants.

use serde::{Deserialize, Serialize};

/// Store categories shown in the store list filter. The first entry is the
/// catch-all.
pub const STORE_CATEGORIES: [&str; 5] = ["전체", "반찬", "제과", "식자재", "밀키트"];

/// Product categories.
pub const PRODUCT_CATEGORIES: [&str; 6] =
    ["빵류", "도시락/반찬", "음료", "과일/채소", "유제품", "기타"];

/// Minimum-rating filter options.
pub const RATING_OPTIONS: [f32; 4] = [4.5, 4.0, 3.5, 3.0];

/// Store list sort options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    Recommended,
    Distance,
    Rating,
    Discount,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::Recommended,
        SortOption::Distance,
        SortOption::Rating,
        SortOption::Discount,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOption::Recommended => "recommended",
            SortOption::Distance => "distance",
            SortOption::Rating => "rating",
            SortOption::Discount => "discount",
        }
    }

    /// User-facing label (Korean).
    pub fn label(self) -> &'static str {
        match self {
            SortOption::Recommended => "추천순",
            SortOption::Distance => "거리순",
            SortOption::Rating => "평점순",
            SortOption::Discount => "할인율순",
        }
    }
}

impl Default for SortOption {
    fn default() -> Self {
        SortOption::Recommended
    }
}
