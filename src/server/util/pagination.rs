use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

/// Highest page index a client may request.
pub const MAX_PAGE: u64 = 1_000_000;
/// Largest page size a client may request.
pub const MAX_ENTRIES: u64 = 100;

/// Query parameters shared by paginated list endpoints.
///
/// Both values are bounded so the row offset `page * entries` always fits.
#[derive(Debug, Clone, Deserialize, IntoParams, Validate)]
pub struct PaginationParams {
    /// Zero-indexed page number, at most 1000000
    #[serde(default)]
    #[validate(range(max = MAX_PAGE))]
    pub page: u64,
    /// Items per page, 1 to 100
    #[serde(default = "default_entries")]
    #[validate(range(min = 1, max = MAX_ENTRIES))]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

/// Number of pages needed to show `total` items at `per_page` items each.
pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page > 0 {
        total.div_ceil(per_page)
    } else {
        0
    }
}
