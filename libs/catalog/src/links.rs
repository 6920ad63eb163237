//! Deep-link helpers shared by notification payloads and web banners.

pub const APP_INSTALL_URL: &str = "https://example.com/install";
pub const APP_DEEP_LINK_PREFIX: &str = "myapp://";

/// Build an app deep link from a path. A leading slash is trimmed so both
/// "/store/42" and "store/42" produce "myapp://store/42".
pub fn build_deep_link(path: &str) -> String {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    format!("{APP_DEEP_LINK_PREFIX}{trimmed}")
}
