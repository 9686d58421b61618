//! Banner display formatting

use crate::banner::Banner;

/// Render a banner as a single prefixed line
pub fn format_banner(banner: &Banner) -> String {
    format!("[{}] {}", banner.kind.title(), banner.message)
}
