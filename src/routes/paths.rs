//! Client-side route paths shared by views, guards and auth flows.

pub const HOME: &str = "/";
pub const BLOG: &str = "/blog";
pub const FREE_COURSE: &str = "/free-course";
pub const DASHBOARD: &str = "/dashboard";
/// In-page anchor of the pricing section on the landing page.
pub const PRICING_ANCHOR: &str = "/#pricing";

pub fn blog_post(slug: &str) -> String {
    format!("{BLOG}/{}", slug.trim_matches('/'))
}
