//! Client helpers for blog endpoints.

use crate::app_lib::AppError;
#[cfg(target_arch = "wasm32")]
use crate::{app_lib::get_json, features::blog::types::BlogPost};
use url::Url;

const POSTS_PATH: &str = "/api/blog/posts";

/// List published posts, newest first as ordered by the backend.
#[cfg(target_arch = "wasm32")]
pub async fn list_posts() -> Result<Vec<BlogPost>, AppError> {
    get_json(POSTS_PATH).await
}

/// Fetch a single post by slug.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_post(slug: &str) -> Result<BlogPost, AppError> {
    get_json(&post_path(slug)?).await
}

/// Path of a single post with the slug percent-encoded as one path segment.
pub(crate) fn post_path(slug: &str) -> Result<String, AppError> {
    let mut url = Url::parse("http://localhost")
        .and_then(|base| base.join(POSTS_PATH))
        .map_err(|err| AppError::Config(format!("Invalid blog path: {err}")))?;
    url.path_segments_mut()
        .map_err(|()| AppError::Config("Blog path cannot take segments.".to_string()))?
        .push(slug);
    Ok(url.path().to_string())
}
