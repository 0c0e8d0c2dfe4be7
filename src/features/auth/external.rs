use crate::app_lib::AppError;
use crate::routes::paths;
use url::Url;

/// Builds the identity provider URL. The provider sends the browser back to
/// `{origin}/dashboard` with the login token in the fragment.
///
/// # Errors
///
/// Returns a config error when the provider URL or origin is not a valid URL.
pub fn external_login_url(auth_url: &str, origin: &str) -> Result<String, AppError> {
    let origin = Url::parse(origin.trim())
        .map_err(|err| AppError::Config(format!("Invalid page origin: {err}")))?;
    let return_to = origin
        .join(paths::DASHBOARD)
        .map_err(|err| AppError::Config(format!("Invalid return URL: {err}")))?;

    let mut url = Url::parse(auth_url.trim())
        .map_err(|err| AppError::Config(format!("Invalid login provider URL: {err}")))?;
    url.query_pairs_mut()
        .append_pair("redirect", return_to.as_str());
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::external_login_url;
    use crate::app_lib::AppError;

    #[test]
    fn redirect_points_back_at_the_dashboard() {
        let url = external_login_url("https://auth.emergentagent.com/", "https://academy.dev")
            .expect("url");
        assert_eq!(
            url,
            "https://auth.emergentagent.com/?redirect=https%3A%2F%2Facademy.dev%2Fdashboard"
        );
    }

    #[test]
    fn origin_path_is_replaced() {
        let url = external_login_url("https://login.example/start", "http://localhost:8080/blog")
            .expect("url");
        assert!(url.ends_with("redirect=http%3A%2F%2Flocalhost%3A8080%2Fdashboard"));
    }

    #[test]
    fn invalid_provider_url_is_a_config_error() {
        assert!(matches!(
            external_login_url("not a url", "https://academy.dev"),
            Err(AppError::Config(_))
        ));
    }
}
