/// Short commit hash stamped by `build.rs`, shown in the page footer.
pub fn git_commit_hash() -> &'static str {
    match option_env!("ACADEMY_WEB_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}
