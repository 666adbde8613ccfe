pub const APP_NAME: &str = "Break-Even Lab";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Human-readable version for the footer: the git tag when the build had
/// one, otherwise the crate version.
pub fn version_label() -> String {
    match GIT_TAG {
        Some(tag) => tag.to_string(),
        None => format!("v{APP_VERSION}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_always_has_something_to_show() {
        let label = version_label();
        assert!(!label.is_empty());
        assert!(label.contains(APP_VERSION) || GIT_TAG.is_some());
    }
}
