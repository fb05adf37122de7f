pub const APP_NAME: &str = "UPDC Calculator";
pub const APP_TAGLINE: &str =
    "Uniform Predicted Development Cost for Raw Land & Residential Construction";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Release tag when built from a tagged checkout, otherwise the crate version.
pub fn version_label() -> String {
    label_for(GIT_TAG, APP_VERSION)
}

fn label_for(tag: Option<&str>, crate_version: &str) -> String {
    match tag.map(str::trim).filter(|tag| !tag.is_empty()) {
        Some(tag) => tag.to_string(),
        None => format!("v{crate_version}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_git_tag() {
        assert_eq!(label_for(Some("v1.2.0"), "1.0.0"), "v1.2.0");
    }

    #[test]
    fn falls_back_to_crate_version() {
        assert_eq!(label_for(None, "1.0.0"), "v1.0.0");
        assert_eq!(label_for(Some("  "), "1.0.0"), "v1.0.0");
    }
}
