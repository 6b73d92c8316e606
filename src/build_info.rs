//! Build metadata embedded by `build.rs`.

#[derive(Debug, Clone, Copy)]
pub struct BuildInfo {
    pub version: &'static str,
    pub hash: &'static str,
    pub status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc: &'static str,
}

pub const BUILD: BuildInfo = BuildInfo {
    version: env!("CARGO_PKG_VERSION"),
    hash: env!("UPKEEP_BUILD_HASH"),
    status: env!("UPKEEP_BUILD_STATUS"),
    timestamp: env!("UPKEEP_BUILD_TIMESTAMP"),
    target: env!("UPKEEP_BUILD_TARGET"),
    profile: env!("UPKEEP_BUILD_PROFILE"),
    rustc: env!("UPKEEP_BUILD_RUSTC"),
};

impl BuildInfo {
    /// One-line description such as `0.0.1 (abc1234, clean, debug)`.
    pub fn summary(&self) -> String {
        format!(
            "{} ({}, {}, {})",
            self.version, self.hash, self.status, self.profile
        )
    }
}

pub fn build_info() -> BuildInfo {
    BUILD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_starts_with_package_version() {
        let info = build_info();
        assert!(info.summary().starts_with(env!("CARGO_PKG_VERSION")));
        assert!(!info.timestamp.is_empty());
    }
}
