//! Build metadata for nutrisheet
//!
//! `build.rs` bumps `build_number.txt` and exports the number and a UTC
//! timestamp as `NUTRISHEET_BUILD_*` variables. Both binaries show them: the
//! sheet generator in its stderr banner, `nutrition_targets` in its JSON.

use serde::Serialize;

/// Sequential build number; 0 when built without `build.rs` output
pub const BUILD_NUMBER: u64 = match option_env!("NUTRISHEET_BUILD_NUMBER") {
    Some(s) => match parse_build_number(s) {
        Some(n) => n,
        None => 0,
    },
    None => 0,
};

/// UTC build time, `%Y-%m-%dT%H:%M:%SZ`
pub const BUILD_TIMESTAMP: &str = match option_env!("NUTRISHEET_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

const fn parse_build_number(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    let mut result: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if !b.is_ascii_digit() {
            return None;
        }
        result = result * 10 + (b - b'0') as u64;
        i += 1;
    }
    Some(result)
}

/// Which build produced a sheet or a targets report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
        }
    }

    /// `nutrisheet 1.0.0 (build 12, 2025-03-01T09:30:00Z)`
    pub fn version_line(&self) -> String {
        format!(
            "{} {} (build {}, {})",
            self.name, self.version, self.build_number, self.build_timestamp
        )
    }
}

/// Startup banner on stderr, keeping stdout free for JSON
pub fn print_startup_banner() {
    let info = BuildInfo::current();
    eprintln!("-----------------------------------------------");
    eprintln!("  {}", info.version_line());
    eprintln!("  Nutrition sheet generator");
    eprintln!("-----------------------------------------------");
}
