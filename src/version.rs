// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the vision label node

/// Semantic version number
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "upload-labeling",
    "url-labeling",
    "label-memoization",
    "service-account-auth",
    "api-key-auth",
];

/// Get version information as a formatted string
pub fn get_version_info() -> String {
    format!("vision-label-node v{} [{}]", VERSION, FEATURES.join(", "))
}
