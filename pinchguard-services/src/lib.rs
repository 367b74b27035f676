// SPDX-License-Identifier: LGPL-3.0-only
pub mod permission;
pub mod settings;
pub mod surface;

// Re-export commonly used types
pub use permission::{Permission, PermissionBackend, PermissionError, PermissionService, PermissionStatus};
pub use settings::SettingsRegistry;
pub use surface::{
    LayoutAlgorithm, SurfaceConfigurator, SurfaceError, SurfaceHost, SurfaceProfile, SurfaceSettings, WebSettings,
    ZoomAffordances,
};

#[cfg(test)]
mod tests {
    const HEADER: &str = "// SPDX-License-Identifier: LGPL-3.0-only";

    #[test]
    fn test_source_headers_match_crate_license() {
        assert_eq!(env!("CARGO_PKG_LICENSE"), "LGPL-3.0-only");

        let sources = [
            ("lib.rs", include_str!("lib.rs")),
            ("permission.rs", include_str!("permission.rs")),
            ("settings.rs", include_str!("settings.rs")),
            ("surface/mod.rs", include_str!("surface/mod.rs")),
            ("surface/error.rs", include_str!("surface/error.rs")),
            ("surface/settings.rs", include_str!("surface/settings.rs")),
        ];
        for (name, source) in sources {
            assert!(source.starts_with(HEADER), "{} has the wrong license header", name);
        }
    }
}
