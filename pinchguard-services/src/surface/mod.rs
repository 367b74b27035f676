// SPDX-License-Identifier: LGPL-3.0-only

//! Rendering surface configuration.
//!
//! Switches off the surface's own zoom affordances once at startup, so the
//! gesture dispatcher only has to defend against touch input.

mod error;
mod settings;

pub use error::SurfaceError;
pub use settings::{LayoutAlgorithm, SurfaceSettings, WebSettings, ZoomAffordances};

/// Text scaling applied to the surface, in percent.
pub const TEXT_ZOOM_PERCENT: u32 = 100;

/// Something that may own a rendering surface.
pub trait SurfaceHost {
    /// The surface settings, or [None] while no surface is attached.
    fn web_settings(&mut self) -> Option<&mut dyn WebSettings>;
}

impl<S: WebSettings> SurfaceHost for Option<S> {
    fn web_settings(&mut self) -> Option<&mut dyn WebSettings> {
        self.as_mut().map(|settings| settings as &mut dyn WebSettings)
    }
}

/// The layout part of the surface configuration that can be tuned in settings.
///
/// Zoom is always disabled and is not part of the profile.
/// Built from the `[surface]` section by
/// [SettingsRegistry::surface_profile](crate::settings::SettingsRegistry::surface_profile).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceProfile {
    /// Layout strategy written to the surface.
    pub layout_algorithm: LayoutAlgorithm,
    /// Whether pages load zoomed out to fit the screen width.
    pub load_with_overview_mode: bool,
}

impl Default for SurfaceProfile {
    fn default() -> Self {
        Self {
            layout_algorithm: LayoutAlgorithm::TextAutosizing,
            load_with_overview_mode: true,
        }
    }
}

/// Applies the zoom-disabling configuration to a rendering surface.
#[derive(Debug, Clone, Default)]
pub struct SurfaceConfigurator {
    profile: SurfaceProfile,
    applied: bool,
}

impl SurfaceConfigurator {
    /// Create a configurator for the given profile.
    pub fn new(profile: SurfaceProfile) -> Self {
        Self {
            profile,
            applied: false,
        }
    }

    /// The profile this configurator writes.
    pub fn profile(&self) -> &SurfaceProfile {
        &self.profile
    }

    /// Returns true until a configuration attempt succeeded.
    pub fn is_pending(&self) -> bool {
        !self.applied
    }

    /// Write the configuration to the host's surface.
    ///
    /// Writes absolute values, so repeated calls leave the surface unchanged.
    /// Fails with [SurfaceError::NotAttached] when the host has no surface
    /// yet; the configurator then stays pending and the call can be retried.
    pub fn apply(&mut self, host: &mut dyn SurfaceHost) -> Result<(), SurfaceError> {
        let Some(settings) = host.web_settings() else {
            log::warn!("Rendering surface not attached, zoom controls stay untouched for now");
            return Err(SurfaceError::NotAttached);
        };

        settings.set_support_zoom(false);
        settings.set_built_in_zoom_controls(false);
        settings.set_display_zoom_controls(false);
        settings.set_text_zoom(TEXT_ZOOM_PERCENT);
        settings.set_use_wide_view_port(true);
        settings.set_load_with_overview_mode(self.profile.load_with_overview_mode);
        settings.set_layout_algorithm(self.profile.layout_algorithm);

        if !self.applied {
            log::debug!("Surface zoom disabled ({:?})", self.profile.layout_algorithm);
        }
        self.applied = true;
        Ok(())
    }

    /// Apply only if no earlier attempt succeeded.
    ///
    /// Returns whether the surface is configured after the call.
    pub fn apply_if_pending(&mut self, host: &mut dyn SurfaceHost) -> bool {
        if self.applied {
            return true;
        }
        self.apply(host).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_disables_all_zoom_affordances() {
        let mut host = Some(SurfaceSettings::default());
        assert!(!host.as_ref().unwrap().zoom_affordances().is_empty());

        let mut configurator = SurfaceConfigurator::default();
        configurator.apply(&mut host).unwrap();

        let settings = host.unwrap();
        assert_eq!(settings.zoom_affordances(), ZoomAffordances::empty());
        assert_eq!(settings.text_zoom, TEXT_ZOOM_PERCENT);
        assert!(settings.use_wide_view_port);
        assert!(settings.load_with_overview_mode);
        assert_eq!(settings.layout_algorithm, LayoutAlgorithm::TextAutosizing);
    }

    #[test]
    fn test_missing_surface_stays_pending() {
        let mut host: Option<SurfaceSettings> = None;
        let mut configurator = SurfaceConfigurator::default();

        assert!(matches!(configurator.apply(&mut host), Err(SurfaceError::NotAttached)));
        assert!(configurator.is_pending());
        assert!(!configurator.apply_if_pending(&mut host));
    }

    #[test]
    fn test_profile_controls_layout() {
        let mut host = Some(SurfaceSettings::default());
        let mut configurator = SurfaceConfigurator::new(SurfaceProfile {
            layout_algorithm: LayoutAlgorithm::Normal,
            load_with_overview_mode: false,
        });
        configurator.apply(&mut host).unwrap();

        let settings = host.unwrap();
        assert_eq!(settings.layout_algorithm, LayoutAlgorithm::Normal);
        assert!(!settings.load_with_overview_mode);
        assert!(!settings.support_zoom);
    }
}
