// SPDX-License-Identifier: LGPL-3.0-only
use bitflags::bitflags;
use serde::Deserialize;

bitflags! {
    /// Zoom affordances a rendering surface can offer on its own.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ZoomAffordances: u8 {
        /// Native pinch-to-zoom.
        const PINCH_ZOOM = 0b001;
        /// Built-in zoom control handling.
        const BUILT_IN_CONTROLS = 0b010;
        /// On-screen zoom buttons overlay.
        const DISPLAY_CONTROLS = 0b100;
    }
}

/// Layout strategy of the rendering surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutAlgorithm {
    /// Lay pages out as authored.
    Normal,
    /// Force everything into one column as wide as the view.
    SingleColumn,
    /// Narrow columns to the view width where possible.
    NarrowColumns,
    /// Boost font sizes of wide text blocks for readability.
    #[default]
    TextAutosizing,
}

/// The display settings of an embedded web surface.
///
/// Mirrors the setters platforms expose on their web view settings object.
pub trait WebSettings {
    /// Whether the surface supports zooming at all.
    fn set_support_zoom(&mut self, enabled: bool);
    /// Whether the surface handles zoom gestures and controls itself.
    fn set_built_in_zoom_controls(&mut self, enabled: bool);
    /// Whether on-screen zoom buttons are shown.
    fn set_display_zoom_controls(&mut self, enabled: bool);
    /// Text scaling in percent.
    fn set_text_zoom(&mut self, percent: u32);
    /// Whether page-declared viewport metadata is honored.
    fn set_use_wide_view_port(&mut self, enabled: bool);
    /// Whether pages load zoomed out to fit the screen width.
    fn set_load_with_overview_mode(&mut self, enabled: bool);
    /// Layout strategy.
    fn set_layout_algorithm(&mut self, algorithm: LayoutAlgorithm);
}

/// In-memory [WebSettings] with the usual web view defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceSettings {
    /// See [WebSettings::set_support_zoom].
    pub support_zoom: bool,
    /// See [WebSettings::set_built_in_zoom_controls].
    pub built_in_zoom_controls: bool,
    /// See [WebSettings::set_display_zoom_controls].
    pub display_zoom_controls: bool,
    /// Text scaling in percent.
    pub text_zoom: u32,
    /// See [WebSettings::set_use_wide_view_port].
    pub use_wide_view_port: bool,
    /// See [WebSettings::set_load_with_overview_mode].
    pub load_with_overview_mode: bool,
    /// Layout strategy.
    pub layout_algorithm: LayoutAlgorithm,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            support_zoom: true,
            built_in_zoom_controls: false,
            display_zoom_controls: true,
            text_zoom: 100,
            use_wide_view_port: false,
            load_with_overview_mode: false,
            layout_algorithm: LayoutAlgorithm::Normal,
        }
    }
}

impl SurfaceSettings {
    /// The zoom affordances currently switched on.
    pub fn zoom_affordances(&self) -> ZoomAffordances {
        let mut affordances = ZoomAffordances::empty();
        affordances.set(ZoomAffordances::PINCH_ZOOM, self.support_zoom);
        affordances.set(ZoomAffordances::BUILT_IN_CONTROLS, self.built_in_zoom_controls);
        affordances.set(ZoomAffordances::DISPLAY_CONTROLS, self.display_zoom_controls);
        affordances
    }
}

impl WebSettings for SurfaceSettings {
    fn set_support_zoom(&mut self, enabled: bool) {
        self.support_zoom = enabled;
    }

    fn set_built_in_zoom_controls(&mut self, enabled: bool) {
        self.built_in_zoom_controls = enabled;
    }

    fn set_display_zoom_controls(&mut self, enabled: bool) {
        self.display_zoom_controls = enabled;
    }

    fn set_text_zoom(&mut self, percent: u32) {
        self.text_zoom = percent;
    }

    fn set_use_wide_view_port(&mut self, enabled: bool) {
        self.use_wide_view_port = enabled;
    }

    fn set_load_with_overview_mode(&mut self, enabled: bool) {
        self.load_with_overview_mode = enabled;
    }

    fn set_layout_algorithm(&mut self, algorithm: LayoutAlgorithm) {
        self.layout_algorithm = algorithm;
    }
}
