#![forbid(unsafe_code)]

//! Identifiers for catalog categories and components.

use std::fmt;

/// Top-level grouping shown in the left sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Buttons,
    Cards,
    Background,
    DataDisplay,
    Forms,
    Feedback,
}

impl Category {
    /// All categories in navigation order.
    pub const ALL: &'static [Category] = &[
        Category::Buttons,
        Category::Cards,
        Category::Background,
        Category::DataDisplay,
        Category::Forms,
        Category::Feedback,
    ];

    /// Stable identifier, independent of the display label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Buttons => "Buttons",
            Category::Cards => "Cards",
            Category::Background => "Background",
            Category::DataDisplay => "DataDisplay",
            Category::Forms => "Forms",
            Category::Feedback => "Feedback",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of one visual component in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentId {
    /// Animated gradient backdrop.
    Aurora,
    /// Scrambled text that resolves into its final string.
    Decrypt,
    /// Button with a pressed-depth effect.
    Button3d,
    /// Button whose label ripples on hover.
    WaveButton,
    /// Button with a repeating halo.
    PulseButton,
    /// Scroll-linked image gallery.
    ParallaxGallery,
    /// Card that tilts toward the pointer.
    ParallaxCard,
    Avatar,
    Card,
    Input,
    Alert,
    Badge,
}

impl ComponentId {
    /// Every component id, in declaration order.
    pub const ALL: &'static [ComponentId] = &[
        ComponentId::Aurora,
        ComponentId::Decrypt,
        ComponentId::Button3d,
        ComponentId::WaveButton,
        ComponentId::PulseButton,
        ComponentId::ParallaxGallery,
        ComponentId::ParallaxCard,
        ComponentId::Avatar,
        ComponentId::Card,
        ComponentId::Input,
        ComponentId::Alert,
        ComponentId::Badge,
    ];

    /// Raw identifier string; component slugs are derived from this.
    pub const fn as_str(self) -> &'static str {
        match self {
            ComponentId::Aurora => "AURORA",
            ComponentId::Decrypt => "DECRYPT",
            ComponentId::Button3d => "BUTTON_3D",
            ComponentId::WaveButton => "WAVE_BUTTON",
            ComponentId::PulseButton => "PULSE_BUTTON",
            ComponentId::ParallaxGallery => "PARALLAX_GALLERY",
            ComponentId::ParallaxCard => "PARALLAX_CARD",
            ComponentId::Avatar => "AVATAR",
            ComponentId::Card => "CARD",
            ComponentId::Input => "INPUT",
            ComponentId::Alert => "ALERT",
            ComponentId::Badge => "BADGE",
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
