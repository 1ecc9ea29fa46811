#![forbid(unsafe_code)]

//! Leaf previews for the built-in catalog.
//!
//! The navigation core never looks inside a [`Preview`]; it only stores the
//! factory on each registry entry and hands it to whoever renders the active
//! component.

/// Displayable summary produced by a component's render factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preview {
    pub title: &'static str,
    pub summary: &'static str,
}

/// Factory stored on a registry entry.
pub type RenderFn = fn() -> Preview;

pub(crate) fn aurora() -> Preview {
    Preview {
        title: "Aurora Background",
        summary: "Slow drifting gradient blobs behind the page content.",
    }
}

pub(crate) fn decrypt() -> Preview {
    Preview {
        title: "Decrypt",
        summary: "Text scrambles through random glyphs before settling on its final value.",
    }
}

pub(crate) fn button_3d() -> Preview {
    Preview {
        title: "Button 3D",
        summary: "A raised button that sinks into its base when pressed.",
    }
}

pub(crate) fn wave_button() -> Preview {
    Preview {
        title: "Wave Button",
        summary: "Label characters rise one after another on hover.",
    }
}

pub(crate) fn pulse_button() -> Preview {
    Preview {
        title: "Pulse Button",
        summary: "A halo ring expands and fades around the button.",
    }
}

pub(crate) fn parallax_gallery() -> Preview {
    Preview {
        title: "Parallax Gallery",
        summary: "Image columns scroll at different speeds.",
    }
}

pub(crate) fn parallax_card() -> Preview {
    Preview {
        title: "Parallax Card",
        summary: "A card that tilts toward the pointer with layered depth.",
    }
}

pub(crate) fn avatar() -> Preview {
    Preview {
        title: "Avatar",
        summary: "User image with initials fallback and status dot.",
    }
}

pub(crate) fn card() -> Preview {
    Preview {
        title: "Card",
        summary: "Bordered content container with header, body, and footer slots.",
    }
}

pub(crate) fn input() -> Preview {
    Preview {
        title: "Input",
        summary: "Text field with label, hint, and error states.",
    }
}

pub(crate) fn alert() -> Preview {
    Preview {
        title: "Alert",
        summary: "Inline callout for info, success, warning, and error messages.",
    }
}

pub(crate) fn badge() -> Preview {
    Preview {
        title: "Badge",
        summary: "Small pill label for counts and statuses.",
    }
}
