pub struct OverlayInfo {
    /// Element id of the panel backdrop.
    pub id: &'static str,
    /// Element id of the panel's close button.
    pub close_button: &'static str,
    /// Heading shown on the native fallback panel.
    pub title: &'static str,
    /// Whether the panel is showing when the page first loads.
    pub initially_visible: bool,
}

pub const INTRO_OVERLAY: &str = "intro-overlay";

/// Intro button that dismisses the intro panel once loading has finished.
pub const ENTER_BUTTON: &str = "enter-portfolio";

/// Label the enter button shows once it becomes usable.
pub const ENTER_BUTTON_READY_LABEL: &str = "Enter Portfolio";

/// Class the enter button carries while the model is loading.
pub const ENTER_BUTTON_LOADING_CLASS: &str = "loading";

pub const OVERLAY_MAP: &[OverlayInfo] = &[
    OverlayInfo {
        id: INTRO_OVERLAY,
        close_button: "close-intro",
        title: "Welcome",
        initially_visible: true,
    },
    OverlayInfo {
        id: "resume-overlay",
        close_button: "close-resume",
        title: "Resume",
        initially_visible: false,
    },
    OverlayInfo {
        id: "projects-overlay",
        close_button: "close-projects",
        title: "Projects",
        initially_visible: false,
    },
    OverlayInfo {
        id: "headphone-overlay",
        close_button: "close-headphone",
        title: "Now Playing",
        initially_visible: false,
    },
];

/// Label the enter button shows while the model is still loading.
pub const ENTER_BUTTON_LOADING_LABEL: &str = "Loading...";
