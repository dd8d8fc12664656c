/// What a clickable group does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Reveal the overlay panel whose element id is the target.
    Overlay,
    /// Open the target URL in a new browsing context.
    Link,
}

pub struct ClickableInfo {
    pub name: &'static str,
    pub mesh_names: &'static [&'static str],
    pub action: ActionKind,
    pub target: &'static str,
}

/// Groups in registration order. Picking returns the first group hit in this
/// order, not the nearest.
pub const CLICKABLE_MAP: &[ClickableInfo] = &[
    ClickableInfo {
        name: "greenFolder",
        mesh_names: &["grh"],
        action: ActionKind::Overlay,
        target: "resume-overlay",
    },
    ClickableInfo {
        name: "computer",
        mesh_names: &["defaultMaterial005_1", "defaultMaterial005"],
        action: ActionKind::Overlay,
        target: "projects-overlay",
    },
    ClickableInfo {
        name: "books",
        mesh_names: &[
            "Cube066", "Cube068", "Cube069", "Cube070", "Cube071", "Cube072", "Cube073",
            "Cube074",
        ],
        action: ActionKind::Link,
        target: "https://www.goodreads.com/user/show/143791746-aadarsh-battula",
    },
    ClickableInfo {
        name: "movieNumber",
        mesh_names: &["Movie_numberator"],
        action: ActionKind::Link,
        target: "https://www.imdb.com/user/ur205981400/?ref_=hm_nv_profile",
    },
    ClickableInfo {
        name: "runningShoes",
        mesh_names: &["Red_sport_running_shoes", "L", "R"],
        action: ActionKind::Link,
        target: "https://www.strava.com/athletes/108160379",
    },
    ClickableInfo {
        name: "headphones",
        mesh_names: &[
            "JBL_Bluetooth_Headphones",
            "band",
            "earpiece",
            "earpiece001",
            "earpiece006",
            "head_band",
            "headband",
            "logo",
            "logo2",
        ],
        action: ActionKind::Overlay,
        target: "headphone-overlay",
    },
    ClickableInfo {
        name: "monkey",
        mesh_names: &["Stuffed_monkey", "Stuffed_monkey_1", "Stuffed_monkey-01"],
        action: ActionKind::Overlay,
        target: "intro-overlay",
    },
];
