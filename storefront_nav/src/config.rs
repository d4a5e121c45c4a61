use serde::{Deserialize, Serialize};

/// Runtime configuration for the page controller.
///
/// Every field has a default matching the site's markup, and missing fields in
/// a partial JSON object keep those defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Viewport width above which an open mobile menu is forced closed.
    pub menu_breakpoint: f64,
    /// Header height used when `.navbar` is missing or measures zero.
    pub header_fallback_height: f64,
    /// Href of the call-to-action link that may match `/` plus its anchor.
    pub call_to_action_href: String,
    /// Emit informational console logs.
    pub debug: bool,
    /// Flash banner timings.
    pub flash: FlashTiming,
    /// Selectors for the elements each behaviour binds to.
    pub selectors: Selectors,
    /// Class names read from or written to the markup.
    pub classes: Classes,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            menu_breakpoint: 768.0,
            header_fallback_height: 64.0,
            call_to_action_href: "/#about".to_owned(),
            debug: false,
            flash: FlashTiming::default(),
            selectors: Selectors::default(),
            classes: Classes::default(),
        }
    }
}

impl Config {
    /// Parse a (possibly partial) JSON configuration object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Flash banner timings, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashTiming {
    /// Delay before an untouched banner starts fading.
    pub auto_dismiss_ms: u32,
    /// Fade duration after the auto-dismiss delay.
    pub auto_fade_ms: u32,
    /// Fade duration after a close click.
    pub close_fade_ms: u32,
}

impl Default for FlashTiming {
    fn default() -> Self {
        Self {
            auto_dismiss_ms: 5000,
            auto_fade_ms: 500,
            close_fade_ms: 300,
        }
    }
}

/// CSS selectors the controller queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// Top navigation links and the call-to-action button.
    pub site_links: String,
    /// Dashboard sidebar and bottom bar links.
    pub dashboard_links: String,
    /// Header whose height offsets smooth scrolling.
    pub navbar: String,
    /// Navigation panel the menu shows and hides.
    pub nav_panel: String,
    /// Mobile menu toggle button.
    pub hamburger: String,
    /// Icon inside the toggle whose text shows the menu state.
    pub hamburger_icon: String,
    /// Wrapper around the flash banners.
    pub flash_container: String,
    /// A single flash banner.
    pub flash_item: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            site_links: ".navbar-links a, .cta-button".to_owned(),
            dashboard_links: ".sidebar-links a, .bottom-nav .nav-links a".to_owned(),
            navbar: ".navbar".to_owned(),
            nav_panel: ".navbar-links".to_owned(),
            hamburger: ".hamburger".to_owned(),
            hamburger_icon: ".material-icons".to_owned(),
            flash_container: ".flash-messages".to_owned(),
            flash_item: ".form-error, .form-success".to_owned(),
        }
    }
}

/// Class names the controller reads or toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Classes {
    /// Marks the active link and the open menu panel.
    pub active: String,
    /// Marks the call-to-action link.
    pub call_to_action: String,
    /// Navigation panel class, checked on call-to-action clicks.
    pub nav_panel: String,
    /// Marks a flash banner's close button.
    pub close_button: String,
    /// Error banner.
    pub error: String,
    /// Success banner.
    pub success: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            active: "active".to_owned(),
            call_to_action: "cta-button".to_owned(),
            nav_panel: "navbar-links".to_owned(),
            close_button: "close-btn".to_owned(),
            error: "form-error".to_owned(),
            success: "form-success".to_owned(),
        }
    }
}
