//! Target-independent page behaviour model for the storefront site.
//!
//! Everything in here is plain data and arithmetic: which navigation link is
//! active for a given URL, what a link click should do, where a smooth scroll
//! lands, whether the mobile menu is open and where each flash banner is in its
//! lifecycle. The `storefront` crate binds these decisions to the DOM.

mod activation;
mod click;
mod config;
mod flash;
mod href;
mod menu;
mod scroll;

pub use activation::{MatchRank, NavLink, match_rank, resolve_active};
pub use click::{ClickOutcome, LinkBehavior, click_outcome};
pub use config::{Classes, Config, FlashTiming, Selectors};
pub use flash::{Dismissal, FlashBoard, FlashId, FlashItem, FlashKind, FlashPhase, fade_transition};
pub use href::{Href, Location};
pub use menu::{ICON_CLOSED, ICON_OPEN, MenuState};
pub use scroll::scroll_top;
