use crate::config::{Classes, FlashTiming};

/// Kind of notification banner, taken from its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    /// `form-error`
    Error,
    /// `form-success`
    Success,
}

impl FlashKind {
    /// Classify an item by its class list. Items carrying neither class are
    /// treated as errors, since only the two kinds are rendered.
    pub fn from_classes<'a>(mut classes: impl Iterator<Item = &'a str>, names: &Classes) -> Self {
        if classes.any(|class| class == names.success) {
            Self::Success
        } else {
            Self::Error
        }
    }
}

/// What started a banner's fade-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    /// The auto-dismiss timer fired.
    Timeout,
    /// The user clicked the close button.
    Closed,
}

impl Dismissal {
    /// Fade duration for this kind of dismissal.
    pub fn fade_ms(self, timing: &FlashTiming) -> u32 {
        match self {
            Self::Timeout => timing.auto_fade_ms,
            Self::Closed => timing.close_fade_ms,
        }
    }
}

/// Where a banner is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashPhase {
    /// Shown, waiting for its timer or a close click.
    Visible,
    /// Fade styles applied, removal scheduled.
    FadingOut(Dismissal),
    /// Detached from the document.
    Removed,
}

/// Handle to a banner registered with a [`FlashBoard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlashId(usize);

/// A registered banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashItem {
    /// Error or success.
    pub kind: FlashKind,
    /// Current lifecycle phase.
    pub phase: FlashPhase,
}

/// Lifecycle bookkeeping for every banner on the page.
///
/// Transitions only move forward: `Visible -> FadingOut -> Removed`. Anything
/// else is refused, so a timer that fires late is a no-op.
#[derive(Debug, Clone, Default)]
pub struct FlashBoard {
    items: Vec<FlashItem>,
}

impl FlashBoard {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a new visible banner.
    pub fn register(&mut self, kind: FlashKind) -> FlashId {
        self.items.push(FlashItem {
            kind,
            phase: FlashPhase::Visible,
        });
        FlashId(self.items.len() - 1)
    }

    /// The banner registered as `id`.
    pub fn get(&self, id: FlashId) -> Option<&FlashItem> {
        self.items.get(id.0)
    }

    /// Phase of the banner registered as `id`.
    pub fn phase(&self, id: FlashId) -> Option<FlashPhase> {
        self.get(id).map(|item| item.phase)
    }

    /// Start fading a visible banner. Returns the fade duration, or `None`
    /// when the banner is already fading, removed or unknown.
    pub fn dismiss(&mut self, id: FlashId, reason: Dismissal, timing: &FlashTiming) -> Option<u32> {
        let item = self.items.get_mut(id.0)?;
        if item.phase != FlashPhase::Visible {
            return None;
        }

        item.phase = FlashPhase::FadingOut(reason);
        Some(reason.fade_ms(timing))
    }

    /// Finish a fade. Returns true only on the transition into `Removed`.
    pub fn remove(&mut self, id: FlashId) -> bool {
        match self.items.get_mut(id.0) {
            Some(item) if matches!(item.phase, FlashPhase::FadingOut(_)) => {
                item.phase = FlashPhase::Removed;
                true
            }
            _ => false,
        }
    }

    /// Banners not yet removed.
    pub fn live_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.phase != FlashPhase::Removed)
            .count()
    }

    /// Whether nothing was ever registered.
    pub fn is_empty(&self) -> bool {
        self.live_count() == 0
    }
}

/// Inline `transition` value for a fade of `ms` milliseconds.
pub fn fade_transition(ms: u32) -> String {
    format!("opacity {ms}ms ease, transform {ms}ms ease")
}
