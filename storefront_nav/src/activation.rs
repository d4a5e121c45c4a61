use crate::config::Config;
use crate::href::{Href, Location};

/// A navigation link as seen by the matcher: its `href` attribute and classes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavLink {
    href: Option<String>,
    classes: Vec<String>,
}

impl NavLink {
    /// A link with `href` and no classes.
    pub fn new(href: Option<&str>) -> Self {
        Self {
            href: href.map(str::to_owned),
            classes: Vec::new(),
        }
    }

    /// Snapshot a link from its `href` attribute and `class` attribute.
    pub fn from_attributes(href: Option<&str>, class_attr: Option<&str>) -> Self {
        let classes = class_attr
            .map(|attr| attr.split_whitespace().map(str::to_owned).collect())
            .unwrap_or_default();

        Self {
            href: href.map(str::to_owned),
            classes,
        }
    }

    /// Add a class.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_owned());
        self
    }

    /// The `href` attribute, if the link has one.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// Whether the link carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Why a link matches the current location. Lower ranks win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchRank {
    /// Same path and same fragment.
    Exact,
    /// Bare `/` while on `/` without a fragment.
    Root,
    /// The call-to-action link while on `/` with its anchor in the URL.
    CallToAction,
}

/// Rank a single link against `location`, `None` if it does not match at all.
pub fn match_rank(link: &NavLink, location: &Location, config: &Config) -> Option<MatchRank> {
    let raw = link.href()?;
    let href = Href::parse(raw);

    if href.path == location.path && href.fragment() == location.hash {
        return Some(MatchRank::Exact);
    }

    if raw == "/" && location.path == "/" && location.hash.is_empty() {
        return Some(MatchRank::Root);
    }

    if raw == config.call_to_action_href
        && link.has_class(&config.classes.call_to_action)
        && location.path == "/"
        && location.hash == href.fragment()
    {
        return Some(MatchRank::CallToAction);
    }

    None
}

/// Index of the link that should be active, if any.
///
/// The best rank wins; among equal ranks the first link in document order wins.
pub fn resolve_active(links: &[NavLink], location: &Location, config: &Config) -> Option<usize> {
    links
        .iter()
        .enumerate()
        .filter_map(|(index, link)| match_rank(link, location, config).map(|rank| (rank, index)))
        .min()
        .map(|(_, index)| index)
}
