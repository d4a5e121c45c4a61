/// The parts of `window.location` that link matching looks at.
///
/// `hash` keeps the leading `#` and is empty when the URL has no fragment,
/// the same shape the browser reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    /// `location.pathname`
    pub path: String,
    /// `location.hash`
    pub hash: String,
}

impl Location {
    /// Build a location from a path and a hash as the browser reports them.
    pub fn new(path: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            hash: hash.into(),
        }
    }

    /// Parse a relative URL such as `/`, `/#about` or `/shop?q=1#top`.
    ///
    /// The query string is dropped; it plays no part in matching.
    pub fn parse(url: &str) -> Self {
        let href = Href::parse(url);
        let path = href.path.split('?').next().unwrap_or_default();

        Self {
            path: path.to_owned(),
            hash: href.fragment(),
        }
    }
}

/// A link `href` split at its first `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Href<'a> {
    /// Everything before the first `#`, possibly empty.
    pub path: &'a str,
    /// Text after the first `#` (without the `#`), `None` when there is no `#`.
    pub anchor: Option<&'a str>,
}

impl<'a> Href<'a> {
    /// Split `raw` at its first `#`.
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once('#') {
            Some((path, rest)) => {
                // Only the segment up to a second `#` counts as the anchor.
                let anchor = rest.split('#').next().unwrap_or_default();
                Self {
                    path,
                    anchor: Some(anchor),
                }
            }
            None => Self {
                path: raw,
                anchor: None,
            },
        }
    }

    /// The fragment as `window.location.hash` would report it for this href.
    pub fn fragment(&self) -> String {
        match self.anchor {
            Some(anchor) => format!("#{anchor}"),
            None => String::new(),
        }
    }

    /// Whether following this href stays on the page at `current_path`.
    ///
    /// `#pricing` always does; `/#pricing` only does while on `/`. A bare
    /// `/#` counts too, it just has nothing to scroll to.
    pub fn is_same_page(&self, current_path: &str) -> bool {
        self.anchor.is_some() && (self.path.is_empty() || self.path == current_path)
    }
}
