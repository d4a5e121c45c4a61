use crate::activation::NavLink;
use crate::config::Config;
use crate::href::Href;

/// How a link group reacts to clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkBehavior {
    /// Top navigation: same-page anchors scroll, everything else is followed.
    AnchorScroll,
    /// Dashboard sidebar and bottom bar: every click selects the link and
    /// navigation, if any, is done by hand.
    Select,
}

/// What the controller should do with a link click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Prevent default and smooth-scroll to the element with id `target_id`.
    Scroll {
        /// Id of the scroll target, empty for a bare `#`.
        target_id: String,
        /// Whether the clicked link becomes the active one. When false the
        /// group is left with no active link.
        mark_active: bool,
    },
    /// Leave the click to the browser.
    Follow,
    /// Prevent default, mark the link active, then assign `navigate_to` to
    /// `location.href` when present.
    Select {
        /// Where to navigate after selecting, `None` for hash-only hrefs.
        navigate_to: Option<String>,
    },
}

impl ClickOutcome {
    /// Whether the click's default action must be cancelled.
    pub fn prevents_default(&self) -> bool {
        !matches!(self, Self::Follow)
    }
}

/// Decide what a click on `link` does while the page is at `current_path`.
pub fn click_outcome(
    link: &NavLink,
    behavior: LinkBehavior,
    current_path: &str,
    config: &Config,
) -> ClickOutcome {
    match behavior {
        LinkBehavior::AnchorScroll => {
            let Some(raw) = link.href() else {
                return ClickOutcome::Follow;
            };

            let href = Href::parse(raw);
            if !href.is_same_page(current_path) {
                return ClickOutcome::Follow;
            }

            // A call-to-action link only lights up if it also carries the nav
            // panel class, which the site markup never gives it.
            let mark_active = link.has_class(&config.classes.nav_panel)
                || !link.has_class(&config.classes.call_to_action);

            ClickOutcome::Scroll {
                target_id: href.anchor.unwrap_or_default().to_owned(),
                mark_active,
            }
        }
        LinkBehavior::Select => {
            let navigate_to = link
                .href()
                .filter(|href| !href.starts_with('#'))
                .map(str::to_owned);

            ClickOutcome::Select { navigate_to }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_page_anchor_scrolls_and_marks_active() {
        let config = Config::default();
        let link = NavLink::new(Some("/#services"));

        let outcome = click_outcome(&link, LinkBehavior::AnchorScroll, "/", &config);
        assert_eq!(
            outcome,
            ClickOutcome::Scroll {
                target_id: "services".to_owned(),
                mark_active: true,
            }
        );
        assert!(outcome.prevents_default());
    }

    #[test]
    fn anchor_on_other_page_is_followed() {
        let config = Config::default();
        let link = NavLink::new(Some("/#services"));

        let outcome = click_outcome(&link, LinkBehavior::AnchorScroll, "/market", &config);
        assert_eq!(outcome, ClickOutcome::Follow);
        assert!(!outcome.prevents_default());
    }

    #[test]
    fn bare_hash_is_kept_on_page_without_target() {
        let config = Config::default();
        let link = NavLink::new(Some("/#"));

        let outcome = click_outcome(&link, LinkBehavior::AnchorScroll, "/", &config);
        assert_eq!(
            outcome,
            ClickOutcome::Scroll {
                target_id: String::new(),
                mark_active: true,
            }
        );
        assert!(outcome.prevents_default());

        assert_eq!(
            click_outcome(&link, LinkBehavior::AnchorScroll, "/market", &config),
            ClickOutcome::Follow
        );
    }

    #[test]
    fn plain_path_is_followed() {
        let config = Config::default();
        let link = NavLink::new(Some("/login"));
        assert_eq!(
            click_outcome(&link, LinkBehavior::AnchorScroll, "/", &config),
            ClickOutcome::Follow
        );
    }

    #[test]
    fn missing_href_is_followed() {
        let config = Config::default();
        assert_eq!(
            click_outcome(&NavLink::new(None), LinkBehavior::AnchorScroll, "/", &config),
            ClickOutcome::Follow
        );
    }

    // The call-to-action branch checks for the nav panel class, which an
    // anchor inside the panel does not carry itself. Observed behaviour is
    // that a call-to-action click clears the active link without replacing it.
    #[test]
    fn call_to_action_click_does_not_mark_active() {
        let config = Config::default();
        let cta = NavLink::new(Some("/#about")).with_class("cta-button");

        assert_eq!(
            click_outcome(&cta, LinkBehavior::AnchorScroll, "/", &config),
            ClickOutcome::Scroll {
                target_id: "about".to_owned(),
                mark_active: false,
            }
        );

        let odd = cta.with_class("navbar-links");
        assert_eq!(
            click_outcome(&odd, LinkBehavior::AnchorScroll, "/", &config),
            ClickOutcome::Scroll {
                target_id: "about".to_owned(),
                mark_active: true,
            }
        );
    }

    #[test]
    fn select_navigates_unless_hash_only() {
        let config = Config::default();

        let outcome = click_outcome(
            &NavLink::new(Some("/dashboard/products")),
            LinkBehavior::Select,
            "/dashboard",
            &config,
        );
        assert_eq!(
            outcome,
            ClickOutcome::Select {
                navigate_to: Some("/dashboard/products".to_owned())
            }
        );
        assert!(outcome.prevents_default());

        assert_eq!(
            click_outcome(
                &NavLink::new(Some("#orders")),
                LinkBehavior::Select,
                "/dashboard",
                &config
            ),
            ClickOutcome::Select { navigate_to: None }
        );

        assert_eq!(
            click_outcome(&NavLink::new(None), LinkBehavior::Select, "/dashboard", &config),
            ClickOutcome::Select { navigate_to: None }
        );
    }
}
