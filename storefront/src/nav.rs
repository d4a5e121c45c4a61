use std::rc::Rc;

use storefront_nav::{
    ClickOutcome, Config, LinkBehavior, Location, NavLink, click_outcome, resolve_active,
    scroll_top,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::menu::MobileMenu;
use crate::signal::Signal;
use crate::{dom, log};

/// A set of navigation links of which at most one is marked active.
#[derive(Debug)]
pub struct LinkGroup {
    root: Element,
    elements: Vec<Element>,
    behavior: LinkBehavior,
    active: Signal<Option<usize>>,
    config: Rc<Config>,
    menu: Option<Rc<MobileMenu>>,
}

impl LinkGroup {
    /// Collect the links matching `selector` under `root`. `None` if there are none.
    pub(crate) fn collect(
        root: &Element,
        selector: &str,
        behavior: LinkBehavior,
        config: Rc<Config>,
        menu: Option<Rc<MobileMenu>>,
    ) -> Result<Option<Rc<Self>>, JsValue> {
        let elements = dom::query_all(root, selector)?;
        if elements.is_empty() {
            return Ok(None);
        }

        // Dashboard markup arrives with the current section already marked.
        let initial = match behavior {
            LinkBehavior::AnchorScroll => None,
            LinkBehavior::Select => elements
                .iter()
                .position(|element| dom::has_class(element, &config.classes.active)),
        };

        let group = Rc::new(Self {
            root: root.clone(),
            elements,
            behavior,
            active: crate::signal!(initial),
            config,
            menu,
        });

        // Site links drop any active class the markup shipped with before the
        // first match; dashboard links keep the one they were rendered with.
        let elements = group.elements.clone();
        let active_class = group.config.classes.active.clone();
        let sync = move |active: &Option<usize>| {
            for (index, element) in elements.iter().enumerate() {
                log::report(
                    "link sync",
                    dom::set_class(element, &active_class, *active == Some(index)),
                );
            }
        };
        match behavior {
            LinkBehavior::AnchorScroll => group.active.effect(sync),
            LinkBehavior::Select => group.active.subscribe(sync),
        }

        Ok(Some(group))
    }

    pub(crate) fn bind(self: &Rc<Self>) -> Result<(), JsValue> {
        for (index, element) in self.elements.iter().enumerate() {
            let group = Rc::clone(self);
            dom::listen(element, "click", move |event| {
                log::report("link click", group.handle_click(index, &event));
            })?;
        }

        Ok(())
    }

    /// Number of links in the group.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the group has no links.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Index of the active link.
    pub fn active(&self) -> Option<usize> {
        self.active.get()
    }

    /// Mark `index` active and every other link inactive. Idempotent.
    pub fn set_active(&self, index: Option<usize>) {
        self.active.set(index.filter(|index| *index < self.elements.len()));
    }

    /// Re-run matching against `location`.
    pub fn activate_for(&self, location: &Location) {
        let links = self.snapshot();
        self.set_active(resolve_active(&links, location, &self.config));
    }

    fn snapshot(&self) -> Vec<NavLink> {
        self.elements.iter().map(nav_link).collect()
    }

    fn handle_click(&self, index: usize, event: &web_sys::Event) -> Result<(), JsValue> {
        let Some(element) = self.elements.get(index) else {
            return Ok(());
        };

        let window = dom::window()?;
        let current_path = window.location().pathname()?;
        let outcome = click_outcome(&nav_link(element), self.behavior, &current_path, &self.config);

        if outcome.prevents_default() {
            event.prevent_default();
        }

        match outcome {
            ClickOutcome::Scroll {
                target_id,
                mark_active,
            } => {
                self.set_active(mark_active.then_some(index));
                self.scroll_to(&target_id)?;
            }
            ClickOutcome::Follow => {}
            ClickOutcome::Select { navigate_to } => {
                self.set_active(Some(index));
                if let Some(href) = navigate_to {
                    window.location().set_href(&href)?;
                }
            }
        }

        if let (LinkBehavior::AnchorScroll, Some(menu)) = (self.behavior, &self.menu) {
            menu.close();
        }

        Ok(())
    }

    /// Smooth-scroll so the element with `target_id` sits just below the header.
    /// A missing target is skipped.
    pub fn scroll_to(&self, target_id: &str) -> Result<(), JsValue> {
        let window = dom::window()?;
        let document = dom::document()?;

        if target_id.is_empty() {
            return Ok(());
        }

        let Some(target) = document.get_element_by_id(target_id) else {
            log::debug(self.config.debug, &format!("no scroll target #{target_id}"));
            return Ok(());
        };

        let header_height = dom::query(&self.root, &self.config.selectors.navbar)?
            .and_then(|navbar| navbar.dyn_into::<HtmlElement>().ok())
            .map(|navbar| f64::from(navbar.offset_height()));

        let top = scroll_top(
            target.get_bounding_client_rect().top(),
            window.page_y_offset()?,
            header_height,
            self.config.header_fallback_height,
        );

        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);

        Ok(())
    }
}

fn nav_link(element: &Element) -> NavLink {
    NavLink::from_attributes(
        element.get_attribute("href").as_deref(),
        element.get_attribute("class").as_deref(),
    )
}
