use std::rc::Rc;

use storefront_nav::{Config, LinkBehavior, Location};
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::flash::FlashBanners;
use crate::menu::MobileMenu;
use crate::nav::LinkGroup;
use crate::{dom, log};

/// Owns the state of every behaviour wired on the page.
///
/// Behaviours whose elements are missing are simply absent; every accessor
/// returns `None` or a no-op for them.
#[derive(Debug)]
pub struct PageController {
    config: Rc<Config>,
    site_links: Option<Rc<LinkGroup>>,
    dashboard_links: Option<Rc<LinkGroup>>,
    menu: Option<Rc<MobileMenu>>,
    flash: Option<Rc<FlashBanners>>,
}

impl PageController {
    /// Find every behaviour's elements under `root` and attach the listeners.
    pub fn hydrate(root: &Element, config: Config) -> Result<Rc<Self>, JsValue> {
        let config = Rc::new(config);
        let selectors = &config.selectors;

        let menu = MobileMenu::collect(root, &config)?;
        let site_links = LinkGroup::collect(
            root,
            &selectors.site_links,
            LinkBehavior::AnchorScroll,
            Rc::clone(&config),
            menu.clone(),
        )?;
        let dashboard_links = LinkGroup::collect(
            root,
            &selectors.dashboard_links,
            LinkBehavior::Select,
            Rc::clone(&config),
            None,
        )?;
        let flash = FlashBanners::collect(root, Rc::clone(&config))?;

        let controller = Rc::new(Self {
            config,
            site_links,
            dashboard_links,
            menu,
            flash,
        });

        controller.bind()?;
        controller.refresh_active()?;

        log::debug(
            controller.config.debug,
            &format!(
                "hydrated: site links {}, dashboard links {}, menu {}, flash banners {}",
                controller.site_links.as_ref().map_or(0, |group| group.len()),
                controller.dashboard_links.as_ref().map_or(0, |group| group.len()),
                controller.menu.is_some(),
                controller.flash.as_ref().map_or(0, |flash| flash.len()),
            ),
        );

        Ok(controller)
    }

    fn bind(self: &Rc<Self>) -> Result<(), JsValue> {
        if let Some(menu) = &self.menu {
            menu.bind()?;
        }
        if let Some(group) = &self.site_links {
            group.bind()?;

            let controller = Rc::clone(self);
            dom::listen(&*dom::window()?, "hashchange", move |_event| {
                log::report("hashchange", controller.refresh_active());
            })?;
        }
        if let Some(group) = &self.dashboard_links {
            group.bind()?;
        }
        if let Some(flash) = &self.flash {
            flash.bind()?;
        }

        Ok(())
    }

    /// Re-run site link matching against `window.location`.
    pub fn refresh_active(&self) -> Result<(), JsValue> {
        let location = dom::window()?.location();
        let location = Location::new(location.pathname()?, location.hash()?);
        self.activate_for(&location);
        Ok(())
    }

    /// Run site link matching against an explicit location.
    pub fn activate_for(&self, location: &Location) {
        if let Some(group) = &self.site_links {
            group.activate_for(location);
        }
    }

    /// Index of the active site link.
    pub fn active_link(&self) -> Option<usize> {
        self.site_links.as_ref().and_then(|group| group.active())
    }

    /// Index of the active dashboard link.
    pub fn active_dashboard_link(&self) -> Option<usize> {
        self.dashboard_links.as_ref().and_then(|group| group.active())
    }

    /// Mark a site link active by index, or clear it.
    pub fn set_active(&self, index: Option<usize>) {
        if let Some(group) = &self.site_links {
            group.set_active(index);
        }
    }

    /// Toggle the mobile menu. `None` when the page has no menu.
    pub fn toggle_menu(&self) -> Option<bool> {
        self.menu.as_ref().map(|menu| menu.toggle())
    }

    /// Whether the mobile menu is open.
    pub fn menu_open(&self) -> bool {
        self.menu.as_ref().is_some_and(|menu| menu.is_open())
    }

    /// Apply a viewport width to the mobile menu.
    pub fn handle_resize(&self, width: f64) {
        if let Some(menu) = &self.menu {
            menu.handle_resize(width);
        }
    }

    /// Top navigation links, if the page has any.
    pub fn site_links(&self) -> Option<&Rc<LinkGroup>> {
        self.site_links.as_ref()
    }

    /// Dashboard links, if the page has any.
    pub fn dashboard_links(&self) -> Option<&Rc<LinkGroup>> {
        self.dashboard_links.as_ref()
    }

    /// Flash banners, if the page has a container.
    pub fn flash(&self) -> Option<&Rc<FlashBanners>> {
        self.flash.as_ref()
    }

    /// Configuration the page was hydrated with.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
