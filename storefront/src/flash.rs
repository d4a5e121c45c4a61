use std::cell::RefCell;
use std::rc::Rc;

use storefront_nav::{
    Config, Dismissal, FlashBoard, FlashId, FlashKind, FlashPhase, fade_transition,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::{dom, log};

/// The flash banner container and the banners inside it.
///
/// Each banner fades out after the auto-dismiss delay or when its close button
/// is clicked, then is detached. The container goes once it has no children.
#[derive(Debug)]
pub struct FlashBanners {
    container: Element,
    items: RefCell<Vec<(FlashId, Element)>>,
    board: RefCell<FlashBoard>,
    config: Rc<Config>,
}

impl FlashBanners {
    /// Find the container under `root` and register its banners. `None` if
    /// there is no container.
    pub(crate) fn collect(root: &Element, config: Rc<Config>) -> Result<Option<Rc<Self>>, JsValue> {
        let Some(container) = dom::query(root, &config.selectors.flash_container)? else {
            return Ok(None);
        };

        let banners = Rc::new(Self {
            items: RefCell::new(Vec::new()),
            board: RefCell::new(FlashBoard::new()),
            container,
            config,
        });

        for element in dom::query_all(&banners.container, &banners.config.selectors.flash_item)? {
            banners.register(element);
        }

        Ok(Some(banners))
    }

    /// Start every auto-dismiss timer and listen for close clicks.
    pub(crate) fn bind(self: &Rc<Self>) -> Result<(), JsValue> {
        let delay = self.config.flash.auto_dismiss_ms;
        let ids: Vec<FlashId> = self.items.borrow().iter().map(|(id, _)| *id).collect();

        for id in ids {
            let banners = Rc::clone(self);
            dom::set_timeout(delay, move || {
                log::report("auto-dismiss", banners.dismiss(id, Dismissal::Timeout));
            })?;
        }

        let banners = Rc::clone(self);
        dom::listen(&self.container, "click", move |event| {
            log::report("flash close", banners.handle_click(&event));
        })
    }

    fn register(&self, element: Element) -> FlashId {
        let class_list = element.class_name();
        let kind = FlashKind::from_classes(class_list.split_whitespace(), &self.config.classes);

        let id = self.board.borrow_mut().register(kind);
        self.items.borrow_mut().push((id, element));
        id
    }

    fn element(&self, id: FlashId) -> Option<Element> {
        self.items
            .borrow()
            .iter()
            .find(|(item_id, _)| *item_id == id)
            .map(|(_, element)| element.clone())
    }

    fn id_of(&self, element: &Element) -> Option<FlashId> {
        self.items
            .borrow()
            .iter()
            .find(|(_, item)| item.is_same_node(Some(element)))
            .map(|(id, _)| *id)
    }

    fn handle_click(self: &Rc<Self>, event: &web_sys::Event) -> Result<(), JsValue> {
        let Some(target) = event.target().and_then(|target| target.dyn_into::<Element>().ok())
        else {
            return Ok(());
        };

        if !dom::has_class(&target, &self.config.classes.close_button) {
            return Ok(());
        }

        let Some(item) = target.closest(&self.config.selectors.flash_item)? else {
            return Ok(());
        };

        // Banners inserted after load are picked up on their first close.
        let id = match self.id_of(&item) {
            Some(id) => id,
            None => self.register(item),
        };

        self.dismiss(id, Dismissal::Closed)
    }

    /// Fade the banner out and schedule its removal. Banners that are already
    /// fading or gone are left alone.
    pub fn dismiss(self: &Rc<Self>, id: FlashId, reason: Dismissal) -> Result<(), JsValue> {
        let fade = self.board.borrow_mut().dismiss(id, reason, &self.config.flash);
        let (Some(fade), Some(element)) = (fade, self.element(id)) else {
            return Ok(());
        };

        log::debug(self.config.debug, &format!("dismissing banner ({reason:?})"));

        let transition = fade_transition(fade);
        dom::set_styles(
            &element,
            &[
                ("transition", transition.as_str()),
                ("opacity", "0"),
                ("transform", "translateY(-10px)"),
            ],
        )?;

        let banners = Rc::clone(self);
        dom::set_timeout(fade, move || banners.finish(id))?;

        Ok(())
    }

    fn finish(&self, id: FlashId) {
        if !self.board.borrow_mut().remove(id) {
            return;
        }

        if let Some(element) = self.element(id) {
            element.remove();
        }

        if self.container.is_connected() && self.container.child_element_count() == 0 {
            log::debug(self.config.debug, "flash container empty, removing");
            self.container.remove();
        }
    }

    /// Phase of the banner registered `index`-th.
    pub fn phase_of(&self, index: usize) -> Option<FlashPhase> {
        let id = self.items.borrow().get(index).map(|(id, _)| *id)?;
        self.board.borrow().phase(id)
    }

    /// Number of banners ever registered.
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Whether no banner was ever registered.
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Banners not yet removed.
    pub fn live_count(&self) -> usize {
        self.board.borrow().live_count()
    }

    /// The banner container element.
    pub fn container(&self) -> &Element {
        &self.container
    }
}
