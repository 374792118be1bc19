use glam::Vec2;
use site_core::{RegionId, SceneState, CONTENT_PARALLAX_GAIN, ELEMENT_PROXIMITY_RADIUS};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{
    BASE_LAYER_ID, CONTENT_LAYER_ID, CURSOR_ID, CURSOR_SIZE_PX, CURSOR_TRANSITION,
    DARK_FOREGROUND, ICON_GLOW, INVERT_TRANSITION, LIGHT_FOREGROUND, NAME_ID, NAV_MENU_ID,
    NAV_TOGGLE_ID, PARALLAX_TRANSITION, SOCIAL_ID, TEXT_GLOW,
};
use crate::{dom, input, style};

/// One navigable menu entry, supplied as static data by the page owner.
pub struct NavItem {
    pub label: &'static str,
    pub target: &'static str,
    pub icon: &'static str,
}

/// One social entry, supplied as static data by the page owner.
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

// Presentational lookup tables. The effect itself only cares about the
// rendered bounding boxes of the containers, not these contents.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Projects",
        target: "#projects",
        icon: r#"<svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5"><path d="M3 3h7v7H3zM14 3h7v7h-7zM14 14h7v7h-7zM3 14h7v7H3z"/></svg>"#,
    },
    NavItem {
        label: "Tech Stack",
        target: "#stack",
        icon: r#"<svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5"><path d="M16 18l6-6-6-6M8 6l-6 6 6 6"/></svg>"#,
    },
    NavItem {
        label: "Services",
        target: "#services",
        icon: r#"<svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5"><path d="M12 2v4m0 12v4M2 12h4m12 0h4"/></svg>"#,
    },
    NavItem {
        label: "About",
        target: "#about",
        icon: r#"<svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5"><circle cx="12" cy="8" r="4"/><path d="M4 20c0-4 4-6 8-6s8 2 8 6"/></svg>"#,
    },
    NavItem {
        label: "Contact",
        target: "#contact",
        icon: r#"<svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5"><path d="M3 8l9 6 9-6M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"/></svg>"#,
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "Instagram",
        url: "https://instagram.com",
        icon: r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="currentColor"><rect x="3" y="3" width="18" height="18" rx="5" fill="none" stroke="currentColor" stroke-width="2"/><circle cx="12" cy="12" r="4" fill="none" stroke="currentColor" stroke-width="2"/><circle cx="17.5" cy="6.5" r="1.5"/></svg>"#,
    },
    SocialLink {
        label: "X",
        url: "https://x.com",
        icon: r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="currentColor"><path d="M18.2 2.3h3.3l-7.2 8.2 8.5 11.2h-6.7l-5.2-6.8-6 6.8H1.7l7.7-8.8L1.3 2.3h6.8l4.7 6.2z"/></svg>"#,
    },
    SocialLink {
        label: "YouTube",
        url: "https://youtube.com",
        icon: r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="currentColor"><path d="M23.5 6.2a3 3 0 00-2.1-2.1C19.5 3.5 12 3.5 12 3.5s-7.5 0-9.4.6A3 3 0 00.5 6.2C0 8.1 0 12 0 12s0 3.9.5 5.8a3 3 0 002.1 2.1c1.9.6 9.4.6 9.4.6s7.5 0 9.4-.6a3 3 0 002.1-2.1C24 15.9 24 12 24 12s0-3.9-.5-5.8zM9.5 15.6V8.4L15.8 12z"/></svg>"#,
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://linkedin.com",
        icon: r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="currentColor"><path d="M4.98 3.5a2.5 2.5 0 11-.02 5 2.5 2.5 0 01.02-5zM3 9h4v12H3zM9 9h3.8v1.7h.1c.5-1 1.8-2 3.7-2 4 0 4.7 2.6 4.7 6V21h-4v-5.6c0-1.3 0-3-1.9-3s-2.2 1.4-2.2 2.9V21H9z"/></svg>"#,
    },
];

/// A DOM element whose foreground inverts while the blob overlaps it.
/// `glow_property` carries the ambient shadow that is dropped while
/// inverted ("text-shadow" for text, "filter" for the icon group).
struct ReactiveElement {
    el: web::HtmlElement,
    region: RegionId,
    glow_property: &'static str,
    glow: &'static str,
    applied: Option<bool>,
}

impl ReactiveElement {
    fn new(
        el: web::HtmlElement,
        scene: &mut SceneState,
        glow_property: &'static str,
        glow: &'static str,
    ) -> Self {
        let region = scene
            .proximity
            .register(input::element_rect(&el), ELEMENT_PROXIMITY_RADIUS);
        let style = el.style();
        let _ = style.set_property("color", LIGHT_FOREGROUND);
        let _ = style.set_property(glow_property, glow);
        let _ = style.set_property("transition", INVERT_TRANSITION);
        Self {
            el,
            region,
            glow_property,
            glow,
            applied: None,
        }
    }

    /// Level-triggered: the flag is recomputed upstream every frame;
    /// the DOM write only happens on an actual state change.
    fn apply(&mut self, under: bool) {
        if self.applied == Some(under) {
            return;
        }
        self.applied = Some(under);
        let style = self.el.style();
        if under {
            let _ = style.set_property("color", DARK_FOREGROUND);
            let _ = style.set_property(self.glow_property, "none");
        } else {
            let _ = style.set_property("color", LIGHT_FOREGROUND);
            let _ = style.set_property(self.glow_property, self.glow);
        }
    }
}

/// All DOM handles the per-frame drivers touch: the three reactive
/// elements, the parallax-shifted layers, and the cursor dot.
pub struct ContentElements {
    name: ReactiveElement,
    nav: ReactiveElement,
    social: ReactiveElement,
    parallax_layers: Vec<(web::HtmlElement, f32)>,
    cursor: web::HtmlElement,
}

impl ContentElements {
    /// Re-measure every reactive bounding box after a resize or layout
    /// change and push the fresh rects into the registry.
    pub fn refresh_bounds(&self, scene: &mut SceneState) {
        for re in [&self.name, &self.nav, &self.social] {
            scene
                .proximity
                .update_bounds(re.region, input::element_rect(&re.el));
        }
    }

    /// Flip foreground state for any element whose flag changed. Each
    /// element owns its own flag; there is no shared proximity state.
    pub fn apply_proximity(&mut self, scene: &SceneState) {
        for re in [&mut self.name, &mut self.nav, &mut self.social] {
            re.apply(scene.proximity.is_under(re.region));
        }
    }

    pub fn apply_parallax(&self, parallax: Vec2) {
        for (layer, gain) in &self.parallax_layers {
            let _ = layer.style().set_property(
                "transform",
                &style::translate_px(parallax.x * gain, parallax.y * gain),
            );
        }
    }

    /// Track the raw pointer with the custom cursor dot; hidden while
    /// the pointer is off the surface.
    pub fn update_cursor(&self, raw: Vec2, active: bool) {
        let half = CURSOR_SIZE_PX / 2.0;
        let style = self.cursor.style();
        let _ = style.set_property("left", &style::px(raw.x - half));
        let _ = style.set_property("top", &style::px(raw.y - half));
        let _ = style.set_property("opacity", if active { "1" } else { "0" });
    }
}

/// Populate the static content containers and register their regions.
pub fn build(document: &web::Document, scene: &mut SceneState) -> anyhow::Result<ContentElements> {
    let name_el = dom::html_element_by_id(document, NAME_ID)?;
    let nav_el = dom::html_element_by_id(document, NAV_TOGGLE_ID)?;
    let social_el = dom::html_element_by_id(document, SOCIAL_ID)?;

    populate_nav_menu(document)?;
    populate_social_links(document, &social_el)?;

    let base_layer = dom::html_element_by_id(document, BASE_LAYER_ID)?;
    let content_layer = dom::html_element_by_id(document, CONTENT_LAYER_ID)?;
    let reveal_layer = dom::html_element_by_id(document, crate::constants::REVEAL_CANVAS_ID)?;
    let parallax_layers = vec![
        (base_layer, 1.0),
        (reveal_layer, 1.0),
        (content_layer, CONTENT_PARALLAX_GAIN),
    ];
    for (layer, _) in &parallax_layers {
        let _ = layer.style().set_property("transition", PARALLAX_TRANSITION);
    }

    let cursor = dom::html_element_by_id(document, CURSOR_ID)?;
    init_cursor_style(&cursor);

    let name = ReactiveElement::new(name_el, scene, "text-shadow", TEXT_GLOW);
    let nav = ReactiveElement::new(nav_el, scene, "text-shadow", TEXT_GLOW);
    let social = ReactiveElement::new(social_el, scene, "filter", ICON_GLOW);
    log::info!("[content] {} proximity regions registered", scene.proximity.len());

    Ok(ContentElements {
        name,
        nav,
        social,
        parallax_layers,
        cursor,
    })
}

/// Clicking the nav control toggles the dropdown. Purely presentational;
/// the proximity logic only sees the control's bounding box.
pub fn wire_nav_toggle(document: &web::Document) {
    let (Ok(toggle), Ok(menu)) = (
        dom::html_element_by_id(document, NAV_TOGGLE_ID),
        dom::html_element_by_id(document, NAV_MENU_ID),
    ) else {
        return;
    };
    dom::add_click_listener(&toggle, move || {
        let style = menu.style();
        let open = style
            .get_property_value("display")
            .map(|v| v != "none")
            .unwrap_or(false);
        let _ = style.set_property("display", if open { "none" } else { "block" });
    });
}

fn populate_nav_menu(document: &web::Document) -> anyhow::Result<()> {
    let menu = dom::html_element_by_id(document, NAV_MENU_ID)?;
    let _ = menu.style().set_property("display", "none");
    for item in NAV_ITEMS {
        let anchor = create_anchor(document, item.target)?;
        anchor.set_inner_html(&format!("{} <span>{}</span>", item.icon, item.label));
        let _ = menu.append_child(&anchor);
    }
    Ok(())
}

fn populate_social_links(
    document: &web::Document,
    container: &web::HtmlElement,
) -> anyhow::Result<()> {
    for link in SOCIAL_LINKS {
        let anchor = create_anchor(document, link.url)?;
        anchor.set_target("_blank");
        anchor.set_rel("noopener noreferrer");
        let _ = anchor.set_attribute("aria-label", link.label);
        anchor.set_inner_html(link.icon);
        let _ = container.append_child(&anchor);
    }
    Ok(())
}

fn create_anchor(document: &web::Document, href: &str) -> anyhow::Result<web::HtmlAnchorElement> {
    let anchor = document
        .create_element("a")
        .map_err(|e| anyhow::anyhow!("create anchor: {e:?}"))?
        .dyn_into::<web::HtmlAnchorElement>()
        .map_err(|_| anyhow::anyhow!("anchor cast failed"))?;
    anchor.set_href(href);
    Ok(anchor)
}

fn init_cursor_style(cursor: &web::HtmlElement) {
    let style = cursor.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("width", &style::px(CURSOR_SIZE_PX));
    let _ = style.set_property("height", &style::px(CURSOR_SIZE_PX));
    // White under difference blending, so the dot inverts whatever it covers.
    let _ = style.set_property("background", LIGHT_FOREGROUND);
    let _ = style.set_property("border-radius", "50%");
    let _ = style.set_property("pointer-events", "none");
    let _ = style.set_property("mix-blend-mode", "difference");
    let _ = style.set_property("z-index", "50");
    let _ = style.set_property("opacity", "0");
    let _ = style.set_property("transition", CURSOR_TRANSITION);
}
