use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::state::navigation::{navigate, ScrollHost};
use crate::state::section::{Section, SectionRefs};

struct DomScroll<'a> {
    window: Window,
    refs: &'a SectionRefs,
}

impl ScrollHost<Section> for DomScroll<'_> {
    fn offset_top(&self, region: &Section) -> Option<f64> {
        self.refs
            .get(*region)
            .cast::<HtmlElement>()
            .map(|element| f64::from(element.offset_top()))
    }

    fn max_scroll(&self) -> f64 {
        let document_height = self
            .window
            .document()
            .and_then(|document| document.document_element())
            .map(|root| f64::from(root.scroll_height()));
        let viewport_height = self.window.inner_height().ok().and_then(|h| h.as_f64());
        match (document_height, viewport_height) {
            (Some(document), Some(viewport)) => document - viewport,
            _ => f64::MAX,
        }
    }

    fn scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scrolls the window so `section` sits under the sticky header.
pub fn scroll_to_section(refs: &SectionRefs, section: Section) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let host = DomScroll { window, refs };
    match navigate(&host, &section) {
        Some(top) => log::debug!("scrolling to {} at {top}", section.name()),
        None => log::debug!("section {} is not mounted", section.name()),
    }
}
