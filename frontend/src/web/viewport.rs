use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::state::reveal::{RevealTracker, Viewport};
use crate::state::section::{Section, SectionRefs};

/// Attribute that maps an observed element back to its section.
pub const SECTION_ATTR: &str = "data-section";

struct DomViewport<'a> {
    observer: &'a IntersectionObserver,
    refs: &'a SectionRefs,
}

impl Viewport<Section> for DomViewport<'_> {
    fn observe(&self, region: &Section) -> bool {
        match self.refs.get(*region).cast::<Element>() {
            Some(element) => {
                self.observer.observe(&element);
                true
            }
            None => false,
        }
    }

    fn unobserve(&self, region: &Section) {
        if let Some(element) = self.refs.get(*region).cast::<Element>() {
            self.observer.unobserve(&element);
        }
    }
}

fn section_of(entry: &IntersectionObserverEntry) -> Option<Section> {
    entry
        .target()
        .get_attribute(SECTION_ATTR)
        .as_deref()
        .and_then(Section::from_name)
}

type Revealed = UseStateHandle<Rc<HashSet<Section>>>;

fn watch(refs: SectionRefs, revealed: Revealed) -> Result<Box<dyn FnOnce()>, JsValue> {
    let tracker = Rc::new(RefCell::new(RevealTracker::<Section>::default()));

    let callback = {
        let tracker = tracker.clone();
        let refs = refs.clone();
        Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let viewport = DomViewport {
                    observer: &observer,
                    refs: &refs,
                };
                let mut tracker = tracker.borrow_mut();
                let mut changed = false;
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    if let Some(section) = section_of(&entry) {
                        if tracker.report(section, entry.intersection_ratio(), &viewport) {
                            log::debug!("revealed {}", section.name());
                            changed = true;
                        }
                    }
                }
                if changed {
                    revealed.set(Rc::new(tracker.visible()));
                }
            },
        )
    };

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(tracker.borrow().threshold()));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

    let watched = tracker.borrow_mut().register(
        Section::ALL,
        &DomViewport {
            observer: &observer,
            refs: &refs,
        },
    );
    log::debug!("watching {watched} sections for reveal");

    Ok(Box::new(move || {
        observer.disconnect();
        drop(callback);
    }))
}

/// Sections that have faded in so far. Registration starts once `ready`
/// turns true, i.e. after the page content has mounted.
#[hook]
pub fn use_reveal(refs: SectionRefs, ready: bool) -> Rc<HashSet<Section>> {
    let revealed: Revealed = use_state(|| Rc::new(HashSet::new()));

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |ready| {
                let destructor: Box<dyn FnOnce()> = if *ready {
                    match watch(refs, revealed) {
                        Ok(destructor) => destructor,
                        Err(e) => {
                            log::error!("IntersectionObserver unavailable: {e:?}");
                            Box::new(|| ())
                        }
                    }
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            ready,
        );
    }

    (*revealed).clone()
}
