//! Header navigation resolved against the mounted section elements.

use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;
use store::Section;

/// Mounted root element of each navigable section.
#[derive(Clone, Default)]
pub struct SectionAnchors {
    mounted: HashMap<Section, Rc<MountedData>>,
}

pub fn use_section_anchors() -> Signal<SectionAnchors> {
    use_context::<Signal<SectionAnchors>>()
}

/// Remember where `section` was mounted. Use from an `onmounted` handler.
pub fn register_anchor(mut anchors: Signal<SectionAnchors>, section: Section, element: Rc<MountedData>) {
    anchors.write().mounted.insert(section, element);
}

/// Smoothly scroll the page so `section` is in view.
pub async fn scroll_to_section(anchors: Signal<SectionAnchors>, section: Section) {
    let Some(element) = anchors.peek().mounted.get(&section).cloned() else {
        tracing::debug!(anchor = section.anchor_id(), "section not mounted yet");
        return;
    };
    if let Err(err) = element.scroll_to(ScrollBehavior::Smooth).await {
        tracing::warn!(anchor = section.anchor_id(), error = ?err, "failed to scroll to section");
    }
}
