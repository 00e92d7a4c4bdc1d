use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};
use yew::NodeRef;

/// Smoothly scrolls the referenced element into view. No-op when the node is
/// not mounted.
pub fn scroll_into_view(node: &NodeRef) {
    if let Some(element) = node.cast::<Element>() {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
