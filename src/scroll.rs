//! Anchor navigation and the scroll-spy rule.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config;

/// Section ids and top offsets, in document order.
pub fn section_offsets(document: &Document) -> Vec<(String, f64)> {
    let mut sections = Vec::new();
    if let Ok(nodes) = document.query_selector_all("section[id]") {
        for index in 0..nodes.length() {
            if let Some(section) = nodes
                .item(index)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            {
                sections.push((section.id(), f64::from(section.offset_top())));
            }
        }
    }
    sections
}

/// The section the nav should highlight: the *last* one in document order
/// whose top minus `margin` has been scrolled past. `None` until the first
/// section qualifies, so nothing is highlighted before then.
pub fn current_section<'a>(
    sections: &'a [(String, f64)],
    scroll_y: f64,
    margin: f64,
) -> Option<&'a str> {
    let mut current = None;
    for (id, top) in sections {
        if scroll_y >= top - margin {
            current = Some(id.as_str());
        }
    }
    current
}

/// Smooth-scrolls to an in-page fragment such as `"#proposta"`, compensating
/// for the fixed header. Fragments without a matching element are ignored.
pub fn scroll_to_fragment(fragment: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Ok(Some(section)) = document.query_selector(fragment) {
                if let Ok(section) = section.dyn_into::<HtmlElement>() {
                    let top = f64::from(section.offset_top()) - config::HEADER_OFFSET_PX;
                    let options = ScrollToOptions::new();
                    options.set_top(top);
                    options.set_behavior(ScrollBehavior::Smooth);
                    window.scroll_to_with_scroll_to_options(&options);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::current_section;

    fn page() -> Vec<(String, f64)> {
        vec![
            ("inicio".to_string(), 0.0),
            ("analise".to_string(), 900.0),
            ("projecoes".to_string(), 2400.0),
        ]
    }

    #[test]
    fn nothing_active_before_the_first_threshold() {
        let sections = vec![("analise".to_string(), 900.0)];
        assert_eq!(current_section(&sections, 0.0, 200.0), None);
        assert_eq!(current_section(&sections, 699.0, 200.0), None);
    }

    #[test]
    fn threshold_is_inclusive() {
        let sections = page();
        assert_eq!(current_section(&sections, 700.0, 200.0), Some("analise"));
    }

    #[test]
    fn lowest_qualifying_section_wins() {
        let sections = page();
        assert_eq!(current_section(&sections, 500.0, 200.0), Some("inicio"));
        assert_eq!(current_section(&sections, 2300.0, 200.0), Some("projecoes"));
        assert_eq!(current_section(&sections, 99_999.0, 200.0), Some("projecoes"));
    }

    #[test]
    fn empty_page_has_no_current_section() {
        assert_eq!(current_section(&[], 1_000.0, 200.0), None);
    }
}
