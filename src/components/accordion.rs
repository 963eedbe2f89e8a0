use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::observe::IntersectionWatcher;

/// A single expandable entry.
#[derive(Clone, PartialEq)]
pub struct AccordionItem {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct AccordionProps {
    pub items: Vec<AccordionItem>,
}

/// Which item stays open after a click on `clicked`. Clicking the item that
/// is already open leaves the whole group closed.
fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Class list for one item. `fade-in` stays once earned, so re-renders
/// from opening and closing keep the item revealed.
fn item_classes(is_open: bool, is_revealed: bool) -> Classes {
    classes!(
        "accordion-item",
        is_open.then(|| "active"),
        is_revealed.then(|| "fade-in"),
    )
}

/// Expandable panels with at most one item open at a time. The open index
/// lives here, in the parent, so siblings collapse on every change by
/// construction.
///
/// The viewport reveal is owned here too. The items' class attribute is
/// rendered from state, and Yew rewrites that attribute wholesale whenever
/// the open item changes, so a class added from outside the renderer would
/// be dropped on the first click. The watcher therefore reports the item's
/// index into state and the class falls out of rendering.
#[function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> Html {
    let open = use_state(|| None::<usize>);
    let revealed = use_state(HashSet::<usize>::new);
    let item_refs = use_memo(
        |count| (0..*count).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        props.items.len(),
    );

    {
        let revealed = revealed.clone();
        let item_refs = item_refs.clone();
        use_effect_with_deps(
            move |_| {
                let watcher = watch_items(&item_refs, revealed);
                move || drop(watcher)
            },
            props.items.len(),
        );
    }

    html! {
        <div class="accordion">
            { for props.items.iter().enumerate().map(|(index, item)| {
                let is_open = *open == Some(index);
                let is_revealed = revealed.contains(&index);
                let on_header_click = {
                    let open = open.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        open.set(toggle(*open, index));
                    })
                };
                html! {
                    <div
                        class={item_classes(is_open, is_revealed)}
                        ref={item_refs[index].clone()}
                    >
                        <button class="accordion-header" onclick={on_header_click}>
                            <span>{ item.title }</span>
                            <span class="accordion-icon">{ if is_open { "−" } else { "+" } }</span>
                        </button>
                        <div class="accordion-content">
                            <p>{ item.body }</p>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

/// Watches every rendered item and accumulates reveals into state. The
/// handler keeps its own master set because a state handle read inside a
/// closure created once at mount would be stale.
fn watch_items(
    item_refs: &[NodeRef],
    revealed: UseStateHandle<HashSet<usize>>,
) -> Option<IntersectionWatcher> {
    let lookup: Vec<(usize, Element)> = item_refs
        .iter()
        .enumerate()
        .filter_map(|(index, node_ref)| node_ref.cast::<Element>().map(|el| (index, el)))
        .collect();
    let elements: Vec<Element> = lookup.iter().map(|(_, el)| el.clone()).collect();
    let seen: Rc<RefCell<HashSet<usize>>> = Rc::new(RefCell::new(HashSet::new()));

    let watcher = IntersectionWatcher::new(
        config::ENTRANCE_THRESHOLD,
        Some(config::ENTRANCE_ROOT_MARGIN),
        move |target, _observer| {
            let index = lookup
                .iter()
                .find(|(_, element)| *element == target)
                .map(|(index, _)| *index);
            if let Some(index) = index {
                let mut seen_items = seen.borrow_mut();
                if seen_items.insert(index) {
                    let snapshot = (*seen_items).clone();
                    drop(seen_items);
                    revealed.set(snapshot);
                }
            }
        },
    )
    .map_err(|err| gloo_console::error!("accordion reveal watcher not installed:", err))
    .ok()?;
    for element in &elements {
        watcher.observe(element);
    }
    Some(watcher)
}

#[cfg(test)]
mod tests {
    use super::{item_classes, toggle};

    #[test]
    fn click_opens_a_closed_item() {
        assert_eq!(toggle(None, 2), Some(2));
    }

    #[test]
    fn click_moves_the_single_open_slot() {
        assert_eq!(toggle(Some(0), 3), Some(3));
    }

    #[test]
    fn second_click_on_the_open_item_closes_everything() {
        assert_eq!(toggle(Some(1), 1), None);
    }

    #[test]
    fn reveal_survives_opening_and_closing() {
        let mut open = None;
        for _ in 0..3 {
            open = toggle(open, 1);
            let classes = item_classes(open == Some(1), true);
            assert!(classes.contains("fade-in"));
        }
    }

    #[test]
    fn open_and_revealed_states_are_independent_classes() {
        let both = item_classes(true, true);
        assert!(both.contains("active"));
        assert!(both.contains("fade-in"));

        let neither = item_classes(false, false);
        assert!(!neither.contains("active"));
        assert!(!neither.contains("fade-in"));

        let revealed_only = item_classes(false, true);
        assert!(!revealed_only.contains("active"));
        assert!(revealed_only.contains("fade-in"));
    }
}
