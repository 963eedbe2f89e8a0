use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};
use yew::prelude::*;

use crate::components::chart::ProjectionChart;
use crate::config;
use crate::counter::{self, AnimationHandle, CounterTarget};
use crate::observe::IntersectionWatcher;

/// Six-month projections: the animated range figures plus the chart.
///
/// The figures replay from zero when the section scrolls into view. A timed
/// fallback fires them anyway if the section never intersects, so the numbers
/// are never stuck at zero; whichever path runs first claims the one-shot.
#[function_component(Projections)]
pub fn projections() -> Html {
    let section_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let played = Rc::new(Cell::new(false));
                let animation: Rc<RefCell<Option<AnimationHandle>>> =
                    Rc::new(RefCell::new(None));

                let watcher = section_ref.cast::<Element>().and_then(|section| {
                    watch_projections(&section, played.clone(), animation.clone())
                });

                {
                    let played = played.clone();
                    let animation = animation.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(config::PROJECTIONS_FALLBACK_MS).await;
                        if !claim(&played) {
                            return;
                        }
                        if let Some(document) =
                            web_sys::window().and_then(|window| window.document())
                        {
                            *animation.borrow_mut() = Some(animate_projections(&document));
                        }
                    });
                }

                move || {
                    // Marks the one-shot as spent so the pending fallback
                    // cannot animate a dismounted section.
                    played.set(true);
                    drop(watcher);
                    animation.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <section id="projecoes" class="projections" ref={section_ref}>
            <div class="container">
                <h2 class="section-title">{"Projeções para 6 Meses"}</h2>
                <div class="projections-grid">
                    <div class="projection-card">
                        <span class="projection-number">{"20k - 40k"}</span>
                        <span class="projection-label">{"Alcance mensal estimado"}</span>
                    </div>
                    <div class="projection-card">
                        <span class="projection-number">{"9 - 56"}</span>
                        <span class="projection-label">{"Leads qualificados por mês"}</span>
                    </div>
                    <div class="projection-card">
                        <span class="projection-number">{"5%"}</span>
                        <span class="projection-label">{"Taxa média de conversão"}</span>
                    </div>
                </div>
                <ProjectionChart />
            </div>
        </section>
    }
}

/// First caller wins the one-shot; everyone after sees `false`.
fn claim(played: &Cell<bool>) -> bool {
    !played.replace(true)
}

fn watch_projections(
    section: &Element,
    played: Rc<Cell<bool>>,
    animation: Rc<RefCell<Option<AnimationHandle>>>,
) -> Option<IntersectionWatcher> {
    let document = web_sys::window()?.document()?;
    let watcher = IntersectionWatcher::new(
        config::PROJECTIONS_THRESHOLD,
        None,
        move |target, observer| {
            if claim(&played) {
                *animation.borrow_mut() = Some(animate_projections(&document));
            }
            observer.unobserve(&target);
        },
    )
    .map_err(|err| gloo_console::error!("projections watcher not installed:", err))
    .ok()?;
    watcher.observe(section);
    Some(watcher)
}

fn animate_projections(document: &Document) -> AnimationHandle {
    counter::animate_all(projection_targets(document), config::COUNTER_DURATION_MS)
}

/// Pairs every `.projection-number` element with the target parsed from its
/// current text. Non-numeric figures such as "em breve" are left untouched.
fn projection_targets(document: &Document) -> Vec<(Element, CounterTarget)> {
    let mut targets = Vec::new();
    if let Ok(nodes) = document.query_selector_all(".projection-number") {
        for index in 0..nodes.length() {
            if let Some(element) = nodes
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            {
                let text = element.text_content().unwrap_or_default();
                if let Some(target) = CounterTarget::from_text(&text) {
                    targets.push((element, target));
                }
            }
        }
    }
    targets
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::claim;

    #[test]
    fn only_the_first_claim_wins() {
        let played = Cell::new(false);
        assert!(claim(&played));
        assert!(!claim(&played));
        assert!(!claim(&played));
    }
}
