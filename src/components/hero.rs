use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};
use yew::prelude::*;

use crate::config;
use crate::counter::{self, AnimationHandle, CounterTarget};
use crate::observe::IntersectionWatcher;
use crate::scroll;

/// Hero banner with the three headline stats. The stats render at their final
/// values and replay from zero once half of the section is on screen.
#[function_component(Hero)]
pub fn hero() -> Html {
    let section_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let animation: Rc<RefCell<Option<AnimationHandle>>> =
                    Rc::new(RefCell::new(None));
                let watcher = section_ref
                    .cast::<Element>()
                    .and_then(|section| watch_stats(&section, animation.clone()));
                move || {
                    drop(watcher);
                    animation.borrow_mut().take();
                }
            },
            (),
        );
    }

    let on_cta = Callback::from(|event: MouseEvent| {
        event.prevent_default();
        scroll::scroll_to_fragment("#proposta");
    });

    html! {
        <section id="inicio" class="hero" ref={section_ref}>
            <div class="hero-content">
                <h1>{"Proposta de Crescimento Digital"}</h1>
                <p class="hero-subtitle">
                    {"Estratégia de conteúdo e posicionamento para transformar o \
                      Instagram da clínica em um canal constante de novos pacientes."}
                </p>
                <div class="hero-stats">
                    <div class="hero-stat">
                        <span class="stat-number" data-target="17">{"17"}</span>
                        <span class="stat-label">{"Anos de Experiência"}</span>
                    </div>
                    <div class="hero-stat">
                        <span class="stat-number" data-target="800" data-prefix="R$ ">{"R$ 800"}</span>
                        <span class="stat-label">{"Investimento Mensal"}</span>
                    </div>
                    <div class="hero-stat">
                        <span class="stat-number" data-target="40" data-suffix="k">{"40k"}</span>
                        <span class="stat-label">{"Alcance Potencial"}</span>
                    </div>
                </div>
                <a href="#proposta" class="hero-cta" onclick={on_cta}>{"Ver Proposta"}</a>
            </div>
        </section>
    }
}

fn watch_stats(
    section: &Element,
    animation: Rc<RefCell<Option<AnimationHandle>>>,
) -> Option<IntersectionWatcher> {
    let document = web_sys::window()?.document()?;
    let watcher = IntersectionWatcher::new(
        config::HERO_STATS_THRESHOLD,
        None,
        move |target, observer| {
            *animation.borrow_mut() = Some(counter::animate_all(
                stat_targets(&document),
                config::COUNTER_DURATION_MS,
            ));
            observer.unobserve(&target);
        },
    )
    .map_err(|err| gloo_console::error!("hero stats watcher not installed:", err))
    .ok()?;
    watcher.observe(section);
    Some(watcher)
}

/// Pairs every `.stat-number` element with the target parsed from its
/// `data-target` / `data-prefix` / `data-suffix` attributes. Elements with a
/// missing or non-numeric target are skipped.
fn stat_targets(document: &Document) -> Vec<(Element, CounterTarget)> {
    let mut targets = Vec::new();
    if let Ok(nodes) = document.query_selector_all(".stat-number") {
        for index in 0..nodes.length() {
            if let Some(element) = nodes
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            {
                let value = element.get_attribute("data-target").unwrap_or_default();
                let prefix = element.get_attribute("data-prefix").unwrap_or_default();
                let suffix = element.get_attribute("data-suffix").unwrap_or_default();
                if let Some(target) = CounterTarget::from_data_attributes(&value, &prefix, &suffix) {
                    targets.push((element, target));
                }
            }
        }
    }
    targets
}
