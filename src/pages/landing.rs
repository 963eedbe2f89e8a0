use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, Window};
use yew::prelude::*;

use crate::components::accordion::{Accordion, AccordionItem};
use crate::components::hero::Hero;
use crate::components::projections::Projections;
use crate::config;
use crate::observe::{EventSubscription, IntersectionWatcher};

/// Everything below the fixed header: cards that fade in as they scroll into
/// view, hover lift on the interactive items, the hero parallax and the
/// body fade that hides the unstyled flash on load.
#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    {
        use_effect_with_deps(
            move |_| {
                let entrance = install_entrance_watcher();
                let parallax = web_sys::window().and_then(|window| install_parallax(&window));
                let fader = web_sys::window().and_then(|window| install_load_fader(&window));
                move || {
                    drop(entrance);
                    drop(parallax);
                    drop(fader);
                }
            },
            (),
        );
    }

    let lift_enter = Callback::from(|event: MouseEvent| set_lift(&event, true));
    let lift_leave = Callback::from(|event: MouseEvent| set_lift(&event, false));

    html! {
        <main>
            <Hero />

            <section id="analise" class="analysis">
                <div class="container">
                    <h2 class="section-title">{"Análise da Concorrência"}</h2>
                    <p class="section-intro">
                        {"Quatro perfis de psicologia da região, e onde cada um \
                          deixa espaço para a clínica se diferenciar."}
                    </p>
                    <Accordion items={competitor_items()} />
                </div>
            </section>

            <section id="conteudo" class="content-strategy">
                <div class="container">
                    <h2 class="section-title">{"Estratégia de Conteúdo"}</h2>
                    <div class="content-grid">
                        <div class="content-card">
                            <h3>{"Conteúdo Educativo"}</h3>
                            <p>{"Temas de saúde mental explicados em linguagem acessível, \
                                 posicionando a clínica como referência."}</p>
                        </div>
                        <div class="content-card">
                            <h3>{"Bastidores e Rotina"}</h3>
                            <p>{"O dia a dia do consultório para criar proximidade e \
                                 reduzir a barreira da primeira consulta."}</p>
                        </div>
                        <div class="content-card">
                            <h3>{"Prova Social"}</h3>
                            <p>{"Depoimentos autorizados e marcos da clínica contados \
                                 com cuidado ético."}</p>
                        </div>
                    </div>
                    <div class="content-formats">
                        <div class="content-item"
                            onmouseenter={lift_enter.clone()} onmouseleave={lift_leave.clone()}>
                            <span class="content-item-title">{"Reels semanais"}</span>
                            <p>{"2 por semana, roteirizados"}</p>
                        </div>
                        <div class="content-item"
                            onmouseenter={lift_enter.clone()} onmouseleave={lift_leave.clone()}>
                            <span class="content-item-title">{"Carrosséis"}</span>
                            <p>{"1 por semana, aprofundando um tema"}</p>
                        </div>
                        <div class="content-item"
                            onmouseenter={lift_enter.clone()} onmouseleave={lift_leave.clone()}>
                            <span class="content-item-title">{"Stories diários"}</span>
                            <p>{"Rotina, enquetes e caixas de perguntas"}</p>
                        </div>
                        <div class="content-item"
                            onmouseenter={lift_enter.clone()} onmouseleave={lift_leave.clone()}>
                            <span class="content-item-title">{"Lives mensais"}</span>
                            <p>{"Convidados e temas sugeridos pela audiência"}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section id="funil" class="funnel">
                <div class="container">
                    <h2 class="section-title">{"Funil de Atração"}</h2>
                    <div class="funnel-stages">
                        <div class="funnel-stage"
                            onmouseenter={lift_enter.clone()} onmouseleave={lift_leave.clone()}>
                            <span class="funnel-step">{"1"}</span>
                            <h3>{"Descoberta"}</h3>
                            <p>{"Reels e conteúdo educativo alcançam quem ainda não \
                                 conhece a clínica."}</p>
                        </div>
                        <div class="funnel-stage"
                            onmouseenter={lift_enter.clone()} onmouseleave={lift_leave.clone()}>
                            <span class="funnel-step">{"2"}</span>
                            <h3>{"Conexão"}</h3>
                            <p>{"Stories e bastidores transformam alcance em \
                                 seguidores engajados."}</p>
                        </div>
                        <div class="funnel-stage"
                            onmouseenter={lift_enter.clone()} onmouseleave={lift_leave.clone()}>
                            <span class="funnel-step">{"3"}</span>
                            <h3>{"Consideração"}</h3>
                            <p>{"Prova social e lives respondem às dúvidas de quem \
                                 está decidindo."}</p>
                        </div>
                        <div class="funnel-stage"
                            onmouseenter={lift_enter.clone()} onmouseleave={lift_leave.clone()}>
                            <span class="funnel-step">{"4"}</span>
                            <h3>{"Agendamento"}</h3>
                            <p>{"Chamadas claras levam ao WhatsApp da clínica para \
                                 marcar a primeira conversa."}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section id="diferenciais" class="differentials">
                <div class="container">
                    <h2 class="section-title">{"Diferenciais da Clínica"}</h2>
                    <div class="differentials-grid">
                        <div class="differential-item"
                            onmouseenter={lift_enter.clone()} onmouseleave={lift_leave.clone()}>
                            <h3>{"17 anos de experiência clínica"}</h3>
                            <p>{"Trajetória consolidada que nenhum perfil concorrente \
                                 da região comunica."}</p>
                        </div>
                        <div class="differential-item"
                            onmouseenter={lift_enter.clone()} onmouseleave={lift_leave.clone()}>
                            <h3>{"Atendimento humanizado"}</h3>
                            <p>{"Acolhimento desde a primeira mensagem, refletido no \
                                 tom de todo o conteúdo."}</p>
                        </div>
                        <div class="differential-item"
                            onmouseenter={lift_enter} onmouseleave={lift_leave}>
                            <h3>{"Conteúdo baseado em evidências"}</h3>
                            <p>{"Publicações revisadas pela equipe técnica, sem \
                                 promessas vazias."}</p>
                        </div>
                    </div>
                </div>
            </section>

            <Projections />

            <section id="proposta" class="proposal">
                <div class="container">
                    <h2 class="section-title">{"Proposta"}</h2>
                    <div class="proposal-grid">
                        <div class="proposal-card">
                            <h3>{"Gestão Completa"}</h3>
                            <p class="proposal-price">{"R$ 800"}<span>{"/mês"}</span></p>
                            <ul>
                                <li>{"Planejamento editorial mensal"}</li>
                                <li>{"8 Reels + 4 carrosséis por mês"}</li>
                                <li>{"Stories diários programados"}</li>
                                <li>{"Relatório de resultados mensal"}</li>
                            </ul>
                        </div>
                        <div class="proposal-card">
                            <h3>{"Como Começamos"}</h3>
                            <p>{"Reunião de alinhamento, ajuste da bio e identidade, \
                                 e o primeiro calendário de conteúdo em até 7 dias \
                                 após a aprovação."}</p>
                            <a class="proposal-cta" href="https://wa.me/5500000000000"
                                target="_blank" rel="noopener noreferrer">
                                {"Aprovar proposta"}
                            </a>
                        </div>
                    </div>
                </div>
            </section>

            <footer class="footer">
                <div class="container">
                    <p>{"Proposta de gestão de Instagram para a clínica • válida por 30 dias"}</p>
                </div>
            </footer>

            <style>
                {r#"
                    * { box-sizing: border-box; }

                    body {
                        margin: 0;
                        font-family: 'Segoe UI', system-ui, sans-serif;
                        color: #374151;
                        background: #f9fafb;
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }

                    body.loaded {
                        opacity: 1;
                    }

                    .container {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }

                    .header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 10;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                        transition: background 0.3s ease;
                    }

                    .nav {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        height: 80px;
                    }

                    .nav-logo {
                        font-weight: 700;
                        font-size: 1.1rem;
                        color: #111827;
                        text-decoration: none;
                    }

                    .nav-menu {
                        display: flex;
                        gap: 2rem;
                    }

                    .nav-link {
                        color: #374151;
                        text-decoration: none;
                        position: relative;
                        padding: 0.25rem 0;
                        transition: color 0.3s ease;
                    }

                    .nav-link::after {
                        content: "";
                        position: absolute;
                        left: 0;
                        bottom: 0;
                        height: 2px;
                        width: 0;
                        background: #2563eb;
                        transition: width 0.3s ease;
                    }

                    .nav-link.active {
                        color: #2563eb !important;
                    }

                    .nav-link.active::after {
                        width: 100% !important;
                    }

                    .nav-toggle {
                        display: none;
                        background: none;
                        border: none;
                        padding: 0.5rem;
                        cursor: pointer;
                    }

                    .nav-toggle span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        background: #111827;
                        margin: 5px 0;
                        transition: transform 0.3s ease;
                    }

                    @media (max-width: 768px) {
                        .nav-toggle { display: block; }

                        .nav-menu {
                            position: fixed;
                            top: 80px;
                            right: -100%;
                            flex-direction: column;
                            gap: 1.5rem;
                            background: #ffffff;
                            width: 70%;
                            height: 100vh;
                            padding: 2rem;
                            box-shadow: -2px 0 8px rgba(0, 0, 0, 0.1);
                            transition: right 0.3s ease;
                        }

                        .nav-menu.active { right: 0; }
                    }

                    section { padding: 5rem 0; }

                    .section-title {
                        font-size: 2rem;
                        color: #111827;
                        text-align: center;
                        margin: 0 0 1rem;
                    }

                    .section-intro {
                        text-align: center;
                        max-width: 640px;
                        margin: 0 auto 2.5rem;
                    }

                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        padding-top: 80px;
                        background: linear-gradient(160deg, #eff6ff 0%, #f9fafb 60%);
                    }

                    .hero h1 {
                        font-size: 2.75rem;
                        color: #111827;
                        margin: 0 0 1rem;
                    }

                    .hero-subtitle {
                        font-size: 1.15rem;
                        max-width: 560px;
                    }

                    .hero-content {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }

                    .hero-stats {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 3rem;
                        margin: 2.5rem 0;
                    }

                    .stat-number {
                        display: block;
                        font-size: 2.5rem;
                        font-weight: 700;
                        color: #2563eb;
                    }

                    .hero-cta, .proposal-cta {
                        display: inline-block;
                        background: #2563eb;
                        color: #ffffff;
                        padding: 0.85rem 2rem;
                        border-radius: 8px;
                        text-decoration: none;
                        font-weight: 600;
                    }

                    .content-grid, .differentials-grid, .projections-grid,
                    .proposal-grid, .funnel-stages {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 1.5rem;
                    }

                    .content-card, .funnel-stage, .differential-item,
                    .proposal-card, .projection-card, .content-item {
                        background: #ffffff;
                        border-radius: 12px;
                        padding: 1.75rem;
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
                    }

                    /* Hidden until the viewport watcher adds .fade-in */
                    .content-card, .funnel-stage, .differential-item,
                    .proposal-card, .accordion-item {
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }

                    .fade-in {
                        opacity: 1 !important;
                        transform: translateY(0) !important;
                    }

                    .content-formats {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 1rem;
                        margin-top: 2rem;
                    }

                    .content-item-title {
                        font-weight: 600;
                        color: #111827;
                    }

                    .funnel-step {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 2.25rem;
                        height: 2.25rem;
                        border-radius: 50%;
                        background: #2563eb;
                        color: #ffffff;
                        font-weight: 700;
                    }

                    .accordion { max-width: 720px; margin: 0 auto; }

                    .accordion-item {
                        background: #ffffff;
                        border-radius: 12px;
                        margin-bottom: 0.75rem;
                        overflow: hidden;
                    }

                    .accordion-header {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1.25rem 1.5rem;
                        background: none;
                        border: none;
                        font-size: 1rem;
                        font-weight: 600;
                        color: #111827;
                        cursor: pointer;
                    }

                    .accordion-icon { color: #2563eb; font-size: 1.25rem; }

                    .accordion-content {
                        max-height: 0;
                        overflow: hidden;
                        transition: max-height 0.3s ease;
                    }

                    .accordion-item.active .accordion-content { max-height: 300px; }

                    .accordion-content p { padding: 0 1.5rem 1.25rem; margin: 0; }

                    .projection-number {
                        display: block;
                        font-size: 2rem;
                        font-weight: 700;
                        color: #2563eb;
                    }

                    .chart-container {
                        margin-top: 3rem;
                        background: #ffffff;
                        border-radius: 12px;
                        padding: 1.5rem;
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
                    }

                    .proposal-price {
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: #2563eb;
                        margin: 0.5rem 0 1rem;
                    }

                    .proposal-price span {
                        font-size: 1rem;
                        font-weight: 400;
                        color: #374151;
                    }

                    .proposal-card ul { padding-left: 1.25rem; }
                    .proposal-card li { margin-bottom: 0.5rem; }

                    .footer {
                        background: #111827;
                        color: #9ca3af;
                        padding: 2.5rem 0;
                        text-align: center;
                    }
                "#}
            </style>
        </main>
    }
}

fn competitor_items() -> Vec<AccordionItem> {
    vec![
        AccordionItem {
            title: "@psicologia.na.pratica",
            body: "Publica diariamente e domina os Reels da região, mas o conteúdo \
                   é genérico e impessoal. Espaço claro para diferenciação pelo tom \
                   acolhedor.",
        },
        AccordionItem {
            title: "@clinicamenteleve",
            body: "Identidade visual forte e parcerias locais. O engajamento se \
                   concentra em depoimentos; quase não há conteúdo educativo.",
        },
        AccordionItem {
            title: "@terapia.comproposito",
            body: "Cresceu com tráfego pago, mas converte pouco: bio confusa e sem \
                   chamada clara para agendamento.",
        },
        AccordionItem {
            title: "@psiquepontocom",
            body: "Perfil grande e consolidado, porém distante do público. \
                   Comentários raramente respondidos.",
        },
    ]
}

// Cards whose class attribute never changes across renders, so the added
// token is never rewritten away. Accordion items re-render their class on
// every toggle and run their own reveal watcher instead.
const ENTRANCE_SELECTOR: &str =
    ".content-card, .funnel-stage, .differential-item, .proposal-card";

/// Starts watching every animated card. A card gets a persistent `fade-in`
/// class the first time it reaches the viewport; later passes re-add the
/// class, which is a no-op.
fn install_entrance_watcher() -> Option<IntersectionWatcher> {
    let document = web_sys::window()?.document()?;
    let watcher = IntersectionWatcher::new(
        config::ENTRANCE_THRESHOLD,
        Some(config::ENTRANCE_ROOT_MARGIN),
        |target, _observer| {
            let _ = target.class_list().add_1("fade-in");
        },
    )
    .map_err(|err| gloo_console::error!("entrance watcher not installed:", err))
    .ok()?;
    if let Ok(nodes) = document.query_selector_all(ENTRANCE_SELECTOR) {
        for index in 0..nodes.length() {
            if let Some(element) = nodes
                .item(index)
                .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
            {
                watcher.observe(&element);
            }
        }
    }
    Some(watcher)
}

fn install_parallax(window: &Window) -> Option<EventSubscription> {
    let window_handle = window.clone();
    EventSubscription::subscribe(window.as_ref(), "scroll", move || {
        if let Some(document) = window_handle.document() {
            if let Ok(Some(hero)) = document.query_selector(".hero") {
                if let Ok(hero) = hero.dyn_into::<HtmlElement>() {
                    let scrolled = window_handle.page_y_offset().unwrap_or(0.0);
                    let offset = scrolled * config::PARALLAX_RATE;
                    let _ = hero
                        .style()
                        .set_property("transform", &format!("translateY({}px)", offset));
                }
            }
        }
    })
    .map_err(|err| gloo_console::error!("parallax listener not installed:", err))
    .ok()
}

/// Reveals the body on the window load event. The app can mount after that
/// event has already fired, in which case the class is added right away.
fn install_load_fader(window: &Window) -> Option<EventSubscription> {
    let document = window.document()?;
    if document.ready_state() == "complete" {
        mark_loaded(&document);
        return None;
    }
    let document_handle = document.clone();
    EventSubscription::subscribe(window.as_ref(), "load", move || {
        mark_loaded(&document_handle);
    })
    .map_err(|err| gloo_console::error!("load listener not installed:", err))
    .ok()
}

fn mark_loaded(document: &Document) {
    if let Some(body) = document.body() {
        let _ = body.class_list().add_1("loaded");
    }
}

/// Transform applied to content, differential and funnel cards while the
/// pointer is over them.
fn lift_transform(lifted: bool) -> String {
    if lifted {
        format!("translateY(-{}px)", config::HOVER_LIFT_PX)
    } else {
        "translateY(0)".to_string()
    }
}

fn set_lift(event: &MouseEvent, lifted: bool) {
    if let Some(card) = event
        .target()
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
    {
        let style = card.style();
        let _ = style.set_property("transition", "transform 0.3s ease");
        let _ = style.set_property("transform", &lift_transform(lifted));
    }
}

#[cfg(test)]
mod tests {
    use super::lift_transform;

    #[test]
    fn hover_lifts_cards_up_and_sets_them_back_down() {
        assert_eq!(lift_transform(true), "translateY(-5px)");
        assert_eq!(lift_transform(false), "translateY(0)");
    }
}
