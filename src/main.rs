use log::{info, Level};
use web_sys::MouseEvent;
use yew::prelude::*;

mod config;
mod counter;
mod observe;
mod scroll;

mod components {
    pub mod accordion;
    pub mod chart;
    pub mod hero;
    pub mod projections;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

/// Fragment and label for each section link in the header, in page order.
const NAV_LINKS: [(&str, &str); 7] = [
    ("#inicio", "Início"),
    ("#analise", "Análise"),
    ("#conteudo", "Conteúdo"),
    ("#funil", "Funil"),
    ("#diferenciais", "Diferenciais"),
    ("#projecoes", "Projeções"),
    ("#proposta", "Proposta"),
];

/// Fixed header: logo, section links and the mobile burger menu.
///
/// One scroll listener drives both scroll-bound states, the background
/// shade past the shade threshold and the highlighted section link. Links
/// smooth-scroll to their section and close the mobile menu.
#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let active_section = use_state(|| None::<String>);

    {
        let is_scrolled = is_scrolled.clone();
        let active_section = active_section.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = web_sys::window().and_then(|window| {
                    let window_handle = window.clone();
                    observe::EventSubscription::subscribe(window.as_ref(), "scroll", move || {
                        let scroll_y = window_handle.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll_y > config::HEADER_SHADE_AT_PX);
                        if let Some(document) = window_handle.document() {
                            let sections = scroll::section_offsets(&document);
                            let current = scroll::current_section(
                                &sections,
                                scroll_y,
                                config::SCROLL_SPY_MARGIN_PX,
                            )
                            .map(str::to_string);
                            active_section.set(current);
                        }
                    })
                    .map_err(|err| gloo_console::error!("nav scroll listener not installed:", err))
                    .ok()
                });
                move || drop(subscription)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let logo_click = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll::scroll_to_fragment("#inicio");
            menu_open.set(false);
        })
    };

    let header_style = if *is_scrolled {
        config::HEADER_BG_SCROLLED
    } else {
        config::HEADER_BG_TOP
    };

    html! {
        <header class="header" style={header_style}>
            <nav class="nav container">
                <a href="#inicio" class="nav-logo" onclick={logo_click}>
                    {"Link Psicologia"}
                </a>
                <button
                    id="nav-toggle"
                    class={classes!("nav-toggle", (*menu_open).then(|| "active"))}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div id="nav-menu" class={classes!("nav-menu", (*menu_open).then(|| "active"))}>
                    { for NAV_LINKS.iter().map(|&(fragment, label)| {
                        let on_click = {
                            let menu_open = menu_open.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                scroll::scroll_to_fragment(fragment);
                                menu_open.set(false);
                            })
                        };
                        let is_active =
                            fragment.strip_prefix('#') == active_section.as_deref();
                        html! {
                            <a
                                href={fragment}
                                class={classes!("nav-link", is_active.then(|| "active"))}
                                onclick={on_click}
                            >
                                { label }
                            </a>
                        }
                    }) }
                </div>
            </nav>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
