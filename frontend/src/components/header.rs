use yew::prelude::*;
use yew_router::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use log::warn;

use crate::Route;
use crate::components::logo::Logo;
use crate::content::company::PRODUCT_NAME;

const NAV_LINKS: &[(&str, Route)] = &[
    ("Home", Route::Home),
    ("Features", Route::Features),
    ("Pricing", Route::Pricing),
    ("Download", Route::Download),
    ("About", Route::About),
    ("Contact", Route::Contact),
];

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let current_route = use_route::<Route>();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let offset = window
                        .as_ref()
                        .and_then(|w| w.scroll_y().ok())
                        .unwrap_or(0.0);
                    is_scrolled.set(offset > 0.0);
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                if window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    warn!("Could not attach scroll listener");
                }
            }

            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>{r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 1000;
                    background: transparent;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(10px);
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.6rem;
                    font-size: 1.4rem;
                    font-weight: 800;
                    text-decoration: none;
                    color: #1e3a8a;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.75rem;
                }
                .nav-link {
                    color: #374151;
                    text-decoration: none;
                    font-weight: 500;
                    transition: color 0.2s ease;
                }
                .nav-link:hover, .nav-link.active {
                    color: #2563eb;
                }
                .nav-actions {
                    display: flex;
                    gap: 0.75rem;
                }
                .nav-actions .btn {
                    padding: 0.5rem 1.25rem;
                }
                .nav-login {
                    color: #2563eb;
                    border: 1px solid #2563eb;
                    background: transparent;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #1f2937;
                }
                @media (max-width: 900px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        align-items: flex-start;
                        padding: 1.5rem;
                        background: #ffffff;
                        box-shadow: 0 8px 16px rgba(0, 0, 0, 0.1);
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                }
            "#}</style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <Logo size={36} />
                    {PRODUCT_NAME}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        NAV_LINKS.iter().map(|(label, route)| {
                            let active = current_route.as_ref() == Some(route);
                            html! {
                                <div onclick={close_menu.clone()}>
                                    <Link<Route>
                                        to={route.clone()}
                                        classes={classes!("nav-link", active.then(|| "active"))}
                                    >
                                        {*label}
                                    </Link<Route>>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                    <div class="nav-actions" onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Login} classes="btn nav-login">
                            {"Login"}
                        </Link<Route>>
                        <Link<Route> to={Route::SignUp} classes="btn btn-primary">
                            {"Get Started"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}
