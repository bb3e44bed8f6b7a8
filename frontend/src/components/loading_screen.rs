use yew::prelude::*;

use crate::components::logo::Logo;
use crate::content::company::{PRODUCT_NAME, TAGLINE};

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    pub is_loading: bool,
}

/// Full-screen splash shown while the app boots.
#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    if !props.is_loading {
        return html! {};
    }

    html! {
        <div class="loading-screen">
            <style>{r#"
                .loading-screen {
                    position: fixed;
                    inset: 0;
                    z-index: 2000;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    background: linear-gradient(135deg, #1e3a8a, #4f46e5);
                    color: #ffffff;
                }
                .loading-screen h1 {
                    margin: 0;
                    font-size: 2.25rem;
                }
                .loading-screen p {
                    margin: 0;
                    color: #c7d2fe;
                }
                .loading-bar {
                    width: 180px;
                    height: 4px;
                    border-radius: 2px;
                    overflow: hidden;
                    background: rgba(255, 255, 255, 0.2);
                }
                .loading-bar span {
                    display: block;
                    width: 40%;
                    height: 100%;
                    background: #ffffff;
                    animation: loading-slide 1.2s ease-in-out infinite;
                }
                @keyframes loading-slide {
                    from { transform: translateX(-100%); }
                    to { transform: translateX(250%); }
                }
            "#}</style>
            <div class="float">
                <Logo size={72} />
            </div>
            <h1>{PRODUCT_NAME}</h1>
            <p>{TAGLINE}</p>
            <div class="loading-bar"><span></span></div>
        </div>
    }
}
