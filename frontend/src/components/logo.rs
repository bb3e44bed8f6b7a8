use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or(40)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Stacked-ledger mark drawn inline so it scales with `size`.
#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    let size = props.size.to_string();

    html! {
        <svg
            class={props.class.clone()}
            width={size.clone()}
            height={size}
            viewBox="0 0 40 40"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        >
            <defs>
                <linearGradient id="logo-gradient" x1="0" y1="0" x2="40" y2="40" gradientUnits="userSpaceOnUse">
                    <stop offset="0" stop-color="#6366f1" />
                    <stop offset="1" stop-color="#2563eb" />
                </linearGradient>
            </defs>
            <rect width="40" height="40" rx="10" fill="url(#logo-gradient)" />
            <path d="M11 12h13a5 5 0 0 1 5 5v11H16a5 5 0 0 1-5-5V12z" fill="#ffffff" fill-opacity="0.9" />
            <path d="M15 18h10M15 22h10M15 26h6" stroke="#4f46e5" stroke-width="2" stroke-linecap="round" />
        </svg>
    }
}
