use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use gloo_timers::callback::Timeout;

mod config;
mod catalog;
mod view_state;
mod submission;
mod content {
    pub mod blog;
    pub mod help;
    pub mod features;
    pub mod pricing;
    pub mod downloads;
    pub mod company;
    pub mod dashboard;
}
mod components {
    pub mod header;
    pub mod footer;
    pub mod loading_screen;
    pub mod logo;
    pub mod newsletter;
}
mod pages {
    pub mod home;
    pub mod features;
    pub mod pricing;
    pub mod download;
    pub mod about;
    pub mod contact;
    pub mod blog;
    pub mod help;
    pub mod signup;
    pub mod dashboard;
}

use components::{
    header::Header,
    footer::Footer,
    loading_screen::LoadingScreen,
};
use pages::{
    home::Home,
    features::Features,
    pricing::Pricing,
    download::Download,
    about::About,
    contact::Contact,
    blog::Blog,
    help::Help,
    signup::{signup::SignUp, login::Login},
    dashboard::Dashboard,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/features")]
    Features,
    #[at("/pricing")]
    Pricing,
    #[at("/download")]
    Download,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/blog")]
    Blog,
    #[at("/help")]
    Help,
    #[at("/signup")]
    SignUp,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Features => {
            info!("Rendering Features page");
            html! { <Features /> }
        },
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        },
        Route::Download => {
            info!("Rendering Download page");
            html! { <Download /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        },
        Route::Help => {
            info!("Rendering Help page");
            html! { <Help /> }
        },
        Route::SignUp => {
            info!("Rendering SignUp page");
            html! { <SignUp /> }
        },
        Route::Login => {
            info!("Rendering Login page");
            html! { <Login /> }
        },
        Route::Dashboard => {
            info!("Rendering Dashboard page");
            html! { <Dashboard /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <p>{"The page you are looking for does not exist."}</p>
                    <Link<Route> to={Route::Home} classes="btn btn-primary">
                        {"Back to home"}
                    </Link<Route>>
                </div>
            }
        },
    }
}

#[function_component]
fn App() -> Html {
    let is_loading = use_state(|| true);

    {
        let is_loading = is_loading.clone();
        use_effect_with_deps(move |_| {
            let timeout = Timeout::new(config::get_splash_duration_ms(), move || {
                is_loading.set(false);
            });
            move || drop(timeout)
        }, ());
    }

    html! {
        <>
            <style>{BASE_STYLES}</style>
            <LoadingScreen is_loading={*is_loading} />
            if !*is_loading {
                <BrowserRouter>
                    <div class="app-shell">
                        <Header />
                        <main class="app-main">
                            <Switch<Route> render={switch} />
                        </main>
                        <Footer />
                    </div>
                </BrowserRouter>
            }
        </>
    }
}

const BASE_STYLES: &str = r#"
* { box-sizing: border-box; }
body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    color: #111827;
    background: #ffffff;
}
a { color: inherit; }
.app-shell { display: flex; flex-direction: column; min-height: 100vh; }
.app-main { flex-grow: 1; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }
.page { min-height: 100vh; padding: 6rem 0 5rem; }
.page-gradient { background: linear-gradient(135deg, #eff6ff 0%, #eef2ff 50%, #ffffff 100%); }
.page-header { text-align: center; margin-bottom: 4rem; }
.page-header h1 { font-size: 2.5rem; font-weight: 800; margin: 0 0 1rem; }
.page-header p { font-size: 1.25rem; color: #4b5563; max-width: 42rem; margin: 0 auto; }
.pill {
    display: inline-block;
    padding: 0.5rem 1rem;
    margin-bottom: 2rem;
    border-radius: 9999px;
    color: #fff;
    font-size: 0.875rem;
    background: linear-gradient(90deg, #6366f1, #3b82f6);
}
.card {
    background: #fff;
    border-radius: 1rem;
    box-shadow: 0 10px 25px -5px rgba(0, 0, 0, 0.1);
    padding: 2rem;
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}
.card:hover { box-shadow: 0 20px 35px -10px rgba(0, 0, 0, 0.2); }
.grid { display: grid; gap: 2rem; }
.grid-2 { grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); }
.grid-3 { grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); }
.grid-4 { grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); }
.btn {
    display: inline-block;
    padding: 0.75rem 2rem;
    border: none;
    border-radius: 0.5rem;
    font-weight: 600;
    font-size: 1rem;
    cursor: pointer;
    text-decoration: none;
    transition: transform 0.2s ease, background 0.2s ease, opacity 0.2s ease;
}
.btn:hover:not(:disabled) { transform: scale(1.03); }
.btn:disabled { opacity: 0.7; cursor: not-allowed; }
.btn-primary { background: #2563eb; color: #fff; }
.btn-primary:hover { background: #1d4ed8; }
.btn-light { background: #fff; color: #2563eb; }
.btn-gradient { background: linear-gradient(90deg, #6366f1, #2563eb); color: #fff; }
.btn-block { width: 100%; }
.tabs { display: flex; justify-content: center; gap: 1rem; flex-wrap: wrap; }
.tab {
    padding: 0.5rem 1.5rem;
    border: none;
    border-radius: 9999px;
    font-size: 0.875rem;
    font-weight: 500;
    cursor: pointer;
    background: #fff;
    color: #4b5563;
    transition: all 0.3s ease;
}
.tab.active { background: #6366f1; color: #fff; box-shadow: 0 10px 15px -3px rgba(99, 102, 241, 0.4); }
.field { display: flex; flex-direction: column; gap: 0.5rem; margin-bottom: 1.25rem; }
.field label { font-size: 0.9rem; color: #374151; font-weight: 500; }
.field input, .field textarea, .field select, .search-input, .category-select {
    width: 100%;
    padding: 0.65rem 1rem;
    border: 1px solid #d1d5db;
    border-radius: 0.5rem;
    font-size: 1rem;
    font-family: inherit;
}
.field input:focus, .field textarea:focus, .search-input:focus, .category-select:focus {
    outline: none;
    border-color: #3b82f6;
    box-shadow: 0 0 0 3px rgba(59, 130, 246, 0.25);
}
.error-message { color: #ef4444; font-size: 0.9rem; margin-bottom: 1rem; }
.success-message { color: #16a34a; font-size: 0.9rem; margin-bottom: 1rem; }
.empty-state { text-align: center; color: #6b7280; padding: 3rem 0; }
.cta-banner {
    margin-top: 6rem;
    text-align: center;
    color: #fff;
    border-radius: 1rem;
    padding: 3rem;
    background: linear-gradient(90deg, #6366f1, #2563eb);
}
.cta-banner h2 { font-size: 2rem; margin: 0 0 1rem; }
.cta-banner p { color: #dbeafe; margin-bottom: 2rem; }
.spinner {
    display: inline-block;
    width: 18px;
    height: 18px;
    margin-right: 0.5rem;
    border: 2px solid rgba(255, 255, 255, 0.4);
    border-top-color: #fff;
    border-radius: 50%;
    vertical-align: middle;
    animation: spin 1s linear infinite;
}
.fade-in-up { animation: fadeInUp 0.6s ease-out both; }
.float { animation: float 2s ease-in-out infinite; }
.not-found { text-align: center; padding: 10rem 1.5rem; }
@keyframes spin { to { transform: rotate(360deg); } }
@keyframes fadeInUp { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: translateY(0); } }
@keyframes float { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-10px); } }
@media (max-width: 768px) {
    .page { padding: 5rem 0 3rem; }
    .page-header h1 { font-size: 2rem; }
    .cta-banner { padding: 2rem 1rem; }
}
"#;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
