use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod pricing;
mod forms {
    pub mod contact;
    pub mod quote;
    pub mod record;
    pub mod submit;
}
mod components {
    pub mod calculator;
    pub mod gallery;
    pub mod hero;
    pub mod service_area;
    pub mod services_overview;
    pub mod testimonials;
    pub mod trust_badges;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod quote;
    pub mod residential;
    pub mod services;
}

use pages::{
    about::About,
    contact::Contact,
    home::Home,
    quote::Quote,
    residential::ResidentialDuctCleaning,
    services::Services,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/services/residential-duct-cleaning")]
    ResidentialDuctCleaning,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/quote")]
    Quote,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::ResidentialDuctCleaning => {
            info!("Rendering Residential Duct Cleaning page");
            html! { <ResidentialDuctCleaning /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::Quote => {
            info!("Rendering Quote page");
            html! { <Quote /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().expect("window available");
                let document = window.document().expect("document available");

                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Some(root) = document.document_element() {
                        is_scrolled.set(root.scroll_top() > 80);
                    }
                }) as Box<dyn FnMut()>);

                let listener_window = window.clone();
                listener_window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .ok();

                move || {
                    listener_window
                        .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                        .ok();
                }
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

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then_some("scrolled"))}>
            <div class="top-bar">
                <div class="top-bar-inner">
                    <span>
                        <a href={config::PHONE_TEL}>{config::PHONE_DISPLAY}</a>
                        {" • "}
                        {config::SERVICE_AREA_TAGLINE}
                    </span>
                    <span class="top-bar-note">{"Licensed & Insured • Free Estimates"}</span>
                </div>
            </div>
            <nav class="main-nav">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::COMPANY_NAME}
                </Link<Route>>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">{"Home"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Services} classes="nav-link">{"Services"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::About} classes="nav-link">{"About"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-link">{"Contact"}</Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Quote} classes="nav-quote-button">
                            {"Get Free Quote"}
                        </Link<Route>>
                    </div>
                </div>
            </nav>
        </header>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    const FOOTER_SERVICES: [&str; 5] = [
        "Duct Cleaning",
        "Dryer Vent Cleaning",
        "HVAC Maintenance",
        "Air Quality Testing",
        "Sanitization Services",
    ];
    const FOOTER_AREAS: [&str; 6] = [
        "Toronto",
        "Mississauga",
        "Brampton",
        "Markham",
        "Richmond Hill",
        "Vaughan",
    ];

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3 class="footer-brand">{config::COMPANY_NAME}</h3>
                    <p>
                        {"Professional duct cleaning services for residential and \
                          commercial properties. Licensed, insured, and committed to \
                          improving your indoor air quality."}
                    </p>
                </div>
                <div>
                    <h4>{"Services"}</h4>
                    <ul>
                        { FOOTER_SERVICES.iter().map(|s| html! { <li>{s}</li> }).collect::<Html>() }
                    </ul>
                </div>
                <div>
                    <h4>{"Service Areas"}</h4>
                    <ul>
                        { FOOTER_AREAS.iter().map(|a| html! { <li>{a}</li> }).collect::<Html>() }
                    </ul>
                </div>
                <div>
                    <h4>{"Contact"}</h4>
                    <ul>
                        <li><a href={config::PHONE_TEL}>{config::PHONE_DISPLAY}</a></li>
                        <li>{config::EMAIL}</li>
                        <li>{"Mon-Sat 8AM-8PM"}</li>
                        <li>{"Emergency service 24/7"}</li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                {format!("© 2024 {}. All rights reserved.", config::COMPANY_NAME)}
            </div>
        </footer>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>
            {r#"* { box-sizing: border-box; margin: 0; }
            body {
                font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto,
                    Helvetica, Arial, sans-serif;
                color: #111827;
            }
            .site-header { position: sticky; top: 0; z-index: 50; background: #fff; }
            .site-header.scrolled { box-shadow: 0 2px 12px rgba(17, 24, 39, 0.12); }
            .top-bar { background: #1e3a8a; color: #fff; font-size: 0.85rem; }
            .top-bar a { color: #fff; text-decoration: none; font-weight: 600; }
            .top-bar-inner {
                max-width: 1100px;
                margin: 0 auto;
                padding: 0.4rem 1rem;
                display: flex;
                justify-content: space-between;
            }
            @media (max-width: 640px) { .top-bar-note { display: none; } }
            .main-nav {
                max-width: 1100px;
                margin: 0 auto;
                padding: 1rem;
                display: flex;
                justify-content: space-between;
                align-items: center;
            }
            .nav-logo { font-size: 1.5rem; font-weight: 700; color: #1e3a8a; text-decoration: none; }
            .nav-links { display: flex; align-items: center; gap: 1.5rem; }
            .nav-link { color: #374151; text-decoration: none; font-weight: 500; }
            .nav-link:hover { color: #1d4ed8; }
            .nav-quote-button {
                background: #f97316;
                color: #fff;
                padding: 0.6rem 1.4rem;
                border-radius: 8px;
                font-weight: 600;
                text-decoration: none;
            }
            .nav-quote-button:hover { background: #ea580c; }
            .burger-menu { display: none; background: none; border: none; cursor: pointer; }
            .burger-menu span {
                display: block;
                width: 24px;
                height: 3px;
                background: #1e3a8a;
                margin: 5px 0;
                border-radius: 2px;
            }
            @media (max-width: 768px) {
                .burger-menu { display: block; }
                .nav-links {
                    display: none;
                    position: absolute;
                    top: 100%;
                    left: 0;
                    right: 0;
                    background: #fff;
                    flex-direction: column;
                    padding: 1rem;
                    box-shadow: 0 8px 16px rgba(17, 24, 39, 0.12);
                }
                .nav-links.mobile-menu-open { display: flex; }
            }

            /* shared form styling, used by both the quote and contact forms */
            .form-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                gap: 1rem;
            }
            .form-field label {
                display: block;
                font-size: 0.9rem;
                color: #4C6170;
                margin-bottom: 0.4rem;
            }
            .form-field input, .form-field select, .form-field textarea {
                width: 100%;
                padding: 0.75rem 1rem;
                border: 1px solid #d1d5db;
                border-radius: 8px;
                font-size: 1rem;
                color: #111;
            }
            .field-error { color: #dc2626; font-size: 0.85rem; margin-top: 0.3rem; }
            .option-tile {
                display: flex;
                align-items: center;
                gap: 0.75rem;
                padding: 1rem;
                border: 1px solid #d1d5db;
                border-radius: 8px;
                cursor: pointer;
            }
            .option-tile:hover { background: #f9fafb; }
            .option-tile .option-label { color: #003A66; font-weight: 500; }
            .option-tile .option-note { color: #1A2B34; font-size: 0.85rem; }
            .submit-row { margin-top: 2rem; }
            .submit-row .submit-note {
                text-align: center;
                color: #1A2B34;
                font-size: 0.9rem;
                margin-top: 1rem;
            }
            .button-primary {
                width: 100%;
                background: #2563eb;
                color: #fff;
                border: none;
                padding: 1rem 2rem;
                border-radius: 8px;
                font-size: 1.1rem;
                font-weight: 600;
                cursor: pointer;
                text-align: center;
                text-decoration: none;
                display: inline-flex;
                align-items: center;
                justify-content: center;
                gap: 0.5rem;
            }
            .button-primary:hover { background: #1d4ed8; }
            .button-primary:disabled { background: #93c5fd; cursor: not-allowed; }
            .button-secondary {
                background: #fff;
                border: 1px solid #d1d5db;
                color: #4C6170;
                padding: 1rem 2rem;
                border-radius: 8px;
                font-weight: 600;
                cursor: pointer;
            }
            .button-secondary:hover { background: #f9fafb; }
            .submit-error-banner {
                background: #fef2f2;
                border: 1px solid #fecaca;
                color: #b91c1c;
                border-radius: 8px;
                padding: 0.9rem 1.2rem;
                margin-bottom: 1.5rem;
            }
            .form-success-card {
                background: #fff;
                border-radius: 16px;
                box-shadow: 0 8px 32px rgba(0, 58, 102, 0.12);
                padding: 2.5rem;
                max-width: 560px;
                margin: 0 auto;
                text-align: center;
            }
            .form-success-card .success-check {
                width: 64px;
                height: 64px;
                margin: 0 auto 1.5rem;
                border-radius: 50%;
                background: #dcfce7;
                color: #16a34a;
                font-size: 2rem;
                display: flex;
                align-items: center;
                justify-content: center;
            }
            .form-success-card h3 { color: #003A66; margin-bottom: 1rem; }
            .form-success-card p { color: #1A2B34; margin-bottom: 1.5rem; }
            .success-actions { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
            .success-actions .button-primary { width: auto; }
            .loading-spinner {
                display: inline-block;
                width: 18px;
                height: 18px;
                border: 3px solid rgba(255,255,255,.4);
                border-radius: 50%;
                border-top-color: #fff;
                animation: spin 1s ease-in-out infinite;
            }
            @keyframes spin { to { transform: rotate(360deg); } }

            .site-footer { background: #111827; color: #d1d5db; }
            .footer-grid {
                max-width: 1100px;
                margin: 0 auto;
                padding: 3rem 1rem;
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                gap: 2rem;
            }
            .footer-brand { color: #fb923c; font-size: 1.4rem; margin-bottom: 0.75rem; }
            .footer-grid h4 { color: #fff; margin-bottom: 0.75rem; }
            .footer-grid p { font-size: 0.9rem; line-height: 1.6; }
            .footer-grid ul { list-style: none; padding: 0; margin: 0; }
            .footer-grid ul li { font-size: 0.9rem; padding: 0.2rem 0; }
            .footer-grid a { color: #d1d5db; text-decoration: none; }
            .footer-grid a:hover { color: #fff; }
            .footer-bottom {
                border-top: 1px solid #374151;
                text-align: center;
                padding: 1.25rem 1rem;
                font-size: 0.85rem;
                color: #9ca3af;
            }"#}
            </style>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
