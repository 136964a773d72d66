use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

const BENEFITS: [&str; 4] = [
    "Licensed & Insured Professionals",
    "Same-Day Service Available",
    "Free Estimates & Consultations",
    "Satisfaction Guaranteed",
];

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    html! {
        <section class="hero-section">
            <style>
            {r#".hero-section {
                background: linear-gradient(135deg, #1e3a8a, #1e40af, #1d4ed8);
                color: #fff;
                padding: 5rem 1rem;
            }
            .hero-inner {
                max-width: 1100px;
                margin: 0 auto;
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 3rem;
                align-items: center;
            }
            @media (max-width: 860px) { .hero-inner { grid-template-columns: 1fr; } }
            .hero-copy h1 {
                font-size: 3rem;
                line-height: 1.15;
                margin-bottom: 1rem;
            }
            .hero-copy h1 .accent { color: #fb923c; display: block; }
            .hero-copy .hero-sub {
                font-size: 1.3rem;
                color: #bfdbfe;
                margin-bottom: 2rem;
            }
            .hero-benefits {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 0.6rem;
                margin-bottom: 2rem;
            }
            @media (max-width: 640px) { .hero-benefits { grid-template-columns: 1fr; } }
            .hero-benefits .benefit {
                display: flex;
                align-items: center;
                gap: 0.5rem;
                color: #bfdbfe;
            }
            .hero-benefits .benefit .tick { color: #4ade80; }
            .hero-ctas { display: flex; gap: 1rem; flex-wrap: wrap; }
            .hero-cta-primary {
                background: #f97316;
                color: #fff;
                padding: 1rem 2rem;
                border-radius: 8px;
                font-size: 1.1rem;
                font-weight: 600;
                text-decoration: none;
            }
            .hero-cta-primary:hover { background: #ea580c; }
            .hero-cta-phone {
                border: 2px solid #fff;
                color: #fff;
                padding: 1rem 2rem;
                border-radius: 8px;
                font-size: 1.1rem;
                font-weight: 600;
                text-decoration: none;
            }
            .hero-cta-phone:hover { background: #fff; color: #1e3a8a; }
            .hero-rating-card {
                background: rgba(255, 255, 255, 0.1);
                border: 1px solid rgba(255, 255, 255, 0.2);
                border-radius: 16px;
                padding: 2rem;
                text-align: center;
            }
            .hero-rating-card .stars { color: #facc15; font-size: 1.5rem; letter-spacing: 0.2rem; }
            .hero-rating-card .score { font-size: 2.5rem; font-weight: 700; margin: 0.5rem 0; }
            .hero-rating-card .caption { color: #bfdbfe; }"#}
            </style>
            <div class="hero-inner">
                <div class="hero-copy">
                    <h1>
                        {"Professional"}
                        <span class="accent">{"Duct Cleaning"}</span>
                        {"Services"}
                    </h1>
                    <p class="hero-sub">
                        {"Improve your indoor air quality with our certified technicians. \
                          Same-day service available in the Greater Toronto Area."}
                    </p>
                    <div class="hero-benefits">
                        {
                            BENEFITS.iter().map(|benefit| html! {
                                <div class="benefit">
                                    <span class="tick">{"✓"}</span>
                                    <span>{benefit}</span>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="hero-ctas">
                        <Link<Route> to={Route::Quote} classes="hero-cta-primary">
                            {"Get Free Quote"}
                        </Link<Route>>
                        <a href={config::PHONE_TEL} class="hero-cta-phone">
                            {format!("Call {}", config::PHONE_DISPLAY)}
                        </a>
                    </div>
                </div>
                <div class="hero-rating-card">
                    <div class="stars">{"★★★★★"}</div>
                    <div class="score">{"4.9/5"}</div>
                    <div class="caption">{"Rated by 500+ customers across the GTA"}</div>
                </div>
            </div>
        </section>
    }
}
