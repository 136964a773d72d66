use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::trust_badges::TrustBadges;
use crate::config;
use crate::Route;

struct Feature {
    title: &'static str,
    description: &'static str,
}

struct ProcessStep {
    step: u8,
    title: &'static str,
    description: &'static str,
}

#[function_component(ResidentialDuctCleaning)]
pub fn residential_duct_cleaning() -> Html {
    let features = [
        Feature {
            title: "Complete System Cleaning",
            description: "We clean your entire HVAC system including supply and return air ducts, registers, grilles, and diffusers.",
        },
        Feature {
            title: "HEPA Filtration",
            description: "Our powerful HEPA-filtered equipment captures 99.97% of particles as small as 0.3 microns.",
        },
        Feature {
            title: "Heating & Cooling Coils",
            description: "We clean heat exchangers, heating and cooling coils, and condensate drain pans.",
        },
        Feature {
            title: "Motor & Housing Cleaning",
            description: "Complete cleaning of fan motor, housing, and air handling unit housing.",
        },
    ];

    let process = [
        ProcessStep { step: 1, title: "Inspection", description: "Camera inspection of your ducts and a walkthrough of the whole system." },
        ProcessStep { step: 2, title: "Protection", description: "Drop cloths, boot covers and corner guards before any equipment comes in." },
        ProcessStep { step: 3, title: "Cleaning", description: "Negative-pressure vacuum collection with agitation tools at every vent." },
        ProcessStep { step: 4, title: "Verification", description: "After photos at every opening and a final system performance check." },
    ];

    html! {
        <div class="residential-page">
            <style>
            {r#".residential-page .residential-hero {
                background: linear-gradient(135deg, #1e3a8a, #1d4ed8);
                color: #fff;
                text-align: center;
                padding: 4rem 1rem;
            }
            .residential-page .residential-hero h1 { font-size: 2.6rem; margin-bottom: 0.75rem; }
            .residential-page .residential-hero p { color: #bfdbfe; font-size: 1.15rem; max-width: 640px; margin: 0 auto 1.5rem; }
            .residential-hero .hero-price { font-size: 1.3rem; font-weight: 700; color: #fb923c; margin-bottom: 1.5rem; }
            .residential-hero .hero-quote-link {
                display: inline-block;
                background: #f97316;
                color: #fff;
                padding: 1rem 2rem;
                border-radius: 8px;
                font-weight: 600;
                text-decoration: none;
            }
            .residential-hero .hero-quote-link:hover { background: #ea580c; }
            .residential-features {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                gap: 1.5rem;
                max-width: 1000px;
                margin: 0 auto;
                padding: 3rem 1rem;
            }
            .residential-feature {
                border: 1px solid #e5e7eb;
                border-radius: 12px;
                padding: 1.5rem;
            }
            .residential-feature h3 { color: #111827; font-size: 1.05rem; margin-bottom: 0.5rem; }
            .residential-feature p { color: #4b5563; font-size: 0.9rem; }
            .residential-process { background: #f9fafb; padding: 3rem 1rem; }
            .residential-process h2 { text-align: center; color: #111827; font-size: 1.8rem; margin-bottom: 2rem; }
            .process-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                gap: 1.5rem;
                max-width: 1000px;
                margin: 0 auto;
            }
            .process-step { text-align: center; }
            .process-step .step-circle {
                width: 48px;
                height: 48px;
                margin: 0 auto 1rem;
                border-radius: 50%;
                background: #2563eb;
                color: #fff;
                font-weight: 700;
                font-size: 1.2rem;
                display: flex;
                align-items: center;
                justify-content: center;
            }
            .process-step h3 { color: #111827; font-size: 1rem; margin-bottom: 0.4rem; }
            .process-step p { color: #4b5563; font-size: 0.9rem; }"#}
            </style>
            <section class="residential-hero">
                <h1>{"Residential Duct Cleaning"}</h1>
                <p>
                    {"A complete, camera-verified cleaning of your home's entire HVAC \
                      system, with before and after photos of every vent."}
                </p>
                <div class="hero-price">{"Starting at $299"}</div>
                <Link<Route> to={Route::Quote} classes="hero-quote-link">
                    {"Get Your Free Quote"}
                </Link<Route>>
            </section>
            <div class="residential-features">
                {
                    features.iter().map(|feature| html! {
                        <div class="residential-feature">
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>
            <section class="residential-process">
                <h2>{"How It Works"}</h2>
                <div class="process-grid">
                    {
                        process.iter().map(|step| html! {
                            <div class="process-step">
                                <div class="step-circle">{step.step}</div>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>
            <TrustBadges />
            <p style="text-align: center; padding: 0 1rem 3rem; color: #4b5563;">
                {"Questions about your home? "}
                <a href={config::PHONE_TEL} style="color: #2563eb; font-weight: 600; text-decoration: none;">
                    {format!("Call {}", config::PHONE_DISPLAY)}
                </a>
            </p>
        </div>
    }
}
