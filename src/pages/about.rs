use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::gallery::BeforeAfterGallery;
use crate::config;
use crate::Route;

struct Stat {
    number: &'static str,
    label: &'static str,
    description: &'static str,
}

struct Value {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

#[function_component(About)]
pub fn about() -> Html {
    let stats = [
        Stat { number: "15+", label: "Years Experience", description: "Serving the GTA community" },
        Stat { number: "500+", label: "Happy Customers", description: "Residential & commercial" },
        Stat { number: "98%", label: "Customer Satisfaction", description: "Based on reviews" },
        Stat { number: "24/7", label: "Emergency Service", description: "Available when needed" },
    ];

    let values = [
        Value {
            icon: "♥",
            title: "Customer First",
            description: "Every decision we make starts with what's best for your home and your family's health.",
        },
        Value {
            icon: "◎",
            title: "Honest Pricing",
            description: "Transparent quotes with no hidden fees. The price we quote is the price you pay.",
        },
        Value {
            icon: "⚡",
            title: "Quality Work",
            description: "NADCA-certified technicians, professional equipment, and a job done right the first time.",
        },
    ];

    html! {
        <div class="about-page">
            <style>
            {r#".about-page .about-hero {
                background: linear-gradient(135deg, #1e3a8a, #1d4ed8);
                color: #fff;
                text-align: center;
                padding: 4rem 1rem;
            }
            .about-page .about-hero h1 { font-size: 2.6rem; margin-bottom: 0.75rem; }
            .about-page .about-hero p { color: #bfdbfe; font-size: 1.15rem; max-width: 640px; margin: 0 auto; }
            .about-stats {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                gap: 1.5rem;
                max-width: 1000px;
                margin: -2rem auto 0;
                padding: 0 1rem 3rem;
            }
            .about-stat {
                background: #fff;
                border-radius: 12px;
                box-shadow: 0 4px 16px rgba(17, 24, 39, 0.1);
                padding: 1.5rem;
                text-align: center;
            }
            .about-stat .number { color: #2563eb; font-size: 2rem; font-weight: 700; }
            .about-stat .label { color: #111827; font-weight: 600; }
            .about-stat .desc { color: #6b7280; font-size: 0.85rem; }
            .about-story { max-width: 720px; margin: 0 auto; padding: 2rem 1rem 3rem; }
            .about-story h2 { color: #111827; font-size: 1.8rem; margin-bottom: 1rem; }
            .about-story p { color: #374151; margin-bottom: 1rem; line-height: 1.7; }
            .about-values { background: #f9fafb; padding: 3rem 1rem; }
            .about-values h2 { text-align: center; color: #111827; font-size: 1.8rem; margin-bottom: 2rem; }
            .value-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                gap: 1.5rem;
                max-width: 1000px;
                margin: 0 auto;
            }
            .value-card {
                background: #fff;
                border-radius: 12px;
                padding: 1.75rem;
                text-align: center;
            }
            .value-card .value-icon {
                width: 52px;
                height: 52px;
                margin: 0 auto 1rem;
                border-radius: 50%;
                background: #eff6ff;
                color: #2563eb;
                font-size: 1.5rem;
                display: flex;
                align-items: center;
                justify-content: center;
            }
            .value-card h3 { color: #111827; margin-bottom: 0.5rem; }
            .value-card p { color: #4b5563; font-size: 0.95rem; }
            .about-cta { text-align: center; padding: 3rem 1rem; }
            .about-cta h2 { color: #111827; margin-bottom: 1rem; }
            .about-cta .cta-link {
                display: inline-block;
                background: #2563eb;
                color: #fff;
                padding: 1rem 2rem;
                border-radius: 8px;
                font-weight: 600;
                text-decoration: none;
            }
            .about-cta .cta-link:hover { background: #1d4ed8; }"#}
            </style>
            <section class="about-hero">
                <h1>{format!("About {}", config::COMPANY_NAME)}</h1>
                <p>
                    {"Family-owned and operated, improving indoor air quality across \
                      the Greater Toronto Area since 2009."}
                </p>
            </section>
            <div class="about-stats">
                {
                    stats.iter().map(|stat| html! {
                        <div class="about-stat">
                            <div class="number">{stat.number}</div>
                            <div class="label">{stat.label}</div>
                            <div class="desc">{stat.description}</div>
                        </div>
                    }).collect::<Html>()
                }
            </div>
            <section class="about-story">
                <h2>{"Our Story"}</h2>
                <p>
                    {"What started as a one-van operation has grown into one of the GTA's \
                      most trusted duct cleaning companies. We built our reputation the \
                      old-fashioned way: showing up on time, doing thorough work, and \
                      charging exactly what we quoted."}
                </p>
                <p>
                    {"Every technician on our team is NADCA certified, background checked, \
                      and trained on the latest equipment. We treat every home like our \
                      own, with drop cloths, boot covers, and a full walkthrough before \
                      and after every job."}
                </p>
            </section>
            <section class="about-values">
                <h2>{"What We Stand For"}</h2>
                <div class="value-grid">
                    {
                        values.iter().map(|value| html! {
                            <div class="value-card">
                                <div class="value-icon">{value.icon}</div>
                                <h3>{value.title}</h3>
                                <p>{value.description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>
            <BeforeAfterGallery />
            <section class="about-cta">
                <h2>{"Ready to breathe easier?"}</h2>
                <Link<Route> to={Route::Quote} classes="cta-link">
                    {"Get Your Free Quote"}
                </Link<Route>>
            </section>
        </div>
    }
}
