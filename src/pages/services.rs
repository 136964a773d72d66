use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

struct ServiceDetail {
    title: &'static str,
    description: &'static str,
    long_description: &'static str,
    features: [&'static str; 6],
    benefits: [&'static str; 4],
    starting_price: &'static str,
    duration: &'static str,
    guarantee: &'static str,
    popular: bool,
    route: Option<Route>,
}

#[function_component(Services)]
pub fn services() -> Html {
    let services = [
        ServiceDetail {
            title: "Residential Duct Cleaning",
            description: "Complete air duct cleaning for homes and apartments to improve indoor air quality.",
            long_description: "A comprehensive cleaning of your entire HVAC system, including supply and return air ducts, registers, grilles, diffusers, heat exchangers, coils, drain pans, fan motor and housing, and the air handling unit housing.",
            features: [
                "Complete system inspection",
                "HEPA filtration cleaning",
                "Before/after photos",
                "Sanitization treatment",
                "Filter replacement",
                "System performance check",
            ],
            benefits: [
                "Improved indoor air quality",
                "Reduced allergens and dust",
                "Better HVAC efficiency",
                "Cleaner living environment",
            ],
            starting_price: "$299",
            duration: "2-4 hours",
            guarantee: "2-year warranty",
            popular: true,
            route: Some(Route::ResidentialDuctCleaning),
        },
        ServiceDetail {
            title: "Commercial Duct Cleaning",
            description: "Professional duct cleaning services for offices, restaurants, and commercial buildings.",
            long_description: "Large-scale HVAC cleaning scheduled around your business hours, with compliance documentation for property managers and minimal disruption to tenants and staff.",
            features: [
                "Large-scale cleaning",
                "After-hours scheduling",
                "Compliance reports",
                "Rooftop unit service",
                "Multi-zone systems",
                "Maintenance contracts",
            ],
            benefits: [
                "Healthier workplace air",
                "Code compliance",
                "Lower energy bills",
                "Fewer tenant complaints",
            ],
            starting_price: "$599",
            duration: "4-8 hours",
            guarantee: "1-year warranty",
            popular: false,
            route: None,
        },
        ServiceDetail {
            title: "Dryer Vent Cleaning",
            description: "Professional dryer vent cleaning to prevent fires and improve efficiency.",
            long_description: "Full-length vent cleaning from the dryer connection to the exterior termination, removing lint buildup that causes house fires and long dry times.",
            features: [
                "Full vent line cleaning",
                "Lint trap service",
                "Airflow testing",
                "Bird guard installation",
                "Safety inspection",
                "Same-day service",
            ],
            benefits: [
                "Fire risk eliminated",
                "Faster dry times",
                "Lower energy use",
                "Longer dryer life",
            ],
            starting_price: "$149",
            duration: "1-2 hours",
            guarantee: "1-year warranty",
            popular: false,
            route: None,
        },
        ServiceDetail {
            title: "Sanitization Services",
            description: "Advanced sanitization and disinfection of your HVAC system.",
            long_description: "EPA-approved antimicrobial treatment applied throughout the duct system after cleaning, eliminating mold, bacteria, viruses and lingering odors at the source.",
            features: [
                "EPA-approved products",
                "Fogging application",
                "Mold remediation",
                "Odor elimination",
                "Allergen treatment",
                "Safe for pets & kids",
            ],
            benefits: [
                "Virus elimination",
                "Allergen reduction",
                "Fresher-smelling home",
                "Healthier air supply",
            ],
            starting_price: "$199",
            duration: "1-2 hours",
            guarantee: "6-month guarantee",
            popular: false,
            route: None,
        },
    ];

    html! {
        <div class="services-page">
            <style>
            {r#".services-page .services-hero {
                background: linear-gradient(135deg, #1e3a8a, #1d4ed8);
                color: #fff;
                text-align: center;
                padding: 4rem 1rem;
            }
            .services-page .services-hero h1 { font-size: 2.6rem; margin-bottom: 0.75rem; }
            .services-page .services-hero p { color: #bfdbfe; font-size: 1.15rem; max-width: 640px; margin: 0 auto; }
            .service-detail-list { max-width: 960px; margin: 0 auto; padding: 3rem 1rem; }
            .service-detail-card {
                background: #fff;
                border: 1px solid #e5e7eb;
                border-radius: 16px;
                padding: 2rem;
                margin-bottom: 2rem;
                position: relative;
            }
            .service-detail-card .popular-tag {
                position: absolute;
                top: -0.8rem;
                left: 2rem;
                background: #f97316;
                color: #fff;
                font-size: 0.8rem;
                font-weight: 600;
                border-radius: 999px;
                padding: 0.25rem 1rem;
            }
            .service-detail-card h2 { color: #111827; margin-bottom: 0.5rem; }
            .service-detail-card .lead { color: #4b5563; margin-bottom: 1rem; }
            .service-detail-card .long { color: #374151; font-size: 0.95rem; margin-bottom: 1.5rem; line-height: 1.6; }
            .service-columns { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; margin-bottom: 1.5rem; }
            @media (max-width: 640px) { .service-columns { grid-template-columns: 1fr; } }
            .service-columns h4 { color: #111827; font-size: 0.95rem; margin-bottom: 0.5rem; }
            .service-columns ul { list-style: none; padding: 0; margin: 0; }
            .service-columns ul li { color: #374151; font-size: 0.9rem; padding: 0.15rem 0; }
            .service-columns ul li::before { content: "✓ "; color: #16a34a; }
            .service-meta-row {
                display: flex;
                gap: 2rem;
                flex-wrap: wrap;
                border-top: 1px solid #e5e7eb;
                padding-top: 1.25rem;
                align-items: center;
            }
            .service-meta-row .meta .meta-label { color: #6b7280; font-size: 0.8rem; }
            .service-meta-row .meta .meta-value { color: #111827; font-weight: 600; }
            .service-meta-row .meta .meta-value.price { color: #2563eb; font-size: 1.2rem; }
            .service-meta-row .detail-link {
                margin-left: auto;
                color: #2563eb;
                font-weight: 600;
                text-decoration: none;
            }
            .services-cta { text-align: center; padding: 0 1rem 3rem; color: #4b5563; }
            .services-cta a { color: #2563eb; font-weight: 600; text-decoration: none; }"#}
            </style>
            <section class="services-hero">
                <h1>{"Our Services"}</h1>
                <p>
                    {"Professional duct cleaning and air quality services for every \
                      property type, backed by written guarantees."}
                </p>
            </section>
            <div class="service-detail-list">
                {
                    services.into_iter().map(|service| html! {
                        <div class="service-detail-card">
                            {
                                if service.popular {
                                    html! { <span class="popular-tag">{"MOST POPULAR"}</span> }
                                } else {
                                    html! {}
                                }
                            }
                            <h2>{service.title}</h2>
                            <p class="lead">{service.description}</p>
                            <p class="long">{service.long_description}</p>
                            <div class="service-columns">
                                <div>
                                    <h4>{"What's Included"}</h4>
                                    <ul>
                                        { service.features.iter().map(|f| html! { <li>{f}</li> }).collect::<Html>() }
                                    </ul>
                                </div>
                                <div>
                                    <h4>{"Benefits"}</h4>
                                    <ul>
                                        { service.benefits.iter().map(|b| html! { <li>{b}</li> }).collect::<Html>() }
                                    </ul>
                                </div>
                            </div>
                            <div class="service-meta-row">
                                <div class="meta">
                                    <div class="meta-label">{"Starting at"}</div>
                                    <div class="meta-value price">{service.starting_price}</div>
                                </div>
                                <div class="meta">
                                    <div class="meta-label">{"Duration"}</div>
                                    <div class="meta-value">{service.duration}</div>
                                </div>
                                <div class="meta">
                                    <div class="meta-label">{"Guarantee"}</div>
                                    <div class="meta-value">{service.guarantee}</div>
                                </div>
                                {
                                    match service.route {
                                        Some(route) => html! {
                                            <Link<Route> to={route} classes="detail-link">
                                                {"Full details →"}
                                            </Link<Route>>
                                        },
                                        None => html! {
                                            <Link<Route> to={Route::Quote} classes="detail-link">
                                                {"Get a quote →"}
                                            </Link<Route>>
                                        },
                                    }
                                }
                            </div>
                        </div>
                    }).collect::<Html>()
                }
            </div>
            <p class="services-cta">
                {"Not sure which service you need? "}
                <a href={config::PHONE_TEL}>{format!("Call {}", config::PHONE_DISPLAY)}</a>
                {" and we'll walk you through it."}
            </p>
        </div>
    }
}
