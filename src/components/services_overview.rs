use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

struct Service {
    title: &'static str,
    description: &'static str,
    features: [&'static str; 4],
    starting_price: &'static str,
    route: Route,
}

#[function_component(ServicesOverview)]
pub fn services_overview() -> Html {
    let services = [
        Service {
            title: "Residential Duct Cleaning",
            description: "Complete air duct cleaning for homes and apartments to improve indoor air quality.",
            features: ["Complete system cleaning", "HEPA filtration", "Before/after photos", "2-year warranty"],
            starting_price: "$299",
            route: Route::ResidentialDuctCleaning,
        },
        Service {
            title: "Commercial Duct Cleaning",
            description: "Professional duct cleaning services for offices, restaurants, and commercial buildings.",
            features: ["Large-scale cleaning", "Minimal downtime", "Compliance reports", "Flexible scheduling"],
            starting_price: "$599",
            route: Route::Services,
        },
        Service {
            title: "Dryer Vent Cleaning",
            description: "Professional dryer vent cleaning to prevent fires and improve efficiency.",
            features: ["Fire prevention", "Energy savings", "Lint removal", "Safety inspection"],
            starting_price: "$149",
            route: Route::Services,
        },
        Service {
            title: "Sanitization Services",
            description: "Advanced sanitization and disinfection of your HVAC system.",
            features: ["EPA-approved products", "Virus elimination", "Allergen reduction", "Safe for families"],
            starting_price: "$199",
            route: Route::Services,
        },
    ];

    html! {
        <section class="services-overview">
            <style>
            {r#".services-overview { padding: 4rem 1rem; background: #f9fafb; }
            .services-overview .section-header { text-align: center; margin-bottom: 3rem; }
            .services-overview .section-header h2 { font-size: 2.2rem; color: #111827; margin-bottom: 0.75rem; }
            .services-overview .section-header p { color: #4b5563; font-size: 1.1rem; max-width: 640px; margin: 0 auto; }
            .service-card-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                gap: 1.5rem;
                max-width: 1100px;
                margin: 0 auto;
            }
            .service-card {
                background: #fff;
                border-radius: 12px;
                box-shadow: 0 4px 16px rgba(17, 24, 39, 0.08);
                padding: 1.75rem;
                display: flex;
                flex-direction: column;
            }
            .service-card h3 { color: #111827; font-size: 1.2rem; margin-bottom: 0.5rem; }
            .service-card .service-desc { color: #4b5563; font-size: 0.95rem; margin-bottom: 1rem; }
            .service-card ul { list-style: none; padding: 0; margin: 0 0 1.25rem; flex: 1; }
            .service-card ul li { color: #374151; font-size: 0.9rem; padding: 0.2rem 0; }
            .service-card ul li::before { content: "✓ "; color: #16a34a; }
            .service-card .service-footer {
                display: flex;
                justify-content: space-between;
                align-items: center;
            }
            .service-card .service-price { color: #2563eb; font-weight: 700; }
            .service-card .service-price .from { color: #6b7280; font-weight: 400; font-size: 0.85rem; }
            .service-card .service-link { color: #2563eb; text-decoration: none; font-weight: 600; }"#}
            </style>
            <div class="section-header">
                <h2>{"Our Professional Services"}</h2>
                <p>
                    {"From residential homes to commercial buildings, we provide comprehensive \
                      duct cleaning and air quality services."}
                </p>
            </div>
            <div class="service-card-grid">
                {
                    services.into_iter().map(|service| html! {
                        <div class="service-card">
                            <h3>{service.title}</h3>
                            <p class="service-desc">{service.description}</p>
                            <ul>
                                { service.features.iter().map(|f| html! { <li>{f}</li> }).collect::<Html>() }
                            </ul>
                            <div class="service-footer">
                                <div class="service-price">
                                    <span class="from">{"from "}</span>{service.starting_price}
                                </div>
                                <Link<Route> to={service.route} classes="service-link">
                                    {"Learn more →"}
                                </Link<Route>>
                            </div>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
