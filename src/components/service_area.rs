use yew::prelude::*;

use crate::config;

struct Area {
    city: &'static str,
    zone: &'static str,
    coverage: &'static str,
    response_time: &'static str,
    popular: bool,
}

static AREAS: [Area; 8] = [
    Area { city: "Toronto", zone: "Downtown", coverage: "Full Coverage", response_time: "30 min", popular: true },
    Area { city: "Mississauga", zone: "West GTA", coverage: "Full Coverage", response_time: "45 min", popular: true },
    Area { city: "Brampton", zone: "Northwest", coverage: "Full Coverage", response_time: "45 min", popular: false },
    Area { city: "Markham", zone: "Northeast", coverage: "Full Coverage", response_time: "45 min", popular: false },
    Area { city: "Richmond Hill", zone: "North York", coverage: "Full Coverage", response_time: "45 min", popular: false },
    Area { city: "Vaughan", zone: "North", coverage: "Full Coverage", response_time: "45 min", popular: false },
    Area { city: "Oakville", zone: "Southwest", coverage: "Full Coverage", response_time: "60 min", popular: false },
    Area { city: "Burlington", zone: "Southwest", coverage: "Limited", response_time: "60 min", popular: false },
];

#[function_component(ServiceAreaMap)]
pub fn service_area_map() -> Html {
    html! {
        <section class="service-area-section">
            <style>
            {r#".service-area-section { padding: 4rem 1rem; background: #f9fafb; }
            .service-area-section .section-header { text-align: center; margin-bottom: 2.5rem; }
            .service-area-section .section-header h2 { font-size: 2.2rem; color: #111827; margin-bottom: 0.5rem; }
            .service-area-section .section-header p { color: #4b5563; }
            .area-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                gap: 1rem;
                max-width: 1100px;
                margin: 0 auto 2rem;
            }
            .area-card {
                background: #fff;
                border: 1px solid #e5e7eb;
                border-radius: 12px;
                padding: 1.25rem;
                position: relative;
            }
            .area-card .popular-tag {
                position: absolute;
                top: 0.75rem;
                right: 0.75rem;
                background: #fef3c7;
                color: #92400e;
                font-size: 0.7rem;
                font-weight: 600;
                border-radius: 999px;
                padding: 0.15rem 0.6rem;
            }
            .area-card h3 { color: #111827; font-size: 1.05rem; margin-bottom: 0.2rem; }
            .area-card .zone { color: #6b7280; font-size: 0.85rem; margin-bottom: 0.75rem; }
            .area-card .detail { display: flex; justify-content: space-between; font-size: 0.85rem; padding: 0.15rem 0; }
            .area-card .detail .label { color: #6b7280; }
            .area-card .detail .value { color: #374151; font-weight: 500; }
            .area-card .detail .value.limited { color: #d97706; }
            .area-cta { text-align: center; color: #4b5563; }
            .area-cta a { color: #2563eb; font-weight: 600; text-decoration: none; }"#}
            </style>
            <div class="section-header">
                <h2>{"Our Service Area"}</h2>
                <p>{config::SERVICE_AREA_TAGLINE}</p>
            </div>
            <div class="area-grid">
                {
                    AREAS.iter().map(|area| html! {
                        <div class="area-card">
                            {
                                if area.popular {
                                    html! { <span class="popular-tag">{"POPULAR"}</span> }
                                } else {
                                    html! {}
                                }
                            }
                            <h3>{area.city}</h3>
                            <div class="zone">{area.zone}</div>
                            <div class="detail">
                                <span class="label">{"Coverage"}</span>
                                <span class={classes!("value", (area.coverage == "Limited").then_some("limited"))}>
                                    {area.coverage}
                                </span>
                            </div>
                            <div class="detail">
                                <span class="label">{"Response time"}</span>
                                <span class="value">{area.response_time}</span>
                            </div>
                        </div>
                    }).collect::<Html>()
                }
            </div>
            <p class="area-cta">
                {"Don't see your city? "}
                <a href={config::PHONE_TEL}>{format!("Call {}", config::PHONE_DISPLAY)}</a>
                {" — we may still be able to help."}
            </p>
        </section>
    }
}
