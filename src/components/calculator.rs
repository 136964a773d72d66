use yew::prelude::*;
use web_sys::HtmlSelectElement;

use crate::pricing::{self, PropertyType, ADD_ONS, FOOTAGE_BANDS};
use crate::Route;
use yew_router::prelude::*;

/// Instant-estimate calculator. Every selection change re-renders and the
/// breakdown is derived straight from `pricing::estimate`, nothing is cached.
#[function_component(PricingCalculator)]
pub fn pricing_calculator() -> Html {
    let property = use_state(|| PropertyType::Residential);
    let footage = use_state(String::new);
    let tier = use_state(|| "basic".to_string());
    let add_ons = use_state(Vec::<String>::new);

    let breakdown = pricing::estimate(*property, &footage, &tier, &add_ons);

    let on_footage = {
        let footage = footage.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            footage.set(select.value());
        })
    };

    let toggle_add_on = {
        let add_ons = add_ons.clone();
        Callback::from(move |id: String| {
            let mut next = (*add_ons).clone();
            match next.iter().position(|selected| *selected == id) {
                Some(index) => {
                    next.remove(index);
                }
                None => next.push(id),
            }
            add_ons.set(next);
        })
    };

    html! {
        <section class="calculator-section">
            <style>
            {r#".calculator-section {
                padding: 4rem 1rem;
                background: linear-gradient(135deg, #eff6ff, #eef2ff);
            }
            .calculator-header {
                text-align: center;
                margin-bottom: 2.5rem;
            }
            .calculator-header h2 { font-size: 2.2rem; color: #111827; margin-bottom: 0.75rem; }
            .calculator-header p { color: #4b5563; font-size: 1.1rem; max-width: 560px; margin: 0 auto; }
            .calculator-layout {
                display: grid;
                grid-template-columns: 2fr 1fr;
                gap: 2rem;
                max-width: 1000px;
                margin: 0 auto;
            }
            @media (max-width: 860px) { .calculator-layout { grid-template-columns: 1fr; } }
            .calculator-panel, .estimate-panel {
                background: #fff;
                border-radius: 16px;
                box-shadow: 0 8px 32px rgba(17, 24, 39, 0.08);
                padding: 2rem;
            }
            .calculator-panel h3 { color: #111827; font-size: 1.1rem; margin: 1.5rem 0 1rem; }
            .calculator-panel h3:first-child { margin-top: 0; }
            .property-toggle { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
            .property-toggle button {
                padding: 1rem;
                border-radius: 8px;
                border: 2px solid #e5e7eb;
                background: #fff;
                font-weight: 500;
                cursor: pointer;
            }
            .property-toggle button.active {
                border-color: #3b82f6;
                background: #eff6ff;
                color: #1d4ed8;
            }
            .calculator-panel select {
                width: 100%;
                padding: 0.75rem 1rem;
                border: 1px solid #d1d5db;
                border-radius: 8px;
                font-size: 1rem;
            }
            .tier-option, .addon-option {
                display: block;
                padding: 1rem;
                border: 2px solid #e5e7eb;
                border-radius: 8px;
                margin-bottom: 0.75rem;
                cursor: pointer;
            }
            .tier-option.selected { border-color: #3b82f6; background: #eff6ff; }
            .addon-option.selected { border-color: #22c55e; background: #f0fdf4; }
            .tier-option .tier-row, .addon-option .addon-row {
                display: flex;
                justify-content: space-between;
                align-items: center;
            }
            .tier-option .tier-name, .addon-option .addon-name { font-weight: 600; color: #111827; }
            .tier-option .tier-desc, .addon-option .addon-price { font-size: 0.9rem; color: #4b5563; }
            .tier-option .tier-price { font-size: 1.2rem; font-weight: 700; color: #2563eb; }
            .addon-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 0.75rem; }
            @media (max-width: 640px) { .addon-grid { grid-template-columns: 1fr; } }
            .discount-banner {
                margin-top: 1rem;
                padding: 0.8rem 1rem;
                background: #dcfce7;
                border: 1px solid #86efac;
                border-radius: 8px;
                color: #166534;
                font-weight: 500;
            }
            .estimate-panel h3 { color: #111827; font-size: 1.3rem; margin-bottom: 1.5rem; }
            .estimate-line {
                display: flex;
                justify-content: space-between;
                padding: 0.5rem 0;
                color: #374151;
            }
            .estimate-line.base { border-bottom: 1px solid #e5e7eb; font-weight: 600; }
            .estimate-line.discount { color: #16a34a; }
            .estimate-total {
                display: flex;
                justify-content: space-between;
                border-top: 1px solid #e5e7eb;
                margin-top: 0.75rem;
                padding-top: 1rem;
                font-size: 1.3rem;
                font-weight: 700;
            }
            .estimate-total .amount { color: #2563eb; font-size: 1.6rem; }
            .estimate-empty { text-align: center; color: #9ca3af; padding: 2rem 0; }
            .estimate-note {
                margin-top: 1.5rem;
                padding: 1rem;
                background: #f9fafb;
                border-radius: 8px;
                font-size: 0.8rem;
                color: #4b5563;
            }
            .estimate-cta {
                display: block;
                width: 100%;
                margin-top: 1.5rem;
                background: #2563eb;
                color: #fff;
                text-align: center;
                text-decoration: none;
                padding: 0.9rem;
                border-radius: 8px;
                font-weight: 600;
            }
            .estimate-cta:hover { background: #1d4ed8; }"#}
            </style>
            <div class="calculator-header">
                <h2>{"Pricing Calculator"}</h2>
                <p>
                    {"Get an instant estimate for your duct cleaning service. \
                      Customize your package and see transparent pricing."}
                </p>
            </div>
            <div class="calculator-layout">
                <div class="calculator-panel">
                    <h3>{"Property Type"}</h3>
                    <div class="property-toggle">
                        {
                            [PropertyType::Residential, PropertyType::Commercial].iter().map(|kind| {
                                let onclick = {
                                    let property = property.clone();
                                    let kind = *kind;
                                    // Tier ids are shared across property types, the
                                    // current pick carries over.
                                    Callback::from(move |_: MouseEvent| property.set(kind))
                                };
                                html! {
                                    <button
                                        type="button"
                                        class={if *property == *kind { "active" } else { "" }}
                                        {onclick}
                                    >
                                        {kind.label()}
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                    </div>

                    <h3>{"Square Footage"}</h3>
                    <select onchange={on_footage}>
                        <option value="" selected={footage.is_empty()}>{"Select square footage"}</option>
                        {
                            FOOTAGE_BANDS.iter().map(|band| html! {
                                <option value={band.id} selected={*footage == band.id}>
                                    {band.label}
                                </option>
                            }).collect::<Html>()
                        }
                    </select>

                    <h3>{"Service Package"}</h3>
                    {
                        pricing::tiers_for(*property).iter().map(|option| {
                            let selected = *tier == option.id;
                            let onclick = {
                                let tier = tier.clone();
                                let id = option.id.to_string();
                                Callback::from(move |_: MouseEvent| tier.set(id.clone()))
                            };
                            html! {
                                <div
                                    class={classes!("tier-option", selected.then_some("selected"))}
                                    {onclick}
                                >
                                    <div class="tier-row">
                                        <div>
                                            <div class="tier-name">{option.label}</div>
                                            <div class="tier-desc">{option.description}</div>
                                        </div>
                                        <div class="tier-price">{format!("${:.0}", option.base_price)}</div>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }

                    <h3>{"Add-On Services"}</h3>
                    <div class="addon-grid">
                        {
                            ADD_ONS.iter().map(|addon| {
                                let selected = add_ons.iter().any(|id| id == addon.id);
                                let onclick = {
                                    let toggle = toggle_add_on.clone();
                                    let id = addon.id.to_string();
                                    Callback::from(move |_: MouseEvent| toggle.emit(id.clone()))
                                };
                                html! {
                                    <div
                                        class={classes!("addon-option", selected.then_some("selected"))}
                                        {onclick}
                                    >
                                        <div class="addon-row">
                                            <div>
                                                <div class="addon-name">{addon.name}</div>
                                                <div class="addon-price">{format!("${:.0}", addon.price)}</div>
                                            </div>
                                            <div>{if selected { "✓" } else { "+" }}</div>
                                        </div>
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                    {
                        if matches!(&breakdown, Some(result) if result.discount > 0.0) {
                            html! {
                                <div class="discount-banner">
                                    {"10% Discount Applied for Multiple Add-ons!"}
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class="estimate-panel">
                    <h3>{"Price Estimate"}</h3>
                    {
                        match &breakdown {
                            Some(result) => html! {
                                <>
                                    <div class="estimate-line base">
                                        <span>{"Base Service"}</span>
                                        <span>{format!("${:.0}", result.base_price)}</span>
                                    </div>
                                    {
                                        result.add_ons.iter().map(|addon| html! {
                                            <div class="estimate-line">
                                                <span>{addon.name}</span>
                                                <span>{format!("+${:.0}", addon.price)}</span>
                                            </div>
                                        }).collect::<Html>()
                                    }
                                    {
                                        if result.discount > 0.0 {
                                            html! {
                                                <div class="estimate-line discount">
                                                    <span>{"Multi-service discount"}</span>
                                                    <span>{format!("-${:.0}", result.discount)}</span>
                                                </div>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    <div class="estimate-total">
                                        <span>{"Total"}</span>
                                        <span class="amount">{format!("${:.0}", result.total.round())}</span>
                                    </div>
                                    <Link<Route> to={Route::Quote} classes="estimate-cta">
                                        {"Get Exact Quote"}
                                    </Link<Route>>
                                </>
                            },
                            None => html! {
                                <div class="estimate-empty">
                                    <p>{"Select your options above to see pricing"}</p>
                                </div>
                            },
                        }
                    }
                    <div class="estimate-note">
                        {"* This is an estimate only. Final pricing may vary based on actual \
                          conditions, accessibility, and additional services required."}
                    </div>
                </div>
            </div>
        </section>
    }
}
