use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use wasm_bindgen_futures::spawn_local;
use gloo_console::log;

use crate::config;
use crate::forms::record::{
    begin_submission, finish_submission, validate_quote, FieldErrors, FormStatus, QuoteRequest,
    PROPERTY_TYPES, QUOTE_SERVICES, QUOTE_URGENCY,
};
use crate::forms::submit;
use crate::pricing::FOOTAGE_BANDS;

fn text_field(
    record: &UseStateHandle<QuoteRequest>,
    apply: fn(&mut QuoteRequest, String),
) -> Callback<Event> {
    let record = record.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*record).clone();
        apply(&mut next, input.value());
        record.set(next);
    })
}

fn select_field(
    record: &UseStateHandle<QuoteRequest>,
    apply: fn(&mut QuoteRequest, String),
) -> Callback<Event> {
    let record = record.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let mut next = (*record).clone();
        apply(&mut next, select.value());
        record.set(next);
    })
}

fn field_error(errors: &FieldErrors, field: &str) -> Html {
    match errors.get(field) {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    }
}

#[function_component(QuickQuoteForm)]
pub fn quick_quote_form() -> Html {
    let record = use_state(QuoteRequest::default);
    let status = use_state(|| FormStatus::Editing);
    let errors = use_state(FieldErrors::new);
    let submit_error = use_state(|| None::<String>);

    let toggle_service = {
        let record = record.clone();
        Callback::from(move |id: String| {
            let mut next = (*record).clone();
            match next.services.iter().position(|selected| *selected == id) {
                Some(index) => {
                    next.services.remove(index);
                }
                None => next.services.push(id),
            }
            record.set(next);
        })
    };

    let onsubmit = {
        let record = record.clone();
        let status = status.clone();
        let errors = errors.clone();
        let submit_error = submit_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // One in-flight submission per form, the button is disabled too.
            if *status == FormStatus::Submitting {
                return;
            }
            submit_error.set(None);
            match begin_submission(&*record, validate_quote) {
                Err(field_errors) => {
                    log!("Quote request blocked by validation:", field_errors.len());
                    errors.set(field_errors);
                }
                Ok(next_status) => {
                    errors.set(FieldErrors::new());
                    status.set(next_status);
                    let payload = (*record).clone();
                    let record = record.clone();
                    let status = status.clone();
                    let submit_error = submit_error.clone();
                    spawn_local(async move {
                        match submit::deliver("quote", &payload).await {
                            Ok(()) => {
                                log!("Quote request accepted");
                                let (done, reset) = finish_submission::<QuoteRequest>();
                                record.set(reset);
                                status.set(done);
                            }
                            Err(err) => {
                                log!("Quote request failed:", err.to_string());
                                submit_error.set(Some(err.to_string()));
                                status.set(FormStatus::Editing);
                            }
                        }
                    });
                }
            }
        })
    };

    if *status == FormStatus::Submitted {
        let submit_another = {
            let status = status.clone();
            Callback::from(move |_: MouseEvent| status.set(FormStatus::Editing))
        };
        return html! {
            <section class="quote-form-section">
                <div class="form-success-card">
                    <div class="success-check">{"✓"}</div>
                    <h3>{"Quote Request Submitted!"}</h3>
                    <p>
                        {"Thank you for your interest in our services. We'll review your \
                          request and contact you within 2 hours with a detailed quote."}
                    </p>
                    <div class="success-actions">
                        <a href={config::PHONE_TEL} class="button-primary">
                            {"Call for Immediate Service"}
                        </a>
                        <button onclick={submit_another} class="button-secondary">
                            {"Submit Another Quote"}
                        </button>
                    </div>
                </div>
            </section>
        };
    }

    let submitting = *status == FormStatus::Submitting;

    html! {
        <section class="quote-form-section">
            <style>
            {r#".quote-form-section {
                padding: 4rem 1rem;
                background: linear-gradient(135deg, #eff6ff, #eef2ff);
            }
            .quote-form-card {
                background: #fff;
                border-radius: 16px;
                box-shadow: 0 8px 32px rgba(0, 58, 102, 0.12);
                padding: 2.5rem;
                max-width: 860px;
                margin: 0 auto;
            }
            .quote-form-header {
                text-align: center;
                margin-bottom: 2.5rem;
            }
            .quote-form-header h2 {
                font-size: 2.2rem;
                color: #003A66;
                margin-bottom: 0.75rem;
            }
            .quote-form-header p {
                color: #4C6170;
                font-size: 1.1rem;
                max-width: 560px;
                margin: 0 auto;
            }
            .form-step-title {
                display: flex;
                align-items: center;
                gap: 0.75rem;
                color: #003A66;
                font-size: 1.1rem;
                font-weight: 600;
                margin: 1.75rem 0 1rem;
            }
            .form-step-title .step-number {
                width: 24px;
                height: 24px;
                border-radius: 50%;
                background: #2563eb;
                color: #fff;
                font-size: 0.85rem;
                display: inline-flex;
                align-items: center;
                justify-content: center;
            }"#}
            </style>
            <div class="quote-form-card">
                <div class="quote-form-header">
                    <h2>{"Get Your Free Quote"}</h2>
                    <p>
                        {"Fill out our quick form and get a personalized quote within 2 hours. \
                          No obligations, just honest pricing for quality service."}
                    </p>
                </div>
                {
                    if let Some(message) = (*submit_error).as_ref() {
                        html! { <div class="submit-error-banner">{message}</div> }
                    } else {
                        html! {}
                    }
                }
                <form onsubmit={onsubmit}>
                    <div class="form-step-title">
                        <span class="step-number">{"1"}</span>{"Personal Information"}
                    </div>
                    <div class="form-grid">
                        <div class="form-field">
                            <label>{"First Name *"}</label>
                            <input
                                placeholder="John"
                                value={record.first_name.clone()}
                                onchange={text_field(&record, |r, v| r.first_name = v)}
                            />
                            { field_error(&errors, "first_name") }
                        </div>
                        <div class="form-field">
                            <label>{"Last Name *"}</label>
                            <input
                                placeholder="Doe"
                                value={record.last_name.clone()}
                                onchange={text_field(&record, |r, v| r.last_name = v)}
                            />
                            { field_error(&errors, "last_name") }
                        </div>
                        <div class="form-field">
                            <label>{"Email Address *"}</label>
                            <input
                                type="email"
                                placeholder="john@example.com"
                                value={record.email.clone()}
                                onchange={text_field(&record, |r, v| r.email = v)}
                            />
                            { field_error(&errors, "email") }
                        </div>
                        <div class="form-field">
                            <label>{"Phone Number *"}</label>
                            <input
                                type="tel"
                                placeholder="(555) 123-4567"
                                value={record.phone.clone()}
                                onchange={text_field(&record, |r, v| r.phone = v)}
                            />
                            { field_error(&errors, "phone") }
                        </div>
                    </div>

                    <div class="form-step-title">
                        <span class="step-number">{"2"}</span>{"Property Information"}
                    </div>
                    <div class="form-grid">
                        <div class="form-field" style="grid-column: 1 / -1;">
                            <label>{"Property Address *"}</label>
                            <input
                                placeholder="123 Main Street"
                                value={record.address.clone()}
                                onchange={text_field(&record, |r, v| r.address = v)}
                            />
                            { field_error(&errors, "address") }
                        </div>
                        <div class="form-field">
                            <label>{"City *"}</label>
                            <input
                                placeholder="Toronto"
                                value={record.city.clone()}
                                onchange={text_field(&record, |r, v| r.city = v)}
                            />
                            { field_error(&errors, "city") }
                        </div>
                        <div class="form-field">
                            <label>{"Postal Code *"}</label>
                            <input
                                placeholder="M5V 3A8"
                                value={record.postal_code.clone()}
                                onchange={text_field(&record, |r, v| r.postal_code = v)}
                            />
                            { field_error(&errors, "postal_code") }
                        </div>
                        <div class="form-field">
                            <label>{"Property Type *"}</label>
                            <select
                                value={record.property_type.clone()}
                                onchange={select_field(&record, |r, v| r.property_type = v)}
                            >
                                <option value="" selected={record.property_type.is_empty()}>
                                    {"Select property type"}
                                </option>
                                {
                                    PROPERTY_TYPES.iter().map(|(value, label)| html! {
                                        <option
                                            value={*value}
                                            selected={record.property_type == *value}
                                        >
                                            {label}
                                        </option>
                                    }).collect::<Html>()
                                }
                            </select>
                            { field_error(&errors, "property_type") }
                        </div>
                        <div class="form-field">
                            <label>{"Square Footage *"}</label>
                            <select
                                value={record.square_footage.clone()}
                                onchange={select_field(&record, |r, v| r.square_footage = v)}
                            >
                                <option value="" selected={record.square_footage.is_empty()}>
                                    {"Select square footage"}
                                </option>
                                {
                                    FOOTAGE_BANDS.iter().map(|band| html! {
                                        <option
                                            value={band.id}
                                            selected={record.square_footage == band.id}
                                        >
                                            {band.label}
                                        </option>
                                    }).collect::<Html>()
                                }
                            </select>
                            { field_error(&errors, "square_footage") }
                        </div>
                    </div>

                    <div class="form-step-title">
                        <span class="step-number">{"3"}</span>{"Services Needed"}
                    </div>
                    <div class="form-grid">
                        {
                            QUOTE_SERVICES.iter().map(|(id, label, price_note)| {
                                let checked = record.services.iter().any(|s| s == id);
                                let onchange = {
                                    let toggle = toggle_service.clone();
                                    let id = id.to_string();
                                    Callback::from(move |_: Event| toggle.emit(id.clone()))
                                };
                                html! {
                                    <label class="option-tile">
                                        <input type="checkbox" {checked} {onchange} />
                                        <div>
                                            <div class="option-label">{label}</div>
                                            <div class="option-note">{price_note}</div>
                                        </div>
                                    </label>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                    { field_error(&errors, "services") }

                    <div class="form-step-title">
                        <span class="step-number">{"4"}</span>{"When do you need service?"}
                    </div>
                    <div class="form-grid">
                        {
                            QUOTE_URGENCY.iter().map(|(value, label, desc)| {
                                let onchange = {
                                    let record = record.clone();
                                    let value = value.to_string();
                                    Callback::from(move |_: Event| {
                                        let mut next = (*record).clone();
                                        next.urgency = value.clone();
                                        record.set(next);
                                    })
                                };
                                html! {
                                    <label class="option-tile">
                                        <input
                                            type="radio"
                                            name="urgency"
                                            checked={record.urgency == *value}
                                            {onchange}
                                        />
                                        <div>
                                            <div class="option-label">{label}</div>
                                            <div class="option-note">{desc}</div>
                                        </div>
                                    </label>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                    { field_error(&errors, "urgency") }

                    <div class="form-field" style="margin-top: 1.75rem;">
                        <label>{"Additional Information (Optional)"}</label>
                        <textarea
                            rows="4"
                            placeholder="Any specific concerns, access issues, or special requirements..."
                            value={record.additional_info.clone()}
                            onchange={
                                let record = record.clone();
                                Callback::from(move |e: Event| {
                                    let area: HtmlTextAreaElement = e.target_unchecked_into();
                                    let mut next = (*record).clone();
                                    next.additional_info = area.value();
                                    record.set(next);
                                })
                            }
                        />
                    </div>

                    <div class="submit-row">
                        <button type="submit" class="button-primary" disabled={submitting}>
                            {
                                if submitting {
                                    html! { <><span class="loading-spinner"></span>{" Submitting Quote Request..."}</> }
                                } else {
                                    html! { {"Get My Free Quote"} }
                                }
                            }
                        </button>
                        <p class="submit-note">
                            {"We'll contact you within 2 hours with your personalized quote"}
                        </p>
                    </div>
                </form>
            </div>
        </section>
    }
}
