use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use wasm_bindgen_futures::spawn_local;
use gloo_console::log;

use crate::config;
use crate::forms::record::{
    begin_submission, finish_submission, validate_contact, ContactRequest, FieldErrors, FormStatus,
    CONTACT_SERVICES, CONTACT_URGENCY, INQUIRY_TYPES, PREFERRED_CONTACT, TIME_SLOTS,
};
use crate::forms::submit;

fn text_field(
    record: &UseStateHandle<ContactRequest>,
    apply: fn(&mut ContactRequest, String),
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
    record: &UseStateHandle<ContactRequest>,
    apply: fn(&mut ContactRequest, String),
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

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let record = use_state(ContactRequest::default);
    let status = use_state(|| FormStatus::Editing);
    let errors = use_state(FieldErrors::new);
    let submit_error = use_state(|| None::<String>);

    let toggle_service = {
        let record = record.clone();
        Callback::from(move |name: String| {
            let mut next = (*record).clone();
            match next.services.iter().position(|selected| *selected == name) {
                Some(index) => {
                    next.services.remove(index);
                }
                None => next.services.push(name),
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
            if *status == FormStatus::Submitting {
                return;
            }
            submit_error.set(None);
            match begin_submission(&*record, validate_contact) {
                Err(field_errors) => {
                    log!("Contact request blocked by validation:", field_errors.len());
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
                        match submit::deliver("contact", &payload).await {
                            Ok(()) => {
                                log!("Contact request accepted");
                                let (done, reset) = finish_submission::<ContactRequest>();
                                record.set(reset);
                                status.set(done);
                            }
                            Err(err) => {
                                log!("Contact request failed:", err.to_string());
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
            <section class="contact-form-section">
                <div class="form-success-card">
                    <div class="success-check">{"✓"}</div>
                    <h3>{"Message Sent!"}</h3>
                    <p>
                        {"Thanks for reaching out. One of our team members will get back \
                          to you within 2 hours during business hours."}
                    </p>
                    <div class="success-actions">
                        <a href={config::PHONE_TEL} class="button-primary">
                            {"Call Us Instead"}
                        </a>
                        <button onclick={submit_another} class="button-secondary">
                            {"Send Another Message"}
                        </button>
                    </div>
                </div>
            </section>
        };
    }

    let submitting = *status == FormStatus::Submitting;

    html! {
        <section class="contact-form-section">
            <style>
            {r#".contact-form-section {
                padding: 3rem 1rem;
            }
            .contact-form-card {
                background: #fff;
                border-radius: 16px;
                box-shadow: 0 8px 32px rgba(0, 58, 102, 0.12);
                padding: 2.5rem;
                max-width: 860px;
                margin: 0 auto;
            }
            .contact-form-card h2 {
                color: #003A66;
                font-size: 1.8rem;
                margin-bottom: 0.5rem;
            }
            .contact-form-card > p {
                color: #4C6170;
                margin-bottom: 2rem;
            }
            .form-section-title {
                color: #003A66;
                font-size: 1.05rem;
                font-weight: 600;
                margin: 1.75rem 0 1rem;
            }"#}
            </style>
            <div class="contact-form-card">
                <h2>{"Send Us a Message"}</h2>
                <p>{"Tell us what you need and we'll get back to you within 2 hours."}</p>
                {
                    if let Some(message) = (*submit_error).as_ref() {
                        html! { <div class="submit-error-banner">{message}</div> }
                    } else {
                        html! {}
                    }
                }
                <form onsubmit={onsubmit}>
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

                    <div class="form-section-title">{"What is this about?"}</div>
                    <div class="form-grid">
                        <div class="form-field">
                            <label>{"Inquiry Type *"}</label>
                            <select
                                value={record.inquiry_type.clone()}
                                onchange={select_field(&record, |r, v| r.inquiry_type = v)}
                            >
                                <option value="" selected={record.inquiry_type.is_empty()}>
                                    {"Select inquiry type"}
                                </option>
                                {
                                    INQUIRY_TYPES.iter().map(|(value, label, desc)| html! {
                                        <option
                                            value={*value}
                                            selected={record.inquiry_type == *value}
                                        >
                                            {format!("{} ({})", label, desc)}
                                        </option>
                                    }).collect::<Html>()
                                }
                            </select>
                            { field_error(&errors, "inquiry_type") }
                        </div>
                        <div class="form-field">
                            <label>{"Subject *"}</label>
                            <input
                                placeholder="How can we help?"
                                value={record.subject.clone()}
                                onchange={text_field(&record, |r, v| r.subject = v)}
                            />
                            { field_error(&errors, "subject") }
                        </div>
                    </div>

                    <div class="form-section-title">{"Services you're interested in (optional)"}</div>
                    <div class="form-grid">
                        {
                            CONTACT_SERVICES.iter().map(|name| {
                                let checked = record.services.iter().any(|s| s == name);
                                let onchange = {
                                    let toggle = toggle_service.clone();
                                    let name = name.to_string();
                                    Callback::from(move |_: Event| toggle.emit(name.clone()))
                                };
                                html! {
                                    <label class="option-tile">
                                        <input type="checkbox" {checked} {onchange} />
                                        <div class="option-label">{name}</div>
                                    </label>
                                }
                            }).collect::<Html>()
                        }
                    </div>

                    <div class="form-section-title">{"How should we reach you?"}</div>
                    <div class="form-grid">
                        {
                            PREFERRED_CONTACT.iter().map(|(value, label)| {
                                let onchange = {
                                    let record = record.clone();
                                    let value = value.to_string();
                                    Callback::from(move |_: Event| {
                                        let mut next = (*record).clone();
                                        next.preferred_contact = value.clone();
                                        record.set(next);
                                    })
                                };
                                html! {
                                    <label class="option-tile">
                                        <input
                                            type="radio"
                                            name="preferred_contact"
                                            checked={record.preferred_contact == *value}
                                            {onchange}
                                        />
                                        <div class="option-label">{label}</div>
                                    </label>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                    { field_error(&errors, "preferred_contact") }

                    <div class="form-grid" style="margin-top: 1rem;">
                        <div class="form-field">
                            <label>{"Best Time to Contact *"}</label>
                            <select
                                value={record.best_time.clone()}
                                onchange={select_field(&record, |r, v| r.best_time = v)}
                            >
                                <option value="" selected={record.best_time.is_empty()}>
                                    {"Select a time"}
                                </option>
                                {
                                    TIME_SLOTS.iter().map(|slot| html! {
                                        <option value={*slot} selected={record.best_time == *slot}>
                                            {slot}
                                        </option>
                                    }).collect::<Html>()
                                }
                            </select>
                            { field_error(&errors, "best_time") }
                        </div>
                        <div class="form-field">
                            <label>{"Property Address (Optional)"}</label>
                            <input
                                placeholder="123 Main Street, Toronto"
                                value={record.address.clone()}
                                onchange={text_field(&record, |r, v| r.address = v)}
                            />
                        </div>
                    </div>

                    <div class="form-section-title">{"How urgent is this?"}</div>
                    <div class="form-grid">
                        {
                            CONTACT_URGENCY.iter().map(|(value, label, desc)| {
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
                                            name="contact_urgency"
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
                        <label>{"Message *"}</label>
                        <textarea
                            rows="5"
                            placeholder="Tell us about your property and what you need..."
                            value={record.message.clone()}
                            onchange={
                                let record = record.clone();
                                Callback::from(move |e: Event| {
                                    let area: HtmlTextAreaElement = e.target_unchecked_into();
                                    let mut next = (*record).clone();
                                    next.message = area.value();
                                    record.set(next);
                                })
                            }
                        />
                        { field_error(&errors, "message") }
                    </div>

                    <div class="form-field" style="margin-top: 1rem;">
                        <label>{"How did you hear about us? (Optional)"}</label>
                        <input
                            placeholder="Google, a neighbour, a fridge magnet..."
                            value={record.heard_about_us.clone()}
                            onchange={text_field(&record, |r, v| r.heard_about_us = v)}
                        />
                    </div>

                    <div class="submit-row">
                        <button type="submit" class="button-primary" disabled={submitting}>
                            {
                                if submitting {
                                    html! { <><span class="loading-spinner"></span>{" Sending Message..."}</> }
                                } else {
                                    html! { {"Send Message"} }
                                }
                            }
                        </button>
                    </div>
                </form>
            </div>
        </section>
    }
}
