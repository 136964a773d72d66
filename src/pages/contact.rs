use yew::prelude::*;

use crate::components::service_area::ServiceAreaMap;
use crate::config;
use crate::forms::contact::ContactForm;

struct ContactMethod {
    icon: &'static str,
    title: &'static str,
    contact: &'static str,
    action: &'static str,
    description: &'static str,
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let methods = [
        ContactMethod {
            icon: "📞",
            title: "Phone",
            contact: config::PHONE_DISPLAY,
            action: config::PHONE_TEL,
            description: "Available 24/7 for emergencies",
        },
        ContactMethod {
            icon: "✉",
            title: "Email",
            contact: config::EMAIL,
            action: "mailto:info@cleanairpro.com",
            description: "We respond within 2 hours",
        },
        ContactMethod {
            icon: "💬",
            title: "Text Message",
            contact: config::PHONE_DISPLAY,
            action: "sms:+15551234567",
            description: "Quick questions welcome",
        },
    ];

    html! {
        <div class="contact-page">
            <style>
            {r#".contact-page .contact-hero {
                background: linear-gradient(135deg, #1e3a8a, #1d4ed8);
                color: #fff;
                text-align: center;
                padding: 4rem 1rem;
            }
            .contact-page .contact-hero h1 { font-size: 2.6rem; margin-bottom: 0.75rem; }
            .contact-page .contact-hero p { color: #bfdbfe; font-size: 1.15rem; max-width: 640px; margin: 0 auto; }
            .contact-methods {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                gap: 1.5rem;
                max-width: 1000px;
                margin: -2rem auto 0;
                padding: 0 1rem 2rem;
            }
            .contact-method {
                background: #fff;
                border-radius: 12px;
                box-shadow: 0 4px 16px rgba(17, 24, 39, 0.1);
                padding: 1.5rem;
                text-align: center;
                text-decoration: none;
            }
            .contact-method .method-icon { font-size: 1.8rem; margin-bottom: 0.5rem; }
            .contact-method h3 { color: #111827; margin-bottom: 0.25rem; }
            .contact-method .method-contact { color: #2563eb; font-weight: 600; }
            .contact-method .method-desc { color: #6b7280; font-size: 0.85rem; margin-top: 0.4rem; }
            .contact-hours {
                text-align: center;
                color: #4b5563;
                padding: 0 1rem 1rem;
                font-size: 0.95rem;
            }"#}
            </style>
            <section class="contact-hero">
                <h1>{"Contact Us"}</h1>
                <p>
                    {"Questions, quotes, or emergencies — reach us however works best \
                      for you and we'll get back fast."}
                </p>
            </section>
            <div class="contact-methods">
                {
                    methods.iter().map(|method| html! {
                        <a class="contact-method" href={method.action}>
                            <div class="method-icon">{method.icon}</div>
                            <h3>{method.title}</h3>
                            <div class="method-contact">{method.contact}</div>
                            <div class="method-desc">{method.description}</div>
                        </a>
                    }).collect::<Html>()
                }
            </div>
            <p class="contact-hours">
                {"Business hours: Monday-Saturday 8AM-8PM • Emergency service 24/7"}
            </p>
            <ContactForm />
            <ServiceAreaMap />
        </div>
    }
}
