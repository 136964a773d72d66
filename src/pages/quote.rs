use yew::prelude::*;

use crate::components::calculator::PricingCalculator;
use crate::components::trust_badges::TrustBadges;
use crate::forms::quote::QuickQuoteForm;

struct ProcessStep {
    step: u8,
    title: &'static str,
    description: &'static str,
    duration: &'static str,
}

#[function_component(Quote)]
pub fn quote() -> Html {
    let process = [
        ProcessStep {
            step: 1,
            title: "Submit Request",
            description: "Fill out our detailed quote form with your property information and service needs.",
            duration: "2 minutes",
        },
        ProcessStep {
            step: 2,
            title: "Property Assessment",
            description: "Our team reviews your request and may schedule a brief inspection if needed.",
            duration: "30 minutes",
        },
        ProcessStep {
            step: 3,
            title: "Custom Quote",
            description: "Receive a detailed, customized quote with transparent pricing and service options.",
            duration: "2 hours",
        },
        ProcessStep {
            step: 4,
            title: "Schedule Service",
            description: "Book your preferred date and time with our certified technicians.",
            duration: "1 minute",
        },
    ];

    html! {
        <div class="quote-page">
            <style>
            {r#".quote-page .quote-hero {
                background: linear-gradient(135deg, #1e3a8a, #1d4ed8);
                color: #fff;
                text-align: center;
                padding: 4rem 1rem;
            }
            .quote-page .quote-hero h1 { font-size: 2.6rem; margin-bottom: 0.75rem; }
            .quote-page .quote-hero p { color: #bfdbfe; font-size: 1.15rem; max-width: 640px; margin: 0 auto; }
            .quote-process { padding: 3rem 1rem; }
            .quote-process h2 { text-align: center; color: #111827; font-size: 1.8rem; margin-bottom: 2rem; }
            .quote-process-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                gap: 1.5rem;
                max-width: 1000px;
                margin: 0 auto;
            }
            .quote-process-step { text-align: center; }
            .quote-process-step .step-circle {
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
            .quote-process-step h3 { color: #111827; font-size: 1rem; margin-bottom: 0.4rem; }
            .quote-process-step p { color: #4b5563; font-size: 0.9rem; margin-bottom: 0.4rem; }
            .quote-process-step .duration { color: #2563eb; font-size: 0.85rem; font-weight: 600; }"#}
            </style>
            <section class="quote-hero">
                <h1>{"Get Your Free Quote"}</h1>
                <p>
                    {"Instant estimates with our calculator, or a detailed personalized \
                      quote within 2 hours."}
                </p>
            </section>
            <section class="quote-process">
                <h2>{"How Quoting Works"}</h2>
                <div class="quote-process-grid">
                    {
                        process.iter().map(|step| html! {
                            <div class="quote-process-step">
                                <div class="step-circle">{step.step}</div>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                                <div class="duration">{step.duration}</div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>
            <PricingCalculator />
            <QuickQuoteForm />
            <TrustBadges />
        </div>
    }
}
