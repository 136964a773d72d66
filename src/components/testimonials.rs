use yew::prelude::*;
use gloo_timers::callback::Timeout;

struct Testimonial {
    name: &'static str,
    location: &'static str,
    review: &'static str,
    service: &'static str,
}

static TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        name: "Sarah Johnson",
        location: "Toronto, ON",
        review: "Absolutely amazing service! The team was professional, thorough, and cleaned our ducts better than we ever imagined. The difference in air quality is noticeable immediately.",
        service: "Residential Duct Cleaning",
    },
    Testimonial {
        name: "Michael Chen",
        location: "Mississauga, ON",
        review: "Quick response time and excellent work. They showed me before and after photos, and the difference was incredible. Highly recommend for anyone looking to improve their indoor air quality.",
        service: "Dryer Vent Cleaning",
    },
    Testimonial {
        name: "Jennifer Smith",
        location: "Brampton, ON",
        review: "Professional team that arrived on time and completed the job efficiently. Our office air feels so much cleaner now. Great value for the quality of service provided.",
        service: "Commercial Duct Cleaning",
    },
    Testimonial {
        name: "David Wilson",
        location: "Markham, ON",
        review: "Emergency service was fantastic. They came out the same day and fixed our HVAC issue quickly. The sanitization service they provided made our home feel fresh and clean.",
        service: "Sanitization Services",
    },
    Testimonial {
        name: "Lisa Thompson",
        location: "Richmond Hill, ON",
        review: "From booking to completion everything was smooth. Transparent pricing, friendly technicians, and our allergies have improved noticeably since the cleaning.",
        service: "Residential Duct Cleaning",
    },
];

const AUTO_ADVANCE_MS: u32 = 6_000;

#[function_component(TestimonialsCarousel)]
pub fn testimonials_carousel() -> Html {
    let index = use_state(|| 0usize);
    // Auto-play stops once the visitor navigates by hand.
    let auto = use_state(|| true);

    {
        let index_setter = index.setter();
        let current = *index;
        let auto_on = *auto;
        use_effect_with_deps(
            move |_| {
                let timeout = auto_on.then(|| {
                    Timeout::new(AUTO_ADVANCE_MS, move || {
                        index_setter.set((current + 1) % TESTIMONIALS.len());
                    })
                });
                move || drop(timeout)
            },
            (current, auto_on),
        );
    }

    let go_prev = {
        let index = index.clone();
        let auto = auto.clone();
        Callback::from(move |_: MouseEvent| {
            auto.set(false);
            index.set((*index + TESTIMONIALS.len() - 1) % TESTIMONIALS.len());
        })
    };
    let go_next = {
        let index = index.clone();
        let auto = auto.clone();
        Callback::from(move |_: MouseEvent| {
            auto.set(false);
            index.set((*index + 1) % TESTIMONIALS.len());
        })
    };

    let current = &TESTIMONIALS[*index];

    html! {
        <section class="testimonials-section">
            <style>
            {r#".testimonials-section { padding: 4rem 1rem; background: #fff; }
            .testimonials-section .section-header { text-align: center; margin-bottom: 2.5rem; }
            .testimonials-section .section-header h2 { font-size: 2.2rem; color: #111827; margin-bottom: 0.5rem; }
            .testimonials-section .section-header p { color: #4b5563; }
            .testimonial-card {
                max-width: 720px;
                margin: 0 auto;
                background: #f9fafb;
                border-radius: 16px;
                padding: 2.5rem;
                text-align: center;
                position: relative;
            }
            .testimonial-card .stars { color: #facc15; font-size: 1.3rem; letter-spacing: 0.15rem; margin-bottom: 1rem; }
            .testimonial-card .review { color: #374151; font-size: 1.1rem; font-style: italic; margin-bottom: 1.5rem; }
            .testimonial-card .reviewer { color: #111827; font-weight: 600; }
            .testimonial-card .reviewer-meta { color: #6b7280; font-size: 0.9rem; }
            .carousel-controls {
                display: flex;
                justify-content: center;
                align-items: center;
                gap: 1rem;
                margin-top: 1.5rem;
            }
            .carousel-controls button {
                width: 40px;
                height: 40px;
                border-radius: 50%;
                border: 1px solid #d1d5db;
                background: #fff;
                font-size: 1.1rem;
                cursor: pointer;
            }
            .carousel-controls button:hover { background: #f3f4f6; }
            .carousel-dots { display: flex; gap: 0.4rem; }
            .carousel-dots .dot {
                width: 8px;
                height: 8px;
                border-radius: 50%;
                background: #d1d5db;
            }
            .carousel-dots .dot.active { background: #2563eb; }"#}
            </style>
            <div class="section-header">
                <h2>{"What Our Customers Say"}</h2>
                <p>{"Real reviews from homeowners and businesses across the GTA"}</p>
            </div>
            <div class="testimonial-card">
                <div class="stars">{"★★★★★"}</div>
                <p class="review">{format!("\u{201c}{}\u{201d}", current.review)}</p>
                <div class="reviewer">{current.name}</div>
                <div class="reviewer-meta">
                    {format!("{} • {}", current.location, current.service)}
                </div>
            </div>
            <div class="carousel-controls">
                <button onclick={go_prev} aria-label="Previous review">{"‹"}</button>
                <div class="carousel-dots">
                    {
                        (0..TESTIMONIALS.len()).map(|i| html! {
                            <span class={classes!("dot", (i == *index).then_some("active"))}></span>
                        }).collect::<Html>()
                    }
                </div>
                <button onclick={go_next} aria-label="Next review">{"›"}</button>
            </div>
        </section>
    }
}
