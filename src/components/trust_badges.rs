use yew::prelude::*;

struct Badge {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

static BADGES: [Badge; 6] = [
    Badge {
        icon: "🛡",
        title: "Licensed & Insured",
        description: "Fully licensed professionals with comprehensive insurance coverage",
    },
    Badge {
        icon: "🏅",
        title: "Certified Technicians",
        description: "NADCA certified technicians with years of experience",
    },
    Badge {
        icon: "🕐",
        title: "24/7 Emergency Service",
        description: "Available round the clock for urgent cleaning needs",
    },
    Badge {
        icon: "👥",
        title: "500+ Satisfied Customers",
        description: "Trusted by hundreds of residential and commercial clients",
    },
    Badge {
        icon: "✔",
        title: "Satisfaction Guaranteed",
        description: "100% satisfaction guarantee or we'll make it right",
    },
    Badge {
        icon: "★",
        title: "4.9/5 Star Rating",
        description: "Consistently rated excellent by our customers",
    },
];

#[function_component(TrustBadges)]
pub fn trust_badges() -> Html {
    html! {
        <section class="trust-badges">
            <style>
            {r#".trust-badges { padding: 4rem 1rem; background: #fff; }
            .trust-badges .badge-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                gap: 1.5rem;
                max-width: 1100px;
                margin: 0 auto;
            }
            .trust-badge {
                display: flex;
                gap: 1rem;
                padding: 1.5rem;
                border: 1px solid #e5e7eb;
                border-radius: 12px;
            }
            .trust-badge .badge-icon {
                width: 48px;
                height: 48px;
                flex-shrink: 0;
                border-radius: 12px;
                background: #eff6ff;
                color: #2563eb;
                font-size: 1.4rem;
                display: flex;
                align-items: center;
                justify-content: center;
            }
            .trust-badge h3 { color: #111827; font-size: 1rem; margin-bottom: 0.25rem; }
            .trust-badge p { color: #4b5563; font-size: 0.9rem; }"#}
            </style>
            <div class="badge-grid">
                {
                    BADGES.iter().map(|badge| html! {
                        <div class="trust-badge">
                            <div class="badge-icon">{badge.icon}</div>
                            <div>
                                <h3>{badge.title}</h3>
                                <p>{badge.description}</p>
                            </div>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
