use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    Before,
    After,
    Split,
}

struct Project {
    title: &'static str,
    location: &'static str,
    service: &'static str,
    description: &'static str,
    improvements: [&'static str; 4],
}

static PROJECTS: [Project; 3] = [
    Project {
        title: "Residential Home - Main Return Duct",
        location: "Toronto, ON",
        service: "Complete Residential Cleaning",
        description: "Heavy dust and debris accumulation in main return duct of a 3-bedroom home.",
        improvements: [
            "Removed 15+ years of dust buildup",
            "Eliminated pet dander and allergens",
            "Improved airflow by 35%",
            "Reduced energy consumption",
        ],
    },
    Project {
        title: "Commercial Office - Supply Duct",
        location: "Mississauga, ON",
        service: "Commercial Duct Cleaning",
        description: "Office building with significant contamination from construction dust.",
        improvements: [
            "Removed construction debris",
            "Eliminated dust particles",
            "Improved indoor air quality",
            "Better employee comfort",
        ],
    },
    Project {
        title: "Residential Basement - Return Air Vent",
        location: "Brampton, ON",
        service: "Premium Residential Service",
        description: "Basement return vent with mold growth and moisture damage.",
        improvements: [
            "Completely removed mold",
            "Sanitized entire system",
            "Eliminated musty odors",
            "Prevented health risks",
        ],
    },
];

#[function_component(BeforeAfterGallery)]
pub fn before_after_gallery() -> Html {
    let index = use_state(|| 0usize);
    let view_mode = use_state(|| ViewMode::Split);

    let go_prev = {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| {
            index.set((*index + PROJECTS.len() - 1) % PROJECTS.len());
        })
    };
    let go_next = {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| index.set((*index + 1) % PROJECTS.len()))
    };

    let project = &PROJECTS[*index];

    let mode_button = |mode: ViewMode, label: &'static str| {
        let active = *view_mode == mode;
        let onclick = {
            let view_mode = view_mode.clone();
            Callback::from(move |_: MouseEvent| view_mode.set(mode))
        };
        html! {
            <button class={classes!("mode-button", active.then_some("active"))} {onclick}>
                {label}
            </button>
        }
    };

    let panes = match *view_mode {
        ViewMode::Before => vec![("BEFORE", "gallery-pane before")],
        ViewMode::After => vec![("AFTER", "gallery-pane after")],
        ViewMode::Split => vec![("BEFORE", "gallery-pane before"), ("AFTER", "gallery-pane after")],
    };

    html! {
        <section class="gallery-section">
            <style>
            {r#".gallery-section { padding: 4rem 1rem; background: #f9fafb; }
            .gallery-section .section-header { text-align: center; margin-bottom: 2.5rem; }
            .gallery-section .section-header h2 { font-size: 2.2rem; color: #111827; margin-bottom: 0.5rem; }
            .gallery-section .section-header p { color: #4b5563; }
            .gallery-card {
                max-width: 860px;
                margin: 0 auto;
                background: #fff;
                border-radius: 16px;
                box-shadow: 0 4px 16px rgba(17, 24, 39, 0.08);
                overflow: hidden;
            }
            .gallery-panes { display: flex; }
            .gallery-pane {
                flex: 1;
                min-height: 260px;
                display: flex;
                align-items: center;
                justify-content: center;
                color: #fff;
                font-weight: 700;
                letter-spacing: 0.2rem;
            }
            .gallery-pane.before { background: linear-gradient(135deg, #6b7280, #374151); }
            .gallery-pane.after { background: linear-gradient(135deg, #60a5fa, #2563eb); }
            .gallery-mode-row {
                display: flex;
                justify-content: center;
                gap: 0.5rem;
                padding: 1rem;
                border-bottom: 1px solid #e5e7eb;
            }
            .mode-button {
                border: 1px solid #d1d5db;
                background: #fff;
                border-radius: 999px;
                padding: 0.4rem 1.2rem;
                cursor: pointer;
                font-size: 0.9rem;
            }
            .mode-button.active { background: #2563eb; border-color: #2563eb; color: #fff; }
            .gallery-detail { padding: 1.75rem; }
            .gallery-detail h3 { color: #111827; margin-bottom: 0.25rem; }
            .gallery-detail .project-meta { color: #6b7280; font-size: 0.9rem; margin-bottom: 1rem; }
            .gallery-detail .project-desc { color: #374151; margin-bottom: 1rem; }
            .gallery-detail ul { list-style: none; padding: 0; margin: 0; columns: 2; }
            @media (max-width: 640px) { .gallery-detail ul { columns: 1; } }
            .gallery-detail ul li { color: #374151; font-size: 0.9rem; padding: 0.2rem 0; }
            .gallery-detail ul li::before { content: "✓ "; color: #16a34a; }
            .gallery-nav {
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: 0 1.75rem 1.75rem;
            }
            .gallery-nav button {
                border: 1px solid #d1d5db;
                background: #fff;
                border-radius: 8px;
                padding: 0.5rem 1.2rem;
                cursor: pointer;
            }
            .gallery-nav button:hover { background: #f3f4f6; }
            .gallery-nav .position { color: #6b7280; font-size: 0.9rem; }"#}
            </style>
            <div class="section-header">
                <h2>{"Before & After Results"}</h2>
                <p>{"See the difference professional duct cleaning makes"}</p>
            </div>
            <div class="gallery-card">
                <div class="gallery-mode-row">
                    { mode_button(ViewMode::Before, "Before") }
                    { mode_button(ViewMode::Split, "Split") }
                    { mode_button(ViewMode::After, "After") }
                </div>
                <div class="gallery-panes">
                    {
                        panes.into_iter().map(|(label, class)| html! {
                            <div class={class}>{label}</div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="gallery-detail">
                    <h3>{project.title}</h3>
                    <div class="project-meta">
                        {format!("{} • {}", project.location, project.service)}
                    </div>
                    <p class="project-desc">{project.description}</p>
                    <ul>
                        { project.improvements.iter().map(|i| html! { <li>{i}</li> }).collect::<Html>() }
                    </ul>
                </div>
                <div class="gallery-nav">
                    <button onclick={go_prev}>{"‹ Previous"}</button>
                    <span class="position">{format!("{} of {}", *index + 1, PROJECTS.len())}</span>
                    <button onclick={go_next}>{"Next ›"}</button>
                </div>
            </div>
        </section>
    }
}
