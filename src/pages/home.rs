use yew::prelude::*;

use crate::components::gallery::BeforeAfterGallery;
use crate::components::hero::HeroSection;
use crate::components::service_area::ServiceAreaMap;
use crate::components::services_overview::ServicesOverview;
use crate::components::testimonials::TestimonialsCarousel;
use crate::components::trust_badges::TrustBadges;
use crate::forms::quote::QuickQuoteForm;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <HeroSection />
            <ServicesOverview />
            <TestimonialsCarousel />
            <BeforeAfterGallery />
            <TrustBadges />
            <ServiceAreaMap />
            <QuickQuoteForm />
        </>
    }
}
