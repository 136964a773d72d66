pub const COMPANY_NAME: &str = "CleanAir Pro";
pub const PHONE_DISPLAY: &str = "(555) 123-4567";
pub const PHONE_TEL: &str = "tel:+15551234567";
pub const EMAIL: &str = "info@cleanairpro.com";
pub const SERVICE_AREA_TAGLINE: &str = "Serving the Greater Toronto Area";

#[cfg(debug_assertions)]
pub fn get_form_endpoint() -> &'static str {
    ""  // No backend while developing locally, submissions are simulated
}

#[cfg(not(debug_assertions))]
pub fn get_form_endpoint() -> &'static str {
    ""  // Production endpoint, empty until the CRM integration lands
}
