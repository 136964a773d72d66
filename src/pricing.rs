//! Instant-estimate engine behind the pricing calculator.
//!
//! Everything here is catalog data plus one pure function. The tier prices,
//! footage multipliers and add-on prices are business configuration, kept in
//! static tables so the calculator UI and the estimate share one source.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PropertyType {
    Residential,
    Commercial,
}

impl PropertyType {
    pub fn label(self) -> &'static str {
        match self {
            PropertyType::Residential => "Residential",
            PropertyType::Commercial => "Commercial",
        }
    }
}

#[derive(PartialEq, Debug)]
pub struct FootageBand {
    pub id: &'static str,
    pub label: &'static str,
    pub multiplier: f64,
}

pub static FOOTAGE_BANDS: [FootageBand; 5] = [
    FootageBand { id: "under-1000", label: "Under 1,000 sq ft", multiplier: 0.8 },
    FootageBand { id: "1000-2000", label: "1,000 - 2,000 sq ft", multiplier: 1.0 },
    FootageBand { id: "2000-3000", label: "2,000 - 3,000 sq ft", multiplier: 1.3 },
    FootageBand { id: "3000-5000", label: "3,000 - 5,000 sq ft", multiplier: 1.6 },
    FootageBand { id: "over-5000", label: "Over 5,000 sq ft", multiplier: 2.0 },
];

#[derive(PartialEq, Debug)]
pub struct ServiceTier {
    pub id: &'static str,
    pub label: &'static str,
    pub base_price: f64,
    pub description: &'static str,
}

static RESIDENTIAL_TIERS: [ServiceTier; 3] = [
    ServiceTier { id: "basic", label: "Basic Clean", base_price: 299.0, description: "Standard duct cleaning service" },
    ServiceTier { id: "complete", label: "Complete Clean", base_price: 399.0, description: "Comprehensive cleaning with coils" },
    ServiceTier { id: "premium", label: "Premium Clean", base_price: 499.0, description: "Ultimate service with extras" },
];

static COMMERCIAL_TIERS: [ServiceTier; 3] = [
    ServiceTier { id: "basic", label: "Basic Commercial", base_price: 599.0, description: "Standard commercial cleaning" },
    ServiceTier { id: "complete", label: "Complete Commercial", base_price: 799.0, description: "Comprehensive commercial service" },
    ServiceTier { id: "premium", label: "Premium Commercial", base_price: 999.0, description: "Full commercial package" },
];

pub fn tiers_for(property: PropertyType) -> &'static [ServiceTier] {
    match property {
        PropertyType::Residential => &RESIDENTIAL_TIERS,
        PropertyType::Commercial => &COMMERCIAL_TIERS,
    }
}

#[derive(PartialEq, Debug)]
pub struct AddOn {
    pub id: &'static str,
    pub name: &'static str,
    pub price: f64,
}

pub static ADD_ONS: [AddOn; 4] = [
    AddOn { id: "dryer-vent", name: "Dryer Vent Cleaning", price: 149.0 },
    AddOn { id: "sanitization", name: "Sanitization Treatment", price: 199.0 },
    AddOn { id: "filter-replacement", name: "Premium Filter Upgrade", price: 79.0 },
    AddOn { id: "uv-light", name: "UV Light Installation", price: 299.0 },
];

/// 10% off the add-on subtotal once two or more add-ons are picked.
const MULTI_ADDON_DISCOUNT: f64 = 0.10;
const MULTI_ADDON_THRESHOLD: usize = 2;

pub fn footage_band(id: &str) -> Option<&'static FootageBand> {
    FOOTAGE_BANDS.iter().find(|band| band.id == id)
}

pub fn tier(property: PropertyType, id: &str) -> Option<&'static ServiceTier> {
    tiers_for(property).iter().find(|tier| tier.id == id)
}

#[derive(PartialEq, Debug)]
pub struct Breakdown {
    pub base_price: f64,
    pub add_ons: Vec<&'static AddOn>,
    pub discount: f64,
    pub total: f64,
}

/// Computes the estimate for the current selection, or `None` while the
/// footage band or tier is still unselected. Unknown add-on ids are ignored.
/// No rounding happens here; the view rounds the displayed total.
pub fn estimate(
    property: PropertyType,
    footage_id: &str,
    tier_id: &str,
    add_on_ids: &[String],
) -> Option<Breakdown> {
    let band = footage_band(footage_id)?;
    let tier = tier(property, tier_id)?;

    let base_price = tier.base_price * band.multiplier;
    let add_ons: Vec<&'static AddOn> = ADD_ONS
        .iter()
        .filter(|addon| add_on_ids.iter().any(|id| id == addon.id))
        .collect();
    let add_on_subtotal: f64 = add_ons.iter().map(|addon| addon.price).sum();

    let discount = if add_ons.len() >= MULTI_ADDON_THRESHOLD {
        add_on_subtotal * MULTI_ADDON_DISCOUNT
    } else {
        0.0
    };

    Some(Breakdown {
        base_price,
        add_ons,
        discount,
        total: base_price + add_on_subtotal - discount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn no_estimate_until_footage_and_tier_are_picked() {
        assert_eq!(estimate(PropertyType::Residential, "", "basic", &[]), None);
        assert_eq!(estimate(PropertyType::Residential, "1000-2000", "", &[]), None);
        assert_eq!(estimate(PropertyType::Residential, "", "", &[]), None);
    }

    #[test]
    fn residential_basic_mid_band_no_add_ons() {
        let breakdown = estimate(PropertyType::Residential, "1000-2000", "basic", &[]).unwrap();
        assert!(close(breakdown.base_price, 299.0));
        assert!(breakdown.add_ons.is_empty());
        assert!(close(breakdown.discount, 0.0));
        assert!(close(breakdown.total, 299.0));
    }

    #[test]
    fn two_add_ons_trigger_ten_percent_discount() {
        let breakdown = estimate(
            PropertyType::Residential,
            "1000-2000",
            "basic",
            &ids(&["dryer-vent", "sanitization"]),
        )
        .unwrap();
        let subtotal: f64 = breakdown.add_ons.iter().map(|a| a.price).sum();
        assert!(close(subtotal, 348.0));
        assert!(close(breakdown.discount, 34.8));
        assert!(close(breakdown.total, 299.0 + 348.0 - 34.8));
    }

    #[test]
    fn single_add_on_gets_no_discount() {
        let breakdown = estimate(
            PropertyType::Residential,
            "1000-2000",
            "basic",
            &ids(&["uv-light"]),
        )
        .unwrap();
        assert!(close(breakdown.discount, 0.0));
        assert!(close(breakdown.total, 299.0 + 299.0));
    }

    #[test]
    fn premium_over_5000_doubles_the_base() {
        let breakdown = estimate(PropertyType::Residential, "over-5000", "premium", &[]).unwrap();
        assert!(close(breakdown.base_price, 998.0));
    }

    #[test]
    fn commercial_tiers_use_their_own_base_prices() {
        let breakdown = estimate(PropertyType::Commercial, "1000-2000", "complete", &[]).unwrap();
        assert!(close(breakdown.base_price, 799.0));
    }

    #[test]
    fn unknown_add_on_ids_are_ignored() {
        let breakdown = estimate(
            PropertyType::Residential,
            "1000-2000",
            "basic",
            &ids(&["not-a-real-addon"]),
        )
        .unwrap();
        assert!(breakdown.add_ons.is_empty());
        assert!(close(breakdown.total, 299.0));
    }
}
