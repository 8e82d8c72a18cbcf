//! Overview, location and contact sections of the public page.

use crate::model::RestaurantProfile;

const FALLBACK_NAME: &str = "Nagail Shinwari Tikka House";
const FALLBACK_DESCRIPTION: &str = "Authentic Pakistani BBQ & Tikka";
const FALLBACK_LOCATION: &str = "Gujar Khan, Punjab, Pakistan";

fn non_blank(text: &str) -> Option<&str> {
    (!text.trim().is_empty()).then_some(text)
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewView {
    pub name: String,
    pub description: String,
}

impl OverviewView {
    pub fn build(profile: Option<&RestaurantProfile>) -> Self {
        Self {
            name: profile
                .and_then(|p| non_blank(&p.name))
                .unwrap_or(FALLBACK_NAME)
                .to_string(),
            description: profile
                .and_then(|p| non_blank(&p.description))
                .unwrap_or(FALLBACK_DESCRIPTION)
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationView {
    pub address: String,
    /// Map link, when one is set.
    pub map_link: Option<String>,
}

impl LocationView {
    pub fn build(profile: Option<&RestaurantProfile>) -> Self {
        Self {
            address: profile
                .and_then(|p| p.address.one_line())
                .unwrap_or_else(|| FALLBACK_LOCATION.to_string()),
            map_link: profile
                .and_then(|p| non_blank(&p.google_maps_link))
                .map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactView {
    pub phone: Option<String>,
}

impl ContactView {
    pub fn build(profile: Option<&RestaurantProfile>) -> Self {
        Self {
            phone: profile.and_then(|p| p.public_phone()).map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Address;

    fn configured() -> RestaurantProfile {
        RestaurantProfile {
            owner: "Nagail".to_string(),
            name: "Shinwari House".to_string(),
            description: "Charcoal grill".to_string(),
            google_maps_link: "https://maps.example/nagail".to_string(),
            address: Address {
                street: "GT Road".to_string(),
                city: "Gujar Khan".to_string(),
                region: "Punjab".to_string(),
                country: "Pakistan".to_string(),
                postal_code: String::new(),
            },
            phone_number: "+92 51 3512345".to_string(),
        }
    }

    #[test]
    fn test_missing_profile_uses_fallbacks() {
        let overview = OverviewView::build(None);
        assert_eq!(overview.name, "Nagail Shinwari Tikka House");
        assert_eq!(overview.description, "Authentic Pakistani BBQ & Tikka");

        let location = LocationView::build(None);
        assert_eq!(location.address, "Gujar Khan, Punjab, Pakistan");
        assert_eq!(location.map_link, None);

        assert_eq!(ContactView::build(None).phone, None);
    }

    #[test]
    fn test_seeded_profile_hides_placeholder_phone_and_blank_street() {
        let seeded = RestaurantProfile::seeded();
        assert_eq!(ContactView::build(Some(&seeded)).phone, None);
        assert_eq!(
            LocationView::build(Some(&seeded)).address,
            "Gujar Khan, Punjab, Pakistan"
        );
    }

    #[test]
    fn test_configured_profile_is_shown() {
        let profile = configured();
        assert_eq!(OverviewView::build(Some(&profile)).name, "Shinwari House");
        let location = LocationView::build(Some(&profile));
        assert_eq!(location.address, "GT Road, Gujar Khan, Punjab, Pakistan");
        assert_eq!(location.map_link.as_deref(), Some("https://maps.example/nagail"));
        assert_eq!(
            ContactView::build(Some(&profile)).phone.as_deref(),
            Some("+92 51 3512345")
        );
    }
}
