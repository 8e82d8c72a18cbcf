use serde::{Deserialize, Serialize};

/// Phone number the seeded profile carries until an admin sets a real one.
pub const PLACEHOLDER_PHONE: &str = "+92 300 1234567";

/// Postal address of the restaurant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub postal_code: String,
}

impl Address {
    /// "street, city, region, country", or `None` when the street is blank.
    pub fn one_line(&self) -> Option<String> {
        if self.street.trim().is_empty() {
            return None;
        }
        Some(format!(
            "{}, {}, {}, {}",
            self.street, self.city, self.region, self.country
        ))
    }
}

/// The restaurant's public profile.
///
/// There is exactly one of these; updates replace it wholesale.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantProfile {
    pub owner: String,
    pub name: String,
    pub description: String,
    pub google_maps_link: String,
    pub address: Address,
    pub phone_number: String,
}

impl RestaurantProfile {
    /// The profile the store starts with before an admin edits it.
    pub fn seeded() -> Self {
        Self {
            owner: String::new(),
            name: "Nagail Shinwari Tikka House".to_string(),
            description: "Authentic Pakistani BBQ & Tikka".to_string(),
            google_maps_link: String::new(),
            address: Address {
                street: String::new(),
                city: "Gujar Khan".to_string(),
                region: "Punjab".to_string(),
                country: "Pakistan".to_string(),
                postal_code: String::new(),
            },
            phone_number: PLACEHOLDER_PHONE.to_string(),
        }
    }

    /// The phone number, unless it is blank or still the placeholder.
    pub fn public_phone(&self) -> Option<&str> {
        let phone = self.phone_number.trim();
        if phone.is_empty() || phone == PLACEHOLDER_PHONE {
            None
        } else {
            Some(phone)
        }
    }
}
