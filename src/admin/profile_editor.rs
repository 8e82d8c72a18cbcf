use super::require;
use crate::model::RestaurantProfile;
use crate::query::{ClientError, QueryClient};

/// Edits the whole restaurant profile, starting from the fetched record.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileForm {
    pub profile: RestaurantProfile,
}

impl ProfileForm {
    pub fn new(profile: RestaurantProfile) -> Self {
        Self { profile }
    }

    /// Every field but the postal code must be filled in.
    pub fn validate(&self) -> Result<(), ClientError> {
        let p = &self.profile;
        require(&p.name, "Restaurant name")?;
        require(&p.description, "Description")?;
        require(&p.owner, "Owner")?;
        require(&p.phone_number, "Phone number")?;
        require(&p.address.street, "Street")?;
        require(&p.address.city, "City")?;
        require(&p.address.region, "Region")?;
        require(&p.address.country, "Country")?;
        require(&p.google_maps_link, "Google Maps link")?;
        Ok(())
    }

    /// Sends the whole record. The form keeps its values so editing can continue.
    pub async fn submit(&self, client: &mut QueryClient) -> Result<(), ClientError> {
        self.validate()?;
        client.update_restaurant_profile(self.profile.clone()).await
    }
}
