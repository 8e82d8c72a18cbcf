use super::{new_id, require, Confirm, IMAGE_DELETE_PROMPT};
use crate::model::GalleryImage;
use crate::query::{ClientError, QueryClient};
use tracing::debug;

/// Add/edit form for gallery image metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageForm {
    editing: Option<String>,
    pub filename: String,
    pub alt_text: String,
}

impl ImageForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(image: &GalleryImage) -> Self {
        Self {
            editing: Some(image.id.clone()),
            filename: image.filename.clone(),
            alt_text: image.alt_text.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    pub async fn submit(&mut self, client: &mut QueryClient) -> Result<(), ClientError> {
        require(&self.filename, "Filename")?;
        require(&self.alt_text, "Alt text")?;
        let id = self.editing.clone().unwrap_or_else(new_id);
        let image = GalleryImage::new(id, self.filename.clone(), self.alt_text.clone());
        if self.is_edit() {
            client.update_image(image).await?;
        } else {
            client.add_image(image).await?;
        }
        *self = Self::default();
        Ok(())
    }
}

pub async fn delete_image(
    client: &mut QueryClient,
    confirm: &mut impl Confirm,
    image_id: &str,
) -> Result<bool, ClientError> {
    if !confirm.confirm(IMAGE_DELETE_PROMPT) {
        debug!(image_id, "Image deletion declined");
        return Ok(false);
    }
    client.delete_image(image_id).await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_alt_text_is_required() {
        let mut client = QueryClient::new(0);
        let mut form = ImageForm::new();
        form.filename = "karahi.png".to_string();
        let err = form.submit(&mut client).await.unwrap_err();
        assert_eq!(err, ClientError::Validation("Alt text is required".to_string()));
    }

    #[tokio::test]
    async fn test_valid_form_without_backend_is_kept() {
        let mut client = QueryClient::new(0);
        let mut form = ImageForm::new();
        form.filename = "karahi.png".to_string();
        form.alt_text = "Karahi".to_string();
        let err = form.submit(&mut client).await.unwrap_err();
        assert_eq!(err, ClientError::ActorNotReady);
        assert_eq!(form.filename, "karahi.png");
    }
}
