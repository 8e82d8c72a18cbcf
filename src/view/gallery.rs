use crate::model::GalleryImage;
use crate::query::QueryStatus;

const DEFAULT_IMAGES: [(&str, &str, &str); 3] = [
    (
        "default-1",
        "nagail-food-1.dim_1200x800.png",
        "Delicious tikka platter with fresh naan and sides",
    ),
    (
        "default-2",
        "nagail-food-2.dim_1200x800.png",
        "Traditional karahi with tikka and fresh naan bread",
    ),
    (
        "default-3",
        "nagail-restaurant.dim_1200x800.png",
        "Warm and inviting restaurant interior",
    ),
];

/// Images shown while the store has none.
pub fn default_images() -> Vec<GalleryImage> {
    DEFAULT_IMAGES
        .iter()
        .map(|(id, filename, alt)| GalleryImage::new(*id, *filename, *alt))
        .collect()
}

/// An image with its filename resolved against the public asset path.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedImage {
    pub id: String,
    pub url: String,
    pub alt_text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GalleryView {
    Loading,
    Images(Vec<ResolvedImage>),
}

impl GalleryView {
    pub fn build(images: &QueryStatus<Vec<GalleryImage>>, public_path: &str) -> Self {
        if images.is_pending() {
            return GalleryView::Loading;
        }
        let stored = images.ready().cloned().unwrap_or_default();
        let chosen = if stored.is_empty() {
            default_images()
        } else {
            stored
        };
        let base = public_path.trim_end_matches('/');
        GalleryView::Images(
            chosen
                .into_iter()
                .map(|image| ResolvedImage {
                    url: format!("{}/{}", base, image.filename),
                    id: image.id,
                    alt_text: image.alt_text,
                })
                .collect(),
        )
    }

    pub fn images(&self) -> &[ResolvedImage] {
        match self {
            GalleryView::Images(images) => images,
            GalleryView::Loading => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_shows_defaults() {
        let view = GalleryView::build(&QueryStatus::Ready(Vec::new()), "/assets/generated");
        let urls: Vec<&str> = view.images().iter().map(|i| i.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "/assets/generated/nagail-food-1.dim_1200x800.png",
                "/assets/generated/nagail-food-2.dim_1200x800.png",
                "/assets/generated/nagail-restaurant.dim_1200x800.png",
            ]
        );
    }

    #[test]
    fn test_stored_images_replace_defaults() {
        let images = vec![GalleryImage::new("g1", "karahi.png", "Karahi")];
        let view = GalleryView::build(&QueryStatus::Ready(images), "/static/");
        assert_eq!(view.images().len(), 1);
        assert_eq!(view.images()[0].url, "/static/karahi.png");
        assert_eq!(view.images()[0].alt_text, "Karahi");
    }

    #[test]
    fn test_pending_read_is_loading() {
        assert_eq!(
            GalleryView::build(&QueryStatus::Pending, "/assets/generated"),
            GalleryView::Loading
        );
    }
}
