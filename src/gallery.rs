/// Leading images that load eagerly; the rest load lazily.
pub const EAGER_IMAGE_COUNT: usize = 4;
/// Fixed aspect ratio of every gallery tile, as a CSS `aspect-ratio` value.
pub const TILE_ASPECT_RATIO: &str = "9 / 16";
/// Layout dimensions handed to the browser so tiles reserve space before loading.
pub const TILE_WIDTH: u32 = 360;
pub const TILE_HEIGHT: u32 = 640;
/// `sizes` hint matching the 1/2/3/4 column grid breakpoints.
pub const TILE_SIZES: &str =
    "(max-width: 640px) 100vw, (max-width: 1024px) 50vw, (max-width: 1280px) 33vw, 25vw";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlot {
    pub src: String,
    pub alt: String,
    pub eager: bool,
}

impl ImageSlot {
    pub fn loading(&self) -> &'static str {
        if self.eager {
            "eager"
        } else {
            "lazy"
        }
    }
}

pub fn image_slots(images: &[String]) -> Vec<ImageSlot> {
    images
        .iter()
        .enumerate()
        .map(|(i, src)| ImageSlot {
            src: src.clone(),
            alt: format!("Gallery image {}", i + 1),
            eager: i < EAGER_IMAGE_COUNT,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_follow_image_order() {
        let images = (1..=6).map(|i| format!("/img-{i}.png")).collect::<Vec<_>>();
        let slots = image_slots(&images);
        assert_eq!(slots.len(), 6);
        assert_eq!(slots[0].src, "/img-1.png");
        assert_eq!(slots[0].alt, "Gallery image 1");
        assert_eq!(slots[5].alt, "Gallery image 6");
    }

    #[test]
    fn test_only_leading_images_are_eager() {
        let images = (1..=6).map(|i| format!("/img-{i}.png")).collect::<Vec<_>>();
        let eager = image_slots(&images)
            .iter()
            .filter(|s| s.eager)
            .count();
        assert_eq!(eager, EAGER_IMAGE_COUNT);
        let slots = image_slots(&images);
        assert_eq!(slots[3].loading(), "eager");
        assert_eq!(slots[4].loading(), "lazy");
    }

    #[test]
    fn test_empty_list() {
        assert!(image_slots(&[]).is_empty());
    }
}
