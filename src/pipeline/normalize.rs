use crate::image;
use crate::models::RawCard;

/// Rewrite every relative `card_image` into an absolute URL on `base_url`.
///
/// Records without an image, or whose image is already absolute, pass through
/// unchanged. Nothing is dropped and order is preserved.
pub fn normalize(cards: Vec<RawCard>, base_url: &str) -> Vec<RawCard> {
    cards
        .into_iter()
        .map(|mut card| {
            if let Some(img) = card.image() {
                if !image::is_absolute_url(img) {
                    card.card_image = Some(image::absolutize(img.trim(), base_url));
                }
            }
            card
        })
        .collect()
}
