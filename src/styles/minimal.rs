//! Print-friendly black on white.

use super::{draw_face, CardFace, CardStyle, FacePaint};
use crate::cards::Category;
use crate::core::RenderConfig;
use crate::render::{font, Bitmap, Rgba};

pub const NAME: &str = "MinimalCardStyle";

#[derive(Clone, Copy, Debug, Default)]
pub struct MinimalCardStyle;

fn corner_mark(category: Category) -> &'static str {
    match category {
        Category::Dungeon => "D",
        Category::Treasure => "T",
    }
}

impl CardStyle for MinimalCardStyle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn render_front(&self, face: &CardFace<'_>, config: &RenderConfig) -> Bitmap {
        let mut bmp = Bitmap::new(config.width, config.height, Rgba::WHITE);
        draw_face(
            &mut bmp,
            face,
            config,
            FacePaint {
                frame: Rgba::BLACK,
                banner: Rgba::rgb(224, 224, 224),
                banner_text: Rgba::BLACK,
                title: Rgba::BLACK,
                body: Rgba::BLACK,
            },
        );

        let x = i64::from(config.width.saturating_sub(config.margin + config.border + font::ADVANCE));
        let y = i64::from(config.height.saturating_sub(config.margin + config.border + font::GLYPH_HEIGHT));
        bmp.draw_text(x, y, corner_mark(face.category), 1, Rgba::BLACK);
        bmp
    }

    fn render_back(&self, category: Category, config: &RenderConfig) -> Bitmap {
        let mut bmp = Bitmap::new(config.width, config.height, Rgba::WHITE);
        bmp.stroke_rect(0, 0, config.width, config.height, config.border, Rgba::BLACK);

        let scale = (config.width / (font::ADVANCE * 4)).max(1);
        let mark = corner_mark(category);
        let x = i64::from(config.width.saturating_sub(font::GLYPH_WIDTH * scale) / 2);
        let y = i64::from(config.height.saturating_sub(font::GLYPH_HEIGHT * scale) / 2);
        bmp.draw_text(x, y, mark, scale, Rgba::BLACK);
        bmp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_mark_changes_front() {
        let cfg = RenderConfig::default();
        let dungeon = CardFace::new("Same", "Same", Category::Dungeon);
        let treasure = CardFace::new("Same", "Same", Category::Treasure);
        assert_ne!(
            MinimalCardStyle.render_front(&dungeon, &cfg),
            MinimalCardStyle.render_front(&treasure, &cfg)
        );
    }

    #[test]
    fn test_back_only_black_and_white() {
        let cfg = RenderConfig::default().with_size(40, 56);
        let bmp = MinimalCardStyle.render_back(Category::Treasure, &cfg);
        assert!(bmp
            .as_bytes()
            .chunks(4)
            .all(|p| p == [0, 0, 0, 255] || p == [255, 255, 255, 255]));
    }
}
