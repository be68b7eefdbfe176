//! The classic dungeon-crawl look: parchment-white face, dark wooden frame,
//! coloured category banner.

use super::{back_rng, draw_face, speckle, CardFace, CardStyle, FacePaint};
use crate::cards::Category;
use crate::core::RenderConfig;
use crate::render::{Bitmap, Rgba};

pub const NAME: &str = "ClassicCardStyle";

#[derive(Clone, Copy, Debug, Default)]
pub struct ClassicCardStyle;

impl CardStyle for ClassicCardStyle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn render_front(&self, face: &CardFace<'_>, config: &RenderConfig) -> Bitmap {
        let mut bmp = Bitmap::new(config.width, config.height, Rgba::rgb(246, 240, 226));
        draw_face(
            &mut bmp,
            face,
            config,
            FacePaint {
                frame: face.template.frame,
                banner: face.template.accent,
                banner_text: Rgba::WHITE,
                title: Rgba::BLACK,
                body: Rgba::rgb(40, 32, 24),
            },
        );
        bmp
    }

    fn render_back(&self, category: Category, config: &RenderConfig) -> Bitmap {
        let base = match category {
            Category::Dungeon => Rgba::rgb(86, 48, 28),
            Category::Treasure => Rgba::rgb(150, 118, 30),
        };
        let mut bmp = Bitmap::new(config.width, config.height, base);
        let mut rng = back_rng(config, category);
        speckle(&mut bmp, &mut rng, base.blend(Rgba::BLACK, 64), 0.08);

        let inset = i64::from(config.margin);
        bmp.stroke_rect(
            inset,
            inset,
            config.width.saturating_sub(2 * config.margin),
            config.height.saturating_sub(2 * config.margin),
            config.border,
            base.blend(Rgba::WHITE, 96),
        );

        let label = category.as_str().to_uppercase();
        let scale = 3;
        let text_w = label.chars().count() as u32 * crate::render::font::ADVANCE * scale;
        let x = i64::from(config.width.saturating_sub(text_w) / 2);
        let y = i64::from(config.height / 2);
        bmp.draw_text(x, y, &label, scale, Rgba::WHITE);
        bmp
    }
}
