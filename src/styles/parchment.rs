//! Aged-paper look with a double frame and a flourish under the rules text.

use super::{back_rng, draw_face, speckle, CardFace, CardStyle, FacePaint};
use crate::cards::Category;
use crate::core::{ArtRng, RenderConfig};
use crate::render::{Bitmap, Rgba};

pub const NAME: &str = "ParchmentCardStyle";

const PAPER: Rgba = Rgba::rgb(232, 214, 172);
const INK: Rgba = Rgba::rgb(58, 36, 18);

#[derive(Clone, Copy, Debug, Default)]
pub struct ParchmentCardStyle;

impl CardStyle for ParchmentCardStyle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn render_front(&self, face: &CardFace<'_>, config: &RenderConfig) -> Bitmap {
        let mut bmp = Bitmap::new(config.width, config.height, PAPER);

        // Paper grain is fixed per config so equal text renders equal pixels.
        let mut grain = ArtRng::new(config.back_seed).for_context("parchment-grain");
        speckle(&mut bmp, &mut grain, PAPER.blend(INK, 24), 0.05);

        let bottom = draw_face(
            &mut bmp,
            face,
            config,
            FacePaint {
                frame: INK,
                banner: face.template.accent.blend(PAPER, 80),
                banner_text: INK,
                title: INK,
                body: INK,
            },
        );

        let inner = i64::from(config.border * 2);
        bmp.stroke_rect(
            inner,
            inner,
            config.width.saturating_sub(config.border * 4),
            config.height.saturating_sub(config.border * 4),
            1,
            face.template.frame,
        );

        let flourish_y = bottom + i64::from(config.margin);
        if flourish_y < i64::from(config.height) - i64::from(config.margin + config.border) {
            let w = config.width / 3;
            bmp.fill_rect(i64::from((config.width - w) / 2), flourish_y, w, 1, INK);
        }
        bmp
    }

    fn render_back(&self, category: Category, config: &RenderConfig) -> Bitmap {
        let template = super::FrontTemplate::for_category(category);
        let mut bmp = Bitmap::new(config.width, config.height, PAPER.blend(template.frame, 160));
        let mut rng = back_rng(config, category);
        speckle(&mut bmp, &mut rng, PAPER, 0.12);

        let step = (config.margin * 2).max(4);
        let mut inset = config.border;
        while inset * 2 + step < config.width.min(config.height) {
            bmp.stroke_rect(
                i64::from(inset),
                i64::from(inset),
                config.width - inset * 2,
                config.height - inset * 2,
                1,
                INK,
            );
            inset += step;
        }
        bmp
    }
}
