use std::cell::RefCell;
use std::collections::HashMap;

use crate::math::Point;
use crate::render::RenderContext;
use crate::style::Color;

thread_local! {
    static FONTS: RefCell<cosmic_text::FontSystem> = RefCell::new(cosmic_text::FontSystem::new());
    static GLYPH_CACHE: RefCell<GlyphCache> = RefCell::new(GlyphCache::new());
}


struct CachedGlyph {
    offset: (i32, i32),
    image: Option<tiny_skia::Pixmap>
}

/// Rasterized glyphs, one entry per glyph and color.
struct GlyphCache {
    swash_cache: cosmic_text::SwashCache,
    cached_glyphs: HashMap<(cosmic_text::CacheKey, Color), CachedGlyph>
}

impl GlyphCache {
    fn new() -> GlyphCache {
        GlyphCache {
            swash_cache: cosmic_text::SwashCache::new(),
            cached_glyphs: HashMap::new()
        }
    }

    fn get_glyph(&mut self, fonts: &mut cosmic_text::FontSystem, key: cosmic_text::CacheKey, color: Color) -> &CachedGlyph {
        self.cached_glyphs.entry((key, color))
            .or_insert_with(|| Self::render(fonts, &mut self.swash_cache, key, color))
    }

    fn render(fonts: &mut cosmic_text::FontSystem, swash_cache: &mut cosmic_text::SwashCache, key: cosmic_text::CacheKey, color: Color) -> CachedGlyph {
        let Some(swash_image) = swash_cache.get_image_uncached(fonts, key) else {
            return CachedGlyph { offset: (0, 0), image: None };
        };

        let offset = (swash_image.placement.left, swash_image.placement.top);
        let (width, height) = (swash_image.placement.width, swash_image.placement.height);
        // color glyphs (emoji) are not supported, only coverage masks
        if !matches!(swash_image.content, cosmic_text::SwashContent::Mask) {
            log::debug!("skipping non-mask glyph {:?}", key.glyph_id);
            return CachedGlyph { offset, image: None };
        }

        let image = tiny_skia::IntSize::from_wh(width, height)
            .and_then(|size| tiny_skia::Mask::from_vec(swash_image.data, size))
            .and_then(|mask| {
                let mut image = tiny_skia::Pixmap::new(width, height)?;
                let rect = tiny_skia::Rect::from_xywh(0.0, 0.0, width as f32, height as f32)?;
                let mut paint = tiny_skia::Paint::default();
                paint.set_color(color.into());
                image.fill_rect(rect, &paint, tiny_skia::Transform::identity(), Some(&mask));
                Some(image)
            });

        CachedGlyph { offset, image }
    }
}


fn shaped_buffer(fonts: &mut cosmic_text::FontSystem, text: &str, font_size: f32) -> cosmic_text::Buffer {
    let metrics = cosmic_text::Metrics::new(font_size, font_size);
    let mut buffer = cosmic_text::Buffer::new(fonts, metrics);
    buffer.set_size(fonts, f32::INFINITY, f32::INFINITY);
    buffer.set_text(fonts, text, cosmic_text::Attrs::new(), cosmic_text::Shaping::Advanced);
    buffer
}

/// Width of the widest line of `text` at `font_size`, in logical pixels.
pub fn measure_text(text: &str, font_size: f32) -> f32 {
    FONTS.with_borrow_mut(|fonts| {
        let buffer = shaped_buffer(fonts, text, font_size);
        buffer.layout_runs().map(|run| run.line_w).max_by(f32::total_cmp).unwrap_or(0.0)
    })
}

/// Glyphs are rasterized at device resolution, so the context transform is
/// applied to the origin and the font size rather than to the glyph images.
pub fn draw_text(context: &mut RenderContext, text: &str, origin: Point, font_size: f32, color: Color) {
    let transform = context.transform;
    let device_origin = Point::new(
        origin.x * transform.sx + transform.tx,
        origin.y * transform.sy + transform.ty
    );
    let device_size = font_size * transform.sy;
    if device_size <= 0.0 {
        return;
    }

    FONTS.with_borrow_mut(|fonts| {
        let buffer = shaped_buffer(fonts, text, device_size);

        GLYPH_CACHE.with_borrow_mut(|glyph_cache| {
            for run in buffer.layout_runs() {
                for glyph in run.glyphs {
                    let physical_glyph = glyph.physical((device_origin.x, device_origin.y + run.line_y), 1.0);

                    let rendered_glyph = glyph_cache.get_glyph(fonts, physical_glyph.cache_key, color);
                    if let Some(glyph_image) = &rendered_glyph.image {
                        context.canvas.draw_pixmap(
                            physical_glyph.x + rendered_glyph.offset.0,
                            physical_glyph.y - rendered_glyph.offset.1,
                            glyph_image.as_ref(),
                            &tiny_skia::PixmapPaint::default(), tiny_skia::Transform::identity(), None
                        );
                    }
                }
            }
        });
    });
}
