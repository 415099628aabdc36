//! Strip painting: a pixmap back buffer, edge highlight bands, and labels
//! rasterized with `ab_glyph` and uploaded as Z-pixmap images.

use ab_glyph::{point, Font, FontVec, Glyph, PxScale, ScaleFont};
use dockbar_core::models::DockEntry;
use x11rb::connection::Connection;
use x11rb::protocol::xproto;

use crate::error::Result;
use crate::xwrap::XWrap;
use crate::X11rbWindowHandle;

/// Width of the highlight bands on each strip edge.
const EDGE_BAND_WIDTH: i32 = 3;
/// Vertical inset of the highlight bands.
const EDGE_INSET: i32 = 8;
/// Horizontal inset of the label inside its strip.
const LABEL_INSET: i32 = 8;

impl XWrap {
    /// Repaint the whole panel from the given laid-out entries.
    pub fn draw_entries(&mut self, entries: &[&DockEntry<X11rbWindowHandle>]) -> Result<()> {
        let (width, height) = self.panel_size;
        xproto::change_gc(
            &self.conn,
            self.gc,
            &xproto::ChangeGCAux::new().foreground(self.colors.background),
        )?;
        xproto::poly_fill_rectangle(
            &self.conn,
            self.pixmap,
            self.gc,
            &[xproto::Rectangle {
                x: 0,
                y: 0,
                width,
                height,
            }],
        )?;

        for entry in entries {
            self.draw_strip(entry)?;
        }

        xproto::copy_area(
            &self.conn,
            self.pixmap,
            self.panel,
            self.gc,
            0,
            0,
            0,
            0,
            width,
            height,
        )?;
        self.conn.flush()?;
        Ok(())
    }

    fn draw_strip(&mut self, entry: &DockEntry<X11rbWindowHandle>) -> Result<()> {
        let geo = entry.geometry;
        if geo.width <= 0 {
            return Ok(());
        }

        // Highlight bands along both strip edges, inset vertically.
        let band_height = geo.height - 2 * EDGE_INSET;
        if band_height > 0 && geo.width > 2 * EDGE_BAND_WIDTH {
            xproto::change_gc(
                &self.conn,
                self.gc,
                &xproto::ChangeGCAux::new().foreground(self.colors.highlight),
            )?;
            let bands = [
                xproto::Rectangle {
                    x: geo.x as i16,
                    y: EDGE_INSET as i16,
                    width: EDGE_BAND_WIDTH as u16,
                    height: band_height as u16,
                },
                xproto::Rectangle {
                    x: (geo.x + geo.width - EDGE_BAND_WIDTH) as i16,
                    y: EDGE_INSET as i16,
                    width: EDGE_BAND_WIDTH as u16,
                    height: band_height as u16,
                },
            ];
            xproto::poly_fill_rectangle(&self.conn, self.pixmap, self.gc, &bands)?;
        }

        let avail = geo.width - 2 * LABEL_INSET;
        if avail <= 0 {
            return Ok(());
        }
        let label = match self.font.as_ref() {
            Some(font) => elide(font, self.font_size, entry.label(), avail as f32),
            None => return Ok(()),
        };
        if label.is_empty() {
            return Ok(());
        }
        self.draw_label(&label, geo.x + LABEL_INSET, geo.height)
    }

    fn draw_label(&mut self, text: &str, x: i32, strip_height: i32) -> Result<()> {
        let mut buf = std::mem::take(&mut self.render_buf);
        let (width, height) = match self.font.as_ref() {
            Some(font) => rasterize_label(
                font,
                self.font_size,
                text,
                self.colors.text,
                self.colors.background,
                &mut buf,
            ),
            None => (0, 0),
        };
        if width == 0 || height == 0 {
            self.render_buf = buf;
            return Ok(());
        }

        let y = std::cmp::max((strip_height - height as i32) / 2, 0);
        let result = xproto::put_image(
            &self.conn,
            xproto::ImageFormat::Z_PIXMAP,
            self.pixmap,
            self.gc,
            width as u16,
            height as u16,
            x as i16,
            y as i16,
            0,
            self.depth,
            &buf,
        );
        self.render_buf = buf;
        result?;
        Ok(())
    }
}

/// Render one line of text over the background color into a BGRA buffer.
/// Returns the buffer's pixel dimensions.
fn rasterize_label(
    font: &FontVec,
    size: f32,
    text: &str,
    fg: u32,
    bg: u32,
    buf: &mut Vec<u8>,
) -> (usize, usize) {
    if text.is_empty() {
        return (0, 0);
    }
    let scaled = font.as_scaled(PxScale::from(size));

    let mut glyphs = Vec::new();
    layout_line(scaled, point(0.0, 0.0), text, &mut glyphs);
    if glyphs.is_empty() {
        return (0, 0);
    }

    let height = size.ceil() as usize + 4;
    let width = glyphs
        .last()
        .map_or(0.0, |g| g.position.x + scaled.h_advance(g.id))
        .ceil() as usize
        + 2;
    if width == 0 {
        return (0, 0);
    }

    buf.clear();
    buf.resize(width * height * 4, 0);

    let (bg_r, bg_g, bg_b) = channels(bg);
    for px in buf.chunks_exact_mut(4) {
        px[0] = bg_b as u8;
        px[1] = bg_g as u8;
        px[2] = bg_r as u8;
        px[3] = 0xff;
    }

    let (fg_r, fg_g, fg_b) = channels(fg);
    for glyph in glyphs {
        if let Some(outlined) = scaled.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let px = bounds.min.x as i32 + gx as i32;
                let py = bounds.min.y as i32 + gy as i32;
                if px >= 0 && px < width as i32 && py >= 0 && py < height as i32 {
                    let idx = (py as usize * width + px as usize) * 4;
                    let alpha = (coverage * 256.0) as u16;
                    let inv_alpha = 256 - alpha;
                    let cur_b = u16::from(buf[idx]);
                    let cur_g = u16::from(buf[idx + 1]);
                    let cur_r = u16::from(buf[idx + 2]);
                    buf[idx] = ((fg_b * alpha + cur_b * inv_alpha) >> 8) as u8;
                    buf[idx + 1] = ((fg_g * alpha + cur_g * inv_alpha) >> 8) as u8;
                    buf[idx + 2] = ((fg_r * alpha + cur_r * inv_alpha) >> 8) as u8;
                }
            });
        }
    }
    (width, height)
}

/// Position the glyphs of a single line; control characters are dropped.
fn layout_line<F, SF>(font: SF, position: ab_glyph::Point, text: &str, target: &mut Vec<Glyph>)
where
    F: Font,
    SF: ScaleFont<F>,
{
    let mut caret = position + point(0.0, font.ascent());
    let mut last_glyph_id = None;
    for c in text.chars() {
        if c.is_control() {
            continue;
        }
        let mut glyph = font.scaled_glyph(c);
        if let Some(previous) = last_glyph_id {
            caret.x += font.kern(previous, glyph.id);
        }
        glyph.position = point(caret.x.round(), caret.y);
        last_glyph_id = Some(glyph.id);
        caret.x += font.h_advance(glyph.id);
        target.push(glyph);
    }
}

fn text_width<F: Font>(font: &F, size: f32, text: &str) -> f32 {
    let scaled = font.as_scaled(PxScale::from(size));
    let mut width = 0.0;
    let mut last_glyph_id = None;
    for c in text.chars() {
        let glyph_id = scaled.glyph_id(c);
        if let Some(last) = last_glyph_id {
            width += scaled.kern(last, glyph_id);
        }
        width += scaled.h_advance(glyph_id);
        last_glyph_id = Some(glyph_id);
    }
    width.ceil()
}

/// Shorten `text` with a trailing ellipsis until it fits `max_width`.
fn elide<F: Font>(font: &F, size: f32, text: &str, max_width: f32) -> String {
    if text_width(font, size, text) <= max_width {
        return text.to_string();
    }

    let ellipsis = "…";
    let ellipsis_width = text_width(font, size, ellipsis);
    if max_width < ellipsis_width {
        return String::new();
    }

    let target_width = max_width - ellipsis_width;
    let mut shortened = text.to_string();
    while !shortened.is_empty() {
        if text_width(font, size, &shortened) <= target_width {
            shortened.push_str(ellipsis);
            return shortened;
        }
        shortened.pop();
    }
    ellipsis.to_string()
}
