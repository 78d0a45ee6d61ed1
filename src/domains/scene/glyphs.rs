use image::{Rgba, RgbaImage};

const GLYPH_WIDTH: u32 = 3;
const GLYPH_HEIGHT: u32 = 5;

// 3x5 digits, one row per byte, most significant of the low three bits on the left.
const DIGITS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b010, 0b010, 0b010],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

/// Pixel size of `text` at `scale`, including one-column gaps between glyphs.
pub fn label_size(text: &str, scale: u32) -> (u32, u32) {
    let count = text.chars().count() as u32;
    if count == 0 {
        return (0, 0);
    }
    let width = (count * GLYPH_WIDTH + (count - 1)) * scale;
    (width, GLYPH_HEIGHT * scale)
}

/// Draw decimal `text` centred on `center`. Characters other than digits
/// leave a blank cell. Pixels outside the image are clipped.
pub fn draw_label(target: &mut RgbaImage, text: &str, center: (i64, i64), scale: u32, color: Rgba<u8>) {
    let scale = scale.max(1);
    let (width, height) = label_size(text, scale);
    let origin_x = center.0 - i64::from(width / 2);
    let origin_y = center.1 - i64::from(height / 2);
    let advance = i64::from((GLYPH_WIDTH + 1) * scale);

    for (i, ch) in text.chars().enumerate() {
        let Some(digit) = ch.to_digit(10) else { continue };
        let glyph = &DIGITS[digit as usize];
        let glyph_x = origin_x + i as i64 * advance;
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (0b100 >> col) == 0 {
                    continue;
                }
                let cell_x = glyph_x + i64::from(col * scale);
                let cell_y = origin_y + row as i64 * i64::from(scale);
                fill_cell(target, cell_x, cell_y, scale, color);
            }
        }
    }
}

fn fill_cell(target: &mut RgbaImage, x: i64, y: i64, scale: u32, color: Rgba<u8>) {
    let (w, h) = (i64::from(target.width()), i64::from(target.height()));
    for dy in 0..i64::from(scale) {
        for dx in 0..i64::from(scale) {
            let (px, py) = (x + dx, y + dy);
            if px >= 0 && py >= 0 && px < w && py < h {
                target.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}
