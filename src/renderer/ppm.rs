//! Plain text PPM (`P3`) output.
//!
//! Layout: a three line header (`P3`, `<width> <height>`, `255`), then one line per
//! scanline, top to bottom. Every pixel is written as `r g b ` including the trailing
//! space, so a line holds `3 * width` integers.

use super::Film;
use crate::math::RGBColor;

use std::io::{self, Write};

pub const MAX_CHANNEL_VALUE: u8 = 255;

pub fn write_header<W: Write>(writer: &mut W, width: usize, height: usize) -> io::Result<()> {
    write!(writer, "P3\n{} {}\n{}\n", width, height, MAX_CHANNEL_VALUE)
}

pub fn write_ppm<W: Write>(film: &Film<RGBColor>, mut writer: W) -> io::Result<()> {
    write_header(&mut writer, film.width, film.height)?;
    let mut line = String::with_capacity(film.width * 12);
    for row in film.rows() {
        line.clear();
        for color in row {
            let [r, g, b] = color.to_rgb8();
            line.push_str(&format!("{} {} {} ", r, g, b));
        }
        line.push('\n');
        writer.write_all(line.as_bytes())?;
    }
    writer.flush()
}
