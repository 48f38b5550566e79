use color::{AlphaColor, ParseError};

use crate::color_ops::Color;

pub(crate) fn validate_top_n(value: &str) -> Result<usize, String> {
    let num = value
        .parse::<usize>()
        .map_err(|_| "Not a valid whole number".to_string())?;
    if num == 0 {
        return Err("Number must be greater than 0".to_string());
    }
    Ok(num)
}

pub(crate) fn validate_target_color(value: &str) -> Result<Color, String> {
    match parse_color(value) {
        Ok(color) => Ok(color),
        Err(e) => Err(e.to_string()),
    }
}

/// Parse any CSS color string, like #RRGGBB or rgb(r, g, b), ignoring alpha
fn parse_color(color: &str) -> Result<Color, ParseError> {
    let color = color::parse_color(color)?;
    let color: AlphaColor<color::Srgb> = color.to_alpha_color();
    let [red, green, blue, _alpha] = color.to_rgba8().to_u8_array();
    Ok(Color::new(red, green, blue))
}
