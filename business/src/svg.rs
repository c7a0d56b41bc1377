//! Vector rendering of a symbol.
//!
//! Modules are emitted as a single path in module units; the document is
//! scaled to the requested pixel size through `viewBox`. A circular logo is
//! embedded as a base64 PNG clipped to a circle.

use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, RgbaImage};

use crate::color::QrColor;
use crate::encode::{BORDER_MODULES, QrMatrix};
use crate::error::{QrStudioError, Result};

/// Logo placed on top of the modules, in module units.
#[derive(Debug, Clone, Copy)]
pub struct SvgLogo<'a> {
    pub image: &'a RgbaImage,
    /// Fraction of the full symbol side, `0.0..=1.0`.
    pub fraction: f64,
}

/// Renders `matrix` as a standalone SVG document of `size_px` pixels.
pub fn render_svg(
    matrix: &QrMatrix,
    color: QrColor,
    size_px: u32,
    logo: Option<SvgLogo<'_>>,
) -> Result<String> {
    let dimension = matrix.width_with_border();
    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" version=\"1.1\" width=\"{size_px}\" height=\"{size_px}\" viewBox=\"0 0 {dimension} {dimension}\" shape-rendering=\"crispEdges\">\n"
    ));
    svg.push_str(&format!(
        "\t<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
        QrColor::WHITE.to_hex()
    ));

    let squares: Vec<String> = (0..matrix.width())
        .flat_map(|y| (0..matrix.width()).map(move |x| (x, y)))
        .filter(|&(x, y)| matrix.is_dark(x, y))
        .map(|(x, y)| {
            format!(
                "M{},{}h1v1h-1z",
                x + BORDER_MODULES,
                y + BORDER_MODULES
            )
        })
        .collect();
    svg.push_str(&format!(
        "\t<path d=\"{}\" fill=\"{}\"/>\n",
        squares.join(" "),
        color.to_hex()
    ));

    if let Some(logo) = logo.filter(|l| l.image.width() > 0) {
        let side = dimension as f64 * logo.fraction;
        let origin = (dimension as f64 - side) / 2.0;
        let center = dimension as f64 / 2.0;
        let radius = side / 2.0;
        let href = png_data_url(logo.image)?;

        svg.push_str("\t<defs>\n");
        svg.push_str(&format!(
            "\t\t<clipPath id=\"logo-clip\"><circle cx=\"{center}\" cy=\"{center}\" r=\"{radius}\"/></clipPath>\n"
        ));
        svg.push_str("\t</defs>\n");
        svg.push_str(&format!(
            "\t<image x=\"{origin}\" y=\"{origin}\" width=\"{side}\" height=\"{side}\" clip-path=\"url(#logo-clip)\" xlink:href=\"{href}\"/>\n"
        ));
    }

    svg.push_str("</svg>\n");
    Ok(svg)
}

fn png_data_url(img: &RgbaImage) -> Result<String> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| QrStudioError::save("<embedded logo>", e))?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_matrix;
    use image::Rgba;

    #[test]
    fn test_svg_header_and_size() {
        let matrix = encode_matrix("hello").unwrap();
        let svg = render_svg(&matrix, QrColor::BLACK, 512, None).unwrap();

        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(svg.contains("width=\"512\" height=\"512\""));
        assert!(svg.contains("viewBox=\"0 0 29 29\""));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(!svg.contains("<image"));
    }

    #[test]
    fn test_svg_has_one_square_per_dark_module() {
        let matrix = encode_matrix("hello").unwrap();
        let svg = render_svg(&matrix, QrColor::new(255, 0, 0), 300, None).unwrap();

        assert_eq!(svg.matches("h1v1h-1z").count(), matrix.dark_count());
        // Top-left finder module is offset by the quiet zone
        assert!(svg.contains("M4,4h1v1h-1z"));
        assert!(svg.contains("fill=\"#ff0000\""));
    }

    #[test]
    fn test_svg_embeds_logo() {
        let matrix = encode_matrix("hello").unwrap();
        let logo = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255]));
        let svg = render_svg(
            &matrix,
            QrColor::BLACK,
            300,
            Some(SvgLogo {
                image: &logo,
                fraction: 0.25,
            }),
        )
        .unwrap();

        assert!(svg.contains("<clipPath id=\"logo-clip\">"));
        assert!(svg.contains("xmlns:xlink=\"http://www.w3.org/1999/xlink\""));
        assert!(svg.contains(" xlink:href=\"data:image/png;base64,"));
        assert!(svg.contains("r=\"3.625\""));
    }
}
