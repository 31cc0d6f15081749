//! SVG placeholders and `data:` URIs.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::ratio::AspectRatio;

/// Characters left as-is by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const DATA_URI_PREFIX: &str = "data:image/svg+xml,";

/// Blank SVG sized to `ratio`, shown before a real placeholder exists.
pub fn empty_placeholder_svg(ratio: AspectRatio) -> String {
    format!(
        r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg" version="1.1"/>"#,
        ratio.width(),
        ratio.height()
    )
}

/// Percent-encode `svg` into a `data:image/svg+xml` URI.
pub fn encode_svg_data_uri(svg: &str) -> String {
    format!("{}{}", DATA_URI_PREFIX, utf8_percent_encode(svg, URI_COMPONENT))
}

/// Data URI for `svg`, or for the blank placeholder when there is none yet.
pub fn placeholder_data_uri(ratio: AspectRatio, svg: Option<&str>) -> String {
    match svg {
        Some(svg) => encode_svg_data_uri(svg),
        None => encode_svg_data_uri(&empty_placeholder_svg(ratio)),
    }
}

/// Image URL for an `<img>` that has nothing to show yet.
pub fn empty_image_url(ratio: AspectRatio) -> String {
    placeholder_data_uri(ratio, None)
}
