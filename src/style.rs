use orbit_core::ElementTransform;

/// CSS `transform` value for one parallax layer.
pub fn transform_css(t: &ElementTransform) -> String {
    format!(
        "rotateX({}deg) rotateY({}deg) translateZ({}px)",
        t.rotate.x, t.rotate.y, t.depth_px
    )
}

/// Leading number of a CSS length such as `"220px"`, the way `parseFloat` reads it.
pub fn parse_css_length(value: &str) -> Option<f32> {
    let s = value.trim();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return None;
    }
    s[..end].parse::<f32>().ok()
}
