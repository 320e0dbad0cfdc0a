//! Element to HTML projection shared by the canvas and the preview/export paths.
//!
//! Every piece of user-supplied text goes through [`escape_html`]; style maps go
//! through [`inline_css`], which drops declarations that could escape their
//! property; image sources go through [`safe_src`].

use crate::model::{Element, ElementBody, Styles};

/// Escape text for use in HTML content or a quoted attribute value.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Convert a DOM-style property name (`fontSize`) to CSS (`font-size`).
///
/// Returns `None` for names containing anything other than ASCII letters,
/// digits, and hyphens.
pub fn css_property_name(name: &str) -> Option<String> {
    if name.is_empty()
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return None;
    }

    let mut css = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            css.push('-');
            css.push(c.to_ascii_lowercase());
        } else {
            css.push(c);
        }
    }
    Some(css)
}

/// Check that a CSS value cannot terminate its declaration or rule.
pub fn is_safe_css_value(value: &str) -> bool {
    if value.trim().is_empty() {
        return false;
    }
    if value
        .chars()
        .any(|c| matches!(c, ';' | '{' | '}' | '<' | '>' | '\\') || c.is_control())
    {
        return false;
    }
    let lower = value.to_ascii_lowercase();
    !(lower.contains("url(") || lower.contains("expression(") || lower.contains("javascript:"))
}

/// Return `value` when it is a safe CSS value, otherwise `fallback`.
pub fn css_value_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(v) if is_safe_css_value(v) => v.trim(),
        _ => fallback,
    }
}

/// Build the body of a `style="..."` attribute from a style map, unescaped.
///
/// Declarations with an invalid property name or an unsafe value are dropped.
pub fn inline_css(styles: &Styles) -> String {
    styles
        .iter()
        .filter_map(|(name, value)| {
            let property = css_property_name(name)?;
            if !is_safe_css_value(value) {
                log::debug!("Dropping unsafe style value for {}", name);
                return None;
            }
            Some(format!("{}: {}", property, value.trim()))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Build a ` style="..."` attribute (with leading space), or an empty string.
pub fn style_attr(styles: &Styles) -> String {
    let css = inline_css(styles);
    if css.is_empty() {
        String::new()
    } else {
        format!(" style=\"{}\"", escape_html(&css))
    }
}

/// Sanitize an image source: data images, http(s) URLs, and relative paths pass.
pub fn safe_src(src: &str) -> &str {
    let trimmed = src.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("data:image/")
        || lower.starts_with("http://")
        || lower.starts_with("https://")
    {
        return trimmed;
    }

    let scheme_end = trimmed.find(':');
    let path_start = trimmed.find(['/', '?', '#']);
    match (scheme_end, path_start) {
        (Some(colon), Some(slash)) if colon < slash => "",
        (Some(_), None) => "",
        _ => trimmed,
    }
}

/// Structural markup of one element, without inline styles.
pub fn element_html(element: &Element) -> String {
    match &element.body {
        ElementBody::Paragraph { content } => format!("<p>{}</p>", escape_html(content)),
        ElementBody::Heading { level, content } => {
            let level = (*level).clamp(1, 6);
            format!("<h{0}>{1}</h{0}>", level, escape_html(content))
        }
        ElementBody::Image { src, alt, caption } => image_html(src, alt, caption),
        ElementBody::Blockquote { content } => {
            format!("<blockquote>{}</blockquote>", escape_html(content))
        }
        ElementBody::Generic { content, .. } => format!("<div>{}</div>", escape_html(content)),
    }
}

/// Markup of an image with optional caption.
pub fn image_html(src: &str, alt: &str, caption: &str) -> String {
    let mut html = format!(
        "<img src=\"{}\" alt=\"{}\" />",
        escape_html(safe_src(src)),
        escape_html(alt)
    );
    if !caption.is_empty() {
        html.push_str(&format!(
            "<div class=\"caption\">{}</div>",
            escape_html(caption)
        ));
    }
    html
}

/// Markup of a heading at an explicit level.
pub fn heading_html(level: u8, text: &str) -> String {
    let level = level.clamp(1, 6);
    format!("<h{0}>{1}</h{0}>", level, escape_html(text))
}

/// Wrap markup in a `<div>` carrying the element's inline styles.
///
/// With no applicable styles the markup is returned as-is unless a class is given.
pub fn wrap_with_styles(markup: &str, styles: &Styles, class: Option<&str>) -> String {
    let style = style_attr(styles);
    match class {
        Some(class) => format!(
            "<div class=\"{}\"{}>{}</div>",
            escape_html(class),
            style,
            markup
        ),
        None if style.is_empty() => markup.to_string(),
        None => format!("<div{}>{}</div>", style, markup),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script> & 'y'"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; &#39;y&#39;"
        );
    }

    #[test]
    fn test_css_property_name() {
        assert_eq!(css_property_name("fontSize").as_deref(), Some("font-size"));
        assert_eq!(css_property_name("margin").as_deref(), Some("margin"));
        assert_eq!(css_property_name("line-height").as_deref(), Some("line-height"));
        assert_eq!(css_property_name("x;y"), None);
        assert_eq!(css_property_name(""), None);
    }

    #[test]
    fn test_inline_css_drops_unsafe_values() {
        let styles = Styles::new()
            .with("fontSize", "16px")
            .with("color", "red; background: url(evil)")
            .with("background", "url(javascript:alert(1))")
            .with("textAlign", "center");
        assert_eq!(inline_css(&styles), "font-size: 16px; text-align: center");
    }

    #[test]
    fn test_style_attr_escapes_quotes() {
        let styles = Styles::new().with("fontFamily", "\"Open Sans\"");
        assert_eq!(
            style_attr(&styles),
            " style=\"font-family: &quot;Open Sans&quot;\""
        );
        assert_eq!(style_attr(&Styles::new()), "");
    }

    #[test]
    fn test_safe_src() {
        assert_eq!(safe_src("data:image/png;base64,AAA"), "data:image/png;base64,AAA");
        assert_eq!(safe_src("https://example.com/a.png"), "https://example.com/a.png");
        assert_eq!(safe_src("images/a.png"), "images/a.png");
        assert_eq!(safe_src("javascript:alert(1)"), "");
        assert_eq!(safe_src("data:text/html,<b>x</b>"), "");
    }

    #[test]
    fn test_element_html_variants() {
        assert_eq!(element_html(&Element::paragraph("a < b")), "<p>a &lt; b</p>");
        assert_eq!(element_html(&Element::heading(3, "T")), "<h3>T</h3>");
        assert_eq!(
            element_html(&Element::blockquote("q")),
            "<blockquote>q</blockquote>"
        );
        assert_eq!(
            element_html(&Element::image("a.png", "alt").with_caption("Cap")),
            "<img src=\"a.png\" alt=\"alt\" /><div class=\"caption\">Cap</div>"
        );
        assert_eq!(
            element_html(&Element::image("a.png", "")),
            "<img src=\"a.png\" alt=\"\" />"
        );
    }

    #[test]
    fn test_wrap_with_styles() {
        let styles = Styles::new().with("textAlign", "right");
        assert_eq!(wrap_with_styles("<p>x</p>", &Styles::new(), None), "<p>x</p>");
        assert_eq!(
            wrap_with_styles("<p>x</p>", &styles, None),
            "<div style=\"text-align: right\"><p>x</p></div>"
        );
        assert_eq!(
            wrap_with_styles("<p>x</p>", &Styles::new(), Some("element-content")),
            "<div class=\"element-content\"><p>x</p></div>"
        );
    }
}
