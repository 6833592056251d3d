//! Placeholder rendering for image references.
//!
//! The mock carries static HTTPS image URLs. A terminal has no pixel
//! surface, so this module stands in for the image-loading boundary: each
//! URL gets a dithered box with a stable accent color and a caption derived
//! from the URL host. A malformed URL degrades to a bare box; nothing here
//! can fail.

use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

/// Extract the host of an http(s) URL, or `None` if it does not look like
/// one.
pub fn host(url: &str) -> Option<&str> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let host = &rest[..end];
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

/// Stable accent color for a URL, so repeated renders of the same image
/// stay visually consistent.
pub fn accent_for(url: &str) -> Color {
    const PALETTE: [Color; 6] = [
        Color::Rgb(80, 200, 210),  // teal
        Color::Rgb(100, 170, 230), // blue
        Color::Rgb(175, 140, 220), // lavender
        Color::Rgb(220, 150, 180), // pink
        Color::Rgb(230, 180, 80),  // amber
        Color::Rgb(90, 210, 130),  // green
    ];
    // FNV-1a
    let mut hash: u32 = 2166136261;
    for b in url.bytes() {
        hash ^= u32::from(b);
        hash = hash.wrapping_mul(16777619);
    }
    PALETTE[(hash % PALETTE.len() as u32) as usize]
}

/// Fill `area` with a dithered placeholder and, when the box is wide
/// enough, a centered caption naming the URL host.
pub fn render_image(buf: &mut Buffer, area: Rect, url: &str) {
    if area.is_empty() {
        return;
    }

    let fill: String = "░".repeat(area.width as usize);
    for y in area.top()..area.bottom() {
        buf.set_string(area.x, y, &fill, Theme::image_fill());
    }

    let Some(host) = host(url) else {
        return;
    };
    let caption = format!(" {} ", host);
    let width = caption.width() as u16;
    if width <= area.width {
        let x = area.x + (area.width - width) / 2;
        let y = area.y + area.height / 2;
        buf.set_string(
            x,
            y,
            &caption,
            Style::default()
                .fg(accent_for(url))
                .add_modifier(Modifier::DIM),
        );
    }
}

/// Avatar slot: a single colored glyph standing in for a profile image.
pub fn avatar_span(url: &str) -> Span<'static> {
    Span::styled("◉", Style::default().fg(accent_for(url)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_extraction() {
        assert_eq!(
            host("https://randomuser.me/api/portraits/men/32.jpg"),
            Some("randomuser.me")
        );
        assert_eq!(
            host("https://images.unsplash.com/photo-1?auto=format"),
            Some("images.unsplash.com")
        );
        assert_eq!(host("http://example.org"), Some("example.org"));
        assert_eq!(host("ftp://example.org"), None);
        assert_eq!(host("https://"), None);
        assert_eq!(host(""), None);
    }

    #[test]
    fn test_accent_is_deterministic() {
        let url = "https://images.unsplash.com/photo-1";
        assert_eq!(accent_for(url), accent_for(url));
    }

    #[test]
    fn test_render_degrades_on_bad_url() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        render_image(&mut buf, area, "not a url");
        // Bare dither fill, no caption, no panic.
        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), "░");
    }
}
