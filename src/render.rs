use raylib::prelude::*;

use crate::constants::*;
use crate::slide::Slide;

/// Resolves a slide's symbolic background reference to a vertical gradient
/// (top color fading into black). Unknown references get the neutral pair.
pub fn background_colors(name: &str) -> (Color, Color) {
    let top = match name {
        "blue" => Color::new(30, 58, 138, 255),
        "red" => Color::new(127, 29, 29, 255),
        "green" => Color::new(20, 83, 45, 255),
        "purple" => Color::new(88, 28, 135, 255),
        "yellow" => Color::new(113, 63, 18, 255),
        "indigo" => Color::new(49, 46, 129, 255),
        "pink" => Color::new(131, 24, 67, 255),
        "orange" => Color::new(124, 45, 18, 255),
        "gray" => Color::new(31, 41, 55, 255),
        _ => Color::new(24, 24, 27, 255),
    };
    (top, Color::BLACK)
}

pub fn draw_background(d: &mut RaylibDrawHandle, slide: &Slide, width: i32, height: i32) {
    let (top, bottom) = background_colors(&slide.background);
    d.draw_rectangle_gradient_v(0, 0, width, height, top, bottom);
}

/// Splits `text` into lines no wider than `max_width`, greedily by word.
/// A single word wider than the limit gets a line of its own.
fn wrap_text<F>(text: &str, max_width: i32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> i32,
{
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{line} {word}");
        if measure(&candidate) <= max_width {
            line = candidate;
        } else {
            lines.push(line);
            line = word.to_string();
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Ease-out entry used by the text block: each element rises into place and
/// fades in, staggered by `delay` seconds after the slide becomes current.
fn entry(age: f32, delay: f32) -> (f32, f32) {
    let t = ((age - delay) / 0.5).clamp(0.0, 1.0);
    let eased = 1.0 - (1.0 - t).powi(3);
    (eased, (1.0 - eased) * 40.0)
}

fn faded(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, (alpha * color.a as f32) as u8)
}

fn draw_centered_lines(
    d: &mut RaylibDrawHandle,
    lines: &[&str],
    mut y: i32,
    font_size: i32,
    width: i32,
    color: Color,
) -> i32 {
    for line in lines {
        let line_width = d.measure_text(line, font_size);
        d.draw_text(line, (width - line_width) / 2, y, font_size, color);
        y += font_size + font_size / 4;
    }
    y
}

/// Draws the title/subtitle/content block for the current slide, with the
/// staggered entry animation driven by `age` (seconds since this slide
/// became current). Mirror slides get the red title treatment, a divider
/// line and a dimmed reflection of the text below it.
pub fn draw_content(d: &mut RaylibDrawHandle, slide: &Slide, age: f32, width: i32, height: i32) {
    let max_text_width = width * 4 / 5;
    let measure = |s: &str| d.measure_text(s, CONTENT_FONT_SIZE);

    let title_color = if slide.is_mirror_effect {
        Color::new(239, 68, 68, 255)
    } else {
        Color::WHITE
    };
    let subtitle_color = Color::new(209, 213, 219, 255);
    let content_color = Color::new(229, 231, 235, 255);

    let content_lines: Vec<String> = slide
        .content
        .as_deref()
        .map(|text| wrap_text(text, max_text_width, measure))
        .unwrap_or_default();

    // Rough vertical extent of the block so it can sit centered
    let mut block_height = TITLE_FONT_SIZE + TITLE_FONT_SIZE / 4;
    if slide.subtitle.is_some() {
        block_height += SUBTITLE_FONT_SIZE + SUBTITLE_FONT_SIZE / 4 + 16;
    }
    if !content_lines.is_empty() {
        block_height += content_lines.len() as i32 * (CONTENT_FONT_SIZE + CONTENT_FONT_SIZE / 4) + 24;
    }
    let mut y = (height - block_height) / 2;

    let (alpha, rise) = entry(age, 0.2);
    let title_width = d.measure_text(&slide.title, TITLE_FONT_SIZE);
    d.draw_text(
        &slide.title,
        (width - title_width) / 2,
        y + rise as i32,
        TITLE_FONT_SIZE,
        faded(title_color, alpha),
    );
    y += TITLE_FONT_SIZE + TITLE_FONT_SIZE / 4;

    if let Some(subtitle) = &slide.subtitle {
        let (alpha, rise) = entry(age, 0.4);
        let w = d.measure_text(subtitle, SUBTITLE_FONT_SIZE);
        d.draw_text(
            subtitle,
            (width - w) / 2,
            y + 16 + rise as i32,
            SUBTITLE_FONT_SIZE,
            faded(subtitle_color, alpha),
        );
        y += SUBTITLE_FONT_SIZE + SUBTITLE_FONT_SIZE / 4 + 16;
    }

    if !content_lines.is_empty() {
        let (alpha, rise) = entry(age, 0.6);
        let refs: Vec<&str> = content_lines.iter().map(String::as_str).collect();
        y = draw_centered_lines(
            d,
            &refs,
            y + 24 + rise as i32,
            CONTENT_FONT_SIZE,
            width,
            faded(content_color, alpha),
        );
    }

    if slide.is_mirror_effect {
        draw_mirror(d, slide, &content_lines, y, width);
    }
}

/// The divider line plus a dimmed echo of the text, standing in for a
/// reflective surface under the mirror slide.
fn draw_mirror(
    d: &mut RaylibDrawHandle,
    slide: &Slide,
    content_lines: &[String],
    block_bottom: i32,
    width: i32,
) {
    let divider_y = block_bottom + 40;
    d.draw_rectangle_gradient_h(
        width / 8,
        divider_y,
        width * 3 / 8,
        2,
        Color::new(239, 68, 68, 0),
        Color::new(239, 68, 68, 178),
    );
    d.draw_rectangle_gradient_h(
        width / 2,
        divider_y,
        width * 3 / 8,
        2,
        Color::new(239, 68, 68, 178),
        Color::new(239, 68, 68, 0),
    );

    let mut y = divider_y + 24;
    let title_width = d.measure_text(&slide.title, SUBTITLE_FONT_SIZE);
    d.draw_text(
        &slide.title,
        (width - title_width) / 2,
        y,
        SUBTITLE_FONT_SIZE,
        Color::new(239, 68, 68, 90),
    );
    y += SUBTITLE_FONT_SIZE + SUBTITLE_FONT_SIZE / 4;

    let refs: Vec<&str> = content_lines.iter().map(String::as_str).collect();
    draw_centered_lines(d, &refs, y, CONTENT_FONT_SIZE, width, Color::new(255, 255, 255, 64));
}

/// Full-screen white overlay whose opacity follows the controller's flash
/// envelope. The intense variant uses a sharper curve so it reads brighter
/// at the same envelope value.
pub fn draw_flash(d: &mut RaylibDrawHandle, alpha: f32, intense: bool, width: i32, height: i32) {
    if alpha <= 0.0 {
        return;
    }
    let a = if intense { alpha.sqrt() } else { alpha };
    d.draw_rectangle(0, 0, width, height, faded(Color::WHITE, a));
    if intense {
        // Second, softer layer lingering behind the main one
        d.draw_rectangle(0, 0, width, height, faded(Color::WHITE, a * 0.5));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 10 px per character stands in for the font metrics
    fn measure(s: &str) -> i32 {
        s.len() as i32 * 10
    }

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap_text("hello there", 200, measure);
        assert_eq!(lines, vec!["hello there"]);
    }

    #[test]
    fn wraps_greedily_at_the_width_limit() {
        let lines = wrap_text("one two three four", 90, measure);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn overlong_word_gets_its_own_line() {
        let lines = wrap_text("a supercalifragilistic b", 100, measure);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn empty_text_produces_no_lines() {
        assert!(wrap_text("", 100, measure).is_empty());
        assert!(wrap_text("   ", 100, measure).is_empty());
    }

    #[test]
    fn known_backgrounds_resolve_to_distinct_tops() {
        let (blue, _) = background_colors("blue");
        let (red, _) = background_colors("red");
        assert_ne!(blue, red);
    }

    #[test]
    fn unknown_background_falls_back_to_neutral() {
        let fallback = background_colors("no-such-style");
        assert_eq!(fallback, background_colors("another-missing-style"));
        assert_ne!(fallback, background_colors("blue"));
    }

    #[test]
    fn entry_animation_settles_at_full_opacity() {
        let (alpha, rise) = entry(0.0, 0.2);
        assert_eq!(alpha, 0.0);
        assert_eq!(rise, 40.0);

        let (alpha, rise) = entry(5.0, 0.2);
        assert_eq!(alpha, 1.0);
        assert_eq!(rise, 0.0);
    }
}
