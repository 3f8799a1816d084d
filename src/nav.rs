use raylib::prelude::*;

use crate::constants::*;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NavAction {
    Previous,
    Next,
    Select(usize),
}

/// Screen-space placement of the on-screen controls for one frame: a
/// previous/next button at the left and right edges and one indicator dot
/// per slide along the bottom. Pure geometry, recomputed per frame so it
/// follows window resizes.
pub struct NavLayout {
    prev: Rectangle,
    next: Rectangle,
    dots: Vec<Rectangle>,
}

impl NavLayout {
    pub fn new(screen_w: f32, screen_h: f32, slide_count: usize) -> Self {
        let button_y = (screen_h - ARROW_BUTTON_SIZE) / 2.0;
        let prev = Rectangle::new(ARROW_MARGIN, button_y, ARROW_BUTTON_SIZE, ARROW_BUTTON_SIZE);
        let next = Rectangle::new(
            screen_w - ARROW_MARGIN - ARROW_BUTTON_SIZE,
            button_y,
            ARROW_BUTTON_SIZE,
            ARROW_BUTTON_SIZE,
        );

        let hit = DOT_RADIUS + DOT_HIT_PADDING;
        let row_width = (slide_count.max(1) - 1) as f32 * DOT_GAP;
        let first_x = (screen_w - row_width) / 2.0;
        let dot_y = screen_h - DOT_BOTTOM_MARGIN;
        let dots = (0..slide_count)
            .map(|i| {
                let cx = first_x + i as f32 * DOT_GAP;
                Rectangle::new(cx - hit, dot_y - hit, hit * 2.0, hit * 2.0)
            })
            .collect();

        Self { prev, next, dots }
    }

    /// Maps a click position to the control under it, dots first since they
    /// sit on top of everything else.
    pub fn hit(&self, point: Vector2) -> Option<NavAction> {
        for (i, dot) in self.dots.iter().enumerate() {
            if dot.check_collision_point_rec(point) {
                return Some(NavAction::Select(i));
            }
        }
        if self.prev.check_collision_point_rec(point) {
            return Some(NavAction::Previous);
        }
        if self.next.check_collision_point_rec(point) {
            return Some(NavAction::Next);
        }
        None
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, current: usize, at_first: bool, at_last: bool) {
        draw_arrow(d, &self.prev, true, at_first);
        draw_arrow(d, &self.next, false, at_last);

        for (i, dot) in self.dots.iter().enumerate() {
            let center = Vector2::new(dot.x + dot.width / 2.0, dot.y + dot.height / 2.0);
            if i == current {
                d.draw_circle_v(center, DOT_RADIUS * 1.25, Color::WHITE);
            } else {
                d.draw_circle_v(center, DOT_RADIUS, Color::new(255, 255, 255, 77));
            }
        }
    }
}

fn draw_arrow(d: &mut RaylibDrawHandle, bounds: &Rectangle, points_left: bool, disabled: bool) {
    let color = if disabled {
        Color::new(255, 255, 255, 77)
    } else {
        Color::WHITE
    };
    let pad = bounds.width * 0.25;
    let top_y = bounds.y + pad;
    let bottom_y = bounds.y + bounds.height - pad;
    let mid_y = bounds.y + bounds.height / 2.0;
    // Counter-clockwise winding, raylib culls back faces on filled triangles.
    if points_left {
        let tip = Vector2::new(bounds.x + pad, mid_y);
        let edge = bounds.x + bounds.width - pad;
        d.draw_triangle(
            Vector2::new(edge, top_y),
            tip,
            Vector2::new(edge, bottom_y),
            color,
        );
    } else {
        let tip = Vector2::new(bounds.x + bounds.width - pad, mid_y);
        let edge = bounds.x + pad;
        d.draw_triangle(
            Vector2::new(edge, bottom_y),
            tip,
            Vector2::new(edge, top_y),
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> NavLayout {
        NavLayout::new(1280.0, 720.0, 9)
    }

    fn center(r: &Rectangle) -> Vector2 {
        Vector2::new(r.x + r.width / 2.0, r.y + r.height / 2.0)
    }

    #[test]
    fn buttons_map_to_step_actions() {
        let l = layout();
        assert_eq!(l.hit(center(&l.prev)), Some(NavAction::Previous));
        assert_eq!(l.hit(center(&l.next)), Some(NavAction::Next));
    }

    #[test]
    fn each_dot_selects_its_slide() {
        let l = layout();
        for i in 0..9 {
            assert_eq!(l.hit(center(&l.dots[i])), Some(NavAction::Select(i)));
        }
    }

    #[test]
    fn dot_row_is_centered() {
        let l = layout();
        let first = center(&l.dots[0]).x;
        let last = center(&l.dots[8]).x;
        assert!((first + last - 1280.0).abs() < 0.01);
    }

    #[test]
    fn empty_space_hits_nothing() {
        let l = layout();
        assert_eq!(l.hit(Vector2::new(640.0, 100.0)), None);
        assert_eq!(l.hit(Vector2::new(200.0, 360.0)), None);
    }

    #[test]
    fn single_slide_layout_has_one_dot() {
        let l = NavLayout::new(800.0, 600.0, 1);
        assert_eq!(l.dots.len(), 1);
        assert_eq!(l.hit(center(&l.dots[0])), Some(NavAction::Select(0)));
    }
}
