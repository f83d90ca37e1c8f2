//! Pure window geometry math: resize, drag constraints, maximize and minimize presentation.
//!
//! Every function here keeps a window inside its container: `0 <= x` and
//! `x + width <= container.width`, and likewise for the vertical axis. When the container is
//! smaller than the minimum window size, the container bound wins.

use serde::{Deserialize, Serialize};

use crate::model::{ContainerSize, DesktopWindow, Point, Size, WindowGeometry};

/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 200;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 150;
/// Distance from the bottom edge used when the dock icon of a minimized window is not rendered.
pub const MINIMIZE_FALLBACK_BOTTOM_OFFSET: i32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Edge or corner grabbed by a resize handle.
pub enum ResizeDirection {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeDirection {
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// Compass token (`n`, `se`, ...) used for handle classes and cursors.
    pub fn token(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.token() == token)
    }

    fn moves_east(self) -> bool {
        self.token().contains('e')
    }

    fn moves_west(self) -> bool {
        self.token().contains('w')
    }

    fn moves_south(self) -> bool {
        self.token().contains('s')
    }

    fn moves_north(self) -> bool {
        self.token().contains('n')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Axis-aligned rectangle in window-manager (or client) coordinates.
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Inclusive containment test.
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Grows the rectangle by `margin` on every side.
    pub fn expanded(self, margin: i32) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + margin * 2,
            height: self.height + margin * 2,
        }
    }

    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Allowed range for a window origin while dragging.
pub struct DragConstraints {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl DragConstraints {
    pub fn new(size: Size, container: ContainerSize) -> Self {
        Self {
            left: 0,
            top: 0,
            right: (container.width - size.width).max(0),
            bottom: (container.height - size.height).max(0),
        }
    }

    pub fn clamp(self, point: Point) -> Point {
        Point::new(
            point.x.max(self.left).min(self.right),
            point.y.max(self.top).min(self.bottom),
        )
    }
}

/// Shrinks a geometry to fit the container, then clamps its origin into the drag constraints.
pub fn clamp_to_container(geometry: WindowGeometry, container: ContainerSize) -> WindowGeometry {
    let size = Size::new(
        geometry.size.width.min(container.width.max(0)),
        geometry.size.height.min(container.height.max(0)),
    );
    WindowGeometry {
        position: DragConstraints::new(size, container).clamp(geometry.position),
        size,
    }
}

fn resize_far_edge(origin: i32, length: i32, delta: i32, minimum: i32, bound: i32) -> i32 {
    (length + delta).max(minimum).min(bound - origin)
}

fn resize_near_edge(origin: i32, length: i32, delta: i32, minimum: i32) -> (i32, i32) {
    let far = origin + length;
    let next = (origin + delta).min(far - minimum).max(0);
    (next, far - next)
}

/// Applies a resize gesture of `(dx, dy)` from `start` in `direction`.
///
/// East/south edges grow the size. West/north edges move the origin with the opposite edge
/// fixed.
pub fn resize_geometry(
    start: WindowGeometry,
    direction: ResizeDirection,
    dx: i32,
    dy: i32,
    container: ContainerSize,
) -> WindowGeometry {
    let mut next = start;

    if direction.moves_east() {
        next.size.width = resize_far_edge(
            start.position.x,
            start.size.width,
            dx,
            MIN_WINDOW_WIDTH,
            container.width,
        );
    } else if direction.moves_west() {
        let (x, width) =
            resize_near_edge(start.position.x, start.size.width, dx, MIN_WINDOW_WIDTH);
        next.position.x = x;
        next.size.width = width;
    }

    if direction.moves_south() {
        next.size.height = resize_far_edge(
            start.position.y,
            start.size.height,
            dy,
            MIN_WINDOW_HEIGHT,
            container.height,
        );
    } else if direction.moves_north() {
        let (y, height) =
            resize_near_edge(start.position.y, start.size.height, dy, MIN_WINDOW_HEIGHT);
        next.position.y = y;
        next.size.height = height;
    }

    clamp_to_container(next, container)
}

/// Geometry of a window filling the container.
pub fn maximized_geometry(container: ContainerSize) -> WindowGeometry {
    WindowGeometry {
        position: Point::new(0, 0),
        size: Size::new(container.width.max(0), container.height.max(0)),
    }
}

/// Where a window collapses to when minimized.
///
/// Everything is in window-manager coordinates: `icon_rect` is the dock icon translated into
/// that space, and `surface` is the window-manager surface, which is the visible area windows
/// live in. Without an icon the target is the surface's bottom center, 40px up.
pub fn minimize_target(icon_rect: Option<Rect>, surface: ContainerSize) -> Point {
    match icon_rect {
        Some(rect) => rect.center(),
        None => Point::new(
            surface.width / 2,
            surface.height - MINIMIZE_FALLBACK_BOTTOM_OFFSET,
        ),
    }
}

/// Rendered origin of a window: centered on its minimize target while minimized.
pub fn presented_origin(window: &DesktopWindow) -> Point {
    match (window.minimized, window.minimize_target) {
        (true, Some(target)) => Point::new(
            target.x - window.size.width / 2,
            target.y - window.size.height / 2,
        ),
        _ => window.position,
    }
}

/// Re-fits a window after the container changed size.
pub fn fit_window_to_container(window: &mut DesktopWindow, container: ContainerSize) {
    if window.maximized {
        window.set_geometry(maximized_geometry(container));
    } else {
        window.position = DragConstraints::new(window.size, container).clamp(window.position);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const CONTAINER: ContainerSize = ContainerSize {
        width: 1024,
        height: 730,
    };

    fn geometry(x: i32, y: i32, width: i32, height: i32) -> WindowGeometry {
        WindowGeometry {
            position: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    fn assert_inside(g: WindowGeometry, container: ContainerSize) {
        assert!(g.position.x >= 0 && g.position.y >= 0, "{g:?}");
        assert!(g.position.x + g.size.width <= container.width, "{g:?}");
        assert!(g.position.y + g.size.height <= container.height, "{g:?}");
    }

    #[test]
    fn east_and_south_growth_is_capped_by_container() {
        let start = geometry(300, 300, 450, 300);
        let grown = resize_geometry(start, ResizeDirection::SouthEast, 900, 900, CONTAINER);

        assert_eq!(grown, geometry(300, 300, 724, 430));
        assert_inside(grown, CONTAINER);
    }

    #[test]
    fn shrinking_stops_at_minimum_size() {
        let start = geometry(300, 300, 450, 300);
        let east = resize_geometry(start, ResizeDirection::East, -1000, 0, CONTAINER);
        assert_eq!(east.size.width, MIN_WINDOW_WIDTH);
        assert_eq!(east.position, start.position);

        let north_west = resize_geometry(start, ResizeDirection::NorthWest, 1000, 1000, CONTAINER);
        assert_eq!(north_west, geometry(550, 450, MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
    }

    #[test]
    fn west_and_north_keep_opposite_edge_fixed_and_origin_non_negative() {
        let start = geometry(100, 80, 300, 200);
        let grown = resize_geometry(start, ResizeDirection::NorthWest, -500, -500, CONTAINER);

        assert_eq!(grown, geometry(0, 0, 400, 280));
    }

    #[test]
    fn every_direction_respects_bounds_and_minimums() {
        let start = geometry(300, 300, 450, 300);
        for direction in ResizeDirection::ALL {
            for (dx, dy) in [(-2000, -2000), (2000, 2000), (-2000, 2000), (37, -41)] {
                let next = resize_geometry(start, direction, dx, dy, CONTAINER);
                assert!(next.size.width >= MIN_WINDOW_WIDTH, "{direction:?} {next:?}");
                assert!(next.size.height >= MIN_WINDOW_HEIGHT, "{direction:?} {next:?}");
                assert_inside(next, CONTAINER);
            }
        }
    }

    #[test]
    fn tiny_container_bound_wins_over_minimum() {
        let container = ContainerSize {
            width: 120,
            height: 90,
        };
        let next = resize_geometry(
            geometry(0, 0, 100, 80),
            ResizeDirection::SouthEast,
            50,
            50,
            container,
        );
        assert_eq!(next.size, Size::new(120, 90));
        assert_inside(next, container);
    }

    #[test]
    fn drag_is_clamped_into_constraint_box() {
        let size = Size::new(450, 300);
        assert_eq!(
            DragConstraints::new(size, CONTAINER).clamp(Point::new(300, 300).offset(-900, 900)),
            Point::new(0, 430)
        );
        assert_eq!(
            DragConstraints::new(Size::new(2000, 100), CONTAINER).right,
            0
        );
    }

    #[test]
    fn minimize_target_prefers_icon_center() {
        let icon = Rect::new(500, 680, 40, 40);
        assert_eq!(minimize_target(Some(icon), CONTAINER), Point::new(520, 700));
        assert_eq!(minimize_target(None, CONTAINER), Point::new(512, 690));
    }

    #[test]
    fn presented_origin_centers_minimized_window_on_target() {
        let mut window = DesktopWindow::new("store", 1);
        assert_eq!(presented_origin(&window), Point::new(300, 300));

        window.minimized = true;
        window.minimize_target = Some(Point::new(512, 690));
        assert_eq!(presented_origin(&window), Point::new(287, 540));
        assert_eq!(window.position, Point::new(300, 300));
    }

    #[test]
    fn container_shrink_pulls_window_back_and_refits_maximized() {
        let small = ContainerSize {
            width: 600,
            height: 500,
        };
        let mut window = DesktopWindow::new("store", 1);
        fit_window_to_container(&mut window, small);
        assert_eq!(window.position, Point::new(150, 200));

        window.maximized = true;
        fit_window_to_container(&mut window, small);
        assert_eq!(window.geometry(), maximized_geometry(small));
    }

    #[test]
    fn expanded_rect_contains_nearby_points() {
        let trash = Rect::new(100, 100, 40, 40);
        assert!(!trash.contains(Point::new(155, 120)));
        assert!(trash.expanded(20).contains(Point::new(155, 120)));
        assert!(!trash.expanded(20).contains(Point::new(161, 120)));
    }
}
