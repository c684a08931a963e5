//! Pan/zoom view state for an interactive plot of the curve.
//!
//! Pure state: a renderer feeds [`ViewEvent`]s in data coordinates and applies
//! the resulting [`ViewBounds`] to its axes.

use crate::error::{Result, ViewError};
use crate::math::Point2;

/// Default zoom step per scroll notch.
pub const DEFAULT_SCALE_FACTOR: f64 = 1.2;

/// Visible data range of a plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBounds {
    /// Left edge.
    pub x_min: f64,
    /// Right edge.
    pub x_max: f64,
    /// Bottom edge.
    pub y_min: f64,
    /// Top edge.
    pub y_max: f64,
}

impl ViewBounds {
    /// Creates new bounds.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::InvalidBounds` if a range is empty, inverted, or not finite.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self> {
        let all_finite = [x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite());
        if !all_finite {
            return Err(ViewError::InvalidBounds("bounds must be finite".into()).into());
        }
        if x_min >= x_max || y_min >= y_max {
            return Err(ViewError::InvalidBounds(format!(
                "empty range x [{x_min}, {x_max}], y [{y_min}, {y_max}]"
            ))
            .into());
        }
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Smallest bounds containing every point, padded by `margin` on each side.
    ///
    /// Returns `None` for an empty or degenerate point set.
    #[must_use]
    pub fn fit(points: &[Point2], margin: f64) -> Option<Self> {
        let first = points.first()?;
        let (mut x_min, mut x_max, mut y_min, mut y_max) = (first.x, first.x, first.y, first.y);
        for p in &points[1..] {
            x_min = x_min.min(p.x);
            x_max = x_max.max(p.x);
            y_min = y_min.min(p.y);
            y_max = y_max.max(p.y);
        }
        Self::new(x_min - margin, x_max + margin, y_min - margin, y_max + margin).ok()
    }

    /// Scales the bounds by `scale` about `at`, keeping `at` fixed on screen.
    #[must_use]
    pub fn zoomed_about(&self, at: Point2, scale: f64) -> Self {
        Self {
            x_min: at.x - (at.x - self.x_min) * scale,
            x_max: at.x + (self.x_max - at.x) * scale,
            y_min: at.y - (at.y - self.y_min) * scale,
            y_max: at.y + (self.y_max - at.y) * scale,
        }
    }

    /// Shifts the bounds by `(dx, dy)`.
    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            x_min: self.x_min + dx,
            x_max: self.x_max + dx,
            y_min: self.y_min + dy,
            y_max: self.y_max + dy,
        }
    }

    /// Width of the x range.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the y range.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Mouse wheel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Zoom in.
    Up,
    /// Zoom out.
    Down,
}

/// Mouse button of a press event. Only the middle button pans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Primary button.
    Left,
    /// Wheel button.
    Middle,
    /// Secondary button.
    Right,
}

/// Input event. `at` is the cursor in data coordinates, `None` outside the axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewEvent {
    /// Mouse wheel notch.
    Scroll {
        direction: ScrollDirection,
        at: Option<Point2>,
    },
    /// Mouse button pressed.
    Press {
        button: MouseButton,
        at: Option<Point2>,
    },
    /// Any mouse button released.
    Release,
    /// Cursor moved.
    Motion {
        at: Option<Point2>,
    },
    /// Key pressed.
    Key(char),
}

/// What the renderer should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewResponse {
    /// Nothing visible changed.
    Unchanged,
    /// Bounds or grid changed; redraw.
    Redraw,
    /// Close the window.
    Close,
}

/// Interaction state of a [`ViewController`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewState {
    /// No drag in progress.
    Idle,
    /// Middle-button drag in progress.
    Dragging {
        /// Cursor position when the drag started.
        anchor: Point2,
        /// Bounds when the drag started.
        snapshot: ViewBounds,
    },
}

/// Zoom/pan/reset controller.
///
/// - scroll: zoom about the cursor
/// - middle drag: pan
/// - `r`: reset, `g`: toggle grid, `q`: close
#[derive(Debug, Clone)]
pub struct ViewController {
    original: ViewBounds,
    current: ViewBounds,
    state: ViewState,
    scale_factor: f64,
    grid_visible: bool,
}

impl ViewController {
    /// Creates a controller whose reset target is `bounds`.
    #[must_use]
    pub fn new(bounds: ViewBounds) -> Self {
        Self {
            original: bounds,
            current: bounds,
            state: ViewState::Idle,
            scale_factor: DEFAULT_SCALE_FACTOR,
            grid_visible: true,
        }
    }

    /// Returns the current bounds.
    #[must_use]
    pub fn bounds(&self) -> ViewBounds {
        self.current
    }

    /// Returns the interaction state.
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Returns the zoom step.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Returns whether the grid is shown.
    #[must_use]
    pub fn grid_visible(&self) -> bool {
        self.grid_visible
    }

    /// Sets the zoom step.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::InvalidScaleFactor` unless `factor > 1`.
    pub fn set_scale_factor(&mut self, factor: f64) -> Result<()> {
        if !(factor > 1.0 && factor.is_finite()) {
            return Err(ViewError::InvalidScaleFactor(factor).into());
        }
        self.scale_factor = factor;
        Ok(())
    }

    /// Makes the current bounds the reset target.
    pub fn update_original_bounds(&mut self) {
        self.original = self.current;
    }

    /// Restores the reset target.
    pub fn reset(&mut self) {
        self.current = self.original;
    }

    /// Applies one input event.
    pub fn handle(&mut self, event: ViewEvent) -> ViewResponse {
        match event {
            ViewEvent::Scroll { direction, at } => {
                let Some(at) = at else {
                    return ViewResponse::Unchanged;
                };
                let scale = match direction {
                    ScrollDirection::Up => 1.0 / self.scale_factor,
                    ScrollDirection::Down => self.scale_factor,
                };
                self.current = self.current.zoomed_about(at, scale);
                ViewResponse::Redraw
            }
            ViewEvent::Press {
                button: MouseButton::Middle,
                at: Some(anchor),
            } => {
                self.state = ViewState::Dragging {
                    anchor,
                    snapshot: self.current,
                };
                ViewResponse::Unchanged
            }
            ViewEvent::Press { .. } => ViewResponse::Unchanged,
            ViewEvent::Release => {
                self.state = ViewState::Idle;
                ViewResponse::Unchanged
            }
            ViewEvent::Motion { at } => match (self.state, at) {
                (ViewState::Dragging { anchor, snapshot }, Some(at)) => {
                    self.current = snapshot.translated(anchor.x - at.x, anchor.y - at.y);
                    ViewResponse::Redraw
                }
                _ => ViewResponse::Unchanged,
            },
            ViewEvent::Key('r') => {
                self.reset();
                ViewResponse::Redraw
            }
            ViewEvent::Key('g') => {
                self.grid_visible = !self.grid_visible;
                ViewResponse::Redraw
            }
            ViewEvent::Key('q') => ViewResponse::Close,
            ViewEvent::Key(_) => ViewResponse::Unchanged,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::OsculateError;
    use approx::assert_relative_eq;

    fn unit_view() -> ViewController {
        ViewController::new(ViewBounds::new(-1.0, 1.0, -1.0, 1.0).unwrap())
    }

    #[test]
    fn scroll_up_zooms_in_about_cursor() {
        let mut v = unit_view();
        let at = Point2::new(0.5, 0.0);
        let resp = v.handle(ViewEvent::Scroll {
            direction: ScrollDirection::Up,
            at: Some(at),
        });
        assert_eq!(resp, ViewResponse::Redraw);
        let b = v.bounds();
        assert_relative_eq!(b.width(), 2.0 / 1.2, max_relative = 1e-12);
        // The cursor keeps its relative position inside the view.
        assert_relative_eq!((at.x - b.x_min) / b.width(), 0.75, max_relative = 1e-12);
    }

    #[test]
    fn scroll_in_then_out_restores() {
        let mut v = unit_view();
        let at = Some(Point2::new(0.3, -0.2));
        v.handle(ViewEvent::Scroll {
            direction: ScrollDirection::Up,
            at,
        });
        v.handle(ViewEvent::Scroll {
            direction: ScrollDirection::Down,
            at,
        });
        let b = v.bounds();
        assert_relative_eq!(b.x_min, -1.0, max_relative = 1e-12);
        assert_relative_eq!(b.y_max, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn scroll_outside_axes_is_ignored() {
        let mut v = unit_view();
        let resp = v.handle(ViewEvent::Scroll {
            direction: ScrollDirection::Up,
            at: None,
        });
        assert_eq!(resp, ViewResponse::Unchanged);
        assert_eq!(v.bounds(), ViewBounds::new(-1.0, 1.0, -1.0, 1.0).unwrap());
    }

    #[test]
    fn middle_drag_pans_against_motion() {
        let mut v = unit_view();
        v.handle(ViewEvent::Press {
            button: MouseButton::Middle,
            at: Some(Point2::new(0.0, 0.0)),
        });
        assert!(matches!(v.state(), ViewState::Dragging { .. }));
        let resp = v.handle(ViewEvent::Motion {
            at: Some(Point2::new(0.5, -0.25)),
        });
        assert_eq!(resp, ViewResponse::Redraw);
        let b = v.bounds();
        assert_relative_eq!(b.x_min, -1.5);
        assert_relative_eq!(b.y_min, -0.75);

        v.handle(ViewEvent::Release);
        assert_eq!(v.state(), ViewState::Idle);
        let resp = v.handle(ViewEvent::Motion {
            at: Some(Point2::new(0.9, 0.9)),
        });
        assert_eq!(resp, ViewResponse::Unchanged);
    }

    #[test]
    fn other_buttons_do_not_drag() {
        let mut v = unit_view();
        v.handle(ViewEvent::Press {
            button: MouseButton::Left,
            at: Some(Point2::origin()),
        });
        assert_eq!(v.state(), ViewState::Idle);
        v.handle(ViewEvent::Press {
            button: MouseButton::Middle,
            at: None,
        });
        assert_eq!(v.state(), ViewState::Idle);
    }

    #[test]
    fn keys() {
        let mut v = unit_view();
        v.handle(ViewEvent::Scroll {
            direction: ScrollDirection::Down,
            at: Some(Point2::origin()),
        });
        assert_eq!(v.handle(ViewEvent::Key('r')), ViewResponse::Redraw);
        assert_eq!(v.bounds(), ViewBounds::new(-1.0, 1.0, -1.0, 1.0).unwrap());
        assert_eq!(v.handle(ViewEvent::Key('g')), ViewResponse::Redraw);
        assert!(!v.grid_visible());
        assert_eq!(v.handle(ViewEvent::Key('q')), ViewResponse::Close);
        assert_eq!(v.handle(ViewEvent::Key('x')), ViewResponse::Unchanged);
    }

    #[test]
    fn update_original_changes_reset_target() {
        let mut v = unit_view();
        v.handle(ViewEvent::Scroll {
            direction: ScrollDirection::Up,
            at: Some(Point2::origin()),
        });
        let zoomed = v.bounds();
        v.update_original_bounds();
        v.handle(ViewEvent::Scroll {
            direction: ScrollDirection::Up,
            at: Some(Point2::origin()),
        });
        v.reset();
        assert_eq!(v.bounds(), zoomed);
    }

    #[test]
    fn scale_factor_must_exceed_one() {
        let mut v = unit_view();
        assert_eq!(
            v.set_scale_factor(1.0).unwrap_err(),
            OsculateError::View(ViewError::InvalidScaleFactor(1.0))
        );
        assert!(v.set_scale_factor(f64::NAN).is_err());
        assert_relative_eq!(v.scale_factor(), DEFAULT_SCALE_FACTOR);
        v.set_scale_factor(2.0).unwrap();
        assert_relative_eq!(v.scale_factor(), 2.0);
    }

    #[test]
    fn invalid_bounds() {
        assert!(ViewBounds::new(1.0, -1.0, 0.0, 1.0).is_err());
        assert!(ViewBounds::new(0.0, 1.0, 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn fit_pads_points() {
        let b = ViewBounds::fit(&[Point2::new(0.0, 0.0), Point2::new(2.0, 1.0)], 0.5).unwrap();
        assert_eq!(b, ViewBounds::new(-0.5, 2.5, -0.5, 1.5).unwrap());
        assert!(ViewBounds::fit(&[], 0.1).is_none());
    }
}
