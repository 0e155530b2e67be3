//! Diagram zoom state.
//!
//! Visual pages scale their diagram with plain clicks: the primary button
//! zooms in, the secondary button zooms out. There is no upper bound; the
//! lower bound is enforced by refusing to shrink once the scale has reached
//! the floor, checked against the value *before* subtraction. Repeated
//! zooming accumulates ordinary `f64` rounding and that is accepted, the
//! value only ever feeds a CSS transform.

/// Scale change applied per click.
pub const ZOOM_STEP: f64 = 0.1;

/// Shrinking is refused once the current scale is at or below this value.
pub const MIN_SCALE: f64 = 0.1;

/// Uniform scale factor applied to the diagram content element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    scale: f64,
}

impl Default for ZoomState {
    fn default() -> Self {
        ZoomState { scale: 1.0 }
    }
}

impl ZoomState {
    /// Fresh state at the 1.0 scale every page load starts with.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scale factor.
    pub fn scale(self) -> f64 {
        self.scale
    }

    /// Grow by one step. Returns the new scale.
    pub fn zoom_in(&mut self) -> f64 {
        self.scale += ZOOM_STEP;
        self.scale
    }

    /// Shrink by one step if the current scale is still above the floor.
    /// Returns the new scale, or `None` when the guard refused the change.
    pub fn zoom_out(&mut self) -> Option<f64> {
        if self.scale > MIN_SCALE {
            self.scale -= ZOOM_STEP;
            Some(self.scale)
        } else {
            None
        }
    }

    /// CSS transform value applying this scale.
    pub fn transform(self) -> String {
        format!("scale({})", self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_in_grows_by_one_step() {
        let mut zoom = ZoomState::new();
        let scale = zoom.zoom_in();
        assert!((scale - 1.1).abs() < 1e-9);
        let scale = zoom.zoom_in();
        assert!((scale - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_in_has_no_upper_bound() {
        let mut zoom = ZoomState::new();
        for _ in 0..100 {
            zoom.zoom_in();
        }
        assert!((zoom.scale() - 11.0).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_out_stops_at_the_floor() {
        let mut zoom = ZoomState::new();
        let mut shrinks = 0;
        while zoom.zoom_out().is_some() {
            shrinks += 1;
            assert!(zoom.scale() > -1e-9, "scale went negative: {}", zoom.scale());
            assert!(shrinks < 100, "shrinking never hit the floor");
        }
        // The guard reads the value before subtracting, so the final scale
        // sits within one step of the floor and further attempts refuse.
        assert!(zoom.scale() <= MIN_SCALE + ZOOM_STEP + 1e-9);
        assert_eq!(zoom.zoom_out(), None);
        assert_eq!(zoom.zoom_out(), None);
    }

    #[test]
    fn test_zoom_out_then_in_recovers() {
        let mut zoom = ZoomState::new();
        zoom.zoom_out();
        zoom.zoom_in();
        assert!((zoom.scale() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_transform_formats_the_scale() {
        assert_eq!(ZoomState::new().transform(), "scale(1)");
        let mut zoom = ZoomState::new();
        zoom.zoom_in();
        assert_eq!(zoom.transform(), format!("scale({})", zoom.scale()));
    }
}
