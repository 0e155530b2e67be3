//! Tooltip placement arithmetic.
//!
//! The tooltip is absolutely positioned in document coordinates, so the
//! pointer's client position has to be combined with the window scroll
//! offset. Each axis is then clamped independently: a box that would cross
//! the far viewport edge flips to the other side of the pointer, and a box
//! pushed past the scrolled-to origin pins at a minimum inset. Overflow
//! checks compare client coordinates against the viewport, pin checks
//! compare document coordinates against the scroll offset.

/// Gap kept between the pointer and the near tooltip edge.
pub const POINTER_INSET: f64 = 10.0;

/// Pointer position in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

/// Window scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

/// A width/height pair, used for both the tooltip box and the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Tooltip position in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DocPosition {
    pub x: f64,
    pub y: f64,
}

/// Where the tooltip goes for the current pointer position.
pub fn place_tooltip(
    pointer: PointerPosition,
    scroll: ScrollOffset,
    tooltip: Size,
    viewport: Size,
) -> DocPosition {
    let mut x = pointer.x + scroll.x + POINTER_INSET;
    let mut y = pointer.y + scroll.y + POINTER_INSET;

    // Would cross the right edge: flip to the left of the pointer.
    if pointer.x + POINTER_INSET + tooltip.width > viewport.width {
        x = pointer.x + scroll.x - tooltip.width - POINTER_INSET;
    }
    // Pushed past the scrolled-to left origin: pin at the inset.
    if x < scroll.x {
        x = scroll.x + POINTER_INSET;
    }

    // Same per-axis treatment vertically.
    if pointer.y + POINTER_INSET + tooltip.height > viewport.height {
        y = pointer.y + scroll.y - tooltip.height - POINTER_INSET;
    }
    if y < scroll.y {
        y = scroll.y + POINTER_INSET;
    }

    DocPosition { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size { width: 800.0, height: 600.0 };
    const TOOLTIP: Size = Size { width: 100.0, height: 40.0 };

    fn place(x: f64, y: f64, scroll: ScrollOffset) -> DocPosition {
        place_tooltip(PointerPosition { x, y }, scroll, TOOLTIP, VIEWPORT)
    }

    #[test]
    fn test_default_offset_below_right_of_pointer() {
        let pos = place(200.0, 150.0, ScrollOffset::default());
        assert_eq!(pos.x, 210.0);
        assert_eq!(pos.y, 160.0);
    }

    #[test]
    fn test_scroll_offset_shifts_into_document_coordinates() {
        let pos = place(200.0, 150.0, ScrollOffset { x: 100.0, y: 50.0 });
        assert_eq!(pos.x, 310.0);
        assert_eq!(pos.y, 210.0);
    }

    #[test]
    fn test_right_overflow_flips_horizontally() {
        // 750 + 10 + 100 crosses the 800px edge, so the box flips to the
        // left of the pointer; the vertical axis is untouched.
        let pos = place(750.0, 150.0, ScrollOffset::default());
        assert_eq!(pos.x, 640.0);
        assert_eq!(pos.y, 160.0);
    }

    #[test]
    fn test_bottom_overflow_flips_vertically() {
        let pos = place(200.0, 580.0, ScrollOffset::default());
        assert_eq!(pos.x, 210.0);
        assert_eq!(pos.y, 530.0);
    }

    #[test]
    fn test_corner_overflow_flips_both_axes() {
        let pos = place(750.0, 580.0, ScrollOffset::default());
        assert_eq!(pos.x, 640.0);
        assert_eq!(pos.y, 530.0);
    }

    #[test]
    fn test_flip_that_leaves_the_page_pins_at_the_inset() {
        // A small viewport and a large box: the flip lands at negative
        // coordinates and the position pins just inside the origin.
        let cramped = Size { width: 200.0, height: 100.0 };
        let big = Size { width: 300.0, height: 200.0 };
        let pos = place_tooltip(
            PointerPosition { x: 5.0, y: 5.0 },
            ScrollOffset::default(),
            big,
            cramped,
        );
        assert_eq!(pos.x, 10.0);
        assert_eq!(pos.y, 10.0);
    }

    #[test]
    fn test_pin_respects_scroll_origin() {
        let cramped = Size { width: 200.0, height: 100.0 };
        let big = Size { width: 300.0, height: 200.0 };
        let scroll = ScrollOffset { x: 500.0, y: 400.0 };
        let pos = place_tooltip(PointerPosition { x: 5.0, y: 5.0 }, scroll, big, cramped);
        assert_eq!(pos.x, 510.0);
        assert_eq!(pos.y, 410.0);
    }

    #[test]
    fn test_overflow_check_uses_client_coordinates() {
        // Scrolled far right: the pointer is still well inside the visible
        // viewport, so no flip happens even though the document coordinate
        // is huge.
        let pos = place(200.0, 150.0, ScrollOffset { x: 5000.0, y: 0.0 });
        assert_eq!(pos.x, 5210.0);
        assert_eq!(pos.y, 160.0);
    }
}
