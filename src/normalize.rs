use crate::drawing::{Coords, Element, Tool};

/// Whether a finished element of this kind gets its corners sorted.
pub fn adjustment_required(tool: Tool) -> bool {
    matches!(tool, Tool::Line | Tool::Rectangle)
}

/// Canonical coordinates for a line or rectangle; `None` for freehand strokes,
/// which keep their drawing order.
///
/// Rectangles come back as top-left / bottom-right. Lines start at the
/// endpoint with the smaller `x` (then smaller `y` on a tie).
pub fn normalize(element: &Element) -> Option<Coords> {
    match element {
        Element::Rectangle { coords, .. } => Some(Coords::new(
            coords.x1.min(coords.x2),
            coords.y1.min(coords.y2),
            coords.x1.max(coords.x2),
            coords.y1.max(coords.y2),
        )),
        Element::Line { coords, .. } => {
            let Coords { x1, y1, x2, y2 } = *coords;
            if x1 < x2 || (x1 == x2 && y1 <= y2) {
                Some(*coords)
            } else {
                Some(Coords::new(x2, y2, x1, y1))
            }
        }
        Element::Freehand { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing::create_element;
    use crate::geometry::Point;
    use crate::rough::RoughOptions;

    fn element(x1: f32, y1: f32, x2: f32, y2: f32, tool: Tool) -> Element {
        create_element(0, x1, y1, x2, y2, tool, &RoughOptions::default()).unwrap()
    }

    #[test]
    fn test_rectangle_any_drag_direction() {
        let expected = Some(Coords::new(5.0, 5.0, 50.0, 40.0));
        assert_eq!(normalize(&element(5.0, 5.0, 50.0, 40.0, Tool::Rectangle)), expected);
        assert_eq!(normalize(&element(50.0, 40.0, 5.0, 5.0, Tool::Rectangle)), expected);
        assert_eq!(normalize(&element(50.0, 5.0, 5.0, 40.0, Tool::Rectangle)), expected);
        assert_eq!(normalize(&element(5.0, 40.0, 50.0, 5.0, Tool::Rectangle)), expected);
    }

    #[test]
    fn test_rectangle_is_idempotent() {
        let samples = [
            (0.0, 0.0, 0.0, 0.0),
            (10.0, -3.0, -7.5, 22.0),
            (-1.0, -1.0, -20.0, -30.0),
            (100.0, 100.0, 100.0, 0.0),
        ];
        for (x1, y1, x2, y2) in samples {
            let once = normalize(&element(x1, y1, x2, y2, Tool::Rectangle)).unwrap();
            let again = normalize(&element(once.x1, once.y1, once.x2, once.y2, Tool::Rectangle));
            assert_eq!(again, Some(once));
        }
    }

    #[test]
    fn test_line_orders_endpoints() {
        assert_eq!(
            normalize(&element(100.0, 100.0, 0.0, 0.0, Tool::Line)),
            Some(Coords::new(0.0, 0.0, 100.0, 100.0))
        );
        assert_eq!(
            normalize(&element(0.0, 100.0, 100.0, 0.0, Tool::Line)),
            Some(Coords::new(0.0, 100.0, 100.0, 0.0))
        );
        // Vertical line: y breaks the tie.
        assert_eq!(
            normalize(&element(5.0, 30.0, 5.0, 10.0, Tool::Line)),
            Some(Coords::new(5.0, 10.0, 5.0, 30.0))
        );
    }

    #[test]
    fn test_freehand_is_left_alone() {
        let stroke = Element::Freehand {
            id: 0,
            points: vec![Point::new(3.0, 3.0), Point::new(1.0, 1.0)],
        };
        assert_eq!(normalize(&stroke), None);
        assert!(!adjustment_required(Tool::Pencil));
        assert!(adjustment_required(Tool::Line));
        assert!(adjustment_required(Tool::Rectangle));
    }
}
