use crate::drawing::{Coords, Element};
use crate::geometry::Point;
use crate::hit_test::Position;

/// Where the cursor sat relative to the element when it was picked up.
#[derive(Debug, Clone, PartialEq)]
pub enum Offset {
    /// Cursor minus `(x1, y1)`.
    Anchor(Point),
    /// Cursor minus each point of a freehand stroke, in stroke order.
    Points(Vec<Point>),
}

/// An element picked up by the pointer, with the state needed to drag it.
///
/// Lives from pointer-down to pointer-up and is never stored in history.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedElement {
    pub element: Element,
    pub position: Option<Position>,
    pub offset: Offset,
}

impl SelectedElement {
    pub fn pick(element: Element, position: Option<Position>, cursor: Point) -> Self {
        let offset = match &element {
            Element::Line { coords, .. } | Element::Rectangle { coords, .. } => {
                Offset::Anchor(cursor - coords.start())
            }
            Element::Freehand { points, .. } => {
                Offset::Points(points.iter().map(|point| cursor - *point).collect())
            }
        };
        Self {
            element,
            position,
            offset,
        }
    }

    pub fn id(&self) -> usize {
        self.element.id()
    }

    /// The picked element translated so the grab point follows `cursor`.
    pub fn moved_to(&self, cursor: Point) -> Element {
        match (&self.element, &self.offset) {
            (Element::Line { coords, .. } | Element::Rectangle { coords, .. }, Offset::Anchor(offset)) => {
                let x1 = cursor.x - offset.x;
                let y1 = cursor.y - offset.y;
                self.element.with_coords(Coords::new(
                    x1,
                    y1,
                    x1 + coords.width(),
                    y1 + coords.height(),
                ))
            }
            (Element::Freehand { .. }, Offset::Points(offsets)) => {
                self.element.translated_points(cursor, offsets)
            }
            _ => unreachable!("`pick` pairs the offset kind with the element kind"),
        }
    }
}
