use crate::drawing::Coords;
use crate::geometry::Point;
use crate::hit_test::Position;

/// Moves the dragged handle to `cursor` and keeps the opposite one where it
/// was. The result is not normalized, so dragging past the fixed corner
/// leaves the shape flipped until the gesture ends.
pub fn resized_coordinates(cursor: Point, handle: Position, coords: Coords) -> Coords {
    let Coords { x1, y1, x2, y2 } = coords;
    match handle {
        Position::TopLeft | Position::Start => Coords::new(cursor.x, cursor.y, x2, y2),
        Position::TopRight => Coords::new(x1, cursor.y, cursor.x, y2),
        Position::BottomLeft => Coords::new(cursor.x, y1, x2, cursor.y),
        Position::BottomRight | Position::End => Coords::new(x1, y1, cursor.x, cursor.y),
        Position::Inside => coords,
    }
}
