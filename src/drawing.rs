use crate::geometry::Point;
use crate::rough::{Drawable, RoughGenerator, RoughOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Selection,
    Line,
    Rectangle,
    Pencil,
    /// Placeholder; pointer input with it does nothing yet.
    Text,
}

impl Tool {
    /// Whether pressing the pointer with this tool starts a new element.
    pub fn creates_element(self) -> bool {
        matches!(self, Tool::Line | Tool::Rectangle | Tool::Pencil)
    }
}

/// Two corner (or end) points of a line or rectangle, in the order they were
/// drawn until normalization sorts them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coords {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Coords {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Line {
        id: usize,
        coords: Coords,
        rough: Drawable,
    },
    Rectangle {
        id: usize,
        coords: Coords,
        rough: Drawable,
    },
    Freehand {
        id: usize,
        points: Vec<Point>,
    },
}

/// Builds the element `tool` draws, spanning `(x1, y1)` to `(x2, y2)`.
///
/// Pencil strokes only take the first point; later points arrive through
/// [`Element::push_point`]. Returns `None` for tools that don't draw.
pub fn create_element(
    id: usize,
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    tool: Tool,
    options: &RoughOptions,
) -> Option<Element> {
    let coords = Coords::new(x1, y1, x2, y2);
    match tool {
        Tool::Line => {
            let rough = RoughGenerator::for_element(id, options).line(x1, y1, x2, y2, options);
            Some(Element::Line { id, coords, rough })
        }
        Tool::Rectangle => {
            let rough = RoughGenerator::for_element(id, options).rectangle(
                x1,
                y1,
                coords.width(),
                coords.height(),
                options,
            );
            Some(Element::Rectangle { id, coords, rough })
        }
        Tool::Pencil => Some(Element::Freehand {
            id,
            points: vec![Point::new(x1, y1)],
        }),
        Tool::Selection | Tool::Text => None,
    }
}

impl Element {
    pub fn id(&self) -> usize {
        match self {
            Element::Line { id, .. } | Element::Rectangle { id, .. } | Element::Freehand { id, .. } => *id,
        }
    }

    /// The tool that draws this kind of element.
    pub fn tool(&self) -> Tool {
        match self {
            Element::Line { .. } => Tool::Line,
            Element::Rectangle { .. } => Tool::Rectangle,
            Element::Freehand { .. } => Tool::Pencil,
        }
    }

    pub fn coords(&self) -> Option<Coords> {
        match self {
            Element::Line { coords, .. } | Element::Rectangle { coords, .. } => Some(*coords),
            Element::Freehand { .. } => None,
        }
    }

    pub fn points(&self) -> Option<&[Point]> {
        match self {
            Element::Freehand { points, .. } => Some(points),
            _ => None,
        }
    }

    /// Same line or rectangle moved to `coords`, with its rough strokes
    /// regenerated. Freehand strokes have no corners and come back unchanged.
    pub fn with_coords(&self, coords: Coords) -> Element {
        match self {
            Element::Line { id, rough, .. } | Element::Rectangle { id, rough, .. } => create_element(
                *id,
                coords.x1,
                coords.y1,
                coords.x2,
                coords.y2,
                self.tool(),
                &rough.options,
            )
            .unwrap_or_else(|| self.clone()),
            Element::Freehand { .. } => self.clone(),
        }
    }

    /// Same freehand stroke with its points replaced.
    pub fn with_points(&self, new_points: Vec<Point>) -> Element {
        match self {
            Element::Freehand { id, .. } => Element::Freehand {
                id: *id,
                points: new_points,
            },
            _ => self.clone(),
        }
    }

    /// Freehand stroke whose points sit at `cursor - offsets[i]`, the way a
    /// stroke follows the pointer while dragged.
    pub fn translated_points(&self, cursor: Point, offsets: &[Point]) -> Element {
        self.with_points(offsets.iter().map(|offset| cursor - *offset).collect())
    }

    /// Extends a freehand stroke. Lines and rectangles are rebuilt through
    /// [`Element::with_coords`] instead.
    pub fn push_point(&mut self, point: Point) {
        if let Element::Freehand { points, .. } = self {
            points.push(point);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_line_and_rectangle() {
        let options = RoughOptions::default();
        let line = create_element(0, 1.0, 2.0, 3.0, 4.0, Tool::Line, &options).unwrap();
        assert_eq!(line.id(), 0);
        assert_eq!(line.tool(), Tool::Line);
        assert_eq!(line.coords(), Some(Coords::new(1.0, 2.0, 3.0, 4.0)));

        let rect = create_element(1, 10.0, 10.0, 50.0, 40.0, Tool::Rectangle, &options).unwrap();
        assert_eq!(rect.tool(), Tool::Rectangle);
        assert_eq!(rect.coords(), Some(Coords::new(10.0, 10.0, 50.0, 40.0)));
        match rect {
            Element::Rectangle { rough, .. } => assert_eq!(rough.sets.len(), 8),
            other => panic!("expected rectangle, got {:?}", other),
        }
    }

    #[test]
    fn test_create_freehand_starts_with_one_point() {
        let options = RoughOptions::default();
        let stroke = create_element(2, 5.0, 6.0, 100.0, 100.0, Tool::Pencil, &options).unwrap();
        assert_eq!(stroke.points(), Some(&[Point::new(5.0, 6.0)][..]));
        assert_eq!(stroke.coords(), None);
    }

    #[test]
    fn test_non_drawing_tools_create_nothing() {
        let options = RoughOptions::default();
        assert!(create_element(0, 0.0, 0.0, 1.0, 1.0, Tool::Selection, &options).is_none());
        assert!(create_element(0, 0.0, 0.0, 1.0, 1.0, Tool::Text, &options).is_none());
    }

    #[test]
    fn test_with_coords_regenerates_rough_strokes() {
        let options = RoughOptions::default();
        let line = create_element(0, 0.0, 0.0, 10.0, 10.0, Tool::Line, &options).unwrap();
        let moved = line.with_coords(Coords::new(5.0, 5.0, 20.0, 20.0));

        assert_eq!(moved.id(), 0);
        assert_eq!(moved.coords(), Some(Coords::new(5.0, 5.0, 20.0, 20.0)));
        assert_ne!(moved, line);
        // Coming back to the starting coordinates gives back an equal element.
        assert_eq!(moved.with_coords(Coords::new(0.0, 0.0, 10.0, 10.0)), line);
    }

    #[test]
    fn test_push_point_only_extends_freehand() {
        let options = RoughOptions::default();
        let mut stroke = create_element(0, 0.0, 0.0, 0.0, 0.0, Tool::Pencil, &options).unwrap();
        stroke.push_point(Point::new(1.0, 1.0));
        assert_eq!(stroke.points().map(|p| p.len()), Some(2));

        let mut line = create_element(1, 0.0, 0.0, 1.0, 1.0, Tool::Line, &options).unwrap();
        let before = line.clone();
        line.push_point(Point::new(9.0, 9.0));
        assert_eq!(line, before);
    }

    #[test]
    fn test_translated_points_follow_cursor() {
        let stroke = Element::Freehand {
            id: 4,
            points: vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
        };
        let offsets = [Point::new(5.0, 5.0), Point::new(-5.0, 5.0)];
        let moved = stroke.translated_points(Point::new(20.0, 20.0), &offsets);
        assert_eq!(moved.id(), 4);
        assert_eq!(moved.points(), Some(&[Point::new(15.0, 15.0), Point::new(25.0, 15.0)][..]));
    }

    #[test]
    fn test_tool_creates_element() {
        assert!(Tool::Line.creates_element());
        assert!(Tool::Pencil.creates_element());
        assert!(!Tool::Selection.creates_element());
        assert!(!Tool::Text.creates_element());
    }
}
