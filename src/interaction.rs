//! Pointer and keyboard state machine for the drawing surface.
//!
//! Kept free of window-system types so every gesture can be driven directly
//! from tests. The window layer forwards cursor positions in canvas pixels.

use winit::window::CursorIcon;

use crate::config::Config;
use crate::drawing::{Element, Tool, create_element};
use crate::geometry::Point;
use crate::hit_test::{Tolerances, cursor_for_position, find_element_at, position_within};
use crate::history::History;
use crate::normalize::{adjustment_required, normalize};
use crate::resize::resized_coordinates;
use crate::rough::RoughOptions;
use crate::selection::SelectedElement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Idle,
    Drawing,
    Moving,
    Resizing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Undo,
    Redo,
}

/// Maps a key press to an editing command: `Ctrl+Z` undoes, `Ctrl+Shift+Z`
/// and `Ctrl+Y` redo.
pub fn command_for_key(key: &str, ctrl: bool, shift: bool) -> Option<Command> {
    if !ctrl {
        return None;
    }
    match key.to_ascii_lowercase().as_str() {
        "z" if shift => Some(Command::Redo),
        "z" => Some(Command::Undo),
        "y" => Some(Command::Redo),
        _ => None,
    }
}

pub struct Controller {
    history: History<Vec<Element>>,
    tool: Tool,
    action: Action,
    selected: Option<SelectedElement>,
    tolerances: Tolerances,
    rough: RoughOptions,
}

impl Controller {
    pub fn new(config: &Config) -> Self {
        Self {
            history: History::with_limit(Vec::new(), config.history_limit),
            tool: Tool::Line,
            action: Action::Idle,
            selected: None,
            tolerances: config.hit,
            rough: config.rough.clone(),
        }
    }

    pub fn elements(&self) -> &[Element] {
        self.history.current()
    }

    pub fn history(&self) -> &History<Vec<Element>> {
        &self.history
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            log::debug!("Tool changed to {:?}", tool);
            self.tool = tool;
        }
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn selected(&self) -> Option<&SelectedElement> {
        self.selected.as_ref()
    }

    /// Cursor to show while hovering with the selection tool.
    pub fn hover_cursor(&self, cursor: Point) -> CursorIcon {
        if self.tool != Tool::Selection {
            return CursorIcon::Crosshair;
        }
        let position = self
            .elements()
            .iter()
            .find_map(|element| position_within(cursor, element, &self.tolerances));
        cursor_for_position(position)
    }

    /// Returns true when the element list or the action changed.
    pub fn pointer_down(&mut self, cursor: Point) -> bool {
        if self.action != Action::Idle {
            return false;
        }

        match self.tool {
            Tool::Selection => {
                let Some(selected) = find_element_at(cursor, self.elements(), &self.tolerances) else {
                    return false;
                };
                self.action = match selected.position {
                    Some(position) if position.is_handle() => Action::Resizing,
                    _ => Action::Moving,
                };
                log::debug!(
                    "Picked element {} at {:?} ({:?})",
                    selected.id(),
                    selected.position,
                    self.action
                );
                // The whole drag becomes one undo step on top of this copy.
                let snapshot = self.elements().to_vec();
                self.history.commit(snapshot);
                self.selected = Some(selected);
                true
            }
            Tool::Line | Tool::Rectangle | Tool::Pencil => {
                let id = self.elements().len();
                let Some(element) =
                    create_element(id, cursor.x, cursor.y, cursor.x, cursor.y, self.tool, &self.rough)
                else {
                    return false;
                };
                log::debug!("Started {:?} element {}", self.tool, id);

                let mut next = self.elements().to_vec();
                next.push(element.clone());
                self.history.commit(next);
                self.selected = Some(SelectedElement::pick(element, None, cursor));
                self.action = Action::Drawing;
                true
            }
            Tool::Text => {
                log::debug!("Text elements are not supported yet");
                false
            }
        }
    }

    pub fn pointer_move(&mut self, cursor: Point) -> bool {
        let Some(selected) = &self.selected else {
            return false;
        };
        let id = selected.id();

        let updated = match self.action {
            Action::Idle => return false,
            Action::Drawing => {
                let Some(current) = self.elements().get(id) else {
                    return self.skip_stale(id);
                };
                match current.coords() {
                    Some(mut coords) => {
                        coords.x2 = cursor.x;
                        coords.y2 = cursor.y;
                        current.with_coords(coords)
                    }
                    None => {
                        let mut stroke = current.clone();
                        stroke.push_point(cursor);
                        stroke
                    }
                }
            }
            Action::Moving => selected.moved_to(cursor),
            Action::Resizing => match (selected.position, selected.element.coords()) {
                (Some(handle), Some(coords)) => {
                    selected.element.with_coords(resized_coordinates(cursor, handle, coords))
                }
                _ => unreachable!("resizing requires a handle on a line or rectangle"),
            },
        };

        log::trace!("{:?} element {} to {:?}", self.action, id, cursor);
        self.replace_element(updated)
    }

    pub fn pointer_up(&mut self) -> bool {
        if self.action == Action::Idle {
            return false;
        }

        if matches!(self.action, Action::Drawing | Action::Resizing) {
            if let Some(selected) = &self.selected {
                let id = selected.id();
                let finished = self.elements().get(id).and_then(|element| {
                    if !adjustment_required(element.tool()) {
                        return None;
                    }
                    normalize(element).map(|coords| element.with_coords(coords))
                });
                if let Some(element) = finished {
                    log::debug!("Finished element {} at {:?}", id, element.coords());
                    self.replace_element(element);
                }
            }
        }

        self.action = Action::Idle;
        self.selected = None;
        true
    }

    pub fn execute(&mut self, command: Command) -> bool {
        match command {
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
        }
    }

    pub fn undo(&mut self) -> bool {
        let moved = self.history.undo();
        if moved {
            log::debug!("Undo to snapshot {}/{}", self.history.index(), self.history.len() - 1);
        }
        moved
    }

    pub fn redo(&mut self) -> bool {
        let moved = self.history.redo();
        if moved {
            log::debug!("Redo to snapshot {}/{}", self.history.index(), self.history.len() - 1);
        }
        moved
    }

    /// Writes `element` over the slot with its id in the current snapshot.
    fn replace_element(&mut self, element: Element) -> bool {
        let id = element.id();
        if id >= self.elements().len() {
            return self.skip_stale(id);
        }
        let mut next = self.elements().to_vec();
        next[id] = element;
        self.history.set(next, true);
        true
    }

    fn skip_stale(&self, id: usize) -> bool {
        log::warn!("Element {} is not in the current snapshot, ignoring edit", id);
        false
    }
}
