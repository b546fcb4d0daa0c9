//! Room node representation
//!
//! Room = name + optional left/right subtrees.
//! A room with neither child is a leaf and ends exploration.

use std::fmt;

/// Path choice out of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left path (`e`, esquerda)
    Left,

    /// Right path (`d`, direita)
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "esquerda"),
            Direction::Right => write!(f, "direita"),
        }
    }
}

/// Named room owning its two optional subtrees
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: String,
    left: Option<Box<Room>>,
    right: Option<Box<Room>>,
}

impl Room {
    /// Build a room, taking ownership of its children
    pub fn build(name: impl Into<String>, left: Option<Room>, right: Option<Room>) -> Self {
        Self {
            name: name.into(),
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Build a room without exits
    pub fn leaf(name: impl Into<String>) -> Self {
        Self::build(name, None, None)
    }

    /// Room name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Left child, if any
    pub fn left(&self) -> Option<&Room> {
        self.left.as_deref()
    }

    /// Right child, if any
    pub fn right(&self) -> Option<&Room> {
        self.right.as_deref()
    }

    /// Child reached by following `direction`
    pub fn child(&self, direction: Direction) -> Option<&Room> {
        match direction {
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }

    /// Check if leaf (no exits)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Pre-order walk over this room and all rooms below it
    pub fn rooms(&self) -> Rooms<'_> {
        Rooms { stack: vec![self] }
    }

    /// Number of rooms in this subtree
    pub fn room_count(&self) -> usize {
        self.rooms().count()
    }

    /// Longest number of moves from this room down to a leaf
    pub fn depth(&self) -> usize {
        let left = self.left().map_or(0, |room| room.depth() + 1);
        let right = self.right().map_or(0, |room| room.depth() + 1);
        left.max(right)
    }

    /// Follow a sequence of directions, stopping at the first missing exit
    pub fn follow(&self, path: &[Direction]) -> Option<&Room> {
        path.iter()
            .try_fold(self, |room, &direction| room.child(direction))
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Pre-order iterator over a room subtree
#[derive(Debug)]
pub struct Rooms<'a> {
    stack: Vec<&'a Room>,
}

impl<'a> Iterator for Rooms<'a> {
    type Item = &'a Room;

    fn next(&mut self) -> Option<Self::Item> {
        let room = self.stack.pop()?;
        // Right first so the left subtree is visited first
        if let Some(right) = room.right() {
            self.stack.push(right);
        }
        if let Some(left) = room.left() {
            self.stack.push(left);
        }
        Some(room)
    }
}
