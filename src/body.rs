use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::input::Direction;
use crate::segment::{Position, Segment};

/// The snake: an ordered chain of segments plus the turns still travelling
/// down it.
///
/// Each segment keeps its own heading. A turn is recorded only at the cell the
/// head occupied when it was entered; every segment that later starts a tick
/// on that cell takes the same turn. The entry is dropped once the tail has
/// taken it, so the map only ever holds corners that some segment has yet to
/// reach.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Body {
    segments: Vec<Segment>,
    turns: HashMap<Position, Direction>,
}

impl Body {
    /// Creates a one-segment body at `start` heading `direction`.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        Self {
            segments: vec![Segment::new(start, direction)],
            turns: HashMap::new(),
        }
    }

    /// Creates a body from explicit segments (first is head) with no pending turns.
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        assert!(!segments.is_empty(), "body needs at least one segment");

        Self {
            segments,
            turns: HashMap::new(),
        }
    }

    /// Records a turn at the head's current cell.
    ///
    /// Nothing is recorded when the head would already leave the cell heading
    /// `direction`. Repeated calls on the same cell keep the last direction.
    /// Reversing into the neck is allowed.
    pub fn steer(&mut self, direction: Direction) {
        let head = self.head();
        let planned = self
            .turns
            .get(&head.position)
            .copied()
            .unwrap_or(head.direction);
        if planned == direction {
            return;
        }

        trace!(x = head.position.x, y = head.position.y, ?direction, "turn recorded");
        self.turns.insert(head.position, direction);
    }

    /// Moves every segment one cell, head first.
    pub fn advance(&mut self) {
        let tail_index = self.segments.len() - 1;

        for (index, segment) in self.segments.iter_mut().enumerate() {
            let corner = segment.position;
            let Some(turn) = self.turns.get(&corner).copied() else {
                let heading = segment.direction;
                segment.advance(heading);
                continue;
            };

            segment.advance(turn);
            if index == tail_index {
                self.turns.remove(&corner);
            }
        }
    }

    /// Appends a segment one cell behind the tail, sharing its heading.
    pub fn grow(&mut self) {
        let tail = self.tail();
        let position = tail.position.step(tail.direction.opposite());
        self.segments.push(Segment::new(position, tail.direction));
    }

    /// Replaces the whole body with a fresh one-segment body and forgets all turns.
    pub fn reset(&mut self, start: Position, direction: Direction) {
        *self = Self::new(start, direction);
    }

    /// Returns true when two segments share a cell.
    #[must_use]
    pub fn has_self_overlap(&self) -> bool {
        if self.segments.len() < 2 {
            return false;
        }

        let mut seen = HashSet::with_capacity(self.segments.len());
        !self
            .segments
            .iter()
            .all(|segment| seen.insert(segment.position))
    }

    /// Returns the head segment.
    #[must_use]
    pub fn head(&self) -> Segment {
        *self
            .segments
            .first()
            .expect("body must always contain at least one segment")
    }

    /// Returns the tail segment (the head for a one-segment body).
    #[must_use]
    pub fn tail(&self) -> Segment {
        *self
            .segments
            .last()
            .expect("body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.segments
            .iter()
            .any(|segment| segment.position == position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments from head to tail.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Corners not yet taken by the tail.
    #[must_use]
    pub fn pending_turns(&self) -> &HashMap<Position, Direction> {
        &self.turns
    }
}
