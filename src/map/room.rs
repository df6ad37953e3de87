//! Rooms, their door slots, and the pre-scan that sizes the room table.

use std::collections::BTreeSet;

use glam::IVec2;
use tracing::debug;

use crate::error::MapError;
use crate::map::direction::Direction;
use crate::map::layout::Layout;

/// The identity card a room is dealt as. Rooms own exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomCard(pub usize);

/// A floor cell of a room that is reserved for door artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DoorSlot {
    /// The room cell the door is drawn on.
    pub position: IVec2,
    /// The door's label, pointing from the room to its exterior tile.
    pub direction: Direction,
}

impl DoorSlot {
    /// Computes the slot for a door whose exterior tile is at `exit`.
    ///
    /// The slot sits one step from the exterior tile, opposite the door's label.
    pub fn for_exit(exit: IVec2, direction: Direction) -> DoorSlot {
        DoorSlot {
            position: exit + direction.opposite().as_ivec2(),
            direction,
        }
    }

    /// Artwork slot index, 1 through 4 clockwise from up.
    pub fn index(&self) -> u8 {
        self.direction.slot_index()
    }
}

/// A named area of the board made of several floor cells.
///
/// Rooms take no part in grid adjacency; they are reached through doors and shortcuts only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    id: usize,
    card: RoomCard,
    /// Every cell claimed by the room, in registration order. Used for coordinate lookup.
    locations: Vec<IVec2>,
    /// Cells offered as plain floor; door slots are removed once doors are wired.
    floor: Vec<IVec2>,
    door_slots: Vec<DoorSlot>,
}

impl Room {
    pub fn new(id: usize) -> Room {
        Room {
            id,
            card: RoomCard(id),
            locations: Vec::new(),
            floor: Vec::new(),
            door_slots: Vec::new(),
        }
    }

    /// The room's 0-based id.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn card(&self) -> RoomCard {
        self.card
    }

    /// Every cell claimed by the room, including cells reserved for doors.
    pub fn locations(&self) -> &[IVec2] {
        &self.locations
    }

    /// Cells that may be drawn as plain floor.
    pub fn floor(&self) -> &[IVec2] {
        &self.floor
    }

    pub fn door_slots(&self) -> &[DoorSlot] {
        &self.door_slots
    }

    pub fn contains(&self, position: IVec2) -> bool {
        self.locations.contains(&position)
    }

    pub(crate) fn add_location(&mut self, position: IVec2) {
        if !self.locations.contains(&position) {
            self.locations.push(position);
            self.floor.push(position);
        }
    }

    /// Records a door slot. The slot must already be one of the room's cells.
    pub(crate) fn add_door_slot(&mut self, slot: DoorSlot) -> Result<(), MapError> {
        if !self.contains(slot.position) {
            return Err(MapError::DetachedDoor {
                room: self.id,
                x: slot.position.x,
                y: slot.position.y,
            });
        }

        if !self.door_slots.contains(&slot) {
            self.door_slots.push(slot);
        }
        Ok(())
    }

    /// Withdraws door slot cells from the drawable floor.
    pub(crate) fn retire_door_slots(&mut self) {
        let slots = &self.door_slots;
        self.floor.retain(|cell| !slots.iter().any(|slot| slot.position == *cell));
    }
}

/// Pre-scan of a tile layout that determines how many rooms it references.
pub struct RoomRegistry;

impl RoomRegistry {
    /// Returns the number of rooms referenced by the layout.
    ///
    /// Every token that parses as a positive integer is a room id (1-based); the highest one
    /// is the room count.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::MissingRoom`] if any id below the highest is never referenced.
    pub fn scan(layout: &Layout) -> Result<usize, MapError> {
        let ids = layout
            .iter()
            .filter_map(|(_, _, token)| token.parse::<usize>().ok())
            .filter(|&id| id > 0)
            .collect::<BTreeSet<_>>();

        let max = ids.last().copied().unwrap_or(0);
        if let Some(missing) = (1..max).find(|id| !ids.contains(id)) {
            return Err(MapError::MissingRoom { max, missing });
        }

        debug!(room_count = max, "Scanned room ids");
        Ok(max)
    }

    /// Allocates one empty room per id, indexed `0..count`.
    pub fn allocate(count: usize) -> Vec<Room> {
        (0..count).map(Room::new).collect()
    }
}
