//! Rooms and the dungeon graph.
//!
//! The dungeon is read-only input: the search borrows it immutably, so one
//! `Dungeon` can back any number of concurrent searches.

use core::ops::Index;

use super::{Item, Monster, RoomId};
use crate::error::DungeonError;

/// A single room: outgoing edges, an optional guardian and loot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Room {
    /// Rooms reachable in one move. Edges are directed; link both ways for a
    /// corridor that can be walked back.
    pub neighbors: Vec<RoomId>,
    pub monster: Option<Monster>,
    /// Items addressable by their index in this list.
    pub items: Vec<Item>,
}

impl Room {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the guardian (builder pattern).
    #[must_use]
    pub fn with_monster(mut self, monster: Monster) -> Self {
        self.monster = Some(monster);
        self
    }

    /// Appends an item (builder pattern).
    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn is_guarded(&self) -> bool {
        self.monster.is_some()
    }
}

/// The room graph, indexed by [`RoomId`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Dungeon {
    rooms: Vec<Room>,
}

impl Dungeon {
    /// Builds a dungeon, rejecting edges that point outside the room list.
    pub fn new(rooms: Vec<Room>) -> Result<Self, DungeonError> {
        let dungeon = Self { rooms };
        dungeon.validate()?;
        Ok(dungeon)
    }

    /// Creates `count` empty, unconnected rooms.
    pub fn with_rooms(count: usize) -> Self {
        Self {
            rooms: vec![Room::default(); count],
        }
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn contains(&self, id: RoomId) -> bool {
        id.index() < self.rooms.len()
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    /// Mutable access for incremental construction.
    ///
    /// Adding edges through this handle bypasses validation; call
    /// [`Dungeon::validate`] before searching.
    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id.index())
    }

    pub fn rooms(&self) -> impl ExactSizeIterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, room)| (RoomId(i), room))
    }

    /// Adds a directed edge `from -> to`.
    pub fn connect(&mut self, from: RoomId, to: RoomId) -> Result<(), DungeonError> {
        if !self.contains(to) {
            return Err(DungeonError::UnknownNeighbor { room: from, neighbor: to });
        }
        let room = self
            .rooms
            .get_mut(from.index())
            .ok_or(DungeonError::UnknownRoom(from))?;
        room.neighbors.push(to);
        Ok(())
    }

    /// Adds edges in both directions.
    pub fn link(&mut self, a: RoomId, b: RoomId) -> Result<(), DungeonError> {
        self.connect(a, b)?;
        self.connect(b, a)
    }

    /// Checks that every neighbor reference names an existing room.
    pub fn validate(&self) -> Result<(), DungeonError> {
        for (id, room) in self.rooms() {
            if let Some(&neighbor) = room.neighbors.iter().find(|n| !self.contains(**n)) {
                return Err(DungeonError::UnknownNeighbor { room: id, neighbor });
            }
        }
        Ok(())
    }

    /// Total number of items across every room.
    pub fn item_count(&self) -> usize {
        self.rooms.iter().map(|room| room.items.len()).sum()
    }
}

impl Index<RoomId> for Dungeon {
    type Output = Room;

    /// Panics if `id` is out of range; use [`Dungeon::room`] for unchecked ids.
    fn index(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::ItemCategory;

    #[test]
    fn link_adds_both_directions() {
        let mut dungeon = Dungeon::with_rooms(2);
        dungeon.link(RoomId(0), RoomId(1)).unwrap();

        assert_eq!(dungeon.room(RoomId(0)).unwrap().neighbors, vec![RoomId(1)]);
        assert_eq!(dungeon.room(RoomId(1)).unwrap().neighbors, vec![RoomId(0)]);
    }

    #[test]
    fn connect_rejects_unknown_rooms() {
        let mut dungeon = Dungeon::with_rooms(2);

        assert_eq!(
            dungeon.connect(RoomId(0), RoomId(5)),
            Err(DungeonError::UnknownNeighbor {
                room: RoomId(0),
                neighbor: RoomId(5)
            })
        );
        assert_eq!(
            dungeon.connect(RoomId(7), RoomId(1)),
            Err(DungeonError::UnknownRoom(RoomId(7)))
        );
    }

    #[test]
    fn new_validates_neighbor_indices() {
        let rooms = vec![
            Room {
                neighbors: vec![RoomId(1)],
                ..Room::default()
            },
            Room {
                neighbors: vec![RoomId(3)],
                ..Room::default()
            },
        ];

        assert_eq!(
            Dungeon::new(rooms),
            Err(DungeonError::UnknownNeighbor {
                room: RoomId(1),
                neighbor: RoomId(3)
            })
        );
    }

    #[test]
    fn builder_sets_guardian_and_loot() {
        let room = Room::new()
            .with_monster(Monster::new(10, 1, 0))
            .with_item(Item::new("Sword", ItemCategory::Weapon))
            .with_item(Item::new("Heavy Armor", ItemCategory::Armor));

        assert!(room.is_guarded());
        assert!(!Room::new().is_guarded());
        assert_eq!(room.item(1).map(|item| item.category), Some(ItemCategory::Armor));
        assert!(room.item(2).is_none());
    }

    #[test]
    fn item_count_spans_rooms() {
        let mut dungeon = Dungeon::with_rooms(3);
        for id in [RoomId(0), RoomId(2)] {
            let room = dungeon.room_mut(id).unwrap();
            room.items.push(Item::new("Sword", ItemCategory::Weapon));
        }

        assert_eq!(dungeon.item_count(), 2);
    }
}
