//! The mansion map
//!
//! An immutable binary tree of rooms. Rooms live in a single arena owned
//! by the [`Mansion`] and refer to each other by [`RoomId`], so the whole
//! map is dropped as one unit when the game ends.

use crate::GameError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Index of a room inside its mansion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(usize);

/// Which passage of a room leads to a child
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// A single room of the mansion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    name: String,
    clue: Option<String>,
    left: Option<RoomId>,
    right: Option<RoomId>,
    parent: Option<RoomId>,
}

impl Room {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The clue left in this room, if any. Never an empty string.
    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }

    pub fn left(&self) -> Option<RoomId> {
        self.left
    }

    pub fn right(&self) -> Option<RoomId> {
        self.right
    }

    pub fn parent(&self) -> Option<RoomId> {
        self.parent
    }

    pub fn child(&self, side: Side) -> Option<RoomId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// The navigable space: a finite, acyclic tree of rooms with one entrance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mansion {
    rooms: Vec<Room>,
    root: RoomId,
}

impl Mansion {
    /// The entrance room where every exploration starts
    pub fn root(&self) -> RoomId {
        self.root
    }

    /// Look up a room. Ids are only handed out by the builder of this
    /// mansion, so every id refers to an existing room.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Names of the rooms from the entrance down to `id`
    pub fn path_to(&self, id: RoomId) -> Vec<&str> {
        let mut path = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let room = self.room(current);
            path.push(room.name());
            cursor = room.parent;
        }
        path.reverse();
        path
    }
}

/// Assembles a [`Mansion`], checking that the result is a single tree
#[derive(Debug, Default)]
pub struct MansionBuilder {
    rooms: Vec<Room>,
    index: HashMap<String, RoomId>,
}

impl MansionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room. An empty clue is treated as no clue at all.
    pub fn add_room(&mut self, name: &str, clue: Option<&str>) -> Result<RoomId, GameError> {
        if self.index.contains_key(name) {
            return Err(GameError::DuplicateRoom(name.to_string()));
        }
        let id = RoomId(self.rooms.len());
        self.rooms.push(Room {
            name: name.to_string(),
            clue: clue.filter(|c| !c.is_empty()).map(str::to_string),
            left: None,
            right: None,
            parent: None,
        });
        self.index.insert(name.to_string(), id);
        Ok(id)
    }

    pub fn id_of(&self, name: &str) -> Result<RoomId, GameError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| GameError::UnknownRoom(name.to_string()))
    }

    /// Open a passage from `parent` on `side` to `child`
    pub fn connect(&mut self, parent: RoomId, side: Side, child: RoomId) -> Result<(), GameError> {
        if self.rooms[parent.0].child(side).is_some() {
            return Err(GameError::ChildAlreadyAssigned {
                parent: self.rooms[parent.0].name.clone(),
                side,
            });
        }
        if self.rooms[child.0].parent.is_some() {
            return Err(GameError::MultipleParents(self.rooms[child.0].name.clone()));
        }

        self.rooms[child.0].parent = Some(parent);
        let slot = match side {
            Side::Left => &mut self.rooms[parent.0].left,
            Side::Right => &mut self.rooms[parent.0].right,
        };
        *slot = Some(child);
        Ok(())
    }

    /// Freeze the map with `root` as the entrance
    pub fn build(self, root: RoomId) -> Result<Mansion, GameError> {
        if self.rooms.is_empty() {
            return Err(GameError::EmptyMansion);
        }
        if self.rooms[root.0].parent.is_some() {
            return Err(GameError::RootHasParent(self.rooms[root.0].name.clone()));
        }

        // With single parents and a parentless root, any room the walk
        // misses sits on a detached cycle or a separate tree.
        let mut reached = vec![false; self.rooms.len()];
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            reached[id.0] = true;
            let room = &self.rooms[id.0];
            stack.extend(room.left);
            stack.extend(room.right);
        }
        if let Some(pos) = reached.iter().position(|r| !r) {
            return Err(GameError::UnreachableRoom(self.rooms[pos].name.clone()));
        }

        Ok(Mansion {
            rooms: self.rooms,
            root,
        })
    }
}
