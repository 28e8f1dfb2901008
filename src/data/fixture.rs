//! Startup fixture: the mansion layout and the clue to suspect records
//!
//! A fixture is plain data. The built-in manor is used unless a TOML file
//! is supplied on the command line:
//!
//! ```toml
//! root = "Hall"
//! max_suspects = 10
//!
//! [[room]]
//! name = "Hall"
//! clue = "Muddy footprints"
//! left = "Library"
//!
//! [[room]]
//! name = "Library"
//!
//! [[association]]
//! clue = "Muddy footprints"
//! suspect = "Mr Green"
//! ```

use super::{AssociationTable, Mansion, MansionBuilder, Side, DEFAULT_MAX_SUSPECTS};
use crate::GameError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A room as written in a fixture, children referenced by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSpec {
    pub name: String,
    #[serde(default)]
    pub clue: Option<String>,
    #[serde(default)]
    pub left: Option<String>,
    #[serde(default)]
    pub right: Option<String>,
}

/// A clue and the suspect it points to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationSpec {
    pub clue: String,
    pub suspect: String,
}

/// Everything the game needs before the first room is entered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    /// Name of the entrance room
    pub root: String,

    /// Most distinct suspects the tally will track
    #[serde(default = "default_max_suspects")]
    pub max_suspects: usize,

    #[serde(default, rename = "room")]
    pub rooms: Vec<RoomSpec>,

    #[serde(default, rename = "association")]
    pub associations: Vec<AssociationSpec>,
}

fn default_max_suspects() -> usize {
    DEFAULT_MAX_SUSPECTS
}

impl Fixture {
    /// The seven-room manor the game ships with
    pub fn manor() -> Self {
        let room = |name: &str, clue: &str, left: Option<&str>, right: Option<&str>| RoomSpec {
            name: name.to_string(),
            clue: Some(clue.to_string()),
            left: left.map(str::to_string),
            right: right.map(str::to_string),
        };
        let link = |clue: &str, suspect: &str| AssociationSpec {
            clue: clue.to_string(),
            suspect: suspect.to_string(),
        };

        Self {
            root: "Entrance Hall".to_string(),
            max_suspects: DEFAULT_MAX_SUSPECTS,
            rooms: vec![
                room("Entrance Hall", "Muddy footprints", Some("Living Room"), Some("Kitchen")),
                room("Living Room", "Torn photo", Some("Library"), Some("Garden")),
                room("Kitchen", "Broken glass", Some("Wine Cellar"), Some("Office")),
                room("Library", "Book ripped from the shelf", None, None),
                room("Garden", "Burnt match", None, None),
                room("Wine Cellar", "Strong perfume", None, None),
                room("Office", "Crumpled note", None, None),
            ],
            associations: vec![
                link("Muddy footprints", "Mr Green"),
                link("Torn photo", "Ms Blue"),
                link("Broken glass", "Mr Red"),
                link("Book ripped from the shelf", "Ms Blue"),
                link("Burnt match", "Mr Green"),
                link("Strong perfume", "Ms Yellow"),
                link("Crumpled note", "Mr Red"),
            ],
        }
    }

    pub fn from_toml_str(source: &str) -> Result<Self, GameError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, GameError> {
        let source = std::fs::read_to_string(path).map_err(|source| GameError::FixtureIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Build the immutable room tree described by this fixture
    pub fn build_mansion(&self) -> Result<Mansion, GameError> {
        let mut builder = MansionBuilder::new();
        for spec in &self.rooms {
            builder.add_room(&spec.name, spec.clue.as_deref())?;
        }

        for spec in &self.rooms {
            let parent = builder.id_of(&spec.name)?;
            for (side, child) in [(Side::Left, &spec.left), (Side::Right, &spec.right)] {
                if let Some(child) = child {
                    let child = builder.id_of(child)?;
                    builder.connect(parent, side, child)?;
                }
            }
        }

        if self.rooms.is_empty() {
            return Err(GameError::EmptyMansion);
        }
        let root = builder.id_of(&self.root)?;
        builder.build(root)
    }

    /// Association table filled in fixture order, later entries winning
    pub fn build_associations(&self) -> AssociationTable {
        self.associations
            .iter()
            .map(|a| (a.clue.as_str(), a.suspect.as_str()))
            .collect()
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::manor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manor_layout() {
        let fixture = Fixture::manor();
        let mansion = fixture.build_mansion().unwrap();
        assert_eq!(mansion.len(), 7);

        let hall = mansion.room(mansion.root());
        assert_eq!(hall.name(), "Entrance Hall");
        let living = mansion.room(hall.left().unwrap());
        assert_eq!(living.name(), "Living Room");
        let library = mansion.room(living.left().unwrap());
        assert_eq!(library.name(), "Library");
        assert!(library.is_leaf());

        let kitchen = mansion.room(hall.right().unwrap());
        let office = mansion.room(kitchen.right().unwrap());
        assert_eq!(office.clue(), Some("Crumpled note"));
    }

    #[test]
    fn test_manor_associations() {
        let table = Fixture::manor().build_associations();
        assert_eq!(table.len(), 7);
        assert_eq!(table.lookup("Strong perfume"), Some("Ms Yellow"));
        assert_eq!(table.lookup("Crumpled note"), Some("Mr Red"));
    }

    #[test]
    fn test_parse_toml() {
        let fixture = Fixture::from_toml_str(
            r#"
            root = "Hall"

            [[room]]
            name = "Hall"
            clue = "Muddy footprints"
            right = "Study"

            [[room]]
            name = "Study"

            [[association]]
            clue = "Muddy footprints"
            suspect = "Mr Green"

            [[association]]
            clue = "Muddy footprints"
            suspect = "Mr Plum"
            "#,
        )
        .unwrap();

        assert_eq!(fixture.max_suspects, DEFAULT_MAX_SUSPECTS);
        let mansion = fixture.build_mansion().unwrap();
        let study = mansion.room(mansion.root()).right().unwrap();
        assert_eq!(mansion.room(study).name(), "Study");
        assert_eq!(fixture.build_associations().lookup("Muddy footprints"), Some("Mr Plum"));
    }

    #[test]
    fn test_unknown_child_rejected() {
        let fixture = Fixture::from_toml_str(
            r#"
            root = "Hall"

            [[room]]
            name = "Hall"
            left = "Ballroom"
            "#,
        )
        .unwrap();
        assert!(matches!(
            fixture.build_mansion(),
            Err(GameError::UnknownRoom(name)) if name == "Ballroom"
        ));
    }

    #[test]
    fn test_unknown_root_rejected() {
        let mut fixture = Fixture::manor();
        fixture.root = "Attic".to_string();
        assert!(matches!(fixture.build_mansion(), Err(GameError::UnknownRoom(_))));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            Fixture::from_toml_str("root = "),
            Err(GameError::FixtureParse(_))
        ));
    }
}
