//! Exploration engine
//!
//! Walks the mansion under player direction. Entering a room files its
//! clue, looks up the suspect it points to and counts the encounter in
//! the tally.

use crate::data::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Where a move command leads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    /// Back to the room this one was entered from
    Back,
}

impl Direction {
    /// Single-key shortcut shown in menus
    pub fn key(&self) -> char {
        match self {
            Direction::Left => 'l',
            Direction::Right => 'r',
            Direction::Back => 'b',
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Back => write!(f, "back"),
        }
    }
}

/// Commands accepted while exploring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Go(Direction),
    ExitToVerdict,
}

impl FromStr for Command {
    type Err = RejectedCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "l" | "left" | "go-left" => Ok(Command::Go(Direction::Left)),
            "r" | "right" | "go-right" => Ok(Command::Go(Direction::Right)),
            "b" | "back" | "go-back" => Ok(Command::Go(Direction::Back)),
            "x" | "exit" | "exit-to-verdict" => Ok(Command::ExitToVerdict),
            _ => Err(RejectedCommand::UnknownCommand(s.trim().to_string())),
        }
    }
}

/// A command that leaves the explorer where they were
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectedCommand {
    #[error("Unknown command: {0:?}")]
    UnknownCommand(String),

    #[error("There is no way {0} from here")]
    NoPassage(Direction),

    #[error("The exploration is over")]
    SessionOver,
}

/// What came of the clue in a room just entered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClueFinding {
    NoClue,
    /// The clue is not in the association records
    NoSuspect { clue: String },
    Attributed { clue: String, suspect: String, count: u32 },
    /// The suspect is new and the tally is already full
    NotRecorded { clue: String, suspect: String },
}

/// Report produced every time a room is entered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomEntry {
    pub room: RoomId,
    pub name: String,
    pub finding: ClueFinding,
    /// Whether this was the first time the clue was filed
    pub new_clue: bool,
}

/// Result of a successful command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    Entered(RoomEntry),
    Exited,
}

/// The findings handed over to the verdict once exploring ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseFile {
    pub clues: ClueCollection,
    pub tally: SuspectTally,
    pub rooms_entered: u32,
}

/// One exploration session over one mansion
#[derive(Debug, Clone)]
pub struct Exploration {
    mansion: Mansion,
    associations: AssociationTable,
    clues: ClueCollection,
    tally: SuspectTally,
    current: RoomId,
    rooms_entered: u32,
    finished: bool,
}

impl Exploration {
    /// Start at the entrance. The entrance is entered immediately, so its
    /// report is returned alongside the session.
    pub fn begin(
        mansion: Mansion,
        associations: AssociationTable,
        max_suspects: usize,
    ) -> (Self, RoomEntry) {
        let root = mansion.root();
        let mut exploration = Self {
            mansion,
            associations,
            clues: ClueCollection::new(),
            tally: SuspectTally::with_capacity(max_suspects),
            current: root,
            rooms_entered: 0,
            finished: false,
        };
        let entry = exploration.enter(root);
        (exploration, entry)
    }

    /// Apply one command. Rejected commands change nothing.
    pub fn step(&mut self, command: Command) -> Result<StepOutcome, RejectedCommand> {
        if self.finished {
            return Err(RejectedCommand::SessionOver);
        }

        match command {
            Command::ExitToVerdict => {
                self.finished = true;
                Ok(StepOutcome::Exited)
            }
            Command::Go(direction) => {
                let target = self
                    .destination(direction)
                    .ok_or(RejectedCommand::NoPassage(direction))?;
                Ok(StepOutcome::Entered(self.enter(target)))
            }
        }
    }

    fn destination(&self, direction: Direction) -> Option<RoomId> {
        let room = self.current_room();
        match direction {
            Direction::Left => room.child(Side::Left),
            Direction::Right => room.child(Side::Right),
            Direction::Back => room.parent(),
        }
    }

    fn enter(&mut self, id: RoomId) -> RoomEntry {
        self.current = id;
        self.rooms_entered = self.rooms_entered.saturating_add(1);

        let room = self.mansion.room(id);
        let name = room.name().to_string();

        let Some(clue) = room.clue().map(str::to_string) else {
            return RoomEntry {
                room: id,
                name,
                finding: ClueFinding::NoClue,
                new_clue: false,
            };
        };

        let new_clue = self.clues.insert(&clue);

        // Every entry counts, even when the clue was filed before
        let finding = match self.associations.lookup(&clue) {
            None => ClueFinding::NoSuspect { clue },
            Some(suspect) => {
                let suspect = suspect.to_string();
                match self.tally.record(&suspect) {
                    Some(count) => ClueFinding::Attributed { clue, suspect, count },
                    None => ClueFinding::NotRecorded { clue, suspect },
                }
            }
        };

        RoomEntry {
            room: id,
            name,
            finding,
            new_clue,
        }
    }

    /// Moves open from the current room, with the name of the room each leads to
    pub fn available_moves(&self) -> Vec<(Direction, &str)> {
        [Direction::Left, Direction::Right, Direction::Back]
            .into_iter()
            .filter_map(|d| self.destination(d).map(|id| (d, self.mansion.room(id).name())))
            .collect()
    }

    pub fn current(&self) -> RoomId {
        self.current
    }

    pub fn current_room(&self) -> &Room {
        self.mansion.room(self.current)
    }

    pub fn mansion(&self) -> &Mansion {
        &self.mansion
    }

    pub fn clues(&self) -> &ClueCollection {
        &self.clues
    }

    pub fn tally(&self) -> &SuspectTally {
        &self.tally
    }

    pub fn rooms_entered(&self) -> u32 {
        self.rooms_entered
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Snapshot of everything collected so far
    pub fn case_file(&self) -> CaseFile {
        CaseFile {
            clues: self.clues.clone(),
            tally: self.tally.clone(),
            rooms_entered: self.rooms_entered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manor() -> (Exploration, RoomEntry) {
        let fixture = Fixture::manor();
        Exploration::begin(
            fixture.build_mansion().unwrap(),
            fixture.build_associations(),
            fixture.max_suspects,
        )
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("go-left".parse::<Command>(), Ok(Command::Go(Direction::Left)));
        assert_eq!(" R ".parse::<Command>(), Ok(Command::Go(Direction::Right)));
        assert_eq!("back".parse::<Command>(), Ok(Command::Go(Direction::Back)));
        assert_eq!("exit-to-verdict".parse::<Command>(), Ok(Command::ExitToVerdict));
        assert_eq!(
            "dance".parse::<Command>(),
            Err(RejectedCommand::UnknownCommand("dance".to_string()))
        );
    }

    #[test]
    fn test_entrance_is_processed_on_start() {
        let (exploration, entry) = manor();
        assert_eq!(entry.name, "Entrance Hall");
        assert_eq!(
            entry.finding,
            ClueFinding::Attributed {
                clue: "Muddy footprints".to_string(),
                suspect: "Mr Green".to_string(),
                count: 1,
            }
        );
        assert!(exploration.clues().contains("Muddy footprints"));
        assert_eq!(exploration.rooms_entered(), 1);
    }

    #[test]
    fn test_missing_child_is_rejected() {
        let (mut exploration, _) = manor();
        exploration.step(Command::Go(Direction::Left)).unwrap();
        exploration.step(Command::Go(Direction::Left)).unwrap();
        let library = exploration.current();

        assert_eq!(
            exploration.step(Command::Go(Direction::Left)),
            Err(RejectedCommand::NoPassage(Direction::Left))
        );
        assert_eq!(exploration.current(), library);
        assert_eq!(exploration.rooms_entered(), 3);
    }

    #[test]
    fn test_rooms_entered_saturates() {
        let (mut exploration, _) = manor();
        exploration.rooms_entered = u32::MAX;
        exploration.step(Command::Go(Direction::Left)).unwrap();
        assert_eq!(exploration.rooms_entered(), u32::MAX);
    }

    #[test]
    fn test_back_rejected_at_entrance() {
        let (mut exploration, _) = manor();
        assert_eq!(
            exploration.step(Command::Go(Direction::Back)),
            Err(RejectedCommand::NoPassage(Direction::Back))
        );
    }

    #[test]
    fn test_revisit_counts_again_but_files_once() {
        let (mut exploration, _) = manor();
        exploration.step(Command::Go(Direction::Left)).unwrap();
        let outcome = exploration.step(Command::Go(Direction::Back)).unwrap();

        match outcome {
            StepOutcome::Entered(entry) => {
                assert!(!entry.new_clue);
                assert_eq!(
                    entry.finding,
                    ClueFinding::Attributed {
                        clue: "Muddy footprints".to_string(),
                        suspect: "Mr Green".to_string(),
                        count: 2,
                    }
                );
            }
            StepOutcome::Exited => panic!("expected a room entry"),
        }
        assert_eq!(exploration.clues().len(), 2);
        assert_eq!(exploration.tally().lookup("Mr Green"), Some(2));
    }

    #[test]
    fn test_leaf_does_not_end_session() {
        let (mut exploration, _) = manor();
        exploration.step(Command::Go(Direction::Right)).unwrap();
        exploration.step(Command::Go(Direction::Right)).unwrap();
        assert!(exploration.current_room().is_leaf());
        assert!(!exploration.is_finished());

        let moves = exploration.available_moves();
        assert_eq!(moves, vec![(Direction::Back, "Kitchen")]);
    }

    #[test]
    fn test_exit_closes_session() {
        let (mut exploration, _) = manor();
        assert_eq!(exploration.step(Command::ExitToVerdict), Ok(StepOutcome::Exited));
        assert!(exploration.is_finished());
        assert_eq!(
            exploration.step(Command::Go(Direction::Left)),
            Err(RejectedCommand::SessionOver)
        );
    }

    #[test]
    fn test_unassociated_and_unrecorded_clues() {
        let fixture = Fixture::from_toml_str(
            r#"
            root = "Hall"
            max_suspects = 1

            [[room]]
            name = "Hall"
            clue = "Dusty rug"
            left = "Den"
            right = "Attic"

            [[room]]
            name = "Den"
            clue = "Lipstick mark"

            [[room]]
            name = "Attic"
            clue = "Cigar ash"

            [[association]]
            clue = "Lipstick mark"
            suspect = "Ms Scarlet"

            [[association]]
            clue = "Cigar ash"
            suspect = "Col Mustard"
            "#,
        )
        .unwrap();
        let (mut exploration, entry) = Exploration::begin(
            fixture.build_mansion().unwrap(),
            fixture.build_associations(),
            fixture.max_suspects,
        );
        assert_eq!(
            entry.finding,
            ClueFinding::NoSuspect { clue: "Dusty rug".to_string() }
        );

        exploration.step(Command::Go(Direction::Left)).unwrap();
        exploration.step(Command::Go(Direction::Back)).unwrap();
        let outcome = exploration.step(Command::Go(Direction::Right)).unwrap();
        assert_eq!(
            outcome,
            StepOutcome::Entered(RoomEntry {
                room: exploration.current(),
                name: "Attic".to_string(),
                finding: ClueFinding::NotRecorded {
                    clue: "Cigar ash".to_string(),
                    suspect: "Col Mustard".to_string(),
                },
                new_clue: true,
            })
        );
        assert_eq!(exploration.tally().len(), 1);
        assert_eq!(exploration.clues().len(), 3);
    }
}
