// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Session orchestration for the interactive loop.
//!
//! The session owns the queue and the factory and exposes the menu
//! actions as an explicit state machine, so the loop is testable
//! without a console attached.

use tracing::{debug, info};

use super::factory::PieceFactory;
use super::piece::Piece;
use super::queue::{PieceQueue, QueueError};

/// Player action, normalized from raw menu input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Remove the front piece (menu code 1)
    Play,
    /// Generate and append a new piece (menu code 2)
    Insert,
    /// End the session (menu code 0)
    Quit,
    /// Anything unparseable or out of range
    Invalid,
}

impl MenuChoice {
    /// Normalize one line of raw menu input
    ///
    /// Non-numeric or out-of-range input maps to [`MenuChoice::Invalid`],
    /// never to an error.
    pub fn from_input(input: &str) -> Self {
        match input.trim().parse::<i32>() {
            Ok(1) => MenuChoice::Play,
            Ok(2) => MenuChoice::Insert,
            Ok(0) => MenuChoice::Quit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// Interactive loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepting menu actions
    Running,
    /// Ended via quit; no further operations are permitted
    Terminated,
}

/// End-of-session statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    /// Total pieces created by the factory, including the initial fill
    pub total_pieces_generated: u64,
    /// Pieces still waiting in the queue
    pub remaining_in_queue: usize,
}

/// Result of applying one menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// A piece was removed from the front of the queue
    Played(Piece),
    /// A freshly created piece was appended to the queue
    Inserted(Piece),
    /// The action could not be applied; the queue is unchanged
    Rejected(QueueError),
    /// The session ended; final statistics
    Ended(SessionStats),
    /// Unrecognized menu choice; nothing changed
    InvalidChoice,
}

/// Orchestrates the piece factory and queue for one play session
pub struct Session {
    queue: PieceQueue,
    factory: PieceFactory,
    state: SessionState,
}

impl Session {
    /// Create a session with an empty queue of the given capacity
    pub fn new(capacity: usize, factory: PieceFactory) -> Self {
        Self {
            queue: PieceQueue::new(capacity),
            factory,
            state: SessionState::Running,
        }
    }

    /// Fill the queue to capacity, returning the pieces in creation order
    ///
    /// From an empty queue this creates exactly `capacity` pieces; on a
    /// partially filled queue it tops it off.
    pub fn fill_initial(&mut self) -> Vec<Piece> {
        let mut created = Vec::with_capacity(self.queue.capacity());
        while let Ok(piece) = self.insert_piece() {
            created.push(piece);
        }
        info!(count = created.len(), "initial queue filled");
        created
    }

    /// Remove and return the next piece to play
    pub fn play_piece(&mut self) -> Result<Piece, QueueError> {
        self.queue.dequeue()
    }

    /// Create one piece and append it to the queue
    ///
    /// The fullness check runs before the factory is invoked, so a
    /// rejected insert consumes no piece id.
    pub fn insert_piece(&mut self) -> Result<Piece, QueueError> {
        if self.queue.is_full() {
            return Err(QueueError::QueueFull);
        }
        let piece = self.factory.create_piece();
        self.queue.enqueue(piece)?;
        Ok(piece)
    }

    /// Current session statistics
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            total_pieces_generated: self.factory.pieces_created(),
            remaining_in_queue: self.queue.len(),
        }
    }

    /// The queue, for display
    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    /// Current loop state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Check if the session is still accepting actions
    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Apply one normalized menu choice and report the outcome
    ///
    /// A terminated session ignores all further choices.
    pub fn apply(&mut self, choice: MenuChoice) -> ActionOutcome {
        if self.state == SessionState::Terminated {
            return ActionOutcome::InvalidChoice;
        }

        match choice {
            MenuChoice::Play => match self.play_piece() {
                Ok(piece) => ActionOutcome::Played(piece),
                Err(err) => ActionOutcome::Rejected(err),
            },
            MenuChoice::Insert => match self.insert_piece() {
                Ok(piece) => ActionOutcome::Inserted(piece),
                Err(err) => ActionOutcome::Rejected(err),
            },
            MenuChoice::Quit => {
                self.state = SessionState::Terminated;
                let stats = self.stats();
                info!(
                    generated = stats.total_pieces_generated,
                    remaining = stats.remaining_in_queue,
                    "session ended"
                );
                ActionOutcome::Ended(stats)
            }
            MenuChoice::Invalid => {
                debug!("invalid menu choice ignored");
                ActionOutcome::InvalidChoice
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(capacity: usize) -> Session {
        Session::new(capacity, PieceFactory::with_seed(0))
    }

    #[test]
    fn test_menu_choice_normalization() {
        assert_eq!(MenuChoice::from_input("1"), MenuChoice::Play);
        assert_eq!(MenuChoice::from_input("2"), MenuChoice::Insert);
        assert_eq!(MenuChoice::from_input("0"), MenuChoice::Quit);
        assert_eq!(MenuChoice::from_input(" 1 \n"), MenuChoice::Play);

        assert_eq!(MenuChoice::from_input("3"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::from_input("-1"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::from_input("play"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::from_input(""), MenuChoice::Invalid);
        assert_eq!(MenuChoice::from_input("1 2"), MenuChoice::Invalid);
    }

    #[test]
    fn test_fill_initial_creates_capacity_pieces() {
        let mut session = session(5);
        let created = session.fill_initial();

        let ids: Vec<u64> = created.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
        assert!(session.queue().is_full());
        assert_eq!(session.stats().total_pieces_generated, 5);
    }

    #[test]
    fn test_fill_initial_tops_off_partial_queue() {
        let mut session = session(4);
        session.insert_piece().unwrap();

        let created = session.fill_initial();
        assert_eq!(created.len(), 3);
        assert!(session.queue().is_full());
    }

    #[test]
    fn test_play_returns_front_piece() {
        let mut session = session(5);
        session.fill_initial();

        let played = session.play_piece().unwrap();
        assert_eq!(played.id, 0);

        let ids: Vec<u64> = session.queue().snapshot().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_play_on_empty_session() {
        let mut session = session(5);
        assert_eq!(session.play_piece(), Err(QueueError::QueueEmpty));
        assert_eq!(session.stats().total_pieces_generated, 0);
    }

    #[test]
    fn test_rejected_insert_consumes_no_id() {
        let mut session = session(5);
        session.fill_initial();
        assert_eq!(session.stats().total_pieces_generated, 5);

        assert_eq!(session.insert_piece(), Err(QueueError::QueueFull));
        assert_eq!(session.stats().total_pieces_generated, 5);

        session.play_piece().unwrap();
        let inserted = session.insert_piece().unwrap();
        assert_eq!(inserted.id, 5);
        assert_eq!(session.stats().total_pieces_generated, 6);
    }

    #[test]
    fn test_apply_play_and_insert_keep_running() {
        let mut session = session(5);
        session.fill_initial();

        match session.apply(MenuChoice::Play) {
            ActionOutcome::Played(piece) => assert_eq!(piece.id, 0),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(session.is_running());

        match session.apply(MenuChoice::Insert) {
            ActionOutcome::Inserted(piece) => assert_eq!(piece.id, 5),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(session.is_running());
    }

    #[test]
    fn test_apply_rejections_keep_running() {
        let mut session = session(2);

        assert_eq!(
            session.apply(MenuChoice::Play),
            ActionOutcome::Rejected(QueueError::QueueEmpty)
        );
        assert!(session.is_running());

        session.fill_initial();
        assert_eq!(
            session.apply(MenuChoice::Insert),
            ActionOutcome::Rejected(QueueError::QueueFull)
        );
        assert!(session.is_running());
    }

    #[test]
    fn test_apply_invalid_keeps_state() {
        let mut session = session(3);
        session.fill_initial();
        let before = session.queue().snapshot();

        assert_eq!(session.apply(MenuChoice::Invalid), ActionOutcome::InvalidChoice);
        assert!(session.is_running());
        assert_eq!(session.queue().snapshot(), before);
    }

    #[test]
    fn test_quit_terminates_and_reports_stats() {
        let mut session = session(5);
        session.fill_initial();
        session.apply(MenuChoice::Play);

        match session.apply(MenuChoice::Quit) {
            ActionOutcome::Ended(stats) => {
                assert_eq!(stats.total_pieces_generated, 5);
                assert_eq!(stats.remaining_in_queue, 4);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(session.state(), SessionState::Terminated);
        assert!(!session.is_running());
    }

    #[test]
    fn test_terminated_session_absorbs_all_choices() {
        let mut session = session(3);
        session.fill_initial();
        session.apply(MenuChoice::Quit);

        for choice in [MenuChoice::Play, MenuChoice::Insert, MenuChoice::Quit] {
            assert_eq!(session.apply(choice), ActionOutcome::InvalidChoice);
            assert_eq!(session.state(), SessionState::Terminated);
        }
        // Queue untouched after termination
        assert_eq!(session.queue().len(), 3);
    }
}
