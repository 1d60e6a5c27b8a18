// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Console presentation for the piece queue.
//!
//! Renders the banner, queue state, action menu, and status screens,
//! and reads the player's menu choice. Generic over the input and
//! output streams so the screens are testable against buffers.

use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};

use crate::game::{MenuChoice, Piece, PieceQueue, QueueError, SessionStats};

const RULE: &str = "====================================================";

/// Console front end for the interactive loop
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Create a console attached to stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over arbitrary streams
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Clear the screen and move the cursor home
    pub fn clear_screen(&mut self) -> io::Result<()> {
        execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))
    }

    /// Print the program banner
    pub fn banner(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "           PIECEQ - UPCOMING PIECE QUEUE")?;
        writeln!(self.output, "{}", RULE)
    }

    /// Print the welcome notice shown before the initial fill
    pub fn show_welcome(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "[*] Welcome! Preparing the game...")
    }

    /// Print the pieces created by the initial fill, in creation order
    pub fn show_initial_fill(&mut self, pieces: &[Piece]) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "[*] Generating the initial piece queue...")?;
        writeln!(self.output)?;
        for piece in pieces {
            writeln!(self.output, "    Created: {}", piece)?;
        }
        writeln!(self.output)?;
        writeln!(self.output, "{}", "[+] Initial queue ready!".green())
    }

    /// Print the current queue state, front first
    pub fn show_queue(&mut self, queue: &PieceQueue) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- PIECE QUEUE ---")?;
        writeln!(self.output)?;

        if queue.is_empty() {
            writeln!(self.output, "{}", "[!] The queue is empty!".yellow())?;
            writeln!(self.output, "    Insert new pieces to keep playing.")?;
            return Ok(());
        }

        writeln!(
            self.output,
            "Queue state ({}/{} pieces):",
            queue.len(),
            queue.capacity()
        )?;
        writeln!(self.output)?;

        let row = queue
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let last_width = queue.iter().last().map(|p| p.to_string().len()).unwrap_or(0);
        writeln!(self.output, "  {}", row)?;
        writeln!(self.output, "  {}", queue_markers(&row, last_width))
    }

    /// Print the action menu
    pub fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "                     ACTIONS")?;
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "  [1] Play piece (remove from the front)")?;
        writeln!(self.output, "  [2] Insert new piece (append at the back)")?;
        writeln!(self.output, "  [0] Quit")?;
        writeln!(self.output, "{}", RULE)
    }

    /// Prompt for and read one menu choice
    ///
    /// Input is consumed a full line at a time and normalized; end of
    /// input is treated as quitting so a closed stream ends the loop.
    pub fn read_choice(&mut self) -> io::Result<MenuChoice> {
        write!(self.output, "Choose an option: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(MenuChoice::Quit);
        }
        Ok(MenuChoice::from_input(&line))
    }

    /// Wait for the player to press ENTER
    pub fn pause(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        write!(self.output, "Press ENTER to continue...")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }

    /// Print the result of a successful play
    pub fn show_played(&mut self, piece: &Piece) -> io::Result<()> {
        self.section("PLAY PIECE")?;
        writeln!(self.output, "{}", "[+] Piece played!".green())?;
        writeln!(self.output)?;
        writeln!(self.output, "    Kind: [{}]", piece.kind)?;
        writeln!(self.output, "    Id:   {}", piece.id)?;
        writeln!(self.output)?;
        writeln!(self.output, "    The piece went onto the board!")
    }

    /// Print the result of a successful insert
    pub fn show_inserted(&mut self, piece: &Piece) -> io::Result<()> {
        self.section("INSERT NEW PIECE")?;
        writeln!(self.output, "[*] Generating a new piece...")?;
        writeln!(self.output)?;
        writeln!(self.output, "    Kind: [{}]", piece.kind)?;
        writeln!(self.output, "    Id:   {}", piece.id)?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", "[+] Piece added to the back of the queue!".green())
    }

    /// Print a rejected action; the queue was left unchanged
    pub fn show_rejected(&mut self, err: QueueError) -> io::Result<()> {
        match err {
            QueueError::QueueEmpty => {
                self.section("PLAY PIECE")?;
                writeln!(self.output, "{}", "[x] The queue is empty.".red())?;
                writeln!(self.output, "    Insert new pieces before playing.")
            }
            QueueError::QueueFull => {
                self.section("INSERT NEW PIECE")?;
                writeln!(self.output, "{}", "[x] The queue is full.".red())?;
                writeln!(self.output, "    Play some pieces before inserting new ones.")
            }
        }
    }

    /// Print the invalid-choice notice
    pub fn show_invalid_choice(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", "[x] Invalid option! Try again.".red())
    }

    /// Print the goodbye screen with end-of-session statistics
    pub fn show_goodbye(&mut self, stats: &SessionStats) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "  Thanks for playing!")?;
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output)?;
        writeln!(self.output, "  Session statistics:")?;
        writeln!(
            self.output,
            "  - Total pieces generated: {}",
            stats.total_pieces_generated
        )?;
        writeln!(
            self.output,
            "  - Pieces left in queue:   {}",
            stats.remaining_in_queue
        )?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", RULE)
    }

    fn section(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- {} ---", title)?;
        writeln!(self.output)
    }
}

/// Build the marker line pointing at the front and back of the queue row
fn queue_markers(row: &str, last_width: usize) -> String {
    const NEXT: &str = "^next";
    let back_col = row.len().saturating_sub(last_width);
    if back_col <= NEXT.len() {
        // Front and back markers would collide (single piece)
        return NEXT.to_string();
    }
    format!("{}{}^last", NEXT, " ".repeat(back_col - NEXT.len()))
}
