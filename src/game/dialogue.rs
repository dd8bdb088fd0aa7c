//! Scripted dialogue with a typewriter reveal.
//!
//! A [`DialogueSession`] exists only while the dialogue box is open. It walks
//! an NPC's lines in order, revealing each one character by character; the
//! reveal timer lives inside the session, so dropping the session cancels it.

use crate::entity::NpcId;

/// Shown when an NPC has no script.
pub const FALLBACK_LINE: &str = "Hello!";

/// What a `confirm` press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirm {
    /// The current line was still typing and is now fully shown.
    Skipped,
    /// Moved on to the line at this index, which starts typing.
    Advanced(usize),
    /// The last line was confirmed; the session is over.
    Finished,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DialogueSession {
    npc: NpcId,
    lines: Vec<String>,
    line_index: usize,
    revealed_chars: usize,
    reveal_timer: f32,
}

impl DialogueSession {
    /// Start at line 0 with nothing revealed.
    pub fn open(npc: NpcId, script: &[String]) -> Self {
        let lines = if script.is_empty() {
            vec![FALLBACK_LINE.to_owned()]
        } else {
            script.to_vec()
        };
        Self {
            npc,
            lines,
            line_index: 0,
            revealed_chars: 0,
            reveal_timer: 0.0,
        }
    }

    pub fn npc(&self) -> NpcId {
        self.npc
    }

    pub fn line_index(&self) -> usize {
        self.line_index
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_last_line(&self) -> bool {
        self.line_index + 1 >= self.lines.len()
    }

    pub fn current_line(&self) -> &str {
        self.lines.get(self.line_index).map_or("", String::as_str)
    }

    fn current_len(&self) -> usize {
        self.current_line().chars().count()
    }

    pub fn revealed_chars(&self) -> usize {
        self.revealed_chars
    }

    pub fn is_revealing(&self) -> bool {
        self.revealed_chars < self.current_len()
    }

    /// The revealed prefix of the current line.
    pub fn visible_text(&self) -> &str {
        let line = self.current_line();
        match line.char_indices().nth(self.revealed_chars) {
            Some((end, _)) => line.get(..end).unwrap_or(line),
            None => line,
        }
    }

    /// Reveal one character per `secs_per_char` of elapsed time.
    /// Returns whether anything new became visible.
    pub fn tick(&mut self, dt: f32, secs_per_char: f32) -> bool {
        if !self.is_revealing() {
            return false;
        }
        if secs_per_char <= 0.0 {
            self.reveal_all();
            return true;
        }
        self.reveal_timer += dt;
        let due = (self.reveal_timer / secs_per_char).floor();
        if due < 1.0 {
            return false;
        }
        self.reveal_timer -= due * secs_per_char;
        let due = due as usize;
        self.revealed_chars = self.revealed_chars.saturating_add(due).min(self.current_len());
        if !self.is_revealing() {
            self.reveal_timer = 0.0;
        }
        true
    }

    pub fn reveal_all(&mut self) {
        self.revealed_chars = self.current_len();
        self.reveal_timer = 0.0;
    }

    /// Skip the typing if it is running, otherwise go to the next line.
    pub fn confirm(&mut self) -> Confirm {
        if self.is_revealing() {
            self.reveal_all();
            return Confirm::Skipped;
        }
        if self.is_last_line() {
            return Confirm::Finished;
        }
        self.line_index += 1;
        self.revealed_chars = 0;
        self.reveal_timer = 0.0;
        Confirm::Advanced(self.line_index)
    }
}
