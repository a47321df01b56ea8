// src/progress.rs
/// Lightweight progress reporting for the long-running scan and fetch
/// phases. Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start of a phase with the number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (an entry id was handled).
    fn item_done(&mut self, _entry_id: u32) {}

    /// Called at the end of a phase, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints progress lines to stdout; counts completions against the
/// phase total when one was announced.
pub struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self { total: 0, done: 0 }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, entry_id: u32) {
        self.done += 1;
        if self.total > 0 {
            println!("  [{}/{}] entry {entry_id}", self.done, self.total);
        }
    }

    fn finish(&mut self) {
        self.total = 0;
    }
}
