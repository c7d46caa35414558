use crate::models::{Comic, Target};

/// What the screen currently shows, plus the newest comic number seen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReaderState {
    current: Option<Comic>,
    latest_known: Option<u32>,
}

impl ReaderState {
    pub fn current(&self) -> Option<&Comic> {
        self.current.as_ref()
    }

    pub fn latest_known(&self) -> Option<u32> {
        self.latest_known
    }

    /// Replaces the displayed comic wholesale. Only a `Latest` fetch moves
    /// the upper bound used for random picks.
    pub fn apply(&mut self, target: Target, comic: Comic) {
        if target == Target::Latest {
            self.latest_known = Some(comic.number);
        }
        self.current = Some(comic);
    }

    pub fn is_current(&self, number: u32) -> bool {
        self.current.as_ref().map(|c| c.number) == Some(number)
    }
}
