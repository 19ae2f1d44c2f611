//! Cumulative tallies and the recent-match log, kept in a [`KvStore`].

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::board::Mark;
use crate::error::Result;
use crate::rules::Outcome;
use crate::store::KvStore;

pub const SCORES_KEY: &str = "t3_scores_v2";
pub const HISTORY_KEY: &str = "t3_history_v2";
/// Entries kept in the persisted log.
pub const HISTORY_CAP: usize = 100;
/// Entries a front-end shows at once.
pub const HISTORY_VIEW: usize = 20;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    #[serde(rename = "X")]
    pub x: u32,
    #[serde(rename = "O")]
    pub o: u32,
    #[serde(rename = "D")]
    pub draws: u32,
}

impl Tally {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Win { mark: Mark::X, .. } => self.x = self.x.saturating_add(1),
            Outcome::Win { mark: Mark::O, .. } => self.o = self.o.saturating_add(1),
            Outcome::Draw => self.draws = self.draws.saturating_add(1),
            Outcome::Ongoing => {}
        }
    }

    pub fn total(&self) -> u32 { self.x.saturating_add(self.o).saturating_add(self.draws) }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub text: String,
    pub time: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn for_outcome(outcome: &Outcome, time: DateTime<Utc>) -> Option<Self> {
        let text = match outcome {
            Outcome::Win { mark, .. } => format!("Player {} wins", mark),
            Outcome::Draw => "Draw".to_string(),
            Outcome::Ongoing => return None,
        };
        Some(Self { text, time })
    }
}

/// Most-recent-first, capped at [`HISTORY_CAP`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAP);
    }

    pub fn recent(&self, n: usize) -> &[HistoryEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn entries(&self) -> &[HistoryEntry] { &self.entries }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    // Entries that no longer decode are dropped rather than failing the load.
    fn decode(raw: &str) -> Result<Self> {
        let values: Vec<serde_json::Value> = serde_json::from_str(raw)?;
        let mut entries = Vec::with_capacity(values.len());
        for v in values {
            match serde_json::from_value::<HistoryEntry>(v) {
                Ok(e) => entries.push(e),
                Err(err) => warn!("dropping unreadable history entry: {}", err),
            }
        }
        entries.truncate(HISTORY_CAP);
        Ok(Self { entries })
    }
}

/// Tally and history bound to the store they persist in.
pub struct ScoreBook<S: KvStore> {
    store: S,
    tally: Tally,
    history: History,
}

impl<S: KvStore> ScoreBook<S> {
    pub fn load(store: S) -> Result<Self> {
        let tally = match store.get(SCORES_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Tally::default(),
        };
        let history = match store.get(HISTORY_KEY)? {
            Some(raw) => History::decode(&raw)?,
            None => History::default(),
        };
        Ok(Self { store, tally, history })
    }

    pub fn tally(&self) -> Tally { self.tally }
    pub fn history(&self) -> &History { &self.history }
    pub fn store(&self) -> &S { &self.store }
    pub fn into_store(self) -> S { self.store }

    /// Count a finished game and log it. Ongoing outcomes are ignored.
    ///
    /// Nothing changes in memory unless both keys were written; a failed
    /// call can be retried without counting the game twice.
    pub fn record_result(&mut self, outcome: &Outcome, time: DateTime<Utc>) -> Result<()> {
        let Some(entry) = HistoryEntry::for_outcome(outcome, time) else {
            return Ok(());
        };
        let mut tally = self.tally;
        tally.record(outcome);
        let mut history = self.history.clone();
        history.push(entry);

        let tally_raw = serde_json::to_string(&tally)?;
        let history_raw = serde_json::to_string(&history.entries)?;
        self.store.set(SCORES_KEY, &tally_raw)?;
        if let Err(err) = self.store.set(HISTORY_KEY, &history_raw) {
            let previous = serde_json::to_string(&self.tally)?;
            if let Err(undo) = self.store.set(SCORES_KEY, &previous) {
                warn!("could not restore stored tally: {}", undo);
            }
            return Err(err);
        }

        self.tally = tally;
        self.history = history;
        info!("scores X={} O={} D={}", self.tally.x, self.tally.o, self.tally.draws);
        Ok(())
    }

    pub fn reset_scores(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&Tally::default())?;
        self.store.set(SCORES_KEY, &raw)?;
        self.tally = Tally::default();
        Ok(())
    }

    pub fn clear_history(&mut self) -> Result<()> {
        self.store.remove(HISTORY_KEY)?;
        self.history = History::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn tally_uses_single_letter_keys() {
        let t = Tally { x: 2, o: 1, draws: 3 };
        assert_eq!(serde_json::to_string(&t).unwrap(), r#"{"X":2,"O":1,"D":3}"#);
    }

    #[test]
    fn tally_saturates_instead_of_overflowing() {
        let mut t: Tally = serde_json::from_str(r#"{"X":4294967295,"O":0,"D":0}"#).unwrap();
        t.record(&Outcome::Win { mark: Mark::X, line: [0, 1, 2] });
        assert_eq!(t.x, u32::MAX);
        assert_eq!(t.total(), u32::MAX);
    }

    #[test]
    fn history_is_capped_and_newest_first() {
        let mut h = History::default();
        let t0 = Utc::now();
        for i in 0..(HISTORY_CAP + 5) {
            h.push(HistoryEntry { text: format!("g{i}"), time: t0 });
        }
        assert_eq!(h.len(), HISTORY_CAP);
        assert_eq!(h.recent(1)[0].text, format!("g{}", HISTORY_CAP + 4));
        assert_eq!(h.recent(HISTORY_VIEW).len(), HISTORY_VIEW);
    }

    #[test]
    fn bad_history_entries_are_dropped() {
        let mut store = MemoryStore::new();
        store
            .set(HISTORY_KEY, r#"[{"text":"Draw","time":"2024-01-01T00:00:00Z"},{"bogus":1}]"#)
            .unwrap();
        let book = ScoreBook::load(store).unwrap();
        assert_eq!(book.history().len(), 1);
        assert_eq!(book.history().entries()[0].text, "Draw");
    }
}
