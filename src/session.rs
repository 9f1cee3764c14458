use crate::{
    document::{Document, Memento},
    history::History,
    Error,
};

use tracing::{debug, info, warn};

/// One user's document and its history, kept for the lifetime of the app.
///
/// The editor key changes every time a memento is restored. Editing surfaces
/// compare it with the key they last synchronized at and reload the document
/// content when it differs.
#[derive(Debug, Default)]
pub struct Session {
    document: Document,
    history: History,
    editor_key: usize,
}

impl Session {
    pub fn new() -> Session {
        Session {
            document: Document::new(),
            history: History::new(),
            editor_key: 0,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn editor_key(&self) -> usize {
        self.editor_key
    }

    /// Takes over the editor's text, snapshots it and returns the snapshot's
    /// timestamp.
    pub fn save(&mut self, editor_text: &str) -> String {
        self.document.set_content(editor_text);

        let memento = self.document.save();
        let timestamp = memento.timestamp();
        self.history.push(memento);

        info!(%timestamp, depth = self.history.len(), "saved state");
        timestamp
    }

    /// Restores the most recent snapshot. On an empty history the document is
    /// left as it is.
    pub fn undo(&mut self) -> Result<Memento, Error> {
        match self.history.pop() {
            Some(memento) => {
                self.document.restore(&memento);
                self.editor_key += 1;

                info!(
                    timestamp = %memento.timestamp(),
                    depth = self.history.len(),
                    "restored state"
                );
                Ok(memento)
            }
            None => {
                warn!("undo requested with empty history");
                Err(Error::EmptyHistory)
            }
        }
    }

    pub fn refresh(&mut self, editor_text: &str) {
        debug!(len = editor_text.len(), "refreshed document from editor");
        self.document.set_content(editor_text);
    }

    /// History listing, most recent first.
    pub fn recent_first(&self) -> Vec<(String, String)> {
        let mut entries = self.history.get_history();
        entries.reverse();
        entries
    }
}
