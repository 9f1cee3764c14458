use chrono::{DateTime, Local};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Snapshot of a [`Document`]'s content, taken at a point in time.
///
/// Fields are private and there are no setters, so a memento never changes
/// after [`Document::save`] created it.
#[derive(Debug, Clone, PartialEq)]
pub struct Memento {
    content: String,
    created: DateTime<Local>,
}

impl Memento {
    pub(crate) fn new(content: String, created: DateTime<Local>) -> Memento {
        Memento { content, created }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Creation time as `YYYY-MM-DD HH:MM:SS` (local time).
    pub fn timestamp(&self) -> String {
        self.created.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// The originator: holds the editable text.
#[derive(Debug, Default)]
pub struct Document {
    content: String,
}

impl Document {
    pub fn new() -> Document {
        Document {
            content: String::new(),
        }
    }

    pub fn write(&mut self, text: &str) {
        self.content.push_str(text);
    }

    pub fn save(&self) -> Memento {
        Memento::new(self.content.clone(), Local::now())
    }

    /// Discards unsaved edits in favour of the memento's content.
    pub fn restore(&mut self, memento: &Memento) {
        self.content = memento.content.clone();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: &str) {
        self.content = content.into();
    }
}
