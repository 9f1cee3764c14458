use crate::{document::Memento, utils::preview};

/// The caretaker: a stack of mementos in save order.
///
/// Mementos are stored and handed back, never inspected beyond building
/// previews.
#[derive(Debug, Default)]
pub struct History {
    done: Vec<Memento>,
}

impl History {
    pub fn new() -> History {
        History { done: Vec::new() }
    }

    pub fn push(&mut self, memento: Memento) {
        self.done.push(memento);
    }

    /// Last pushed memento, or `None` if there is nothing to restore.
    pub fn pop(&mut self) -> Option<Memento> {
        self.done.pop()
    }

    /// `(timestamp, preview)` per memento, oldest first.
    pub fn get_history(&self) -> Vec<(String, String)> {
        self.done
            .iter()
            .map(|memento| (memento.timestamp(), preview(memento.content())))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.done.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::History;
    use crate::document::{Document, Memento};

    use chrono::{Local, TimeZone};
    use quickcheck_macros::quickcheck;

    fn memento(content: &str, second: u32) -> Memento {
        let created = Local.with_ymd_and_hms(2024, 1, 1, 12, 0, second).unwrap();
        Memento::new(content.into(), created)
    }

    #[test]
    fn basic_push_pop() {
        let mut hist = History::new();

        hist.push(memento("a", 0));
        hist.push(memento("b", 1));
        hist.push(memento("c", 2));

        assert_eq!(hist.pop().map(|m| m.content().to_owned()), Some("c".into()));
        assert_eq!(hist.pop().map(|m| m.content().to_owned()), Some("b".into()));
        hist.push(memento("d", 3));
        assert_eq!(hist.pop().map(|m| m.content().to_owned()), Some("d".into()));
        assert_eq!(hist.pop().map(|m| m.content().to_owned()), Some("a".into()));
        assert_eq!(hist.pop(), None);
        assert_eq!(hist.pop(), None);
        assert!(hist.is_empty());
    }

    #[test]
    fn listing_is_in_push_order() {
        let mut hist = History::new();
        hist.push(memento("first", 0));
        hist.push(memento("second", 1));

        assert_eq!(
            hist.get_history(),
            vec![
                ("2024-01-01 12:00:00".to_owned(), "first".to_owned()),
                ("2024-01-01 12:00:01".to_owned(), "second".to_owned()),
            ]
        );
        assert_eq!(hist.len(), 2);
    }

    #[test]
    fn listing_truncates_long_content() {
        let exact = "x".repeat(30);
        let long = format!("{}y", exact);

        let mut hist = History::new();
        hist.push(memento(&exact, 0));
        hist.push(memento(&long, 1));

        let previews: Vec<String> = hist.get_history().into_iter().map(|(_, p)| p).collect();
        assert_eq!(previews, vec![exact.clone(), format!("{}...", exact)]);
    }

    #[test]
    fn hello_world_scenario() {
        let mut doc = Document::new();
        let mut hist = History::new();

        doc.write("Hello");
        hist.push(doc.save());
        doc.write(" World");
        hist.push(doc.save());

        let m2 = hist.pop().unwrap();
        doc.restore(&m2);
        assert_eq!(doc.content(), "Hello World");

        let m1 = hist.pop().unwrap();
        doc.restore(&m1);
        assert_eq!(doc.content(), "Hello");

        assert!(hist.pop().is_none());
        assert_eq!(doc.content(), "Hello");
    }

    #[quickcheck]
    fn saves_then_undos_return_to_first(contents: Vec<String>) -> bool {
        if contents.is_empty() {
            return true;
        }

        let mut doc = Document::new();
        let mut hist = History::new();

        for content in &contents {
            doc.set_content(content);
            hist.push(doc.save());
        }

        while let Some(memento) = hist.pop() {
            doc.restore(&memento);
        }

        doc.content() == contents[0].as_str()
    }

    #[quickcheck]
    fn listing_length_tracks_pushes_and_pops(operations: Vec<bool>) -> bool {
        let mut hist = History::new();
        let mut expected = 0usize;

        for push in operations {
            if push {
                hist.push(memento("entry", 0));
                expected += 1;
            } else if hist.pop().is_some() {
                expected -= 1;
            }

            if hist.get_history().len() != expected {
                return false;
            }
        }

        true
    }
}
