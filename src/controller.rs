use super::model::*;
use super::view::*;

use std::path::Path;

use termion::event::Key;
use tracing::{debug, error};

const EDITOR_HINTS: &str = "^S save  ^Z undo  ^R refresh text  <-/-> slides  ^Q quit";
const SLIDE_HINTS: &str = "<-/-> slides  Home/End first/last  ^Q quit";

pub struct Controller {
    pub model: Model,
    pub view: View,
}

impl Controller {
    pub fn new(model: Model, mut view: View) -> Controller {
        if model.page.has_editor() {
            view.status_view.set_head(EDITOR_HINTS);
        } else {
            view.status_view.set_head(SLIDE_HINTS);
        }

        Controller { model, view }
    }

    pub fn open(&mut self, slides_dir: &Path) {
        self.model.open(slides_dir);

        if let Err(ref e) = self.model.deck {
            self.view.status_view.set_warning(&e.to_string());
        }
    }

    // Memento demo

    pub fn save(&mut self) {
        let timestamp = self.model.session.save(self.view.editor_view.text());
        self.view.status_view.set_body(&format!("Saved state from {}", timestamp));
    }

    pub fn undo(&mut self) {
        match self.model.session.undo() {
            Ok(memento) => {
                self.resync_editor();
                let msg = format!("Restored state from {}", memento.timestamp());
                self.view.status_view.set_body(&msg);
            }
            Err(e) => self.view.status_view.set_warning(&e.to_string()),
        }
    }

    pub fn refresh(&mut self) {
        self.model.session.refresh(self.view.editor_view.text());
        self.view.status_view.set_body("Text updated");
    }

    fn resync_editor(&mut self) {
        let session = &self.model.session;
        self.view.editor_view.resync(session.document().content(), session.editor_key());
    }

    // Views

    pub fn resize_view(&mut self, size: (u16, u16)) {
        self.view.set_area(DrawArea {
            origin: (1, 1),
            dimens: size,
        });
    }

    pub fn update_view(&mut self) {
        if let Err(e) = self.view.draw(&self.model) {
            // Nothing sensible to show on a broken terminal, keep going.
            error!(error = %e, "drawing failed");
        }
    }

    // Transitions

    pub fn transition(&mut self, key: Key) -> bool {
        use termion::event::Key::{
            Alt, Backspace, Char, Ctrl, Down, End, Esc, Home, Left, PageDown, PageUp, Right, Up,
        };

        // tmux delivers Esc as Alt-Esc
        let key = if key == Alt('\u{1b}') { Esc } else { key };

        debug!(?key, "key pressed");

        match key {
            Ctrl('q') | Esc => return false,
            Left | PageUp | Up => self.model.prev_slide(),
            Right | PageDown | Down => self.model.next_slide(),
            Home => self.model.first_slide(),
            End => self.model.last_slide(),
            _ if !self.model.page.has_editor() => {}
            Ctrl('s') => self.save(),
            Ctrl('z') => self.undo(),
            Ctrl('r') => self.refresh(),
            Backspace => self.view.editor_view.backspace(),
            Char(c) if c == '\n' || !c.is_control() => self.view.editor_view.push(c),
            _ => {}
        }

        true
    }
}
