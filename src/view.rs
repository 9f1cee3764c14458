use crate::{
    model::Model,
    session::Session,
    utils::{clip, move_window},
    RawStdout,
};

use std::{cmp::max, io::Result as IoResult};

use termion::{
    clear::{All as ClearAll, CurrentLine as ClearCurrentLine},
    color::{Fg, Red, Reset as ColorReset, Yellow},
    cursor::Goto,
    style::{Bold, Invert, NoInvert, Reset as StyleReset, Underline},
};

pub struct DrawArea {
    pub origin: (u16, u16),
    pub dimens: (u16, u16),
}

impl DrawArea {
    fn empty() -> DrawArea {
        DrawArea {
            origin: (1, 1),
            dimens: (16, 16),
        }
    }
}

/// Numbered history lines, most recent first.
pub fn history_lines(entries: &[(String, String)]) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .map(|(i, (date, preview))| format!("{}. {}: {}", i + 1, date, preview.replace('\n', " ")))
        .collect()
}

pub struct View {
    area: DrawArea,
    stdout: RawStdout,
    with_editor: bool,
    pub slide_view: SlideView,
    pub editor_view: EditorView,
    pub history_view: HistoryView,
    pub status_view: StatusView,
}

impl View {
    pub fn new(stdout: RawStdout, with_editor: bool) -> View {
        View {
            area: DrawArea::empty(),
            stdout: stdout.clone(),
            with_editor,
            slide_view: SlideView::new(stdout.clone()),
            editor_view: EditorView::new(stdout.clone()),
            history_view: HistoryView::new(stdout.clone()),
            status_view: StatusView::new(stdout),
        }
    }

    pub fn draw(&self, model: &Model) -> IoResult<()> {
        // limit scope of stdout here, because the subviews have their own reference.
        {
            let mut stdout = self.stdout.borrow_mut();
            let DrawArea { origin: (x, y), dimens: (w, _) } = self.area;

            write!(stdout, "{}", ClearAll)?;

            let head = format!(
                "{} | theme: {} | transition: {}",
                model.page.title(),
                model.config.theme,
                model.config.transition
            );
            let head = clip(&head, w as usize);
            write!(stdout, "{}{}{}{}", Goto(x, y), Bold, head, StyleReset)?;
        }

        self.slide_view.draw(model)?;

        if self.with_editor {
            self.editor_view.draw()?;
            self.history_view.draw(&model.session)?;
        }

        self.status_view.draw()?;

        Ok(())
    }

    pub fn set_area(&mut self, area: DrawArea) {
        let DrawArea { origin: (x, y), dimens: (w, h) } = area;

        // Set mimimum width/height to avoid overfow
        let (w, h) = (max(w, 40), max(h, 12));

        self.area = DrawArea {
            origin: (x, y),
            dimens: (w, h),
        };

        // header line on top, two status lines at the bottom
        let body = h - 3;
        let slides_height = if self.with_editor { body / 2 } else { body };
        let demo_height = body - slides_height;
        let demo_y = y + 1 + slides_height;

        self.slide_view.set_area(DrawArea {
            origin: (x, y + 1),
            dimens: (w, slides_height),
        });

        self.editor_view.set_area(DrawArea {
            origin: (x, demo_y),
            dimens: (w / 2, demo_height),
        });

        self.history_view.set_area(DrawArea {
            origin: (x + w / 2, demo_y),
            dimens: (w - w / 2, demo_height),
        });

        self.status_view.set_area(DrawArea {
            origin: (x, y + h - 2),
            dimens: (w, 2),
        });
    }
}

pub struct SlideView {
    area: DrawArea,
    stdout: RawStdout,
}

impl SlideView {
    pub fn new(stdout: RawStdout) -> SlideView {
        SlideView {
            area: DrawArea::empty(),
            stdout,
        }
    }

    pub fn set_area(&mut self, area: DrawArea) {
        self.area = area;
    }

    pub fn draw(&self, model: &Model) -> IoResult<()> {
        let mut stdout = self.stdout.borrow_mut();

        let DrawArea { origin: (x, y), dimens: (w, h) } = self.area;

        let deck = match model.deck {
            Ok(ref deck) => deck,
            Err(ref e) => {
                let msg = e.to_string();
                write!(stdout, "{}{}{}{}", Goto(x, y + 1), Fg(Red), clip(&msg, w as usize), Fg(ColorReset))?;
                return Ok(());
            }
        };

        let margin = model.config.margin.unwrap_or(1).min(w / 2);
        let width = (w - margin) as usize;

        // last line is reserved for controls and progress
        for (line, text) in deck.current().lines().take(h.saturating_sub(1) as usize).enumerate() {
            write!(stdout, "{}{}", Goto(x + margin, y + line as u16), clip(text, width))?;
        }

        let footer = y + h.saturating_sub(1);

        if model.config.controls {
            write!(stdout, "{}{}<- prev | next ->{}", Goto(x + margin, footer), Fg(Yellow), Fg(ColorReset))?;
        }

        if model.config.progress {
            let progress = format!("{}/{}", deck.index() + 1, deck.len());
            let col = (x + w).saturating_sub(progress.len() as u16 + 1);
            write!(stdout, "{}{}", Goto(col, footer), progress)?;
        }

        Ok(())
    }
}

/// The editing surface of the memento demo.
///
/// Holds its own copy of the text. The document only sees it on save or
/// refresh, and the editor only reloads from the document when the session's
/// editor key moves on.
pub struct EditorView {
    text: String,
    key: usize,
    scroll_start: usize,
    area: DrawArea,
    stdout: RawStdout,
}

impl EditorView {
    pub fn new(stdout: RawStdout) -> EditorView {
        EditorView {
            text: String::new(),
            key: 0,
            scroll_start: 0,
            area: DrawArea::empty(),
            stdout,
        }
    }

    pub fn set_area(&mut self, area: DrawArea) {
        self.area = area;
        self.follow();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
        self.follow();
    }

    pub fn backspace(&mut self) {
        self.text.pop();
        self.follow();
    }

    pub fn resync(&mut self, content: &str, key: usize) {
        if self.key != key {
            self.text = content.into();
            self.key = key;
            self.follow();
        }
    }

    fn height(&self) -> usize {
        // first line is the pane title
        self.area.dimens.1.saturating_sub(1) as usize
    }

    // Keep the line being typed on screen
    fn follow(&mut self) {
        let last_line = self.text.split('\n').count() - 1;
        self.scroll_start = move_window(self.scroll_start, self.height(), last_line).unwrap_or(0);
    }

    pub fn draw(&self) -> IoResult<()> {
        let mut stdout = self.stdout.borrow_mut();

        let DrawArea { origin: (x, y), dimens: (w, _) } = self.area;
        let width = w.saturating_sub(2) as usize;

        write!(stdout, "{}{}Text editor{}", Goto(x, y), Underline, StyleReset)?;

        let lines: Vec<&str> = self.text.split('\n').collect();
        let visible = lines.iter().skip(self.scroll_start).take(self.height());

        for (line, text) in visible.enumerate() {
            write!(stdout, "{}{}", Goto(x, y + 1 + line as u16), clip(text, width))?;
        }

        // cursor after the last character
        let last = lines.len() - 1;
        if last >= self.scroll_start && last - self.scroll_start < self.height() {
            let col = lines[last].chars().count().min(width) as u16;
            let row = y + 1 + (last - self.scroll_start) as u16;
            write!(stdout, "{}{} {}", Goto(x + col, row), Invert, NoInvert)?;
        }

        Ok(())
    }
}

pub struct HistoryView {
    area: DrawArea,
    stdout: RawStdout,
}

impl HistoryView {
    pub fn new(stdout: RawStdout) -> HistoryView {
        HistoryView {
            area: DrawArea::empty(),
            stdout,
        }
    }

    pub fn set_area(&mut self, area: DrawArea) {
        self.area = area;
    }

    pub fn draw(&self, session: &Session) -> IoResult<()> {
        let mut stdout = self.stdout.borrow_mut();

        let DrawArea { origin: (x, y), dimens: (w, h) } = self.area;
        let width = w.saturating_sub(1) as usize;

        write!(stdout, "{}{}History of changes{}", Goto(x, y), Underline, StyleReset)?;

        let lines = history_lines(&session.recent_first());

        if lines.is_empty() {
            write!(stdout, "{}History is empty yet", Goto(x, y + 1))?;
            return Ok(());
        }

        for (row, line) in lines.iter().take(h.saturating_sub(1) as usize).enumerate() {
            write!(stdout, "{}{}", Goto(x, y + 1 + row as u16), clip(line, width))?;
        }

        Ok(())
    }
}

pub struct StatusView {
    pub head: String,
    pub body: String,
    pub warning: bool,
    pub area: DrawArea,
    stdout: RawStdout,
}

impl StatusView {
    pub fn new(stdout: RawStdout) -> StatusView {
        StatusView {
            head: "".into(),
            body: "".into(),
            warning: false,
            area: DrawArea {
                origin: (1, 1),
                dimens: (16, 2),
            },
            stdout,
        }
    }

    pub fn set_head(&mut self, text: &str) {
        self.head = text.into();
    }

    pub fn set_body(&mut self, text: &str) {
        self.body = text.into();
        self.warning = false;
    }

    pub fn set_warning(&mut self, text: &str) {
        self.body = text.into();
        self.warning = true;
    }

    pub fn set_area(&mut self, area: DrawArea) {
        self.area = area;
    }

    pub fn draw(&self) -> IoResult<()> {
        let mut stdout = self.stdout.borrow_mut();

        let DrawArea { origin: (x, y), dimens: (w, _) } = self.area;

        write!(stdout, "{}{}{}{}{}", Goto(x, y), ClearCurrentLine, Invert, format!("{:<pad$}", clip(&self.head, w as usize), pad=(w as usize)), NoInvert)?;

        let body = clip(&self.body, w as usize);

        if self.warning {
            write!(stdout, "{}{}{}{}{}", Goto(x, y + 1), ClearCurrentLine, Fg(Yellow), body, Fg(ColorReset))?;
        } else {
            write!(stdout, "{}{}{}", Goto(x, y + 1), ClearCurrentLine, body)?;
        }

        stdout.flush()?;

        Ok(())
    }
}
