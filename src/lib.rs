pub mod controller;
pub mod document;
pub mod history;
pub mod model;
pub mod session;
pub mod slides;
pub mod view;

mod utils;

use std::{
    cell::RefCell,
    cmp::min,
    io::{self, Write},
    ops::{AddAssign, SubAssign},
    path::PathBuf,
    rc::Rc,
};

use thiserror::Error;

pub use crate::{
    document::{Document, Memento},
    history::History,
    session::Session,
    slides::{Deck, Page, SlideConfig},
};

/// Shared handle to the terminal (or any other sink the views draw into).
pub type RawStdout = Rc<RefCell<dyn Write>>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("History is empty!")]
    EmptyHistory,

    #[error("Slides not found: {}", .0.display())]
    SlidesNotFound(PathBuf),

    #[error("Could not read slides {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("No such page: {0}")]
    UnknownPage(String),
}

/// Index that never exceeds its maximum.
#[derive(Debug, Clone, Copy)]
pub struct UsizeMax {
    value: usize,
    max: usize,
}

impl UsizeMax {
    pub fn new(value: usize, max: usize) -> UsizeMax {
        let mut ret = UsizeMax { value, max };
        ret.adjust();
        ret
    }

    pub fn set_value(&mut self, new_value: usize) {
        self.value = new_value;
        self.adjust();
    }

    pub fn get_maximum(&self) -> usize {
        self.max
    }

    fn adjust(&mut self) {
        self.value = min(self.value, self.max);
    }
}

impl AddAssign<usize> for UsizeMax {
    fn add_assign(&mut self, other: usize) {
        self.value = self.value.saturating_add(other);
        self.adjust();
    }
}

impl SubAssign<usize> for UsizeMax {
    fn sub_assign(&mut self, other: usize) {
        self.value = self.value.saturating_sub(other);
        self.adjust();
    }
}

impl From<UsizeMax> for usize {
    fn from(mut convertee: UsizeMax) -> Self {
        convertee.adjust();
        convertee.value
    }
}
