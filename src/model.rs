use crate::{
    session::Session,
    slides::{Deck, Page, SlideConfig},
    Error,
};

use std::path::Path;

#[derive(Debug)]
pub struct Model {
    pub page: Page,
    pub config: SlideConfig,
    pub deck: Result<Deck, Error>,
    pub session: Session,
}

impl Model {
    pub fn new(page: Page, config: SlideConfig) -> Model {
        let path = page.source();

        Model {
            page,
            config,
            deck: Err(Error::SlidesNotFound(path)),
            session: Session::new(),
        }
    }

    /// Loads the page's slides from `slides_dir`. A failure is kept and shown
    /// in place of the slides.
    pub fn open(&mut self, slides_dir: &Path) {
        self.deck = Deck::open(&slides_dir.join(self.page.source()));
    }

    pub fn next_slide(&mut self) {
        if let Ok(ref mut deck) = self.deck {
            deck.next();
        }
    }

    pub fn prev_slide(&mut self) {
        if let Ok(ref mut deck) = self.deck {
            deck.prev();
        }
    }

    pub fn first_slide(&mut self) {
        if let Ok(ref mut deck) = self.deck {
            deck.first();
        }
    }

    pub fn last_slide(&mut self) {
        if let Ok(ref mut deck) = self.deck {
            deck.last();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_slides_do_not_block_demo() {
        let mut model = Model::new(Page::Memento, Page::Memento.slide_config());
        model.open(Path::new("/nonexistent-slides-dir"));

        assert!(model.deck.is_err());
        model.next_slide();
        model.prev_slide();

        model.session.save("still works");
        assert_eq!(model.session.history().len(), 1);
    }
}
