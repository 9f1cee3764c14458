use crate::{Error, UsizeMax};

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    str::FromStr,
};

use tracing::{info, warn};

const SEPARATOR: &str = "---";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Memento,
    Proxy,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Page::Memento => "Presentation: Memento Pattern",
            Page::Proxy => "Presentation: Proxy Pattern",
        }
    }

    /// Slide source, relative to the slides directory.
    pub fn source(self) -> PathBuf {
        match self {
            Page::Memento => Path::new("memento").join("slide1.md"),
            Page::Proxy => Path::new("proxy").join("slide1.md"),
        }
    }

    pub fn slide_config(self) -> SlideConfig {
        match self {
            Page::Memento => SlideConfig {
                theme: "moon".into(),
                transition: "concave".into(),
                controls: true,
                progress: true,
                margin: Some(0),
            },
            Page::Proxy => SlideConfig {
                theme: "solarized".into(),
                transition: "slide".into(),
                controls: true,
                progress: true,
                margin: None,
            },
        }
    }

    pub fn has_editor(self) -> bool {
        self == Page::Memento
    }
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(name: &str) -> Result<Page, Error> {
        match name {
            "memento" => Ok(Page::Memento),
            "proxy" => Ok(Page::Proxy),
            other => Err(Error::UnknownPage(other.into())),
        }
    }
}

/// How a deck is presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideConfig {
    pub theme: String,
    pub transition: String,
    pub controls: bool,
    pub progress: bool,
    pub margin: Option<u16>,
}

#[derive(Debug)]
pub struct Deck {
    pub path: PathBuf,
    slides: Vec<String>,
    current: UsizeMax,
}

impl Deck {
    pub fn open(path: &Path) -> Result<Deck, Error> {
        let markdown = match fs::read_to_string(path) {
            Ok(markdown) => markdown,
            Err(ref e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "slides not found");
                return Err(Error::SlidesNotFound(path.into()));
            }
            Err(source) => {
                return Err(Error::Io {
                    path: path.into(),
                    source,
                })
            }
        };

        let deck = Deck::parse(path, &markdown);
        info!(path = %path.display(), slides = deck.len(), "loaded slides");
        Ok(deck)
    }

    pub fn parse(path: &Path, markdown: &str) -> Deck {
        let mut slides = vec![String::new()];

        for line in markdown.lines() {
            if line.trim_end() == SEPARATOR {
                slides.push(String::new());
                continue;
            }

            if let Some(slide) = slides.last_mut() {
                slide.push_str(line);
                slide.push('\n');
            }
        }

        let slides: Vec<String> = slides.into_iter().map(|s| s.trim().to_owned()).collect();
        let current = UsizeMax::new(0, slides.len().saturating_sub(1));

        Deck {
            path: path.into(),
            slides,
            current,
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn index(&self) -> usize {
        self.current.into()
    }

    pub fn current(&self) -> &str {
        &self.slides[self.index()]
    }

    pub fn next(&mut self) {
        self.current += 1;
    }

    pub fn prev(&mut self) {
        self.current -= 1;
    }

    pub fn first(&mut self) {
        self.current.set_value(0);
    }

    pub fn last(&mut self) {
        let last = self.current.get_maximum();
        self.current.set_value(last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck_macros::quickcheck;
    use std::io::Write;

    fn deck(markdown: &str) -> Deck {
        Deck::parse(Path::new("test.md"), markdown)
    }

    #[test]
    fn test_split_on_separator() {
        let deck = deck("# Memento\nintro\n---\n## Originator\n---\n## Caretaker\n");

        assert_eq!(deck.len(), 3);
        assert_eq!(deck.current(), "# Memento\nintro");
    }

    #[test]
    fn test_empty_source_is_one_slide() {
        let deck = deck("");
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.current(), "");
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut deck = deck("a\n---\nb");

        deck.prev();
        assert_eq!(deck.current(), "a");
        deck.next();
        deck.next();
        deck.next();
        assert_eq!(deck.current(), "b");
        deck.prev();
        assert_eq!(deck.index(), 0);

        deck.last();
        assert_eq!(deck.index(), 1);
        deck.first();
        assert_eq!(deck.index(), 0);
    }

    #[test]
    fn test_missing_file_names_path() {
        let path = Path::new("no-such-dir").join("slide1.md");

        match Deck::open(&path) {
            Err(e @ Error::SlidesNotFound(_)) => {
                assert!(e.to_string().contains(&path.display().to_string()))
            }
            other => panic!("expected missing slides, got {:?}", other),
        }
    }

    #[test]
    fn test_open_reads_utf8() {
        let path = std::env::temp_dir().join(format!("patslides-{}.md", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            write!(file, "# Снимок\n---\nsecond").unwrap();
        }

        let deck = Deck::open(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(deck.len(), 2);
        assert_eq!(deck.current(), "# Снимок");
    }

    #[test]
    fn test_non_utf8_is_io_error() {
        let path = std::env::temp_dir().join(format!("patslides-bad-{}.md", std::process::id()));
        fs::write(&path, [0xff, 0xfe, b'a']).unwrap();

        let result = Deck::open(&path);
        fs::remove_file(&path).unwrap();

        match result {
            Err(e @ Error::Io { .. }) => {
                let msg = e.to_string();
                assert!(msg.starts_with("Could not read slides "));
                assert!(msg.contains(&path.display().to_string()));
            }
            other => panic!("expected read error, got {:?}", other),
        }
    }

    #[test]
    fn test_pages() {
        assert_eq!("memento".parse::<Page>().unwrap(), Page::Memento);
        assert_eq!("proxy".parse::<Page>().unwrap(), Page::Proxy);
        assert!("observer".parse::<Page>().is_err());

        assert_eq!(Page::Memento.slide_config().margin, Some(0));
        assert_eq!(Page::Proxy.slide_config().margin, None);
        assert_eq!(Page::Proxy.slide_config().theme, "solarized");
        assert!(Page::Memento.has_editor());
        assert!(!Page::Proxy.has_editor());
    }

    #[quickcheck]
    fn test_slide_count(chunks: Vec<String>) -> bool {
        let chunks: Vec<String> = chunks
            .into_iter()
            .map(|c| c.replace(SEPARATOR, "").replace('\r', ""))
            .collect();
        let markdown = chunks.join("\n---\n");
        let deck = deck(&markdown);

        deck.len() == chunks.len().max(1)
    }
}
