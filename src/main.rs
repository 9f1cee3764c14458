use patslides::controller::*;
use patslides::model::*;
use patslides::slides::Page;
use patslides::view::*;
use patslides::RawStdout;

use chan_signal::{notify, Signal};
use docopt::Docopt;
use serde_derive::Deserialize;

use termion::event::Key;
use termion::input::TermRead;
use termion::raw::IntoRawMode;
use termion::screen::AlternateScreen;

use tracing::info;
use tracing_subscriber::EnvFilter;

use std::cell::RefCell;
use std::error::Error;
use std::fs::File;
use std::io::{stdin, stdout};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::mpsc::sync_channel;
use std::sync::Mutex;
use std::thread;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const USAGE: &str = "
Usage:
  patslides [options] <page>
  patslides (-h | --help)
  patslides --version

Pages:
  memento       Memento slides with the undo history demo.
  proxy         Proxy slides.

Options:
  -h --help                 Show this screen.
  --version                 Show version.
  --slides=<dir>            Directory holding memento/ and proxy/ [default: .].
  --theme=<name>            Override the page's slide theme.
  --transition=<name>       Override the page's slide transition.
  --log=<file>              Write logs to <file> (filter with RUST_LOG).
";

#[derive(Deserialize)]
struct Args {
    arg_page: String,
    flag_slides: String,
    flag_theme: Option<String>,
    flag_transition: Option<String>,
    flag_log: Option<String>,
}

struct Config {
    page: Page,
    slides_dir: PathBuf,
    theme: Option<String>,
    transition: Option<String>,
    log: Option<PathBuf>,
}

impl Config {
    fn from_args(args: Args) -> Result<Config, patslides::Error> {
        Ok(Config {
            page: args.arg_page.parse()?,
            slides_dir: args.flag_slides.into(),
            theme: args.flag_theme,
            transition: args.flag_transition,
            log: args.flag_log.map(PathBuf::from),
        })
    }
}

enum Event {
    Key(Key),
    Resize((u16, u16)),
}

fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| e as Box<dyn Error>)?;

    Ok(())
}

fn setup_terminal(stdout: RawStdout) -> Result<(), Box<dyn Error>> {
    let mut stdout = stdout.borrow_mut();
    write!(stdout, "{}", termion::cursor::Hide)?;
    write!(stdout, "{}", termion::clear::All)?;
    stdout.flush()?;
    Ok(())
}

fn teardown_terminal(stdout: RawStdout) -> Result<(), Box<dyn Error>> {
    let mut stdout = stdout.borrow_mut();
    write!(stdout, "{}", termion::clear::All)?;
    write!(stdout, "{}", termion::cursor::Show)?;
    stdout.flush()?;
    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = {
        let args: Args = Docopt::new(USAGE)
            .and_then(|d| d.version(Some(VERSION.into())).deserialize())
            .unwrap_or_else(|e| e.exit());

        Config::from_args(args)?
    };

    if let Some(ref path) = config.log {
        init_logging(path)?;
    }

    let stdout: RawStdout = Rc::new(RefCell::new(AlternateScreen::from(stdout().into_raw_mode()?)));

    let events = {
        // Create event channel
        let (send, recv) = sync_channel(0);

        // Register window changed event
        let signal_winch = notify(&[Signal::WINCH]);

        // Receive window changed events
        let send_1 = send.clone();
        thread::spawn(move || {
            for _ in signal_winch.iter() {
                let size = match termion::terminal_size() {
                    Ok(size) => size,
                    Err(_) => continue,
                };
                if send_1.send(Event::Resize(size)).is_err() {
                    break;
                }
            }
        });

        // Receive keypress events
        thread::spawn(move || {
            for key in stdin().keys() {
                match key {
                    Ok(key) => {
                        if send.send(Event::Key(key)).is_err() {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }
        });

        recv
    };

    let mut ctrl = {
        let mut slide_config = config.page.slide_config();
        if let Some(theme) = config.theme {
            slide_config.theme = theme;
        }
        if let Some(transition) = config.transition {
            slide_config.transition = transition;
        }

        let model = Model::new(config.page, slide_config);
        let view = View::new(stdout.clone(), config.page.has_editor());

        Controller::new(model, view)
    };

    info!(page = ?config.page, slides = %config.slides_dir.display(), "starting");

    setup_terminal(stdout.clone())?;

    ctrl.resize_view(termion::terminal_size()?);
    ctrl.open(&config.slides_dir);
    ctrl.update_view();

    for event in events.iter() {
        match event {
            Event::Resize(new_size) => {
                ctrl.resize_view(new_size);
            }
            Event::Key(k) => {
                if !ctrl.transition(k) {
                    break;
                }
            }
        }

        ctrl.update_view();
    }

    teardown_terminal(stdout.clone())?;

    info!("exiting");

    Ok(())
}

fn main() {
    run().unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });
    println!("\n"); // line-break after exiting
}
