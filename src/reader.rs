//! The screen controller: owns the reader state, launches fetches and
//! applies their completions.
//!
//! Every fetch runs as its own detached task and reports back through the
//! event channel, so the only place state changes is [`Reader::handle`] on
//! the UI loop. In-flight fetches are never cancelled or serialized; the
//! completion handled last wins.

use crate::{
    error::FetchError,
    models::{Command, Comic, Target},
    navigation::{self, Swipe},
    state::ReaderState,
    xkcd_client::ComicSource,
};
use log::debug;
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

/// Messages delivered to the UI loop.
#[derive(Debug)]
pub enum Event {
    Input(Command),
    Fetched {
        target: Target,
        result: Result<Comic, FetchError>,
    },
    ImageLoaded {
        number: u32,
        url: String,
        result: Result<Vec<u8>, FetchError>,
    },
}

/// What the screen should do after an event.
#[derive(Debug)]
pub enum Outcome {
    Displayed(Comic),
    Image {
        comic: Comic,
        bytes: Vec<u8>,
    },
    /// Image for a comic that was replaced while it loaded.
    Stale(u32),
    Failed {
        what: String,
        error: FetchError,
    },
    Requested(Target),
    Ignored,
    Help,
    Quit,
}

pub struct Reader<S> {
    source: Arc<S>,
    state: ReaderState,
    events: UnboundedSender<Event>,
    rng: StdRng,
    min_swipe_distance: f32,
}

impl<S: ComicSource> Reader<S> {
    pub fn new(source: S, events: UnboundedSender<Event>) -> Self {
        Reader {
            source: Arc::new(source),
            state: ReaderState::default(),
            events,
            rng: StdRng::from_entropy(),
            min_swipe_distance: navigation::DEFAULT_MIN_SWIPE_DISTANCE,
        }
    }

    pub fn with_min_swipe_distance(mut self, distance: f32) -> Self {
        self.min_swipe_distance = distance;
        self
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn state(&self) -> &ReaderState {
        &self.state
    }

    /// Fire and forget. The result arrives later as [`Event::Fetched`].
    pub fn fetch(&self, target: Target) {
        debug!("Fetching comic {}", target);
        let source = Arc::clone(&self.source);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = source.comic(target).await;
            // The UI loop is gone when this fails; nothing left to update.
            let _ = events.send(Event::Fetched { target, result });
        });
    }

    fn load_image(&self, comic: &Comic) {
        let source = Arc::clone(&self.source);
        let events = self.events.clone();
        let number = comic.number;
        let url = comic.image_url.clone();
        tokio::spawn(async move {
            let result = source.image(&url).await;
            let _ = events.send(Event::ImageLoaded {
                number,
                url,
                result,
            });
        });
    }

    fn request(&self, target: Option<Target>) -> Outcome {
        match target {
            Some(target) => {
                self.fetch(target);
                Outcome::Requested(target)
            }
            None => Outcome::Ignored,
        }
    }

    pub fn swipe(&self, direction: Swipe) -> Outcome {
        self.request(navigation::swipe(self.state.current(), direction))
    }

    pub fn shake(&mut self) -> Outcome {
        let target = navigation::shake(self.state.latest_known(), &mut self.rng);
        self.request(target)
    }

    pub fn jump(&self, input: &str) -> Outcome {
        self.request(navigation::jump(input))
    }

    /// Routes one input surface to its navigation policy.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        match command {
            Command::Swipe(direction) => self.swipe(direction),
            Command::Touch { down_x, up_x } => {
                match Swipe::from_touch(down_x, up_x, self.min_swipe_distance) {
                    Some(direction) => self.swipe(direction),
                    None => Outcome::Ignored,
                }
            }
            Command::Shake => self.shake(),
            Command::Jump(input) => self.jump(&input),
            Command::Latest => self.request(Some(Target::Latest)),
            Command::Help => Outcome::Help,
            Command::Quit => Outcome::Quit,
            Command::Unknown(line) => {
                debug!("Unknown command {:?}", line);
                Outcome::Ignored
            }
        }
    }

    /// Applies one event. Failed fetches leave the state untouched.
    pub fn handle(&mut self, event: Event) -> Outcome {
        match event {
            Event::Input(command) => self.dispatch(command),
            Event::Fetched {
                target,
                result: Ok(comic),
            } => {
                self.state.apply(target, comic.clone());
                self.load_image(&comic);
                Outcome::Displayed(comic)
            }
            Event::Fetched {
                target,
                result: Err(error),
            } => {
                debug!("Fetch of comic {} failed: {}", target, error);
                Outcome::Failed {
                    what: format!("comic {target}"),
                    error,
                }
            }
            Event::ImageLoaded {
                number,
                result: Ok(bytes),
                ..
            } => match self.state.current() {
                Some(comic) if comic.number == number => Outcome::Image {
                    comic: comic.clone(),
                    bytes,
                },
                _ => {
                    debug!("Dropping image for comic #{}, no longer shown", number);
                    Outcome::Stale(number)
                }
            },
            Event::ImageLoaded {
                number,
                url,
                result: Err(error),
            } => {
                debug!("Image {} for comic #{} failed: {}", url, number, error);
                Outcome::Failed {
                    what: format!("image for #{number}"),
                    error,
                }
            }
        }
    }
}
