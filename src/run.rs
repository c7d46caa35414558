use crate::{
    configuration::Settings,
    models::{Comic, Command, Target},
    reader::{Event, Outcome, Reader},
    screen::{self, Screen},
    xkcd_client::XkcdClient,
};
use log::{error, info};
use resolve_path::PathResolveExt;
use std::{fs, io, path::PathBuf, thread};
use tokio::sync::mpsc::{self, UnboundedSender};

pub async fn run(settings: Settings) -> anyhow::Result<()> {
    info!("Reading comics from {}", settings.base_url);

    let output_directory = match &settings.output_directory {
        Some(dir) => {
            let path = dir.resolve().into_owned();
            fs::create_dir_all(&path)?;
            info!("Output Directory: {}", path.display());
            Some(path)
        }
        None => None,
    };

    let (events, mut inbox) = mpsc::unbounded_channel();
    let client = XkcdClient::new(settings.base_url);
    let mut reader = Reader::new(client, events.clone())
        .with_min_swipe_distance(settings.min_swipe_distance);
    let mut screen = Screen::new(io::stdout(), settings.show_errors);

    spawn_input(events);

    // No session memory: always start from the newest comic.
    reader.fetch(Target::Latest);

    while let Some(event) = inbox.recv().await {
        let outcome = reader.handle(event);
        if let Outcome::Quit = outcome {
            break;
        }
        screen.render(&outcome)?;
        if let (Some(dir), Outcome::Image { comic, bytes }) = (&output_directory, outcome) {
            export_image(dir.clone(), comic, bytes);
        }
    }

    info!("Finished!");
    Ok(())
}

fn export_image(dir: PathBuf, comic: Comic, bytes: Vec<u8>) {
    tokio::spawn(async move {
        match screen::save_image(&dir, &comic, &bytes).await {
            Ok(path) => info!("Saved {}", path.display()),
            Err(e) => error!("Unable to save image for #{}: {}", comic.number, e),
        }
    });
}

/// Blocking stdin reader on its own thread, so quitting never waits on input.
fn spawn_input(events: UnboundedSender<Event>) {
    thread::spawn(move || {
        for line in io::stdin().lines() {
            match line {
                Ok(line) => {
                    if events.send(Event::Input(Command::parse(&line))).is_err() {
                        return;
                    }
                }
                Err(e) => {
                    error!("Unable to read input: {}", e);
                    break;
                }
            }
        }
        let _ = events.send(Event::Input(Command::Quit));
    });
}
