//! Pure policies that turn user input into the next fetch target.

use crate::models::{Comic, Target};
use log::debug;
use rand::Rng;

/// Comic 404 does not exist upstream; random picks skip it.
pub const MISSING_COMIC: u32 = 404;

pub const DEFAULT_MIN_SWIPE_DISTANCE: f32 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Previous,
    Next,
}

impl Swipe {
    /// Classifies a horizontal drag. Short drags are not swipes. Dragging
    /// the finger to the right goes back one comic.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn from_touch(down_x: f32, up_x: f32, min_distance: f32) -> Option<Self> {
        let delta = down_x - up_x;
        // Positive test so NaN coordinates never count as a swipe.
        if !(delta.abs() > min_distance) {
            return None;
        }
        if delta < 0.0 {
            Some(Swipe::Previous)
        } else {
            Some(Swipe::Next)
        }
    }
}

/// Neighbour of the current comic. No bound checks: 0 or an unpublished
/// number is requested as-is and simply fails to load.
pub fn swipe(current: Option<&Comic>, direction: Swipe) -> Option<Target> {
    let current = current?.number;
    let number = match direction {
        Swipe::Previous => current.checked_sub(1)?,
        Swipe::Next => current.checked_add(1)?,
    };
    Some(Target::ByNumber(number))
}

/// Uniform pick from `1..=latest_known`, resampling on [`MISSING_COMIC`].
pub fn shake<R: Rng + ?Sized>(latest_known: Option<u32>, rng: &mut R) -> Option<Target> {
    let latest = latest_known.filter(|&n| n > 0)?;
    loop {
        let n = rng.gen_range(1..=latest);
        if n != MISSING_COMIC {
            return Some(Target::ByNumber(n));
        }
        debug!("Drew comic {}, drawing again", MISSING_COMIC);
    }
}

/// Manual entry. Empty, non-numeric or zero input is a no-op.
pub fn jump(input: &str) -> Option<Target> {
    match input.trim().parse::<u32>() {
        Ok(n) if n > 0 => Some(Target::ByNumber(n)),
        _ => None,
    }
}
