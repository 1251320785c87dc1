use std::time::Duration;

use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose reveal tracing when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Scroll-reveal tuning shared by every `Reveal` on the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSettings {
    /// Fraction of the element's area that has to be visible.
    pub threshold: f64,
    pub duration: Duration,
    /// Vertical distance (px) the element travels up while fading in.
    pub offset: f32,
    /// Extra delay added per sibling card.
    pub stagger: Duration,
}

pub const REVEAL: RevealSettings = RevealSettings {
    threshold: 0.1,
    duration: Duration::from_millis(800),
    offset: 50.0,
    stagger: Duration::from_millis(200),
};

/// Header slide-in on first paint.
pub const HEADER_SLIDE: f32 = -100.0;

/// Animation frames to wait before mount-triggered entrances flip to their
/// resting pose. The first frame paints the starting pose.
pub const ENTRANCE_FRAMES: u32 = 2;

/// Distance (px) kept clear above a section when jumping to it, so the fixed
/// header does not cover the heading.
pub const ANCHOR_SCROLL_MARGIN: u32 = 96;
