//! Reveal-on-scroll rules shared between the observer glue and tests.

/// Fraction of an element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.12;
/// Pulls the trigger line 40px above the viewport bottom.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";
/// Per-entry delay step for the cascade effect, in milliseconds.
pub const STAGGER_MS: i32 = 60;

/// Elements tagged for the entrance animation.
pub const REVEAL_SELECTORS: &[&str] = &[
    "#hero .badge",
    "#hero .hero-title",
    "#hero .hero-sub",
    "#hero .hero-actions",
    ".glass-card",
    ".tech-chip",
    ".project-card",
    ".timeline-card",
    ".section-header",
    ".projects-header",
    ".about-text h2",
    ".about-text p",
    ".about-text .stats-grid",
    ".section-label",
];

/// Reveal delay for the `index`-th entry of an observer batch.
pub fn stagger_delay(base_ms: i32, index: i32) -> i32 {
    base_ms + index * STAGGER_MS
}
