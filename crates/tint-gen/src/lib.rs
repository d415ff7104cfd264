//! # tint-gen — random color generation
//!
//! Two generators built on the `tint-color` value types:
//!
//! - **[`Generator`]** — integer HSL colors inside per-channel bounds, with
//!   optional string seeds for reproducible output
//! - **[`ColorGenerator`]** — samples unconstrained colors and keeps the one
//!   a [`Pipeline`] of [`Ranker`]s scores highest
//!
//! ```
//! use tint_gen::{Generator, GeneratorConfig};
//!
//! let mut generator = Generator::new();
//! let a = generator.many(3, Some("brand")).unwrap();
//! let b = generator.many(3, Some("brand")).unwrap();
//! assert_eq!(a, b);
//!
//! let blues = GeneratorConfig::default().with_hue((200, 240));
//! let blue = generator.one_within(&blues, None).unwrap();
//! assert!(blue.hue() >= 200.0 && blue.hue() <= 240.0);
//! ```
//!
//! The crate emits `tracing` events (reseeds at `trace`, configuration
//! changes and ranked selections at `debug`) and installs no subscriber.

// Every fallible operation documents its error in one line.
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod generator;
pub mod random;
pub mod rank;
pub mod ranked;
pub mod rankers;

pub use config::{Channel, ChannelRange, ConfigError, GeneratorConfig};
pub use generator::{Generator, ManyLazily};
pub use random::RandomSource;
pub use rank::{POINT, Pipeline, Rankeable, Ranker};
pub use ranked::{ColorGenerator, DEFAULT_SAMPLE_SIZE};
pub use rankers::{
    DejectBrightColors, DejectDarkColors, DejectGrayishColors, PrioritizeFlashyColors,
    PrioritizeHueRange,
};
