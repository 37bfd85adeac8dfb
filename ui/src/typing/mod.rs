pub mod cycler;
pub mod view;

pub use cycler::{Mode, TypingConfig, TypingCycler, TypingError};
pub use view::Typewriter;
