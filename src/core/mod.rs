//! Platform-independent page interaction rules
//!
//! Nothing in here touches the DOM: every behavior is expressed as plain data
//! and arithmetic so it can be unit-tested natively. The browser glue in `ui`
//! reads the DOM, asks these modules what to do, and writes the result back.

pub mod config;
pub mod counter;
pub mod debounce;
pub mod error;
pub mod menu;
pub mod reveal;
pub mod ripple;
pub mod scroll;
pub mod timer;

pub use config::{ClassNames, PageConfig, Selectors};
pub use debounce::Debouncer;
pub use error::PageError;
pub use menu::{MenuEvent, MenuState};
pub use reveal::TriggerSet;
pub use timer::{PendingTimer, Scheduler};
