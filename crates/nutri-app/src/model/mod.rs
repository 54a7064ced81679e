//! Plain data carried between backends, hooks and screens.

pub mod dietary;
pub mod health;
pub mod profile;
pub mod saved;
pub mod settings;

pub use dietary::*;
pub use health::*;
pub use profile::*;
pub use saved::*;
pub use settings::*;
