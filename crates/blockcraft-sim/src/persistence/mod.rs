//! Saving and loading: the versioned `BC2D:1` text format and its file I/O.

mod codec;
mod error;
mod file;

pub use codec::{decode, encode};
pub use error::{SaveError, SaveResult};
pub use file::{load_from_file, save_to_file};
