//! Argument resolution pipeline for httpdirfs.
//!
//! ```text
//! Config file + command line → Merge → Classify → Validate → Transport / Mount runtime
//! ```
//!
//! Classification splits the merged arguments into a [`Settings`] record
//! for the transport and a pass-through [`ArgVec`] for the mount runtime.
//!
//! [`Settings`]: crate::config::Settings

mod argv;
mod classifier;
mod error;
pub mod help;
mod pipeline;
mod registry;

pub use argv::ArgVec;
pub use classifier::{classify, Outcome, Terminal, HELP_MARKER, VERSION_MARKER};
pub use error::UsageError;
pub use pipeline::{is_valid_base_url, resolve, run, Resolution, Target, DEFAULT_PROGRAM};
pub use registry::{
    find_long, find_short, flag_registry, Destination, FlagArity, FlagDef, LongMatch, SettingField,
};
