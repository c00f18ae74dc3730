//! Canonical names for numbered sequences of artifacts.
//!
//! A [`NameNumerator`] turns a sequence index into a name such as
//! `light.bak`, `light_1.bak`, `light_2.bak`, and recovers the index from a
//! name. The free functions in [`analyze`] inspect the recovered indexes for
//! gaps and duplicates and propose a renumbering. Nothing here touches the
//! filesystem: callers list and rename files themselves.
//!
//! ```rust
//! use name_numerator::{NameNumerator, NumeratorOptions, adjust_broken, get_missing};
//!
//! let nn = NameNumerator::new(NumeratorOptions {
//!     default_name: Some("light".into()),
//!     default_ext: Some("bak".into()),
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! let found = ["videoPrivado.mp4", "light_1.bak", "light_2.bak"];
//! let indexes = nn.get_seqindexes(&found, None, None).unwrap();
//! assert_eq!(indexes, vec![1, 2]);
//! assert_eq!(get_missing(&indexes), vec![0]);
//!
//! let plan = nn.rename_plan(&adjust_broken(&indexes).unwrap(), None, None).unwrap();
//! assert_eq!(plan[0].from, "light_1.bak");
//! assert_eq!(plan[0].to, "light.bak");
//! ```

pub mod analyze;
pub mod config;
mod consts;
pub mod decode;
pub mod encode;
pub mod error;
mod name;
mod translate;

pub use analyze::{
    SequenceReport, adjust_broken, any_duplicated, get_duplicates, get_missing, shift_up,
};
pub use config::{NameNumerator, NumeratorOptions};
pub use decode::SeqnameParts;
pub use encode::Rename;
pub use error::{Error, ErrorKind, Result, Rule};
