pub mod clipping;
pub mod error;
pub mod index;
pub mod parser;
pub mod timestamp;

pub use clipping::{Clipping, ClippingKind};
pub use error::{ParseError, ParseResult};
pub use index::{added_after, TitleIndex};
pub use parser::{parse, parse_str, Clippings, SEPARATOR};
pub use timestamp::{parse_cutoff, parse_timestamp};
