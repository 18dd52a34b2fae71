//! # cidrscope core
//!
//! Pure computations behind the `cidrscope` report:
//!
//! * [`calc`]: parses `address/prefix` and derives masks, bounds, size and tags.
//! * [`classify`]: ordered address classification.
//! * [`ruler`]: the ASCII bit-ruler drawn above binary rows.
//! * [`error`]: the parse error returned for malformed input.

pub mod calc;
pub mod classify;
pub mod error;
pub mod ruler;

pub use calc::{CidrInfo, calc};
pub use classify::AddressTag;
pub use error::CidrError;
pub use ruler::mask_line;
