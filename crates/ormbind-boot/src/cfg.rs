//! Deprecated compatibility surface.
//!
//! Older bootstrap integrations imported the second-pass contract from this
//! module; it is kept as a plain re-export with no members of its own.

#[deprecated(note = "use `ormbind_boot::second_pass::SecondPass`")]
pub use crate::second_pass::SecondPass;
