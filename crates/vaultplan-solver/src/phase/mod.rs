//! Search phases.
//!
//! - **Chain**: bounded-depth exhaustive enumeration of move chains,
//!   followed by selection of the best chain under a policy

pub mod chain;
