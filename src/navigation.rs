//! Navigation messages and their evaluation
mod almanac;
mod ephemeris;
mod message;
mod record;
mod time_offset;
mod xvt;

pub use almanac::Almanac;
pub use ephemeris::{Ephemeris, Kepler, Perturbations, SvClock};
pub use message::{NavMessageId, NavMessageType, NavMessageTypes};
pub use record::{NavPayload, NavRecord};
pub use time_offset::TimeOffset;
pub use xvt::Xvt;
