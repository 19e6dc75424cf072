//! Small helpers shared by the binary host.

mod frame_clock;

pub use frame_clock::FrameClock;
