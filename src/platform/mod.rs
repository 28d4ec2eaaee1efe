// OS-facing I/O primitives used by the daemon

pub mod display;
pub mod fifo;

pub use display::{display_for, CommandDisplay, NoDisplay};
pub use fifo::FifoDirectory;
