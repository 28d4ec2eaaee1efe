// UI and formatting module

pub mod prompts;

pub use prompts::success;
