//! Submit sink: where validated values go once the form accepts them

mod handler;
mod traits;

pub use handler::{DelayedNoticeHandler, SubmitReceipt};
pub use traits::SubmitHandler;

#[cfg(test)]
pub use traits::MockSubmitHandler;
