pub mod launcher;

pub use crate::domain::model::Outcome;
pub use crate::domain::ports::Delegate;
