//! Reply generation seam: the external AI collaborator contract.

mod box_generator;
mod generator;

pub use box_generator::{BoxReplyGenerator, ReplyGeneratorDyn};
pub use generator::ReplyGenerator;
