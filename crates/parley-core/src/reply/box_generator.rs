//! BoxReplyGenerator -- object-safe dynamic dispatch wrapper for
//! ReplyGenerator.
//!
//! 1. Define an object-safe `ReplyGeneratorDyn` trait with boxed futures
//! 2. Blanket-impl `ReplyGeneratorDyn` for all `T: ReplyGenerator`
//! 3. `BoxReplyGenerator` wraps `Box<dyn ReplyGeneratorDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use parley_types::error::ReplyError;

use super::generator::ReplyGenerator;

/// Object-safe version of [`ReplyGenerator`] with boxed futures.
///
/// This trait exists solely to enable dynamic dispatch
/// (`dyn ReplyGeneratorDyn`). A blanket implementation is provided for all
/// types implementing `ReplyGenerator`.
pub trait ReplyGeneratorDyn: Send + Sync {
    fn generate_reply_boxed<'a>(
        &'a self,
        transcript: &'a str,
        latest_message: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, ReplyError>> + Send + 'a>>;
}

/// Blanket implementation: any `ReplyGenerator` automatically implements
/// `ReplyGeneratorDyn`.
impl<T: ReplyGenerator> ReplyGeneratorDyn for T {
    fn generate_reply_boxed<'a>(
        &'a self,
        transcript: &'a str,
        latest_message: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, ReplyError>> + Send + 'a>> {
        Box::pin(self.generate_reply(transcript, latest_message))
    }
}

/// Type-erased reply generator for runtime backend selection.
///
/// Since `ReplyGenerator` uses RPITIT, it cannot be used as a trait object
/// directly. `BoxReplyGenerator` provides an equivalent method that
/// delegates to the inner `ReplyGeneratorDyn` trait object.
pub struct BoxReplyGenerator {
    inner: Box<dyn ReplyGeneratorDyn + Send + Sync>,
}

impl BoxReplyGenerator {
    /// Wrap a concrete `ReplyGenerator` in a type-erased box.
    pub fn new<T: ReplyGenerator + 'static>(generator: T) -> Self {
        Self {
            inner: Box::new(generator),
        }
    }

    /// Generate a reply from the transcript and the latest user message.
    pub async fn generate_reply(
        &self,
        transcript: &str,
        latest_message: &str,
    ) -> Result<String, ReplyError> {
        self.inner
            .generate_reply_boxed(transcript, latest_message)
            .await
    }
}
