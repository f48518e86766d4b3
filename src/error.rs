use thiserror::Error;

use crate::view::{LayoutId, ViewId};

/// Failures while bringing the activity up. None of these are recovered;
/// the platform entry point aborts on them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StartupError {
    #[error("no layout resource with id {0:?}")]
    MissingLayout(LayoutId),
    #[error("content view has not been set")]
    NoContentView,
    #[error("no text view with id {0:?} in layout {1:?}")]
    MissingView(ViewId, LayoutId),
}
