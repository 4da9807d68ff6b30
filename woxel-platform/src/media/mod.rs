//! Media introspection bridge.
//!
//! Bounded-cost, best-effort generation of preview imagery and MIME
//! classification. Every call is synchronous on the caller's thread and
//! fail-silent: unreadable paths, unsupported formats, and decode failures
//! all collapse to an absent result, never an error. Callers fall back to a
//! generic file icon or an "unknown" type.

mod category;
mod inflight;
mod mime;
mod thumbnail;
mod video;

pub use category::FileCategory;
pub use inflight::InFlightSet;
pub use mime::{ContentHandle, ContentResolver, SniffingContentResolver, resolve_mime};
pub use thumbnail::{Thumbnail, thumbnail_for_image};
pub use video::thumbnail_for_video;
