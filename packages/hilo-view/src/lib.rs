//! The text display node of the Hilo scene graph.
//!
//! A [`Text`] node owns its string and style, lays the string out into lines with
//! [`hilo_text`], and draws through whichever [`Renderer`] the current frame uses. Once its
//! drawing has been captured with [`CacheCapable::cache`], immediate-surface frames blit the
//! captured image instead of laying out and drawing again, until a text-affecting property
//! changes.
//!
//! Font changes are special: they also reset the node's glyph width cache and schedule a
//! re-capture on the [`TaskQueue`], so several property writes made in the same turn cost a
//! single layout pass.

mod cache;
mod color;
mod config;
mod error;
mod render;
mod scheduler;
mod text;
mod view;

pub use cache::{BitmapCache, CacheCapable};
pub use config::TextConfig;
pub use error::{TextError, TextResult};
pub use hilo_text::{DrawLine, LayoutResult, TextAlign, TextStyle, TextVAlign};
pub use render::{Drawable, Renderer};
pub use scheduler::TaskQueue;
pub use text::{Text, TextHandle};
pub use view::{ViewBase, next_uid};
