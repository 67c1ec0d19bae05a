//! The fake shell itself: key acceptance, line editing, and command dispatch.
//!
//! Nothing in here knows about the terminal. The [`app`](crate::app) layer
//! translates crossterm events into [`KeyStroke`]s and the [`ui`](crate::ui)
//! layer renders a [`Session`].

pub mod dispatch;
pub mod keys;
pub mod line;
pub mod page;
pub mod session;

pub use dispatch::Profile;
pub use keys::{Key, KeyStroke, Target};
pub use page::{Element, ElementId, Page, Region};
pub use session::{Entry, Outcome, Session};
