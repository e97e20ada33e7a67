//! Domain layer - Tag grammar and plugin logic

pub mod accels;
pub mod pager;
pub mod tags;
pub mod widget;

pub use accels::{Bindings, SavedAccels};
pub use pager::{PageDimension, PageDirection, Pager, ScrollRange, ZoomMode};
pub use tags::TaggedName;
