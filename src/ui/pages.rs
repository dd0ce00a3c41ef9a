//! Pages module
//! The gift is one scrollable page

pub mod wrapped;

pub use wrapped::SCROLL_ID;
