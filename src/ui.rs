//! UI module for the gift presentation
//! Warm cream/terracotta aesthetic in light mode, cocoa/ember in dark mode
//!
//! # Architecture
//!
//! The UI is organized into layers:
//!
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Business-specific UI with Message handling
//! - **Effects** (`effects`): The ambient ember layer drawn behind the page
//! - **Pages** (`pages`): The single scrollable gift page

pub mod animation;
pub mod components;
pub mod effects;
pub mod pages;
pub mod theme;
pub mod widgets;
