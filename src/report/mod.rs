//! Reporting collaborators
//!
//! The polling loop hands consumed articles and failed pages to a
//! [`ReportSink`]; this module provides the trait and the two shipped
//! implementations: console printing and the licensed-article click-through
//! decorator.

mod click;
mod console;
mod traits;

pub use click::ClickReport;
pub use console::ConsoleReport;
pub use traits::ReportSink;
