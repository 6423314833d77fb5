//! Platform-agnostic logic behind the page. Nothing in here touches the DOM.

pub mod countdown;
pub mod error;
pub mod format;
pub mod image;
pub mod site;
pub mod subscription;
pub mod timing;
