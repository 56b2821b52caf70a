//! HTTP request handlers.

pub(crate) mod blog;
pub(crate) mod docs;
pub(crate) mod health;
pub(crate) mod navigation;
