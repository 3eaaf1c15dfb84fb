#![expect(clippy::missing_docs_in_private_items)]

pub mod api;
pub mod health;
pub mod index;
