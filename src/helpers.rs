//! Presentation helpers
//!
//! Four builder components sharing the same attribute-merge and
//! string-template mechanics: [`card::CardHelper`],
//! [`description::DescriptionHelper`], [`nav::NavHelper`] and
//! [`table::TableHelper`]. The stateful helpers accumulate entries through
//! mutator calls and consume their whole state on `render`, so one
//! instance can serve several independent render passes in a view.

pub mod card;
pub mod description;
pub mod nav;
pub mod table;
