//! Schema types for web part properties and option lists

mod option;
mod people;

pub use option::{ListCollection, ListInfo, SelectableOption, SourceItem};
pub use people::{PersonOrGroup, PrincipalType};
