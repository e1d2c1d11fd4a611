//! Document tree model: nodes, element kinds and formatting marks.

mod marks;
mod node;

pub use marks::{Mark, Marks};
pub use node::{Document, Element, ElementKind, HeadingLevel, Leaf, Node};
