//! Seams to external collaborators.

mod annotator;

pub use annotator::{Annotator, DisabledAnnotator};
