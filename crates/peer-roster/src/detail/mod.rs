//! Peer detail view: section visibility rules and display text.

pub mod sections;
pub mod view;

pub use sections::{visible_sections, DetailSection, SectionRule, SECTION_RULES};
pub use view::{DataTransferText, IceCandidateText, PeerDetailView};
