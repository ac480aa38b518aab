//! # Views
//!
//! Node trees derived from [`AppState`](crate::core::state::AppState) and the
//! seam where they leave the crate.
//!
//! ```text
//! AppState ──► builders ──► Node ──► Mount (terminal | HTML | test recorder)
//! ```
//!
//! - [`node`]: the document model
//! - [`builders`]: `build_event_list`, `build_event_details`
//! - [`html`]: markup serializer and `HtmlPage` mount

pub mod builders;
pub mod html;
pub mod node;

pub use builders::{SelectCallback, build_event_details, build_event_list};
pub use node::{Element, Handler, Node, Tag, TextStyle};

pub const PAGE_TITLE: &str = "Party Planner";

/// The two dynamic areas of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    EventList,
    EventDetails,
}

impl Region {
    pub fn title(self) -> &'static str {
        match self {
            Region::EventList => "Upcoming Parties",
            Region::EventDetails => "Party Details",
        }
    }
}

/// A display surface that can host a tree in a region.
///
/// Mounting replaces whatever the region held before.
pub trait Mount {
    fn mount(&mut self, region: Region, tree: Node);
}
