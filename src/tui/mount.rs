//! Terminal mount target.
//!
//! Holds the last tree mounted into each region until the next frame is
//! drawn. Mounting replaces the region's tree; nothing is diffed.

use log::debug;

use crate::view::{Mount, Node, Region};

#[derive(Default)]
pub struct TuiMount {
    pub event_list: Option<Node>,
    pub event_details: Option<Node>,
}

impl TuiMount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.event_list
            .as_ref()
            .and_then(Node::as_element)
            .map(|list| list.child_elements().count())
            .unwrap_or(0)
    }

    /// Runs the activation handler of the list row at `index`.
    pub fn activate_row(&self, index: usize) -> bool {
        let row = self
            .event_list
            .as_ref()
            .and_then(Node::as_element)
            .and_then(|list| list.child_elements().nth(index));
        match row {
            Some(row) => {
                debug!("Activating list row {}", index);
                row.activate()
            }
            None => false,
        }
    }
}

impl Mount for TuiMount {
    fn mount(&mut self, region: Region, tree: Node) {
        match region {
            Region::EventList => self.event_list = Some(tree),
            Region::EventDetails => self.event_details = Some(tree),
        }
    }
}
