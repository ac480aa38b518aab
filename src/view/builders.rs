//! # View Builders
//!
//! Pure functions from a state snapshot to a node tree. They allocate a
//! fresh tree on every call and perform no I/O; the only way out is the
//! `on_select` callback injected by the caller.

use std::rc::Rc;

use crate::repository::{Event, EventId};
use crate::view::node::{Element, Node, Tag, TextStyle};

pub const PLACEHOLDER_TEXT: &str = "Please select an event to learn more.";

/// Emphasis for the row of the selected event.
pub const ACTIVE_ROW_STYLE: TextStyle = TextStyle {
    italic: true,
    bold: true,
};

/// Invoked with the id of the row the user activated.
pub type SelectCallback = Rc<dyn Fn(EventId)>;

/// `ul.lineup` with one `li` per event, in order.
///
/// A row is active iff `selected` is present and has the row's id. Empty
/// `events` yields an empty container, not a placeholder.
pub fn build_event_list(
    events: &[Event],
    selected: Option<&Event>,
    on_select: &SelectCallback,
) -> Node {
    let selected_id = selected.map(|event| event.id);

    let rows = events.iter().map(|event| {
        let id = event.id;
        let on_select = Rc::clone(on_select);
        let mut row = Element::new(Tag::Li)
            .text(event.name.as_str())
            .on_activate(Rc::new(move || on_select(id)));
        if selected_id == Some(id) {
            row = row.style(ACTIVE_ROW_STYLE);
        }
        Node::from(row)
    });

    Element::new(Tag::Ul).class("lineup").children(rows).into()
}

/// Detail panel for the selected event, or the placeholder paragraph.
///
/// Order: title, date, location (emphasized), description, guests. The guest
/// list is omitted entirely when absent or empty.
pub fn build_event_details(selected: Option<&Event>) -> Node {
    let Some(event) = selected else {
        return Element::new(Tag::P).text(PLACEHOLDER_TEXT).into();
    };

    let mut panel = Element::new(Tag::Section)
        .class("event")
        .child(Element::new(Tag::H3).text(format!("{} #{}", event.name, event.id)))
        .child(Element::new(Tag::P).text(event.date.as_str()))
        .child(Element::new(Tag::P).child(Element::new(Tag::Em).text(event.location.as_str())))
        .child(Element::new(Tag::P).text(event.description.as_str()));

    if let Some(guests) = event.guest_list() {
        let items = guests
            .iter()
            .map(|guest| Node::from(Element::new(Tag::Li).text(guest.as_str())));
        panel = panel.child(Element::new(Tag::Ul).class("guests").children(items));
    }

    panel.into()
}
