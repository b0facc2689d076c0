//! Bootstrap components
//!
//! Simple components wrap a [`crate::Tag`] and serialize it directly; the
//! composites render an embedded template.

pub mod accordion;
pub mod alert;
pub mod badge;
pub mod button;
pub mod button_group;
pub mod card;
pub mod dropdown;
pub mod grid;
pub mod link;
pub mod list_group;
pub mod modal;
pub mod progress;

pub use accordion::Accordion;
pub use alert::Alert;
pub use badge::Badge;
pub use button::Button;
pub use button_group::{ButtonGroup, GroupButton};
pub use card::{Card, CardBody, CardFooter, CardHeader};
pub use dropdown::Dropdown;
pub use grid::{Cell, Row};
pub use link::{Link, LinkButton};
pub use list_group::{ListGroup, ListGroupItem};
pub use modal::{Modal, ModalBody, ModalFooter, ModalHeader, ModalPart};
pub use progress::ProgressBar;

/// Implements the attribute accessors and permission gate shared by
/// components whose state lives in a `tag: Tag` field.
macro_rules! tag_accessors {
    ($ty:ty) => {
        impl $ty {
            pub fn tag(&self) -> &$crate::Tag {
                &self.tag
            }

            pub fn attributes(&self) -> &$crate::Attributes {
                &self.tag.attrs
            }

            pub fn update_attribute<I, V>(&mut self, name: &str, values: I)
            where
                I: IntoIterator<Item = V>,
                V: Into<String>,
            {
                self.tag.update_attribute(name, values);
            }

            pub fn with_needs_perm(mut self, perm: impl Into<String>) -> Self {
                self.tag.needs_perm = Some(perm.into());
                self
            }
        }
    };
}
pub(crate) use tag_accessors;
