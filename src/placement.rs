//! Where each component kind may be placed.
//!
//! | Position | Accepts |
//! |---|---|
//! | response (top level) | container, section, text, separator, action row |
//! | container child | section, text, separator, action row, file, gallery |
//! | section body | text |
//! | section accessory | button, thumbnail |
//! | action row | button |
//!
//! Sections, text, separators and action rows are valid both at the top level
//! and inside a container. Their constructors return a [`Placeable`], which
//! is a container child as-is and becomes a plain [`Component`] through
//! [`TopLevel::into_top_level`]. Response constructors run every item through
//! that conversion, so a `Placeable` never ends up in the component tree.

use std::ops::Deref;

use crate::options::{impl_option_lists, ActionRowOption, ContainerOption, SectionOption};
use crate::types::{
    ActionRow, Button, Component, Container, FileComponent, MediaGallery, Section, Separator,
    TextDisplay, Thumbnail,
};

// ===========================================================================
// Placeable
// ===========================================================================

/// A component that can go either at the top level of a response or inside a
/// container.
///
/// Derefs to the wrapped component for inspection.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Placeable<T>(T);

impl<T> Placeable<T> {
    pub(crate) const fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Unwrap into the plain component.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Placeable<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: Into<Component>> From<Placeable<T>> for Component {
    fn from(placeable: Placeable<T>) -> Self {
        placeable.into_inner().into()
    }
}

// ===========================================================================
// Container children
// ===========================================================================

/// A kind that may be nested inside a [`Container`].
pub trait ContainerChild {
    fn into_child(self) -> Component;
}

macro_rules! container_children {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ContainerChild for $ty {
                fn into_child(self) -> Component {
                    self.into()
                }
            }
        )*
    };
}

container_children!(
    Section,
    TextDisplay,
    Separator,
    ActionRow,
    FileComponent,
    MediaGallery,
);

impl<T: ContainerChild> ContainerChild for Placeable<T> {
    fn into_child(self) -> Component {
        self.into_inner().into_child()
    }
}

fn append_child(container: &mut Container, child: impl ContainerChild) {
    container.components.push(child.into_child());
}

impl<T: ContainerChild> ContainerOption for Placeable<T> {
    fn apply_to_container(self, container: &mut Container) {
        append_child(container, self);
    }
}

impl ContainerOption for FileComponent {
    fn apply_to_container(self, container: &mut Container) {
        append_child(container, self);
    }
}

impl ContainerOption for MediaGallery {
    fn apply_to_container(self, container: &mut Container) {
        append_child(container, self);
    }
}

// ===========================================================================
// Section children
// ===========================================================================

impl SectionOption for Placeable<TextDisplay> {
    fn apply_to_section(self, section: &mut Section) {
        section.components.push(self.into());
    }
}

/// A kind that may fill a section's accessory slot.
pub trait SectionAccessory {
    fn into_accessory(self) -> Component;
}

impl SectionAccessory for Button {
    fn into_accessory(self) -> Component {
        Component::Button(self)
    }
}

impl SectionAccessory for Thumbnail {
    fn into_accessory(self) -> Component {
        Component::Thumbnail(self)
    }
}

#[derive(Clone, Debug)]
struct Accessory(Component);

impl SectionOption for Accessory {
    fn apply_to_section(self, section: &mut Section) {
        section.accessory = Some(Box::new(self.0));
    }
}

/// Put a button or thumbnail to the right of the section's text. A later
/// accessory replaces an earlier one.
pub fn accessory(accessory: impl SectionAccessory) -> impl SectionOption + Clone {
    Accessory(accessory.into_accessory())
}

// ===========================================================================
// Action row children
// ===========================================================================

impl ActionRowOption for Button {
    fn apply_to_action_row(self, row: &mut ActionRow) {
        row.components.push(Component::Button(self));
    }
}

// ===========================================================================
// Top level
// ===========================================================================

/// A kind that may sit directly in a response's component list.
pub trait TopLevel {
    /// Convert into the plain component stored in the response, unwrapping
    /// a [`Placeable`].
    fn into_top_level(self) -> Component;
}

/// One or more top-level components, in order.
///
/// Implemented for every [`TopLevel`] kind and, like options, for `()`,
/// tuples, `Vec`, arrays and `Option`.
pub trait TopLevelComponents {
    fn collect_into(self, components: &mut Vec<Component>);
}

macro_rules! top_level {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TopLevel for $ty {
                fn into_top_level(self) -> Component {
                    self.into()
                }
            }

            impl TopLevelComponents for $ty {
                fn collect_into(self, components: &mut Vec<Component>) {
                    components.push(self.into_top_level());
                }
            }
        )*
    };
}

top_level!(Container, Section, TextDisplay, Separator, ActionRow);

impl<T: TopLevel> TopLevel for Placeable<T> {
    fn into_top_level(self) -> Component {
        self.into_inner().into_top_level()
    }
}

impl<T: TopLevel> TopLevelComponents for Placeable<T> {
    fn collect_into(self, components: &mut Vec<Component>) {
        components.push(self.into_top_level());
    }
}

impl_option_lists!(TopLevelComponents, Vec<Component>, collect_into);

// ===========================================================================
// Tests
// ===========================================================================
