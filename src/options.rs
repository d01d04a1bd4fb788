//! Options: small values that configure one field of a component while it is
//! being built.
//!
//! Each component kind has its own capability trait ([`ContainerOption`],
//! [`ButtonOption`], ...). An option implements the traits of every kind it
//! makes sense for, and its constructor returns exactly that intersection, so
//! handing an option to the wrong constructor is a type error:
//!
//! ```ignore
//! container(spoiler());                   // ok
//! thumbnail(url, "alt", spoiler());       // ok, same option
//! button("Go", "go", spoiler());          // does not compile
//! link_button("Docs", url, style(ActionStyle::Danger)); // does not compile
//! ```
//!
//! Constructors take a single `impl XOption`. Besides individual options,
//! every capability is implemented for lists of options: `()` for none,
//! tuples (applied left to right), `Vec`, arrays and `Option` (where `None`
//! applies nothing).

use crate::types::{
    ActionRow, Button, ButtonStyle, ComponentEmoji, Container, FileComponent, Section, Separator,
    SeparatorSpacingSize, Thumbnail, UnknownCodeError,
};

// ===========================================================================
// Capabilities
// ===========================================================================

/// Configures a [`Container`].
pub trait ContainerOption {
    fn apply_to_container(self, container: &mut Container);
}

/// Configures a [`Section`].
pub trait SectionOption {
    fn apply_to_section(self, section: &mut Section);
}

/// Configures a [`Separator`].
pub trait SeparatorOption {
    fn apply_to_separator(self, separator: &mut Separator);
}

/// Adds to an [`ActionRow`].
pub trait ActionRowOption {
    fn apply_to_action_row(self, row: &mut ActionRow);
}

/// Configures a button built with [`button`](crate::components::button).
pub trait ButtonOption {
    fn apply_to_button(self, button: &mut Button);
}

/// Configures a button built with
/// [`link_button`](crate::components::link_button).
///
/// Separate from [`ButtonOption`] because a link button's style is fixed.
pub trait LinkButtonOption {
    fn apply_to_link_button(self, button: &mut Button);
}

/// Configures a [`Thumbnail`].
pub trait ThumbnailOption {
    fn apply_to_thumbnail(self, thumbnail: &mut Thumbnail);
}

/// Configures a [`FileComponent`].
pub trait FileOption {
    fn apply_to_file(self, file: &mut FileComponent);
}

// ---------------------------------------------------------------------------
// Option lists
// ---------------------------------------------------------------------------

macro_rules! impl_option_lists {
    ($trait:ident, $target:ty, $method:ident) => {
        impl $trait for () {
            fn $method(self, _: &mut $target) {}
        }

        impl<O: $trait> $trait for Option<O> {
            fn $method(self, target: &mut $target) {
                if let Some(option) = self {
                    option.$method(target);
                }
            }
        }

        impl<O: $trait> $trait for Vec<O> {
            fn $method(self, target: &mut $target) {
                for option in self {
                    option.$method(target);
                }
            }
        }

        impl<O: $trait, const N: usize> $trait for [O; N] {
            fn $method(self, target: &mut $target) {
                for option in self {
                    option.$method(target);
                }
            }
        }

        impl_option_lists!(@tuples $trait, $target, $method; O1, O2, O3, O4, O5, O6, O7, O8, O9, O10, O11, O12);
    };
    (@tuples $trait:ident, $target:ty, $method:ident; $head:ident $(, $tail:ident)*) => {
        impl<$head: $trait $(, $tail: $trait)*> $trait for ($head, $($tail,)*) {
            #[allow(non_snake_case)]
            fn $method(self, target: &mut $target) {
                let ($head, $($tail,)*) = self;
                $head.$method(target);
                $($tail.$method(target);)*
            }
        }

        impl_option_lists!(@tuples $trait, $target, $method; $($tail),*);
    };
    (@tuples $trait:ident, $target:ty, $method:ident;) => {};
}

pub(crate) use impl_option_lists;

impl_option_lists!(ContainerOption, Container, apply_to_container);
impl_option_lists!(SectionOption, Section, apply_to_section);
impl_option_lists!(SeparatorOption, Separator, apply_to_separator);
impl_option_lists!(ActionRowOption, ActionRow, apply_to_action_row);
impl_option_lists!(ButtonOption, Button, apply_to_button);
impl_option_lists!(LinkButtonOption, Button, apply_to_link_button);
impl_option_lists!(ThumbnailOption, Thumbnail, apply_to_thumbnail);
impl_option_lists!(FileOption, FileComponent, apply_to_file);

// ===========================================================================
// Container options
// ===========================================================================

#[derive(Clone, Copy, Debug)]
struct AccentColor(u32);

impl ContainerOption for AccentColor {
    fn apply_to_container(self, container: &mut Container) {
        container.accent_color = Some(self.0);
    }
}

/// Set the container's accent colour (`0xRRGGBB`).
pub fn accent_color(color: u32) -> impl ContainerOption + Copy {
    AccentColor(color)
}

// ===========================================================================
// Spoiler (container, thumbnail, file)
// ===========================================================================

#[derive(Clone, Copy, Debug)]
struct Spoiler;

impl ContainerOption for Spoiler {
    fn apply_to_container(self, container: &mut Container) {
        container.spoiler = true;
    }
}

impl ThumbnailOption for Spoiler {
    fn apply_to_thumbnail(self, thumbnail: &mut Thumbnail) {
        thumbnail.spoiler = true;
    }
}

impl FileOption for Spoiler {
    fn apply_to_file(self, file: &mut FileComponent) {
        file.spoiler = true;
    }
}

/// Blur the content until clicked. Applies to containers, thumbnails and
/// files.
pub fn spoiler() -> impl ContainerOption + ThumbnailOption + FileOption + Copy {
    Spoiler
}

// ===========================================================================
// Separator options
// ===========================================================================

#[derive(Clone, Copy, Debug)]
struct Divider(bool);

impl SeparatorOption for Divider {
    fn apply_to_separator(self, separator: &mut Separator) {
        separator.divider = Some(self.0);
    }
}

/// Whether the separator draws a visible line.
pub fn divider(show: bool) -> impl SeparatorOption + Copy {
    Divider(show)
}

#[derive(Clone, Copy, Debug)]
struct Spacing(SeparatorSpacingSize);

impl SeparatorOption for Spacing {
    fn apply_to_separator(self, separator: &mut Separator) {
        separator.spacing = Some(self.0);
    }
}

/// How much padding the separator adds.
pub fn spacing(size: SeparatorSpacingSize) -> impl SeparatorOption + Copy {
    Spacing(size)
}

// ===========================================================================
// Button options
// ===========================================================================

/// Style of a non-link button.
///
/// There is no link variant; [`ButtonStyle::Link`] is only ever set by
/// [`link_button`](crate::components::link_button).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ActionStyle {
    /// Blurple.
    Primary,
    /// Grey.
    Secondary,
    /// Green.
    Success,
    /// Red.
    Danger,
}

impl From<ActionStyle> for ButtonStyle {
    fn from(style: ActionStyle) -> Self {
        match style {
            ActionStyle::Primary => Self::Primary,
            ActionStyle::Secondary => Self::Secondary,
            ActionStyle::Success => Self::Success,
            ActionStyle::Danger => Self::Danger,
        }
    }
}

impl TryFrom<u8> for ActionStyle {
    type Error = UnknownCodeError;

    /// Convert a raw style code: 1=Primary, 2=Secondary, 3=Success, 4=Danger.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Primary),
            2 => Ok(Self::Secondary),
            3 => Ok(Self::Success),
            4 => Ok(Self::Danger),
            5 => Err(UnknownCodeError::link_style(value)),
            other => Err(UnknownCodeError::unknown("button style", other)),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Style(ActionStyle);

impl ButtonOption for Style {
    fn apply_to_button(self, button: &mut Button) {
        button.style = self.0.into();
    }
}

/// Set the button's visual style. Not available on link buttons.
pub fn style(style: ActionStyle) -> impl ButtonOption + Copy {
    Style(style)
}

#[derive(Clone, Debug)]
struct Emoji(ComponentEmoji);

impl ButtonOption for Emoji {
    fn apply_to_button(self, button: &mut Button) {
        button.emoji = Some(self.0);
    }
}

impl LinkButtonOption for Emoji {
    fn apply_to_link_button(self, button: &mut Button) {
        button.emoji = Some(self.0);
    }
}

/// Show an emoji next to the button's label.
pub fn emoji(emoji: ComponentEmoji) -> impl ButtonOption + LinkButtonOption + Clone {
    Emoji(emoji)
}

#[derive(Clone, Copy, Debug)]
struct Disabled;

impl ButtonOption for Disabled {
    fn apply_to_button(self, button: &mut Button) {
        button.disabled = true;
    }
}

impl LinkButtonOption for Disabled {
    fn apply_to_link_button(self, button: &mut Button) {
        button.disabled = true;
    }
}

/// Grey the button out so it can't be clicked.
pub fn disabled() -> impl ButtonOption + LinkButtonOption + Copy {
    Disabled
}

// ===========================================================================
// Tests
// ===========================================================================
