//! Components v2 message components.
//!
//! Plain data only: every struct here is exactly what Discord expects on the
//! wire for one node of a message's component tree. Construction logic lives
//! in [`crate::components`]; these types carry no behaviour beyond
//! serialization.
//!
//! Referenced from the Discord docs:
//! <https://discord.com/developers/docs/components/reference>

use serde::{Serialize, Serializer};
use serde_repr::Serialize_repr;

use crate::types::id::{marker::EmojiMarker, Id};
use crate::types::util::{is_false, UnknownCodeError};

// ---------------------------------------------------------------------------
// Component type codes
// ---------------------------------------------------------------------------

/// Numeric `type` code of a component.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum ComponentType {
    ActionRow = 1,
    Button = 2,
    Section = 9,
    TextDisplay = 10,
    Thumbnail = 11,
    MediaGallery = 12,
    File = 13,
    Separator = 14,
    Container = 17,
}

// ---------------------------------------------------------------------------
// The component enum
// ---------------------------------------------------------------------------

/// One node of a message's component tree.
///
/// Serialized as the variant's fields with an integer `"type"` key alongside
/// them, matching Discord's flat component objects.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Component {
    ActionRow(ActionRow),
    Button(Button),
    Container(Container),
    File(FileComponent),
    MediaGallery(MediaGallery),
    Section(Section),
    Separator(Separator),
    TextDisplay(TextDisplay),
    Thumbnail(Thumbnail),
}

impl Component {
    /// Wire type code of this component.
    pub const fn kind(&self) -> ComponentType {
        match self {
            Self::ActionRow(_) => ComponentType::ActionRow,
            Self::Button(_) => ComponentType::Button,
            Self::Container(_) => ComponentType::Container,
            Self::File(_) => ComponentType::File,
            Self::MediaGallery(_) => ComponentType::MediaGallery,
            Self::Section(_) => ComponentType::Section,
            Self::Separator(_) => ComponentType::Separator,
            Self::TextDisplay(_) => ComponentType::TextDisplay,
            Self::Thumbnail(_) => ComponentType::Thumbnail,
        }
    }
}

impl Serialize for Component {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct Tagged<'a, T> {
            #[serde(rename = "type")]
            kind: ComponentType,
            #[serde(flatten)]
            inner: &'a T,
        }

        fn tagged<T: Serialize, S: Serializer>(
            kind: ComponentType,
            inner: &T,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            Tagged { kind, inner }.serialize(serializer)
        }

        let kind = self.kind();
        match self {
            Self::ActionRow(inner) => tagged(kind, inner, serializer),
            Self::Button(inner) => tagged(kind, inner, serializer),
            Self::Container(inner) => tagged(kind, inner, serializer),
            Self::File(inner) => tagged(kind, inner, serializer),
            Self::MediaGallery(inner) => tagged(kind, inner, serializer),
            Self::Section(inner) => tagged(kind, inner, serializer),
            Self::Separator(inner) => tagged(kind, inner, serializer),
            Self::TextDisplay(inner) => tagged(kind, inner, serializer),
            Self::Thumbnail(inner) => tagged(kind, inner, serializer),
        }
    }
}

macro_rules! impl_into_component {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Component {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_into_component! {
    ActionRow => ActionRow,
    Button => Button,
    Container => Container,
    FileComponent => File,
    MediaGallery => MediaGallery,
    Section => Section,
    Separator => Separator,
    TextDisplay => TextDisplay,
    Thumbnail => Thumbnail,
}

// ---------------------------------------------------------------------------
// Layout components
// ---------------------------------------------------------------------------

/// A horizontal row of interactive components.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ActionRow {
    pub components: Vec<Component>,
}

/// A visually grouped, optionally accented box of child components.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Container {
    /// RGB colour of the container's left border.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<u32>,
    pub components: Vec<Component>,
    #[serde(skip_serializing_if = "is_false")]
    pub spoiler: bool,
}

/// Text components with a single accessory to their right.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Section {
    pub components: Vec<Component>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessory: Option<Box<Component>>,
}

/// Vertical padding, optionally with a visible dividing line.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Separator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divider: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SeparatorSpacingSize>,
}

/// Amount of padding a [`Separator`] adds.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum SeparatorSpacingSize {
    Small = 1,
    Large = 2,
}

impl TryFrom<u8> for SeparatorSpacingSize {
    type Error = UnknownCodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Small),
            2 => Ok(Self::Large),
            other => Err(UnknownCodeError::unknown("separator spacing", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Content components
// ---------------------------------------------------------------------------

/// Markdown-formatted text.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct TextDisplay {
    pub content: String,
}

/// Small image, used as a section accessory.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Thumbnail {
    pub media: UnfurledMediaItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub spoiler: bool,
}

/// An attached file referenced by URL (usually `attachment://name`).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct FileComponent {
    pub file: UnfurledMediaItem,
    #[serde(skip_serializing_if = "is_false")]
    pub spoiler: bool,
}

/// Grid of images or videos.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct MediaGallery {
    pub items: Vec<MediaGalleryItem>,
}

/// One entry of a [`MediaGallery`].
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct MediaGalleryItem {
    pub media: UnfurledMediaItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub spoiler: bool,
}

/// Media reference resolved by Discord. Only the URL is sent by clients.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct UnfurledMediaItem {
    pub url: String,
}

// ---------------------------------------------------------------------------
// Interactive components
// ---------------------------------------------------------------------------

/// Clickable button.
///
/// Link buttons carry a `url` and no `custom_id`; every other style carries a
/// `custom_id` and no `url`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Button {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<ComponentEmoji>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub style: ButtonStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Visual style of a [`Button`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum ButtonStyle {
    Primary = 1,
    Secondary = 2,
    Success = 3,
    Danger = 4,
    Link = 5,
}

/// Emoji shown on a button.
///
/// Unicode emoji only set `name`; custom emoji set `id` and usually `name`.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct ComponentEmoji {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id<EmojiMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub animated: bool,
}

impl ComponentEmoji {
    /// A standard unicode emoji, e.g. `"🔥"`.
    pub fn unicode(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            animated: false,
        }
    }

    /// A guild's custom emoji.
    pub fn custom(id: Id<EmojiMarker>, name: impl Into<String>, animated: bool) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
            animated,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serde_test::{assert_ser_tokens, Token};

    #[test]
    fn button_style_serializes_as_integer() {
        assert_ser_tokens(&ButtonStyle::Success, &[Token::U8(3)]);
        assert_ser_tokens(&ButtonStyle::Link, &[Token::U8(5)]);
    }

    #[test]
    fn component_type_codes() {
        assert_ser_tokens(&ComponentType::Container, &[Token::U8(17)]);
        assert_ser_tokens(&ComponentType::Separator, &[Token::U8(14)]);
    }

    #[test]
    fn component_kind_matches_variant() {
        let text: Component = TextDisplay {
            content: "hi".into(),
        }
        .into();
        assert_eq!(text.kind(), ComponentType::TextDisplay);

        let file: Component = FileComponent::default().into();
        assert_eq!(file.kind(), ComponentType::File);
    }

    #[test]
    fn component_serializes_with_type_tag() {
        let component = Component::TextDisplay(TextDisplay {
            content: "## Hello".into(),
        });
        let value = serde_json::to_value(&component).unwrap();
        assert_eq!(value, json!({ "type": 10, "content": "## Hello" }));
    }

    #[test]
    fn nested_components_serialize_recursively() {
        let container = Component::Container(Container {
            accent_color: Some(0x5865F2),
            components: vec![Component::Separator(Separator {
                divider: Some(true),
                spacing: Some(SeparatorSpacingSize::Large),
            })],
            spoiler: false,
        });
        let value = serde_json::to_value(&container).unwrap();
        assert_eq!(
            value,
            json!({
                "type": 17,
                "accent_color": 0x5865F2,
                "components": [{ "type": 14, "divider": true, "spacing": 2 }],
            })
        );
    }

    #[test]
    fn link_button_omits_custom_id() {
        let button = Button {
            custom_id: None,
            disabled: false,
            emoji: None,
            label: Some("Docs".into()),
            style: ButtonStyle::Link,
            url: Some("https://discord.com".into()),
        };
        let value = serde_json::to_value(Component::Button(button)).unwrap();
        assert_eq!(
            value,
            json!({ "type": 2, "label": "Docs", "style": 5, "url": "https://discord.com" })
        );
    }

    #[test]
    fn empty_description_is_still_sent() {
        let thumbnail = Thumbnail {
            media: UnfurledMediaItem {
                url: "https://example.com/a.png".into(),
            },
            description: Some(String::new()),
            spoiler: false,
        };
        let value = serde_json::to_value(&thumbnail).unwrap();
        assert_eq!(value["description"], json!(""));
    }

    #[test]
    fn custom_emoji_id_serializes_as_string() {
        let emoji = ComponentEmoji::custom(Id::new(41771983429993937), "LUL", true);
        let value = serde_json::to_value(&emoji).unwrap();
        assert_eq!(
            value,
            json!({ "id": "41771983429993937", "name": "LUL", "animated": true })
        );
    }

    #[test]
    fn separator_spacing_from_code() {
        assert_eq!(
            SeparatorSpacingSize::try_from(2).unwrap(),
            SeparatorSpacingSize::Large
        );
        assert!(SeparatorSpacingSize::try_from(3).is_err());
    }
}
