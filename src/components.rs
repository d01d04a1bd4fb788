//! Component constructors.
//!
//! Each constructor takes its required payload (label, URL, content) plus an
//! option list, starts from Discord's defaults, and applies the options in
//! order. Later options overwrite earlier ones for single-valued fields; child
//! lists accumulate. Inputs are passed through untouched: nothing here trims,
//! validates or rewrites strings.

use crate::options::{
    ActionRowOption, ButtonOption, ContainerOption, FileOption, LinkButtonOption, SectionOption,
    SeparatorOption, ThumbnailOption,
};
use crate::placement::Placeable;
use crate::types::{
    ActionRow, Button, ButtonStyle, Container, FileComponent, MediaGallery, MediaGalleryItem,
    Section, Separator, SeparatorSpacingSize, TextDisplay, Thumbnail, UnfurledMediaItem,
};

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Build a container.
///
/// No accent colour and not a spoiler unless the options say otherwise.
/// Children (sections, text, separators, action rows, files, galleries) are
/// options too and keep the order they're given in.
pub fn container(options: impl ContainerOption) -> Container {
    let mut container = Container {
        accent_color: None,
        components: Vec::new(),
        spoiler: false,
    };
    options.apply_to_container(&mut container);
    container
}

/// Build a section from text children and an optional
/// [`accessory`](crate::placement::accessory).
pub fn section(options: impl SectionOption) -> Placeable<Section> {
    let mut section = Section {
        components: Vec::new(),
        accessory: None,
    };
    options.apply_to_section(&mut section);
    Placeable::new(section)
}

/// Build a separator: visible divider with small spacing by default.
pub fn separator(options: impl SeparatorOption) -> Placeable<Separator> {
    let mut separator = Separator {
        divider: Some(true),
        spacing: Some(SeparatorSpacingSize::Small),
    };
    options.apply_to_separator(&mut separator);
    Placeable::new(separator)
}

/// Build an action row of buttons.
///
/// Buttons aren't de-duplicated; repeated custom IDs are the caller's
/// business.
pub fn action_row(buttons: impl ActionRowOption) -> Placeable<ActionRow> {
    let mut row = ActionRow {
        components: Vec::new(),
    };
    buttons.apply_to_action_row(&mut row);
    Placeable::new(row)
}

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

/// Build a markdown text block. Usable at the top level, in a container and
/// in a section.
pub fn text(content: impl Into<String>) -> Placeable<TextDisplay> {
    Placeable::new(TextDisplay {
        content: content.into(),
    })
}

/// Build a thumbnail for a section accessory.
///
/// The description is always sent, even when empty.
pub fn thumbnail(
    url: impl Into<String>,
    description: impl Into<String>,
    options: impl ThumbnailOption,
) -> Thumbnail {
    let mut thumbnail = Thumbnail {
        media: UnfurledMediaItem { url: url.into() },
        description: Some(description.into()),
        spoiler: false,
    };
    options.apply_to_thumbnail(&mut thumbnail);
    thumbnail
}

/// Build a file component. `url` is typically `attachment://<filename>`.
pub fn file(url: impl Into<String>, options: impl FileOption) -> FileComponent {
    let mut file = FileComponent {
        file: UnfurledMediaItem { url: url.into() },
        spoiler: false,
    };
    options.apply_to_file(&mut file);
    file
}

/// One image or video for a [`gallery`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MediaItem {
    pub url: String,
    pub description: String,
    pub spoiler: bool,
}

/// Describe a gallery entry.
pub fn media(url: impl Into<String>, description: impl Into<String>, spoiler: bool) -> MediaItem {
    MediaItem {
        url: url.into(),
        description: description.into(),
        spoiler,
    }
}

/// Build a media gallery, one entry per item, in order.
pub fn gallery(items: impl IntoIterator<Item = MediaItem>) -> MediaGallery {
    let items = items
        .into_iter()
        .map(|item| MediaGalleryItem {
            media: UnfurledMediaItem { url: item.url },
            description: Some(item.description),
            spoiler: item.spoiler,
        })
        .collect();
    MediaGallery { items }
}

// ---------------------------------------------------------------------------
// Interactive
// ---------------------------------------------------------------------------

/// Build an interactive button.
///
/// Primary style, enabled and without emoji unless the options say
/// otherwise. `custom_id` comes back in the component interaction when the
/// button is clicked.
pub fn button(
    label: impl Into<String>,
    custom_id: impl Into<String>,
    options: impl ButtonOption,
) -> Button {
    let mut button = Button {
        custom_id: Some(custom_id.into()),
        disabled: false,
        emoji: None,
        label: Some(label.into()),
        style: ButtonStyle::Primary,
        url: None,
    };
    options.apply_to_button(&mut button);
    button
}

/// Build a button that opens `url`.
///
/// Link buttons have no custom ID and always use [`ButtonStyle::Link`].
pub fn link_button(
    label: impl Into<String>,
    url: impl Into<String>,
    options: impl LinkButtonOption,
) -> Button {
    let mut button = Button {
        custom_id: None,
        disabled: false,
        emoji: None,
        label: Some(label.into()),
        style: ButtonStyle::Link,
        url: Some(url.into()),
    };
    options.apply_to_link_button(&mut button);
    button
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{
        accent_color, disabled, divider, emoji, spacing, spoiler, style, ActionStyle,
    };
    use crate::placement::accessory;
    use crate::response::response;
    use crate::types::{Component, ComponentEmoji, ComponentType};

    #[test]
    fn empty_container() {
        let c = container(());
        assert!(c.accent_color.is_none());
        assert!(!c.spoiler);
        assert!(c.components.is_empty());
    }

    #[test]
    fn container_with_everything() {
        let c = container((
            accent_color(123),
            spoiler(),
            section(()),
            separator(()),
            text("body"),
            action_row(button("Go", "go", ())),
            file("attachment://a.txt", ()),
            gallery([media("https://example.com/1.png", "one", false)]),
        ));

        assert_eq!(c.accent_color, Some(123));
        assert!(c.spoiler);
        let kinds: Vec<_> = c.components.iter().map(Component::kind).collect();
        assert_eq!(
            kinds,
            [
                ComponentType::Section,
                ComponentType::Separator,
                ComponentType::TextDisplay,
                ComponentType::ActionRow,
                ComponentType::File,
                ComponentType::MediaGallery,
            ]
        );
    }

    #[test]
    fn later_accent_color_wins() {
        let c = container((accent_color(1), accent_color(0xFF6600)));
        assert_eq!(c.accent_color, Some(0xFF6600));
    }

    #[test]
    fn empty_section() {
        let s = section(());
        assert!(s.components.is_empty());
        assert!(s.accessory.is_none());
    }

    #[test]
    fn section_text_in_order() {
        let s = section((text("first"), text("second")));
        assert_eq!(
            s.components,
            [
                Component::TextDisplay(TextDisplay {
                    content: "first".into()
                }),
                Component::TextDisplay(TextDisplay {
                    content: "second".into()
                }),
            ]
        );
    }

    #[test]
    fn section_accessory_thumbnail() {
        let s = section((
            text("hello"),
            accessory(thumbnail("http://example.com/image.png", "test image", ())),
        ));
        match s.accessory.as_deref() {
            Some(Component::Thumbnail(t)) => {
                assert_eq!(t.media.url, "http://example.com/image.png");
                assert_eq!(t.description.as_deref(), Some("test image"));
            }
            other => panic!("expected thumbnail accessory, got {other:?}"),
        }
    }

    #[test]
    fn text_keeps_content_verbatim() {
        assert_eq!(text("## Hello\nWorld").content, "## Hello\nWorld");
        assert_eq!(text("").content, "");
        assert_eq!(text("  padded  ").content, "  padded  ");
    }

    #[test]
    fn default_separator() {
        let s = separator(());
        assert_eq!(s.divider, Some(true));
        assert_eq!(s.spacing, Some(SeparatorSpacingSize::Small));
    }

    #[test]
    fn separator_options_are_independent() {
        let s = separator(divider(false));
        assert_eq!(s.divider, Some(false));
        assert_eq!(s.spacing, Some(SeparatorSpacingSize::Small));

        let s = separator(spacing(SeparatorSpacingSize::Large));
        assert_eq!(s.divider, Some(true));
        assert_eq!(s.spacing, Some(SeparatorSpacingSize::Large));
    }

    #[test]
    fn action_row_keeps_call_order() {
        let row = action_row((
            button("One", "one", ()),
            link_button("Two", "https://example.com", ()),
        ));
        assert_eq!(row.components.len(), 2);
        match (&row.components[0], &row.components[1]) {
            (Component::Button(first), Component::Button(second)) => {
                assert_eq!(first.label.as_deref(), Some("One"));
                assert_eq!(second.label.as_deref(), Some("Two"));
            }
            other => panic!("expected two buttons, got {other:?}"),
        }
    }

    #[test]
    fn empty_action_row() {
        assert!(action_row(()).components.is_empty());
    }

    #[test]
    fn button_defaults() {
        let b = button("l", "id", ());
        assert_eq!(b.label.as_deref(), Some("l"));
        assert_eq!(b.custom_id.as_deref(), Some("id"));
        assert_eq!(b.style, ButtonStyle::Primary);
        assert!(!b.disabled);
        assert!(b.emoji.is_none());
        assert!(b.url.is_none());
    }

    #[test]
    fn button_last_style_wins() {
        let b = button(
            "x",
            "y",
            (style(ActionStyle::Danger), style(ActionStyle::Secondary)),
        );
        assert_eq!(b.style, ButtonStyle::Secondary);
    }

    #[test]
    fn button_with_all_options() {
        let b = button(
            "Delete",
            "delete:42",
            (
                style(ActionStyle::Danger),
                emoji(ComponentEmoji::unicode("🗑️")),
                disabled(),
            ),
        );
        assert_eq!(b.style, ButtonStyle::Danger);
        assert!(b.disabled);
        assert_eq!(b.emoji, Some(ComponentEmoji::unicode("🗑️")));
    }

    #[test]
    fn button_accepts_empty_strings() {
        let b = button("", "", ());
        assert_eq!(b.label.as_deref(), Some(""));
        assert_eq!(b.custom_id.as_deref(), Some(""));
    }

    #[test]
    fn link_button_shape() {
        let b = link_button("Docs", "https://discord.com/developers", disabled());
        assert_eq!(b.style, ButtonStyle::Link);
        assert_eq!(b.url.as_deref(), Some("https://discord.com/developers"));
        assert!(b.custom_id.is_none());
        assert!(b.disabled);
    }

    #[test]
    fn link_button_passes_url_through() {
        let b = link_button("Broken", "not a url", ());
        assert_eq!(b.url.as_deref(), Some("not a url"));
    }

    #[test]
    fn thumbnail_defaults() {
        let t = thumbnail("http://example.com/image.png", "test description", ());
        assert_eq!(t.media.url, "http://example.com/image.png");
        assert_eq!(t.description.as_deref(), Some("test description"));
        assert!(!t.spoiler);
    }

    #[test]
    fn thumbnail_empty_description_is_set() {
        let t = thumbnail("http://example.com/image.png", "", ());
        assert_eq!(t.description, Some(String::new()));
    }

    #[test]
    fn spoiler_on_each_kind() {
        let c = container(spoiler());
        assert!(c.spoiler);
        assert!(c.accent_color.is_none());

        let t = thumbnail("http://example.com/image.png", "alt", spoiler());
        assert!(t.spoiler);
        assert_eq!(t.description.as_deref(), Some("alt"));

        let f = file("attachment://secret.txt", spoiler());
        assert!(f.spoiler);
        assert_eq!(f.file.url, "attachment://secret.txt");
    }

    #[test]
    fn file_defaults() {
        let f = file("attachment://report.pdf", ());
        assert_eq!(f.file.url, "attachment://report.pdf");
        assert!(!f.spoiler);
    }

    #[test]
    fn gallery_expands_items() {
        let g = gallery([
            media("https://example.com/1.png", "first", false),
            media("https://example.com/2.png", "", true),
        ]);
        assert_eq!(
            g.items,
            [
                MediaGalleryItem {
                    media: UnfurledMediaItem {
                        url: "https://example.com/1.png".into()
                    },
                    description: Some("first".into()),
                    spoiler: false,
                },
                MediaGalleryItem {
                    media: UnfurledMediaItem {
                        url: "https://example.com/2.png".into()
                    },
                    description: Some(String::new()),
                    spoiler: true,
                },
            ]
        );
    }

    #[test]
    fn empty_gallery() {
        assert!(gallery(Vec::<MediaItem>::new()).items.is_empty());
    }

    #[test]
    fn section_is_identical_in_both_positions() {
        let s = section((text("same"), accessory(button("Go", "go", ()))));

        let nested = container(s.clone());
        let top_level = response(s);

        assert_eq!(nested.components, top_level.components());
    }
}
