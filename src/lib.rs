//! Type-safe builders for Discord Components v2 interaction responses.
//!
//! Components are built with plain functions that take their required
//! payload plus a list of options. Which option fits which component, and
//! which component may go where, is decided by trait bounds, so a misplaced
//! option or child is a compile error rather than a 400 from Discord.
//!
//! ```ignore
//! use dmsg::prelude::*;
//!
//! let reply = response(container((
//!     accent_color(0x57F287),
//!     section((
//!         text("## Hello World"),
//!         accessory(thumbnail("https://example.com/logo.png", "logo", ())),
//!     )),
//!     separator(spacing(SeparatorSpacingSize::Large)),
//!     action_row((
//!         button("Accept", "accept", style(ActionStyle::Success)),
//!         link_button("Docs", "https://discord.com/developers/docs", ()),
//!     )),
//! )));
//! ```
//!
//! Module layout:
//!
//! - [`types`]: the Discord data the builders fill in.
//! - [`options`]: option values and the per-component capability traits.
//! - [`components`]: one constructor per component kind.
//! - [`placement`]: nesting rules and the top-level/container wrapper.
//! - [`response`]: the three interaction response envelopes.

pub mod components;
pub mod options;
pub mod placement;
pub mod response;
pub mod types;

pub use components::{
    action_row, button, container, file, gallery, link_button, media, section, separator, text,
    thumbnail, MediaItem,
};
pub use options::{accent_color, disabled, divider, emoji, spacing, spoiler, style, ActionStyle};
pub use placement::{accessory, Placeable};
pub use response::{ephemeral, response, update};

/// Everything needed to build a response, in one import.
pub mod prelude {
    pub use crate::components::*;
    pub use crate::options::*;
    pub use crate::placement::*;
    pub use crate::response::*;
    pub use crate::types::{
        Component, ComponentEmoji, InteractionResponse, MessageFlags, SeparatorSpacingSize,
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::types::{ButtonStyle, ComponentType};
    use serde_json::json;

    fn welcome() -> InteractionResponse {
        response(container((
            accent_color(0x57F287),
            section((
                text("## Hello World"),
                accessory(thumbnail("https://example.com/logo.png", "logo", ())),
            )),
            separator(spacing(SeparatorSpacingSize::Large)),
            action_row((
                button("Accept", "accept", style(ActionStyle::Success)),
                link_button("Docs", "https://discord.com/developers/docs", ()),
            )),
        )))
    }

    #[test]
    fn full_tree_shape() {
        let reply = welcome();
        let [Component::Container(root)] = reply.components() else {
            panic!("expected a single container, got {:?}", reply.components());
        };
        assert_eq!(root.accent_color, Some(0x57F287));

        let kinds: Vec<_> = root.components.iter().map(Component::kind).collect();
        assert_eq!(
            kinds,
            [
                ComponentType::Section,
                ComponentType::Separator,
                ComponentType::ActionRow
            ]
        );

        let Component::ActionRow(row) = &root.components[2] else {
            panic!("expected action row");
        };
        let styles: Vec<_> = row
            .components
            .iter()
            .filter_map(|component| match component {
                Component::Button(button) => Some(button.style),
                _ => None,
            })
            .collect();
        assert_eq!(styles, [ButtonStyle::Success, ButtonStyle::Link]);
    }

    #[test]
    fn full_tree_wire_shape() {
        let value = serde_json::to_value(welcome()).unwrap();
        assert_eq!(
            value,
            json!({
                "type": 4,
                "data": {
                    "flags": 32768,
                    "components": [{
                        "type": 17,
                        "accent_color": 0x57F287,
                        "components": [
                            {
                                "type": 9,
                                "components": [{ "type": 10, "content": "## Hello World" }],
                                "accessory": {
                                    "type": 11,
                                    "media": { "url": "https://example.com/logo.png" },
                                    "description": "logo",
                                },
                            },
                            { "type": 14, "divider": true, "spacing": 2 },
                            {
                                "type": 1,
                                "components": [
                                    { "type": 2, "custom_id": "accept", "label": "Accept", "style": 3 },
                                    {
                                        "type": 2,
                                        "label": "Docs",
                                        "style": 5,
                                        "url": "https://discord.com/developers/docs",
                                    },
                                ],
                            },
                        ],
                    }],
                },
            })
        );
    }
}
