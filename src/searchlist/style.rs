//! Styles for the search list.
//!
//! The defaults use `AdaptiveColor`, so they read well on light and dark
//! terminals alike.
//!
//! ```rust
//! use listsearch::searchlist::ListStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = ListStyles::default();
//! styles.title = Style::new().bold(true);
//! ```

use lipgloss_extras::prelude::*;

/// Marker drawn before the item under the cursor.
pub const CURSOR_MARKER: &str = "> ";

/// Appended to labels cut short to fit the width.
pub const ELLIPSIS: &str = "…";

/// Styles for each part of the search list.
#[derive(Debug, Clone)]
pub struct ListStyles {
    /// Title above the search field.
    pub title: Style,
    /// Prompt of the search field.
    pub prompt: Style,
    /// Rows not under the cursor.
    pub item: Style,
    /// Row under the cursor.
    pub selected_item: Style,
    /// Message shown when nothing matches.
    pub no_items: Style,
    /// Match counter.
    pub status_bar: Style,
    /// Key help footer.
    pub help: Style,
}

impl Default for ListStyles {
    fn default() -> Self {
        let subdued_color = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            prompt: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            item: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            selected_item: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#EE6FF8",
                    Dark: "#EE6FF8",
                })
                .bold(true),
            no_items: Style::new().foreground(subdued_color.clone()),
            status_bar: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            help: Style::new().foreground(subdued_color),
        }
    }
}
