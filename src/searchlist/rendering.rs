//! View rendering for the search list.

use super::style::{CURSOR_MARKER, ELLIPSIS};
use super::Model;
use crate::key::{self, KeyMap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cuts `s` to at most `width` columns, ending in an ellipsis when cut.
pub(super) fn truncate(s: &str, width: usize) -> String {
    if width == 0 || s.width() <= width {
        return s.to_string();
    }

    let budget = width.saturating_sub(ELLIPSIS.width());
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(ELLIPSIS);
    out
}

impl Model {
    pub(super) fn view_header(&self) -> String {
        let field = self.input.view();
        if self.title.is_empty() {
            field
        } else {
            format!("{}\n{}", self.styles.title.render(&self.title), field)
        }
    }

    pub(super) fn view_items(&self) -> String {
        if self.outcome.shown == 0 {
            return self
                .styles
                .no_items
                .render(&format!("No {}.", self.item_plural));
        }

        let label_width = if self.width == 0 {
            0
        } else {
            self.width.saturating_sub(CURSOR_MARKER.width()).max(1)
        };
        self.shown_items()
            .enumerate()
            .skip(self.viewport_start)
            .take(self.height)
            .map(|(position, (_, item))| {
                let label = truncate(item.label(), label_width);
                if position == self.cursor {
                    self.styles
                        .selected_item
                        .render(&format!("{CURSOR_MARKER}{label}"))
                } else {
                    let padding = " ".repeat(CURSOR_MARKER.width());
                    self.styles.item.render(&format!("{padding}{label}"))
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(super) fn view_footer(&self) -> String {
        let noun = if self.outcome.total() == 1 {
            &self.item_singular
        } else {
            &self.item_plural
        };
        let status = format!(
            "{} of {} {}",
            self.outcome.shown,
            self.outcome.total(),
            noun
        );

        let mut footer = self.styles.status_bar.render(&status);
        let help = key::help_line(&self.keymap.short_help());
        if !help.is_empty() {
            footer.push('\n');
            footer.push_str(&self.styles.help.render(&help));
        }
        footer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Red Apple", 0), "Red Apple");
        assert_eq!(truncate("Red Apple", 9), "Red Apple");
        assert_eq!(truncate("Red Apple", 5), "Red …");
        assert_eq!(truncate("日本語のアルバム", 5), "日本…");
    }
}
