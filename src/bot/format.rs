//! Reply formatting helpers for bot commands.

use crate::model::tavern::WeeklyMenu;

const CODE_BLOCK: &str = "```";
const BOX_BORDER_CHAR: &str = "=";
const BLOCK_PRE_TEXT: &str = "||  ";
const BLOCK_POST_TEXT: &str = "  ||";
/// Combined length of the row prefix and suffix.
const WRAPPER_TEXT_LEN: usize = BLOCK_PRE_TEXT.len() + BLOCK_POST_TEXT.len();
/// Minimum gap between the name column and the experience column.
const MINIMUM_SPACING: usize = 2;
const QUEST_COLUMN_NAME: &str = "Quests";
const EXPERIENCE_COLUMN_NAME: &str = "XP";

/// Reply for an empty quest board.
pub const NO_AVAILABLE_QUESTS: &str = "No available quests";

fn single_quest_line(first_column: &str, second_column: &str, line_length: usize) -> String {
    let spacing = line_length - WRAPPER_TEXT_LEN - first_column.len() - second_column.len();
    format!(
        "{BLOCK_PRE_TEXT}{first_column}{}{second_column}{BLOCK_POST_TEXT}",
        " ".repeat(spacing)
    )
}

/// Formats a list of quests to look like a quest board.
///
/// The formatting is normalized so all quest names and XP values start at
/// the same character position: the line width derives from the longest
/// name (or the "Quests" header) plus the widest experience value (or the
/// "XP" header), the wrapper and the minimum column gap. The whole board is
/// wrapped in a code block and bounded by `=` borders.
pub fn format_quest_board(quests: &[entity::quest::Model]) -> String {
    if quests.is_empty() {
        return NO_AVAILABLE_QUESTS.to_string();
    }

    let max_title_length = quests
        .iter()
        .map(|quest| quest.name.len())
        .chain([QUEST_COLUMN_NAME.len()])
        .max()
        .unwrap_or(0);
    let max_xp_length = quests
        .iter()
        .map(|quest| quest.experience.to_string().len())
        .chain([EXPERIENCE_COLUMN_NAME.len()])
        .max()
        .unwrap_or(0);
    let line_length = max_title_length + max_xp_length + WRAPPER_TEXT_LEN + MINIMUM_SPACING;

    let border = BOX_BORDER_CHAR.repeat(line_length);
    let header = single_quest_line(QUEST_COLUMN_NAME, EXPERIENCE_COLUMN_NAME, line_length);

    let mut lines = vec![CODE_BLOCK.to_string(), border.clone(), header];
    for quest in quests {
        lines.push(single_quest_line(
            &quest.name,
            &quest.experience.to_string(),
            line_length,
        ));
    }
    lines.push(border);
    lines.push(CODE_BLOCK.to_string());

    lines.join("\n")
}

/// Formats this week's menu grouped by day.
pub fn format_weekly_menu(menu: &WeeklyMenu) -> String {
    let mut text = format!(
        "Menu for the week of {}",
        menu.menu.start_date.format("%b %d, %Y")
    );
    for (day, items) in menu.grouped_items() {
        text.push_str(&format!("\n**{day}**:"));
        if items.is_empty() {
            text.push_str("\n  No items available.");
        }
        for item in items {
            text.push_str(&format!("\n  - {}", capitalize(&item.food)));
        }
    }
    text
}

/// Uppercases the first character and lowercases the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
