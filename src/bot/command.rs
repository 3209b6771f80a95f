//! Parsing of chat message content into bot commands.

use entity::day_of_week::DayOfWeek;

/// Reply when `accept-quest` is called without a quest name.
pub const MISSING_QUEST_TO_JOIN: &str = "Must provide a quest to join";
/// Reply when `complete-quest` is called without a quest name.
pub const MISSING_QUEST_TO_COMPLETE: &str = "Must provide a quest to complete";
/// Reply when a tavern-menu edit is missing its item name.
pub const MISSING_MENU_ITEM: &str = "Must provide a menu item";

/// A fully parsed bot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ping,
    Register,
    AcceptQuest { quest_name: String },
    CompleteQuest { quest_name: String },
    QuestBoard,
    Experience,
    TavernMenu,
    TavernMenuAdd {
        day_of_week: DayOfWeek,
        item_name: String,
    },
    TavernMenuRemove {
        day_of_week: Option<DayOfWeek>,
        item_name: String,
    },
}

/// Parses message content into a command.
///
/// Returns `None` when the message does not carry the prefix or names an
/// unknown command (not every message is for the bot). Returns
/// `Some(Err(reply))` when the command is recognized but its arguments are
/// unusable; the carried string is the reply to send back.
pub fn parse(content: &str, prefix: &str) -> Option<Result<Command, String>> {
    let content = content.strip_prefix(prefix)?;
    let mut words = content.split_whitespace();
    let name = words.next()?;
    let args: Vec<&str> = words.collect();

    let command = match name {
        "ping" => Ok(Command::Ping),
        "register" => Ok(Command::Register),
        "accept-quest" | "accept" => {
            if args.is_empty() {
                Err(MISSING_QUEST_TO_JOIN.to_string())
            } else {
                Ok(Command::AcceptQuest {
                    quest_name: args.join(" "),
                })
            }
        }
        "complete-quest" | "complete" => {
            if args.is_empty() {
                Err(MISSING_QUEST_TO_COMPLETE.to_string())
            } else {
                Ok(Command::CompleteQuest {
                    quest_name: args.join(" "),
                })
            }
        }
        "quest" | "quest-board" | "board" => Ok(Command::QuestBoard),
        "xp" => Ok(Command::Experience),
        "tavern-menu" => parse_tavern_menu(&args),
        _ => return None,
    };

    Some(command)
}

/// Parses the `tavern-menu` subcommands: bare (show), `add <day> <item>`,
/// `remove [day] <item>`.
fn parse_tavern_menu(args: &[&str]) -> Result<Command, String> {
    match args.split_first() {
        None => Ok(Command::TavernMenu),
        Some((&"add", rest)) => {
            let (day_word, item) = rest
                .split_first()
                .ok_or_else(|| MISSING_MENU_ITEM.to_string())?;
            let day_of_week = DayOfWeek::from_name(day_word)
                .ok_or_else(|| format!("{day_word} is not a supported day of the week."))?;
            if item.is_empty() {
                return Err(MISSING_MENU_ITEM.to_string());
            }
            Ok(Command::TavernMenuAdd {
                day_of_week,
                item_name: item.join(" "),
            })
        }
        Some((&"remove", rest)) => match rest.split_first() {
            None => Err(MISSING_MENU_ITEM.to_string()),
            Some((first, tail)) => match DayOfWeek::from_name(first) {
                // A leading day word only counts as a day filter when an
                // item name follows; "remove monday" asks for an item
                // literally named "monday".
                Some(day_of_week) if !tail.is_empty() => Ok(Command::TavernMenuRemove {
                    day_of_week: Some(day_of_week),
                    item_name: tail.join(" "),
                }),
                _ => Ok(Command::TavernMenuRemove {
                    day_of_week: None,
                    item_name: rest.join(" "),
                }),
            },
        },
        Some((other, _)) => Err(format!("Unknown tavern-menu subcommand: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_messages_without_the_prefix() {
        assert_eq!(parse("hello there", "/"), None);
        assert_eq!(parse("register", "/"), None);
    }

    #[test]
    fn ignores_unknown_commands() {
        assert_eq!(parse("/dance", "/"), None);
    }

    #[test]
    fn parses_simple_commands() {
        assert_eq!(parse("/ping", "/"), Some(Ok(Command::Ping)));
        assert_eq!(parse("/register", "/"), Some(Ok(Command::Register)));
        assert_eq!(parse("/xp", "/"), Some(Ok(Command::Experience)));
    }

    #[test]
    fn quest_board_aliases_all_resolve() {
        for content in ["/quest", "/quest-board", "/board"] {
            assert_eq!(parse(content, "/"), Some(Ok(Command::QuestBoard)));
        }
    }

    #[test]
    fn accept_quest_keeps_multi_word_names() {
        assert_eq!(
            parse("/accept-quest Fetch Water", "/"),
            Some(Ok(Command::AcceptQuest {
                quest_name: "Fetch Water".to_string()
            }))
        );
        assert_eq!(
            parse("/accept Fetch Water", "/"),
            Some(Ok(Command::AcceptQuest {
                quest_name: "Fetch Water".to_string()
            }))
        );
    }

    #[test]
    fn accept_quest_without_a_name_is_a_usage_error() {
        assert_eq!(
            parse("/accept-quest", "/"),
            Some(Err(MISSING_QUEST_TO_JOIN.to_string()))
        );
    }

    #[test]
    fn complete_quest_without_a_name_is_a_usage_error() {
        assert_eq!(
            parse("/complete", "/"),
            Some(Err(MISSING_QUEST_TO_COMPLETE.to_string()))
        );
    }

    #[test]
    fn bare_tavern_menu_shows_the_menu() {
        assert_eq!(parse("/tavern-menu", "/"), Some(Ok(Command::TavernMenu)));
    }

    #[test]
    fn tavern_menu_add_parses_day_and_item() {
        assert_eq!(
            parse("/tavern-menu add monday roast boar", "/"),
            Some(Ok(Command::TavernMenuAdd {
                day_of_week: DayOfWeek::Monday,
                item_name: "roast boar".to_string()
            }))
        );
    }

    #[test]
    fn tavern_menu_add_rejects_unknown_days() {
        assert_eq!(
            parse("/tavern-menu add someday stew", "/"),
            Some(Err(
                "someday is not a supported day of the week.".to_string()
            ))
        );
    }

    #[test]
    fn tavern_menu_remove_with_and_without_a_day() {
        assert_eq!(
            parse("/tavern-menu remove tuesday stew", "/"),
            Some(Ok(Command::TavernMenuRemove {
                day_of_week: Some(DayOfWeek::Tuesday),
                item_name: "stew".to_string()
            }))
        );
        assert_eq!(
            parse("/tavern-menu remove stew", "/"),
            Some(Ok(Command::TavernMenuRemove {
                day_of_week: None,
                item_name: "stew".to_string()
            }))
        );
    }

    #[test]
    fn tavern_menu_remove_treats_a_lone_day_word_as_an_item_name() {
        assert_eq!(
            parse("/tavern-menu remove monday", "/"),
            Some(Ok(Command::TavernMenuRemove {
                day_of_week: None,
                item_name: "monday".to_string()
            }))
        );
    }
}
