use tracing::debug;

use crate::model::board::Board;

/// Marker that starts an item line
pub const ITEM_MARKER: char = '>';

/// Error produced while parsing a board file
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: malformed record: {reason}")]
    MalformedRecord { line: usize, reason: String },
}

/// A single classified line of a board file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record<'a> {
    /// `<key> <name>`
    Category { key: &'a str, name: &'a str },
    /// `><key> <text>`
    Item { key: &'a str, text: &'a str },
    Blank,
}

/// Classify one line. `line_no` is 1-based and only used for errors.
///
/// Item text and category names are everything after the first space
/// following the key, verbatim.
pub fn parse_record(line: &str, line_no: usize) -> Result<Record<'_>, ParseError> {
    if line.trim().is_empty() {
        return Ok(Record::Blank);
    }

    if let Some(rest) = line.strip_prefix(ITEM_MARKER) {
        // Tolerate `> key text`, which older writers produced
        let rest = rest.trim_start();
        let (key, text) = rest.split_once(' ').unwrap_or((rest, ""));
        if key.is_empty() {
            return Err(ParseError::MalformedRecord {
                line: line_no,
                reason: "item line has no key".into(),
            });
        }
        return Ok(Record::Item { key, text });
    }

    match line.split_once(' ') {
        Some((key, name)) if !key.is_empty() && !name.is_empty() => {
            Ok(Record::Category { key, name })
        }
        Some((key, _)) if key.is_empty() => Err(ParseError::MalformedRecord {
            line: line_no,
            reason: "category line starts with a space".into(),
        }),
        _ => Err(ParseError::MalformedRecord {
            line: line_no,
            reason: format!("category '{}' has no name", line.trim_end()),
        }),
    }
}

/// Parse a board file from its source text.
///
/// Item lines attach to the most recently declared category, or to home
/// when no category has been declared yet.
pub fn parse_board(source: &str) -> Result<Board, ParseError> {
    let mut board = Board::new();
    // Position of the most recently declared category
    let mut open: Option<usize> = None;

    for (idx, line) in source.lines().enumerate() {
        match parse_record(line, idx + 1)? {
            Record::Blank => {}
            Record::Category { key, name } => {
                if board.is_category(key) {
                    debug!(line = idx + 1, key, "reopening category");
                }
                let index = board.declare_category(key, name).map_err(|e| {
                    ParseError::MalformedRecord {
                        line: idx + 1,
                        reason: e.to_string(),
                    }
                })?;
                open = Some(index);
            }
            Record::Item { key, text } => {
                let target = match open.and_then(|i| board.categories.get_index_mut(i)) {
                    Some((_, category)) => category,
                    None => &mut board.home,
                };
                debug!(line = idx + 1, key, category = target.name(), "item");
                target.add_item(key, text);
            }
        }
    }

    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
food Food
>food/apple.png Apple
clothing Clothing
>clothing/hat.png Hat
";

    #[test]
    fn test_parse_basic() {
        let board = parse_board(SAMPLE).unwrap();
        assert_eq!(board.home.keys(), vec!["food", "clothing"]);
        assert_eq!(board.home.text("food").unwrap(), "Food");

        let food = board.category("food").unwrap();
        assert_eq!(food.name(), "Food");
        assert_eq!(food.keys(), vec!["food/apple.png"]);
        assert_eq!(food.text("food/apple.png").unwrap(), "Apple");

        let clothing = board.category("clothing").unwrap();
        assert_eq!(clothing.text("clothing/hat.png").unwrap(), "Hat");
        assert!(!clothing.has_item("food/apple.png"));
    }

    #[test]
    fn test_multi_word_text_is_verbatim() {
        let board = parse_board("food Food\n>img/pizza.png a slice of pizza please\n").unwrap();
        assert_eq!(
            board
                .category("food")
                .unwrap()
                .text("img/pizza.png")
                .unwrap(),
            "a slice of pizza please"
        );
    }

    #[test]
    fn test_two_word_text() {
        let board = parse_board("food Food\n>img/fries.png french fries\n").unwrap();
        assert_eq!(
            board.category("food").unwrap().text("img/fries.png").unwrap(),
            "french fries"
        );
    }

    #[test]
    fn test_multi_word_category_name() {
        let board = parse_board("snacks After School Snacks\n").unwrap();
        assert_eq!(
            board.category("snacks").unwrap().name(),
            "After School Snacks"
        );
    }

    #[test]
    fn test_item_without_text_is_empty() {
        let board = parse_board("food Food\n>img/plate.png\n").unwrap();
        let food = board.category("food").unwrap();
        assert!(food.has_item("img/plate.png"));
        assert_eq!(food.text("img/plate.png").unwrap(), "");
    }

    #[test]
    fn test_items_before_category_attach_to_home() {
        let board = parse_board(">img/hello.png hello there\nfood Food\n").unwrap();
        assert_eq!(board.home.keys(), vec!["img/hello.png", "food"]);
        assert_eq!(board.home.text("img/hello.png").unwrap(), "hello there");
        assert!(board.category("food").unwrap().is_empty());
    }

    #[test]
    fn test_spaced_item_marker() {
        let board = parse_board("food Food\n> food/apple.png Apple\n").unwrap();
        assert_eq!(
            board.category("food").unwrap().text("food/apple.png").unwrap(),
            "Apple"
        );
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        let board = parse_board("food Food\r\n\r\n>a.png apple\r\n   \n").unwrap();
        assert_eq!(board.category("food").unwrap().text("a.png").unwrap(), "apple");
        assert_eq!(board.item_count(), 2);
    }

    #[test]
    fn test_category_without_name_fails() {
        let err = parse_board("food Food\n>a.png apple\nclothing\n").unwrap_err();
        let ParseError::MalformedRecord { line, .. } = err;
        assert_eq!(line, 3);
    }

    #[test]
    fn test_category_with_trailing_space_only_fails() {
        let err = parse_board("clothing \n").unwrap_err();
        assert!(matches!(err, ParseError::MalformedRecord { line: 1, .. }));
    }

    #[test]
    fn test_item_without_key_fails() {
        let err = parse_board("food Food\n>\n").unwrap_err();
        assert!(matches!(err, ParseError::MalformedRecord { line: 2, .. }));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_redeclared_category_reopens() {
        let source = "\
food Food
>a.png apple
clothing Clothing
food Food
>b.png banana
";
        let board = parse_board(source).unwrap();
        assert_eq!(board.category("food").unwrap().keys(), vec!["a.png", "b.png"]);
        assert_eq!(board.home.keys(), vec!["food", "clothing"]);
    }

    #[test]
    fn test_items_follow_reopened_category_position() {
        let source = "\
food Food
clothing Clothing
>hat.png hat
food Snacks
>chips.png chips
clothing Clothing
>coat.png coat
";
        let board = parse_board(source).unwrap();
        assert_eq!(board.category("food").unwrap().name(), "Snacks");
        assert_eq!(board.category("food").unwrap().keys(), vec!["chips.png"]);
        assert_eq!(
            board.category("clothing").unwrap().keys(),
            vec!["hat.png", "coat.png"]
        );
    }

    #[test]
    fn test_category_key_with_tab_fails() {
        let err = parse_board("food Food
my\tsnacks Snacks
").unwrap_err();
        assert!(matches!(err, ParseError::MalformedRecord { line: 2, .. }));
        assert!(err.to_string().contains("whitespace"));
    }

    #[test]
    fn test_empty_source() {
        let board = parse_board("").unwrap();
        assert!(board.home.is_empty());
        assert!(board.categories.is_empty());
    }
}
