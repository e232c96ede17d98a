use crate::model::board::Board;
use crate::model::category::Category;
use crate::parse::board_parser::ITEM_MARKER;

fn push_category_line(out: &mut String, key: &str, name: &str) {
    out.push_str(key);
    out.push(' ');
    out.push_str(name);
    out.push('\n');
}

fn push_item_line(out: &mut String, key: &str, text: &str) {
    out.push(ITEM_MARKER);
    out.push_str(key);
    if !text.is_empty() {
        out.push(' ');
        out.push_str(text);
    }
    out.push('\n');
}

/// Serialize the whole board so that parsing the output yields an
/// equivalent board.
///
/// Loose home items come first, since an item line after a category
/// declaration would attach to that category.
pub fn serialize_board(board: &Board) -> String {
    let mut out = String::new();

    for (key, text) in board.home.items() {
        if !board.is_category(key) {
            push_item_line(&mut out, key, text);
        }
    }

    for (key, category) in &board.categories {
        push_category_line(&mut out, key, category.name());
        for (item_key, text) in category.items() {
            push_item_line(&mut out, item_key, text);
        }
    }

    out
}

/// Serialize a single view of the board: the given keys as seen from
/// `current`.
///
/// Category keys produce a category line followed by an item line linking
/// to it. Other keys produce an item line with their text in `current`,
/// falling back to the key itself.
pub fn serialize_view(board: &Board, current: &Category, keys: &[String]) -> String {
    let mut out = String::new();

    for key in keys {
        if let Some(category) = board.category(key) {
            push_category_line(&mut out, key, category.name());
            push_item_line(&mut out, key, category.name());
        } else {
            let text = current.text(key).unwrap_or(key.as_str());
            push_item_line(&mut out, key, text);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::board_parser::parse_board;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_trip_board() {
        let source = "\
food Food
>food/apple.png Apple
>food/fries.png french fries
clothing Clothing
>clothing/hat.png Hat
";
        let board = parse_board(source).unwrap();
        assert_eq!(serialize_board(&board), source);
    }

    #[test]
    fn test_loose_home_items_first() {
        let mut board = parse_board("food Food\n>a.png apple\n").unwrap();
        board.home.add_item("img/yes.png", "yes");
        let out = serialize_board(&board);
        assert_eq!(out, ">img/yes.png yes\nfood Food\n>a.png apple\n");

        let reparsed = parse_board(&out).unwrap();
        assert_eq!(reparsed.home.text("img/yes.png").unwrap(), "yes");
        assert!(!reparsed.category("food").unwrap().has_item("img/yes.png"));
    }

    #[test]
    fn test_empty_text_has_no_separator() {
        let mut board = Board::new();
        board.declare_category("misc", "Misc").unwrap();
        board.category_mut("misc").unwrap().add_item("blank.png", "");
        assert_eq!(serialize_board(&board), "misc Misc\n>blank.png\n");
    }

    #[test]
    fn test_serialize_home_view() {
        let board = parse_board("food Food\n>a.png apple\nclothing Clothing\n").unwrap();
        let out = serialize_view(&board, &board.home, &board.home.keys());
        assert_eq!(
            out,
            "food Food\n>food Food\nclothing Clothing\n>clothing Clothing\n"
        );
    }

    #[test]
    fn test_serialize_category_view() {
        let board = parse_board("food Food\n>a.png apple\n>b.png banana split\n").unwrap();
        let food = board.category("food").unwrap();
        let keys = vec![
            "a.png".to_string(),
            "b.png".to_string(),
            "missing.png".to_string(),
        ];
        let out = serialize_view(&board, food, &keys);
        assert_eq!(
            out,
            ">a.png apple\n>b.png banana split\n>missing.png missing.png\n"
        );
    }

    #[test]
    fn test_serialize_empty_board() {
        assert_eq!(serialize_board(&Board::new()), "");
    }
}
