pub mod board_parser;
pub mod board_serializer;

pub use board_parser::{ParseError, Record, parse_board, parse_record};
pub use board_serializer::{serialize_board, serialize_view};
