pub mod parser;

pub use parser::{parse_default, parse_expression, parse_with_config, ParseError, ParserConfig};
