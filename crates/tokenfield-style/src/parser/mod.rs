//! CSS parsing module.

mod css_parser;

pub use css_parser::{
    parse_color_value, parse_css, parse_length_value, parse_selector_list,
};
