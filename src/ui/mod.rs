pub mod layout;
pub mod styles;

pub use layout::*;
pub use styles::{
    border_style, health_color, key_desc_span, key_span, output_color, selected_style,
    status_color, title_style, Palette, Theme,
};
