use strum::{Display, EnumString};

/// How text is placed inside a fixed-width field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display)]
pub enum Alignment {
    #[default]
    #[strum(to_string = "c", serialize = "с")]
    Center,

    #[strum(to_string = "l")]
    Left,

    #[strum(to_string = "r")]
    Right,
}

impl Alignment {
    /// Pads `text` with `fill` up to `width` characters.
    ///
    /// Text already at least `width` characters long is returned unchanged.
    /// Centering puts the odd fill character on the right, except when both
    /// the padding and the width are odd.
    pub fn pad(self, text: &str, width: usize, fill: char) -> String {
        let len = char_len(text);
        if len >= width {
            return text.to_owned();
        }

        let padding = width - len;
        let left = match self {
            Alignment::Left => 0,
            Alignment::Right => padding,
            Alignment::Center => padding / 2 + (padding & width & 1),
        };

        let mut result = String::with_capacity(text.len() + padding * fill.len_utf8());
        result.extend(std::iter::repeat_n(fill, left));
        result.push_str(text);
        result.extend(std::iter::repeat_n(fill, padding - left));
        result
    }
}

/// Length of `text` in characters.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Fits a single line to exactly `width` characters.
///
/// Longer text is cut to `width`, shorter text is padded with spaces.
pub fn align_value(value: &str, width: usize, alignment: Alignment) -> String {
    if char_len(value) >= width {
        value.chars().take(width).collect()
    } else {
        alignment.pad(value, width, ' ')
    }
}

/// Fits every line of `value` to `width`, keeping the line breaks.
pub fn format_value(value: &str, width: usize, alignment: Alignment) -> String {
    value
        .split('\n')
        .map(|line| align_value(line, width, alignment))
        .collect::<Vec<_>>()
        .join("\n")
}
