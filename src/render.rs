//! Terminal painting of styled text using crossterm

use std::io::Write;

use crossterm::{
    queue,
    style::{self, Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use crate::error::Result;
use crate::syntax::{Color, Style, StyledText, Theme};

impl From<Color> for style::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::Default => style::Color::Reset,
            Color::Black => style::Color::Black,
            Color::Red => style::Color::DarkRed,
            Color::Green => style::Color::DarkGreen,
            Color::Yellow => style::Color::DarkYellow,
            Color::Blue => style::Color::DarkBlue,
            Color::Magenta => style::Color::DarkMagenta,
            Color::Cyan => style::Color::DarkCyan,
            Color::White => style::Color::Grey,
            Color::BrightBlack => style::Color::DarkGrey,
            Color::BrightRed => style::Color::Red,
            Color::BrightGreen => style::Color::Green,
            Color::BrightYellow => style::Color::Yellow,
            Color::BrightBlue => style::Color::Blue,
            Color::BrightMagenta => style::Color::Magenta,
            Color::BrightCyan => style::Color::Cyan,
            Color::BrightWhite => style::Color::White,
        }
    }
}

/// Paint styled text, resolving overlapping ranges last-applied-wins
pub fn write_styled<W: Write>(out: &mut W, styled: &StyledText, theme: &Theme) -> Result<()> {
    let text = styled.plain_text();

    for segment in styled.segments() {
        let slice = &text[segment.start..segment.end];
        match segment.tag {
            Some(tag) => {
                apply_style(out, &theme.style_for(tag))?;
                queue!(out, Print(slice))?;
                queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
            }
            None => queue!(out, Print(slice))?,
        }
    }

    out.flush()?;
    Ok(())
}

fn apply_style<W: Write>(out: &mut W, style: &Style) -> Result<()> {
    if style.fg != Color::Default {
        queue!(out, SetForegroundColor(style.fg.into()))?;
    }
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    Ok(())
}
