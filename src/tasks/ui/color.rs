/* ************************************************************************ **
** This file is part of gauss-trace, and is licensed under EITHER the MIT   **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;
use ansi_term::{Colour, Style};

/// A thing that might colorize text based on a value.
pub trait PaintAs<D, C> {
    fn paint_as(&self, compared: &C, displayed: D) -> String;
}

/// Picks the style of the first division that the compared value exceeds.
pub struct ColorByRange<T> {
    pub divs: Vec<(T, Style)>,
    pub lowest: Style,
}

impl<T> ColorByRange<T> {
    pub fn new(divs: Vec<(T, Style)>, lowest: Style) -> ColorByRange<T>
    { ColorByRange { divs, lowest } }

    fn style_of(&self, x: &T) -> Style
    where T: PartialOrd,
    {
        for &(ref pivot, style) in &self.divs {
            if x > pivot { return style; }
        }
        self.lowest
    }
}

impl ColorByRange<f64> {
    /// Cell intensities in `[0, 1]`, from cold to hot.
    pub fn heatmap() -> Self {
        ColorByRange::new(vec![
            (0.75, Colour::Red.bold()),
            (0.5, Colour::Yellow.normal()),
            (0.25, Colour::Green.normal()),
        ], Colour::Blue.dimmed())
    }
}

impl<D, C> PaintAs<D, C> for ColorByRange<C>
  where C: PartialOrd, D: fmt::Display,
{
    fn paint_as(&self, compared: &C, displayed: D) -> String
    { paint(self.style_of(compared), displayed).to_string() }
}

/// Does not colorize.
pub struct NullPainter;

impl<D, C> PaintAs<D, C> for NullPainter
  where D: fmt::Display,
{
    fn paint_as(&self, _: &C, displayed: D) -> String
    { displayed.to_string() }
}

/// Style of the pivot cell in a rendered snapshot.
pub fn pivot_style() -> Style { Colour::Cyan.bold().reverse() }

// hack for type inference issues
pub fn paint<T>(
    style: Style,
    value: T,
) -> Wrapper<T, T>
{ gpaint(style, value) }

pub fn gpaint<U, T>(
    style: Style,
    value: U,
) -> Wrapper<U, T>
{ Wrapper { style, value, _target: Default::default() } }

/// Colorizes the `Display` output of a value.
///
/// It has two parameters so that it can `borrow()` `U` as `T`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Wrapper<U, T=U> {
    style: Style,
    value: U,
    _target: ::std::marker::PhantomData<T>,
}

impl<U, T> fmt::Display for Wrapper<U, T>
where
    U: ::std::borrow::Borrow<T>,
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.style.prefix())?;
        T::fmt(self.value.borrow(), f)?;
        write!(f, "{}", self.style.suffix())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heatmap_divisions() {
        let heat = ColorByRange::heatmap();
        assert_eq!(heat.style_of(&1.0), Colour::Red.bold());
        assert_eq!(heat.style_of(&0.75), Colour::Yellow.normal());
        assert_eq!(heat.style_of(&0.3), Colour::Green.normal());
        assert_eq!(heat.style_of(&0.0), Colour::Blue.dimmed());
        // incomparable values land in the lowest bucket
        assert_eq!(heat.style_of(&::std::f64::NAN), Colour::Blue.dimmed());
    }

    #[test]
    fn painted_text_keeps_its_content() {
        let heat = ColorByRange::heatmap();
        let painted = heat.paint_as(&1.0, "  2.000000");
        assert!(painted.starts_with("\x1b["));
        assert!(painted.contains("  2.000000"));
        assert!(painted.ends_with("\x1b[0m"));
    }

    #[test]
    fn null_painter() {
        assert_eq!(NullPainter.paint_as(&1.0, "x"), "x");
    }

    #[test]
    fn plain_style_adds_nothing() {
        assert_eq!(paint(Style::new(), 3).to_string(), "3");
    }
}
