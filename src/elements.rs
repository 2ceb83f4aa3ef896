//! Element implementations that `genpdf` does not ship with.

use genpdf::error::Error;
use genpdf::style::Style;
use genpdf::{render, Element, Mm, RenderResult, Size};

pub(crate) fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

pub(crate) fn mm_to_f64(value: Mm) -> f64 {
    let mm: printpdf::Mm = value.into();
    mm.0
}

/// Fixed amount of empty vertical space.
///
/// A spacer that does not fit into the remaining page area is truncated to the
/// available height instead of pushing an empty gap onto the next page.
#[derive(Clone, Copy, Debug)]
pub struct Spacer {
    height: Mm,
}

impl Spacer {
    /// Creates a spacer with the given height.
    pub fn new(height: impl Into<Mm>) -> Self {
        Self {
            height: height.into(),
        }
    }

    /// Returns the requested height.
    pub fn height(&self) -> Mm {
        self.height
    }
}

impl Element for Spacer {
    fn render(
        &mut self,
        _context: &genpdf::Context,
        area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let available = area.size().height;
        let height = if self.height > available {
            available
        } else {
            self.height
        };

        let mut result = RenderResult::default();
        result.size = Size::new(0, height);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millimetre_conversion_round_trips() {
        let mm = mm_from_f64(12.5);
        assert!((mm_to_f64(mm) - 12.5).abs() < 1e-9);
    }

    #[test]
    fn spacer_keeps_requested_height() {
        let spacer = Spacer::new(mm_from_f64(7.62));
        assert!((mm_to_f64(spacer.height()) - 7.62).abs() < 1e-9);
    }
}
