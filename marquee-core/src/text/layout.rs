//! Line placement
//!
//! Lines are stacked from the top of the region at a fixed pixel pitch.

/// Pixel placement of wrapped lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineLayout {
    /// Left edge of every line (pixels)
    pub origin_x: i32,
    /// Top edge of the first line (pixels)
    pub origin_y: i32,
    /// Vertical distance between consecutive lines (pixels)
    pub line_height: i32,
}

impl Default for LineLayout {
    fn default() -> Self {
        Self {
            origin_x: 5,
            origin_y: 0,
            line_height: 8,
        }
    }
}

impl LineLayout {
    /// Top-left pixel of line `index`
    pub fn position(&self, index: usize) -> (i32, i32) {
        (self.origin_x, self.origin_y + index as i32 * self.line_height)
    }

    /// Pair each line with its top-left pixel
    pub fn place<'a, S: AsRef<str>>(
        &self,
        lines: &'a [S],
    ) -> impl Iterator<Item = (i32, i32, &'a str)> + 'a {
        let layout = *self;
        lines.iter().enumerate().map(move |(i, line)| {
            let (x, y) = layout.position(i);
            (x, y, line.as_ref())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_layout() {
        let layout = LineLayout::default();
        assert_eq!(layout.position(0), (5, 0));
        assert_eq!(layout.position(1), (5, 8));
        assert_eq!(layout.position(2), (5, 16));
    }

    #[test]
    fn test_place_lines() {
        let layout = LineLayout {
            origin_x: 2,
            origin_y: 4,
            line_height: 10,
        };
        let lines = ["ALPHA BETA", "GAMMA"];
        let placed: Vec<_> = layout.place(&lines).collect();
        assert_eq!(placed, vec![(2, 4, "ALPHA BETA"), (2, 14, "GAMMA")]);
    }

    #[test]
    fn test_place_nothing() {
        let lines: [&str; 0] = [];
        assert_eq!(LineLayout::default().place(&lines).count(), 0);
    }
}
