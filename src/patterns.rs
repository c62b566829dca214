//! ASCII pattern rendering. Patterns are built as rows of text so they can
//! be checked without capturing stdout.

pub const MIN_HEIGHT: usize = 1;
pub const MAX_HEIGHT: usize = 50;
/// Fixed column count of the sine wave pattern.
const WAVE_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Pyramid,
    Diamond,
    InvertedTriangle,
    Staircase,
    SineWave,
}

fn centered_row(height: usize, i: usize, c: char) -> String {
    let mut row = " ".repeat(height - i - 1);
    row.extend(std::iter::repeat(c).take(2 * i + 1));
    row
}

impl Pattern {
    /// Render the pattern at `height` with fill character `c`, one string
    /// per output row.
    pub fn render(self, height: usize, c: char) -> Vec<String> {
        match self {
            Self::Pyramid => (0..height).map(|i| centered_row(height, i, c)).collect(),
            Self::Diamond => {
                let mut rows: Vec<String> =
                    (0..height).map(|i| centered_row(height, i, c)).collect();
                for i in (0..height.saturating_sub(1)).rev() {
                    rows.push(centered_row(height, i, c));
                }
                rows
            }
            Self::InvertedTriangle => (1..=height)
                .rev()
                .map(|i| {
                    let mut row = " ".repeat(height - i);
                    row.extend(std::iter::repeat(c).take(2 * i - 1));
                    row
                })
                .collect(),
            Self::Staircase => (1..=height)
                .map(|i| std::iter::repeat(c).take(i).collect())
                .collect(),
            // Two mirrored diagonals over a fixed-width band. Rows past the
            // band width come out blank.
            Self::SineWave => (0..height)
                .map(|i| {
                    (0..WAVE_WIDTH)
                        .map(|j| if j == i || j + i == WAVE_WIDTH { c } else { ' ' })
                        .collect()
                })
                .collect(),
        }
    }

    /// Character count approximation reported under the drawing.
    pub fn area(self, height: usize) -> usize {
        match self {
            Self::Pyramid => height * height,
            Self::Diamond | Self::InvertedTriangle => height * height / 2,
            Self::Staircase => height * (height + 1) / 2,
            Self::SineWave => height * WAVE_WIDTH,
        }
    }

    pub fn symmetry(self) -> &'static str {
        match self {
            Self::Pyramid | Self::InvertedTriangle => "Vertical",
            Self::Diamond => "Vertical, Horizontal",
            Self::Staircase => "None",
            Self::SineWave => "Periodic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pyramid_shape() {
        assert_eq!(
            Pattern::Pyramid.render(3, '*'),
            vec!["  *", " ***", "*****"]
        );
    }

    #[test]
    fn diamond_mirrors_the_pyramid() {
        assert_eq!(
            Pattern::Diamond.render(3, '*'),
            vec!["  *", " ***", "*****", " ***", "  *"]
        );
        // Height 1 has nothing to mirror.
        assert_eq!(Pattern::Diamond.render(1, '*'), vec!["*"]);
    }

    #[test]
    fn inverted_triangle_shape() {
        assert_eq!(
            Pattern::InvertedTriangle.render(3, '#'),
            vec!["#####", " ###", "  #"]
        );
    }

    #[test]
    fn staircase_shape() {
        assert_eq!(Pattern::Staircase.render(3, 'o'), vec!["o", "oo", "ooo"]);
    }

    #[test]
    fn sine_wave_band() {
        let rows = Pattern::SineWave.render(3, 'x');
        assert_eq!(rows[0], "x         ");
        assert_eq!(rows[1], " x       x");
        assert_eq!(rows[2], "  x     x ");
        // Past the band width the diagonals leave the frame.
        let tall = Pattern::SineWave.render(12, 'x');
        assert_eq!(tall[10], "x         ");
        assert_eq!(tall[11], "          ");
    }

    #[test]
    fn every_row_width_is_consistent() {
        for h in [1, 2, 5, 10] {
            for row in Pattern::SineWave.render(h, '*') {
                assert_eq!(row.chars().count(), 10);
            }
        }
    }

    #[test]
    fn areas_and_symmetry() {
        assert_eq!(Pattern::Pyramid.area(5), 25);
        assert_eq!(Pattern::Diamond.area(5), 12);
        assert_eq!(Pattern::InvertedTriangle.area(5), 12);
        assert_eq!(Pattern::Staircase.area(5), 15);
        assert_eq!(Pattern::SineWave.area(5), 50);

        assert_eq!(Pattern::Pyramid.symmetry(), "Vertical");
        assert_eq!(Pattern::Diamond.symmetry(), "Vertical, Horizontal");
        assert_eq!(Pattern::Staircase.symmetry(), "None");
        assert_eq!(Pattern::SineWave.symmetry(), "Periodic");
    }
}
