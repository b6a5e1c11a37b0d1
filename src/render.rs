//! Text rendering of a Stonehenge position.
//!
//! Draws the slanted hexagonal board with one character per cell (its
//! letter while unclaimed, the claiming player's digit afterwards) and
//! one marker per scoring line (`@` while open, the capturing player's
//! digit afterwards). Row markers sit to the left of their rows; the two
//! leading column markers sit above the board, the bottom-anchored
//! diagonal markers below it, and the side-diagonal markers to the right.

use std::fmt;

use crate::board::LineFamily;
use crate::core::Player;
use crate::state::StonehengeState;

fn pad(width: i32) -> String {
    " ".repeat(width.max(0) as usize)
}

impl StonehengeState {
    fn marker(&self, family: LineFamily, index: usize) -> char {
        let pos = self
            .layout()
            .lines()
            .iter()
            .position(|l| l.family == family && l.index == index)
            .expect("every rendered marker names a layout line");
        match self.line_status(pos).captor() {
            None => '@',
            Some(Player::One) => '1',
            Some(Player::Two) => '2',
        }
    }

    fn cell_glyph(&self, index: usize) -> char {
        let cell = self.layout().cell(index);
        match self
            .owner(cell)
            .expect("layout cells are always known")
            .player()
        {
            None => cell.raw(),
            Some(Player::One) => '1',
            Some(Player::Two) => '2',
        }
    }

    fn row_glyphs(&self, row: usize) -> String {
        let glyphs: Vec<String> = self.layout().rows()[row]
            .iter()
            .map(|&i| self.cell_glyph(i).to_string())
            .collect();
        glyphs.join(" - ")
    }
}

impl fmt::Display for StonehengeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.layout().size() as usize;
        // Indentation shrinks as rows widen, then grows back out; it can
        // go notionally negative on large boards, which pads to nothing.
        let mut k = n as i32 + 4;

        writeln!(
            f,
            "{}{}   {}",
            pad(k + 6),
            self.marker(LineFamily::FarDiagonal, 0),
            self.marker(LineFamily::FarDiagonal, 1)
        )?;
        writeln!(f, "{}/   /", pad(k + 5))?;

        write!(f, "{}", pad(k))?;
        for r in 0..n - 1 {
            writeln!(
                f,
                "{} - {}   {}",
                self.marker(LineFamily::Row, r),
                self.row_glyphs(r),
                self.marker(LineFamily::SideDiagonal, r)
            )?;
            k -= 1;
            let width = self.layout().rows()[r].len();
            writeln!(f, "{}{}/", pad(k + 4), "/ \\ ".repeat(width))?;
            k -= 2;
            write!(f, "{}", pad(k))?;
        }

        // The widest row carries no side marker.
        writeln!(
            f,
            " {} - {}",
            self.marker(LineFamily::Row, n - 1),
            self.row_glyphs(n - 1)
        )?;
        k -= 1;
        writeln!(f, "{}{}\\", pad(k + 7), "\\ / ".repeat(n))?;
        k -= 2;

        writeln!(
            f,
            "{}{} - {}   {}",
            pad(k + 6),
            self.marker(LineFamily::Row, n),
            self.row_glyphs(n),
            self.marker(LineFamily::SideDiagonal, n - 1)
        )?;
        writeln!(f, "{}{}\\", pad(k + 11), "\\   ".repeat(n - 1))?;

        let bottom: Vec<String> = (2..n + 2)
            .map(|i| self.marker(LineFamily::FarDiagonal, i).to_string())
            .collect();
        write!(f, "{}{}", pad(k + 13), bottom.join("   "))
    }
}
