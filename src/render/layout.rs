//! Pip placement for numeric ranks.

use crate::card::Rank;

/// One pip slot on a card face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pip {
    /// Left edge of the pip glyph.
    pub x: i64,
    /// Top edge of the pip glyph.
    pub y: i64,
    /// Whether the 180-degree-rotated glyph goes here.
    pub inverted: bool,
}

/// Returns the pip slots for `rank` on a `width` x `height` card.
///
/// The grid has three columns (left, center, right), four quarter-step rows,
/// and one vertical-center slot. Upright pips fill the top half and inverted
/// pips mirror them in the bottom half; Seven, Eight, and Ten place their
/// extras halfway between rows. Face ranks have no pips.
#[must_use]
pub fn pip_positions(rank: Rank, width: i64, height: i64) -> Vec<Pip> {
    let (w, h) = (width, height);
    let col = [9, w / 2 - 5, w - 20];
    let row = [7, 2 * h / 5 - 5, 3 * h / 5 - 5, h - 18];
    let mid = h / 2 - 6;

    let up = |x, y| Pip {
        x,
        y,
        inverted: false,
    };
    let down = |x, y| Pip {
        x,
        y,
        inverted: true,
    };

    match rank {
        Rank::Ace => vec![up(col[1], mid)],
        Rank::Two => vec![up(col[1], row[0]), down(col[1], row[3])],
        Rank::Three => vec![up(col[1], row[0]), up(col[1], mid), down(col[1], row[3])],
        Rank::Four => vec![
            up(col[0], row[0]),
            up(col[2], row[0]),
            down(col[0], row[3]),
            down(col[2], row[3]),
        ],
        Rank::Five => vec![
            up(col[0], row[0]),
            up(col[2], row[0]),
            up(col[1], mid),
            down(col[0], row[3]),
            down(col[2], row[3]),
        ],
        Rank::Six => vec![
            up(col[0], row[0]),
            up(col[2], row[0]),
            up(col[0], mid),
            up(col[2], mid),
            down(col[0], row[3]),
            down(col[2], row[3]),
        ],
        Rank::Seven => vec![
            up(col[0], row[0]),
            up(col[2], row[0]),
            up(col[0], mid),
            up(col[2], mid),
            up(col[1], (mid + row[0]) / 2),
            down(col[0], row[3]),
            down(col[2], row[3]),
        ],
        Rank::Eight => vec![
            up(col[0], row[0]),
            up(col[2], row[0]),
            up(col[0], mid),
            up(col[2], mid),
            up(col[1], (mid + row[0]) / 2),
            down(col[0], row[3]),
            down(col[2], row[3]),
            down(col[1], (row[3] + mid) / 2),
        ],
        Rank::Nine => {
            let mut pips = Vec::with_capacity(9);
            for i in 0..4 {
                pips.push(up(col[(i % 2) * 2], row[i / 2]));
                pips.push(down(col[(i % 2) * 2], row[i / 2 + 2]));
            }
            pips.push(up(col[1], mid));
            pips
        }
        Rank::Ten => {
            let mut pips = Vec::with_capacity(10);
            for i in 0..4 {
                pips.push(up(col[(i % 2) * 2], row[i / 2]));
                pips.push(down(col[(i % 2) * 2], row[i / 2 + 2]));
            }
            pips.push(up(col[1], (row[1] + row[0]) / 2));
            pips.push(down(col[1], (row[3] + row[2]) / 2));
            pips
        }
        Rank::Jack | Rank::Queen | Rank::King => Vec::new(),
    }
}
