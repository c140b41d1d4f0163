use super::Pattern;

impl Pattern {
    /// Live cells of the pattern as (row, col) offsets from its top-left corner
    pub fn cells(&self) -> &'static [(usize, usize)] {
        match self {
            Pattern::Blinker => &[
                (0, 0), (0, 1), (0, 2),
            ],
            Pattern::Toad => &[
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
            Pattern::Block => &[
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
            Pattern::Glider => &[
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
            Pattern::LightweightSpaceship => &[
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ],
            Pattern::GosperGliderGun => &[
                // Left block
                (4, 0), (5, 0),
                (4, 1), (5, 1),

                // Left ship
                (4, 10), (5, 10), (6, 10),
                (3, 11), (7, 11),
                (2, 12), (8, 12),
                (2, 13), (8, 13),
                (5, 14),
                (3, 15), (7, 15),
                (4, 16), (5, 16), (6, 16),
                (5, 17),

                // Right ship
                (2, 20), (3, 20), (4, 20),
                (2, 21), (3, 21), (4, 21),
                (1, 22), (5, 22),
                (0, 24), (1, 24), (5, 24), (6, 24),

                // Right block
                (2, 34), (3, 34),
                (2, 35), (3, 35),
            ],
        }
    }
}
