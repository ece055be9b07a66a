use crate::moves::rays::Direction;

pub const ROOK_DIRECTIONS: [Direction; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[inline]
pub const fn is_orthogonal(direction: Direction) -> bool {
    direction.0 == 0 || direction.1 == 0
}

#[cfg(test)]
mod tests {
    use super::{is_orthogonal, ROOK_DIRECTIONS};
    use crate::game_state::chess_types::Square;
    use crate::moves::rays::Ray;

    #[test]
    fn rook_rays_always_cover_fourteen_squares() {
        for label in ["a1", "d4", "h8"] {
            let square: Square = label.parse().expect("square should parse");
            let total: usize = ROOK_DIRECTIONS
                .iter()
                .map(|d| Ray::new(square, *d).count())
                .sum();
            assert_eq!(total, 14, "rook rays from {label}");
        }
        assert!(ROOK_DIRECTIONS.iter().all(|d| is_orthogonal(*d)));
    }
}
