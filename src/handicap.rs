use crate::model::HOLES;

const STANDARD_SLOPE: f64 = 113.0;

/// Course handicap for a tee: `round(index * slope / 113 + (rating - par))`.
///
/// Returns 0 when the tee has no slope or rating on file, which makes net
/// scoring fall back to gross for that player. Halves round away from zero.
#[must_use]
pub fn course_handicap(index: f64, slope: Option<u32>, rating: Option<f64>, par: i32) -> i32 {
    let (Some(slope), Some(rating)) = (slope.filter(|&s| s != 0), rating.filter(|&r| r != 0.0))
    else {
        return 0;
    };
    let raw = index * f64::from(slope) / STANDARD_SLOPE + (rating - f64::from(par));
    raw.round() as i32
}

/// Spread a course handicap over the 18 holes by difficulty rank.
///
/// Every hole gets `|ch| / 18` strokes; the remainder goes one apiece to the
/// hardest holes (rank 1 first). Plus handicaps give strokes back, so every
/// value carries the sign of `course_handicap`.
pub fn stroke_allocation(course_handicap: i32, hole_difficulty: &[u8; HOLES]) -> [i32; HOLES] {
    let sign = if course_handicap >= 0 { 1 } else { -1 };
    let abs = course_handicap.unsigned_abs() as usize;
    let base = (abs / HOLES) as i32 * sign;
    let remainder = abs % HOLES;

    let mut allocation = [base; HOLES];

    let mut by_rank: Vec<usize> = (0..HOLES).collect();
    by_rank.sort_by_key(|&h| hole_difficulty[h]);
    for &hole in by_rank.iter().take(remainder) {
        allocation[hole] += sign;
    }
    allocation
}
