//! The fixed solved board every puzzle is derived from.

use std::sync::LazyLock;

use kaedoku_core::DigitGrid;

/// 81-character notation of the built-in solved board.
///
/// Relabeling this board with a digit permutation is the only source of new
/// puzzles, so it must be a valid completed solution.
const TEMPLATE: &str =
    "123456789456789123789123456231897564564231897897564231312645978645978312978312645";

static GRID: LazyLock<DigitGrid> = LazyLock::new(|| {
    TEMPLATE
        .parse()
        .expect("built-in template is a valid grid")
});

/// Returns the built-in solved template board.
///
/// The template is process-wide, immutable, and a valid Sudoku solution.
///
/// # Examples
///
/// ```
/// use kaedoku_generator::solved_template;
///
/// let template = solved_template();
/// assert!(template.is_valid_solution());
/// ```
#[must_use]
pub fn solved_template() -> &'static DigitGrid {
    &GRID
}
