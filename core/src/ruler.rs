//! # Bit Ruler
//!
//! Draws a bar such as `|------ 17 -------|` that spans the same columns as
//! `n` bits printed in 8-bit groups separated by single spaces. A ruler for
//! `n` bits is therefore [`ruler_len`]`(n)` characters long.

const BORDER: &str = "|";
const PAD: &str = " ";
const DASH: &str = "-";

/// Rulers too short to hold borders, padding and label at once.
const SMALL_RULERS: [&str; 5] = ["", "1", "2 ", "|3|", "|4 |"];

/// Width of `n` bits in grouped binary form: one column per bit plus one
/// separator between consecutive octets.
pub fn ruler_len(n: usize) -> usize {
    if n == 0 { 0 } else { n + (n - 1) / 8 }
}

/// Renders the ruler for `n` bits, label centered, always exactly
/// [`ruler_len`]`(n)` characters.
pub fn mask_line(n: usize) -> String {
    match SMALL_RULERS.get(n) {
        Some(ruler) => ruler.to_string(),
        None => dashed(n),
    }
}

/// General layout `|<left> n <right>|`. When the dash count is odd the
/// extra dash goes to the right-hand run.
fn dashed(n: usize) -> String {
    let label: String = n.to_string();
    let chrome: usize = 2 * BORDER.len() + 2 * PAD.len() + label.len();
    let fill: usize = ruler_len(n).saturating_sub(chrome);
    let (left, right): (usize, usize) = split_fill(fill);

    let left_run: String = DASH.repeat(left);
    let right_run: String = DASH.repeat(right);
    let parts: [&str; 7] = [BORDER, &left_run, PAD, &label, PAD, &right_run, BORDER];
    parts.concat()
}

/// Splits a dash count into left and right runs, remainder on the right.
fn split_fill(fill: usize) -> (usize, usize) {
    let left: usize = fill / 2;
    (left, fill - left)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: [&str; 19] = [
        "",
        "1",
        "2 ",
        "|3|",
        "|4 |",
        "| 5 |",
        "| 6 -|",
        "|- 7 -|",
        "|- 8 --|",
        "|-- 9 ---|",
        "|-- 10 ---|",
        "|--- 11 ---|",
        "|--- 12 ----|",
        "|---- 13 ----|",
        "|---- 14 -----|",
        "|----- 15 -----|",
        "|----- 16 ------|",
        "|------ 17 -------|",
        "|------- 18 -------|",
    ];

    #[test]
    fn matches_fixtures() {
        for (n, expected) in EXPECTED.iter().enumerate() {
            assert_eq!(mask_line(n), *expected, "ruler for {n} bits");
        }
    }

    #[test]
    fn length_law_holds_for_every_address_width() {
        for n in 0..=128 {
            let expected: usize = if n == 0 { 0 } else { n + (n - 1) / 8 };
            assert_eq!(mask_line(n).len(), expected, "ruler for {n} bits");
        }
    }

    #[test]
    fn label_is_always_present() {
        for n in 1..=128 {
            assert!(mask_line(n).contains(&n.to_string()), "ruler for {n} bits");
        }
    }

    #[test]
    fn full_width_rulers() {
        let v4 = mask_line(32);
        assert_eq!(v4.len(), 35);
        assert_eq!(v4, format!("|{} 32 {}|", "-".repeat(14), "-".repeat(15)));

        let v6 = mask_line(128);
        assert_eq!(v6.len(), 143);
        assert!(v6.starts_with("|-") && v6.ends_with("-|"));
    }

    #[test]
    fn odd_fill_puts_extra_dash_on_the_right() {
        assert_eq!(split_fill(0), (0, 0));
        assert_eq!(split_fill(1), (0, 1));
        assert_eq!(split_fill(13), (6, 7));
        assert_eq!(split_fill(14), (7, 7));
    }

    #[test]
    fn general_layout_clamps_for_tiny_rulers() {
        // below five bits the chrome alone is wider than the ruler
        assert_eq!(dashed(0), "| 0 |");
        assert_eq!(dashed(1), "| 1 |");
        assert_eq!(dashed(4), "| 4 |");
    }

    #[test]
    fn ruler_len_matches_grouped_binary_width() {
        assert_eq!(ruler_len(0), 0);
        assert_eq!(ruler_len(8), 8);
        assert_eq!(ruler_len(9), 10);
        assert_eq!(ruler_len(32), 35);
        assert_eq!(ruler_len(128), 143);
    }
}
