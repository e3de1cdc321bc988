/// Clean up a raw text block before field extraction.
///
/// - Characters outside the printable ASCII set become a space (never
///   dropped, so words on either side stay apart). Printable means letters,
///   digits, punctuation, space, `\t`, `\n`, `\r`, `\x0b` and `\x0c`.
/// - Runs of spaces collapse to one space, then runs of newlines collapse to
///   one newline.
///
/// The result is a fixpoint: normalizing it again changes nothing.
pub fn normalize(raw: &str) -> String {
    let printable: String = raw.chars().map(|c| if is_printable(c) { c } else { ' ' }).collect();
    let spaces = regex!(r" {2,}").replace_all(&printable, " ");
    regex!(r"\n{2,}").replace_all(&spaces, "\n").into_owned()
}

fn is_printable(c: char) -> bool {
    c.is_ascii_graphic() || matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_non_printable_with_space() {
        assert_eq!(normalize("Dar\u{a0}es\u{200b}Salaam"), "Dar es Salaam");
        assert_eq!(normalize("6°10′S"), "6 10 S");
    }

    #[test]
    fn collapses_spaces_created_by_replacement() {
        assert_eq!(normalize("Capital\u{a0}\u{a0} Dodoma"), "Capital Dodoma");
    }

    #[test]
    fn collapses_newline_runs() {
        assert_eq!(normalize("Capital\n\n\nDodoma\n\nLargest city"), "Capital\nDodoma\nLargest city");
    }

    #[test]
    fn keeps_other_printable_whitespace() {
        assert_eq!(normalize("a\tb\r\nc"), "a\tb\r\nc");
    }

    #[test]
    fn leaves_clean_text_alone() {
        let clean = "Population (2020) 126,014,024 [3]\nOfficial languages German";

        assert_eq!(normalize(clean), clean);
    }

    #[test]
    fn is_idempotent_on_noisy_input() {
        let noisy = "  Born\u{a0}\u{a0}Barack\n\n\u{2009}\n\nObama  (1961-08-04)\u{feff}  ";
        let once = normalize(noisy);

        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize(""), "");
    }
}
