/// Render a combination as a bracketed, comma-separated list: `[ab, ba]`.
pub fn format_combination<S: AsRef<str>>(words: &[S]) -> String {
    let mut out = String::from("[");
    for (idx, word) in words.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        out.push_str(word.as_ref());
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_like_a_list() {
        assert_eq!(format_combination(&["eat"]), "[eat]");
        assert_eq!(format_combination(&["ab", "ba", "ab"]), "[ab, ba, ab]");
        assert_eq!(format_combination::<&str>(&[]), "[]");
        assert_eq!(format_combination(&vec!["George".to_string(), "Bush".to_string()]), "[George, Bush]");
    }
}
