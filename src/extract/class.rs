// src/extract/class.rs

/// Split a course designator like "CSE 3666" into ("CSE", "3666").
///
/// The department is the text before the first whitespace run, upper-cased.
/// A single token yields an empty number; empty or whitespace-only input
/// yields ("", "").
pub fn split_class(class_name: &str) -> (String, String) {
    let trimmed = class_name.trim();
    if trimmed.is_empty() {
        return (String::new(), String::new());
    }
    match trimmed.split_once(char::is_whitespace) {
        Some((dept, rest)) => (dept.to_uppercase(), rest.trim_start().to_string()),
        None => (trimmed.to_uppercase(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_dept_and_number() {
        assert_eq!(
            split_class("CSE 3666"),
            ("CSE".to_string(), "3666".to_string())
        );
    }

    #[test]
    fn uppercases_department() {
        assert_eq!(
            split_class("math 1010q"),
            ("MATH".to_string(), "1010q".to_string())
        );
    }

    #[test]
    fn collapses_interior_whitespace_run() {
        assert_eq!(
            split_class("  ENGL   1007  "),
            ("ENGL".to_string(), "1007".to_string())
        );
    }

    #[test]
    fn single_token_has_empty_number() {
        assert_eq!(split_class("CSE"), ("CSE".to_string(), String::new()));
    }

    #[test]
    fn number_may_contain_further_whitespace() {
        // Only the first whitespace run splits; the rest stays in the number.
        assert_eq!(
            split_class("CSE 3666 W"),
            ("CSE".to_string(), "3666 W".to_string())
        );
    }

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(split_class(""), (String::new(), String::new()));
        assert_eq!(split_class("   "), (String::new(), String::new()));
    }
}
