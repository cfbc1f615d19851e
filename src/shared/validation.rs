use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches every run of characters that may not appear in an object key
    /// segment. Used to reduce an uploaded file name to a storage-safe slug.
    /// - "Employee Handbook 2024.pdf" -> "employee-handbook-2024-pdf"
    /// - "safety_procedures (v2).PDF" -> "safety-procedures-v2-pdf"
    pub static ref KEY_UNSAFE_REGEX: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Reduce a display file name to a lowercase slug safe to embed in a blob key
pub fn slugify_file_name(file_name: &str) -> String {
    KEY_UNSAFE_REGEX
        .replace_all(&file_name.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_plain_name() {
        assert_eq!(
            slugify_file_name("Employee Handbook 2024.pdf"),
            "employee-handbook-2024-pdf"
        );
    }

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(
            slugify_file_name("safety_procedures (v2).PDF"),
            "safety-procedures-v2-pdf"
        );
        assert_eq!(slugify_file_name("../../etc/passwd"), "etc-passwd");
    }

    #[test]
    fn test_slugify_degenerate_names() {
        assert_eq!(slugify_file_name(""), "");
        assert_eq!(slugify_file_name("???"), "");
    }
}
