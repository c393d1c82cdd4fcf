/// Stem used when the client does not supply a usable filename.
const DEFAULT_STEM: &str = "document";
const MAX_STEM_CHARS: usize = 100;

/// Builds a safe attachment filename with the given extension.
///
/// Keeps only the last path component, drops control characters and quotes, strips a
/// duplicate extension, and falls back to `document.<ext>`.
pub fn sanitize_filename(requested: Option<&str>, extension: &str) -> String {
    let stem = requested
        .map(str::trim)
        .and_then(|name| name.rsplit(['/', '\\']).next())
        .map(|name| strip_extension(name, extension))
        .map(|name| {
            name.chars()
                .filter(|c| !c.is_control() && !matches!(c, '"' | ';'))
                .take(MAX_STEM_CHARS)
                .collect::<String>()
        })
        .map(|name| name.trim().trim_matches('.').to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_STEM.to_string());

    format!("{stem}.{extension}")
}

fn strip_extension<'a>(name: &'a str, extension: &str) -> &'a str {
    match name.rsplit_once('.') {
        Some((stem, ext)) if ext.eq_ignore_ascii_case(extension) => stem,
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_missing() {
        assert_eq!(sanitize_filename(None, "docx"), "document.docx");
        assert_eq!(sanitize_filename(Some("   "), "docx"), "document.docx");
    }

    #[test]
    fn test_keeps_simple_name() {
        assert_eq!(
            sanitize_filename(Some("jane-doe-resume"), "docx"),
            "jane-doe-resume.docx"
        );
    }

    #[test]
    fn test_does_not_double_extension() {
        assert_eq!(sanitize_filename(Some("cover.DOCX"), "docx"), "cover.docx");
    }

    #[test]
    fn test_strips_path_components() {
        assert_eq!(
            sanitize_filename(Some("../../etc/passwd"), "docx"),
            "passwd.docx"
        );
        assert_eq!(
            sanitize_filename(Some("C:\\Users\\me\\cv"), "docx"),
            "cv.docx"
        );
    }

    #[test]
    fn test_drops_header_breaking_characters() {
        assert_eq!(
            sanitize_filename(Some("a\"b;c\r\nd"), "docx"),
            "abcd.docx"
        );
    }

    #[test]
    fn test_dots_only_falls_back() {
        assert_eq!(sanitize_filename(Some(".."), "docx"), "document.docx");
    }
}
