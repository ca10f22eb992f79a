/// Characters kept as-is besides alphanumerics.
const SAFE_PUNCTUATION: &[char] = &[' ', '.', '_', '-'];

/// Replace every character that is not alphanumeric, space, `.`, `_` or `-`
/// with an underscore.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || SAFE_PUNCTUATION.contains(&c) {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// A stem made only of dots and spaces would name `.`/`..` or a hidden,
/// blank-looking file.
pub fn is_usable_file_stem(stem: &str) -> bool {
    stem.chars().any(|c| c != '.' && c != ' ')
}
