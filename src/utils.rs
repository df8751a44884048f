//! Shared helpers for slugs and CLI paths.

use std::path::PathBuf;

use anyhow::Result;

/// Renders a URL slug as a human-readable title.
///
/// Splits on hyphens, upper-cases the first letter of each part, and joins
/// with spaces. Empty parts from doubled hyphens are preserved as-is, so
/// `"a--b"` becomes `"A  B"`.
///
/// # Examples
///
/// ```
/// use topictag::slug_to_title;
///
/// assert_eq!(slug_to_title("two-sum"), "Two Sum");
/// assert_eq!(slug_to_title("kth-smallest-element"), "Kth Smallest Element");
/// assert_eq!(slug_to_title(""), "");
/// ```
#[must_use]
pub fn slug_to_title(slug: &str) -> String {
    slug.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Gets the cross-platform default question bank path.
///
/// Returns the path as `{data_dir}/topictag/bank.json` where `data_dir` is:
/// - Linux: `~/.local/share`
/// - macOS: `~/Library/Application Support`
/// - Windows: `C:\Users\<user>\AppData\Roaming`
///
/// # Errors
///
/// Returns an error if the data directory cannot be determined.
pub fn default_bank_path() -> Result<PathBuf> {
    let data_dir =
        dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine data directory"))?;

    Ok(data_dir.join("topictag").join("bank.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_to_title_capitalizes_each_word() {
        assert_eq!(slug_to_title("two-sum"), "Two Sum");
        assert_eq!(
            slug_to_title("longest-substring-without-repeating-characters"),
            "Longest Substring Without Repeating Characters"
        );
    }

    #[test]
    fn slug_to_title_handles_single_word() {
        assert_eq!(slug_to_title("watermelon"), "Watermelon");
    }

    #[test]
    fn slug_to_title_preserves_empty_parts() {
        assert_eq!(slug_to_title("a--b"), "A  B");
        assert_eq!(slug_to_title("-lead"), " Lead");
    }

    #[test]
    fn slug_to_title_of_empty_slug_is_empty() {
        assert_eq!(slug_to_title(""), "");
    }

    #[test]
    fn default_bank_path_points_into_app_data_dir() {
        let path = default_bank_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("topictag"));
        assert!(path.to_string_lossy().contains("bank.json"));
    }
}
