/// Width of the `=` separator lines framing the banner.
pub const SEPARATOR_WIDTH: usize = 80;

/// The two literal header lines written above the extracted text.
#[derive(Debug, Clone)]
pub struct Banner {
    pub title: String,
    pub subtitle: String,
}

/// Compose the full output document: separator, title, subtitle,
/// separator, blank line, then the extracted text verbatim.
pub fn render_document(banner: &Banner, text: &str) -> String {
    let separator = "=".repeat(SEPARATOR_WIDTH);
    format!(
        "{separator}\n{}\n{}\n{separator}\n\n{text}",
        banner.title, banner.subtitle
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banner() -> Banner {
        Banner {
            title: "PAGE 1 CONTENT".into(),
            subtitle: "sample.pdf".into(),
        }
    }

    #[test]
    fn renders_exact_layout() {
        let document = render_document(&banner(), "Hello World");
        let separator = "=".repeat(80);
        assert_eq!(
            document,
            format!("{separator}\nPAGE 1 CONTENT\nsample.pdf\n{separator}\n\nHello World")
        );
    }

    #[test]
    fn text_after_blank_line_is_verbatim() {
        let document = render_document(&banner(), "Hello World");
        let (_, body) = document.split_once("\n\n").unwrap();
        assert_eq!(body, "Hello World");
    }

    #[test]
    fn empty_text_leaves_nothing_after_blank_line() {
        let document = render_document(&banner(), "");
        assert!(document.ends_with("\n\n"));
    }
}
