/// Render converted HTML as readable Markdown-flavoured text.
pub fn html_to_text(html: &str) -> String {
    clean_markdown(&html2md::parse_html(html))
}

pub fn clean_markdown(md: &str) -> String {
    let mut result = md.to_string();

    // Collapse 3+ consecutive blank lines to 2
    while result.contains("\n\n\n") {
        result = result.replace("\n\n\n", "\n\n");
    }

    result = result
        .lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n");

    let trimmed = result.trim_end().to_string();
    if trimmed.is_empty() {
        String::new()
    } else {
        trimmed + "\n"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_blank_lines_and_trailing_space() {
        assert_eq!(clean_markdown("a  \n\n\n\nb\n\n"), "a\n\nb\n");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(clean_markdown("\n \n"), "");
    }

    #[test]
    fn html_text_keeps_words() {
        let text = html_to_text("<h1>Brand Guide</h1><p><span style=\"color: #1A73E8\">Blue</span> text</p>");
        assert!(text.contains("Brand Guide"));
        assert!(text.contains("Blue"));
    }
}
