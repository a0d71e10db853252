//! LaTeX snippet templates. Pure string functions, no escaping.

pub fn bold(text: &str) -> String {
    format!("\\textbf{{{}}}", text)
}

pub fn italic(text: &str) -> String {
    format!("\\textit{{{}}}", text)
}

pub fn underline(text: &str) -> String {
    format!("\\underline{{{}}}", text)
}

/// Requires `ulem`.
pub fn strikethrough(text: &str) -> String {
    format!("\\sout{{{}}}", text)
}

pub fn subscript(text: &str) -> String {
    format!("$_{{{}}}$", text)
}

pub fn superscript(text: &str) -> String {
    format!("$^{{{}}}$", text)
}

pub fn hyperlink(url: &str, text: &str) -> String {
    format!("\\href{{{}}}{{{}}}", url, text)
}

pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Ends with its own newline.
pub const DIVIDER: &str = "\\hrule\n";

pub fn section(text: &str) -> String {
    format!("\\section*{{\\centering{{{}}}}}", text)
}

pub fn subsection(text: &str) -> String {
    format!("\\subsection*{{{}}}", text)
}

pub fn subsubsection(text: &str) -> String {
    format!("\\subsubsection*{{{}}}", text)
}

pub fn item(text: &str) -> String {
    format!("\t\\item {}", text)
}

pub fn itemize(items: &[String]) -> String {
    environment("itemize", &items.join("\n"))
}

pub fn enumerate(items: &[String]) -> String {
    environment("enumerate", &items.join("\n"))
}

pub fn listing(code: &str) -> String {
    environment("lstlisting", code)
}

pub fn center(text: &str) -> String {
    environment("center", &format!("\t{}", text))
}

fn environment(name: &str, body: &str) -> String {
    format!("\\begin{{{name}}}\n{body}\n\\end{{{name}}}")
}

pub fn tabular(columns: usize, rows: &[String]) -> String {
    let mut out = String::new();
    out.push_str("\\begin{tabular}{|");
    for _ in 0..columns {
        out.push_str("c|");
    }
    out.push_str("}\n\t\\hline\n");
    for row in rows {
        out.push('\t');
        out.push_str(row);
        out.push_str(" \\\\\n\t\\hline\n");
    }
    out.push_str("\t\\end{tabular}");
    out
}

/// Layout modifiers for `\includegraphics`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageLayout<'a> {
    pub width: Option<&'a str>,
    pub height: Option<&'a str>,
    pub keep_aspect_ratio: bool,
    pub centered: bool,
}

pub fn image(path: &str, layout: &ImageLayout<'_>) -> String {
    let mut opts = Vec::new();
    if let Some(width) = layout.width {
        opts.push(format!("width={}", width));
    }
    if let Some(height) = layout.height {
        opts.push(format!("height={}", height));
    }
    if layout.keep_aspect_ratio && !opts.is_empty() {
        opts.push("keepaspectratio".to_string());
    }
    let opt_str = if opts.is_empty() {
        String::new()
    } else {
        format!("[{}]", opts.join(","))
    };
    let directive = format!("\\includegraphics{}{{{}}}", opt_str, path);
    if layout.centered {
        center(&directive)
    } else {
        directive
    }
}

pub fn document_class(class: &str) -> String {
    format!("\\documentclass{{{}}}", class)
}

pub fn use_packages(packages: &[String]) -> String {
    packages
        .iter()
        .map(|name| format!("\\usepackage{{{}}}", name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Title block followed by `\begin{document}`.
pub fn begin_document(title: Option<&str>, author: Option<&str>, include_date: bool) -> String {
    let mut lines: Vec<String> = Vec::new();
    if let Some(title) = title {
        lines.push(format!("\\title{{{}}}", title));
    }
    if let Some(author) = author {
        lines.push(format!("\\author{{{}}}", author));
    }
    if include_date {
        lines.push("\\date{\\today}".to_string());
    }
    if lines.is_empty() {
        lines.push("\\begin{document}".to_string());
    } else {
        lines.push("\n\\begin{document}".to_string());
    }
    if title.is_some() {
        lines.push("\n\\maketitle".to_string());
    }
    lines.join("\n")
}

/// Starts with its own newline.
pub const END_DOCUMENT: &str = "\n\\end{document}";
