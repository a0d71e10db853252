//! Unit tests for the block walker and converters over hand-built trees

use std::cell::RefCell;

use pretty_assertions::assert_eq;
use url::Url;

use super::*;

fn el(name: &str) -> Element {
    Element::new(name)
}

fn render_with(nodes: &[Node], options: &ConversionOptions) -> String {
    let cx = RenderContext::new(options, &NoopFetcher).with_id_source(|| "image2".to_string());
    convert(nodes, &cx)
}

fn render(nodes: &[Node]) -> String {
    render_with(nodes, &ConversionOptions::default())
}

fn p(text: &str) -> Node {
    el("p").with_text(text).into()
}

#[derive(Default)]
struct RecordingFetcher {
    urls: RefCell<Vec<String>>,
}

impl ImageFetcher for RecordingFetcher {
    fn fetch(&self, url: &Url, dest: &Path) -> Result<(), FetchError> {
        self.urls.borrow_mut().push(url.to_string());
        std::fs::write(dest, b"png")?;
        Ok(())
    }
}

#[test]
fn test_nested_inline_order_is_outermost_first() {
    let nodes = vec![el("p")
        .with_text("Styled ")
        .with_child(el("b").with_child(el("i").with_text("Text")))
        .into()];
    assert_eq!(render(&nodes), "Styled \\textbf{\\textit{Text}}");
}

#[test]
fn test_inline_formatting_tags() {
    let cases = [
        ("strong", "\\textbf{X}"),
        ("em", "\\textit{X}"),
        ("u", "\\underline{X}"),
        ("s", "\\sout{X}"),
        ("sub", "$_{X}$"),
        ("sup", "$^{X}$"),
        ("span", "X"),
    ];
    for (tag, expected) in cases {
        let nodes = vec![el(tag).with_text("X").into()];
        assert_eq!(render(&nodes), expected, "tag <{}>", tag);
    }
}

#[test]
fn test_empty_inline_element_renders_nothing() {
    let nodes = vec![el("p").with_text("a").with_child(el("b")).with_text("b").into()];
    assert_eq!(render(&nodes), "ab");
}

#[test]
fn test_anchor_without_href_keeps_text() {
    let nodes = vec![el("p")
        .with_text("visit ")
        .with_child(el("a").with_text("Google"))
        .into()];
    assert_eq!(render(&nodes), "visit Google");
}

#[test]
fn test_anchor_href_is_verbatim() {
    let nodes = vec![el("a")
        .with_attr("href", "https://example.com/?q=a_b")
        .with_text("link")
        .into()];
    assert_eq!(render(&nodes), "\\href{https://example.com/?q=a_b}{link}");
}

#[test]
fn test_inline_run_is_flushed_before_block() {
    let nodes = vec![
        Node::text("Three concentric metal shells"),
        el("br").into(),
        Node::text("More text here."),
        p(" Inner p tag "),
    ];
    let options = ConversionOptions {
        ignore_breaks: false,
        ..ConversionOptions::default()
    };
    assert_eq!(
        render_with(&nodes, &options),
        "Three concentric metal shells\n\nMore text here.\n\nInner p tag"
    );
}

#[test]
fn test_br_becomes_space_when_ignoring_breaks() {
    let nodes = vec![el("p")
        .with_text("Styled")
        .with_child(el("br"))
        .with_text("Text")
        .into()];
    assert_eq!(render(&nodes), "Styled Text");
}

#[test]
fn test_hr_is_its_own_block() {
    let nodes = vec![p("Text"), el("hr").into(), p("More Text")];
    assert_eq!(render(&nodes), "Text\n\n\\hrule\n\n\nMore Text");
}

#[test]
fn test_containers_recurse_and_empty_ones_vanish() {
    let nodes = vec![
        el("div").into(),
        el("section")
            .with_child(el("div").with_text("Hello World!"))
            .into(),
        el("aside").with_text("Aside").into(),
    ];
    assert_eq!(render(&nodes), "Hello World!\n\nAside");
}

#[test]
fn test_heading_levels() {
    let nodes: Vec<Node> = (1..=6)
        .map(|level| el(&format!("h{}", level)).with_text("T").into())
        .collect();
    assert_eq!(
        render(&nodes),
        [
            "\\section*{\\centering{T}}",
            "\\subsection*{T}",
            "\\subsubsection*{T}",
            "\\subsubsection*{T}",
            "\\subsubsection*{T}",
            "\\subsubsection*{T}",
        ]
        .join("\n\n")
    );
}

#[test]
fn test_list_drops_non_item_children() {
    let list = el("ol")
        .with_text("\n  ")
        .with_child(el("li").with_text("One"))
        .with_child(el("span").with_text("stray"))
        .with_child(el("li").with_text("Two"));
    assert_eq!(
        render(&[list.into()]),
        "\\begin{enumerate}\n\t\\item One\n\t\\item Two\n\\end{enumerate}"
    );
}

#[test]
fn test_list_items_go_through_block_walker() {
    let list = el("ul").with_child(
        el("li")
            .with_child(el("p").with_text("Intro"))
            .with_child(el("ul").with_child(el("li").with_text("Nested"))),
    );
    assert_eq!(
        render(&[list.into()]),
        "\\begin{itemize}\n\t\\item Intro\n\n\\begin{itemize}\n\t\\item Nested\n\\end{itemize}\n\\end{itemize}"
    );
}

#[test]
fn test_list_without_items_renders_nothing() {
    let nodes = vec![el("ul").with_text(" ").into(), p("after")];
    assert_eq!(render(&nodes), "after");
}

#[test]
fn test_table_under_synthesized_tbody() {
    let row = |tag: &str, a: &str, b: &str| {
        el("tr")
            .with_child(el(tag).with_text(a))
            .with_child(el(tag).with_text(b))
    };
    let table = el("table").with_child(
        el("tbody")
            .with_child(row("th", "H1", "H2"))
            .with_child(row("td", "A", "B")),
    );
    assert_eq!(
        render(&[table.into()]),
        "\\begin{tabular}{|c|c|}\n\t\\hline\n\tH1 & H2 \\\\\n\t\\hline\n\tA & B \\\\\n\t\\hline\n\t\\end{tabular}"
    );
}

#[test]
fn test_table_with_thead_and_tbody() {
    let table = el("table")
        .with_child(el("thead").with_child(el("tr").with_child(el("th").with_text("H"))))
        .with_child(el("tbody").with_child(el("tr").with_child(el("td").with_text("V"))));
    let out = render(&[table.into()]);
    assert!(out.starts_with("\\begin{tabular}{|c|}"));
    assert!(out.find("H \\\\").unwrap() < out.find("V \\\\").unwrap());
}

#[test]
fn test_empty_tables_render_nothing() {
    let nodes = vec![
        el("table").into(),
        el("table").with_child(el("tbody")).into(),
        p("x"),
    ];
    assert_eq!(render(&nodes), "x");
}

#[test]
fn test_code_block_uses_listing() {
    let nodes = vec![el("code").with_text("console.log('Hello World!');").into()];
    assert_eq!(
        render(&nodes),
        "\\begin{lstlisting}\nconsole.log('Hello World!');\n\\end{lstlisting}"
    );
}

#[test]
fn test_image_without_src_renders_nothing() {
    let nodes = vec![el("img").with_attr("alt", "x").into()];
    assert_eq!(render(&nodes), "");
}

#[test]
fn test_image_inside_paragraph_uses_generated_name() {
    let dir = tempfile::tempdir().unwrap();
    let options = ConversionOptions {
        compilation_dir: Some(dir.path().to_path_buf()),
        ..ConversionOptions::default()
    };
    let nodes = vec![el("p").with_child(el("img").with_attr("src", "image.png")).into()];
    assert_eq!(
        render_with(&nodes, &options),
        "\\begin{center}\n\t\\includegraphics{images/image2.png}\n\\end{center}"
    );
}

#[test]
fn test_remote_image_is_fetched_once() {
    let dir = tempfile::tempdir().unwrap();
    let options = ConversionOptions {
        compilation_dir: Some(dir.path().to_path_buf()),
        autogen_image_names: false,
        center_images: false,
        ..ConversionOptions::default()
    };
    let fetcher = RecordingFetcher::default();
    let cx = RenderContext::new(&options, &fetcher);
    let img: Node = el("img")
        .with_attr("src", "https://example.com/assets/photo.png?size=large")
        .into();

    let first = convert(std::slice::from_ref(&img), &cx);
    let second = convert(std::slice::from_ref(&img), &cx);

    assert_eq!(first, "\\includegraphics{images/photo.png}");
    assert_eq!(second, first);
    assert!(dir.path().join("images").join("photo.png").exists());
    assert_eq!(
        *fetcher.urls.borrow(),
        vec!["https://example.com/assets/photo.png?size=large".to_string()]
    );
}

#[test]
fn test_failed_fetch_still_emits_template() {
    let dir = tempfile::tempdir().unwrap();
    let options = ConversionOptions {
        compilation_dir: Some(dir.path().to_path_buf()),
        autogen_image_names: false,
        debug: true,
        ..ConversionOptions::default()
    };
    let nodes = vec![el("img").with_attr("src", "https://example.com/a.gif").into()];
    assert_eq!(
        render_with(&nodes, &options),
        "\\begin{center}\n\t\\includegraphics{images/a.gif}\n\\end{center}"
    );
    assert!(dir.path().join("images").is_dir());
    assert!(!dir.path().join("images").join("a.gif").exists());
}

#[test]
fn test_document_wrapper_surrounds_body() {
    let options = ConversionOptions {
        include_document_wrapper: true,
        include_packages: Some(vec!["graphicx".to_string(), "hyperref".to_string()]),
        title: Some("Altered Carbon".to_string()),
        ..ConversionOptions::default()
    };
    assert_eq!(
        render_with(&[p("Body")], &options),
        [
            "\\documentclass{article}",
            "\\usepackage{graphicx}\n\\usepackage{hyperref}",
            "\\title{Altered Carbon}\n\n\\begin{document}\n\n\\maketitle",
            "Body",
            "\n\\end{document}",
        ]
        .join("\n\n")
    );
}

#[test]
fn test_wrapper_is_not_repeated_for_nested_containers() {
    let options = ConversionOptions {
        include_document_wrapper: true,
        ..ConversionOptions::default()
    };
    let nodes = vec![el("div").with_child(el("div").with_text("Deep")).into()];
    let out = render_with(&nodes, &options);
    assert_eq!(out.matches("\\documentclass").count(), 1);
    assert_eq!(out.matches("\\end{document}").count(), 1);
}
