use htmltex_latex_backend::blocks::wrap_sole_equation;
use htmltex_latex_backend::text::{decode_entities, escape_reserved};
use htmltex_latex_backend::{escape_latex, infer_packages, normalize_text, ConversionOptions};
use pretty_assertions::assert_eq;

fn keep_breaks() -> ConversionOptions {
    ConversionOptions {
        ignore_breaks: false,
        ..ConversionOptions::default()
    }
}

#[test]
fn plain_text_is_unchanged() {
    let options = ConversionOptions::default();
    for input in ["Hello, world.", "a < b > c", "x = 5\\Omega", "$x^2$"] {
        assert_eq!(normalize_text(input, &options), input);
    }
}

#[test]
fn tabs_are_removed() {
    assert_eq!(
        normalize_text("Styled\tText\t", &ConversionOptions::default()),
        "StyledText"
    );
}

#[test]
fn reserved_characters_are_escaped() {
    let options = ConversionOptions::default();
    assert_eq!(normalize_text("Styled%Text", &options), "Styled\\%Text");
    assert_eq!(normalize_text("Styled&Text", &options), "Styled\\&Text");
    assert_eq!(
        normalize_text("Styled#Text ~Text", &options),
        "Styled\\#Text \\textasciitilde{}Text"
    );
    assert_eq!(normalize_text("Styled|Text", &options), "Styled\\textbar{}Text");
}

#[test]
fn escaped_characters_are_not_escaped_twice() {
    let options = ConversionOptions::default();
    assert_eq!(normalize_text("Styled\\%Text", &options), "Styled\\%Text");
    assert_eq!(escape_reserved("100\\% \\& more"), "100\\% \\& more");
}

#[test]
fn line_breaks_collapse() {
    assert_eq!(normalize_text("Styled\nText", &keep_breaks()), "Styled\n\nText");
    assert_eq!(normalize_text("Styled\r\n\r\nText", &keep_breaks()), "Styled\n\nText");
    assert_eq!(
        normalize_text("Styled\nText", &ConversionOptions::default()),
        "StyledText"
    );
}

#[test]
fn double_encoded_entities_are_decoded() {
    let options = ConversionOptions::default();
    assert_eq!(normalize_text("Heading&#39;s", &options), "Heading's");
    assert_eq!(normalize_text("&#x41;&quot;", &options), "A\"");
    assert_eq!(normalize_text("fish &amp; chips", &options), "fish \\& chips");
    assert_eq!(decode_entities("\\&unknown;"), "\\&unknown;");
}

#[test]
fn dollar_math_is_preferred_anywhere_in_text() {
    let options = ConversionOptions {
        prefer_dollar_inline_math: true,
        ..ConversionOptions::default()
    };
    assert_eq!(
        normalize_text(
            "plain text \\(A,{\\rm{ }}B\\) and \\(C\\) then \\((a < b < c)\\)",
            &options
        ),
        "plain text $A,{\\rm{ }}B$ and $C$ then $(a < b < c)$"
    );
}

#[test]
fn full_escaper_covers_every_special_character() {
    assert_eq!(
        escape_latex("\\{}$^_%&#~|"),
        "\\textbackslash{}\\{\\}\\$\\^{}\\_\\%\\&\\#\\textasciitilde{}\\textbar{}"
    );
    assert_eq!(escape_latex("a < b"), "a < b");
}

#[test]
fn sole_equation_is_promoted() {
    assert_eq!(wrap_sole_equation("\\(x = 5\\Omega\\)"), "\\[x = 5\\Omega\\]");
    assert_eq!(wrap_sole_equation("$x = 5\\Omega$"), "\\[x = 5\\Omega\\]");
}

#[test]
fn unbalanced_dollars_are_left_alone() {
    assert_eq!(wrap_sole_equation("$x = 5$$"), "$x = 5$$");
    assert_eq!(wrap_sole_equation("$a$ and $b$"), "$a$ and $b$");
    assert_eq!(
        wrap_sole_equation("Some content $x = 5\\Omega$"),
        "Some content $x = 5\\Omega$"
    );
}

#[test]
fn packages_are_inferred_in_fixed_order() {
    let source = "<p>x</p><code>a</code><a href=\"#\">l</a><s>old</s>\\therefore<img src=\"a.png\">\\cfrac";
    assert_eq!(
        infer_packages(source),
        vec!["amsmath", "graphicx", "amssymb", "ulem", "hyperref", "listings"]
    );
    assert!(infer_packages("<p>plain</p>").is_empty());
}
