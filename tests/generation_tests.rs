//! End-to-end generation scenarios.
//!
//! The concrete constructs a real parser would supply (elements, text
//! runs, interpolations, control flow, comments) live outside the core
//! crate; the small implementations here stand in for them and exercise
//! the full path from tree construction to generated host code.

use loom_codegen::{
    ClosureConstruct, CodegenError, CodegenErrorKind, Config, Construct, Evaluation, Format,
    NodeRef, Tree, Trim, TRIM_LEFT, TRIM_RIGHT,
};
use pretty_assertions::assert_eq;

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

// ── Element: expression is the tag name, trailing `/` self-closes ───────

struct Element;

impl Construct for Element {
    fn evaluate(&self, expression: &str, config: &Config) -> Result<Evaluation, CodegenError> {
        if expression.is_empty() {
            return Err(CodegenError::invalid_expression(expression, "missing tag name"));
        }
        if let Some(name) = expression.strip_suffix('/') {
            let opener = match config.format {
                Format::Xhtml => format!("<{name}/>"),
                Format::Html4 | Format::Html5 => format!("<{name}>"),
            };
            Ok(Evaluation::new().opener(opener))
        } else {
            Ok(Evaluation::tag(
                format!("<{expression}>"),
                format!("</{expression}>"),
            ))
        }
    }
}

// ── Text: expression is a literal text run ──────────────────────────────

struct Text;

impl Construct for Text {
    fn emit(&self, node: &NodeRef<'_>) -> Option<String> {
        if node.is_preserved() {
            // Raw markup so a preserving ancestor can fold it.
            Some(node.expression().to_string())
        } else {
            Some(node.emit_text(node.expression()))
        }
    }
}

// ── Interpolation: expression is a host expression to evaluate ──────────

struct Interpolation;

impl Construct for Interpolation {
    fn emit(&self, node: &NodeRef<'_>) -> Option<String> {
        Some(node.emit_value(node.expression(), node.config().escape_html))
    }
}

// ── Conditional: expression is a host condition wrapping the children ───

struct Conditional;

impl Construct for Conditional {
    fn emit(&self, node: &NodeRef<'_>) -> Option<String> {
        let mut output = node.emit_code(&format!("if ({}) {{", node.expression()));
        for child in node.children() {
            output.push_str(&child.render());
        }
        output.push_str(&node.emit_code("}"));
        Some(output)
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn comment() -> impl Construct {
    ClosureConstruct::new(|_, _| Ok(Evaluation::new().silent(true)))
}

fn preserved(opener: &'static str, closer: &'static str) -> impl Construct {
    ClosureConstruct::new(move |_, _| Ok(Evaluation::tag(opener, closer).preserve(true)))
}

fn level(block: usize) -> Config {
    Config::default().block_level(block)
}

// ── Scenarios ───────────────────────────────────────────────────────────

#[test]
fn test_nested_document() {
    init_tracing();

    let mut tree = Tree::new(Config::default());
    let root = tree.root();
    let html = tree.append(root, "html", Element, level(0)).unwrap();
    let body = tree.append(html, "body", Element, level(1)).unwrap();
    let p = tree.append(body, "p", Element, level(2)).unwrap();
    tree.append(p, "Welcome!", Text, level(3)).unwrap();

    let expected = "\
$o.push(\"<html>\");
$o.push(\"  <body>\");
$o.push(\"    <p>\");
$o.push(\"      Welcome!\");
$o.push(\"    </p>\");
$o.push(\"  </body>\");
$o.push(\"</html>\");
";
    assert_eq!(tree.render(), expected);
}

#[test]
fn test_conditional_wraps_children_in_running_code() {
    let mut tree = Tree::new(Config::default());
    let root = tree.root();
    let cond = tree
        .append(root, "user.active", Conditional, Config::default())
        .unwrap();
    let p = tree
        .append(cond, "p", Element, Config::default().code_block_level(1).block_level(1))
        .unwrap();
    tree.append(p, "hi", Text, Config::default().code_block_level(1).block_level(2))
        .unwrap();

    let expected = "\
if (user.active) {
  $o.push(\"  <p>\");
  $o.push(\"    hi\");
  $o.push(\"  </p>\");
}
";
    assert_eq!(tree.render(), expected);
}

#[test]
fn test_interpolation_escaped_and_indented() {
    let mut tree = Tree::new(Config::default());
    let root = tree.root();
    let p = tree.append(root, "p", Element, level(0)).unwrap();
    tree.append(p, "user.name", Interpolation, level(1)).unwrap();

    let expected = "\
$o.push(\"<p>\");
$o.push(\"  \" + $e(user.name));
$o.push(\"</p>\");
";
    assert_eq!(tree.render(), expected);
}

#[test]
fn test_interpolation_honours_disabled_escaping() {
    let mut tree = Tree::new(Config::default());
    let root = tree.root();
    tree.append(root, "raw.html", Interpolation, Config::default().escape_html(false))
        .unwrap();

    assert_eq!(tree.render(), "$o.push(raw.html);\n");
}

#[test]
fn test_preserved_region_folds_to_one_literal() {
    init_tracing();

    let mut tree = Tree::new(Config::default());
    let root = tree.root();
    let textarea = tree
        .append(root, "textarea", preserved("<textarea>", "</textarea>"), level(0))
        .unwrap();
    tree.append(textarea, "line 1", Text, level(1)).unwrap();
    tree.append(textarea, "br/", Element, level(1)).unwrap();
    tree.append(textarea, "line 2", Text, level(1)).unwrap();

    assert_eq!(
        tree.render(),
        "$o.push(\"<textarea>line 1\\n<br>\\nline 2</textarea>\");\n"
    );
}

#[test]
fn test_silent_subtree_is_fully_suppressed() {
    let mut tree = Tree::new(Config::default());
    let root = tree.root();
    let hidden = tree.append(root, "-#", comment(), level(0)).unwrap();
    let p = tree.append(hidden, "p", Element, level(1)).unwrap();
    tree.append(p, "never shown", Text, level(2)).unwrap();
    tree.append(root, "visible", Text, level(0)).unwrap();

    assert_eq!(tree.render(), "$o.push(\"visible\");\n");
}

#[test]
fn test_trim_markers_bracket_the_generated_markup() {
    let mut tree = Tree::new(Config::default());
    let root = tree.root();
    tree.append(root, "before ", Text, level(0)).unwrap();
    let p = tree
        .append(
            root,
            "p",
            ClosureConstruct::new(|_, _| Ok(Evaluation::tag("<p>", "</p>").trim(Trim::around()))),
            level(0),
        )
        .unwrap();
    tree.append(p, "x", Text, level(1)).unwrap();

    let expected = format!(
        "$o.push(\"before \");\n\
         $o.push(\"{TRIM_LEFT}<p>\");\n\
         $o.push(\"  x\");\n\
         $o.push(\"</p>{TRIM_RIGHT}\");\n"
    );
    assert_eq!(tree.render(), expected);
}

#[test]
fn test_void_element_follows_dialect() {
    let mut xhtml = Tree::new(Config::default());
    let root = xhtml.root();
    xhtml
        .append(root, "br/", Element, Config::default().format(Format::Xhtml))
        .unwrap();
    assert_eq!(xhtml.render(), "$o.push(\"<br/>\");\n");

    let mut html5 = Tree::new(Config::default());
    let root = html5.root();
    html5.append(root, "br/", Element, Config::default()).unwrap();
    assert_eq!(html5.render(), "$o.push(\"<br>\");\n");
}

#[test]
fn test_element_rejects_missing_tag_name() {
    let mut tree = Tree::new(Config::default());
    let root = tree.root();
    let err = tree.append(root, "", Element, Config::default()).unwrap_err();
    assert_eq!(err.kind, CodegenErrorKind::InvalidExpression);
}
