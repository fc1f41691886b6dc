//! Host-code generation.
//!
//! [`NodeRef::render`] walks a node's subtree depth-first and returns the
//! generated host code as one string. The walk is synchronous, reads the
//! tree without mutating it, and performs no I/O — generation is a pure
//! function of the tree built by the parser.
//!
//! Every emitted statement targets the conventional output buffer `$o`
//! of the generated program and is formed by one of three primitives:
//!
//! - [`emit_text`](NodeRef::emit_text) — append a literal markup fragment,
//! - [`emit_code`](NodeRef::emit_code) — run a host-code fragment verbatim,
//! - [`emit_value`](NodeRef::emit_value) — append a computed value,
//!   optionally routed through the runtime escaping helper `$e`.
//!
//! `$o` and `$e` are provided by the host runtime; this module only
//! decides what to reference, never how the runtime implements it.

use crate::tree::NodeRef;

/// Escape characters that would terminate or corrupt a double-quoted
/// string literal in the generated code.
///
/// Trim markers pass through untouched — they must survive in the
/// generated source for the external whitespace-resolution pass.
fn escape_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

impl NodeRef<'_> {
    /// Markup indentation for output this node writes.
    ///
    /// Empty inside a whitespace-preserving region — re-indenting
    /// preserved content would change it.
    pub fn output_indent(&self) -> &str {
        if self.is_preserved() {
            ""
        } else {
            &self.tree.raw(self.id).html_indent
        }
    }

    /// One generated statement appending literal text to the output
    /// buffer.
    ///
    /// The statement pushes the node's markup indentation followed by
    /// `text`, with the literal's delimiter and escape characters escaped
    /// so the generated source stays valid.
    pub fn emit_text(&self, text: &str) -> String {
        let node = self.tree.raw(self.id);
        format!(
            "{}$o.push(\"{}{}\");\n",
            node.code_indent,
            self.output_indent(),
            escape_literal(text)
        )
    }

    /// One generated line running `code` verbatim.
    ///
    /// No output-buffer interaction — this is for control-flow fragments
    /// (conditionals, loops) that wrap other emitting nodes.
    pub fn emit_code(&self, code: &str) -> String {
        format!("{}{}\n", self.tree.raw(self.id).code_indent, code)
    }

    /// One generated statement appending the run-time value of `code` to
    /// the output buffer.
    ///
    /// With `escape` set, the value is routed through the runtime escaping
    /// helper. When this node writes markup indentation, the statement
    /// concatenates the indentation literal in front of the value — the
    /// indentation itself is never escaped. Without indentation the value
    /// is pushed directly, avoiding a useless empty-string concatenation.
    pub fn emit_value(&self, code: &str, escape: bool) -> String {
        let node = self.tree.raw(self.id);
        let indent = self.output_indent();
        let value = if escape {
            format!("$e({code})")
        } else {
            code.to_string()
        };
        if indent.is_empty() {
            format!("{}$o.push({});\n", node.code_indent, value)
        } else {
            format!("{}$o.push(\"{}\" + {});\n", node.code_indent, indent, value)
        }
    }

    /// Generate host code for this node and its subtree.
    ///
    /// The construct's [`emit`](crate::Construct::emit) override is
    /// consulted first; when it declines, branch selection is purely
    /// structural — presence of children and presence of a full tag pair —
    /// with the `preserve` and `silent` flags refining two of the
    /// branches. Expression content never influences which branch runs.
    pub fn render(&self) -> String {
        if let Some(output) = self.tree.raw(self.id).construct.emit(self) {
            return output;
        }

        let evaluation = self.evaluation();

        if !self.has_children() {
            if evaluation.is_paired() {
                // Empty-content tag pair, one literal statement.
                return self.emit_text(&format!(
                    "{}{}",
                    evaluation.opener_markup(),
                    evaluation.closer_markup()
                ));
            }
            if !evaluation.opener.is_empty() {
                // Self-closing tag. Inside a preserving region the raw
                // markup is returned unemitted so the preserving ancestor
                // folds it into its own literal.
                if !evaluation.preserve && self.is_preserved() {
                    return evaluation.opener_markup();
                }
                return self.emit_text(&evaluation.opener_markup());
            }
            // No markup, no children: nothing to generate. Constructs
            // that emit output for such nodes do so via their override.
            return String::new();
        }

        if evaluation.is_paired() {
            if evaluation.preserve {
                // The whole subtree becomes one literal: children render
                // to raw markup and are newline-joined, never re-indented.
                let mut payload = evaluation.opener_markup();
                for child in self.children() {
                    payload.push_str(&child.render());
                    payload.push('\n');
                }
                payload.pop();
                payload.push_str(&evaluation.closer_markup());
                return self.emit_text(&payload);
            }

            let mut output = self.emit_text(&evaluation.opener_markup());
            for child in self.children() {
                output.push_str(&child.render());
            }
            output.push_str(&self.emit_text(&evaluation.closer_markup()));
            return output;
        }

        // No tag pair. A silent node suppresses its children entirely —
        // they are not rendered at all, not merely discarded.
        if evaluation.silent {
            return String::new();
        }

        let mut output = String::new();
        for child in self.children() {
            output.push_str(&child.render());
        }
        output
    }
}
