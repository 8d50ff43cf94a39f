//! Code builder utility for generating properly indented Java.

use super::Indent;

/// Line-oriented builder for indented code.
///
/// Every method takes `&mut self` so statements can be appended from loops
/// and helper functions.
///
/// ```
/// use beancopy_codegen::builder::CodeBuilder;
///
/// let mut code = CodeBuilder::java();
/// code.push_line("if (a == null)")
///     .push_indent()
///     .push_line("return null;")
///     .push_dedent();
///
/// assert_eq!(code.build(), "if (a == null)\n  return null;\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    unit: String,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            unit: indent.unit(),
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation.
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Start at a given nesting depth (e.g. 1 for class members).
    pub fn at_level(mut self, level: usize) -> Self {
        self.indent_level = level;
        self
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a `// text` comment line.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("// ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Add a single-line `/** text */` comment.
    pub fn push_javadoc(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("/** ");
        self.buffer.push_str(text);
        self.buffer.push_str(" */\n");
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(&self.unit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation() {
        let mut code = CodeBuilder::java();
        code.push_line("for (Line i : a.getLines())")
            .push_indent()
            .push_line("r.getLines().add(transform(i));")
            .push_dedent()
            .push_line("return r;");

        assert_eq!(
            code.build(),
            "for (Line i : a.getLines())\n  r.getLines().add(transform(i));\nreturn r;\n"
        );
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut code = CodeBuilder::java().at_level(1);
        code.push_line("return null;").push_blank().push_line("return r;");

        assert_eq!(code.build(), "  return null;\n\n  return r;\n");
    }

    #[test]
    fn test_comments() {
        let mut code = CodeBuilder::java();
        code.push_javadoc("Generated on today")
            .push_indent()
            .push_comment("r.qty not found");

        assert_eq!(code.build(), "/** Generated on today */\n  // r.qty not found\n");
    }

    #[test]
    fn test_at_level_and_custom_indent() {
        let mut code = CodeBuilder::new(Indent::Spaces(4)).at_level(1);
        code.push_line("int x;").push_indent().push_line("int y;");

        assert_eq!(code.build(), "    int x;\n        int y;\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut code = CodeBuilder::new(Indent::Tab);
        code.push_indent()
            .push_line("return null;")
            .push_dedent()
            .push_dedent()
            .push_line("}");

        assert_eq!(code.build(), "\treturn null;\n}\n");
    }
}
