use beancopy_codegen::{Diagnostic, Severity};

use super::output::Output;

/// Render run diagnostics; info messages only when `verbose`.
pub(super) fn render_diagnostics(out: &mut dyn Output, diagnostics: &[Diagnostic], verbose: bool) {
    for diag in diagnostics {
        let msg = match &diag.location {
            Some(loc) => format!("{}\n  --> {}", diag.message, loc),
            None => diag.message.clone(),
        };
        match diag.severity {
            Severity::Error => out.error(&msg),
            Severity::Warning => out.warning(&msg),
            Severity::Info if verbose => out.preformatted(&format!("info: {}", msg)),
            Severity::Info => {}
        }
    }
}

/// `"1 routine"`, `"3 routines"`.
pub(super) fn plural(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}

#[cfg(test)]
mod tests {
    use beancopy_codegen::Phase;

    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_info_hidden_unless_verbose() {
        let diagnostics = vec![
            Diagnostic::info(Phase::Traverse, "transform a.A -> b.A"),
            Diagnostic::error(Phase::Plan, "Field not found").at("a.A::x"),
        ];

        let mut quiet = BufferOutput::default();
        render_diagnostics(&mut quiet, &diagnostics, false);
        assert_eq!(quiet.lines, vec!["error: Field not found\n  --> a.A::x"]);

        let mut verbose = BufferOutput::default();
        render_diagnostics(&mut verbose, &diagnostics, true);
        assert_eq!(verbose.lines.len(), 2);
        assert_eq!(verbose.lines[0], "info: transform a.A -> b.A");
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "routine"), "1 routine");
        assert_eq!(plural(0, "warning"), "0 warnings");
    }
}
