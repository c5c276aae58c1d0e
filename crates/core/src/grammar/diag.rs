pub use xvplot_diagnostics::{Diagnostic, Severity, Span, codes, explain};
