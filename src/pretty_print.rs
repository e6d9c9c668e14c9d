use crate::ParseError;
use ariadne::{Label, Report, ReportKind, Source};

impl ParseError {
    /// Renders this error as a labeled report against the source text it
    /// came from.
    pub fn pretty_print(&self, input: &str) {
        let report = match self {
            ParseError::UnexpectedCloser(span) => {
                Report::build(ReportKind::Error, ("input", span.to_range()))
                    .with_message("Unexpected ')'")
                    .with_label(
                        Label::new(("input", span.to_range()))
                            .with_message("This ')' has no matching '('"),
                    )
            }
            ParseError::UnexpectedEof => {
                let end = input.len();
                Report::build(ReportKind::Error, ("input", end..end))
                    .with_message("Unexpected end of input")
                    .with_label(
                        Label::new(("input", end..end))
                            .with_message("Expected another form before the input ended"),
                    )
            }
        };
        report
            .finish()
            .print(("input", Source::from(input)))
            .unwrap();
    }
}
