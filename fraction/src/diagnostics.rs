//! User-facing diagnostics.
//!
//! Demo failures have no source text to point into, so a diagnostic is a titled annotation with
//! an optional footer, rendered through `annotate_snippets`.

use libfraction::FractionError;

use annotate_snippets::{
    display_list::{DisplayList, FormatOptions},
    snippet::{Annotation, AnnotationType, Snippet},
};

/// The kind of a footer note attached to a [Diagnostic].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoteKind {
    /// Expands on the error.
    Note,
    /// Tells the user how to change their input.
    Help,
}

/// An error diagnostic for a demo run.
#[derive(Debug)]
pub struct Diagnostic {
    pub title: String,
    pub notes: Vec<(NoteKind, String)>,
}

impl Diagnostic {
    pub fn err<M: Into<String>>(title: M) -> Diagnostic {
        Diagnostic {
            title: title.into(),
            notes: Vec::with_capacity(1),
        }
    }

    pub fn with_note<M: Into<String>>(mut self, note: M) -> Diagnostic {
        self.notes.push((NoteKind::Note, note.into()));
        self
    }

    pub fn with_help<M: Into<String>>(mut self, help: M) -> Diagnostic {
        self.notes.push((NoteKind::Help, help.into()));
        self
    }
}

impl From<FractionError> for Diagnostic {
    fn from(err: FractionError) -> Self {
        let diagnostic = Diagnostic::err(err.to_string());
        match err {
            FractionError::InvalidArgument => {
                diagnostic.with_help("pass a non-zero value to --denominator")
            }
            FractionError::DivideByZero => diagnostic.with_note("the divisor is the zero fraction"),
        }
    }
}

pub fn emit_diagnostics(diagnostics: &[Diagnostic], color: bool) -> String {
    let mut emitted = Vec::with_capacity(diagnostics.len());

    for diagnostic in diagnostics.iter() {
        let footer = diagnostic
            .notes
            .iter()
            .map(|(kind, msg)| Annotation {
                label: Some(msg),
                id: None,
                annotation_type: convert_note_kind(*kind),
            })
            .collect();

        let snippet = Snippet {
            title: Some(Annotation {
                label: Some(&diagnostic.title),
                id: None,
                annotation_type: AnnotationType::Error,
            }),
            footer,
            slices: Vec::new(),
            opt: FormatOptions {
                color,
                ..Default::default()
            },
        };
        emitted.push(DisplayList::from(snippet).to_string());
    }

    emitted.join("\n")
}

fn convert_note_kind(kind: NoteKind) -> AnnotationType {
    match kind {
        NoteKind::Note => AnnotationType::Note,
        NoteKind::Help => AnnotationType::Help,
    }
}
