use crate::{error::SubmitError, view::Element};
use feedcard_common::model::comment::CommentText;
use std::mem;
use tracing::trace;

pub const EMPTY_COMMENT_MESSAGE: &str = "Seu comentário não pode estar vazio!";

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash)]
pub enum Validity {
    #[default]
    Valid,
    Invalid(&'static str),
}

/// Draft buffer of the comment form, plus the message shown when the
/// required-field check fails.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash)]
pub struct CommentForm {
    draft: String,
    validity: Validity,
}

impl CommentForm {
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn validity(&self) -> &Validity {
        &self.validity
    }

    /// Whether the submit control is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        CommentText::is_submittable(&self.draft)
    }

    pub fn update_draft(&mut self, text: String) {
        trace!(len = text.len(), "Draft changed");
        self.validity = Validity::Valid;
        self.draft = text;
    }

    pub fn mark_invalid(&mut self) {
        self.validity = Validity::Invalid(EMPTY_COMMENT_MESSAGE);
    }

    /// Takes the draft out of the form. A blank draft stays in place and
    /// marks the form invalid.
    pub fn submit(&mut self) -> Result<CommentText, SubmitError> {
        match CommentText::new(mem::take(&mut self.draft)) {
            Ok(text) => {
                self.validity = Validity::Valid;
                Ok(text)
            }
            Err(err) => {
                self.draft = err.into_inner();
                self.mark_invalid();
                Err(SubmitError::EmptyDraft)
            }
        }
    }

    #[must_use]
    pub fn render(&self) -> Element {
        let textarea = Element::new("textarea")
            .attr("name", "comment")
            .attr("placeholder", "Deixe seu comentário!")
            .flag_if("required", true);
        let textarea = match self.validity {
            Validity::Valid => textarea,
            Validity::Invalid(message) => textarea.attr("data-validity", message),
        };

        Element::new("form")
            .class("comment-form")
            .child(Element::new("strong").text("Deixe seu feedback"))
            .child(textarea.text(self.draft.as_str()))
            .child(
                Element::new("footer").child(
                    Element::new("button")
                        .attr("type", "submit")
                        .flag_if("disabled", !self.can_submit())
                        .text("Publicar"),
                ),
            )
    }
}
