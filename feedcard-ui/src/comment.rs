use crate::{avatar::Avatar, event::CommentIntent, timestamp::time_element, view::Element};
use feedcard_common::model::{
    author::Author,
    comment::{Comment, CommentId},
};
use time::OffsetDateTime;
use tracing::debug;

pub const COMMENT_AVATAR_ALT: &str = "Foto de perfil";

/// A rendered comment with its own like counter.
///
/// The counter lives and dies with the card. Deleting is not something the
/// card can do itself: [`CommentCard::delete`] only produces the intent for
/// whoever owns the comment list.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct CommentCard {
    comment: Comment,
    like_count: u64,
}

impl CommentCard {
    #[must_use]
    pub fn new(comment: Comment) -> Self {
        Self {
            comment,
            like_count: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> CommentId {
        self.comment.id
    }

    #[must_use]
    pub fn comment(&self) -> &Comment {
        &self.comment
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.comment.content.get()
    }

    #[must_use]
    pub fn like_count(&self) -> u64 {
        self.like_count
    }

    pub fn like(&mut self) -> u64 {
        self.like_count = self.like_count.saturating_add(1);
        debug!(id = %self.comment.id, like_count = self.like_count, "Comment liked");
        self.like_count
    }

    #[must_use]
    pub fn delete(&self) -> CommentIntent {
        CommentIntent::Delete(self.comment.id)
    }

    #[must_use]
    pub fn render(&self, commenter: &Author, now: OffsetDateTime) -> Element {
        let header = Element::new("header")
            .child(
                Element::new("div")
                    .class("author-and-time")
                    .child(Element::new("strong").text(commenter.name.get()))
                    .child(time_element(self.comment.created_at, now)),
            )
            .child(
                Element::new("button")
                    .attr("title", "Deletar comentário")
                    .attr("data-action", "delete"),
            );

        let footer = Element::new("footer").child(
            Element::new("button")
                .attr("data-action", "like")
                .text("Aplaudir ")
                .child(Element::new("span").text(self.like_count.to_string())),
        );

        Element::new("div")
            .class("comment")
            .key(self.comment.id)
            .child(Avatar::borderless(&commenter.avatar_url, COMMENT_AVATAR_ALT).render())
            .child(
                Element::new("div")
                    .class("comment-box")
                    .child(
                        Element::new("div")
                            .class("comment-content")
                            .child(header)
                            .child(Element::new("p").text(self.text())),
                    )
                    .child(footer),
            )
    }
}
