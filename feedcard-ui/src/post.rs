use crate::{
    avatar::Avatar,
    comment::CommentCard,
    error::{DispatchError, SubmitError},
    event::{CommentIntent, EventOutcome, PostEvent},
    form::CommentForm,
    timestamp::time_element,
    view::Element,
};
use feedcard_common::{
    id::IdGenerator,
    model::{
        author::Author,
        comment::{Comment, CommentId, CommentMarker, CommentText},
        post::{ContentBlock, Post},
    },
};
use time::OffsetDateTime;
use tracing::{debug, warn};

pub const SEED_COMMENT: &str = "Post incrível, meu amigo!";

/// A post with its comment form and comment list.
///
/// The card is the only owner of the comment list. Every mutation goes
/// through `&mut self`, so each event is applied completely before the next
/// one is looked at.
#[derive(Clone, Debug)]
pub struct PostCard {
    post: Post,
    commenter: Author,
    comments: Vec<CommentCard>,
    form: CommentForm,
    comment_ids: IdGenerator<CommentMarker>,
}

impl PostCard {
    /// Mounts a card holding the single seed comment.
    #[must_use]
    pub fn mount(post: Post, commenter: Author, now: OffsetDateTime) -> Self {
        let seed = CommentText::new(SEED_COMMENT.to_owned()).ok();
        Self::with_comments(post, commenter, seed, now)
    }

    #[must_use]
    pub fn with_comments(
        post: Post,
        commenter: Author,
        comments: impl IntoIterator<Item = CommentText>,
        now: OffsetDateTime,
    ) -> Self {
        let mut card = Self {
            post,
            commenter,
            comments: Vec::new(),
            form: CommentForm::default(),
            comment_ids: IdGenerator::new(),
        };
        for text in comments {
            card.append(text, now);
        }
        card
    }

    #[must_use]
    pub fn post(&self) -> &Post {
        &self.post
    }

    #[must_use]
    pub fn commenter(&self) -> &Author {
        &self.commenter
    }

    #[must_use]
    pub fn comments(&self) -> &[CommentCard] {
        &self.comments
    }

    #[must_use]
    pub fn comment(&self, id: CommentId) -> Option<&CommentCard> {
        self.comments.iter().find(|card| card.id() == id)
    }

    #[must_use]
    pub fn comment_texts(&self) -> impl Iterator<Item = &str> {
        self.comments.iter().map(CommentCard::text)
    }

    #[must_use]
    pub fn form(&self) -> &CommentForm {
        &self.form
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        self.form.draft()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.form.can_submit()
    }

    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.form.update_draft(text.into());
    }

    pub fn mark_draft_invalid(&mut self) {
        self.form.mark_invalid();
    }

    /// Appends the draft, exactly as typed, as a new comment and clears the
    /// draft.
    pub fn submit(&mut self, now: OffsetDateTime) -> Result<CommentId, SubmitError> {
        let text = self.form.submit().inspect_err(|err| {
            warn!(error = %err, "Rejected comment submission");
        })?;

        let id = self.append(text, now);
        debug!(%id, comments = self.comments.len(), "Comment submitted");
        Ok(id)
    }

    /// Removes the comment with the given id. Removing an id that is not
    /// present does nothing and returns `false`.
    pub fn delete_comment(&mut self, id: CommentId) -> bool {
        let intent = self.comment(id).map(CommentCard::delete);
        match intent {
            Some(intent) => self.apply(intent),
            None => {
                debug!(%id, "Comment to delete is already gone");
                false
            }
        }
    }

    pub fn apply(&mut self, intent: CommentIntent) -> bool {
        match intent {
            CommentIntent::Delete(id) => {
                let Some(position) = self.comments.iter().position(|card| card.id() == id) else {
                    return false;
                };
                self.comments.remove(position);
                debug!(%id, comments = self.comments.len(), "Comment deleted");
                true
            }
        }
    }

    pub fn like_comment(&mut self, id: CommentId) -> Result<u64, DispatchError> {
        self.comments
            .iter_mut()
            .find(|card| card.id() == id)
            .map(CommentCard::like)
            .ok_or(DispatchError::CommentByIdNotFound(id))
    }

    pub fn dispatch(
        &mut self,
        event: PostEvent,
        now: OffsetDateTime,
    ) -> Result<EventOutcome, DispatchError> {
        let outcome = match event {
            PostEvent::DraftChanged(text) => {
                self.update_draft(text);
                EventOutcome::DraftUpdated
            }
            PostEvent::DraftInvalid => {
                self.mark_draft_invalid();
                EventOutcome::MarkedInvalid
            }
            PostEvent::Submit => EventOutcome::Submitted(self.submit(now)?),
            PostEvent::Like(id) => EventOutcome::Liked {
                id,
                like_count: self.like_comment(id)?,
            },
            PostEvent::Delete(id) => EventOutcome::Deleted {
                id,
                removed: self.delete_comment(id),
            },
        };
        Ok(outcome)
    }

    fn append(&mut self, text: CommentText, now: OffsetDateTime) -> CommentId {
        let id = self.comment_ids.generate();
        self.comments.push(CommentCard::new(Comment {
            id,
            content: text,
            created_at: now,
        }));
        id
    }

    #[must_use]
    pub fn render(&self, now: OffsetDateTime) -> Element {
        let author = &self.post.author;

        let header = Element::new("header")
            .child(
                Element::new("div")
                    .class("author")
                    .child(Avatar::bordered(&author.avatar_url).render())
                    .child(
                        Element::new("div")
                            .class("author-info")
                            .child(Element::new("strong").text(author.name.get()))
                            .child(Element::new("span").text(author.role.as_str())),
                    ),
            )
            .child(time_element(self.post.published_at, now));

        let content = Element::new("div")
            .class("content")
            .children(self.post.content.iter().filter_map(render_block));

        let comment_list = Element::new("div").class("comment-list").children(
            self.comments
                .iter()
                .map(|card| card.render(&self.commenter, now)),
        );

        Element::new("article")
            .class("post")
            .child(header)
            .child(content)
            .child(self.form.render())
            .child(comment_list)
    }
}

fn render_block(block: &ContentBlock) -> Option<Element> {
    match block {
        ContentBlock::Text(text) => Some(Element::new("p").text(text.as_str())),
        ContentBlock::Link(link) => Some(Element::new("a").attr("href", "#").text(link.as_str())),
        ContentBlock::Empty => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::{DispatchError, SubmitError},
        event::{CommentIntent, EventOutcome, PostEvent},
        form::{EMPTY_COMMENT_MESSAGE, Validity},
        post::{PostCard, SEED_COMMENT},
    };
    use feedcard_common::model::{
        author::Author,
        comment::{CommentId, CommentText},
        post::{ContentBlock, Post},
    };
    use time::{Duration, OffsetDateTime, macros::datetime};

    const NOW: OffsetDateTime = datetime!(2024-11-13 23:45 UTC);

    fn post() -> Post {
        Post {
            author: Author::new(
                "Diego Fernandes".to_owned(),
                "https://github.com/diego3g.png".to_owned(),
                "CTO @Rocketseat".to_owned(),
            )
            .unwrap(),
            published_at: NOW - Duration::hours(1),
            content: vec![
                ContentBlock::Text("Fala galeraa 👋".to_owned()),
                ContentBlock::Empty,
                ContentBlock::Link("jane.design/doctorcare".to_owned()),
            ],
        }
    }

    fn commenter() -> Author {
        Author::new(
            "Davy Serra".to_owned(),
            "https://github.com/davyserra.png".to_owned(),
            String::new(),
        )
        .unwrap()
    }

    fn card_with(texts: &[&str]) -> PostCard {
        PostCard::with_comments(
            post(),
            commenter(),
            texts
                .iter()
                .map(|text| CommentText::new((*text).to_owned()).unwrap()),
            NOW,
        )
    }

    fn texts(card: &PostCard) -> Vec<&str> {
        card.comment_texts().collect()
    }

    #[test]
    fn mount_seeds_one_comment() {
        let card = PostCard::mount(post(), commenter(), NOW);

        assert_eq!(texts(&card), [SEED_COMMENT]);
        assert_eq!(card.draft(), "");
        assert!(!card.can_submit());
    }

    #[test]
    fn submit_appends_and_clears_draft() {
        let mut card = PostCard::mount(post(), commenter(), NOW);

        card.update_draft("Ótimo post!");
        let id = card.submit(NOW).unwrap();

        assert_eq!(texts(&card), ["Post incrível, meu amigo!", "Ótimo post!"]);
        assert_eq!(card.draft(), "");
        assert_eq!(card.comment(id).unwrap().comment().created_at, NOW);
    }

    #[test]
    fn submit_keeps_surrounding_whitespace() {
        let mut card = card_with(&[]);

        card.update_draft("  olá  ");
        card.submit(NOW).unwrap();

        assert_eq!(texts(&card), ["  olá  "]);
    }

    #[test]
    fn blank_draft_is_not_submittable() {
        let mut card = PostCard::mount(post(), commenter(), NOW);

        card.update_draft("   ");
        assert!(!card.can_submit());
        assert_eq!(card.submit(NOW), Err(SubmitError::EmptyDraft));

        assert_eq!(texts(&card), [SEED_COMMENT]);
        assert_eq!(card.draft(), "   ");
        assert_eq!(
            card.form().validity(),
            &Validity::Invalid(EMPTY_COMMENT_MESSAGE)
        );
    }

    #[test]
    fn delete_removes_only_the_given_comment() {
        let mut card = card_with(&["a", "b", "a"]);
        let first_a = card.comments()[0].id();
        let last_a = card.comments()[2].id();

        assert!(card.delete_comment(first_a));
        assert_eq!(texts(&card), ["b", "a"]);
        assert_eq!(card.comments()[1].id(), last_a);

        assert!(!card.delete_comment(first_a));
        assert_eq!(texts(&card), ["b", "a"]);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut card = card_with(&["a"]);
        let first = card.comments()[0].id();
        card.delete_comment(first);

        card.update_draft("a");
        let second = card.submit(NOW).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn likes_survive_sibling_deletion() {
        let mut card = card_with(&["a", "b"]);
        let a = card.comments()[0].id();
        let b = card.comments()[1].id();

        card.like_comment(b).unwrap();
        card.like_comment(b).unwrap();
        card.like_comment(a).unwrap();
        card.delete_comment(a);

        assert_eq!(card.comment(b).unwrap().like_count(), 2);
        assert_eq!(
            card.like_comment(a),
            Err(DispatchError::CommentByIdNotFound(a))
        );
    }

    #[test]
    fn apply_intent_from_comment_card() {
        let mut card = card_with(&["x", "y"]);
        let intent = card.comments()[1].delete();

        assert_eq!(intent, CommentIntent::Delete(card.comments()[1].id()));
        assert!(card.apply(intent));
        assert_eq!(texts(&card), ["x"]);
    }

    #[test]
    fn dispatch_turns() {
        let mut card = PostCard::mount(post(), commenter(), NOW);
        let seed = card.comments()[0].id();

        assert_eq!(
            card.dispatch(PostEvent::DraftChanged(String::new()), NOW),
            Ok(EventOutcome::DraftUpdated)
        );
        assert_eq!(
            card.dispatch(PostEvent::Submit, NOW),
            Err(DispatchError::Submit(SubmitError::EmptyDraft))
        );
        assert_eq!(
            card.dispatch(PostEvent::DraftInvalid, NOW),
            Ok(EventOutcome::MarkedInvalid)
        );

        card.dispatch(PostEvent::DraftChanged("Ótimo post!".to_owned()), NOW)
            .unwrap();
        assert_eq!(card.form().validity(), &Validity::Valid);

        let Ok(EventOutcome::Submitted(new)) = card.dispatch(PostEvent::Submit, NOW) else {
            panic!("submit should succeed");
        };

        for _ in 0..3 {
            card.dispatch(PostEvent::Like(new), NOW).unwrap();
        }
        assert_eq!(card.comment(new).unwrap().like_count(), 3);
        assert_eq!(card.comment(seed).unwrap().like_count(), 0);

        assert_eq!(
            card.dispatch(PostEvent::Delete(seed), NOW),
            Ok(EventOutcome::Deleted {
                id: seed,
                removed: true
            })
        );
        assert_eq!(
            card.dispatch(PostEvent::Delete(seed), NOW),
            Ok(EventOutcome::Deleted {
                id: seed,
                removed: false
            })
        );
        assert_eq!(
            card.dispatch(PostEvent::Like(CommentId::new(99)), NOW),
            Err(DispatchError::CommentByIdNotFound(CommentId::new(99)))
        );
        assert_eq!(texts(&card), ["Ótimo post!"]);
    }

    #[test]
    fn render_post() {
        let mut card = PostCard::mount(post(), commenter(), NOW);
        card.update_draft("rascunho");

        let element = card.render(NOW);
        assert_eq!(element.tag(), "article");

        let sections: Vec<_> = element
            .child_elements()
            .map(|child| child.tag())
            .collect();
        assert_eq!(sections, ["header", "div", "form", "div"]);

        let time = element.find(&|element| element.tag() == "time").unwrap();
        assert_eq!(time.text_content(), "há cerca de 1 hora");

        let content = element
            .find(&|element| element.attribute("class") == Some("content"))
            .unwrap();
        assert_eq!(content.child_elements().count(), 2);
        assert_eq!(
            content
                .find(&|element| element.tag() == "a")
                .map(|link| link.text_content()),
            Some("jane.design/doctorcare".to_owned())
        );

        let comments = element.find_all(&|element| element.attribute("class") == Some("comment"));
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].attribute("data-key"), Some("0"));

        let html = element.to_string();
        assert!(html.contains("<textarea name=\"comment\" placeholder=\"Deixe seu comentário!\" required>rascunho</textarea>"));
        assert!(html.contains("<button type=\"submit\">Publicar</button>"));
        assert!(html.contains("<img class=\"avatar avatar-with-border\" src=\"https://github.com/diego3g.png\">"));
    }
}
