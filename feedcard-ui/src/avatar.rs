use crate::view::Element;
use feedcard_common::model::author::AvatarUrl;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Avatar<'a> {
    pub src: &'a AvatarUrl,
    pub alt: Option<&'a str>,
    pub has_border: bool,
}

impl<'a> Avatar<'a> {
    #[must_use]
    pub fn bordered(src: &'a AvatarUrl) -> Self {
        Self {
            src,
            alt: None,
            has_border: true,
        }
    }

    #[must_use]
    pub fn borderless(src: &'a AvatarUrl, alt: &'a str) -> Self {
        Self {
            src,
            alt: Some(alt),
            has_border: false,
        }
    }

    #[must_use]
    pub fn render(self) -> Element {
        let class = if self.has_border {
            "avatar avatar-with-border"
        } else {
            "avatar"
        };

        let element = Element::new("img").class(class).attr("src", self.src.get());
        match self.alt {
            Some(alt) => element.attr("alt", alt),
            None => element,
        }
    }
}
