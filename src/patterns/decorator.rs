//! Decorator: markup wrappers stacked around plain text.

/// Anything that renders to text.
pub trait Text {
    fn render(&self) -> String;

    fn bold(self) -> Bold<Self>
    where
        Self: Sized,
    {
        Bold(self)
    }

    fn italic(self) -> Italic<Self>
    where
        Self: Sized,
    {
        Italic(self)
    }

    fn underline(self) -> Underline<Self>
    where
        Self: Sized,
    {
        Underline(self)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlainText(pub String);

impl PlainText {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }
}

impl Text for PlainText {
    fn render(&self) -> String {
        self.0.clone()
    }
}

impl<T: Text + ?Sized> Text for Box<T> {
    fn render(&self) -> String {
        (**self).render()
    }
}

macro_rules! tag_decorator {
    ($(#[$meta:meta])* $name:ident, $tag:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name<T>(pub T);

        impl<T: Text> Text for $name<T> {
            fn render(&self) -> String {
                format!(concat!("<", $tag, ">{}</", $tag, ">"), self.0.render())
            }
        }
    };
}

tag_decorator!(
    /// Wraps in `<b>`.
    Bold,
    "b"
);
tag_decorator!(
    /// Wraps in `<i>`.
    Italic,
    "i"
);
tag_decorator!(
    /// Wraps in `<u>`.
    Underline,
    "u"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decorators_nest_outside_in() {
        let text = Bold(Italic(Underline(PlainText::new("Hello, world!"))));
        assert_eq!(text.render(), "<b><i><u>Hello, world!</u></i></b>");
    }

    #[test]
    fn extension_methods_apply_innermost_first() {
        let text = PlainText::new("hi").underline().italic().bold();
        assert_eq!(text.render(), "<b><i><u>hi</u></i></b>");
    }

    #[test]
    fn boxed_text_can_be_decorated() {
        let inner: Box<dyn Text> = Box::new(PlainText::new("x"));
        assert_eq!(Bold(inner).render(), "<b>x</b>");
    }
}
