use std::{error::Error, fmt, iter::FusedIterator};

use tracing::trace;

use crate::{Failure, Message};

/// An ordered list of one or more errors, which is itself an error.
///
/// Errors can only be appended, and they are kept in the order they were added. An `Errlist` is
/// never empty: the "no errors yet" state is an absent list, `None::<Errlist>`. The operations in
/// [`ErrorCollector`] are defined on `Option<Errlist>`, so an accumulating loop never needs to
/// check which state it is in:
///
/// ```
/// # use errlist::{Errlist, ErrorCollector};
/// let mut errors: Option<Errlist> = None;
///
/// for input in ["1", "two", "3", "four"] {
///     errors = errors.add_error(input.parse::<u32>().err());
/// }
///
/// assert_eq!(errors.num(), 2);
/// assert_eq!(errors.joined(), "invalid digit found in string\ninvalid digit found in string");
/// ```
///
/// The [`Display`] implementation renders each error on its own line, in order, without a trailing
/// newline.
///
/// [`ErrorCollector`]: crate::ErrorCollector
/// [`Display`]: fmt::Display
#[derive(Debug, Clone)]
pub struct Errlist {
    /// Errors in the order they were added. Never empty, and only ever pushed to.
    records: Vec<Failure>,
}

impl Errlist {
    /// Constructs a new `Errlist` containing just `error`.
    ///
    /// ```
    /// # use errlist::Errlist;
    /// let errors = Errlist::new("x".parse::<u8>().unwrap_err());
    /// assert_eq!(errors.len(), 1);
    /// ```
    pub fn new(error: impl Into<Failure>) -> Self {
        Errlist {
            records: vec![error.into()],
        }
    }

    /// Constructs a new `Errlist` starting with an error which renders as `text`.
    ///
    /// If `text` is empty, no list is created and `None` is returned.
    ///
    /// ```
    /// # use errlist::Errlist;
    /// let errors = Errlist::from_text("something broke").unwrap();
    /// assert_eq!(errors.to_string(), "something broke");
    ///
    /// assert!(Errlist::from_text("").is_none());
    /// ```
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.is_empty() {
            trace!("ignoring empty error text");
            return None;
        }

        Some(Errlist::new(Message::new(text)))
    }

    /// Constructs a new `Errlist` starting with `error`, or returns `None` if there is no error.
    ///
    /// ```
    /// # use errlist::{Errlist, Failure};
    /// assert!(Errlist::from_error(Some(Failure::msg("oh no"))).is_some());
    /// assert!(Errlist::from_error(None::<Failure>).is_none());
    /// ```
    #[must_use]
    pub fn from_error<E: Into<Failure>>(error: Option<E>) -> Option<Self> {
        match error {
            Some(error) => Some(Errlist::new(error)),
            None => {
                trace!("ignoring absent error");
                None
            }
        }
    }

    /// Appends an error which renders as `text`. Does nothing if `text` is empty.
    ///
    /// ```
    /// # use errlist::Errlist;
    /// let mut errors = Errlist::new(errlist::Failure::msg("first"));
    /// errors.push_text("second");
    /// errors.push_text("");
    ///
    /// assert_eq!(errors.len(), 2);
    /// ```
    pub fn push_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            trace!(len = self.len(), "ignoring empty error text");
            return;
        }

        self.link(Message::new(text).into());
    }

    /// Appends `error` to the end of the list.
    pub fn push_error(&mut self, error: impl Into<Failure>) {
        self.link(error.into());
    }

    fn link(&mut self, failure: Failure) {
        self.records.push(failure);
        trace!(len = self.len(), "appended error");
    }

    /// The number of errors in this list. Always at least 1.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Iterates over the errors, in the order they were added.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.records.iter(),
        }
    }

    /// Copies the errors out into a new [`Vec`], in the order they were added.
    ///
    /// The returned `Vec` is independent of this list; changing one does not affect the other.
    ///
    /// ```
    /// # use errlist::{Errlist, Failure};
    /// let mut errors = Errlist::new(Failure::msg("a"));
    /// errors.push_text("b");
    ///
    /// let mut copy = errors.to_vec();
    /// copy.reverse();
    ///
    /// assert_eq!(copy[0].to_string(), "b");
    /// assert_eq!(errors.to_string(), "a\nb");
    /// ```
    pub fn to_vec(&self) -> Vec<Failure> {
        self.iter().cloned().collect()
    }

    /// Collapses this list into a single [`Failure`].
    ///
    /// A list of exactly one error gives back that error itself, unwrapped. A longer list becomes
    /// a `Failure` wrapping the whole list.
    ///
    /// ```
    /// # use errlist::{Errlist, Message};
    /// let single = Errlist::from_text("x").unwrap().into_err();
    /// assert!(single.downcast_ref::<Message>().is_some());
    ///
    /// let mut many = Errlist::from_text("x").unwrap();
    /// many.push_text("y");
    /// let many = many.into_err();
    /// assert!(many.downcast_ref::<Errlist>().is_some());
    /// assert_eq!(many.to_string(), "x\ny");
    /// ```
    #[must_use]
    pub fn into_err(mut self) -> Failure {
        if self.records.len() == 1 {
            if let Some(failure) = self.records.pop() {
                return failure;
            }
        }

        Failure::from(self)
    }
}

impl fmt::Display for Errlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}

impl Error for Errlist {}

impl<'a> IntoIterator for &'a Errlist {
    type Item = &'a Failure;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowing iterator over the errors of an [`Errlist`], created with [`Errlist::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, Failure>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Failure;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
