use std::{error::Error, fmt, ops::Deref, sync::Arc};

/// One error occurrence, as stored in an [`Errlist`].
///
/// Any `Error + Send + Sync + 'static` converts into a `Failure` with [`From`], including an
/// [`Errlist`] itself. This is what lets a list of several errors be passed around anywhere a
/// single error is expected.
///
/// A `Failure` is a shared handle, so cloning it is cheap and the clone refers to the same error.
/// The wrapped error can be reached through [`Deref`]:
///
/// ```
/// # use errlist::{Failure, Message};
/// let failure = Failure::msg("disk full");
///
/// assert_eq!(failure.to_string(), "disk full");
/// assert_eq!(failure.downcast_ref::<Message>().unwrap().as_str(), "disk full");
/// ```
///
/// `Failure` is not itself an [`Error`], but it converts into `Box<dyn Error>` (with or without
/// `Send + Sync`), so `?` can return it from functions using boxed errors:
///
/// ```
/// # use errlist::{Errlist, ErrorCollector};
/// # use std::error::Error;
/// fn run() -> Result<(), Box<dyn Error + Send + Sync>> {
///     None::<Errlist>.add_text("a").add_text("b").into_result()?;
///     Ok(())
/// }
///
/// assert_eq!(run().unwrap_err().to_string(), "a\nb");
/// ```
///
/// [`Errlist`]: crate::Errlist
#[derive(Clone)]
pub struct Failure(Arc<dyn Error + Send + Sync + 'static>);

impl Failure {
    /// Constructs a `Failure` which renders as `text`.
    ///
    /// Unlike [`Errlist::from_text`], an empty `text` is not special here.
    ///
    /// [`Errlist::from_text`]: crate::Errlist::from_text
    pub fn msg(text: impl Into<String>) -> Self {
        Message::new(text).into()
    }

    /// Returns `true` if both handles refer to the same error.
    ///
    /// ```
    /// # use errlist::Failure;
    /// let a = Failure::msg("oops");
    /// let b = a.clone();
    ///
    /// assert!(Failure::ptr_eq(&a, &b));
    /// assert!(!Failure::ptr_eq(&a, &Failure::msg("oops")));
    /// ```
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }
}

impl<E> From<E> for Failure
where
    E: Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Failure(Arc::new(error))
    }
}

impl From<Failure> for Box<dyn Error + Send + Sync + 'static> {
    fn from(failure: Failure) -> Self {
        Box::new(Shared(failure.0))
    }
}

impl From<Failure> for Box<dyn Error + 'static> {
    fn from(failure: Failure) -> Self {
        Box::new(Shared(failure.0))
    }
}

/// A `Failure` once it has been boxed as a plain error.
struct Shared(Arc<dyn Error + Send + Sync + 'static>);

impl fmt::Display for Shared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl fmt::Debug for Shared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl Error for Shared {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

impl Deref for Failure {
    type Target = dyn Error + Send + Sync + 'static;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl AsRef<dyn Error + Send + Sync + 'static> for Failure {
    fn as_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.0
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

/// An error made from nothing but a piece of text.
///
/// This is what the text-taking methods, such as [`Errlist::from_text`], store.
///
/// [`Errlist::from_text`]: crate::Errlist::from_text
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{text}")]
pub struct Message {
    text: String,
}

impl Message {
    /// Constructs a `Message` which renders as `text`.
    ///
    /// ```
    /// # use errlist::Message;
    /// assert_eq!(Message::new("bad input").to_string(), "bad input");
    /// ```
    pub fn new(text: impl Into<String>) -> Self {
        Message { text: text.into() }
    }

    /// The text this error renders as.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}
