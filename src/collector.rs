use tracing::trace;

use crate::{Errlist, Failure};

/// Operations on a possibly-absent [`Errlist`].
///
/// This is implemented for `Option<Errlist>`, where `None` means that no errors have occurred yet.
/// Every method is defined for `None` too, behaving as if it were an empty list, so errors can be
/// accumulated without ever checking whether a list exists:
///
/// ```
/// # use errlist::{Errlist, ErrorCollector};
/// let mut errors: Option<Errlist> = None;
/// assert_eq!(errors.num(), 0);
/// assert_eq!(errors.joined(), "");
///
/// errors = errors.add_text("first");
/// errors = errors.add_text("");
/// errors = errors.add_error(None::<errlist::Failure>);
/// errors = errors.add_text("second");
///
/// assert_eq!(errors.num(), 2);
/// assert_eq!(errors.joined(), "first\nsecond");
/// ```
///
/// Adding an empty piece of text, or an absent error, never changes the list.
pub trait ErrorCollector: Sized {
    /// Appends an error which renders as `text`, creating the list if needed.
    ///
    /// If `text` is empty, returns `self` unchanged; in particular, an absent list stays absent.
    #[must_use = "the list is returned rather than updated in place"]
    fn add_text(self, text: impl Into<String>) -> Self;

    /// Appends `error`, creating the list if needed.
    ///
    /// If `error` is `None`, returns `self` unchanged.
    #[must_use = "the list is returned rather than updated in place"]
    fn add_error<E: Into<Failure>>(self, error: Option<E>) -> Self;

    /// Records the error of a fallible step, if there was one, and returns its value otherwise.
    ///
    /// ```
    /// # use errlist::{Errlist, ErrorCollector};
    /// let mut errors: Option<Errlist> = None;
    /// let sum: u32 = ["4", "x", "5"]
    ///     .iter()
    ///     .filter_map(|s| errors.absorb(s.parse::<u32>()))
    ///     .sum();
    ///
    /// assert_eq!(sum, 9);
    /// assert_eq!(errors.num(), 1);
    /// ```
    fn absorb<T, E: Into<Failure>>(&mut self, result: Result<T, E>) -> Option<T>;

    /// The number of errors, or 0 if there is no list.
    fn num(&self) -> usize;

    /// Each error rendered as text, one per line in the order they were added, or an empty string
    /// if there is no list.
    fn joined(&self) -> String;

    /// The errors in the order they were added, copied into a new [`Vec`]. Empty if there is no
    /// list.
    fn to_vec(&self) -> Vec<Failure>;

    /// Collapses the list into a single error, or `None` if there is no list.
    ///
    /// See [`Errlist::into_err`].
    #[must_use]
    fn into_err(self) -> Option<Failure>;

    /// Like [`into_err`], but shaped so the errors can be returned with `?`.
    ///
    /// ```
    /// # use errlist::{Errlist, ErrorCollector, Failure};
    /// fn check(values: &[i32]) -> Result<(), Failure> {
    ///     let mut errors: Option<Errlist> = None;
    ///     for v in values {
    ///         if *v < 0 {
    ///             errors = errors.add_text(format!("{v} is negative"));
    ///         }
    ///     }
    ///     errors.into_result()?;
    ///     Ok(())
    /// }
    ///
    /// assert!(check(&[1, 2]).is_ok());
    /// assert_eq!(check(&[-1, 2, -3]).unwrap_err().to_string(), "-1 is negative\n-3 is negative");
    /// ```
    ///
    /// [`into_err`]: ErrorCollector::into_err
    fn into_result(self) -> Result<(), Failure> {
        match self.into_err() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl ErrorCollector for Option<Errlist> {
    fn add_text(self, text: impl Into<String>) -> Self {
        match self {
            Some(mut errors) => {
                errors.push_text(text);
                Some(errors)
            }
            None => Errlist::from_text(text),
        }
    }

    fn add_error<E: Into<Failure>>(self, error: Option<E>) -> Self {
        match (self, error) {
            (Some(mut errors), Some(error)) => {
                errors.push_error(error);
                Some(errors)
            }
            (Some(errors), None) => {
                trace!(len = errors.len(), "ignoring absent error");
                Some(errors)
            }
            (None, error) => Errlist::from_error(error),
        }
    }

    fn absorb<T, E: Into<Failure>>(&mut self, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                *self = self.take().add_error(Some(error));
                None
            }
        }
    }

    fn num(&self) -> usize {
        self.as_ref().map_or(0, Errlist::len)
    }

    fn joined(&self) -> String {
        self.as_ref().map(Errlist::to_string).unwrap_or_default()
    }

    fn to_vec(&self) -> Vec<Failure> {
        self.as_ref().map(Errlist::to_vec).unwrap_or_default()
    }

    fn into_err(self) -> Option<Failure> {
        self.map(Errlist::into_err)
    }
}
