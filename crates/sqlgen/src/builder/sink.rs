use crate::value::Value;

/// Write target for assembled SQL: text fragments and bound arguments.
///
/// [`Builder`](crate::Builder) writes every fragment and argument through
/// this trait and implements it itself, so one builder can be attached to
/// another as a mirror with [`Builder::mirror`](crate::Builder::mirror).
pub trait Sink {
    /// Append SQL text verbatim.
    fn write_str(&mut self, s: &str);

    /// Append a bound argument.
    fn push_arg(&mut self, arg: Value);

    /// Called right after ` WHERE ` has been written, so later predicates
    /// are joined with ` AND ` instead of opening a second clause.
    fn where_opened(&mut self) {}
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write_str(&mut self, s: &str) {
        (**self).write_str(s);
    }

    fn push_arg(&mut self, arg: Value) {
        (**self).push_arg(arg);
    }

    fn where_opened(&mut self) {
        (**self).where_opened();
    }
}
