/// Number rendering helpers.
///
/// This module turns runtime numbers into the text that `print` shows and that
/// string concatenation appends. Integral values drop their fractional part so
/// `5.0` renders as `5`.
pub mod num;
