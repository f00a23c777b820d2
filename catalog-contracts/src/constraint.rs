/// A single pass/fail rule over one value.
///
/// The value is optional because a bound request may simply not carry it;
/// each implementation decides whether absence passes. Implementations are
/// pure: no logging, no state, no panics on any input.
pub trait Constraint<T: ?Sized> {
    fn is_valid(&self, value: Option<&T>) -> bool;
}
