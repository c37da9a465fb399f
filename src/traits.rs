/// Learns stateful parameters from a batch of records, producing a fitted
/// object that can be applied to new data without refitting.
pub trait Fit<I: ?Sized> {
    type Object;

    fn fit(&self, input: &I) -> Self::Object;
}

/// Applies a previously fitted transformation. Fitted objects never mutate
/// during transform, so a single instance can serve concurrent callers.
pub trait Transformer<I, O> {
    fn transform(&self, x: I) -> O;
}
