/// Wrap a closure into a shared [`Handler`](crate::Handler).
///
/// ```
/// let shout = triage::handler!(|n: &i64| println!("{n}!"));
/// shout(&3);
/// ```
#[macro_export]
macro_rules! handler {
    (|$value:ident : &$ty:ty| $body:expr) => {{
        let handler: $crate::Handler<$ty> = ::std::sync::Arc::new(move |$value: &$ty| {
            $body;
        });
        handler
    }};
}

/// Build a [`Rule`](crate::Rule) from a predicate expression and an optional
/// handler. Omitting the `handler:` field yields a rule that halts dispatch
/// without running anything.
///
/// ```
/// let even = triage::rule! {
///     name: "even",
///     matches: |n: &i64| n % 2 == 0,
///     handler: triage::handler!(|n: &i64| println!("{n} is even")),
/// };
/// assert!(even.evaluate(&4).matched());
/// ```
#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        matches: |$value:ident : &$ty:ty| $pred:expr,
        handler: $handler:expr $(,)?
    ) => {{
        let handler: $crate::Handler<$ty> = $handler;
        $crate::Rule::new($name, move |$value: &$ty| {
            if $pred { $crate::Verdict::Hit(Some(handler.clone())) } else { $crate::Verdict::Miss }
        })
    }};
    (
        name: $name:expr,
        matches: |$value:ident : &$ty:ty| $pred:expr $(,)?
    ) => {
        $crate::Rule::new($name, move |$value: &$ty| {
            if $pred { $crate::Verdict::Hit(None) } else { $crate::Verdict::Miss }
        })
    };
}
