//! Direct-style extraction for comonads.

use std::marker::PhantomData;

use crate::typeclass::{Comonad, Kind};

/// The handle a [`cobinding`] block extracts values through.
#[derive(Debug)]
pub struct CoScope<W, F> {
    comonad: W,
    extracted: usize,
    witness: PhantomData<fn() -> F>,
}

impl<W, F> CoScope<W, F>
where
    F: Kind,
    W: Comonad<F>,
{
    /// Pulls the focused value out of `wa`.
    ///
    /// The value is read by extending `wa` with `extract` and extracting the
    /// result, so a comonad whose `coflat_map` is lazy or observable sees the
    /// extraction as a step.
    pub fn extract<A: 'static>(&mut self, wa: F::Of<A>) -> A {
        let comonad = self.comonad.clone();
        let extended = self.comonad.coflat_map(wa, move |context: F::Of<A>| comonad.extract(context));
        self.extracted += 1;
        tracing::trace!(step = self.extracted, "extracted in cobinding block");
        self.comonad.extract(extended)
    }

    /// Number of values extracted so far.
    pub const fn extracted(&self) -> usize {
        self.extracted
    }
}

/// Runs `block`, extracting values from comonadic contexts in direct style.
///
/// # Examples
///
/// ```rust
/// use kindred::binding::cobinding;
/// use kindred::control::Eval;
/// use kindred::instances::EvalInstance;
///
/// let total = cobinding(&EvalInstance, |scope| {
///     let x = scope.extract(Eval::later(|| 20));
///     let y = scope.extract(Eval::now(22));
///     x + y
/// });
/// assert_eq!(total, 42);
/// ```
pub fn cobinding<W, F, B, Block>(comonad: &W, block: Block) -> B
where
    F: Kind,
    W: Comonad<F>,
    Block: FnOnce(&mut CoScope<W, F>) -> B,
{
    let mut scope = CoScope {
        comonad: comonad.clone(),
        extracted: 0,
        witness: PhantomData,
    };
    block(&mut scope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Eval;
    use crate::instances::{EvalInstance, IdentityInstance};
    use crate::typeclass::Identity;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    #[rstest]
    fn identity_extraction_sequences_values() {
        let result = cobinding(&IdentityInstance, |scope| {
            let name = scope.extract(Identity("kindred"));
            let length = scope.extract(Identity(name.len()));
            (scope.extracted(), format!("{name}:{length}"))
        });
        assert_eq!(result, (2, "kindred:7".to_string()));
    }

    #[rstest]
    fn eval_thunks_run_once_per_extraction() {
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);
        let value = cobinding(&EvalInstance, move |scope| {
            scope.extract(Eval::later(move || {
                counter.set(counter.get() + 1);
                5
            }))
        });
        assert_eq!(value, 5);
        assert_eq!(runs.get(), 1);
    }
}
