// src/counting.rs

use std::sync::atomic::{AtomicUsize, Ordering};

use dgroup_algorithms::algebra::CryptoGroupAlgebra;
use dgroup_algorithms::BitLength;
use dgroup_api::Result;
use dgroup_common::CheckedPrime;
use num_bigint::BigUint;
use subtle::Choice;

/// Operation counts observed during one computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OperationCounts {
    pub adds: usize,
    pub multiplexes: usize,
}

/// Wraps an algebra and counts calls to its group law and multiplex
///
/// Only the primitives are forwarded. Scalar multiplication, negation and
/// the safety check fall back to the generic engine, so the counts show
/// exactly what the engine asks of the realization.
#[derive(Debug)]
pub struct CountingAlgebra<A> {
    inner: A,
    adds: AtomicUsize,
    multiplexes: AtomicUsize,
}

impl<A: CryptoGroupAlgebra> CountingAlgebra<A> {
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            adds: AtomicUsize::new(0),
            multiplexes: AtomicUsize::new(0),
        }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }

    /// Reset the counters, run `f`, and return what it cost
    pub fn measure<T>(&self, f: impl FnOnce(&Self) -> T) -> (T, OperationCounts) {
        self.adds.store(0, Ordering::SeqCst);
        self.multiplexes.store(0, Ordering::SeqCst);
        let out = f(self);
        let counts = OperationCounts {
            adds: self.adds.load(Ordering::SeqCst),
            multiplexes: self.multiplexes.load(Ordering::SeqCst),
        };
        (out, counts)
    }
}

impl<A: CryptoGroupAlgebra> PartialEq for CountingAlgebra<A> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<A: CryptoGroupAlgebra> CryptoGroupAlgebra for CountingAlgebra<A> {
    type Element = A::Element;

    fn order(&self) -> &CheckedPrime {
        self.inner.order()
    }

    fn generator(&self) -> &A::Element {
        self.inner.generator()
    }

    fn neutral_element(&self) -> &A::Element {
        self.inner.neutral_element()
    }

    fn cofactor(&self) -> &BigUint {
        self.inner.cofactor()
    }

    fn element_bit_length(&self) -> BitLength {
        self.inner.element_bit_length()
    }

    fn add(&self, left: &A::Element, right: &A::Element) -> A::Element {
        self.adds.fetch_add(1, Ordering::SeqCst);
        self.inner.add(left, right)
    }

    fn multiplex(&self, selection: Choice, left: &A::Element, right: &A::Element) -> A::Element {
        self.multiplexes.fetch_add(1, Ordering::SeqCst);
        self.inner.multiplex(selection, left, right)
    }

    fn is_potential_element(&self, element: &A::Element) -> bool {
        self.inner.is_potential_element(element)
    }

    fn to_bytes(&self, element: &A::Element) -> Vec<u8> {
        self.inner.to_bytes(element)
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<A::Element> {
        self.inner.from_bytes(bytes)
    }
}
