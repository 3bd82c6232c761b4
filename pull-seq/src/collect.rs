//! Draining a sequence into a collection.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::sequence::{IntoSequence, Sequence};

/// Collections that can be built by draining a [`Sequence`].
///
/// Used by [`Sequence::collect`]. Values are inserted in the order they are
/// yielded, so ordered collections keep that order and keyed collections keep
/// the last value seen for a key.
pub trait FromSequence<T>: Sized {
    /// Builds `Self` from every remaining value of `seq`.
    fn from_seq<S>(seq: S) -> Self
    where
        S: IntoSequence<Item = T>;
}

/// Implements [`FromSequence`] by bridging to the collection's
/// [`FromIterator`] impl, which also pre-sizes from the size hint.
macro_rules! from_sequence_via_iter {
    ($([$($gen:tt)*] $collection:ty, $item:ty, { $($bound:tt)* };)*) => {
        $(
            impl<$($gen)*> FromSequence<$item> for $collection
            where
                $($bound)*
            {
                fn from_seq<S>(seq: S) -> Self
                where
                    S: IntoSequence<Item = $item>,
                {
                    seq.into_seq().into_std().collect()
                }
            }
        )*
    };
}

from_sequence_via_iter! {
    [T] Vec<T>, T, {};
    [T] VecDeque<T>, T, {};
    [T] LinkedList<T>, T, {};
    [T] BTreeSet<T>, T, { T: Ord };
    [K, V] BTreeMap<K, V>, (K, V), { K: Ord };
    [T, H] HashSet<T, H>, T, { T: Eq + Hash, H: BuildHasher + Default };
    [K, V, H] HashMap<K, V, H>, (K, V), { K: Eq + Hash, H: BuildHasher + Default };
    [] String, char, {};
    ['a] String, &'a str, {};
}

#[cfg(feature = "smallvec")]
from_sequence_via_iter! {
    [A] smallvec::SmallVec<A>, A::Item, { A: smallvec::Array };
}

#[cfg(feature = "compact_str")]
from_sequence_via_iter! {
    [] compact_str::CompactString, char, {};
    ['a] compact_str::CompactString, &'a str, {};
}
