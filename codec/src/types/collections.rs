//! Sets and mappings.
//!
//! These have no deterministic element order, so there is no layout a reader could rely on.
//! They implement the codec traits only to fail with [`Error::Unsupported`], which keeps the
//! refusal a typed error instead of a missing trait bound deep inside a composite.

use crate::{EncodeSize, Error, Read, SizeConfig, Write};
use bytes::{Buf, BufMut};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Category name reported for sets.
pub const SET: &str = "set";

/// Category name reported for mappings.
pub const MAPPING: &str = "mapping";

macro_rules! impl_unsupported {
    ($category:expr, [$($params:ident),*], $type:ty) => {
        impl<$($params),*> Write for $type {
            fn write(&self, _: &mut impl BufMut, _: &SizeConfig) -> Result<(), Error> {
                Err(Error::Unsupported($category))
            }
        }

        impl<$($params),*> EncodeSize for $type {
            fn encode_size(&self, _: &SizeConfig) -> usize {
                0
            }
        }

        impl<$($params),*> Read for $type {
            fn read_cfg(&self, _: &mut impl Buf, _: &SizeConfig) -> Result<Self, Error> {
                Err(Error::Unsupported($category))
            }
        }
    };
}

impl_unsupported!(SET, [T, S], HashSet<T, S>);
impl_unsupported!(SET, [T], BTreeSet<T>);
impl_unsupported!(MAPPING, [K, V, S], HashMap<K, V, S>);
impl_unsupported!(MAPPING, [K, V], BTreeMap<K, V>);
