//! Serialization support, available behind the `serde` feature.
//!
//! Both container types serialize as flat sequences of their elements, in
//! index order for [`Vector`] and `i + N * j` order for [`Matrix`].
//! Manual impls are required because serde's derived array support does not
//! extend to const-generic lengths.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::matrix::Matrix;
use crate::traits::Scalar;
use crate::vector::Vector;

impl<T, const N: usize> Serialize for Vector<T, N>
where
    T: Scalar + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(N))?;
        for x in self.iter() {
            seq.serialize_element(x)?;
        }
        seq.end()
    }
}

struct VectorVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> Visitor<'de> for VectorVisitor<T, N>
where
    T: Scalar + Deserialize<'de>,
{
    type Value = Vector<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of {} numbers", N)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut out = Vector::zeros();
        for i in 0..N {
            out[i] = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        if seq.next_element::<T>()?.is_some() {
            return Err(de::Error::invalid_length(N + 1, &self));
        }
        Ok(out)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for Vector<T, N>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(VectorVisitor(PhantomData))
    }
}

impl<T, const N: usize, const M: usize> Serialize for Matrix<T, N, M>
where
    T: Scalar + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(N * M))?;
        for x in self.iter() {
            seq.serialize_element(x)?;
        }
        seq.end()
    }
}

struct MatrixVisitor<T, const N: usize, const M: usize>(PhantomData<T>);

impl<'de, T, const N: usize, const M: usize> Visitor<'de> for MatrixVisitor<T, N, M>
where
    T: Scalar + Deserialize<'de>,
{
    type Value = Matrix<T, N, M>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a flat sequence of {} numbers", N * M)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut out = Matrix::zeros();
        for n in 0..N * M {
            out[n] = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(n, &self))?;
        }
        if seq.next_element::<T>()?.is_some() {
            return Err(de::Error::invalid_length(N * M + 1, &self));
        }
        Ok(out)
    }
}

impl<'de, T, const N: usize, const M: usize> Deserialize<'de> for Matrix<T, N, M>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(MatrixVisitor(PhantomData))
    }
}
