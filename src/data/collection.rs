// src/data/collection.rs
/*!
A **CoordinateCollection**: coordinate-keyed, duplicate-free set of
[`DataVector`]s — a *well set*.

Design goals:
- Ordering and key-uniqueness are explicit, tested contracts: storage is a
  `BTreeMap<Coordinate, DataVector<T>>`, so iteration is always ascending
  (row, then column).
- `insert` **rejects** a duplicate coordinate; `replace` is the explicit
  overwrite path and returns the displaced vector.
- Union / intersection / difference are explicit helpers, not operator
  overloads; union keeps `self`'s vector on a key collision.

Serialization: a collection serializes as a sequence of `DataVector`s (each
carries its coordinate), not as a map — JSON object keys must be strings.
Deserialization rebuilds the map and rejects duplicate coordinates.
*/

use std::collections::BTreeMap;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;
use super::vector::DataVector;
use crate::error::{PlateError, Result};
use crate::math::scalar::Scalar;

/// A coordinate-keyed, duplicate-free collection of data vectors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoordinateCollection<T: Scalar> {
    map: BTreeMap<Coordinate, DataVector<T>>,
}

// ===================================================================
// ----------------------------- Basics ------------------------------
// ===================================================================

impl<T: Scalar> CoordinateCollection<T> {
    /// New empty collection.
    #[inline]
    pub fn new() -> Self {
        Self { map: BTreeMap::new() }
    }

    /// Build from vectors, rejecting duplicate coordinates.
    pub fn from_vectors(vectors: impl IntoIterator<Item = DataVector<T>>) -> Result<Self> {
        let mut out = Self::new();
        for v in vectors {
            out.insert(v)?;
        }
        Ok(out)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.map.contains_key(&coord)
    }

    #[inline]
    pub fn get(&self, coord: Coordinate) -> Option<&DataVector<T>> {
        self.map.get(&coord)
    }

    /// Insert a vector; a duplicate coordinate is an error and leaves the
    /// collection unchanged.
    pub fn insert(&mut self, vector: DataVector<T>) -> Result<()> {
        let coord = vector.coord();
        if self.map.contains_key(&coord) {
            return Err(PlateError::DuplicateCoordinate(coord));
        }
        self.map.insert(coord, vector);
        Ok(())
    }

    /// Insert or overwrite, returning the displaced vector if any.
    #[inline]
    pub fn replace(&mut self, vector: DataVector<T>) -> Option<DataVector<T>> {
        self.map.insert(vector.coord(), vector)
    }

    /// Remove and return the vector at `coord`.
    #[inline]
    pub fn remove(&mut self, coord: Coordinate) -> Option<DataVector<T>> {
        self.map.remove(&coord)
    }

    /// Ascending (row, column) iteration over the vectors.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &DataVector<T>> {
        self.map.values()
    }

    /// Ascending iteration over the coordinates.
    #[inline]
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.map.keys().copied()
    }
}

// ===================================================================
// ---------------------------- Set algebra ---------------------------
// ===================================================================

impl<T: Scalar> CoordinateCollection<T> {
    /// Union: every coordinate of either side; on a collision `self`'s
    /// vector wins.
    pub fn union(&self, other: &Self) -> Self {
        let mut map = self.map.clone();
        for (coord, v) in &other.map {
            map.entry(*coord).or_insert_with(|| v.clone());
        }
        Self { map }
    }

    /// Intersection: only coordinates present in both; `self`'s vectors.
    pub fn intersect(&self, other: &Self) -> Self {
        let map = self
            .map
            .iter()
            .filter(|(coord, _)| other.map.contains_key(coord))
            .map(|(c, v)| (*c, v.clone()))
            .collect();
        Self { map }
    }

    /// Difference: `self`'s coordinates absent from `other`.
    pub fn difference(&self, other: &Self) -> Self {
        let map = self
            .map
            .iter()
            .filter(|(coord, _)| !other.map.contains_key(coord))
            .map(|(c, v)| (*c, v.clone()))
            .collect();
        Self { map }
    }

    /// Keep only coordinates also present in `other` (in-place intersection).
    pub fn retain_in(&mut self, other: &Self) {
        self.map.retain(|coord, _| other.map.contains_key(coord));
    }

    /// Drop coordinates present in `other` (in-place difference).
    pub fn remove_in(&mut self, other: &Self) {
        self.map.retain(|coord, _| !other.map.contains_key(coord));
    }
}

// ===================================================================
// ------------------------- Serialization ----------------------------
// ===================================================================

impl<T: Scalar + Serialize> Serialize for CoordinateCollection<T> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.map.len()))?;
        for v in self.map.values() {
            seq.serialize_element(v)?;
        }
        seq.end()
    }
}

impl<'de, T: Scalar + Deserialize<'de>> Deserialize<'de> for CoordinateCollection<T> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SeqVisitor<T>(core::marker::PhantomData<T>);

        impl<'de, T: Scalar + Deserialize<'de>> Visitor<'de> for SeqVisitor<T> {
            type Value = CoordinateCollection<T>;

            fn expecting(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                f.write_str("a sequence of data vectors with unique coordinates")
            }

            fn visit_seq<A>(self, mut seq: A) -> core::result::Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut out = CoordinateCollection::new();
                while let Some(v) = seq.next_element::<DataVector<T>>()? {
                    let coord = v.coord();
                    if out.replace(v).is_some() {
                        return Err(de::Error::custom(format!(
                            "duplicate coordinate {coord} in collection"
                        )));
                    }
                }
                Ok(out)
            }
        }

        deserializer.deserialize_seq(SeqVisitor(core::marker::PhantomData))
    }
}

impl<T: Scalar + Serialize + serde::de::DeserializeOwned> CoordinateCollection<T> {
    /// Serialize to a compact JSON array of vectors.
    #[inline]
    pub fn to_json_string(&self) -> core::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to a pretty JSON string.
    #[inline]
    pub fn to_json_pretty(&self) -> core::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from a JSON string.
    #[inline]
    pub fn from_json_str(s: &str) -> core::result::Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coll(entries: &[(usize, usize, &[i64])]) -> CoordinateCollection<i64> {
        CoordinateCollection::from_vectors(
            entries
                .iter()
                .map(|&(r, c, d)| DataVector::at(r, c, d.to_vec())),
        )
        .unwrap()
    }

    #[test]
    fn insert_rejects_duplicates_replace_overwrites() {
        let mut s = coll(&[(0, 0, &[1, 2])]);
        let err = s.insert(DataVector::at(0, 0, vec![9])).unwrap_err();
        assert_eq!(err, PlateError::DuplicateCoordinate(Coordinate::new(0, 0)));
        assert_eq!(s.get(Coordinate::new(0, 0)).unwrap().data(), &[1, 2]);

        let old = s.replace(DataVector::at(0, 0, vec![9])).unwrap();
        assert_eq!(old.data(), &[1, 2]);
        assert_eq!(s.get(Coordinate::new(0, 0)).unwrap().data(), &[9]);
    }

    #[test]
    fn iteration_is_ascending_row_then_column() {
        let s = coll(&[(1, 0, &[1]), (0, 2, &[2]), (0, 0, &[3]), (1, 1, &[4])]);
        let order: Vec<Coordinate> = s.coordinates().collect();
        assert_eq!(
            order,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 2),
                Coordinate::new(1, 0),
                Coordinate::new(1, 1),
            ]
        );
    }

    #[test]
    fn set_algebra() {
        let a = coll(&[(0, 0, &[1]), (0, 1, &[2])]);
        let b = coll(&[(0, 1, &[9]), (1, 0, &[3])]);

        let u = a.union(&b);
        assert_eq!(u.len(), 3);
        // self wins on collision
        assert_eq!(u.get(Coordinate::new(0, 1)).unwrap().data(), &[2]);

        let i = a.intersect(&b);
        assert_eq!(i.len(), 1);
        assert!(i.contains(Coordinate::new(0, 1)));

        let d = a.difference(&b);
        assert_eq!(d.len(), 1);
        assert!(d.contains(Coordinate::new(0, 0)));
    }

    #[test]
    fn json_roundtrip_preserves_membership() {
        let s = coll(&[(0, 0, &[1, 2]), (2, 3, &[4])]);
        let json = s.to_json_string().unwrap();
        let back = CoordinateCollection::<i64>::from_json_str(&json).unwrap();
        assert_eq!(s, back);
    }

    #[test]
    fn json_rejects_duplicate_coordinates() {
        let json = r#"[
            {"coord": {"row": 0, "column": 0}, "data": [1]},
            {"coord": {"row": 0, "column": 0}, "data": [2]}
        ]"#;
        assert!(CoordinateCollection::<i64>::from_json_str(json).is_err());
    }
}
