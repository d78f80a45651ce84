use std::hash::{BuildHasher, Hash};

use serde::{ser::SerializeSeq, Deserialize, Deserializer, Serialize, Serializer};

use super::Set;

/// Serialized as a plain sequence of the members.
impl<T: Serialize, S> Serialize for Set<T, S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let members = self.read();
        let mut seq = serializer.serialize_seq(Some(members.len()))?;
        for elem in members.keys() {
            seq.serialize_element(elem)?;
        }
        seq.end()
    }
}

impl<'de, T, S> Deserialize<'de> for Set<T, S>
where
    T: Deserialize<'de> + Eq + Hash,
    S: BuildHasher + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let elems = Vec::<T>::deserialize(deserializer)?;
        Ok(Self::from_elems(elems))
    }
}
