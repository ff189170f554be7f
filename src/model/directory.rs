// src/model/directory.rs

/// Room name → value, in page order.
///
/// Inserting a name that is already present replaces its value but keeps the
/// original position, so duplicated links on a page resolve to the last one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomDirectory<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for RoomDirectory<V> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<V> RoomDirectory<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the replaced value, if any.
    pub fn insert(&mut self, room: impl Into<String>, value: V) -> Option<V> {
        let room = room.into();
        match self.entries.iter_mut().find(|(name, _)| *name == room) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((room, value));
                None
            }
        }
    }

    pub fn get(&self, room: &str) -> Option<&V> {
        self.entries.iter().find(|(name, _)| name == room).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn rooms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(name, v)| (name.as_str(), v))
    }
}

impl<V> IntoIterator for RoomDirectory<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for RoomDirectory<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dir = Self::new();
        for (room, value) in iter {
            dir.insert(room, value);
        }
        dir
    }
}
