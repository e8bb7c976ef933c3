//! Storage for maps whose key and value types are only known at the call site.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::hash::Hash;

/// A set of `HashMap<K, V>` instances, one per combination of `K`, `V` and a tag type.
///
/// The tag separates maps that share key and value types, e.g. statistics of the same label
/// type recorded at different precisions, or pending intervals of the same key type used
/// with different sink types.
#[derive(Debug, Default)]
pub(crate) struct TypedMaps {
    maps: HashMap<TypeId, Box<dyn Any + Send>>,
}

impl TypedMaps {
    /// Returns the map for `K`, `V` and `Tag`, creating it if it does not exist yet.
    pub(crate) fn get_or_create<K, V, Tag>(&mut self) -> &mut HashMap<K, V>
    where
        K: Hash + Eq + Send + 'static,
        V: Send + 'static,
        Tag: ?Sized + 'static,
    {
        self.maps
            .entry(slot_id::<K, V, Tag>())
            .or_insert_with(|| Box::new(HashMap::<K, V>::new()))
            .downcast_mut()
            .expect("every slot holds the map type its id was derived from")
    }

    /// Returns the map for `K`, `V` and `Tag` if it exists.
    pub(crate) fn get<K, V, Tag>(&self) -> Option<&HashMap<K, V>>
    where
        K: Hash + Eq + Send + 'static,
        V: Send + 'static,
        Tag: ?Sized + 'static,
    {
        self.maps
            .get(&slot_id::<K, V, Tag>())
            .and_then(|map| map.downcast_ref())
    }

    /// Returns the map for `K`, `V` and `Tag` for modification if it exists.
    pub(crate) fn get_mut<K, V, Tag>(&mut self) -> Option<&mut HashMap<K, V>>
    where
        K: Hash + Eq + Send + 'static,
        V: Send + 'static,
        Tag: ?Sized + 'static,
    {
        self.maps
            .get_mut(&slot_id::<K, V, Tag>())
            .and_then(|map| map.downcast_mut())
    }
}

fn slot_id<K: 'static, V: 'static, Tag: ?Sized + 'static>() -> TypeId {
    TypeId::of::<(HashMap<K, V>, Box<Tag>)>()
}
