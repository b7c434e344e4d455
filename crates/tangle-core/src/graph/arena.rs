//! Generational arena backing the graph's node and edge collections.
//!
//! Slots are recycled through a free list; every reuse bumps the slot's
//! generation, so a handle taken before a removal can never alias an
//! entity stored later in the same slot. This is what makes `NodeId` and
//! `EdgeId` safe to hold across mutations: a stale handle simply stops
//! resolving instead of pointing at unrelated data.

use serde::{Deserialize, Serialize};

/// A stable reference into an [`Arena`]: slot index plus generation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub(crate) struct Handle {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
enum Slot<T> {
    Occupied { generation: u32, value: T },
    Vacant { generation: u32, next_free: Option<u32> },
}

/// Generational arena with O(1) insert, remove, and handle lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<u32>,
    len: usize,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Inserts a value, reusing a vacant slot when one is available.
    pub(crate) fn insert(&mut self, value: T) -> Handle {
        self.len += 1;

        if let Some(index) = self.free_head {
            let slot = &mut self.slots[index as usize];
            let Slot::Vacant {
                generation,
                next_free,
            } = *slot
            else {
                // The free list only ever points at vacant slots.
                unreachable!("free list points at occupied slot");
            };
            self.free_head = next_free;
            *slot = Slot::Occupied { generation, value };
            Handle { index, generation }
        } else {
            let index =
                u32::try_from(self.slots.len()).expect("arena exceeds u32::MAX slots");
            self.slots.push(Slot::Occupied {
                generation: 0,
                value,
            });
            Handle {
                index,
                generation: 0,
            }
        }
    }

    /// Removes the value behind `handle`, returning it if the handle was live.
    ///
    /// The slot's generation is bumped before it joins the free list, which
    /// invalidates every outstanding handle to it.
    pub(crate) fn remove(&mut self, handle: Handle) -> Option<T> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        match slot {
            Slot::Occupied { generation, .. } if *generation == handle.generation => {
                let next = Slot::Vacant {
                    generation: handle.generation.wrapping_add(1),
                    next_free: self.free_head,
                };
                let Slot::Occupied { value, .. } = std::mem::replace(slot, next) else {
                    unreachable!("slot occupancy checked above");
                };
                self.free_head = Some(handle.index);
                self.len -= 1;
                Some(value)
            }
            _ => None,
        }
    }

    pub(crate) fn get(&self, handle: Handle) -> Option<&T> {
        match self.slots.get(handle.index as usize) {
            Some(Slot::Occupied { generation, value }) if *generation == handle.generation => {
                Some(value)
            }
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        match self.slots.get_mut(handle.index as usize) {
            Some(Slot::Occupied { generation, value }) if *generation == handle.generation => {
                Some(value)
            }
            _ => None,
        }
    }

    pub(crate) fn contains(&self, handle: Handle) -> bool {
        self.get(handle).is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every value. Each occupied slot's generation is bumped on
    /// the way out, so handles taken before the clear keep failing the
    /// generation check even when their slot is reused afterwards.
    pub(crate) fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let Slot::Occupied { generation, .. } = slot else {
                continue;
            };
            let vacated = Slot::Vacant {
                generation: generation.wrapping_add(1),
                next_free: self.free_head,
            };
            *slot = vacated;
            #[allow(clippy::cast_possible_truncation)] // index came from a u32-bounded Vec
            let index = index as u32;
            self.free_head = Some(index);
        }
        self.len = 0;
    }

    /// Iterates over live entries in slot order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (Handle, &T)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            let Slot::Occupied { generation, value } = slot else {
                return None;
            };
            #[allow(clippy::cast_possible_truncation)] // index came from a u32-bounded Vec
            let index = index as u32;
            Some((
                Handle {
                    index,
                    generation: *generation,
                },
                value,
            ))
        })
    }

    /// Returns the handle of the `position`-th live entry in slot order.
    ///
    /// Slot order is stable between mutations, which is what external
    /// persistence layers rely on when storing entities by integer index.
    pub(crate) fn handle_at(&self, position: usize) -> Option<Handle> {
        self.iter().nth(position).map(|(handle, _)| handle)
    }

    /// Returns the rank of `handle` among live entries in slot order.
    pub(crate) fn position(&self, handle: Handle) -> Option<usize> {
        self.iter().position(|(h, _)| h == handle)
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}
