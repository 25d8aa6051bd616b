//=========================================================================
// Message Bus
//=========================================================================
//
// Type-keyed message queues shared by the engine and the running game.
//
// Architecture:
//   GlobalSystems → push<A>() → HashMap<TypeId, Vec<A>>
//                                    ↓
//   Game::update ← read<A>() (shared slice)
//                                    ↓
//   GlobalSystems → clear<A>() at the start of the next tick
//
// Pattern: clear → push → read → repeat
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::any::{Any, TypeId};
use std::collections::HashMap;

//=== Message Trait =======================================================

/// Marker trait for types that can be sent through the [`MessageBus`].
///
/// Automatically implemented for all `Send + 'static` types.
pub trait Message: Send + 'static {}

impl<T: Send + 'static> Message for T {}

//=== MessageQueue ========================================================

/// Type-erased view of a `Vec<M>` so queues of any type share one map.
trait MessageQueue: Send {
    fn clear_queue(&mut self);
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<M: Message> MessageQueue for Vec<M> {
    fn clear_queue(&mut self) {
        // Vec::clear keeps capacity for next tick
        self.clear();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

//=== MessageBus ==========================================================

/// One queue per message type.
#[derive(Default)]
pub struct MessageBus {
    queues: HashMap<TypeId, Box<dyn MessageQueue>>,
}

impl MessageBus {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Message Operations -----------------------------------------------

    /// Appends `msg` to the queue for its type.
    pub fn push<M: Message>(&mut self, msg: M) {
        if let Some(queue) = self
            .queues
            .entry(TypeId::of::<M>())
            .or_insert_with(|| Box::new(Vec::<M>::new()))
            .as_any_mut()
            .downcast_mut::<Vec<M>>()
        {
            queue.push(msg);
        }
    }

    /// Returns every queued message of type `M`, oldest first.
    ///
    /// Reading does not consume; all readers in a tick see the same slice.
    pub fn read<M: Message>(&self) -> &[M] {
        self.queue::<M>().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the number of queued messages of type `M`.
    pub fn count<M: Message>(&self) -> usize {
        self.queue::<M>().map_or(0, Vec::len)
    }

    /// Clears messages of type `M`, keeping allocated capacity.
    pub fn clear<M: Message>(&mut self) {
        if let Some(queue) = self.queues.get_mut(&TypeId::of::<M>()) {
            queue.clear_queue();
        }
    }

    /// Clears every queue, keeping allocated capacity.
    pub fn clear_all(&mut self) {
        for queue in self.queues.values_mut() {
            queue.clear_queue();
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn queue<M: Message>(&self) -> Option<&Vec<M>> {
        self.queues
            .get(&TypeId::of::<M>())
            .and_then(|q| q.as_any().downcast_ref::<Vec<M>>())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
