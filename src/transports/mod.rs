
pub use self::in_memory_test::{InMemoryTestResponseBuilder, InMemoryTestTransport};
