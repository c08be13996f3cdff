//! Errors raised by container writes and callable binding.

use crate::container::ContainerKind;

/// A write refused by a container.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WriteError {
    /// Adding a new key to a container that is no longer extensible.
    #[error("cannot add key `{key}`: {container} is not extensible")]
    NotExtensible { key: String, container: ContainerKind },
    /// Overwriting an entry of a frozen container.
    #[error("cannot assign key `{key}`: {container} is frozen")]
    Frozen { key: String, container: ContainerKind },
    /// Removing an entry from a sealed container.
    #[error("cannot remove key `{key}`: {container} is sealed")]
    Sealed { key: String, container: ContainerKind },
    /// A key the container cannot address, e.g. a field name on a sequence.
    #[error("{container} cannot be addressed by key `{key}`")]
    KeyMismatch { key: String, container: ContainerKind },
    /// An index past the largest one a sequence can hold.
    #[error("cannot assign key `{key}`: {container} indices stop at {max}")]
    IndexOutOfRange {
        key: String,
        container: ContainerKind,
        max: usize,
    },
}

impl WriteError {
    #[cold]
    pub(crate) fn not_extensible(key: impl ToString, container: ContainerKind) -> Self {
        WriteError::NotExtensible {
            key: key.to_string(),
            container,
        }
    }

    #[cold]
    pub(crate) fn frozen(key: impl ToString, container: ContainerKind) -> Self {
        WriteError::Frozen {
            key: key.to_string(),
            container,
        }
    }

    #[cold]
    pub(crate) fn sealed(key: impl ToString, container: ContainerKind) -> Self {
        WriteError::Sealed {
            key: key.to_string(),
            container,
        }
    }

    #[cold]
    pub(crate) fn key_mismatch(key: impl ToString, container: ContainerKind) -> Self {
        WriteError::KeyMismatch {
            key: key.to_string(),
            container,
        }
    }

    #[cold]
    pub(crate) fn index_out_of_range(
        key: impl ToString,
        container: ContainerKind,
        max: usize,
    ) -> Self {
        WriteError::IndexOutOfRange {
            key: key.to_string(),
            container,
            max,
        }
    }

    /// The container kind that refused the write.
    pub fn container(&self) -> ContainerKind {
        match self {
            WriteError::NotExtensible { container, .. }
            | WriteError::Frozen { container, .. }
            | WriteError::Sealed { container, .. }
            | WriteError::KeyMismatch { container, .. }
            | WriteError::IndexOutOfRange { container, .. } => *container,
        }
    }
}

/// A callable that could not be rebound.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CallableError {
    /// Host callables carry no receiver slot and refuse to bind.
    #[error("callable `{name}` cannot be bound to a receiver")]
    NotBindable { name: String },
}
