use std::env;

/// Which persistence strategy the stores are built on.
///
/// Selected once at process start; repositories are constructed for the
/// chosen backend and injected into the services. Switching backends at
/// runtime is not supported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// On-device JSON-blob storage, seeded from the bundled fixtures.
    #[default]
    Local,
    /// Hosted tabular record-store API.
    Remote,
}

impl StorageBackend {
    /// Read the backend selection from `TASKFLOW_BACKEND`.
    ///
    /// Accepts `local` / `remote` case-insensitively; anything else
    /// (including an unset variable) selects the local backend.
    pub fn from_env() -> Self {
        let backend = env::var("TASKFLOW_BACKEND").unwrap_or_else(|_| "local".to_string());

        if backend.eq_ignore_ascii_case("remote") {
            StorageBackend::Remote
        } else {
            StorageBackend::Local
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, StorageBackend::Remote)
    }
}
