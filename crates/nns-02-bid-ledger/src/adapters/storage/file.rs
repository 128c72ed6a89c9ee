use crate::domain::errors::KVStoreError;
use crate::ports::outbound::KeyValueStore;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

type Entries = HashMap<Vec<u8>, Vec<u8>>;

fn io_error(e: std::io::Error) -> KVStoreError {
    KVStoreError::IOError {
        message: e.to_string(),
    }
}

/// File-backed key-value store.
///
/// Keeps every entry in memory and rewrites the whole file on each
/// mutation. Writes go to a sibling `.tmp` file first and are renamed into
/// place, so a crash leaves either the old or the new file on disk.
///
/// File format: `[key_len:u32 LE][key][value_len:u32 LE][value]...`
#[derive(Debug)]
pub struct FileBackedKVStore {
    data: Entries,
    path: PathBuf,
}

impl FileBackedKVStore {
    /// Open the store at `path`, starting empty if the file is missing or
    /// malformed.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let data = match Self::load_from_file(&path) {
            Ok(data) => data,
            Err(_e) => {
                #[cfg(feature = "tracing-log")]
                nns_telemetry::log_event!(
                    warn,
                    crate::LOG_SUBSYSTEM,
                    "Ignoring unreadable store file",
                    path = %path.display(),
                    error = %_e
                );
                Entries::new()
            }
        };

        #[cfg(feature = "tracing-log")]
        nns_telemetry::log_event!(
            debug,
            crate::LOG_SUBSYSTEM,
            "Opened store",
            path = %path.display(),
            keys = data.len()
        );

        Self { data, path }
    }

    /// Open the store at `path`, failing if the file exists but cannot be
    /// read or parsed. A missing file is an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, KVStoreError> {
        let path = path.as_ref().to_path_buf();
        let data = Self::load_from_file(&path)?;
        Ok(Self { data, path })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_from_file(path: &Path) -> Result<Entries, KVStoreError> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(io_error(e)),
        };
        Self::decode(&bytes)
    }

    fn decode(bytes: &[u8]) -> Result<Entries, KVStoreError> {
        fn take<'a>(bytes: &'a [u8], cursor: &mut usize, len: usize) -> Option<&'a [u8]> {
            let end = cursor.checked_add(len)?;
            let slice = bytes.get(*cursor..end)?;
            *cursor = end;
            Some(slice)
        }

        fn take_len(bytes: &[u8], cursor: &mut usize) -> Option<usize> {
            let raw = take(bytes, cursor, 4)?;
            Some(u32::from_le_bytes(raw.try_into().ok()?) as usize)
        }

        let mut data = Entries::new();
        let mut cursor = 0;

        while cursor < bytes.len() {
            let offset = cursor;
            let entry = take_len(bytes, &mut cursor)
                .and_then(|len| take(bytes, &mut cursor, len))
                .map(<[u8]>::to_vec)
                .and_then(|key| {
                    let len = take_len(bytes, &mut cursor)?;
                    let value = take(bytes, &mut cursor, len)?.to_vec();
                    Some((key, value))
                });

            match entry {
                Some((key, value)) => {
                    data.insert(key, value);
                }
                None => {
                    return Err(KVStoreError::Malformed {
                        message: format!("truncated entry at byte {offset}"),
                    })
                }
            }
        }

        Ok(data)
    }

    fn encode(&self) -> Vec<u8> {
        let mut keys: Vec<_> = self.data.keys().collect();
        keys.sort();

        let mut bytes = Vec::new();
        for key in keys {
            let value = &self.data[key];
            bytes.extend_from_slice(&(key.len() as u32).to_le_bytes());
            bytes.extend_from_slice(key);
            bytes.extend_from_slice(&(value.len() as u32).to_le_bytes());
            bytes.extend_from_slice(value);
        }
        bytes
    }

    fn save_to_file(&self) -> Result<(), KVStoreError> {
        use std::io::Write;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_error)?;
            }
        }

        let temp_path = self.path.with_extension("tmp");
        let mut file = std::fs::File::create(&temp_path).map_err(io_error)?;
        file.write_all(&self.encode()).map_err(io_error)?;
        file.sync_all().map_err(io_error)?;
        std::fs::rename(&temp_path, &self.path).map_err(io_error)?;

        Ok(())
    }
}

impl KeyValueStore for FileBackedKVStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        self.data.insert(key.to_vec(), value.to_vec());
        self.save_to_file()
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), KVStoreError> {
        if self.data.remove(key).is_some() {
            self.save_to_file()?;
        }
        Ok(())
    }

    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        Ok(self.data.contains_key(key))
    }
}
