use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use skybook_core::{CoreError, CoreResult, CredentialStore, UserRecord};
use skybook_shared::Masked;

/// Number of fields in a legacy comma-delimited record.
const LEGACY_FIELD_COUNT: usize = 6;

/// Append-only credential file, one JSON object per line.
///
/// Lines written by older builds in the bare `name,email,phone,dob,username,password`
/// layout are still readable; they are never rewritten.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_error(&self, source: std::io::Error) -> CoreError {
        CoreError::FileOpen {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl CredentialStore for FileCredentialStore {
    fn append(&self, record: &UserRecord) -> CoreResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.open_error(e))?;

        let line = serde_json::to_string(record)?;
        writeln!(file, "{}", line)?;
        file.flush()?;

        tracing::debug!(path = %self.path.display(), "Appended credential record");
        Ok(())
    }

    fn find(&self, username: &str, password: &str) -> CoreResult<Option<UserRecord>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Credential file absent");
                return Ok(None);
            }
            Err(e) => return Err(self.open_error(e)),
        };

        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();
        let mut line_number = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }
            line_number += 1;

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line.trim_end_matches('\n'),
                Err(e) => {
                    tracing::warn!(line_number, error = %e, "Skipping undecodable credential record");
                    continue;
                }
            };
            if line.trim().is_empty() {
                continue;
            }

            if let Some(record) = parse_line(line, line_number) {
                if record.matches(username, password) {
                    return Ok(Some(record));
                }
            }
        }
    }
}

/// Decode one stored line. Malformed lines are logged and skipped.
fn parse_line(line: &str, line_number: usize) -> Option<UserRecord> {
    let line = line.trim_end_matches('\r');

    if line.trim_start().starts_with('{') {
        return match serde_json::from_str(line) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(line_number, error = %e, "Skipping unreadable credential record");
                None
            }
        };
    }

    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != LEGACY_FIELD_COUNT {
        tracing::warn!(
            line_number,
            fields = fields.len(),
            "Skipping legacy credential record with wrong field count"
        );
        return None;
    }

    Some(UserRecord {
        name: fields[0].to_string(),
        email: fields[1].to_string(),
        phone: fields[2].to_string(),
        dob: fields[3].to_string(),
        username: fields[4].to_string(),
        password: Masked(fields[5].to_string()),
        registered_at: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use skybook_core::Registration;
    use std::fs;

    fn registration(name: &str, username: &str, password: &str) -> Registration {
        Registration {
            name: name.to_string(),
            email: "someone@example.com".to_string(),
            phone: "555-0100".to_string(),
            dob: "01/02/1990".to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_register_then_login_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("users.jsonl"));

        UserRecord::register(&store, registration("Alice", "alice", "pw1")).unwrap();

        let user = UserRecord::login(&store, "alice", "pw1").unwrap();
        assert_eq!(user.name, "Alice");
        assert!(matches!(
            UserRecord::login(&store, "alice", "nope"),
            Err(CoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("absent.jsonl"));

        assert!(store.find("alice", "pw1").unwrap().is_none());
    }

    #[test]
    fn test_embedded_delimiters_survive() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("users.jsonl"));

        UserRecord::register(&store, registration("Smith, Jane \"JJ\"", "jane", "a,b")).unwrap();

        let user = store.find("jane", "a,b").unwrap().unwrap();
        assert_eq!(user.name, "Smith, Jane \"JJ\"");

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents.lines().count(), 1);
    }

    #[test]
    fn test_reads_legacy_comma_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.csv");
        fs::write(
            &path,
            "Bad Row,too,few\nBob Jones,bob@example.com,555,1980-05-05,bob,secret\n",
        )
        .unwrap();

        let store = FileCredentialStore::new(&path);
        let user = store.find("bob", "secret").unwrap().unwrap();
        assert_eq!(user.email, "bob@example.com");
        assert!(user.registered_at.is_none());
    }

    #[test]
    fn test_undecodable_line_does_not_hide_later_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.csv");
        let mut contents = b"\xff\xfe,broken\n".to_vec();
        contents.extend_from_slice(b"Bob Jones,bob@example.com,555,1980-05-05,bob,secret\n");
        fs::write(&path, contents).unwrap();

        let store = FileCredentialStore::new(&path);
        let user = store.find("bob", "secret").unwrap().unwrap();
        assert_eq!(user.name, "Bob Jones");
    }

    #[test]
    fn test_legacy_line_with_embedded_comma_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.csv");
        fs::write(
            &path,
            "Smith, Jane,jane@example.com,555,1990-01-01,jane,pw\n\
             Bob Jones,bob@example.com,555,1980-05-05,bob,secret\n",
        )
        .unwrap();

        let store = FileCredentialStore::new(&path);
        assert!(store.find("jane", "pw").unwrap().is_none());
        // Shifted fields must not match either.
        assert!(store.find("1990-01-01", "jane").unwrap().is_none());
        assert!(store.find("bob", "secret").unwrap().is_some());
    }

    #[test]
    fn test_find_with_unopenable_path_is_file_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain");
        fs::write(&plain, "not a directory").unwrap();
        let store = FileCredentialStore::new(plain.join("users.jsonl"));

        assert!(matches!(
            store.find("alice", "pw1"),
            Err(CoreError::FileOpen { .. })
        ));
    }

    #[test]
    fn test_append_preserves_existing_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.jsonl");
        fs::write(&path, "Old User,old@example.com,1,2,old,pw\n").unwrap();

        let store = FileCredentialStore::new(&path);
        UserRecord::register(&store, registration("New", "new", "pw")).unwrap();

        assert!(store.find("old", "pw").unwrap().is_some());
        assert!(store.find("new", "pw").unwrap().is_some());
        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 2);
    }

    #[test]
    fn test_append_to_unopenable_path_is_file_open_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for append.
        let store = FileCredentialStore::new(dir.path());

        let result = UserRecord::register(&store, registration("X", "x", "y"));
        assert!(matches!(result, Err(CoreError::FileOpen { .. })));
    }
}
