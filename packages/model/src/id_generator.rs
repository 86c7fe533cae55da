use rand::distributions::Alphanumeric;
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

static COUNTER: AtomicU64 = AtomicU64::new(0);

const SUFFIX_LEN: usize = 6;

/// Generate a process-unique element ID prefixed with its type.
///
/// Format: `{kind}-{counter}-{timestamp base36}-{random}`. The counter alone
/// guarantees uniqueness within a process; timestamp and suffix keep IDs from
/// separate sessions of the same document apart.
pub fn generate_id(kind: &str) -> String {
    let count = COUNTER.fetch_add(1, Ordering::Relaxed) + 1;
    let timestamp = to_base36(chrono::Utc::now().timestamp_millis().max(0) as u64);
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect();

    format!("{}-{}-{}-{}", kind, count, timestamp, suffix)
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut buf = Vec::new();
    while value > 0 {
        buf.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    buf.reverse();
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_prefixed_by_kind() {
        for kind in ["paragraph", "list-item"] {
            let id = generate_id(kind);
            let rest = id.strip_prefix(&format!("{}-", kind)).unwrap();

            let mut parts = rest.rsplitn(3, '-');
            let suffix = parts.next().unwrap();
            assert_eq!(suffix.len(), 6);
            assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
            assert!(parts.next().unwrap().chars().all(|c| c.is_ascii_alphanumeric()));
            assert!(parts.next().unwrap().parse::<u64>().is_ok());
        }
    }

    #[test]
    fn test_ten_thousand_unique_ids() {
        let ids: HashSet<String> = (0..10_000).map(|_| generate_id("div")).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }
}
