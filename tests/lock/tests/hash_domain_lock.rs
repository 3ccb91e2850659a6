//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. Canonical domain set has expected count (catches forgotten additions to ALL)
//! 2. All domain byte strings are unique, so equal data never collides
//! 3. All domains are null-terminated and follow `ROOMPLAN::*::V1\0`
//! 4. No raw `ROOMPLAN::` domain literals in production source outside `hash.rs`

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use roomplan_kernel::identity::hash::{canonical_hash, ContentHash, HashDomain};

// ---------------------------------------------------------------------------
// 1. Canonical set count
// ---------------------------------------------------------------------------

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        3,
        "expected 3 domain variants; if you added a new domain, update this count"
    );
}

// ---------------------------------------------------------------------------
// 2. Uniqueness and separation
// ---------------------------------------------------------------------------

#[test]
fn hash_domain_all_unique_bytes() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        assert!(
            seen.insert(domain.as_bytes()),
            "duplicate domain bytes: {domain:?}"
        );
    }
}

#[test]
fn same_bytes_under_different_domains_differ() {
    let data = b"{}";
    let digests: BTreeSet<ContentHash> = HashDomain::ALL
        .iter()
        .map(|domain| canonical_hash(*domain, data))
        .collect();
    assert_eq!(digests.len(), HashDomain::ALL.len());
}

#[test]
fn digest_string_form_parses_back() {
    let digest = canonical_hash(HashDomain::PlanReport, b"report");
    let text = digest.to_string();
    assert!(text.starts_with("sha256:"));
    assert_eq!(text.len(), "sha256:".len() + 64);
    assert_eq!(ContentHash::parse(&text), Some(digest));
    assert_eq!(ContentHash::parse("md5:00"), None);
}

// ---------------------------------------------------------------------------
// 3. Wire format
// ---------------------------------------------------------------------------

#[test]
fn hash_domain_all_follow_naming_convention() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(
            bytes.starts_with(b"ROOMPLAN::"),
            "{domain:?} does not start with ROOMPLAN::"
        );
        assert!(
            bytes.ends_with(b"::V1\0"),
            "{domain:?} does not end with ::V1\\0"
        );
    }
}

// ---------------------------------------------------------------------------
// 4. No raw ROOMPLAN:: domain literals in production source
// ---------------------------------------------------------------------------

/// Scan kernel/, search/, harness/ source for `b"ROOMPLAN::` literals.
/// The only file allowed to contain them is `hash.rs`.
#[test]
fn no_raw_domain_literals_outside_authority() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let production_dirs = ["kernel/src", "search/src", "harness/src"];

    let pattern = "b\"ROOMPLAN::";
    let authority_file = "hash.rs";
    let mut violations = Vec::new();

    for dir in production_dirs {
        scan_dir_for_pattern(&root.join(dir), pattern, authority_file, &mut violations);
    }

    assert!(
        violations.is_empty(),
        "raw ROOMPLAN:: domain literals found outside {authority_file}:\n{}",
        violations.join("\n")
    );
}

fn scan_dir_for_pattern(
    dir: &Path,
    pattern: &str,
    authority_file: &str,
    violations: &mut Vec<String>,
) {
    for path in walkdir(dir) {
        if path.extension().and_then(|e| e.to_str()) != Some("rs") {
            continue;
        }
        if path.file_name().and_then(|n| n.to_str()) == Some(authority_file) {
            continue;
        }
        let Ok(content) = std::fs::read_to_string(&path) else {
            continue;
        };

        // Skip #[cfg(test)] module blocks via brace-depth tracking.
        let mut brace_depth: usize = 0;
        let mut skip_depth: Option<usize> = None;
        let mut cfg_test_pending = false;

        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim();

            if trimmed.contains("#[cfg(test)]") {
                cfg_test_pending = true;
                continue;
            }

            let opens = line.chars().filter(|&c| c == '{').count();
            let closes = line.chars().filter(|&c| c == '}').count();

            if cfg_test_pending && opens > 0 {
                skip_depth = Some(brace_depth);
                cfg_test_pending = false;
            }

            brace_depth = brace_depth.saturating_add(opens);
            brace_depth = brace_depth.saturating_sub(closes);

            if let Some(depth) = skip_depth {
                if brace_depth <= depth {
                    skip_depth = None;
                }
                continue;
            }

            if trimmed.starts_with("//") {
                continue;
            }

            if trimmed.contains(pattern) {
                violations.push(format!("  {}:{}: {}", path.display(), i + 1, trimmed));
            }
        }
    }
}

/// Simple recursive directory walker (avoids adding walkdir dependency).
fn walkdir(dir: &Path) -> Vec<PathBuf> {
    let mut results = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                results.extend(walkdir(&path));
            } else {
                results.push(path);
            }
        }
    }
    results
}
