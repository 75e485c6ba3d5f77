//! Conversions from optional wire values to resolved internal values.
//!
//! None of these fail. An unrecognized name resolves to the table default,
//! so a caller that sent garbage cannot be told apart from a caller that
//! asked for the default.

use crate::types::{CompressionKind, ListOptions, PullPolicy};
use podview_core::PsOpts;

pub const COMPRESSION_NAMES: &[(&str, CompressionKind)] = &[
    ("bzip2", CompressionKind::Bzip2),
    ("gzip", CompressionKind::Gzip),
    ("xz", CompressionKind::Xz),
];

pub const DEFAULT_COMPRESSION: CompressionKind = CompressionKind::Uncompressed;

pub const PULL_POLICY_NAMES: &[(&str, PullPolicy)] = &[
    ("pullifmissing", PullPolicy::PullIfMissing),
    ("pullalways", PullPolicy::PullAlways),
    ("pullnever", PullPolicy::PullNever),
];

pub const DEFAULT_PULL_POLICY: PullPolicy = PullPolicy::PullIfMissing;

pub fn unwrap_or_default<T: Default>(value: Option<T>) -> T {
    value.unwrap_or_default()
}

fn lookup<T: Copy>(table: &[(&str, T)], name: &str, default: T) -> T {
    table
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|(_, kind)| *kind)
        .unwrap_or(default)
}

pub fn compression_from_name(name: &str) -> CompressionKind {
    lookup(COMPRESSION_NAMES, name, DEFAULT_COMPRESSION)
}

pub fn pull_policy_from_name(name: &str) -> PullPolicy {
    lookup(PULL_POLICY_NAMES, name, DEFAULT_PULL_POLICY)
}

/// Resolves wire listing options. Size and namespace reporting are always
/// enabled; the wire values for them are ignored.
pub fn coerce_list_options(opts: PsOpts) -> ListOptions {
    ListOptions {
        all: opts.all,
        last: unwrap_or_default(opts.last),
        latest: unwrap_or_default(opts.latest),
        no_trunc: unwrap_or_default(opts.no_trunc),
        pod: unwrap_or_default(opts.pod),
        size: true,
        sort: unwrap_or_default(opts.sort),
        namespace: true,
        sync: unwrap_or_default(opts.sync),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_bool() {
        assert!(!unwrap_or_default(None::<bool>));
        assert!(unwrap_or_default(Some(true)));
        assert!(!unwrap_or_default(Some(false)));
    }

    #[test]
    fn test_unwrap_string() {
        assert_eq!(unwrap_or_default(None::<String>), "");
        assert_eq!(unwrap_or_default(Some("created".to_string())), "created");
    }

    #[test]
    fn test_compression_is_case_insensitive() {
        for name in ["gzip", "GZIP", "GzIp"] {
            assert_eq!(compression_from_name(name), CompressionKind::Gzip);
        }
        assert_eq!(compression_from_name("BZip2"), CompressionKind::Bzip2);
        assert_eq!(compression_from_name("xz"), CompressionKind::Xz);
    }

    #[test]
    fn test_compression_unknown_is_uncompressed() {
        assert_eq!(compression_from_name("unknown"), CompressionKind::Uncompressed);
        assert_eq!(compression_from_name(""), CompressionKind::Uncompressed);
        assert_eq!(compression_from_name("gzip "), CompressionKind::Uncompressed);
        assert_eq!(compression_from_name("zstd"), CompressionKind::Uncompressed);
    }

    #[test]
    fn test_pull_policy_names() {
        assert_eq!(pull_policy_from_name("PULLNEVER"), PullPolicy::PullNever);
        assert_eq!(pull_policy_from_name("PullAlways"), PullPolicy::PullAlways);
        assert_eq!(pull_policy_from_name("pullifmissing"), PullPolicy::PullIfMissing);
        assert_eq!(pull_policy_from_name("pull-never"), PullPolicy::PullIfMissing);
        assert_eq!(pull_policy_from_name("bogus"), PullPolicy::PullIfMissing);
    }

    #[test]
    fn test_invalid_name_is_indistinguishable_from_default() {
        assert_eq!(pull_policy_from_name(""), pull_policy_from_name("PullIfMissing"));
        assert_eq!(compression_from_name("\u{0}garbled"), compression_from_name("uncompressed"));
    }

    #[test]
    fn test_display_names_parse_back() {
        for (_, kind) in COMPRESSION_NAMES {
            assert_eq!(compression_from_name(&kind.to_string()), *kind);
        }
        for (_, policy) in PULL_POLICY_NAMES {
            assert_eq!(pull_policy_from_name(&policy.to_string()), *policy);
        }
    }

    #[test]
    fn test_list_options_defaults() {
        let opts = coerce_list_options(PsOpts::default());
        assert_eq!(
            opts,
            ListOptions {
                all: false,
                last: 0,
                latest: false,
                no_trunc: false,
                pod: false,
                size: true,
                sort: String::new(),
                namespace: true,
                sync: false,
            }
        );
    }

    #[test]
    fn test_list_options_forces_size_and_namespace() {
        let opts = coerce_list_options(PsOpts {
            size: Some(false),
            namespace: Some(false),
            ..Default::default()
        });
        assert!(opts.size);
        assert!(opts.namespace);
    }

    #[test]
    fn test_list_options_carries_caller_values() {
        let opts = coerce_list_options(PsOpts {
            all: true,
            last: Some(5),
            latest: Some(true),
            no_trunc: Some(true),
            pod: Some(true),
            sort: Some("names".to_string()),
            sync: Some(true),
            ..Default::default()
        });
        assert!(opts.all);
        assert_eq!(opts.last, 5);
        assert!(opts.latest);
        assert!(opts.no_trunc);
        assert!(opts.pod);
        assert_eq!(opts.sort, "names");
        assert!(opts.sync);
    }
}
