//! Verb lexicons for list-item classification.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Verbs that commonly open an imperative list item in technical writing.
pub static IMPERATIVE_VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "install", "run", "click", "open", "create", "delete", "update", "configure", "set", "add",
        "remove", "enable", "disable", "start", "stop", "restart", "build", "deploy", "test", "check",
        "verify", "select", "enter", "type", "copy", "paste", "navigate", "go", "use", "download",
        "upload", "import", "export", "save", "load", "read", "write", "connect", "disconnect", "log",
        "sign", "submit", "cancel", "confirm", "accept", "reject", "approve", "deny", "allow",
        "block", "grant", "revoke", "assign", "unassign", "close", "send", "receive", "define",
        "declare", "initialize", "call", "invoke", "return", "pass", "throw", "catch", "handle",
        "validate", "parse", "format", "convert", "transform", "merge", "split", "sort", "filter",
        "map", "reduce", "bind", "attach", "detach", "mount", "unmount", "render", "fetch", "push",
        "pull", "commit", "clone", "fork", "publish", "subscribe", "unsubscribe", "register",
        "deregister", "wrap", "unwrap", "encode", "decode", "encrypt", "decrypt", "compress",
        "decompress", "scroll", "drag", "drop", "hover", "focus", "blur", "toggle", "switch", "swap",
        "reset", "clear", "flush", "purge", "refresh", "reload", "retry", "skip", "abort", "pause",
        "resume", "lock", "unlock", "pin", "unpin", "archive", "restore", "backup", "migrate",
        "upgrade", "downgrade", "patch", "debug", "trace", "monitor", "profile", "benchmark", "audit",
        "scan", "lint", "specify", "ensure", "include", "exclude", "extend", "override", "implement",
        "annotate", "tag", "label", "name", "list", "describe", "show", "display", "print", "output",
        "note", "document", "comment", "mark", "highlight", "flag", "indicate", "point", "reference",
        "link", "embed", "insert", "append", "prepend", "inject", "eject", "require", "need", "want",
        "expect", "assert", "assume",
    ]
    .into_iter()
    .collect()
});

/// Auxiliaries and modals that mark a capitalized first word as a subject.
pub static AUXILIARY_VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "is", "are", "was", "were", "has", "have", "had", "can", "could", "will", "would",
        "should", "may", "might", "must", "shall", "do", "does", "did", "need", "needs",
    ]
    .into_iter()
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imperative_lookup() {
        assert!(IMPERATIVE_VERBS.contains("install"));
        assert!(IMPERATIVE_VERBS.contains("configure"));
        assert!(!IMPERATIVE_VERBS.contains("the"));
        assert_eq!(IMPERATIVE_VERBS.len(), 181);
    }

    #[test]
    fn auxiliary_lookup() {
        assert!(AUXILIARY_VERBS.contains("should"));
        assert!(!AUXILIARY_VERBS.contains("run"));
    }
}
