//! Effective generation scope: the operations an allowlist keeps.

use indexmap::IndexSet;
use slimgen_manifest::{PathAllowlist, PathPattern};

use crate::document::Operation;

/// Operations retained by a [`PathAllowlist`], in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectiveScope {
    operations: Vec<Operation>,
    total: usize,
}

impl EffectiveScope {
    /// Keep every operation whose path matches at least one pattern.
    ///
    /// Matching is by path only; tags and shared resources never pull in
    /// extra operations.
    pub fn resolve<'a>(
        allowlist: &PathAllowlist,
        operations: impl IntoIterator<Item = &'a Operation>,
    ) -> Self {
        let mut total = 0;
        let operations = operations
            .into_iter()
            .inspect(|_| total += 1)
            .filter(|op| allowlist.matches(&op.path))
            .cloned()
            .collect();

        Self { operations, total }
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Number of operations considered.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Distinct request paths in scope.
    pub fn paths(&self) -> Vec<&str> {
        self.operations
            .iter()
            .map(|op| op.path.as_str())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    /// Patterns that matched nothing; usually a typo in the allowlist.
    pub fn unmatched<'a>(&self, allowlist: &'a PathAllowlist) -> Vec<&'a PathPattern> {
        allowlist
            .iter()
            .filter(|p| !self.operations.iter().any(|op| p.matches(&op.path)))
            .collect()
    }
}

/// Human-readable list of patterns for messages.
pub fn describe_patterns(allowlist: &PathAllowlist) -> String {
    allowlist
        .iter()
        .map(PathPattern::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ops(paths: &[&str]) -> Vec<Operation> {
        paths.iter().map(|p| Operation::new("get", *p)).collect()
    }

    #[test]
    fn test_recursive_pattern_scope() {
        let allowlist = PathAllowlist::parse(["/a/b/**"]).unwrap();
        let operations = ops(&["/a/b/c", "/a/x"]);

        let scope = EffectiveScope::resolve(&allowlist, &operations);

        assert_eq!(scope.paths(), vec!["/a/b/c"]);
        assert_eq!(scope.total(), 2);
    }

    #[test]
    fn test_prefix_includes_all_descendants_and_nothing_else() {
        let allowlist = PathAllowlist::parse(["/users/**"]).unwrap();
        let operations = ops(&[
            "/users",
            "/users/{user-id}",
            "/users/{user-id}/messages/{message-id}",
            "/usersettings",
            "/groups/{group-id}/members",
            "/me",
        ]);

        let scope = EffectiveScope::resolve(&allowlist, &operations);

        assert_eq!(
            scope.paths(),
            vec![
                "/users",
                "/users/{user-id}",
                "/users/{user-id}/messages/{message-id}"
            ]
        );
        for op in scope.operations() {
            assert!(op.path.starts_with("/users"));
        }
    }

    #[test]
    fn test_same_resource_other_method_not_special() {
        let allowlist = PathAllowlist::parse(["/me"]).unwrap();
        let operations = vec![
            Operation::new("get", "/me"),
            Operation::new("patch", "/me"),
            Operation::new("get", "/me/photo"),
        ];

        let scope = EffectiveScope::resolve(&allowlist, &operations);

        assert_eq!(scope.len(), 2);
        assert_eq!(scope.paths(), vec!["/me"]);
    }

    #[test]
    fn test_paths_distinct_for_interleaved_operations() {
        let allowlist = PathAllowlist::parse(["/me/**"]).unwrap();
        let operations = vec![
            Operation::new("get", "/me"),
            Operation::new("get", "/me/photo"),
            Operation::new("patch", "/me"),
        ];

        let scope = EffectiveScope::resolve(&allowlist, &operations);

        assert_eq!(scope.len(), 3);
        assert_eq!(scope.paths(), vec!["/me", "/me/photo"]);
    }

    #[test]
    fn test_zero_matches() {
        let allowlist = PathAllowlist::parse(["/nothing/**", "/a/**"]).unwrap();
        let operations = ops(&["/a/b", "/c"]);

        let scope = EffectiveScope::resolve(&allowlist, &operations);

        let unmatched: Vec<&str> = scope
            .unmatched(&allowlist)
            .into_iter()
            .map(PathPattern::as_str)
            .collect();
        assert_eq!(unmatched, vec!["/nothing/**"]);

        let empty = EffectiveScope::resolve(&PathAllowlist::parse(["/z/**"]).unwrap(), &operations);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_describe_patterns() {
        let allowlist = PathAllowlist::parse(["/me/**", "/users"]).unwrap();
        assert_eq!(describe_patterns(&allowlist), "/me/**, /users");
    }
}
