//! Lexical scope tracking during traversal.

use ccg_core::graph::MODULE_SCOPE;

/// Stack of enclosing declaration names. The bottom frame is always the
/// module sentinel, so [`ScopeStack::current`] never fails.
#[derive(Debug, Clone)]
pub struct ScopeStack {
    frames: Vec<String>,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self {
            frames: vec![MODULE_SCOPE.to_string()],
        }
    }
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a declaration's own (unqualified) name.
    pub fn enter(&mut self, name: &str) {
        self.frames.push(name.to_string());
    }

    /// Pop the innermost declaration. The module frame is never popped.
    pub fn exit(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// The caller to attribute a call to at this point of the traversal.
    pub fn current(&self) -> &str {
        self.frames.last().map_or(MODULE_SCOPE, String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_module_scope() {
        let scope = ScopeStack::new();
        assert_eq!(scope.current(), "<module>");
    }

    #[test]
    fn test_nested_enter_exit() {
        let mut scope = ScopeStack::new();
        scope.enter("outer");
        scope.enter("inner");
        assert_eq!(scope.current(), "inner");
        scope.exit();
        assert_eq!(scope.current(), "outer");
        scope.exit();
        assert_eq!(scope.current(), "<module>");
    }

    #[test]
    fn test_exit_keeps_module_frame() {
        let mut scope = ScopeStack::new();
        scope.exit();
        assert_eq!(scope.current(), "<module>");
        scope.enter("f");
        assert_eq!(scope.current(), "f");
    }
}
