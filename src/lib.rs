//! Workspace-level integration tests for PaceCalc live in `tests/`.
