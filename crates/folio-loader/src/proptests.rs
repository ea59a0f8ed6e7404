//! Property-based tests for batch coalescing.
