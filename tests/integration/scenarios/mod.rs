//! End-to-end conversation scenarios
